// src/banner.rs

/// Prints the application startup banner to the console.
pub fn print_banner() {
    // Using a raw string literal for the multi-line banner
    let banner = r#"
                             __
  ___ __ _ ___  ___         / _| ___  _ __ __ _  ___
 / __/ _` / __|/ _ \       | |_ / _ \| '__/ _` |/ _ \
| (_| (_| \__ \  __/       |  _| (_) | | | (_| |  __/
 \___\__,_|___/\___|       |_|  \___/|_|  \__, |\___|
                                          |___/

    AI QA Test Case & Playwright Generator
"#;
    println!("{}", banner);
}
