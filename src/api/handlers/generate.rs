// src/api/handlers/generate.rs
use actix_web::{HttpResponse, Result, web};
use uuid::Uuid;

use crate::api::AppState;
use crate::errors::GenError;
use crate::generation;
use crate::models::{ErrorResponse, GenerationRequest};

/// `POST /generate` — the single request-handling boundary.
///
/// Every fatal error is converted here into a status plus an `{error}`
/// payload; detailed diagnostics stay in the server logs. No partial
/// results: the body is either a full `GenerationResult` or an error.
pub async fn generate(
    state: web::Data<AppState>,
    req: web::Json<GenerationRequest>,
) -> Result<HttpResponse> {
    let request_id = Uuid::new_v4().to_string();
    let req = req.into_inner();

    match generation::run_generation(state.provider.as_ref(), &req).await {
        Ok(result) => {
            log::info!(
                "generation {} succeeded with {} test case(s)",
                request_id,
                result.test_cases.len()
            );
            Ok(HttpResponse::Ok().json(result))
        }
        Err(GenError::InvalidInput(message)) => {
            log::info!("generation {} rejected: {}", request_id, message);
            Ok(HttpResponse::BadRequest().json(ErrorResponse { error: message }))
        }
        Err(GenError::MalformedResponse { source, raw }) => {
            // The raw model output is logged for diagnosis, never returned.
            log::error!(
                "generation {} returned unparseable JSON: {}; raw output: {}",
                request_id,
                source,
                raw
            );
            Ok(HttpResponse::InternalServerError().json(ErrorResponse {
                error: "AI generation failed.".to_string(),
            }))
        }
        Err(e) => {
            log::error!("generation {} provider failure: {}", request_id, e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse {
                error: "AI generation failed.".to_string(),
            }))
        }
    }
}
