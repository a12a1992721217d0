use rocket::serde::json::Json;

use crate::creative::analyze::{self, ContextAnalysis};
use crate::creative::{parse_payload, RequestProcessingError};

// ── Context Analysis ──────────────────────────────────

#[post("/analyze-context", data = "<body>")]
pub fn analyze_context(
    body: Result<String, std::io::Error>,
) -> Result<Json<ContextAnalysis>, RequestProcessingError> {
    let result = body
        .map_err(RequestProcessingError::from)
        .and_then(|raw| parse_payload(&raw))
        .and_then(|payload| analyze::analyze_payload(&payload));
    match result {
        Ok(analysis) => {
            log::debug!(
                "Context analysis: {} industry / {} audience insight(s)",
                analysis.industry_insights.len(),
                analysis.audience_insights.len()
            );
            Ok(Json(analysis))
        }
        Err(e) => {
            log::warn!("Context analysis failed: {}", e);
            Err(e)
        }
    }
}
