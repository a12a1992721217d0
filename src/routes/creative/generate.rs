use rocket::serde::json::Json;

use crate::creative::profile::{self, CreativeProfile};
use crate::creative::{self, CreativeResponse, RequestProcessingError};

type Body = Result<String, std::io::Error>;

fn respond(
    profile: &CreativeProfile,
    body: Body,
) -> Result<Json<CreativeResponse>, RequestProcessingError> {
    let result = body
        .map_err(RequestProcessingError::from)
        .and_then(|raw| creative::handle_creative_body(profile, &raw));
    match result {
        Ok(resp) => Ok(Json(resp)),
        Err(e) => {
            log::warn!("Creative generation ({}) failed: {}", profile.name, e);
            Err(e)
        }
    }
}

// ── Campaign Creatives ────────────────────────────────

#[post("/generate-creative", data = "<body>")]
pub fn generate_creative(body: Body) -> Result<Json<CreativeResponse>, RequestProcessingError> {
    respond(&profile::CAMPAIGN, body)
}

// ── Image-Ready Creatives ─────────────────────────────

#[post("/generate-creative-images", data = "<body>")]
pub fn generate_creative_images(
    body: Body,
) -> Result<Json<CreativeResponse>, RequestProcessingError> {
    respond(&profile::IMAGE, body)
}
