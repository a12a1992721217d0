use rocket::serde::json::Json;
use serde_json::{json, Value};

use crate::creative::profile;
use crate::creative::{MessagingAngle, VariationKind, VisualTheme};

// ── Options Catalog ───────────────────────────────────

/// Everything a frontend needs to populate its angle/theme selectors.
#[get("/creative-options")]
pub fn creative_options() -> Json<Value> {
    let variations: Vec<Value> = VariationKind::ALL
        .iter()
        .map(|k| {
            json!({
                "id": k.key(),
                "title": k.title(),
                "description": k.description(),
            })
        })
        .collect();

    Json(json!({
        "success": true,
        "messaging_angles": MessagingAngle::ALL,
        "visual_themes": VisualTheme::ALL,
        "variation_kinds": variations,
        "profiles": profile::all(),
    }))
}
