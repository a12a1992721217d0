pub mod analyze;
pub mod generate;
pub mod options;

// ── Route Registration ────────────────────────────────

pub fn routes() -> Vec<rocket::Route> {
    routes![
        generate::generate_creative,
        generate::generate_creative_images,
        analyze::analyze_context,
        options::creative_options,
    ]
}
