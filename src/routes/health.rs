use rocket::serde::json::Json;
use rocket::State;

use crate::health::{self, BootTime, HealthReport};

#[get("/health")]
pub fn health_check(boot: &State<BootTime>) -> Json<HealthReport> {
    Json(health::report(boot.inner()))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![health_check]
}
