#[macro_use]
extern crate rocket;

use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{Build, Request, Rocket};
use serde_json::{json, Value};

mod boot;
mod config;
mod cors;
mod creative;
mod health;
mod routes;

use config::ServiceConfig;

#[catch(404)]
fn not_found() -> Json<Value> {
    Json(json!({"success": false, "error": "Not found"}))
}

#[catch(500)]
fn server_error() -> Json<Value> {
    Json(json!({"success": false, "error": "Internal server error"}))
}

#[catch(default)]
fn default_catcher(status: Status, _req: &Request<'_>) -> (Status, Json<Value>) {
    let reason = status.reason().unwrap_or("Request failed");
    (status, Json(json!({"success": false, "error": reason})))
}

/// Mount everything on `rocket`, reading service settings from its figment.
pub fn build(rocket: Rocket<Build>) -> Rocket<Build> {
    let config = ServiceConfig::from_figment(rocket.figment());
    boot::run(&config);

    let api_base = config.api_base.clone();
    let cors = cors::Cors { allow_origin: config.cors_origin.clone() };

    rocket
        .manage(health::BootTime::now())
        .attach(cors)
        .mount(api_base.as_str(), routes::routes())
        .register("/", catchers![not_found, server_error, default_catcher])
}

#[launch]
fn rocket() -> _ {
    env_logger::init();
    build(rocket::build())
}
