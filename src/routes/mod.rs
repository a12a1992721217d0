pub mod creative;
pub mod health;

pub fn routes() -> Vec<rocket::Route> {
    let mut routes = creative::routes();
    routes.extend(health::routes());
    routes.extend(crate::cors::routes());
    routes
}
