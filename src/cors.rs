use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::Header;
use rocket::{Request, Response};

/// Adds CORS headers to every response so browser frontends on other origins can call the API.
pub struct Cors {
    pub allow_origin: String,
}

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info { name: "CORS Headers", kind: Kind::Response }
    }

    async fn on_response<'r>(&self, _req: &'r Request<'_>, res: &mut Response<'r>) {
        res.set_header(Header::new("Access-Control-Allow-Origin", self.allow_origin.clone()));
        res.set_header(Header::new("Access-Control-Allow-Headers", "Content-Type"));
        res.set_header(Header::new("Access-Control-Allow-Methods", "GET, POST, OPTIONS"));
    }
}

/// Preflight. Headers come from the fairing.
#[options("/<_..>")]
pub fn preflight() {}

pub fn routes() -> Vec<rocket::Route> {
    routes![preflight]
}
