//! CORS Fairing
//!
//! Adds permissive cross-origin headers to every response so browser
//! clients can call the edge function directly. The allowed header list
//! matches the backend SDK's invoke headers.

use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::Header;
use rocket::{Request, Response};

/// The header list browser clients send with function invocations
pub const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// CORS Fairing for Rocket
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "CORS Headers",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new("Access-Control-Allow-Headers", ALLOWED_HEADERS));
    }
}
