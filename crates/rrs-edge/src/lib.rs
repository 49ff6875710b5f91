//! Embedding edge service
//!
//! A stateless, network-facing request handler bridging search clients to
//! the external embedding model API. Receives raw text, validates it,
//! forwards it to Gemini's `embedContent` endpoint, validates the returned
//! vector's dimensionality, and returns either `{ "embedding": [...] }` or
//! a structured `{ "error", "details" }` body with a non-success status.
//!
//! Runs independently of the clients; they only depend on its
//! request/response contract. No authentication boundary is enforced at
//! this layer and CORS is permissive.

use rocket::{Build, Rocket, routes};

pub mod config;
pub mod cors;
pub mod gemini;
pub mod handlers;

pub use config::EdgeConfig;
pub use gemini::GeminiClient;

use rrs_domain::error::Result;

/// Shared request-handler state
pub struct EdgeState {
    /// Client for the upstream embedding model API
    pub gemini: GeminiClient,
}

/// Build the Rocket application from a loaded configuration
pub fn rocket(config: &EdgeConfig) -> Result<Rocket<Build>> {
    let gemini = GeminiClient::from_config(&config.gemini)?;
    Ok(rocket_with_client(config, gemini))
}

/// Build the Rocket application with an explicit upstream client
///
/// Split out so tests can point the client at a mock upstream.
pub fn rocket_with_client(config: &EdgeConfig, gemini: GeminiClient) -> Rocket<Build> {
    let figment = rocket::Config::figment()
        .merge(("address", config.server.host.clone()))
        .merge(("port", config.server.port));

    rocket::build()
        .configure(figment)
        .manage(EdgeState { gemini })
        .mount(
            "/",
            routes![handlers::generate_embedding, handlers::preflight],
        )
        .register(
            "/",
            rocket::catchers![handlers::bad_request, handlers::not_found, handlers::internal_error],
        )
        .attach(cors::Cors)
}
