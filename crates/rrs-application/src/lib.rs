//! Application layer for Restaurant Review Search
//!
//! Owns the search session state machine that sequences embedding
//! generation and hybrid retrieval, and publishes observable state
//! snapshots for a renderer.

pub mod session;

pub use session::SearchSession;
