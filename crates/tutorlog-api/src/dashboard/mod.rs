// Password-gated dashboard over the event store
// Decision: stateless sessions; the expected token is re-derived from the
// shared secret on every request, nothing is stored server-side

pub mod templates;
pub mod token;
pub mod views;

pub use views::{routes, AppState};
