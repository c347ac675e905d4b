// Public contracts for the tutorlog API
// This crate defines the DTOs for the JSON surface (event ingestion + health)

pub mod event;

pub use event::*;
