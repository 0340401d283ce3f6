// crates/core/src/lib.rs

//! Core of the IDE agent router: model client abstraction, the Groq
//! client, request/response types and the pure pipeline stages
//! (marker splitting, query composition, result assembly).

pub mod ai_client;
pub mod assembler;
pub mod composer;
pub mod error;
pub mod groq_client;
pub mod markers;
pub mod types;

pub use error::{PipelineError, Result};
