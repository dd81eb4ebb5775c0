//! web_service - HTTP layer exposing named chains.
//!
//! Deserializes a JSON request body into pipeline input, serializes the
//! pipeline output back to JSON, and maps each pipeline error kind to a
//! status code. It knows nothing about prompts or models beyond the
//! `TextPipeline::invoke` contract.

pub mod controllers;
pub mod dto;
pub mod error;
pub mod server;

pub use error::AppError;
pub use server::{app_config, AppState};
