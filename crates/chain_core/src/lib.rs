//! chain_core - Core types for the chain system
//!
//! This crate provides the foundational types used across all chain-related
//! crates:
//! - `message` - Role and Message chat types
//! - `prompt` - PromptTemplate and placeholder substitution
//! - `config` - process-wide configuration loaded once at startup

pub mod config;
pub mod message;
pub mod prompt;

// Re-export commonly used types
pub use config::Config;
pub use message::{Message, Role};
pub use prompt::{PromptTemplate, TemplateError};
