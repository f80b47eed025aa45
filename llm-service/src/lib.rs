//! LLM service for the Fait AI proxy.
//!
//! Wraps the OpenAI chat-completions API behind a small client with
//! env-driven configuration, unified error types, and the prompt-assembly
//! logic for the AI coach persona.

pub mod config;
pub mod error_handler;
pub mod prompt;
pub mod services;
