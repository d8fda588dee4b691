//! Completion Client: everything that talks to the LLM provider

pub mod client;
pub mod prompt_builder;
pub mod provider;

// Re-export main types for convenience
pub use client::LlmClient;
pub use provider::CompletionProvider;
