// Post-interview analysis: transcript → model → envelope → backend.
// All model calls go through llm_client::TextModel.

pub mod analyzer;
pub mod dispatcher;
pub mod envelope;
pub mod prompts;
pub mod report;
