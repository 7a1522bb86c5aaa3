// Proposal text analysis.
// Pure pipeline (tokenizer, keywords, readability, suggestions) plus one
// network-bound step (sentiment), composed by the orchestrator.
// All model calls go through llm_client.

pub mod cache;
pub mod handlers;
pub mod keywords;
pub mod orchestrator;
pub mod prompts;
pub mod readability;
pub mod sentiment;
pub mod suggestions;
pub mod tokenizer;
