// Proposal drafting, history and export.
// Drafting goes through llm_client; history lives in Postgres.

pub mod drafting;
pub mod export;
pub mod handlers;
pub mod history;
pub mod prompts;
