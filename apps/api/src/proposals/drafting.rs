//! Proposal drafting: one chat completion built from the wizard answers.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::{ChatRequest, LlmClient};
use crate::proposals::prompts::{DRAFT_SYSTEM_TEMPLATE, DRAFT_USER_PROMPT};

/// Models a caller may pick for drafting.
pub const SUPPORTED_MODELS: &[&str] = &[
    "llama3-8b-8192",
    "llama3-70b-8192",
    "gemma-7b-it",
    "gemma2-9b-it",
    "mixtral-8x7b-32768",
    "llama-3.1-70b-versatile",
    "llama-3.3-70b-versatile",
];
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

const DRAFT_TEMPERATURE: f32 = 0.7;
const DRAFT_MAX_TOKENS: u32 = 400;

/// Answers collected by the step wizard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub profession: String,
    pub job_description: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub personal_touch: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DraftRequest {
    pub user_info: UserInfo,
    pub ai_model: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Draft {
    pub proposal: String,
    pub ai_model: String,
}

/// Picks the drafting model; absent means the default, unknown is rejected.
pub fn resolve_model(requested: Option<&str>) -> Result<&'static str, AppError> {
    let Some(requested) = requested.map(str::trim).filter(|m| !m.is_empty()) else {
        return Ok(DEFAULT_MODEL);
    };
    SUPPORTED_MODELS
        .iter()
        .find(|m| **m == requested)
        .copied()
        .ok_or_else(|| AppError::Validation(format!("Unsupported ai_model '{requested}'")))
}

pub fn validate_user_info(info: &UserInfo) -> Result<(), AppError> {
    if info.profession.trim().is_empty() {
        return Err(AppError::Validation("profession cannot be empty".to_string()));
    }
    if info.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }
    Ok(())
}

pub fn build_system_prompt(info: &UserInfo) -> String {
    DRAFT_SYSTEM_TEMPLATE
        .replace("{profession}", info.profession.trim())
        .replace("{job_description}", info.job_description.trim())
        .replace("{experience}", info.experience.trim())
        .replace("{personal_touch}", info.personal_touch.trim())
}

/// Drafts a proposal. Uses the client's bounded retry; an empty answer is an error.
pub async fn draft_proposal(llm: &LlmClient, request: &DraftRequest) -> Result<Draft, AppError> {
    validate_user_info(&request.user_info)?;
    let model = resolve_model(request.ai_model.as_deref())?;
    let system = build_system_prompt(&request.user_info);

    let proposal = llm
        .call_text(&ChatRequest {
            model,
            system: &system,
            prompt: DRAFT_USER_PROMPT,
            temperature: DRAFT_TEMPERATURE,
            max_tokens: DRAFT_MAX_TOKENS,
        })
        .await
        .map_err(|e| AppError::Llm(format!("Proposal drafting failed: {e}")))?;

    info!(
        "Drafted proposal with {model} for profession '{}'",
        request.user_info.profession.trim()
    );

    Ok(Draft {
        proposal,
        ai_model: model.to_string(),
    })
}
