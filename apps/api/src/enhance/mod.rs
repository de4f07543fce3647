//! AI text enhancement for individual resume fields.
//!
//! Both operations validate input, build a prompt, make one completion call
//! and hand the model's text back untouched.

pub mod handlers;
pub mod prompts;

use crate::errors::AppError;
use crate::llm_client::{CompletionRequest, TextGenerator};
use prompts::{
    JOB_DESC_GENERATE_PROMPT, JOB_DESC_REWRITE_PROMPT, JOB_DESC_SYSTEM, SUMMARY_PROMPT,
    SUMMARY_SYSTEM,
};

/// Summaries shorter than this (after trimming) are rejected.
pub const MIN_SUMMARY_CHARS: usize = 10;

pub const SUMMARY_TOO_SHORT: &str = "Please provide content to enhance (minimum 10 characters)";
pub const JOB_DESC_MISSING_INPUT: &str =
    "Please provide either content to enhance or job title and company";
pub const SUMMARY_FAILED: &str = "Failed to enhance summary. Please try again.";
pub const JOB_DESC_FAILED: &str = "Failed to enhance job description. Please try again.";

/// A validated prompt ready for the gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct EnhancePrompt {
    pub system: &'static str,
    pub prompt: String,
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Substitutes `{key}` placeholders in a single pass over `template`.
/// Inserted values are never scanned again, so braces typed by the user
/// reach the model unchanged.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut filled = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        filled.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        let hit = values.iter().find(|(key, _)| {
            tail.strip_prefix(key)
                .is_some_and(|after| after.starts_with('}'))
        });
        match hit {
            Some((key, value)) => {
                filled.push_str(value);
                rest = &tail[key.len() + 1..];
            }
            None => {
                filled.push('{');
                rest = tail;
            }
        }
    }

    filled.push_str(rest);
    filled
}

/// Validates a professional summary and builds its rewrite prompt.
pub fn summary_prompt(user_content: Option<&str>) -> Result<EnhancePrompt, AppError> {
    let content = user_content
        .filter(|c| c.trim().chars().count() >= MIN_SUMMARY_CHARS)
        .ok_or_else(|| AppError::Validation(SUMMARY_TOO_SHORT.to_string()))?;

    Ok(EnhancePrompt {
        system: SUMMARY_SYSTEM,
        prompt: fill_template(SUMMARY_PROMPT, &[("user_content", content)]),
    })
}

/// Validates job-description input and builds either a rewrite prompt (when
/// content is given) or a generate-from-title prompt.
pub fn job_description_prompt(
    user_content: Option<&str>,
    job_title: Option<&str>,
    company: Option<&str>,
) -> Result<EnhancePrompt, AppError> {
    let prompt = match (present(user_content), present(job_title), present(company)) {
        (Some(content), _, _) => {
            fill_template(JOB_DESC_REWRITE_PROMPT, &[("user_content", content)])
        }
        (None, Some(title), Some(company)) => fill_template(
            JOB_DESC_GENERATE_PROMPT,
            &[("job_title", title), ("company", company)],
        ),
        _ => return Err(AppError::Validation(JOB_DESC_MISSING_INPUT.to_string())),
    };

    Ok(EnhancePrompt {
        system: JOB_DESC_SYSTEM,
        prompt,
    })
}

/// Sends the prompt and returns the model output verbatim.
/// Gateway failures become `AppError::Upstream` carrying `failure_message`.
pub async fn run_enhancement(
    llm: &dyn TextGenerator,
    prompt: &EnhancePrompt,
    failure_message: &str,
) -> Result<String, AppError> {
    llm.complete(CompletionRequest::new(&prompt.prompt).system(prompt.system))
        .await
        .map_err(|e| AppError::upstream(failure_message, e))
}
