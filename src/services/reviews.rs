use crate::domain::models::SessionState;
use crate::page::{PageError, RenderedNode, REVIEWER_NAME_ID, REVIEWS_SECTION_ID, REVIEW_MESSAGE_ID};
use crate::services::notify::Level;
use crate::services::settings::Settings;

pub const MISSING_FIELDS_PROMPT: &str = "Please fill out both fields.";

#[derive(Debug, PartialEq)]
pub enum SubmitOutcome {
    Posted(RenderedNode),
    MissingFields,
}

/// Reads the two review inputs and either appends a testimonial node to the
/// reviews section (clearing both inputs) or rejects the submission with a
/// validation notice. A rejection mutates nothing: the non-empty field keeps
/// its text.
pub fn submit_review(
    state: &mut SessionState,
    settings: &Settings,
) -> Result<SubmitOutcome, PageError> {
    let name = state.page.input_value(REVIEWER_NAME_ID)?.to_string();
    let message = state.page.input_value(REVIEW_MESSAGE_ID)?.to_string();

    let (name, message) = if settings.review.trim_fields {
        (name.trim().to_string(), message.trim().to_string())
    } else {
        (name, message)
    };

    if name.is_empty() || message.is_empty() {
        state.notices.post(Level::Warning, MISSING_FIELDS_PROMPT);
        return Ok(SubmitOutcome::MissingFields);
    }

    let entry = RenderedNode {
        class: "testimony".to_string(),
        text: format!("\"{}\" – {}", message, name),
    };
    state.page.append_child(REVIEWS_SECTION_ID, entry.clone())?;
    state.page.set_input(REVIEWER_NAME_ID, "")?;
    state.page.set_input(REVIEW_MESSAGE_ID, "")?;
    Ok(SubmitOutcome::Posted(entry))
}
