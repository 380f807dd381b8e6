use crate::models::CreatePollRequest;

pub const MIN_OPTIONS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Question and at least {MIN_OPTIONS} options are required.")]
    MissingQuestionOrOptions,
    #[error("At least {MIN_OPTIONS} non-empty options are required.")]
    TooFewOptions,
}

/// A create request that passed validation: trimmed question, non-blank
/// trimmed options in their original order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPoll {
    pub question: String,
    pub options: Vec<String>,
}

pub fn validate_poll_request(request: &CreatePollRequest) -> Result<NewPoll, ValidationError> {
    let question = request.question.trim();
    if question.is_empty() || request.options.len() < MIN_OPTIONS {
        return Err(ValidationError::MissingQuestionOrOptions);
    }

    let options: Vec<String> = request.options.iter()
        .map(|opt| opt.trim())
        .filter(|opt| !opt.is_empty())
        .map(str::to_string)
        .collect();

    if options.len() < MIN_OPTIONS { return Err(ValidationError::TooFewOptions); }

    Ok(NewPoll {
        question: question.to_string(),
        options,
    })
}
