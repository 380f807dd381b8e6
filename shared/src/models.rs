use serde::{Serialize, Deserialize};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PollOption {
    pub id: usize,
    pub text: String,
    pub votes: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Poll {
    pub id: Uuid,
    pub question: String,
    pub options: Vec<PollOption>,
    pub total_votes: u64,
    pub closed: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// A poll as seen by one voter: the full poll plus that voter's ballot, if any.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PollView {
    #[serde(flatten)]
    pub poll: Poll,
    pub has_voted: bool,
    pub voted_option_id: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PollSummary {
    pub id: Uuid,
    pub question: String,
    pub total_votes: u64,
    pub closed: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub option_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OptionResult {
    pub id: usize,
    pub text: String,
    pub votes: u64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PollResults {
    pub id: Uuid,
    pub question: String,
    pub options: Vec<OptionResult>,
    pub total_votes: u64,
    pub closed: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreatePollRequest {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
}

/// `option_id` stays optional and signed so a missing or negative index can be
/// reported precisely instead of failing deserialization.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequest {
    pub option_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthStatus {
    pub status: String,
}

impl Poll {
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Sum of the per-option counters. Always equal to `total_votes`.
    pub fn tallied_votes(&self) -> u64 {
        self.options.iter().map(|o| o.votes).sum()
    }

    pub fn summary(&self) -> PollSummary {
        PollSummary {
            id: self.id,
            question: self.question.clone(),
            total_votes: self.total_votes,
            closed: self.closed,
            created_at: self.created_at,
            option_count: self.option_count(),
        }
    }

    pub fn view_for(self, voted_option_id: Option<usize>) -> PollView {
        PollView {
            poll: self,
            has_voted: voted_option_id.is_some(),
            voted_option_id,
        }
    }
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self { status: "ok".into() }
    }
}
