use crate::models::{OptionResult, Poll, PollResults};

/// Share of `votes` in `total`, as a percentage rounded to one decimal place.
///
/// Each option is rounded on its own, so the shares of a poll need not add up
/// to exactly 100.
pub fn percentage(votes: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (votes as f64 / total as f64 * 1000.0).round() / 10.0
}

impl Poll {
    pub fn results(&self) -> PollResults {
        PollResults {
            id: self.id,
            question: self.question.clone(),
            options: self.options.iter()
                .map(|o| OptionResult {
                    id: o.id,
                    text: o.text.clone(),
                    votes: o.votes,
                    percentage: percentage(o.votes, self.total_votes),
                })
                .collect(),
            total_votes: self.total_votes,
            closed: self.closed,
            created_at: self.created_at,
        }
    }
}
