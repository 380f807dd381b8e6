#[cfg(test)]
mod tests {
    use time::OffsetDateTime;
    use uuid::Uuid;
    use crate::{
        models::{CreatePollRequest, Poll, PollOption, VoteRequest},
        tally::percentage,
        validation::{validate_poll_request, ValidationError},
        voter::VoterKey,
        ErrorCode, ErrorResponse,
    };

    fn request(question: &str, options: &[&str]) -> CreatePollRequest {
        CreatePollRequest {
            question: question.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
        }
    }

    fn poll(votes: &[u64]) -> Poll {
        Poll {
            id: Uuid::new_v4(),
            question: "Pick one".into(),
            options: votes.iter().enumerate()
                .map(|(id, &votes)| PollOption { id, text: format!("Option {id}"), votes })
                .collect(),
            total_votes: votes.iter().sum(),
            closed: false,
            created_at: OffsetDateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn test_blank_options_are_dropped() {
        let new_poll = validate_poll_request(&request("  Pick one ", &["A", " ", "B"])).unwrap();
        assert_eq!(new_poll.question, "Pick one");
        assert_eq!(new_poll.options, vec!["A", "B"]);
    }

    #[test]
    fn test_option_text_is_trimmed() {
        let new_poll = validate_poll_request(&request("Q", &["  X ", "\tY"])).unwrap();
        assert_eq!(new_poll.options, vec!["X", "Y"]);
    }

    #[test]
    fn test_rejected_requests() {
        assert_eq!(
            validate_poll_request(&request("   ", &["A", "B"])),
            Err(ValidationError::MissingQuestionOrOptions)
        );
        assert_eq!(
            validate_poll_request(&request("Q", &["A"])),
            Err(ValidationError::MissingQuestionOrOptions)
        );
        assert_eq!(
            validate_poll_request(&request("Q", &["A", "  ", ""])),
            Err(ValidationError::TooFewOptions)
        );
    }

    #[test]
    fn test_many_options_are_accepted() {
        let options = ["1", "2", "3", "4", "5", "6", "7", "8", "9"];
        let new_poll = validate_poll_request(&request("Q", &options)).unwrap();
        assert_eq!(new_poll.options.len(), 9);
        assert_eq!(new_poll.options[8], "9");
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::MissingQuestionOrOptions.to_string(),
            "Question and at least 2 options are required."
        );
        assert_eq!(
            ValidationError::TooFewOptions.to_string(),
            "At least 2 non-empty options are required."
        );
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(1, 1), 100.0);
        assert_eq!(percentage(0, 1), 0.0);
        assert_eq!(percentage(1, 3), 33.3);
        assert_eq!(percentage(2, 3), 66.7);
        assert_eq!(percentage(25, 88), 28.4);
    }

    #[test]
    fn test_results_do_not_renormalize() {
        let results = poll(&[1, 1, 1]).results();
        let sum: f64 = results.options.iter().map(|o| o.percentage).sum();
        assert!((sum - 99.9).abs() < 1e-9);
        assert_eq!(results.total_votes, 3);
    }

    #[test]
    fn test_results_of_empty_poll() {
        let results = poll(&[0, 0]).results();
        assert!(results.options.iter().all(|o| o.percentage == 0.0 && o.votes == 0));
        assert_eq!(results.options[1].id, 1);
    }

    #[test]
    fn test_summary_and_view() {
        let p = poll(&[2, 3]);
        assert_eq!(p.tallied_votes(), p.total_votes);

        let summary = p.summary();
        assert_eq!(summary.option_count, 2);
        assert_eq!(summary.total_votes, 5);

        let view = p.clone().view_for(Some(1));
        assert!(view.has_voted);
        assert_eq!(view.voted_option_id, Some(1));
        assert!(!p.view_for(None).has_voted);
    }

    #[test]
    fn test_poll_json_shape() {
        let json = serde_json::to_value(poll(&[1, 0]).view_for(None)).unwrap();
        assert_eq!(json["totalVotes"], 1);
        assert_eq!(json["createdAt"], "1970-01-01T00:00:00Z");
        assert_eq!(json["options"][0]["text"], "Option 0");
        assert_eq!(json["hasVoted"], false);
        assert!(json["votedOptionId"].is_null());
    }

    #[test]
    fn test_vote_request_parsing() {
        let req: VoteRequest = serde_json::from_str(r#"{"optionId": -1}"#).unwrap();
        assert_eq!(req.option_id, Some(-1));
        let req: VoteRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.option_id, None);
    }

    #[test]
    fn test_voter_key_preference() {
        assert_eq!(VoterKey::resolve(Some("sess"), Some("1.2.3.4"), Some("9.9.9.9")).as_str(), "sess");
        assert_eq!(VoterKey::resolve(Some(""), Some("1.2.3.4, 10.0.0.1"), Some("9.9.9.9")).as_str(), "1.2.3.4");
        assert_eq!(VoterKey::resolve(None, None, Some("9.9.9.9")).as_str(), "9.9.9.9");
        assert_eq!(VoterKey::resolve(None, Some(" "), None).as_str(), "unknown");
    }

    #[test]
    fn test_error_codes_serialize_camel_case() {
        let body = ErrorResponse::new(ErrorCode::AlreadyVoted, "You have already voted on this poll");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["code"], "alreadyVoted");
        assert_eq!(json["error"], "You have already voted on this poll");
        assert_eq!(serde_json::to_value(ErrorCode::PollClosed).unwrap(), "pollClosed");
    }
}
