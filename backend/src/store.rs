use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use time::{Duration, OffsetDateTime};
use tracing::{debug, warn};
use uuid::Uuid;
use shared::models::*;
use shared::voter::VoterKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Poll not found")]
    PollNotFound,
    #[error("This poll is closed")]
    PollClosed,
    #[error("Invalid option")]
    InvalidOption,
    #[error("You have already voted on this poll")]
    AlreadyVoted,
}

/// A poll together with the ballots cast on it. Both are created in one
/// insert and live as long as the store.
#[derive(Debug)]
struct PollEntry {
    poll: Poll,
    ballots: HashMap<VoterKey, usize>,
}

/// All poll and vote state of the process.
///
/// Built once at startup and shared by reference with every request handler.
/// One `RwLock` guards everything: reads run side by side, and a vote's
/// check-then-write sequence runs under a single write guard, so two ballots
/// from the same voter can never both pass the duplicate check.
#[derive(Debug, Default)]
pub struct PollStore {
    entries: RwLock<HashMap<Uuid, PollEntry>>,
}

impl PollStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Writers never panic between their first and last mutation, so a
    // poisoned lock still holds consistent data.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<Uuid, PollEntry>> {
        self.entries.read().unwrap_or_else(|e| {
            warn!("Recovering poll store from poisoned lock");
            PoisonError::into_inner(e)
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<Uuid, PollEntry>> {
        self.entries.write().unwrap_or_else(|e| {
            warn!("Recovering poll store from poisoned lock");
            PoisonError::into_inner(e)
        })
    }

    fn now() -> OffsetDateTime {
        let now = OffsetDateTime::now_utc();
        now - Duration::nanoseconds(now.nanosecond().into())
    }

    fn insert(&self, poll: Poll) -> Poll {
        let entry = PollEntry {
            poll: poll.clone(),
            ballots: HashMap::new(),
        };
        self.write().insert(poll.id, entry);
        poll
    }

    /// Creates an open poll with zeroed counters. Option ids follow the
    /// order of `options`. Callers validate the input beforehand.
    pub fn create_poll<S: AsRef<str>>(&self, question: &str, options: &[S]) -> Poll {
        let poll = Poll {
            id: Uuid::new_v4(),
            question: question.trim().to_string(),
            options: options.iter()
                .enumerate()
                .map(|(id, text)| PollOption {
                    id,
                    text: text.as_ref().trim().to_string(),
                    votes: 0,
                })
                .collect(),
            total_votes: 0,
            closed: false,
            created_at: Self::now(),
        };
        self.insert(poll)
    }

    /// Inserts an open poll with preset counters, e.g. a demo poll.
    pub fn seed_poll(&self, question: &str, options: &[(&str, u64)]) -> Poll {
        let options: Vec<PollOption> = options.iter()
            .enumerate()
            .map(|(id, &(text, votes))| PollOption { id, text: text.to_string(), votes })
            .collect();

        let poll = Poll {
            id: Uuid::new_v4(),
            question: question.to_string(),
            total_votes: options.iter().map(|o| o.votes).sum(),
            options,
            closed: false,
            created_at: Self::now(),
        };
        self.insert(poll)
    }

    pub fn get_poll(&self, id: Uuid) -> Option<Poll> {
        self.read().get(&id).map(|entry| entry.poll.clone())
    }

    /// Snapshot of every poll, in no particular order.
    pub fn get_all_polls(&self) -> Vec<Poll> {
        self.read().values().map(|entry| entry.poll.clone()).collect()
    }

    /// The option this voter picked on this poll, if they voted.
    pub fn has_voted(&self, poll_id: Uuid, voter: &VoterKey) -> Option<usize> {
        self.read()
            .get(&poll_id)
            .and_then(|entry| entry.ballots.get(voter).copied())
    }

    /// Poll and the voter's ballot read under one guard.
    pub fn get_poll_for(&self, poll_id: Uuid, voter: &VoterKey) -> Option<(Poll, Option<usize>)> {
        self.read()
            .get(&poll_id)
            .map(|entry| (entry.poll.clone(), entry.ballots.get(voter).copied()))
    }

    /// Records one ballot. Checks run in order: poll exists, poll open,
    /// option in range, voter has not voted. Nothing changes on failure.
    pub fn vote(&self, poll_id: Uuid, voter: &VoterKey, option_id: i64) -> Result<Poll, StoreError> {
        let mut entries = self.write();
        let entry = entries.get_mut(&poll_id).ok_or(StoreError::PollNotFound)?;

        if entry.poll.closed {
            return Err(StoreError::PollClosed);
        }

        let index = usize::try_from(option_id)
            .ok()
            .filter(|&i| i < entry.poll.options.len())
            .ok_or(StoreError::InvalidOption)?;

        if entry.ballots.contains_key(voter) {
            return Err(StoreError::AlreadyVoted);
        }

        entry.poll.options[index].votes += 1;
        entry.poll.total_votes += 1;
        entry.ballots.insert(voter.clone(), index);

        debug!(poll_id = %poll_id, option = index, total = entry.poll.total_votes, "Vote recorded");
        Ok(entry.poll.clone())
    }

    /// Closes a poll to further votes. Closing twice is fine.
    pub fn close_poll(&self, id: Uuid) -> Result<Poll, StoreError> {
        let mut entries = self.write();
        let entry = entries.get_mut(&id).ok_or(StoreError::PollNotFound)?;
        entry.poll.closed = true;
        Ok(entry.poll.clone())
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}
