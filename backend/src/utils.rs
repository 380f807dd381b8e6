use crate::error::ApiError;
use uuid::Uuid;

/// Ids that do not parse can never name a poll, so they are reported as
/// unknown polls rather than malformed input.
pub fn parse_poll_id(id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id).map_err(|_| ApiError::NotFound)
}
