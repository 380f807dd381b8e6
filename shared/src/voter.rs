use serde::{Serialize, Deserialize};

pub const SESSION_HEADER: &str = "X-Session-Id";
pub const FORWARDED_FOR_HEADER: &str = "X-Forwarded-For";

/// Opaque identifier used only to deduplicate votes. It is not an
/// authenticated identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoterKey(String);

impl VoterKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Picks the session id, then the first forwarded-for hop, then the
    /// connection address, skipping blank values.
    pub fn resolve(session_id: Option<&str>, forwarded_for: Option<&str>, remote_ip: Option<&str>) -> Self {
        let session = session_id.map(str::trim).filter(|s| !s.is_empty());
        let forwarded = forwarded_for
            .and_then(|xff| xff.split(',').next())
            .map(str::trim)
            .filter(|s| !s.is_empty());
        let remote = remote_ip.map(str::trim).filter(|s| !s.is_empty());

        Self::new(session.or(forwarded).or(remote).unwrap_or("unknown"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Backend-specific Rocket implementation
#[cfg(feature = "backend")]
mod backend_impl {
    use super::*;
    use rocket::request::{FromRequest, Outcome};
    use rocket::Request;

    #[rocket::async_trait]
    impl<'r> FromRequest<'r> for VoterKey {
        type Error = std::convert::Infallible;

        async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
            let headers = req.headers();
            let remote_ip = req.remote().map(|addr| addr.ip().to_string());

            Outcome::Success(VoterKey::resolve(
                headers.get_one(SESSION_HEADER),
                headers.get_one(FORWARDED_FOR_HEADER),
                remote_ip.as_deref(),
            ))
        }
    }
}
