use rocket::{State, Data, Request, get, post, patch, http::{Method, Status}};
use rocket::response::status::Created;
use rocket::route::{self, Handler, Route};
use rocket::serde::json::{self, Json};
use tracing::{info, warn, instrument};
use shared::{models::*, voter::VoterKey, validate_poll_request};
use crate::{
    error::ApiError,
    store::PollStore,
    utils::parse_poll_id,
};

#[get("/health")]
pub fn health() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}

#[rocket::options("/<_..>")]
pub fn all_options() -> Status {
    Status::Ok
}

#[instrument(skip(store, request), fields(poll_id))]
#[post("/polls", data = "<request>")]
pub fn create_poll(
    store: &State<PollStore>,
    request: Result<Json<CreatePollRequest>, json::Error<'_>>,
) -> Result<Created<Json<Poll>>, ApiError> {
    let request = request.map_err(|e| {
        warn!("Rejected poll body: {}", e);
        ApiError::InvalidBody
    })?;

    let new_poll = validate_poll_request(&request).map_err(|e| {
        warn!("Rejected poll: {}", e);
        ApiError::from(e)
    })?;

    let poll = store.create_poll(&new_poll.question, &new_poll.options);
    tracing::Span::current().record("poll_id", tracing::field::display(poll.id));
    info!("Created poll with {} options", poll.option_count());

    Ok(Created::new(format!("/api/polls/{}", poll.id)).body(Json(poll)))
}

#[get("/polls")]
pub fn list_polls(store: &State<PollStore>) -> Json<Vec<PollSummary>> {
    let mut polls = store.get_all_polls();
    polls.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
    Json(polls.iter().map(Poll::summary).collect())
}

#[instrument(skip(store), fields(poll_id = %id))]
#[get("/polls/<id>")]
pub fn get_poll(store: &State<PollStore>, id: &str, voter: VoterKey) -> Result<Json<PollView>, ApiError> {
    let uuid = parse_poll_id(id)?;
    let (poll, voted_option_id) = store.get_poll_for(uuid, &voter).ok_or(ApiError::NotFound)?;
    Ok(Json(poll.view_for(voted_option_id)))
}

#[instrument(skip(store, request), fields(poll_id = %id))]
#[post("/polls/<id>/vote", data = "<request>")]
pub fn cast_vote(
    store: &State<PollStore>,
    id: &str,
    voter: VoterKey,
    request: Result<Json<VoteRequest>, json::Error<'_>>,
) -> Result<Json<PollView>, ApiError> {
    let request = request.map_err(|_| ApiError::InvalidBody)?;
    let option_id = request.option_id.ok_or(ApiError::MissingOptionId)?;
    let uuid = parse_poll_id(id)?;

    match store.vote(uuid, &voter, option_id) {
        Ok(poll) => {
            let index = usize::try_from(option_id).ok();
            Ok(Json(poll.view_for(index)))
        }
        Err(e) => {
            warn!("Vote rejected: {}", e);
            Err(e.into())
        }
    }
}

#[get("/polls/<id>/results")]
pub fn get_results(store: &State<PollStore>, id: &str) -> Result<Json<PollResults>, ApiError> {
    let uuid = parse_poll_id(id)?;
    store.get_poll(uuid)
        .map(|poll| Json(poll.results()))
        .ok_or(ApiError::NotFound)
}

#[instrument(skip(store), fields(poll_id = %id))]
#[patch("/polls/<id>/close")]
pub fn close_poll(store: &State<PollStore>, id: &str) -> Result<Json<Poll>, ApiError> {
    let uuid = parse_poll_id(id)?;
    let poll = store.close_poll(uuid)?;
    info!("Poll closed with {} votes", poll.total_votes);
    Ok(Json(poll))
}

/// Answers 405 for methods the poll collection does not support.
#[derive(Clone)]
pub struct MethodNotAllowed;

#[rocket::async_trait]
impl Handler for MethodNotAllowed {
    async fn handle<'r>(&self, req: &'r Request<'_>, _data: Data<'r>) -> route::Outcome<'r> {
        route::Outcome::from(req, ApiError::MethodNotAllowed)
    }
}

impl From<MethodNotAllowed> for Vec<Route> {
    fn from(handler: MethodNotAllowed) -> Vec<Route> {
        [Method::Put, Method::Patch, Method::Delete]
            .into_iter()
            .map(|method| Route::new(method, "/polls", handler.clone()))
            .collect()
    }
}
