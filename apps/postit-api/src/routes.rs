use axum::{
	Json, Router,
	body::Bytes,
	extract::{
		Path, Query, State,
		rejection::{PathRejection, QueryRejection},
	},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::get,
};
use serde::Serialize;

use postit_service::{
	Error as ServiceError, GetNoteResponse, INVALID_ID_MESSAGE, ListNotesRequest, ListNotesResponse,
	NoteIdResponse,
};

use crate::state::AppState;

pub const NOTES_PATH: &str = "/api/notes/";
/// Target of the list hypermedia links, which carry no trailing slash.
pub const NOTES_LINK_PATH: &str = "/api/notes";
pub const NOTE_PATH: &str = "/api/notes/{id}/";

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route(NOTES_PATH, get(list_notes).post(create_note))
		.route(NOTES_LINK_PATH, get(list_notes))
		.route(NOTE_PATH, get(get_note).put(update_note).delete(delete_note))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn list_notes(
	State(state): State<AppState>,
	query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<ListNotesResponse>, ApiError> {
	let Query(pairs) = query?;
	let req = ListNotesRequest {
		offset: first_value(&pairs, "offset"),
		limit: first_value(&pairs, "limit"),
	};
	let response = state.service.list_notes(req).await?;
	Ok(Json(response))
}

async fn create_note(
	State(state): State<AppState>,
	body: Bytes,
) -> Result<(StatusCode, Json<NoteIdResponse>), ApiError> {
	let response = state.service.create_note(&body).await?;
	Ok((StatusCode::CREATED, Json(response)))
}

async fn get_note(
	State(state): State<AppState>,
	path: Result<Path<String>, PathRejection>,
) -> Result<Json<GetNoteResponse>, ApiError> {
	let id = note_id(path)?;
	let response = state.service.get_note(&id).await?;
	Ok(Json(response))
}

async fn update_note(
	State(state): State<AppState>,
	path: Result<Path<String>, PathRejection>,
	body: Bytes,
) -> Result<(StatusCode, Json<NoteIdResponse>), ApiError> {
	let id = note_id(path)?;
	let response = state.service.update_note(&id, &body).await?;
	Ok((StatusCode::CREATED, Json(response)))
}

async fn delete_note(
	State(state): State<AppState>,
	path: Result<Path<String>, PathRejection>,
) -> Result<Json<NoteIdResponse>, ApiError> {
	let id = note_id(path)?;
	let response = state.service.delete_note(&id).await?;
	Ok(Json(response))
}

// Repeated keys keep the first value.
fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
	pairs.iter().find(|(name, _)| name == key).map(|(_, value)| value.clone())
}

// An id segment that does not even decode is still just a bad id.
fn note_id(path: Result<Path<String>, PathRejection>) -> Result<String, ApiError> {
	match path {
		Ok(Path(id)) => Ok(id),
		Err(rejection) => {
			tracing::debug!(error = %rejection.body_text(), "Rejected note id path.");

			Err(ServiceError::InvalidArgument { message: INVALID_ID_MESSAGE.to_string() }.into())
		},
	}
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	message: String,
}
impl ApiError {
	pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
		Self { status, message: message.into() }
	}

	pub fn status(&self) -> StatusCode {
		self.status
	}
}

impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		let status = match &err {
			ServiceError::InvalidArgument { .. } => StatusCode::BAD_REQUEST,
			ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
			ServiceError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
		};

		Self::new(status, err.to_string())
	}
}

impl From<QueryRejection> for ApiError {
	fn from(rejection: QueryRejection) -> Self {
		Self::new(StatusCode::BAD_REQUEST, rejection.body_text())
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		if self.status.is_server_error() {
			tracing::error!(status = %self.status, error = %self.message, "Request failed.");
		}

		(self.status, Json(ErrorBody { error: self.message })).into_response()
	}
}
