use axum::{
	Json, Router,
	extract::{Path, Query, State},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::get,
};
use serde::Serialize;

use jrnl_domain::SearchFilter;
use jrnl_service::Error as ServiceError;
use jrnl_storage::models::{Journal, RankedJournal};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/v1/journals", get(list_journals))
		.route("/v1/journals/{id}", get(get_journal))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

#[derive(Debug, Serialize)]
pub struct JournalListResponse {
	pub items: Vec<RankedJournal>,
}

async fn list_journals(
	State(state): State<AppState>,
	Query(filter): Query<SearchFilter>,
) -> Result<Json<JournalListResponse>, ApiError> {
	let items = state.service.search(filter).await?;

	Ok(Json(JournalListResponse { items }))
}

async fn get_journal(
	State(state): State<AppState>,
	Path(id): Path<String>,
) -> Result<Json<Journal>, ApiError> {
	let journal = state.service.get_journal(&id).await?;

	Ok(Json(journal))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: &'static str,
	message: String,
}

impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		let (status, error_code) = match &err {
			ServiceError::InvalidArgument { .. } => (StatusCode::BAD_REQUEST, "invalid_argument"),
			ServiceError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
			ServiceError::EmbeddingUnavailable { .. } =>
				(StatusCode::BAD_GATEWAY, "embedding_unavailable"),
			ServiceError::Storage { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "storage"),
		};
		// Full detail stays in the logs; only a caller-safe summary crosses
		// the boundary for server-class failures.
		let message = if status.is_server_error() {
			tracing::error!(error_code, "Request failed: {err}.");

			match &err {
				ServiceError::EmbeddingUnavailable { .. } =>
					"Embedding provider unavailable.".to_string(),
				_ => "Internal storage error.".to_string(),
			}
		} else {
			err.to_string()
		};

		Self { status, error_code, message }
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error_code: self.error_code.to_string(), message: self.message };

		(self.status, Json(body)).into_response()
	}
}
