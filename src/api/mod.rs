//! HTTP delivery surface for the contact store.
//!
//! Exposes the store's two operations as a JSON data API:
//!
//! - `POST /api/contacts` — append one submission; responds
//!   `{"success": true}` on durable persistence.
//! - `GET /api/contacts` — list all submissions newest-first as
//!   `{name, email, message, submittedAt, id}` objects, with `submittedAt`
//!   in milliseconds since the Unix epoch.
//!
//! The router owns no state beyond a cloned [`ContactIntakeService`];
//! handlers are stateless and each request is a single store operation.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use mockable::Clock;
use serde::Serialize;
use serde_json::json;

use crate::contact::{
    domain::{ContactSubmission, SubmissionId},
    error::RepositoryError,
    ports::repository::ContactRepository,
    services::intake::{
        ContactIntakeError, ContactIntakeService, SubmitContactRequest, SubmitReceipt,
    },
};

/// Wire representation of a stored submission.
///
/// Matches the shape consumed by the original reporting surface: camelCase
/// keys and `submittedAt` as milliseconds since the Unix epoch. The
/// adapter-internal insertion sequence is never exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactView {
    /// Opaque submission identifier.
    pub id: SubmissionId,
    /// Visitor-supplied name.
    pub name: String,
    /// Visitor-supplied email address.
    pub email: String,
    /// Visitor-supplied message body.
    pub message: String,
    /// Receipt timestamp in milliseconds since the Unix epoch.
    pub submitted_at: i64,
}

impl From<ContactSubmission> for ContactView {
    fn from(submission: ContactSubmission) -> Self {
        Self {
            id: submission.id(),
            submitted_at: submission.submitted_at_millis(),
            name: submission.name().to_owned(),
            email: submission.email().to_owned(),
            message: submission.message().to_owned(),
        }
    }
}

/// Error response wrapper mapping store failures to HTTP statuses.
///
/// Connectivity failures map to `503 Service Unavailable`; any other
/// persistence rejection maps to `500 Internal Server Error`. Either way
/// the body carries `{"success": false}` so form callers can treat the
/// submission as not saved and retry.
#[derive(Debug)]
struct ApiError(ContactIntakeError);

impl From<ContactIntakeError> for ApiError {
    fn from(err: ContactIntakeError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ContactIntakeError::Repository(ref repository_error) = self.0;
        let status = match repository_error {
            RepositoryError::Connection(_) => StatusCode::SERVICE_UNAVAILABLE,
            RepositoryError::Duplicate(_)
            | RepositoryError::Database(_)
            | RepositoryError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        tracing::error!(error = %self.0, "contact store operation failed");

        let body = Json(json!({
            "success": false,
            "error": self.0.to_string(),
        }));

        (status, body).into_response()
    }
}

/// Builds the data-API router backed by the given intake service.
///
/// Mounts `POST` and `GET` on `/api/contacts`.
pub fn router<R, C>(service: ContactIntakeService<R, C>) -> Router
where
    R: ContactRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/api/contacts",
            post(submit_contact::<R, C>).get(list_contacts::<R, C>),
        )
        .with_state(service)
}

/// `POST /api/contacts`: appends one submission, fire-and-forget.
#[expect(
    clippy::needless_pass_by_value,
    reason = "axum extractors are consumed by value"
)]
async fn submit_contact<R, C>(
    State(service): State<ContactIntakeService<R, C>>,
    Json(request): Json<SubmitContactRequest>,
) -> Result<Json<SubmitReceipt>, ApiError>
where
    R: ContactRepository,
    C: Clock + Send + Sync,
{
    let receipt = service.submit(request).await?;
    Ok(Json(receipt))
}

/// `GET /api/contacts`: all submissions, newest first.
#[expect(
    clippy::needless_pass_by_value,
    reason = "axum extractors are consumed by value"
)]
async fn list_contacts<R, C>(
    State(service): State<ContactIntakeService<R, C>>,
) -> Result<Json<Vec<ContactView>>, ApiError>
where
    R: ContactRepository,
    C: Clock + Send + Sync,
{
    let submissions = service.list().await?;
    Ok(Json(submissions.into_iter().map(ContactView::from).collect()))
}
