use std::sync::Arc;

use axum::{
    Form, Json,
    extract::{State, rejection::FormRejection},
};
use leadengine_core::LeadSubmission;

use crate::AppState;
use crate::api_error::ApiError;
use crate::api_types::LeadResponse;

/// `POST /api/lead`: form-encoded submission from a generated site.
///
/// A body that cannot be decoded (wrong content type, missing required
/// field) is a 422; blank name or phone is a 400.
pub async fn submit_lead(
    State(state): State<Arc<AppState>>,
    form: Result<Form<LeadSubmission>, FormRejection>,
) -> Result<Json<LeadResponse>, ApiError> {
    let Form(submission) =
        form.map_err(|rejection| ApiError::UnprocessableEntity(rejection.body_text()))?;
    let recorded = state.intake.submit(submission).await?;
    Ok(Json(LeadResponse { message: recorded.lead.routing().message() }))
}
