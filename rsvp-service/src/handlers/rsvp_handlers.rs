use axum::{
    extract::{FromRequest, Request, State},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use log::{debug, info};
use wedding_rsvp_shared::models::{MessageResponse, RsvpForm, SubmissionReceipt};

use crate::{
    error::{AppError, Result},
    handlers::AppState,
    models::FormSchemaResponse,
};

// POST /rsvp - Validate the guest's answers and relay them to the form service
pub async fn submit_rsvp(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<SubmissionReceipt>> {
    let content_type = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    debug!("RSVP submission with content type '{}'", content_type);

    // The page posts its native form; scripted clients may send JSON
    let form: RsvpForm = if content_type.starts_with("application/x-www-form-urlencoded") {
        let Form(form) = Form::<RsvpForm>::from_request(request, &())
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        form
    } else if content_type.starts_with("application/json") {
        let Json(form) = Json::<RsvpForm>::from_request(request, &())
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        form
    } else {
        return Err(AppError::UnsupportedMediaType(content_type));
    };

    let receipt = state.submitter.submit(&form).await?;
    info!("RSVP relayed: submission_id={}", receipt.submission_id);

    Ok(Json(receipt))
}

// GET /rsvp/form - Required fields and messages for the page
pub async fn get_form_schema(State(state): State<AppState>) -> Json<FormSchemaResponse> {
    Json(FormSchemaResponse {
        required: state.config.required.clone(),
        fixed_fields: state.config.fixed_values.keys().copied().collect(),
        messages: state.config.messages.clone(),
    })
}

// GET /health
pub async fn health() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "ok".to_string(),
    })
}
