use axum::{extract::State, http::StatusCode, response::Json};
use tracing::info;

use crate::handlers::common::{telemetry_error, ErrorResponse};
use crate::state::AppState;
use brewery_types::{ChatReply, ChatRequest};

/// One stateless chat turn against the monitoring tools.
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/agent/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Agent reply with plan log", body = ChatReply),
        (status = 500, description = "Unrecognized live-data format", body = ErrorResponse),
        (status = 502, description = "Upstream unavailable", body = ErrorResponse)
    ),
    tag = "agent"
))]
/// POST /agent/chat
pub async fn post_chat(
	State(state): State<AppState>,
	Json(request): Json<ChatRequest>,
) -> Result<Json<ChatReply>, (StatusCode, Json<ErrorResponse>)> {
	info!("Chat turn received ({} chars)", request.message.len());
	let reply = state
		.agent_service
		.chat(request)
		.await
		.map_err(telemetry_error)?;
	Ok(Json(reply))
}
