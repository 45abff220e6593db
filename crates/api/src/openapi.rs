use crate::handlers::common::ErrorResponse;
use crate::handlers::{chat, health, levels, logistics, status, tickets};
use utoipa::OpenApi;

use brewery_types::{
	Alert, ChatReply, ChatRequest, DispatchReceipt, DispatchRequest, Forecast, MergedStatus,
	StatusRecord,
};

#[derive(OpenApi)]
#[openapi(
	paths(
		health::health,
		health::ready,
		levels::get_levels,
		status::get_status,
		tickets::get_discrepancies,
		logistics::get_forecast,
		logistics::post_dispatch,
		chat::post_chat,
	),
	components(schemas(
		ErrorResponse,
		MergedStatus,
		StatusRecord,
		Forecast,
		Alert,
		DispatchRequest,
		DispatchReceipt,
		ChatRequest,
		ChatReply,
	)),
	tags(
		(name = "assets", description = "Live cauldron levels and status"),
		(name = "tickets", description = "Ticket reconciliation"),
		(name = "logistics", description = "Forecasting and courier dispatch"),
		(name = "agent", description = "Conversational front-end"),
		(name = "health", description = "Liveness and readiness"),
	),
	info(
		title = "Brewery Monitor API",
		description = "Monitoring and orchestration facade over a factory-telemetry API",
	)
)]
pub struct ApiDoc;
