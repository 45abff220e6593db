//! Conversational front-end
//!
//! Maps free-text messages onto the monitoring tools with first-match
//! keyword routing, narrates every step into a plan log, and optionally
//! hands the locally composed reply to the completion service for
//! natural-language polish. Completion failures never fail the turn.

use crate::dispatch::DispatchService;
use crate::reconcile::ReconcileService;
use crate::status::StatusService;
use brewery_types::{
	Catalog, ChatReply, ChatRequest, SecretString, TelemetryResult,
};
use brewery_upstream::CompletionClient;
use std::sync::Arc;
use tracing::{debug, info};

const HELP_TEXT: &str = "I am connected to the factory telemetry service. I can check tickets, \
	forecast fill times, dispatch couriers, or outline route optimization.";

const COMPLETION_SYSTEM_PROMPT: &str = "You are an assistant integrated with a factory \
	monitoring system. Use the agent plan and tool outputs to craft a concise, actionable \
	reply to the user. Be clear about any suggested actions.";

/// Intent categories, matched in this fixed priority order.
///
/// A message containing keywords of several categories always routes to the
/// highest-priority one; "forecast the dispatch" is a forecast request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
	Discrepancy,
	Forecast,
	Dispatch,
	Optimize,
	Help,
}

impl Intent {
	pub fn detect(message: &str) -> Self {
		let text = message.to_lowercase();
		let contains_any =
			|keywords: &[&str]| keywords.iter().any(|keyword| text.contains(keyword));

		if contains_any(&["suspicious", "anomaly", "ticket"]) {
			Intent::Discrepancy
		} else if contains_any(&["forecast", "full"]) {
			Intent::Forecast
		} else if contains_any(&["dispatch", "empty"]) {
			Intent::Dispatch
		} else if contains_any(&["optimize", "route", "courier"]) {
			Intent::Optimize
		} else {
			Intent::Help
		}
	}
}

/// One-turn chat controller over the monitoring tools.
pub struct AgentService {
	status: Arc<StatusService>,
	reconcile: Arc<ReconcileService>,
	dispatch: Arc<DispatchService>,
	catalog: Arc<Catalog>,
	completion: Option<CompletionClient>,
	completion_enabled: bool,
	default_api_key: Option<SecretString>,
	show_reasoning: bool,
}

impl AgentService {
	pub fn new(
		status: Arc<StatusService>,
		reconcile: Arc<ReconcileService>,
		dispatch: Arc<DispatchService>,
		catalog: Arc<Catalog>,
	) -> Self {
		Self {
			status,
			reconcile,
			dispatch,
			catalog,
			completion: None,
			completion_enabled: false,
			default_api_key: None,
			show_reasoning: false,
		}
	}

	/// Attach the completion service.
	///
	/// `enabled` engages it for every turn; otherwise a turn opts in via
	/// its flag or by carrying a credential.
	pub fn with_completion(
		mut self,
		client: CompletionClient,
		enabled: bool,
		default_api_key: Option<SecretString>,
		show_reasoning: bool,
	) -> Self {
		self.completion = Some(client);
		self.completion_enabled = enabled;
		self.default_api_key = default_api_key;
		self.show_reasoning = show_reasoning;
		self
	}

	/// Handle one chat turn. Telemetry failures propagate like on any
	/// other endpoint; only completion-service trouble degrades silently
	/// into the plan log.
	pub async fn chat(&self, request: ChatRequest) -> TelemetryResult<ChatReply> {
		let intent = Intent::detect(&request.message);
		info!("Chat turn routed to {:?} intent", intent);

		let mut plan = Vec::new();
		let mut response = match intent {
			Intent::Discrepancy => self.answer_discrepancies(&mut plan).await?,
			Intent::Forecast => self.answer_forecast(&mut plan).await?,
			Intent::Dispatch => self.answer_dispatch(&request.message, &mut plan),
			Intent::Optimize => self.answer_optimize(&mut plan),
			Intent::Help => HELP_TEXT.to_string(),
		};

		self.maybe_refine(&request, &mut response, &mut plan).await;

		Ok(ChatReply { response, plan })
	}

	async fn answer_discrepancies(&self, plan: &mut Vec<String>) -> TelemetryResult<String> {
		plan.push(
			"Plan: user asked about discrepancies; checking logged tickets against drain history."
				.to_string(),
		);
		let alerts = self.reconcile.check().await?;

		if alerts.is_empty() {
			plan.push("Tool result: no discrepancies found.".to_string());
			return Ok("I've checked the live tickets. All potion flows are accounted for."
				.to_string());
		}

		plan.push(format!("Tool result: {} alert(s) raised.", alerts.len()));
		let mut text = String::from("I've checked the live tickets. I found a problem:\n");
		for alert in &alerts {
			text.push_str(&format!("  - {}\n", alert.message));
		}
		Ok(text)
	}

	async fn answer_forecast(&self, plan: &mut Vec<String>) -> TelemetryResult<String> {
		plan.push(
			"Plan: user asked for forecasts; computing time-to-full for every cauldron."
				.to_string(),
		);
		let mut forecasts = self.status.forecast().await?;
		plan.push(format!(
			"Tool result: {} cauldron(s) still filling.",
			forecasts.len()
		));

		if forecasts.is_empty() {
			return Ok("Every cauldron is already at capacity or not filling.".to_string());
		}

		// The forecast endpoint itself is unsorted; the conversational view
		// leads with the most urgent cauldrons.
		forecasts.sort_by(|a, b| a.time_to_full_min.total_cmp(&b.time_to_full_min));
		let mut text = String::from("Here is the live forecast (top 5):\n");
		for forecast in forecasts.iter().take(5) {
			text.push_str(&format!(
				"  - {} ({}) will be full in {} minutes.\n",
				forecast.name, forecast.cauldron_id, forecast.time_to_full_min
			));
		}
		Ok(text)
	}

	fn answer_dispatch(&self, message: &str, plan: &mut Vec<String>) -> String {
		let Some(cauldron) = self.catalog.resolve_mention(message) else {
			plan.push(
				"Plan: dispatch requested but no cauldron was named; asking for clarification."
					.to_string(),
			);
			return "Which cauldron (e.g., cauldron_001) should I dispatch to?".to_string();
		};

		plan.push(format!(
			"Plan: user wants a courier sent to {}.",
			cauldron.id
		));
		match self.dispatch.dispatch(&cauldron.id) {
			Ok(receipt) => {
				plan.push(format!("Tool result: {}.", receipt.status));
				receipt.message
			},
			Err(e) => {
				// resolve_mention only returns catalog entries, but keep the
				// turn alive if that ever changes.
				plan.push(format!("Tool result: dispatch failed ({e})."));
				"Which cauldron (e.g., cauldron_001) should I dispatch to?".to_string()
			},
		}
	}

	fn answer_optimize(&self, plan: &mut Vec<String>) -> String {
		plan.push(
			"Plan: user asked about route optimization; describing the approach with live catalog counts."
				.to_string(),
		);
		format!(
			"Route optimization outline:\n\
			 1. Forecast: compute a time-to-full deadline for each cauldron.\n\
			 2. Network map: use the {} known network edges to estimate travel times between {} and every urgent cauldron.\n\
			 3. Constraints: add the market unload time and each cauldron's drain rate.\n\
			 4. Fleet sizing: run a vehicle-routing pass to find the minimum of the {} available couriers needed to service every cauldron before it overflows.",
			self.catalog.network_edge_count(),
			self.catalog.market().name(),
			self.catalog.couriers().len()
		)
	}

	/// Optionally replace the local response with completion-service
	/// output. Every failure path lands in the plan log and keeps the
	/// local text; the chat turn never fails here.
	async fn maybe_refine(
		&self,
		request: &ChatRequest,
		response: &mut String,
		plan: &mut Vec<String>,
	) {
		let requested =
			request.use_assistant || request.api_key.is_some() || self.completion_enabled;
		if !requested {
			return;
		}

		let Some(client) = &self.completion else {
			plan.push("Note: completion service not configured; keeping local response.".to_string());
			return;
		};
		let key = request
			.api_key
			.clone()
			.or_else(|| self.default_api_key.clone());
		let Some(key) = key else {
			plan.push("Note: no completion credential provided; keeping local response.".to_string());
			return;
		};

		let prompt = format!(
			"Context:\n{}\n\nUser message:\n{}\n\nProvide a short assistant reply based on the context.",
			plan.join("\n"),
			request.message
		);

		debug!("Refining response via completion model {}", client.model());
		match client.complete(&key, COMPLETION_SYSTEM_PROMPT, &prompt).await {
			Ok(outcome) if !outcome.text.is_empty() => {
				*response = outcome.text;
				plan.push("Tool result: response rewritten by the completion service.".to_string());
				if (request.debug || self.show_reasoning) && !outcome.reasoning.is_empty() {
					plan.push(format!(
						"Completion reasoning: {}",
						outcome.reasoning.join(" ")
					));
				}
			},
			Ok(_) => {
				plan.push(
					"Warning: completion service streamed no text; keeping local response."
						.to_string(),
				);
			},
			Err(e) => {
				plan.push(format!("Completion call failed: {e}"));
			},
		}
	}
}
