//! Ticket reconciliation against drain history
//!
//! Tickets claim drained volumes; the drain history records what actually
//! happened. Both are bucketed by `(cauldron, day)` and compared. The true
//! drained volume of an event corrects for concurrent inflow:
//!
//!   (level at start − level at end) + fill_rate × duration
//!
//! A bucket whose summed claims differ from its summed true volume beyond
//! the configured tolerance is flagged; drain activity with no ticket at
//! all is flagged as an unlogged drain.

use brewery_types::{
	Alert, Catalog, DrainEvent, TelemetryApi, TelemetryResult, Ticket,
};
use brewery_upstream::parse_drain_events;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};

/// Per-request reconciliation over the shared catalog.
pub struct ReconcileService {
	api: Arc<dyn TelemetryApi>,
	catalog: Arc<Catalog>,
	tolerance: f64,
}

impl ReconcileService {
	pub fn new(api: Arc<dyn TelemetryApi>, catalog: Arc<Catalog>, tolerance: f64) -> Self {
		Self {
			api,
			catalog,
			tolerance,
		}
	}

	/// Fetch tickets and history, then reconcile. An empty result means
	/// every ticket reconciled cleanly.
	pub async fn check(&self) -> TelemetryResult<Vec<Alert>> {
		let tickets = self.api.tickets().await?;
		let history = self.api.history().await?;
		let events = parse_drain_events(&history)?;

		let alerts = reconcile(&tickets, &events, &self.catalog, self.tolerance);
		info!(
			"Reconciled {} ticket(s) against {} drain event(s): {} alert(s)",
			tickets.len(),
			events.len(),
			alerts.len()
		);
		Ok(alerts)
	}
}

type Bucket = (String, NaiveDate);

/// Pure reconciliation pass over pre-fetched data.
pub fn reconcile(
	tickets: &[Ticket],
	events: &[DrainEvent],
	catalog: &Catalog,
	tolerance: f64,
) -> Vec<Alert> {
	let mut alerts = Vec::new();

	// BTreeMap keeps alert order deterministic across runs.
	let mut event_buckets: BTreeMap<Bucket, Vec<&DrainEvent>> = BTreeMap::new();
	for event in events {
		event_buckets
			.entry((event.cauldron_id.clone(), event.day()))
			.or_default()
			.push(event);
	}

	let mut ticket_buckets: BTreeMap<Bucket, Vec<&Ticket>> = BTreeMap::new();
	for ticket in tickets {
		if catalog.get(&ticket.cauldron_id).is_none() {
			alerts.push(Alert::for_cauldron(
				ticket.cauldron_id.clone(),
				format!(
					"Ticket {} references unknown cauldron '{}'.",
					ticket.id, ticket.cauldron_id
				),
			));
			continue;
		}
		match ticket.day() {
			Some(day) => ticket_buckets
				.entry((ticket.cauldron_id.clone(), day))
				.or_default()
				.push(ticket),
			None => {
				warn!("Ticket {} has no parseable date; skipping", ticket.id);
			},
		}
	}

	for ((cauldron_id, day), bucket_tickets) in &ticket_buckets {
		let fill_rate = catalog
			.get(cauldron_id)
			.map(|c| c.fill_rate_per_min)
			.unwrap_or(0.0);

		let true_total = event_buckets
			.remove(&(cauldron_id.clone(), *day))
			.map(|bucket| true_volume(&bucket, fill_rate))
			.unwrap_or(0.0);
		let claimed: f64 = bucket_tickets.iter().map(|t| t.amount).sum();

		if (claimed - true_total).abs() > tolerance {
			let ids = bucket_tickets
				.iter()
				.map(|t| t.id.as_str())
				.collect::<Vec<_>>()
				.join(", ");
			alerts.push(Alert::for_cauldron(
				cauldron_id.clone(),
				format!(
					"Suspicious ticket {} on {}. Calculated: {:.1}L, ticket: {:.1}L.",
					ids, day, true_total, claimed
				),
			));
		}
	}

	// Whatever is left drained without any ticket for that day.
	for ((cauldron_id, day), bucket) in &event_buckets {
		let fill_rate = catalog
			.get(cauldron_id)
			.map(|c| c.fill_rate_per_min)
			.unwrap_or(0.0);
		let volume = true_volume(bucket, fill_rate);
		if volume > tolerance {
			alerts.push(Alert::for_cauldron(
				cauldron_id.clone(),
				format!(
					"Unlogged drain of {:.1}L detected on {}. No matching ticket found.",
					volume, day
				),
			));
		}
	}

	alerts
}

fn true_volume(events: &[&DrainEvent], fill_rate: f64) -> f64 {
	events
		.iter()
		.map(|event| event.level_drop() + fill_rate * event.duration_min())
		.sum()
}
