//! Ticket, drain-history, and alert models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// An upstream-logged claim that a volume was drained from a cauldron.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Ticket {
	#[serde(alias = "ticketId", alias = "ticket_id")]
	pub id: String,
	#[serde(alias = "cauldronId")]
	pub cauldron_id: String,
	#[serde(alias = "volume", alias = "claimed_amount")]
	pub amount: f64,
	/// Raw upstream date string; format varies, see [`Ticket::day`].
	#[serde(default, alias = "timestamp")]
	pub date: Option<String>,
}

impl Ticket {
	/// Best-effort day extraction: RFC 3339 timestamps and plain
	/// `YYYY-MM-DD` (with or without a trailing time portion) are accepted.
	pub fn day(&self) -> Option<NaiveDate> {
		let raw = self.date.as_deref()?;
		if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
			return Some(ts.date_naive());
		}
		let prefix = raw.get(..10)?;
		NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
	}
}

/// One drain event reconstructed from the historical data endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DrainEvent {
	#[serde(alias = "cauldronId", alias = "id")]
	pub cauldron_id: String,
	#[serde(alias = "drain_start", alias = "startTime", alias = "start_time")]
	pub start: DateTime<Utc>,
	#[serde(alias = "drain_end", alias = "endTime", alias = "end_time")]
	pub end: DateTime<Utc>,
	#[serde(alias = "startLevel", alias = "start_level")]
	pub level_start: f64,
	#[serde(alias = "endLevel", alias = "end_level")]
	pub level_end: f64,
}

impl DrainEvent {
	pub fn day(&self) -> NaiveDate {
		self.start.date_naive()
	}

	/// Event duration in minutes; clamped at zero for malformed ranges.
	pub fn duration_min(&self) -> f64 {
		let seconds = (self.end - self.start).num_seconds();
		if seconds <= 0 {
			0.0
		} else {
			seconds as f64 / 60.0
		}
	}

	/// Observed level drop over the event, before inflow correction.
	pub fn level_drop(&self) -> f64 {
		self.level_start - self.level_end
	}
}

/// A reconciliation finding surfaced to operators. Ephemeral.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Alert {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub cauldron_id: Option<String>,
	pub message: String,
}

impl Alert {
	pub fn for_cauldron(cauldron_id: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			cauldron_id: Some(cauldron_id.into()),
			message: message.into(),
		}
	}

	/// The canonical "nothing to report" record returned when every ticket
	/// reconciled cleanly.
	pub fn all_clear() -> Self {
		Self {
			cauldron_id: None,
			message: "All tickets reconciled.".to_string(),
		}
	}
}
