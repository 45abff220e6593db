//! HTTP client for the external factory-telemetry API

use async_trait::async_trait;
use brewery_types::{
	CauldronRecord, Courier, TelemetryApi, TelemetryError, TelemetryResult, Ticket,
};
use reqwest::{
	header::{HeaderMap, HeaderValue},
	Client,
};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Concrete [`TelemetryApi`] implementation over HTTP.
///
/// Holds one pooled `reqwest` client with a bounded request timeout; the
/// upstream service itself specifies none.
#[derive(Debug, Clone)]
pub struct HttpTelemetryClient {
	base_url: Url,
	http: Client,
}

impl HttpTelemetryClient {
	pub fn new(base_url: &str, timeout_ms: u64) -> TelemetryResult<Self> {
		let mut headers = HeaderMap::new();
		headers.insert("Accept", HeaderValue::from_static("application/json"));
		headers.insert("User-Agent", HeaderValue::from_static("brewery-monitor/0.1"));

		let mut base = Url::parse(base_url).map_err(|e| TelemetryError::InvalidUrl {
			url: base_url.to_string(),
			reason: e.to_string(),
		})?;
		// Treat the base as a directory so joins append rather than replace.
		if !base.path().ends_with('/') {
			base.set_path(&format!("{}/", base.path()));
		}

		let http = Client::builder()
			.default_headers(headers)
			.timeout(Duration::from_millis(timeout_ms))
			.build()?;

		Ok(Self {
			base_url: base,
			http,
		})
	}

	async fn get_json(&self, path: &str) -> TelemetryResult<Value> {
		let url = self
			.base_url
			.join(path)
			.map_err(|e| TelemetryError::InvalidUrl {
				url: format!("{}{}", self.base_url, path),
				reason: e.to_string(),
			})?;

		debug!("Fetching {}", url);
		let response = self.http.get(url).send().await?;
		let status = response.status();
		if !status.is_success() {
			let reason = response.text().await.unwrap_or_default();
			return Err(TelemetryError::HttpStatus {
				status: status.as_u16(),
				reason: truncate(&reason, 200),
			});
		}

		response
			.json()
			.await
			.map_err(|e| TelemetryError::InvalidResponse {
				reason: format!("{} returned a non-JSON body: {}", path, e),
			})
	}

	async fn get_typed<T: serde::de::DeserializeOwned>(&self, path: &str) -> TelemetryResult<T> {
		let value = self.get_json(path).await?;
		serde_json::from_value(value).map_err(|e| TelemetryError::InvalidResponse {
			reason: format!("{} returned an unexpected document: {}", path, e),
		})
	}
}

fn truncate(text: &str, max: usize) -> String {
	if text.len() <= max {
		text.to_string()
	} else {
		let mut end = max;
		while !text.is_char_boundary(end) {
			end -= 1;
		}
		format!("{}…", &text[..end])
	}
}

#[async_trait]
impl TelemetryApi for HttpTelemetryClient {
	async fn cauldrons(&self) -> TelemetryResult<Vec<CauldronRecord>> {
		self.get_typed("Information/cauldrons").await
	}

	async fn network(&self) -> TelemetryResult<Value> {
		self.get_json("Information/network").await
	}

	async fn market(&self) -> TelemetryResult<Value> {
		self.get_json("Information/market").await
	}

	async fn couriers(&self) -> TelemetryResult<Vec<Courier>> {
		self.get_typed("Information/couriers").await
	}

	async fn live_data(&self) -> TelemetryResult<Value> {
		self.get_json("Data").await
	}

	async fn history(&self) -> TelemetryResult<Value> {
		self.get_json("Data/metadata").await
	}

	async fn tickets(&self) -> TelemetryResult<Vec<Ticket>> {
		self.get_typed("Tickets").await
	}
}
