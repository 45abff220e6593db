//! Streaming client for the optional completion service
//!
//! Talks to an OpenAI-compatible `chat/completions` endpoint with
//! `stream: true`, consuming the SSE fragments synchronously and
//! concatenating them in arrival order. The whole call runs under a
//! bounded timeout so a stalled stream cannot pin a request forever.

use brewery_types::{CompletionError, CompletionOutcome, SecretString};
use futures::StreamExt;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;
use url::Url;

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
	role: &'a str,
	content: &'a str,
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
	model: &'a str,
	messages: Vec<ChatMessage<'a>>,
	temperature: f64,
	top_p: f64,
	max_tokens: u32,
	stream: bool,
}

#[derive(Debug, Deserialize)]
struct StreamChunk {
	#[serde(default)]
	choices: Vec<StreamChoice>,
}

#[derive(Debug, Deserialize)]
struct StreamChoice {
	#[serde(default)]
	delta: StreamDelta,
}

#[derive(Debug, Default, Deserialize)]
struct StreamDelta {
	/// Some providers emit the payload under `text` instead of `content`.
	#[serde(default, alias = "text")]
	content: Option<String>,
	#[serde(default)]
	reasoning_content: Option<String>,
}

/// Client for the completion service.
#[derive(Debug, Clone)]
pub struct CompletionClient {
	http: Client,
	base_url: Url,
	model: String,
	timeout_ms: u64,
}

impl CompletionClient {
	pub fn new(base_url: &str, model: &str, timeout_ms: u64) -> Result<Self, CompletionError> {
		let mut base = Url::parse(base_url).map_err(|e| CompletionError::InvalidUrl {
			url: base_url.to_string(),
			reason: e.to_string(),
		})?;
		if !base.path().ends_with('/') {
			base.set_path(&format!("{}/", base.path()));
		}

		// No per-request timeout on the client itself: the stream is
		// bounded as a whole in `complete`.
		let http = Client::builder().build()?;

		Ok(Self {
			http,
			base_url: base,
			model: model.to_string(),
			timeout_ms,
		})
	}

	pub fn model(&self) -> &str {
		&self.model
	}

	/// Run one streamed completion and assemble its output.
	pub async fn complete(
		&self,
		api_key: &SecretString,
		system: &str,
		user: &str,
	) -> Result<CompletionOutcome, CompletionError> {
		let call = self.stream_completion(api_key, system, user);
		match tokio::time::timeout(Duration::from_millis(self.timeout_ms), call).await {
			Ok(result) => result,
			Err(_) => Err(CompletionError::Timeout {
				timeout_ms: self.timeout_ms,
			}),
		}
	}

	async fn stream_completion(
		&self,
		api_key: &SecretString,
		system: &str,
		user: &str,
	) -> Result<CompletionOutcome, CompletionError> {
		let url = self
			.base_url
			.join("chat/completions")
			.map_err(|e| CompletionError::InvalidUrl {
				url: self.base_url.to_string(),
				reason: e.to_string(),
			})?;

		let request = CompletionRequest {
			model: &self.model,
			messages: vec![
				ChatMessage {
					role: "system",
					content: system,
				},
				ChatMessage {
					role: "user",
					content: user,
				},
			],
			temperature: 0.6,
			top_p: 0.95,
			max_tokens: 512,
			stream: true,
		};

		debug!("Requesting streamed completion from {}", url);
		let response = self
			.http
			.post(url)
			.bearer_auth(api_key.expose_secret())
			.json(&request)
			.send()
			.await?;

		let status = response.status();
		if !status.is_success() {
			return Err(CompletionError::HttpStatus {
				status: status.as_u16(),
			});
		}

		let mut stream = response.bytes_stream();
		let mut buffer = String::new();
		let mut content = String::new();
		let mut reasoning = Vec::new();
		let mut done = false;

		'outer: while let Some(chunk) = stream.next().await {
			let bytes = chunk?;
			buffer.push_str(&String::from_utf8_lossy(&bytes));

			while let Some(pos) = buffer.find('\n') {
				let line: String = buffer.drain(..=pos).collect();
				let line = line.trim();
				let Some(data) = line.strip_prefix("data:") else {
					continue;
				};
				let data = data.trim();
				if data == "[DONE]" {
					done = true;
					break 'outer;
				}

				let parsed: StreamChunk =
					serde_json::from_str(data).map_err(|e| CompletionError::MalformedChunk {
						reason: e.to_string(),
					})?;
				for choice in parsed.choices {
					if let Some(fragment) = choice.delta.reasoning_content {
						reasoning.push(fragment);
					}
					if let Some(fragment) = choice.delta.content {
						content.push_str(&fragment);
					}
				}
			}
		}

		if !done {
			debug!("Completion stream ended without a [DONE] marker");
		}

		Ok(CompletionOutcome {
			text: content.trim().to_string(),
			reasoning,
		})
	}
}
