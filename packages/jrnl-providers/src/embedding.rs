use std::time::Duration;

use reqwest::{Client, header::HeaderMap};
use serde::{Deserialize, Serialize};

use jrnl_config::EmbeddingProviderConfig;
use jrnl_domain::EmbeddingVariant;

use crate::{Error, Result};

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
	sentence: &'a str,
	#[serde(rename = "type")]
	variant: EmbeddingVariant,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
	success: bool,
	#[serde(default)]
	message: String,
	#[serde(default)]
	data: Vec<f32>,
}

/// HTTP client for the embedding provider. One pooled reqwest client per
/// process; every call is bounded by the configured connect, read, and overall
/// timeouts, so a slow provider can never hang a request indefinitely.
///
/// Failures are never retried here; the caller decides.
pub struct EmbeddingClient {
	http: Client,
	url: String,
	headers: HeaderMap,
}
impl EmbeddingClient {
	pub fn new(cfg: &EmbeddingProviderConfig) -> Result<Self> {
		let http = Client::builder()
			.connect_timeout(Duration::from_millis(cfg.connect_timeout_ms))
			.read_timeout(Duration::from_millis(cfg.read_timeout_ms))
			.timeout(Duration::from_millis(cfg.timeout_ms))
			.pool_max_idle_per_host(10)
			.build()?;
		let url = format!("{}{}", cfg.api_base, cfg.path);
		let headers = crate::auth_headers(cfg.api_key.as_deref(), &cfg.default_headers)?;

		Ok(Self { http, url, headers })
	}

	/// Resolves free text into an embedding vector in the given variant's
	/// space. The vector's dimensionality is the provider's contract; a
	/// mismatch surfaces downstream as a store error, not here.
	pub async fn embed(&self, text: &str, variant: EmbeddingVariant) -> Result<Vec<f32>> {
		let body = EmbeddingRequest { sentence: text, variant };
		let res = self
			.http
			.post(&self.url)
			.headers(self.headers.clone())
			.json(&body)
			.send()
			.await?;
		let status = res.status();

		if !status.is_success() {
			let body = res.text().await.unwrap_or_default();

			return Err(Error::Status { status: status.as_u16(), body });
		}

		let response: EmbeddingResponse = res
			.json()
			.await
			.map_err(|err| Error::InvalidResponse { message: err.to_string() })?;

		parse_embedding_response(response)
	}
}

fn parse_embedding_response(response: EmbeddingResponse) -> Result<Vec<f32>> {
	if !response.success {
		return Err(Error::Failed { message: response.message });
	}
	if response.data.is_empty() {
		return Err(Error::InvalidResponse {
			message: "Embedding response has an empty vector.".to_string(),
		});
	}

	Ok(response.data)
}
