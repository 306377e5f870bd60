use std::time::Duration;

use async_trait::async_trait;
use log::{error, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::ProviderError;
use crate::providers::{TranslationBackend, TranslationPayload, TranslationRequest};

/// Client for a hosted translation endpoint.
///
/// The endpoint serves a single many-to-many translation model. Source and
/// target languages ride along as script-qualified codes in the request
/// parameters; the response is an array of translated segments.
#[derive(Debug)]
pub struct TranslatorClient {
    /// HTTP client for API requests
    client: Client,
    /// Endpoint URL, without trailing slash
    endpoint: String,
    /// Model identifier served by the endpoint, for diagnostics
    model: String,
    /// Optional bearer token
    api_key: Option<String>,
    /// Maximum number of retry attempts
    max_retries: u32,
    /// Base backoff time in milliseconds for exponential backoff
    backoff_base_ms: u64,
}

/// Request body for the translation endpoint
#[derive(Debug, Serialize)]
struct TranslateBody<'a> {
    /// Input text
    inputs: &'a str,
    /// Translation parameters
    parameters: TranslateParameters<'a>,
}

/// Translation parameters for the endpoint
#[derive(Debug, Serialize)]
struct TranslateParameters<'a> {
    /// Script-qualified source language code
    src_lang: &'a str,
    /// Script-qualified target language code
    tgt_lang: &'a str,
    /// Batch size hint
    batch_size: u32,
}

/// One translated segment in the endpoint's response array
#[derive(Debug, Deserialize)]
struct TranslateOutput {
    /// The translated text
    translation_text: String,
}

impl TranslatorClient {
    /// Create a new client with default transport settings
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self::new_with_config(endpoint, model, None, 60, 2, 500)
    }

    /// Create a new client with explicit transport settings
    pub fn new_with_config(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
        timeout_secs: u64,
        max_retries: u32,
        backoff_base_ms: u64,
    ) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key,
            max_retries,
            backoff_base_ms,
        }
    }

    /// Model identifier served by the endpoint
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Test the connection to the endpoint
    pub async fn test_connection(&self) -> Result<(), ProviderError> {
        let url = format!("{}/health", self.endpoint);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ProviderError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: format!("health check failed for {}", self.model),
            });
        }
        Ok(())
    }

    /// POST a request body with retry on transient failures.
    ///
    /// Connection errors and server errors are retried with exponential
    /// backoff; client errors are surfaced immediately.
    async fn post_with_retry(&self, body: &TranslateBody<'_>) -> Result<String, ProviderError> {
        let mut attempt = 0;
        let mut last_error = None;

        while attempt <= self.max_retries {
            let mut request = self.client.post(&self.endpoint).json(body);
            if let Some(key) = &self.api_key {
                request = request.bearer_auth(key);
            }

            match request.send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return response
                            .text()
                            .await
                            .map_err(|e| ProviderError::RequestFailed(e.to_string()));
                    }

                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Failed to get error response text".to_string());

                    if status.is_server_error() {
                        warn!(
                            "Translation endpoint error ({}): {} - attempt {}/{}",
                            status,
                            error_text,
                            attempt + 1,
                            self.max_retries + 1
                        );
                        last_error = Some(ProviderError::ApiError {
                            status_code: status.as_u16(),
                            message: error_text,
                        });
                    } else {
                        error!("Translation endpoint error ({}): {}", status, error_text);
                        return Err(classify_client_error(status.as_u16(), error_text));
                    }
                }
                Err(e) => {
                    warn!(
                        "Translation endpoint network error: {} - attempt {}/{}",
                        e,
                        attempt + 1,
                        self.max_retries + 1
                    );
                    last_error = Some(ProviderError::ConnectionError(e.to_string()));
                }
            }

            attempt += 1;
            if attempt <= self.max_retries {
                let backoff_ms = self.backoff_base_ms * (1u64 << (attempt - 1));
                tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
            }
        }

        Err(last_error.unwrap_or_else(|| {
            ProviderError::RequestFailed(format!(
                "translation request failed after {} attempts",
                self.max_retries + 1
            ))
        }))
    }
}

/// Map a non-retryable HTTP status to the matching provider error
fn classify_client_error(status_code: u16, message: String) -> ProviderError {
    match status_code {
        401 | 403 => ProviderError::AuthenticationError(message),
        429 => ProviderError::RateLimitExceeded(message),
        _ => ProviderError::ApiError {
            status_code,
            message,
        },
    }
}

#[async_trait]
impl TranslationBackend for TranslatorClient {
    async fn translate(
        &self,
        request: TranslationRequest,
    ) -> Result<Vec<TranslationPayload>, ProviderError> {
        let body = TranslateBody {
            inputs: &request.text,
            parameters: TranslateParameters {
                src_lang: &request.source_script,
                tgt_lang: &request.target_script,
                batch_size: request.batch_size,
            },
        };

        let response_text = self.post_with_retry(&body).await?;
        let outputs: Vec<TranslateOutput> = serde_json::from_str(&response_text)
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        Ok(outputs
            .into_iter()
            .map(|output| TranslationPayload {
                translation_text: output.translation_text,
            })
            .collect())
    }
}
