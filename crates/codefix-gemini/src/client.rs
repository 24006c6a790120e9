//! HTTP client for the `generateContent` endpoint

use reqwest::Client;
use url::Url;

use codefix_core::prelude::*;

use crate::config::GeminiConfig;
use crate::protocol::{describe_error_body, GenerateContentRequest, GenerateContentResponse};

/// Header carrying the API key
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini REST client.
///
/// Cheap to clone; the underlying connection pool is shared. No request
/// timeout is configured, so a stalled call stays pending until the server
/// or the network gives up.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    http: Client,
}

impl GeminiClient {
    /// Create a client. A missing API key is not an error here; it is
    /// reported by the first request instead.
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("codefix/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::service(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { config, http })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// `{base_url}/models/{model}:generateContent`
    pub fn endpoint(&self) -> Result<Url> {
        let base = format!("{}/", self.config.base_url.trim_end_matches('/'));
        let base = Url::parse(&base)
            .map_err(|e| Error::config(format!("invalid base URL '{}': {e}", base)))?;
        base.join(&format!("models/{}:generateContent", self.config.model))
            .map_err(|e| Error::config(format!("invalid model name '{}': {e}", self.config.model)))
    }

    /// Send a request and return the first candidate's concatenated text.
    ///
    /// Errors:
    /// - [`Error::MissingApiKey`] before any network traffic
    /// - [`Error::Service`] for transport failures and non-2xx statuses
    /// - [`Error::EmptyResponse`] when the reply carries no text
    /// - [`Error::MalformedResponse`] when the envelope cannot be decoded
    pub async fn generate(&self, request: &GenerateContentRequest) -> Result<String> {
        let api_key = self.config.require_api_key()?;
        let url = self.endpoint()?;

        debug!("Sending generateContent request to {}", url);

        let response = self
            .http
            .post(url)
            .header(API_KEY_HEADER, api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| Error::service(format!("request failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::service(format!("failed to read response body: {e}")))?;

        debug!("generateContent response status: {}", status);

        if !status.is_success() {
            let detail = describe_error_body(&body);
            error!("Gemini API error: {} - {}", status, detail);
            return Err(Error::service(format!("HTTP {}: {}", status.as_u16(), detail)));
        }

        let decoded: GenerateContentResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to decode Gemini response: {}", e);
            Error::malformed(format!("unexpected response envelope: {e}"))
        })?;

        if let Some(usage) = &decoded.usage_metadata {
            debug!(
                "Gemini usage - prompt: {:?}, response: {:?}, total: {:?} tokens",
                usage.prompt_token_count, usage.candidates_token_count, usage.total_token_count
            );
        }

        match decoded.text() {
            Some(text) => Ok(text),
            None => {
                warn!(
                    "Gemini returned no text (finish reason: {})",
                    decoded.finish_reason().unwrap_or("unknown")
                );
                Err(Error::EmptyResponse)
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::protocol::{Content, Part};
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub(crate) const TEST_MODEL: &str = "test-model";

    pub(crate) fn test_client(server: &MockServer) -> GeminiClient {
        let config = GeminiConfig::default()
            .with_api_key("test-key")
            .with_model(TEST_MODEL)
            .with_base_url(server.uri());
        GeminiClient::new(config).unwrap()
    }

    pub(crate) fn text_reply(text: &str) -> serde_json::Value {
        json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": text}]},
                "finishReason": "STOP"
            }]
        })
    }

    fn simple_request() -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content::user(vec![Part::text("hello")])],
            system_instruction: None,
            generation_config: None,
        }
    }

    #[test]
    fn test_endpoint_joins_model() {
        let config = GeminiConfig::default().with_base_url("https://example.com/v1beta/");
        let client = GeminiClient::new(config).unwrap();
        assert_eq!(
            client.endpoint().unwrap().as_str(),
            "https://example.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[tokio::test]
    async fn test_generate_sends_key_header() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!("/models/{TEST_MODEL}:generateContent")))
            .and(header(API_KEY_HEADER, "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(text_reply("hi there")))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let text = client.generate(&simple_request()).await.unwrap();
        assert_eq!(text, "hi there");
    }

    #[tokio::test]
    async fn test_generate_without_key_never_hits_network() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(text_reply("x")))
            .expect(0)
            .mount(&server)
            .await;

        let config = GeminiConfig::default().with_base_url(server.uri());
        let client = GeminiClient::new(config).unwrap();
        let err = client.generate(&simple_request()).await.unwrap_err();
        assert!(matches!(err, Error::MissingApiKey { .. }));
    }

    #[tokio::test]
    async fn test_generate_maps_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403).set_body_raw(
                r#"{"error":{"code":403,"message":"Permission denied","status":"PERMISSION_DENIED"}}"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let err = test_client(&server)
            .generate(&simple_request())
            .await
            .unwrap_err();
        match err {
            Error::Service { message } => {
                assert!(message.contains("403"));
                assert!(message.contains("Permission denied"));
            }
            other => panic!("expected Service error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_generate_empty_candidates() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
            .mount(&server)
            .await;

        let err = test_client(&server)
            .generate(&simple_request())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::EmptyResponse));
    }

    #[tokio::test]
    async fn test_generate_undecodable_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("not json", "text/plain"))
            .mount(&server)
            .await;

        let err = test_client(&server)
            .generate(&simple_request())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn test_generate_connection_refused_is_service_error() {
        let config = GeminiConfig::default()
            .with_api_key("k")
            .with_base_url("http://127.0.0.1:1");
        let client = GeminiClient::new(config).unwrap();
        let err = client.generate(&simple_request()).await.unwrap_err();
        assert!(matches!(err, Error::Service { .. }));
    }
}
