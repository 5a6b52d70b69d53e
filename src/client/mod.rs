//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use phonenumber::country;

use crate::domain::{ApiKey, Message, PhoneNumber, SecretKey, SendMessageResponse, ValidationError};

const DEFAULT_SEND_ENDPOINT: &str = "https://bluetexts-272923.uc.r.appspot.com/api/send-message";

const CONTENT_TYPE_HEADER: &str = "Content-Type";
const CONTENT_TYPE_JSON: &str = "application/json";

/// Region assumed when the recipient number has no explicit country prefix.
const DEFAULT_REGION: country::Id = country::Id::US;

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug)]
enum HttpCallError {
    /// The request could not be performed (DNS, connect, TLS, timeout).
    Request(BoxError),
    /// The request went out but the response body could not be read.
    ReadBody(BoxError),
}

trait HttpTransport: Send + Sync {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        headers: Vec<(String, String)>,
        body: String,
    ) -> BoxFuture<'a, Result<String, HttpCallError>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        headers: Vec<(String, String)>,
        body: String,
    ) -> BoxFuture<'a, Result<String, HttpCallError>> {
        Box::pin(async move {
            let mut request = self.client.post(url);
            for (name, value) in &headers {
                request = request.header(name.as_str(), value.as_str());
            }
            let response = request
                .body(body)
                .send()
                .await
                .map_err(|err| HttpCallError::Request(Box::new(err)))?;
            response
                .text()
                .await
                .map_err(|err| HttpCallError::ReadBody(Box::new(err)))
        })
    }
}

#[derive(Debug, Clone)]
/// Sendblue API credential pair.
///
/// Both values are sent as headers on every request: the API key as
/// `sb-api-key-id` and the secret key as `sb-api-secret-key`.
pub struct Credentials {
    api_key: ApiKey,
    secret_key: SecretKey,
}

impl Credentials {
    /// Create credentials, validating that both parts are non-empty.
    pub fn new(
        api_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            api_key: ApiKey::new(api_key)?,
            secret_key: SecretKey::new(secret_key)?,
        })
    }

    /// Create credentials from already-validated parts.
    pub fn from_parts(api_key: ApiKey, secret_key: SecretKey) -> Self {
        Self {
            api_key,
            secret_key,
        }
    }

    fn push_headers(&self, headers: &mut Vec<(String, String)>) {
        headers.push((ApiKey::HEADER.to_owned(), self.api_key.as_str().to_owned()));
        headers.push((
            SecretKey::HEADER.to_owned(),
            self.secret_key.as_str().to_owned(),
        ));
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SendblueClient`].
///
/// Every failure is returned to the caller; none of them poison the client,
/// which stays reusable for subsequent calls.
pub enum SendblueError {
    /// A phone number or credential value was rejected before any network
    /// call. Phone parse failures are user-correctable and not retryable.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The outbound request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    RequestBody(#[source] BoxError),

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// The response body could not be fully read.
    #[error("failed to read response body: {0}")]
    ResponseRead(#[source] BoxError),

    /// The response body was not the expected JSON shape.
    #[error("failed to parse response body: {0}")]
    ResponseParse(#[source] BoxError),

    /// Sendblue replied with `status == "ERROR"`.
    #[error("message rejected (error code: {})", error_code.as_deref().unwrap_or("none"))]
    Rejected { error_code: Option<String> },
}

#[derive(Debug, Clone)]
/// Builder for [`SendblueClient`].
///
/// Use this when you need to customize the endpoint (tests typically point it
/// at a local stub server), timeout, user-agent, or default region.
pub struct SendblueClientBuilder {
    credentials: Credentials,
    endpoint: String,
    default_region: country::Id,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl SendblueClientBuilder {
    /// Create a builder with the default endpoint and no timeout/user-agent override.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_SEND_ENDPOINT.to_owned(),
            default_region: DEFAULT_REGION,
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the send-message endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the region assumed for numbers without a country prefix.
    pub fn default_region(mut self, region: country::Id) -> Self {
        self.default_region = region;
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`SendblueClient`].
    pub fn build(self) -> Result<SendblueClient, SendblueError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| SendblueError::Transport(Box::new(err)))?;

        Ok(SendblueClient {
            credentials: self.credentials,
            endpoint: self.endpoint,
            default_region: self.default_region,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level Sendblue client.
///
/// This type orchestrates phone-number normalization, request encoding, one
/// HTTP exchange, and response decoding. It is immutable after construction
/// and safe to share across concurrent callers; each call is an independent
/// request/response exchange with no retry.
pub struct SendblueClient {
    credentials: Credentials,
    endpoint: String,
    default_region: country::Id,
    http: Arc<dyn HttpTransport>,
}

impl SendblueClient {
    /// Create a client using the default endpoint.
    ///
    /// For more customization, use [`SendblueClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_SEND_ENDPOINT.to_owned(),
            default_region: DEFAULT_REGION,
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> SendblueClientBuilder {
        SendblueClientBuilder::new(credentials)
    }

    /// Send a message to the phone number `to` with the given `body`.
    ///
    /// `to` is normalized to E.164 first (assuming the configured default
    /// region when it carries no country prefix); on a parse failure no
    /// network call is made. On success the decoded reply is returned, whose
    /// `from_number` is the number Sendblue actually sent from.
    ///
    /// Errors:
    /// - [`SendblueError::Validation`] when `to` cannot be parsed,
    /// - [`SendblueError::Transport`] / [`SendblueError::ResponseRead`] for
    ///   network-level failures,
    /// - [`SendblueError::ResponseParse`] for a malformed reply,
    /// - [`SendblueError::Rejected`] when Sendblue reports `ERROR`.
    pub async fn send_message(
        &self,
        to: &str,
        body: &str,
    ) -> Result<SendMessageResponse, SendblueError> {
        let number = PhoneNumber::parse(Some(self.default_region), to)?;
        let message = Message::new(number.e164(), body);

        let payload = crate::transport::encode_send_message_json(&message)
            .map_err(|err| SendblueError::RequestBody(Box::new(err)))?;

        let mut headers = vec![(CONTENT_TYPE_HEADER.to_owned(), CONTENT_TYPE_JSON.to_owned())];
        self.credentials.push_headers(&mut headers);

        let response_body = self
            .http
            .post_json(&self.endpoint, headers, payload)
            .await
            .map_err(|err| match err {
                HttpCallError::Request(source) => SendblueError::Transport(source),
                HttpCallError::ReadBody(source) => SendblueError::ResponseRead(source),
            })?;

        let parsed = crate::transport::decode_send_message_json_response(&response_body)
            .map_err(|err| SendblueError::ResponseParse(Box::new(err)))?;

        if parsed.status.is_error() {
            return Err(SendblueError::Rejected {
                error_code: parsed.error_code,
            });
        }

        Ok(parsed)
    }
}
