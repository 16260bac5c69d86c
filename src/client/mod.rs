//! Client layer: executes catalog requests and classifies the responses.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use url::Url;

use crate::transport::{Method, Request, ResponseShape, failure_message, is_success};

mod accounts;
mod attachments;
mod contacts;
mod devices;
mod general;
mod groups;
mod identities;
mod interactions;
mod messages;
mod profiles;
#[cfg(test)]
mod testing;

/// Request timeout applied when the builder does not override it.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);

const DEFAULT_USER_AGENT: &str = concat!("signalapi/", env!("CARGO_PKG_VERSION"));

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone, PartialEq, Eq)]
struct HttpRequest {
    method: Method,
    url: Url,
    body: Option<String>,
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> BoxFuture<'_, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> BoxFuture<'_, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let method = match request.method {
                Method::Get => reqwest::Method::GET,
                Method::Post => reqwest::Method::POST,
                Method::Put => reqwest::Method::PUT,
                Method::Delete => reqwest::Method::DELETE,
            };
            let mut builder = self.client.request(method, request.url);
            if let Some(body) = request.body {
                builder = builder
                    .header(reqwest::header::CONTENT_TYPE, "application/json")
                    .body(body);
            }
            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SignalClient`].
///
/// Transport failures, service-reported failures and malformed success bodies
/// are kept apart:
/// - [`SignalError::Transport`]: the exchange did not complete,
/// - [`SignalError::Api`]: the gateway answered with a non-success status,
/// - [`SignalError::Parse`]: a success status carried a body of the wrong shape.
pub enum SignalError {
    /// HTTP client / transport failure (DNS, TLS, connection refused, timeouts).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The gateway returned a status outside `200`, `201`, `204`.
    ///
    /// `message` is the gateway's `{"error": ...}` text when the body carried
    /// one, otherwise a description containing the status and raw body.
    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        message: String,
        body: Option<String>,
    },

    /// A success response could not be decoded into the operation's result type.
    #[error("unexpected response shape (HTTP {status}): {source}")]
    Parse {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// The request body could not be serialized; nothing was sent.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The base URL, or a URL assembled from it, is not usable.
    #[error("invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The client was used after [`SignalClient::close`].
    #[error("client is closed")]
    Closed,
}

impl SignalError {
    /// HTTP status of the response that caused the error, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::Parse { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Service-reported message for [`SignalError::Api`].
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

#[derive(Debug, Clone)]
/// Builder for [`SignalClient`].
///
/// Use this when you need to customize the timeout or user-agent.
pub struct SignalClientBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: Option<String>,
}

impl SignalClientBuilder {
    /// Create a builder for the gateway at `base_url` with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Set the timeout applied to every request (default [`DEFAULT_TIMEOUT`]).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`SignalClient`].
    pub fn build(self) -> Result<SignalClient, SignalError> {
        let base_url = normalize_base_url(&self.base_url)?;

        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(
                self.user_agent
                    .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned()),
            )
            .build()
            .map_err(|err| SignalError::Transport(Box::new(err)))?;

        Ok(SignalClient::with_transport(
            base_url,
            Arc::new(ReqwestTransport { client }),
        ))
    }
}

/// Typed client for the signal-cli REST gateway.
///
/// Every operation issues exactly one HTTP request and returns either the
/// decoded result or a [`SignalError`]. The client can be shared across tasks
/// (`&SignalClient` is enough to call any operation concurrently).
pub struct SignalClient {
    base_url: String,
    http: RwLock<Option<Arc<dyn HttpTransport>>>,
}

impl std::fmt::Debug for SignalClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignalClient")
            .field("base_url", &self.base_url)
            .field("closed", &self.is_closed())
            .finish()
    }
}

impl SignalClient {
    /// Create a client for the gateway at `base_url` with default settings.
    ///
    /// For more customization, use [`SignalClient::builder`].
    pub fn new(base_url: impl Into<String>) -> Result<Self, SignalError> {
        SignalClientBuilder::new(base_url).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(base_url: impl Into<String>) -> SignalClientBuilder {
        SignalClientBuilder::new(base_url)
    }

    fn with_transport(base_url: String, http: Arc<dyn HttpTransport>) -> Self {
        Self {
            base_url,
            http: RwLock::new(Some(http)),
        }
    }

    /// Base URL every operation path is appended to (without trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Release the HTTP transport.
    ///
    /// Requests already in flight complete normally; later calls fail with
    /// [`SignalError::Closed`]. Closing an already closed client does nothing.
    pub fn close(&self) {
        let released = self
            .http
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if released.is_some() {
            tracing::debug!(base_url = %self.base_url, "signal client closed");
        }
    }

    pub fn is_closed(&self) -> bool {
        self.http
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }

    fn transport(&self) -> Result<Arc<dyn HttpTransport>, SignalError> {
        self.http
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(SignalError::Closed)
    }

    /// Execute one catalog request and classify the response.
    async fn execute<S: ResponseShape>(&self, request: Request<S>) -> Result<S::Output, SignalError> {
        let http = self.transport()?;
        let (method, path, query, body) = request.into_parts();

        let raw = format!("{}{}", self.base_url, path);
        let mut url = Url::parse(&raw).map_err(|err| SignalError::InvalidUrl {
            url: raw.clone(),
            reason: err.to_string(),
        })?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.iter());
        }

        tracing::debug!(%method, %path, has_body = body.is_some(), "dispatching gateway request");

        let response = http
            .execute(HttpRequest { method, url, body })
            .await
            .map_err(SignalError::Transport)?;

        tracing::debug!(
            %method,
            %path,
            status = response.status,
            body_len = response.body.len(),
            "gateway responded"
        );

        if !is_success(response.status) {
            let message = failure_message(response.status, &response.body);
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(SignalError::Api {
                status: response.status,
                message,
                body,
            });
        }

        let status = response.status;
        S::decode(response.body).map_err(|source| SignalError::Parse { status, source })
    }
}

fn normalize_base_url(raw: &str) -> Result<String, SignalError> {
    let invalid = |reason: String| SignalError::InvalidUrl {
        url: raw.to_owned(),
        reason,
    };

    let parsed = Url::parse(raw.trim()).map_err(|err| invalid(err.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {}", parsed.scheme())));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(invalid("base URL must not carry a query or fragment".to_owned()));
    }

    Ok(parsed.as_str().trim_end_matches('/').to_owned())
}
