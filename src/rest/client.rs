//! Biscoint REST API client implementation.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde_json::Value;
use url::Url;

use crate::auth::{Credentials, CredentialsProvider, sign_request};
use crate::error::BiscointError;
use crate::rest::endpoints::{API_KEY_HEADER, BISCOINT_BASE_URL, Operation, SIGNATURE_HEADER};
use crate::rest::params::{Params, REQUEST_KEY};
use crate::rest::private::{OfferRequest, TradesRequest};
use crate::rest::public::TickerRequest;
use crate::rest::traits::BiscointApi;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The Biscoint REST API client.
///
/// Every operation issues exactly one HTTP request and returns the `data`
/// field of the response envelope. The client holds only immutable
/// configuration and is cheap to clone.
///
/// # Example
///
/// ```rust,no_run
/// use biscoint_api_client::rest::{BiscointClient, TickerRequest};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Create a client for public endpoints only
///     let client = BiscointClient::public();
///
///     let ticker = client.get_ticker(&TickerRequest::default()).await?;
///     println!("Ticker: {ticker}");
///
///     Ok(())
/// }
/// ```
///
/// For private endpoints, provide credentials:
///
/// ```rust,no_run
/// use biscoint_api_client::rest::BiscointClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = BiscointClient::new("api_key", "api_secret");
///
///     let balance = client.get_balance().await?;
///     println!("Balance: {balance}");
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct BiscointClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    disabled: Arc<HashSet<Operation>>,
}

impl BiscointClient {
    /// Create a client for the production endpoint with the given credentials.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self::builder()
            .credentials(Arc::new(Credentials::new(api_key, api_secret)))
            .build()
    }

    /// Create a client without credentials.
    ///
    /// This client can only access public endpoints.
    /// Use [`BiscointClient::builder()`] for full configuration.
    pub fn public() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> BiscointClientBuilder {
        BiscointClientBuilder::new()
    }

    /// The base URL requests are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve an endpoint path against the base URL.
    pub fn endpoint_url(&self, operation: Operation) -> Result<Url, BiscointError> {
        Ok(Url::parse(&self.base_url)?.join(operation.path())?)
    }

    /// Check if credentials are configured.
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Check if an operation is available on this client.
    pub fn supports(&self, operation: Operation) -> bool {
        !self.disabled.contains(&operation)
    }

    /// Execute one operation: prune nulls, inject the `request` path, sign
    /// when required, send, and unwrap the `data` field.
    pub(crate) async fn call(
        &self,
        operation: Operation,
        params: Params,
    ) -> Result<Value, BiscointError> {
        if !self.supports(operation) {
            tracing::debug!(operation = %operation, "operation disabled, not sending");
            return Err(BiscointError::Unsupported(operation));
        }

        let path = operation.path();
        let params = params.without_nulls().with(REQUEST_KEY, path);

        let auth = if operation.requires_auth() {
            let provider = self
                .credentials
                .as_ref()
                .ok_or(BiscointError::MissingCredentials)?;
            let creds = provider.get_credentials();
            Some((creds.api_key.clone(), sign_request(creds, &params)?))
        } else {
            None
        };

        let mut url = self.endpoint_url(operation)?;
        let method = operation.method();
        tracing::debug!(
            operation = %operation,
            method = %method,
            path,
            signed = auth.is_some(),
            "sending request"
        );

        let encoded = params.to_urlencoded()?;
        let mut request = if method == Method::POST {
            self.http_client
                .post(url)
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(encoded)
        } else {
            url.set_query(Some(&encoded));
            self.http_client.request(method, url)
        };

        if let Some((api_key, signature)) = auth {
            request = request
                .header(API_KEY_HEADER, api_key)
                .header(SIGNATURE_HEADER, signature);
        }

        let response = request.send().await?;
        self.parse_response(operation, response).await
    }

    /// Parse a response from the Biscoint API.
    async fn parse_response(
        &self,
        operation: Operation,
        response: reqwest::Response,
    ) -> Result<Value, BiscointError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(operation = %operation, status = status.as_u16(), "request failed");
            return Err(BiscointError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let mut envelope: serde_json::Map<String, Value> =
            serde_json::from_str(&body).map_err(|e| {
                BiscointError::InvalidResponse(format!(
                    "Failed to parse response: {}. Body: {}",
                    e, body
                ))
            })?;

        envelope.remove("data").ok_or_else(|| {
            BiscointError::InvalidResponse("Response missing 'data' field".to_string())
        })
    }
}

impl Default for BiscointClient {
    fn default() -> Self {
        Self::public()
    }
}

impl std::fmt::Debug for BiscointClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BiscointClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.credentials.is_some())
            .field("disabled", &self.disabled)
            .finish()
    }
}

/// Builder for [`BiscointClient`].
pub struct BiscointClientBuilder {
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    user_agent: Option<String>,
    timeout: Duration,
    disabled: HashSet<Operation>,
}

impl BiscointClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: BISCOINT_BASE_URL.to_string(),
            credentials: None,
            user_agent: None,
            timeout: DEFAULT_TIMEOUT,
            disabled: HashSet::new(),
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the credentials provider for authenticated requests.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Mark an operation as unsupported by this deployment.
    ///
    /// Calling it returns [`BiscointError::Unsupported`] without any network
    /// traffic.
    pub fn disable(mut self, operation: Operation) -> Self {
        self.disabled.insert(operation);
        self
    }

    /// Build the client.
    pub fn build(self) -> BiscointClient {
        // Build default headers.
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("biscoint-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("biscoint-api-client"));
        headers.insert(USER_AGENT, header_value);

        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(self.timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        BiscointClient {
            http_client: client,
            base_url: self.base_url,
            credentials: self.credentials,
            disabled: Arc::new(self.disabled),
        }
    }
}

impl Default for BiscointClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// BiscointApi trait implementation.

impl BiscointApi for BiscointClient {
    // ========== Public Endpoints ==========

    async fn get_ticker(&self, request: &TickerRequest) -> Result<Value, BiscointError> {
        BiscointClient::get_ticker(self, request).await
    }

    async fn get_fees(&self) -> Result<Value, BiscointError> {
        BiscointClient::get_fees(self).await
    }

    async fn get_meta(&self) -> Result<Value, BiscointError> {
        BiscointClient::get_meta(self).await
    }

    // ========== Private Endpoints ==========

    async fn get_balance(&self) -> Result<Value, BiscointError> {
        BiscointClient::get_balance(self).await
    }

    async fn get_trades(&self, request: &TradesRequest) -> Result<Value, BiscointError> {
        BiscointClient::get_trades(self, request).await
    }

    async fn get_offer(&self, request: &OfferRequest) -> Result<Value, BiscointError> {
        BiscointClient::get_offer(self, request).await
    }

    async fn confirm_offer(&self, offer_id: &str) -> Result<Value, BiscointError> {
        BiscointClient::confirm_offer(self, offer_id).await
    }
}
