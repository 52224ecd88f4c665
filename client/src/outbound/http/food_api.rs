//! Reqwest-backed food API adapter.
//!
//! This adapter owns transport details only: URL resolution, JSON encoding,
//! timeout and HTTP error mapping, and decoding into domain types.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::dto::{AuthResponseDto, FoodListDto, SignUpRequestDto};
use crate::domain::ports::{FoodApi, FoodApiError};
use crate::domain::{AuthToken, FoodItemId, SignUpRequest};

const FOOD_PATH: &str = "/food";
const SIGN_UP_PATH: &str = "/auth/signup";
const DEFAULT_USER_AGENT: &str = concat!("food-delivery-client/", env!("CARGO_PKG_VERSION"));

/// Outbound identity sent with every request.
pub struct HttpFoodApiIdentity {
    /// HTTP user-agent sent to the API.
    pub user_agent: String,
}

impl Default for HttpFoodApiIdentity {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

/// Food API adapter talking JSON over HTTP to one base URL.
pub struct HttpFoodApi {
    client: Client,
    base_url: Url,
}

impl HttpFoodApi {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    /// ```rust,no_run
    /// use std::time::Duration;
    ///
    /// use food_delivery_client::outbound::http::HttpFoodApi;
    ///
    /// let base = url::Url::parse("http://10.0.2.2:8080").expect("valid URL");
    /// let api = HttpFoodApi::new(base, Duration::from_secs(30));
    /// assert!(api.is_ok());
    /// ```
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        Self::with_identity(base_url, timeout, HttpFoodApiIdentity::default())
    }

    /// Build an adapter with an explicit outbound identity.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_identity(
        base_url: Url,
        timeout: Duration,
        identity: HttpFoodApiIdentity,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(identity.user_agent)
            .build()?;
        Ok(Self::from_client(base_url, client))
    }

    /// Wrap an already configured reqwest client.
    ///
    /// Timeouts, proxies and headers are whatever `client` was built with.
    pub fn from_client(base_url: Url, client: Client) -> Self {
        Self { client, base_url }
    }

    /// Base URL every request path is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&SignUpRequestDto<'_>>,
    ) -> Result<T, FoodApiError> {
        let endpoint = resolve_endpoint(&self.base_url, path)?;
        let mut request = self
            .client
            .request(method, endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(map_transport_error)?;
        debug!(%endpoint, status = status.as_u16(), bytes = bytes.len(), "food api response");
        if !status.is_success() {
            return Err(map_status_error(status, bytes.as_ref()));
        }

        decode(bytes.as_ref())
    }
}

#[async_trait]
impl FoodApi for HttpFoodApi {
    async fn fetch_food(&self) -> Result<Vec<FoodItemId>, FoodApiError> {
        let list: FoodListDto = self.call(Method::GET, FOOD_PATH, None).await?;
        Ok(list.into_domain())
    }

    async fn sign_up(&self, request: &SignUpRequest) -> Result<AuthToken, FoodApiError> {
        let body = SignUpRequestDto::from(request);
        let response: AuthResponseDto = self.call(Method::POST, SIGN_UP_PATH, Some(&body)).await?;
        Ok(response.into_domain())
    }
}

fn resolve_endpoint(base_url: &Url, path: &str) -> Result<Url, FoodApiError> {
    base_url.join(path).map_err(|error| {
        FoodApiError::invalid_endpoint(format!("cannot resolve {path} against {base_url}: {error}"))
    })
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, FoodApiError> {
    serde_json::from_slice(body).map_err(|error| {
        FoodApiError::decode(format!("invalid JSON payload: {error}"))
    })
}

fn map_transport_error(error: reqwest::Error) -> FoodApiError {
    if error.is_timeout() {
        FoodApiError::timeout(error.to_string())
    } else if error.is_decode() {
        FoodApiError::decode(error.to_string())
    } else {
        FoodApiError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> FoodApiError {
    let body_preview = body_preview(body);
    let message = if body_preview.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("no response body")
            .to_owned()
    } else {
        body_preview
    };

    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            FoodApiError::timeout(format!("status {}: {message}", status.as_u16()))
        }
        _ => FoodApiError::rejected(status.as_u16(), message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for non-network mapping helpers.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::bare_host("http://10.0.2.2:8080", "/food", "http://10.0.2.2:8080/food")]
    #[case::trailing_slash("http://api.local/", "/auth/signup", "http://api.local/auth/signup")]
    #[case::prefix_replaced("https://api.local/v1/", "/food", "https://api.local/food")]
    fn endpoints_resolve_from_host_root(
        #[case] base: &str,
        #[case] path: &str,
        #[case] expected: &str,
    ) {
        let base = Url::parse(base).expect("valid base");
        let endpoint = resolve_endpoint(&base, path).expect("endpoint resolves");
        assert_eq!(endpoint.as_str(), expected);
    }

    #[rstest]
    fn cannot_be_a_base_urls_are_rejected() {
        let base = Url::parse("mailto:orders@food.invalid").expect("valid URL");
        let error = resolve_endpoint(&base, FOOD_PATH).expect_err("join must fail");
        assert!(
            matches!(error, FoodApiError::InvalidEndpoint { .. }),
            "unresolvable bases should map to InvalidEndpoint",
        );
    }

    #[rstest]
    #[case::request_timeout(StatusCode::REQUEST_TIMEOUT, "Timeout")]
    #[case::gateway_timeout(StatusCode::GATEWAY_TIMEOUT, "Timeout")]
    #[case::conflict(StatusCode::CONFLICT, "Rejected")]
    #[case::server_error(StatusCode::INTERNAL_SERVER_ERROR, "Rejected")]
    fn maps_http_statuses_to_expected_domain_errors(
        #[case] status: StatusCode,
        #[case] expected: &str,
    ) {
        let error = map_status_error(status, b"{\"error\":\"try later\"}");
        let sent = status.as_u16();
        match expected {
            "Timeout" => assert!(
                matches!(error, FoodApiError::Timeout { .. }),
                "timeout statuses should map to Timeout",
            ),
            "Rejected" => assert!(
                matches!(error, FoodApiError::Rejected { status: code, .. } if code == sent),
                "other statuses should map to Rejected with the status code",
            ),
            _ => panic!("unsupported test expectation: {expected}"),
        }
    }

    #[rstest]
    fn empty_error_bodies_fall_back_to_reason_phrase() {
        let error = map_status_error(StatusCode::UNAUTHORIZED, b"  \n ");
        assert_eq!(error, FoodApiError::rejected(401_u16, "Unauthorized"));
    }

    #[rstest]
    fn long_bodies_are_truncated_and_compacted() {
        let body = format!("line one\n\n   {}", "x".repeat(400));
        let preview = body_preview(body.as_bytes());
        assert!(preview.starts_with("line one x"));
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), 163);
    }

    #[rstest]
    fn decodes_food_lists_in_server_order() {
        let list: FoodListDto = decode(br#"["soup", "curry", "soup"]"#).expect("list decodes");
        let ids: Vec<String> = list.into_domain().into_iter().map(|id| id.to_string()).collect();
        assert_eq!(ids, ["soup", "curry", "soup"]);
    }

    #[rstest]
    #[case::missing_token(br#"{"user":"ana"}"#.as_slice())]
    #[case::wrong_type(br#"{"token":42}"#.as_slice())]
    #[case::not_json(b"<html>oops</html>".as_slice())]
    fn malformed_auth_responses_map_to_decode(#[case] body: &[u8]) {
        let error = decode::<AuthResponseDto>(body)
            .map(AuthResponseDto::into_domain)
            .expect_err("decode should fail");
        assert!(
            matches!(error, FoodApiError::Decode { .. }),
            "malformed payloads should map to Decode errors",
        );
    }

    #[rstest]
    fn sign_up_body_matches_wire_contract() {
        let request = SignUpRequest::new("Ana", "ana@x.com", "secret123");
        let body = serde_json::to_value(SignUpRequestDto::from(&request)).expect("serialises");
        assert_eq!(
            body,
            serde_json::json!({"name": "Ana", "email": "ana@x.com", "password": "secret123"})
        );
    }
}
