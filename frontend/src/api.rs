//! HTTP client for the external MealBridge backend.
//!
//! The sole path to and from the server. Every authenticated call
//! attaches the bearer token, and a 401 on any endpoint is normalized
//! into [`ApiError::Unauthorized`] so the caller can expire the session
//! uniformly instead of relying on ambient interceptors.

use gloo_net::http::{Request, RequestBuilder, Response};
use mealbridge_shared::protocol::{ApiRequest, HttpMethod};
use mealbridge_shared::{
    DietaryPreference, Donor, DonorCategory, MealOffer, MealRequest, UserProfile, UserStats,
};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Backend base URL, resolved at build time. Trunk builds export
/// `MEALBRIDGE_API_URL` to point at staging or production.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8001/api";

fn base_url_from_env() -> &'static str {
    option_env!("MEALBRIDGE_API_URL").unwrap_or(DEFAULT_BASE_URL)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport failure: the request never completed. Retryable.
    #[error("Network error. Please try again.")]
    Network(String),
    /// The backend rejected our token. Fatal to the session.
    #[error("Your session has expired.")]
    Unauthorized,
    /// Any other non-2xx response, with the backend's `detail` message.
    #[error("{message}")]
    Api { status: u16, message: String },
    /// 2xx response whose body did not match the expected shape.
    #[error("Unexpected response from server.")]
    Decode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}

/// FastAPI-style error body.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

fn error_for_status(status: u16, message: String) -> ApiError {
    if status == 401 {
        ApiError::Unauthorized
    } else {
        ApiError::Api { status, message }
    }
}

fn join_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// Percent-encode a query value. Unreserved characters (RFC 3986) pass
/// through; everything else, `&`/`=`/`#` included, is escaped.
fn encode_query_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// Append `?k=v&...` pairs, percent-encoding each value. Keys are
/// static identifiers and need no escaping.
fn with_query(mut url: String, query: &[(&str, String)]) -> String {
    for (i, (key, value)) in query.iter().enumerate() {
        url.push(if i == 0 { '?' } else { '&' });
        url.push_str(key);
        url.push('=');
        url.push_str(&encode_query_value(value));
    }
    url
}

fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Listing filters for `GET /requests` and `GET /offers`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingFilter {
    pub diet: Option<DietaryPreference>,
    pub city: Option<String>,
}

impl ListingFilter {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(diet) = &self.diet {
            query.push(("diet", diet.as_query().to_string()));
        }
        if let Some(city) = &self.city {
            if !city.trim().is_empty() {
                query.push(("city", city.trim().to_string()));
            }
        }
        query
    }
}

/// Thin, cloneable wrapper around the REST API. The token is baked in at
/// construction; a new session means a new client.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(token: Option<String>) -> Self {
        Self::with_base(base_url_from_env(), token)
    }

    pub fn with_base(base_url: impl Into<String>, token: Option<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, token }
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    fn apply_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &bearer_value(token)),
            None => builder,
        }
    }

    /// Issue a body-carrying request described by its payload type.
    pub async fn send<R: ApiRequest>(&self, payload: &R) -> Result<R::Response, ApiError> {
        let url = self.url(R::PATH);
        let builder = match R::METHOD {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Put => Request::put(&url),
            HttpMethod::Delete => Request::delete(&url),
        };
        let builder = self.apply_auth(builder);

        let response = match R::METHOD {
            HttpMethod::Get | HttpMethod::Delete => builder.send().await,
            HttpMethod::Post | HttpMethod::Put => {
                builder
                    .header("Content-Type", "application/json")
                    .json(payload)
                    .map_err(|e| ApiError::Network(e.to_string()))?
                    .send()
                    .await
            }
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::decode(response).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = with_query(self.url(path), query);
        let response = self
            .apply_auth(Request::get(&url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if response.ok() {
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        } else {
            let status = response.status();
            let fallback = response.status_text();
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.detail)
                .unwrap_or(fallback);
            Err(error_for_status(status, message))
        }
    }

    // ----- users -----

    pub async fn get_profile(&self) -> Result<UserProfile, ApiError> {
        self.get_json("/users/profile", &[]).await
    }

    pub async fn get_stats(&self) -> Result<UserStats, ApiError> {
        self.get_json("/users/stats", &[]).await
    }

    // ----- listings -----

    pub async fn get_requests(&self, filter: &ListingFilter) -> Result<Vec<MealRequest>, ApiError> {
        self.get_json("/requests", &filter.to_query()).await
    }

    pub async fn get_my_requests(&self) -> Result<Vec<MealRequest>, ApiError> {
        self.get_json("/requests/my-requests", &[]).await
    }

    pub async fn get_offers(&self, filter: &ListingFilter) -> Result<Vec<MealOffer>, ApiError> {
        self.get_json("/offers", &filter.to_query()).await
    }

    pub async fn get_my_offers(&self) -> Result<Vec<MealOffer>, ApiError> {
        self.get_json("/offers/my-offers", &[]).await
    }

    // ----- donors -----

    pub async fn get_donors(&self, category: Option<DonorCategory>) -> Result<Vec<Donor>, ApiError> {
        let query: Vec<(&str, String)> = category
            .map(|c| vec![("category", c.as_query().to_string())])
            .unwrap_or_default();
        self.get_json("/donors", &query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::with_base("https://api.example.org/", None);
        assert_eq!(client.url("/requests"), "https://api.example.org/requests");
        assert_eq!(client.url("requests"), "https://api.example.org/requests");
    }

    #[test]
    fn query_string_building() {
        let url = with_query(
            "http://x/requests".to_string(),
            &[("diet", "VEGAN".to_string()), ("city", "San Jose".to_string())],
        );
        assert_eq!(url, "http://x/requests?diet=VEGAN&city=San%20Jose");
        assert_eq!(with_query("http://x/offers".to_string(), &[]), "http://x/offers");
    }

    #[test]
    fn query_values_with_reserved_characters_are_escaped() {
        assert_eq!(encode_query_value("Minneapolis-St. Paul"), "Minneapolis-St.%20Paul");
        assert_eq!(encode_query_value("a&b=c#d"), "a%26b%3Dc%23d");
        let url = with_query(
            "http://x/requests".to_string(),
            &[("city", "Research & Park".to_string())],
        );
        assert_eq!(url, "http://x/requests?city=Research%20%26%20Park");
    }

    #[test]
    fn unauthorized_is_a_distinct_error_kind() {
        let err = error_for_status(401, "Could not validate credentials".to_string());
        assert!(err.is_unauthorized());
        assert!(!err.is_retryable());

        let err = error_for_status(422, "Invalid email".to_string());
        assert_eq!(
            err,
            ApiError::Api {
                status: 422,
                message: "Invalid email".to_string()
            }
        );
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn network_errors_are_retryable() {
        assert!(ApiError::Network("failed to fetch".into()).is_retryable());
        assert!(!ApiError::Decode("bad json".into()).is_retryable());
    }

    #[test]
    fn bearer_header_format() {
        assert_eq!(bearer_value("abc123"), "Bearer abc123");
    }

    #[test]
    fn listing_filter_query() {
        let filter = ListingFilter {
            diet: Some(DietaryPreference::Halal),
            city: Some("  Austin ".to_string()),
        };
        assert_eq!(
            filter.to_query(),
            vec![("diet", "HALAL".to_string()), ("city", "Austin".to_string())]
        );
        assert!(ListingFilter::default().to_query().is_empty());
    }
}
