//! Wire contract for the external MealBridge REST API.
//!
//! Each body-carrying endpoint is described by a request type implementing
//! [`ApiRequest`], so the HTTP client can derive the path, method and
//! response type from the payload alone.

use crate::{
    DietaryPreference, Frequency, FulfillmentOption, MealOffer, MealRequest, UserProfile, UserRole,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP methods used by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// Ties a request payload to its endpoint and response type.
pub trait ApiRequest: Serialize + DeserializeOwned {
    /// The response type returned by this request.
    type Response: Serialize + DeserializeOwned;
    /// The URL path relative to the API base.
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;
}

// =========================================================
// Auth
// =========================================================

/// `POST /auth/register` — starts the email-verification onboarding.
///
/// No password is collected at this stage; the account is granted a
/// session only once the emailed code is confirmed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub role: UserRole,
    pub display_name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub email: String,
    pub message: String,
}

impl ApiRequest for RegisterRequest {
    type Response = RegisterResponse;
    const PATH: &'static str = "/auth/register";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// `POST /auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Carried by `login` and `verify-email` alike: the only two responses
/// that mint a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub user: UserProfile,
}

impl ApiRequest for LoginRequest {
    type Response = AuthResponse;
    const PATH: &'static str = "/auth/login";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// `POST /auth/verify-email`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyEmailRequest {
    pub email: String,
    pub code: String,
}

impl ApiRequest for VerifyEmailRequest {
    type Response = AuthResponse;
    const PATH: &'static str = "/auth/verify-email";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// `POST /auth/resend-otp`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResendOtpRequest {
    pub email: String,
    pub code_type: String,
}

impl ResendOtpRequest {
    pub fn email_code(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            code_type: "email".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResendOtpResponse {
    pub message: String,
}

impl ApiRequest for ResendOtpRequest {
    type Response = ResendOtpResponse;
    const PATH: &'static str = "/auth/resend-otp";
    const METHOD: HttpMethod = HttpMethod::Post;
}

// =========================================================
// Profile
// =========================================================

/// `PUT /users/profile`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub display_name: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub languages: Vec<String>,
}

impl ApiRequest for UpdateProfileRequest {
    type Response = UserProfile;
    const PATH: &'static str = "/users/profile";
    const METHOD: HttpMethod = HttpMethod::Put;
}

// =========================================================
// Listings
// =========================================================

/// `POST /requests`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMealRequest {
    pub city: String,
    pub state: String,
    pub zip: String,
    pub dietary_needs: Vec<DietaryPreference>,
    pub logistics: Vec<FulfillmentOption>,
    pub description: String,
    pub availability: String,
    pub frequency: Frequency,
}

impl ApiRequest for CreateMealRequest {
    type Response = MealRequest;
    const PATH: &'static str = "/requests";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// `POST /offers`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMealOffer {
    pub city: String,
    pub state: String,
    pub zip: String,
    pub dietary_tags: Vec<DietaryPreference>,
    pub logistics: Vec<FulfillmentOption>,
    pub description: String,
    pub availability: String,
    pub frequency: Frequency,
}

impl ApiRequest for CreateMealOffer {
    type Response = MealOffer;
    const PATH: &'static str = "/offers";
    const METHOD: HttpMethod = HttpMethod::Post;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_response_matches_backend_shape() {
        let json = r#"{
            "access_token": "tok-123",
            "user": {
                "id": "u-1",
                "role": "donor",
                "email": "donor@example.com",
                "display_name": "Kind Neighbor",
                "verification_status": "verified",
                "email_verified": true
            }
        }"#;
        let resp: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.access_token, "tok-123");
        assert_eq!(resp.user.role, UserRole::Donor);
    }

    #[test]
    fn resend_defaults_to_email_code() {
        let req = ResendOtpRequest::email_code("a@b.edu");
        assert_eq!(req.code_type, "email");
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"code_type\":\"email\""));
    }

    #[test]
    fn endpoint_metadata() {
        assert_eq!(LoginRequest::PATH, "/auth/login");
        assert_eq!(LoginRequest::METHOD, HttpMethod::Post);
        assert_eq!(UpdateProfileRequest::METHOD, HttpMethod::Put);
        assert_eq!(CreateMealRequest::PATH, "/requests");
    }
}
