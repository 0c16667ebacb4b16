//! Domain models shared between the MealBridge frontend and its tooling.
//!
//! Everything here is plain data: the backend owns the records, the
//! frontend only deserializes and displays them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub mod protocol;

// =========================================================
// Users
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Student,
    Donor,
    Admin,
}

impl Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Student => write!(f, "Student"),
            UserRole::Donor => write!(f, "Donor"),
            UserRole::Admin => write!(f, "Admin"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    #[default]
    Pending,
    Verified,
    Rejected,
}

/// Profile record returned by `/auth/*` and `/users/profile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub role: UserRole,
    pub email: String,
    pub display_name: String,
    pub verification_status: VerificationStatus,
    pub email_verified: bool,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip: String,
    #[serde(default)]
    pub languages: Vec<String>,
}

/// Aggregate counters shown on the dashboards (`/users/stats`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserStats {
    pub meals_shared: u32,
    pub meals_received: u32,
    pub active_posts: u32,
}

// =========================================================
// Meal listings
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DietaryPreference {
    Vegan,
    Vegetarian,
    JainVeg,
    Halal,
    Kosher,
    GlutenFree,
    NoPreference,
}

impl DietaryPreference {
    pub fn label(&self) -> &'static str {
        match self {
            DietaryPreference::Vegan => "Vegan",
            DietaryPreference::Vegetarian => "Vegetarian",
            DietaryPreference::JainVeg => "Jain Veg",
            DietaryPreference::Halal => "Halal",
            DietaryPreference::Kosher => "Kosher",
            DietaryPreference::GlutenFree => "Gluten Free",
            DietaryPreference::NoPreference => "No Preference",
        }
    }

    /// Query-string value for the `diet=` listing filter.
    pub fn as_query(&self) -> &'static str {
        match self {
            DietaryPreference::Vegan => "VEGAN",
            DietaryPreference::Vegetarian => "VEGETARIAN",
            DietaryPreference::JainVeg => "JAIN_VEG",
            DietaryPreference::Halal => "HALAL",
            DietaryPreference::Kosher => "KOSHER",
            DietaryPreference::GlutenFree => "GLUTEN_FREE",
            DietaryPreference::NoPreference => "NO_PREFERENCE",
        }
    }

    pub const ALL: [DietaryPreference; 7] = [
        DietaryPreference::Vegan,
        DietaryPreference::Vegetarian,
        DietaryPreference::JainVeg,
        DietaryPreference::Halal,
        DietaryPreference::Kosher,
        DietaryPreference::GlutenFree,
        DietaryPreference::NoPreference,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FulfillmentOption {
    Pickup,
    Delivery,
}

impl FulfillmentOption {
    pub fn label(&self) -> &'static str {
        match self {
            FulfillmentOption::Pickup => "Pickup",
            FulfillmentOption::Delivery => "Delivery",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Frequency {
    #[default]
    Once,
    Weekly,
    Daily,
}

impl Frequency {
    pub fn label(&self) -> &'static str {
        match self {
            Frequency::Once => "One-time",
            Frequency::Weekly => "Weekly",
            Frequency::Daily => "Daily",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    Open,
    InProgress,
    Paused,
    Fulfilled,
    Expired,
    Flagged,
}

impl RequestStatus {
    /// Whether the request still needs attention from its owner.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            RequestStatus::Open | RequestStatus::InProgress | RequestStatus::Paused
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OfferStatus {
    Available,
    InProgress,
    Claimed,
    Flagged,
}

impl OfferStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, OfferStatus::Available | OfferStatus::InProgress)
    }
}

/// A meal request posted by a student. The poster is only ever exposed
/// through a masked display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealRequest {
    pub id: String,
    pub seeker_id: String,
    pub seeker_name: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub dietary_needs: Vec<DietaryPreference>,
    pub logistics: Vec<FulfillmentOption>,
    pub description: String,
    #[serde(default)]
    pub availability: String,
    pub frequency: Frequency,
    pub posted_at: DateTime<Utc>,
    pub status: RequestStatus,
}

/// A meal offer posted by a donor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealOffer {
    pub id: String,
    pub donor_id: String,
    pub donor_name: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub dietary_tags: Vec<DietaryPreference>,
    pub logistics: Vec<FulfillmentOption>,
    pub description: String,
    #[serde(default)]
    pub availability: String,
    pub frequency: Frequency,
    pub posted_at: DateTime<Utc>,
    pub status: OfferStatus,
}

// =========================================================
// Donor partners
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DonorCategory {
    Individual,
    Religious,
    NonProfit,
    Government,
    Business,
    University,
    FamilyOffice,
}

impl DonorCategory {
    pub fn label(&self) -> &'static str {
        match self {
            DonorCategory::Individual => "Individual",
            DonorCategory::Religious => "Religious Organization",
            DonorCategory::NonProfit => "Non-Profit",
            DonorCategory::Government => "Government",
            DonorCategory::Business => "Business",
            DonorCategory::University => "University",
            DonorCategory::FamilyOffice => "Family Office",
        }
    }

    /// Query-string value for `GET /donors?category=`.
    pub fn as_query(&self) -> &'static str {
        match self {
            DonorCategory::Individual => "INDIVIDUAL",
            DonorCategory::Religious => "RELIGIOUS",
            DonorCategory::NonProfit => "NON_PROFIT",
            DonorCategory::Government => "GOVERNMENT",
            DonorCategory::Business => "BUSINESS",
            DonorCategory::University => "UNIVERSITY",
            DonorCategory::FamilyOffice => "FAMILY_OFFICE",
        }
    }

    pub const ALL: [DonorCategory; 7] = [
        DonorCategory::Individual,
        DonorCategory::Religious,
        DonorCategory::NonProfit,
        DonorCategory::Government,
        DonorCategory::Business,
        DonorCategory::University,
        DonorCategory::FamilyOffice,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DonorTier {
    Platinum,
    Gold,
    Silver,
    Bronze,
}

/// A recognized donor partner listed on the public donors page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donor {
    pub id: String,
    pub name: String,
    pub category: DonorCategory,
    pub tier: DonorTier,
    #[serde(default)]
    pub logo_url: Option<String>,
    pub total_contribution_display: String,
    #[serde(default)]
    pub is_anonymous: bool,
    #[serde(default)]
    pub anonymous_name: Option<String>,
    pub location: String,
    pub since: String,
    #[serde(default)]
    pub quote: Option<String>,
    #[serde(default)]
    pub is_recurring: bool,
}

impl Donor {
    /// Public-facing name, honoring the anonymity flag.
    pub fn public_name(&self) -> &str {
        if self.is_anonymous {
            self.anonymous_name.as_deref().unwrap_or("Anonymous")
        } else {
            &self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&UserRole::Student).unwrap(), "\"student\"");
        assert_eq!(serde_json::to_string(&UserRole::Donor).unwrap(), "\"donor\"");
        let role: UserRole = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, UserRole::Admin);
    }

    #[test]
    fn statuses_use_screaming_snake_case() {
        let status: RequestStatus = serde_json::from_str("\"IN_PROGRESS\"").unwrap();
        assert_eq!(status, RequestStatus::InProgress);
        assert_eq!(
            serde_json::to_string(&OfferStatus::Available).unwrap(),
            "\"AVAILABLE\""
        );
    }

    #[test]
    fn profile_tolerates_missing_optional_fields() {
        let json = r#"{
            "id": "u-1",
            "role": "student",
            "email": "student@university.edu",
            "display_name": "Studious Owl",
            "verification_status": "verified",
            "email_verified": true
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.role, UserRole::Student);
        assert!(profile.city.is_empty());
        assert!(profile.languages.is_empty());
    }

    #[test]
    fn anonymous_donor_masks_name() {
        let donor = Donor {
            id: "d-5".into(),
            name: "Real Name".into(),
            category: DonorCategory::Individual,
            tier: DonorTier::Platinum,
            logo_url: None,
            total_contribution_display: "18,000 Meals".into(),
            is_anonymous: true,
            anonymous_name: Some("A Caring Family".into()),
            location: "Toronto, ON".into(),
            since: "2023".into(),
            quote: None,
            is_recurring: true,
        };
        assert_eq!(donor.public_name(), "A Caring Family");
    }

    #[test]
    fn active_statuses() {
        assert!(RequestStatus::Paused.is_active());
        assert!(!RequestStatus::Fulfilled.is_active());
        assert!(OfferStatus::InProgress.is_active());
        assert!(!OfferStatus::Claimed.is_active());
    }
}
