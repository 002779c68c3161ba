//! User entity - participants, caregivers, staff, and volunteers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{Snowflake, TokenLimit};

/// User role types in the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Participant,
    Caregiver,
    Staff,
    Volunteer,
}

impl UserRole {
    /// Stable string form used in storage and API responses
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Participant => "Participant",
            Self::Caregiver => "Caregiver",
            Self::Staff => "Staff",
            Self::Volunteer => "Volunteer",
        }
    }

    /// Parse the stable string form
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Participant" => Some(Self::Participant),
            "Caregiver" => Some(Self::Caregiver),
            "Staff" => Some(Self::Staff),
            "Volunteer" => Some(Self::Volunteer),
            _ => None,
        }
    }
}

/// Membership tier determining the weekly token allowance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MembershipTier {
    Adhoc,
    #[serde(rename = "Weekly_1")]
    Weekly1,
    #[serde(rename = "Weekly_2")]
    Weekly2,
    Unlimited,
}

impl MembershipTier {
    /// Weekly token limit for this tier.
    ///
    /// Fixed table: Adhoc=0, Weekly_1=1, Weekly_2=2, Unlimited=no cap.
    pub const fn weekly_token_limit(&self) -> TokenLimit {
        match self {
            Self::Adhoc => TokenLimit::Limited(0),
            Self::Weekly1 => TokenLimit::Limited(1),
            Self::Weekly2 => TokenLimit::Limited(2),
            Self::Unlimited => TokenLimit::Unlimited,
        }
    }

    /// Stable string form used in storage and API responses
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Adhoc => "Adhoc",
            Self::Weekly1 => "Weekly_1",
            Self::Weekly2 => "Weekly_2",
            Self::Unlimited => "Unlimited",
        }
    }

    /// Parse the stable string form
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Adhoc" => Some(Self::Adhoc),
            "Weekly_1" => Some(Self::Weekly1),
            "Weekly_2" => Some(Self::Weekly2),
            "Unlimited" => Some(Self::Unlimited),
            _ => None,
        }
    }
}

/// Accessibility needs recorded against a user.
///
/// Stored as JSON; missing keys default to `false` and unknown keys are
/// ignored on input (and dropped when the record is rewritten).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalFlags {
    #[serde(default)]
    pub wheelchair: bool,
    #[serde(default)]
    pub seizure_risk: bool,
}

/// User entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub membership_tier: MembershipTier,
    pub medical_flags: MedicalFlags,
    /// Caregiver -> dependent lookup relation. Never consulted by any
    /// booking check.
    pub linked_account_id: Option<Snowflake>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(
        id: Snowflake,
        name: String,
        email: String,
        role: UserRole,
        membership_tier: MembershipTier,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            email,
            role,
            membership_tier,
            medical_flags: MedicalFlags::default(),
            linked_account_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Weekly token limit from the membership tier table
    #[inline]
    pub const fn weekly_token_limit(&self) -> TokenLimit {
        self.membership_tier.weekly_token_limit()
    }

    /// Volunteers never consume tokens and book against volunteer slots
    #[inline]
    pub const fn is_volunteer(&self) -> bool {
        matches!(self.role, UserRole::Volunteer)
    }

    /// Whether the user needs wheelchair-accessible activities
    #[inline]
    pub const fn requires_wheelchair(&self) -> bool {
        self.medical_flags.wheelchair
    }
}
