//! Doctor entity - the authenticated user's profile record
//!
//! The authoritative copy lives in the remote `doctors` table keyed by email.
//! A serialized copy is cached locally so a cold start can paint immediately.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::DoctorId;

/// Whether the doctor can currently take appointments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityStatus {
    #[default]
    Available,
    Busy,
    Offline,
}

impl AvailabilityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AvailabilityStatus::Available => "available",
            AvailabilityStatus::Busy => "busy",
            AvailabilityStatus::Offline => "offline",
        }
    }
}

impl std::str::FromStr for AvailabilityStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "available" => Ok(AvailabilityStatus::Available),
            "busy" => Ok(AvailabilityStatus::Busy),
            "offline" => Ok(AvailabilityStatus::Offline),
            _ => Err(DomainError::parse(format!(
                "Invalid availability status: {}",
                s
            ))),
        }
    }
}

/// Profile types allowed into the app.
///
/// Only rows of the `doctors` table carry one of these; an account without
/// such a row is turned away at login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffRole {
    #[default]
    Doctor,
    Admin,
}

impl StaffRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            StaffRole::Doctor => "doctor",
            StaffRole::Admin => "admin",
        }
    }
}

impl std::str::FromStr for StaffRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "doctor" => Ok(StaffRole::Doctor),
            "admin" => Ok(StaffRole::Admin),
            _ => Err(DomainError::parse(format!("Invalid staff role: {}", s))),
        }
    }
}

/// A doctor (or administrator) profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: DoctorId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub specialization: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
    pub availability_status: AvailabilityStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years_of_experience: Option<u32>,
    /// Older cached profiles predate this field
    #[serde(default)]
    pub role: StaffRole,
}

impl Doctor {
    pub fn new(
        id: impl Into<DoctorId>,
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        specialization: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            specialization: specialization.into(),
            profile_photo: None,
            phone: None,
            bio: None,
            verified: false,
            created_at,
            updated_at: None,
            languages: None,
            availability_status: AvailabilityStatus::Available,
            license_number: None,
            years_of_experience: None,
            role: StaffRole::Doctor,
        }
    }

    pub fn verified(mut self) -> Self {
        self.verified = true;
        self
    }

    pub fn with_role(mut self, role: StaffRole) -> Self {
        self.role = role;
        self
    }

    pub fn with_languages(mut self, languages: Vec<String>) -> Self {
        self.languages = Some(languages);
        self
    }

    pub fn with_license(mut self, license_number: impl Into<String>, years: u32) -> Self {
        self.license_number = Some(license_number.into());
        self.years_of_experience = Some(years);
        self
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_profile_photo(mut self, url: impl Into<String>) -> Self {
        self.profile_photo = Some(url.into());
        self
    }

    /// "Dr. First Last", as printed on prescriptions
    pub fn display_name(&self) -> String {
        format!("Dr. {} {}", self.first_name, self.last_name)
    }
}
