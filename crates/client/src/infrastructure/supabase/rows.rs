//! Wire shapes of the remote `doctors` table.
//!
//! The database uses snake_case column names; the app model is camelCase.
//! Mapping is field-for-field.

use chrono::{DateTime, Utc};
use medidesk_domain::common::{parse_datetime, parse_datetime_or};
use medidesk_domain::{AvailabilityStatus, Doctor, DoctorId, StaffRole};
use serde::{Deserialize, Serialize};

use crate::ports::outbound::NewDoctor;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DoctorRow {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub specialization: String,
    #[serde(default)]
    pub profile_photo: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub languages: Option<Vec<String>>,
    #[serde(default)]
    pub availability_status: Option<String>,
    #[serde(default)]
    pub license_number: Option<String>,
    #[serde(default)]
    pub years_of_experience: Option<u32>,
    #[serde(default)]
    pub role: Option<String>,
}

impl DoctorRow {
    /// Convert to the app model. Unparseable timestamps fall back to
    /// `fallback_now`; unknown enum values fall back to their defaults.
    pub fn into_doctor(self, fallback_now: DateTime<Utc>) -> Doctor {
        let availability_status = self
            .availability_status
            .as_deref()
            .and_then(|s| s.parse::<AvailabilityStatus>().ok())
            .unwrap_or_default();
        let role = self
            .role
            .as_deref()
            .and_then(|s| s.parse::<StaffRole>().ok())
            .unwrap_or_default();

        Doctor {
            id: DoctorId::from(self.id),
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            specialization: self.specialization,
            profile_photo: self.profile_photo,
            phone: self.phone,
            bio: self.bio,
            verified: self.verified,
            created_at: self
                .created_at
                .as_deref()
                .map_or(fallback_now, |s| parse_datetime_or(s, fallback_now)),
            updated_at: self.updated_at.as_deref().and_then(|s| parse_datetime(s).ok()),
            languages: self.languages,
            availability_status,
            license_number: self.license_number,
            years_of_experience: self.years_of_experience,
            role,
        }
    }
}

/// Insert payload; unset columns are omitted so database defaults apply.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoctorInsertRow {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub specialization: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_status: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_of_experience: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<&'static str>,
}

impl From<&NewDoctor> for DoctorInsertRow {
    fn from(doctor: &NewDoctor) -> Self {
        Self {
            email: doctor.email.trim().to_string(),
            first_name: doctor.first_name.clone(),
            last_name: doctor.last_name.clone(),
            specialization: doctor.specialization.clone(),
            profile_photo: doctor.profile_photo.clone(),
            phone: doctor.phone.clone(),
            bio: doctor.bio.clone(),
            verified: doctor.verified,
            languages: doctor.languages.clone(),
            availability_status: doctor.availability_status.map(|s| s.as_str()),
            license_number: doctor.license_number.clone(),
            years_of_experience: doctor.years_of_experience,
            role: doctor.role.map(|r| r.as_str()),
        }
    }
}
