//! Prescription entity - a diagnosis and the medications ordered for it

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::Patient;
use crate::error::DomainError;
use crate::ids::{AppointmentId, DoctorId, MedicationId, PatientId, PrescriptionId};

/// Lifecycle status of a prescription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrescriptionStatus {
    Active,
    Completed,
    Cancelled,
}

impl PrescriptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrescriptionStatus::Active => "active",
            PrescriptionStatus::Completed => "completed",
            PrescriptionStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PrescriptionStatus::Active => "Active",
            PrescriptionStatus::Completed => "Completed",
            PrescriptionStatus::Cancelled => "Cancelled",
        }
    }
}

impl std::str::FromStr for PrescriptionStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(PrescriptionStatus::Active),
            "completed" => Ok(PrescriptionStatus::Completed),
            "cancelled" | "canceled" => Ok(PrescriptionStatus::Cancelled),
            _ => Err(DomainError::parse(format!(
                "Invalid prescription status: {}",
                s
            ))),
        }
    }
}

/// One line of a prescription
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medication {
    pub id: MedicationId,
    pub name: String,
    /// e.g. "500mg"
    pub dosage: String,
    /// e.g. "Every 6 hours"
    pub frequency: String,
    /// e.g. "5 days"
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

impl Medication {
    pub fn new(
        name: impl Into<String>,
        dosage: impl Into<String>,
        frequency: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            id: MedicationId::new(),
            name: name.into(),
            dosage: dosage.into(),
            frequency: frequency.into(),
            duration: duration.into(),
            instructions: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<MedicationId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }
}

/// The appointment a prescription was written during
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentSummary {
    pub id: AppointmentId,
    pub title: String,
    pub scheduled_at: DateTime<Utc>,
}

/// A prescription issued by a doctor to a patient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    pub id: PrescriptionId,
    pub patient_id: PatientId,
    pub patient_name: String,
    pub doctor_id: DoctorId,
    pub doctor_name: String,
    pub diagnosis: String,
    /// Ordered as entered on the form
    pub medications: Vec<Medication>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub status: PrescriptionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient: Option<Patient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointment: Option<AppointmentSummary>,
}

impl Prescription {
    /// Whether the prescription can still be dispensed at `now`
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.status == PrescriptionStatus::Active
            && self.valid_until.map_or(true, |until| now <= until)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample(status: PrescriptionStatus, valid_until: Option<DateTime<Utc>>) -> Prescription {
        let at = Utc.with_ymd_and_hms(2025, 1, 10, 9, 0, 0).unwrap();
        Prescription {
            id: PrescriptionId::from("1"),
            patient_id: PatientId::from("1"),
            patient_name: "Alice Wilson".to_string(),
            doctor_id: DoctorId::from("1"),
            doctor_name: "Dr. John Smith".to_string(),
            diagnosis: "Common Cold".to_string(),
            medications: vec![Medication::new("Paracetamol", "500mg", "Every 6 hours", "5 days")
                .with_id("1")
                .with_instructions("Take with food")],
            notes: None,
            status,
            created_at: at,
            updated_at: at,
            valid_until,
            patient: None,
            appointment: None,
        }
    }

    #[test]
    fn validity_depends_on_status_and_expiry() {
        let now = Utc.with_ymd_and_hms(2025, 1, 12, 0, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2025, 1, 20, 0, 0, 0).unwrap();
        let earlier = Utc.with_ymd_and_hms(2025, 1, 11, 0, 0, 0).unwrap();

        assert!(sample(PrescriptionStatus::Active, None).is_valid_at(now));
        assert!(sample(PrescriptionStatus::Active, Some(later)).is_valid_at(now));
        assert!(!sample(PrescriptionStatus::Active, Some(earlier)).is_valid_at(now));
        assert!(!sample(PrescriptionStatus::Completed, None).is_valid_at(now));
    }

    #[test]
    fn medications_keep_their_order_in_json() {
        let mut prescription = sample(PrescriptionStatus::Active, None);
        prescription
            .medications
            .push(Medication::new("Cough Syrup", "10ml", "Every 8 hours", "7 days").with_id("2"));
        let json = serde_json::to_value(&prescription).unwrap();
        assert_eq!(json["medications"][0]["name"], "Paracetamol");
        assert_eq!(json["medications"][1]["name"], "Cough Syrup");
        assert_eq!(json["status"], "active");
    }
}
