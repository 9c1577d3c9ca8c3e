//! Form drafts - what the create/refuse screens collect before submission
//!
//! Drafts hold raw text exactly as typed. `validate` is the only gate: a
//! draft that passes can be turned into an entity without further checks.

use chrono::{DateTime, Utc};

use crate::common::{is_blank, none_if_blank};
use crate::entities::{AppointmentPriority, AppointmentType, Medication};
use crate::error::DomainError;
use crate::ids::{MedicationId, PatientId};

pub const REFUSAL_REASON_REQUIRED: &str = "Please provide a reason for refusing the appointment";

/// New appointment form
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentDraft {
    pub title: String,
    pub description: String,
    /// Selected patient; empty until one is picked
    pub patient_id: String,
    pub appointment_type: AppointmentType,
    pub priority: AppointmentPriority,
    /// Defaults to the submission time when not picked
    pub scheduled_at: Option<DateTime<Utc>>,
    pub duration: Option<u32>,
}

impl Default for AppointmentDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            patient_id: String::new(),
            appointment_type: AppointmentType::Video,
            priority: AppointmentPriority::Normal,
            scheduled_at: None,
            duration: None,
        }
    }
}

impl AppointmentDraft {
    /// Title and patient are required.
    pub fn validate(&self) -> Result<(), DomainError> {
        if is_blank(&self.title) || is_blank(&self.patient_id) {
            return Err(DomainError::required_fields());
        }
        Ok(())
    }

    pub fn patient_id(&self) -> PatientId {
        PatientId::from(self.patient_id.trim())
    }

    pub fn description(&self) -> Option<String> {
        none_if_blank(&self.description)
    }
}

/// Which medication field an edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MedicationField {
    Name,
    Dosage,
    Frequency,
    Duration,
    Instructions,
}

/// One editable medication row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedicationDraft {
    pub id: MedicationId,
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub duration: String,
    pub instructions: String,
}

impl MedicationDraft {
    pub fn blank() -> Self {
        Self {
            id: MedicationId::new(),
            name: String::new(),
            dosage: String::new(),
            frequency: String::new(),
            duration: String::new(),
            instructions: String::new(),
        }
    }

    fn set(&mut self, field: MedicationField, value: String) {
        match field {
            MedicationField::Name => self.name = value,
            MedicationField::Dosage => self.dosage = value,
            MedicationField::Frequency => self.frequency = value,
            MedicationField::Duration => self.duration = value,
            MedicationField::Instructions => self.instructions = value,
        }
    }

    fn to_medication(&self) -> Medication {
        Medication {
            id: self.id.clone(),
            name: self.name.trim().to_string(),
            dosage: self.dosage.trim().to_string(),
            frequency: self.frequency.trim().to_string(),
            duration: self.duration.trim().to_string(),
            instructions: none_if_blank(&self.instructions),
        }
    }
}

/// New prescription form. Always holds at least one medication row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrescriptionDraft {
    pub patient_id: String,
    pub diagnosis: String,
    pub notes: String,
    medications: Vec<MedicationDraft>,
}

impl Default for PrescriptionDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl PrescriptionDraft {
    pub fn new() -> Self {
        Self {
            patient_id: String::new(),
            diagnosis: String::new(),
            notes: String::new(),
            medications: vec![MedicationDraft::blank()],
        }
    }

    pub fn medications(&self) -> &[MedicationDraft] {
        &self.medications
    }

    /// Append a blank row and return its id.
    pub fn add_medication(&mut self) -> MedicationId {
        let row = MedicationDraft::blank();
        let id = row.id.clone();
        self.medications.push(row);
        id
    }

    /// Remove a row. The last remaining row is never removed.
    pub fn remove_medication(&mut self, id: &MedicationId) -> bool {
        if self.medications.len() <= 1 {
            return false;
        }
        let before = self.medications.len();
        self.medications.retain(|m| &m.id != id);
        self.medications.len() != before
    }

    pub fn update_medication(
        &mut self,
        id: &MedicationId,
        field: MedicationField,
        value: impl Into<String>,
    ) -> bool {
        match self.medications.iter_mut().find(|m| &m.id == id) {
            Some(row) => {
                row.set(field, value.into());
                true
            }
            None => false,
        }
    }

    /// Patient, diagnosis, and a name on every medication row are required.
    pub fn validate(&self) -> Result<(), DomainError> {
        if is_blank(&self.patient_id)
            || is_blank(&self.diagnosis)
            || self.medications.iter().any(|m| is_blank(&m.name))
        {
            return Err(DomainError::required_fields());
        }
        Ok(())
    }

    pub fn patient_id(&self) -> PatientId {
        PatientId::from(self.patient_id.trim())
    }

    pub fn notes(&self) -> Option<String> {
        none_if_blank(&self.notes)
    }

    pub fn to_medications(&self) -> Vec<Medication> {
        self.medications.iter().map(MedicationDraft::to_medication).collect()
    }
}

/// Check the refusal reason typed into the refuse dialog, returning it trimmed.
pub fn validate_refusal_reason(reason: &str) -> Result<String, DomainError> {
    none_if_blank(reason).ok_or_else(|| DomainError::validation(REFUSAL_REASON_REQUIRED))
}
