//! Consultation view - an appointment seen from the consultations screen

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{Appointment, AppointmentStatus, AppointmentType, Patient};
use crate::ids::{AppointmentId, ConsultationId, DoctorId, PatientId};

/// Where a consultation stands from the doctor's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsultationStatus {
    Active,
    Waiting,
    Completed,
}

impl From<AppointmentStatus> for ConsultationStatus {
    fn from(status: AppointmentStatus) -> Self {
        match status {
            AppointmentStatus::InProgress => ConsultationStatus::Active,
            AppointmentStatus::Completed => ConsultationStatus::Completed,
            // Scheduled and confirmed are waiting; so is anything unexpected
            _ => ConsultationStatus::Waiting,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consultation {
    pub id: ConsultationId,
    pub appointment_id: AppointmentId,
    pub patient_id: PatientId,
    pub doctor_id: DoctorId,
    pub patient: Patient,
    pub title: String,
    #[serde(rename = "type")]
    pub consultation_type: AppointmentType,
    pub status: ConsultationStatus,
    pub scheduled_at: DateTime<Utc>,
    pub duration: u32,
    pub created_at: DateTime<Utc>,
}

impl From<&Appointment> for Consultation {
    fn from(apt: &Appointment) -> Self {
        Self {
            id: ConsultationId::from(apt.id.as_str()),
            appointment_id: apt.id.clone(),
            patient_id: apt.patient_id.clone(),
            doctor_id: apt.doctor_id.clone(),
            patient: apt.patient.clone(),
            title: apt.title.clone(),
            consultation_type: apt.appointment_type,
            status: apt.status.into(),
            scheduled_at: apt.scheduled_at,
            duration: apt.duration,
            created_at: apt.created_at,
        }
    }
}
