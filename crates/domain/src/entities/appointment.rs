//! Appointment entity - a scheduled interaction between a doctor and a patient
//!
//! Status changes are caller-directed: any status may be replaced by any
//! other. [`AppointmentStatus::available_actions`] only describes which
//! buttons a screen offers; nothing enforces it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::Patient;
use crate::error::DomainError;
use crate::ids::{AppointmentId, DoctorId, PatientId};

/// Default length of an appointment when none is given
pub const DEFAULT_APPOINTMENT_MINUTES: u32 = 30;

/// Lifecycle status of an appointment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Scheduled,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
    NoShow,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 6] = [
        AppointmentStatus::Scheduled,
        AppointmentStatus::Confirmed,
        AppointmentStatus::InProgress,
        AppointmentStatus::Completed,
        AppointmentStatus::Cancelled,
        AppointmentStatus::NoShow,
    ];

    /// Wire name used by the remote database and the local cache
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::InProgress => "in_progress",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::NoShow => "no_show",
        }
    }

    /// Get a display name for the status badge
    pub fn display_name(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "Scheduled",
            AppointmentStatus::Confirmed => "Confirmed",
            AppointmentStatus::InProgress => "In Progress",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::Cancelled => "Cancelled",
            AppointmentStatus::NoShow => "No Show",
        }
    }

    /// Actions an appointment card offers in this status.
    pub fn available_actions(&self) -> &'static [AppointmentAction] {
        match self {
            AppointmentStatus::Scheduled => &[
                AppointmentAction::Accept,
                AppointmentAction::Reschedule,
                AppointmentAction::Refuse,
            ],
            AppointmentStatus::Confirmed => &[
                AppointmentAction::StartConsultation,
                AppointmentAction::Reschedule,
            ],
            _ => &[AppointmentAction::Edit],
        }
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for AppointmentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "scheduled" => Ok(AppointmentStatus::Scheduled),
            "confirmed" => Ok(AppointmentStatus::Confirmed),
            "in_progress" | "inprogress" => Ok(AppointmentStatus::InProgress),
            "completed" => Ok(AppointmentStatus::Completed),
            "cancelled" | "canceled" => Ok(AppointmentStatus::Cancelled),
            "no_show" | "noshow" => Ok(AppointmentStatus::NoShow),
            _ => Err(DomainError::parse(format!(
                "Invalid appointment status: {}",
                s
            ))),
        }
    }
}

/// Button shown on an appointment card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppointmentAction {
    Accept,
    Reschedule,
    Refuse,
    StartConsultation,
    Edit,
}

impl AppointmentAction {
    pub fn label(&self) -> &'static str {
        match self {
            AppointmentAction::Accept => "Accept",
            AppointmentAction::Reschedule => "Reschedule",
            AppointmentAction::Refuse => "Refuse",
            AppointmentAction::StartConsultation => "Start Consultation",
            AppointmentAction::Edit => "Edit",
        }
    }
}

/// How the appointment takes place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentType {
    InPerson,
    Video,
    Phone,
    Chat,
}

impl AppointmentType {
    pub fn display_name(&self) -> &'static str {
        match self {
            AppointmentType::InPerson => "In Person",
            AppointmentType::Video => "Video",
            AppointmentType::Phone => "Phone",
            AppointmentType::Chat => "Chat",
        }
    }
}

impl std::str::FromStr for AppointmentType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "in_person" | "inperson" => Ok(AppointmentType::InPerson),
            "video" => Ok(AppointmentType::Video),
            "phone" => Ok(AppointmentType::Phone),
            "chat" => Ok(AppointmentType::Chat),
            _ => Err(DomainError::parse(format!("Invalid appointment type: {}", s))),
        }
    }
}

/// Clinical urgency of an appointment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentPriority {
    #[default]
    Normal,
    Urgent,
    Emergency,
}

impl AppointmentPriority {
    pub fn display_name(&self) -> &'static str {
        match self {
            AppointmentPriority::Normal => "Normal",
            AppointmentPriority::Urgent => "Urgent",
            AppointmentPriority::Emergency => "Emergency",
        }
    }
}

impl std::str::FromStr for AppointmentPriority {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Ok(AppointmentPriority::Normal),
            "urgent" => Ok(AppointmentPriority::Urgent),
            "emergency" => Ok(AppointmentPriority::Emergency),
            _ => Err(DomainError::parse(format!(
                "Invalid appointment priority: {}",
                s
            ))),
        }
    }
}

/// An appointment between a doctor and a patient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: AppointmentId,
    pub patient_id: PatientId,
    pub patient: Patient,
    pub doctor_id: DoctorId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub scheduled_at: DateTime<Utc>,
    /// Length in minutes
    pub duration: u32,
    pub status: AppointmentStatus,
    #[serde(rename = "type")]
    pub appointment_type: AppointmentType,
    pub priority: AppointmentPriority,
    pub created_at: DateTime<Utc>,
    /// Free text; holds the refusal reason once an appointment is refused
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Appointment {
    /// Create a new scheduled appointment for `patient` with `doctor_id`.
    pub fn new(
        patient: Patient,
        doctor_id: DoctorId,
        title: impl Into<String>,
        scheduled_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: AppointmentId::new(),
            patient_id: patient.id.clone(),
            patient,
            doctor_id,
            title: title.into(),
            description: None,
            scheduled_at,
            duration: DEFAULT_APPOINTMENT_MINUTES,
            status: AppointmentStatus::Scheduled,
            appointment_type: AppointmentType::Video,
            priority: AppointmentPriority::Normal,
            created_at: now,
            notes: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<AppointmentId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.duration = minutes;
        self
    }

    pub fn with_status(mut self, status: AppointmentStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_type(mut self, appointment_type: AppointmentType) -> Self {
        self.appointment_type = appointment_type;
        self
    }

    pub fn with_priority(mut self, priority: AppointmentPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Duration used for workload totals; zero counts as the default slot.
    pub fn billable_minutes(&self) -> u32 {
        if self.duration == 0 {
            DEFAULT_APPOINTMENT_MINUTES
        } else {
            self.duration
        }
    }

    /// When the appointment is due to finish
    pub fn ends_at(&self) -> DateTime<Utc> {
        self.scheduled_at + chrono::Duration::minutes(i64::from(self.duration))
    }
}
