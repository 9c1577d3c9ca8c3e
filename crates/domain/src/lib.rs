//! MediDesk domain: clinical entities, identifiers, form drafts and the
//! shared error type. No I/O lives here.

pub mod common;
pub mod drafts;
pub mod entities;
pub mod error;
pub mod ids;

pub use entities::{
    Appointment, AppointmentAction, AppointmentPriority, AppointmentStatus, AppointmentSummary,
    AppointmentType, AvailabilityStatus, Consultation, ConsultationStatus, Doctor, Medication,
    Patient, Prescription, PrescriptionStatus, StaffRole, DEFAULT_APPOINTMENT_MINUTES,
};

pub use drafts::{
    validate_refusal_reason, AppointmentDraft, MedicationDraft, MedicationField,
    PrescriptionDraft, REFUSAL_REASON_REQUIRED,
};

pub use error::{DomainError, REQUIRED_FIELDS_MESSAGE};

pub use ids::{AppointmentId, ConsultationId, DoctorId, MedicationId, PatientId, PrescriptionId};
