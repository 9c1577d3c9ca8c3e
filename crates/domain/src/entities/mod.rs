//! Clinical entities

mod appointment;
mod consultation;
mod doctor;
mod patient;
mod prescription;

pub use appointment::{
    Appointment, AppointmentAction, AppointmentPriority, AppointmentStatus, AppointmentType,
    DEFAULT_APPOINTMENT_MINUTES,
};
pub use consultation::{Consultation, ConsultationStatus};
pub use doctor::{AvailabilityStatus, Doctor, StaffRole};
pub use patient::Patient;
pub use prescription::{AppointmentSummary, Medication, Prescription, PrescriptionStatus};
