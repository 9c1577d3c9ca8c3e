//! Seed data for the in-memory stores.
//!
//! Appointment and prescription times are relative to `now` so the
//! dashboard always has something due soon.

use chrono::{DateTime, Duration, TimeZone, Utc};
use medidesk_domain::{
    Appointment, AppointmentPriority, AppointmentStatus, AppointmentType, Doctor, DoctorId,
    Medication, Patient, Prescription, PrescriptionId, PrescriptionStatus,
};

fn registered_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

pub fn doctors() -> Vec<Doctor> {
    vec![
        Doctor::new(
            "1",
            "dr.smith@example.com",
            "John",
            "Smith",
            "General Medicine",
            registered_at(),
        )
        .verified()
        .with_phone("+1234567890")
        .with_bio("Experienced general practitioner with 15 years of experience.")
        .with_languages(vec!["English".to_string(), "Spanish".to_string()])
        .with_license("MD123456", 15),
        Doctor::new(
            "2",
            "dr.johnson@example.com",
            "Sarah",
            "Johnson",
            "Emergency Medicine",
            registered_at(),
        )
        .verified()
        .with_phone("+1234567891")
        .with_bio("Emergency medicine specialist available 24/7.")
        .with_languages(vec!["English".to_string(), "French".to_string()])
        .with_license("MD789012", 12),
    ]
}

pub fn patients() -> Vec<Patient> {
    vec![
        Patient::new("1", "Alice", "Wilson", 28)
            .with_phone("+1234567892")
            .with_email("alice.wilson@example.com")
            .with_emergency_contact("+1234567893"),
        Patient::new("2", "Bob", "Brown", 35)
            .with_phone("+1234567894")
            .with_email("bob.brown@example.com")
            .with_emergency_contact("+1234567895"),
        Patient::new("3", "Carol", "Davis", 42)
            .with_phone("+1234567896")
            .with_email("carol.davis@example.com")
            .with_emergency_contact("+1234567897"),
    ]
}

pub fn appointments(now: DateTime<Utc>) -> Vec<Appointment> {
    let mut patients = patients().into_iter();
    let (Some(alice), Some(bob), Some(carol)) = (patients.next(), patients.next(), patients.next())
    else {
        return Vec::new();
    };

    vec![
        Appointment::new(alice, DoctorId::from("1"), "General Checkup", now + Duration::hours(2), now)
            .with_id("1")
            .with_description("Routine health checkup and consultation"),
        Appointment::new(
            bob,
            DoctorId::from("1"),
            "Follow-up Consultation",
            now + Duration::hours(24),
            now,
        )
        .with_id("2")
        .with_description("Follow-up for previous treatment")
        .with_duration(20)
        .with_status(AppointmentStatus::Confirmed)
        .with_type(AppointmentType::Chat),
        Appointment::new(
            carol,
            DoctorId::from("2"),
            "Emergency Consultation",
            now + Duration::minutes(30),
            now,
        )
        .with_id("3")
        .with_description("Urgent medical consultation needed")
        .with_duration(45)
        .with_status(AppointmentStatus::Confirmed)
        .with_priority(AppointmentPriority::Emergency),
    ]
}

pub fn prescriptions(now: DateTime<Utc>) -> Vec<Prescription> {
    let patients = patients();
    let valid_until = Some(now + Duration::days(30));

    vec![
        Prescription {
            id: PrescriptionId::from("1"),
            patient_id: "1".into(),
            patient_name: "Alice Wilson".to_string(),
            doctor_id: DoctorId::from("1"),
            doctor_name: "Dr. John Smith".to_string(),
            diagnosis: "Common Cold".to_string(),
            medications: vec![
                Medication::new("Paracetamol", "500mg", "Every 6 hours", "5 days")
                    .with_id("1")
                    .with_instructions("Take with food"),
                Medication::new("Cough Syrup", "10ml", "Every 8 hours", "7 days")
                    .with_id("2")
                    .with_instructions("Take before meals"),
            ],
            notes: Some("Rest and drink plenty of fluids".to_string()),
            status: PrescriptionStatus::Active,
            created_at: now,
            updated_at: now,
            valid_until,
            patient: patients.first().cloned(),
            appointment: None,
        },
        Prescription {
            id: PrescriptionId::from("2"),
            patient_id: "2".into(),
            patient_name: "Bob Brown".to_string(),
            doctor_id: DoctorId::from("1"),
            doctor_name: "Dr. John Smith".to_string(),
            diagnosis: "Hypertension".to_string(),
            medications: vec![Medication::new("Lisinopril", "10mg", "Once daily", "30 days")
                .with_id("3")
                .with_instructions("Take in the morning")],
            notes: Some("Monitor blood pressure regularly".to_string()),
            status: PrescriptionStatus::Active,
            created_at: now,
            updated_at: now,
            valid_until,
            patient: patients.get(1).cloned(),
            appointment: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_appointments_reference_seed_patients() {
        let now = Utc.with_ymd_and_hms(2025, 2, 20, 10, 0, 0).unwrap();
        let ids: Vec<_> = patients().into_iter().map(|p| p.id).collect();
        let appointments = appointments(now);

        assert_eq!(appointments.len(), 3);
        assert!(appointments.iter().all(|a| ids.contains(&a.patient_id)));
        assert_eq!(appointments[2].priority, AppointmentPriority::Emergency);
        assert_eq!(appointments[0].scheduled_at, now + Duration::hours(2));
    }

    #[test]
    fn seed_prescriptions_are_active() {
        let now = Utc.with_ymd_and_hms(2025, 2, 20, 10, 0, 0).unwrap();
        assert!(prescriptions(now).iter().all(|p| p.is_valid_at(now)));
        assert_eq!(doctors()[0].display_name(), "Dr. John Smith");
    }
}
