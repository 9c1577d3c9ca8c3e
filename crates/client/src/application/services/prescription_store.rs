//! Prescription store
//!
//! Same copy-on-write model as the appointment store. Nothing is persisted.

use std::sync::{Arc, RwLock};

use medidesk_domain::{
    Doctor, DomainError, Patient, Prescription, PrescriptionDraft, PrescriptionId,
    PrescriptionStatus,
};

use crate::application::dto::PrescriptionFilter;
use crate::ports::outbound::ClockPort;

pub struct PrescriptionStore {
    prescriptions: RwLock<Arc<Vec<Prescription>>>,
    patients: Vec<Patient>,
    clock: Arc<dyn ClockPort>,
}

impl PrescriptionStore {
    pub fn new(prescriptions: Vec<Prescription>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            prescriptions: RwLock::new(Arc::new(prescriptions)),
            patients: Vec::new(),
            clock,
        }
    }

    pub fn with_patients(mut self, patients: Vec<Patient>) -> Self {
        self.patients = patients;
        self
    }

    pub fn prescriptions(&self) -> Arc<Vec<Prescription>> {
        match self.prescriptions.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(e) => {
                tracing::error!("Failed to acquire read lock for prescriptions: {}", e);
                Arc::new(Vec::new())
            }
        }
    }

    pub fn get(&self, id: &PrescriptionId) -> Option<Prescription> {
        self.prescriptions().iter().find(|p| &p.id == id).cloned()
    }

    pub fn by_status(&self, status: PrescriptionStatus) -> Vec<Prescription> {
        self.prescriptions()
            .iter()
            .filter(|p| p.status == status)
            .cloned()
            .collect()
    }

    pub fn filtered(&self, filter: PrescriptionFilter) -> Vec<Prescription> {
        match filter {
            PrescriptionFilter::All => self.prescriptions().as_ref().clone(),
            PrescriptionFilter::Active => self.by_status(PrescriptionStatus::Active),
            PrescriptionFilter::Completed => self.by_status(PrescriptionStatus::Completed),
            PrescriptionFilter::Cancelled => self.by_status(PrescriptionStatus::Cancelled),
        }
    }

    pub fn active_count(&self) -> usize {
        self.prescriptions()
            .iter()
            .filter(|p| p.status == PrescriptionStatus::Active)
            .count()
    }

    /// Validate the new-prescription form and add it as active.
    pub fn create_prescription(
        &self,
        draft: &PrescriptionDraft,
        doctor: &Doctor,
    ) -> Result<Prescription, DomainError> {
        draft.validate()?;

        let patient_id = draft.patient_id();
        let patient = self
            .patients
            .iter()
            .find(|p| p.id == patient_id)
            .cloned()
            .ok_or_else(|| DomainError::validation("Selected patient was not found"))?;

        let now = self.clock.now();
        let prescription = Prescription {
            id: PrescriptionId::new(),
            patient_id,
            patient_name: patient.full_name(),
            doctor_id: doctor.id.clone(),
            doctor_name: doctor.display_name(),
            diagnosis: draft.diagnosis.trim().to_string(),
            medications: draft.to_medications(),
            notes: draft.notes(),
            status: PrescriptionStatus::Active,
            created_at: now,
            updated_at: now,
            valid_until: None,
            patient: Some(patient),
            appointment: None,
        };

        let mut guard = self.prescriptions.write().map_err(|e| {
            tracing::error!("Failed to acquire write lock for prescriptions: {}", e);
            DomainError::unavailable("prescription list")
        })?;
        let mut next = guard.as_ref().clone();
        next.push(prescription.clone());
        *guard = Arc::new(next);

        tracing::info!(prescription_id = %prescription.id, "Prescription created");
        Ok(prescription)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use chrono::{TimeZone, Utc};
    use medidesk_domain::{DoctorId, MedicationField, PatientId};

    fn prescription(id: &str, status: PrescriptionStatus) -> Prescription {
        let at = Utc.with_ymd_and_hms(2025, 1, 10, 9, 0, 0).unwrap();
        Prescription {
            id: PrescriptionId::from(id),
            patient_id: PatientId::from("1"),
            patient_name: "Alice Wilson".to_string(),
            doctor_id: DoctorId::from("1"),
            doctor_name: "Dr. John Smith".to_string(),
            diagnosis: "Common Cold".to_string(),
            medications: Vec::new(),
            notes: None,
            status,
            created_at: at,
            updated_at: at,
            valid_until: None,
            patient: None,
            appointment: None,
        }
    }

    fn store() -> PrescriptionStore {
        let clock = Arc::new(FixedClock::utc(
            Utc.with_ymd_and_hms(2025, 2, 1, 8, 0, 0).unwrap(),
        ));
        PrescriptionStore::new(
            vec![
                prescription("1", PrescriptionStatus::Active),
                prescription("2", PrescriptionStatus::Completed),
                prescription("3", PrescriptionStatus::Active),
            ],
            clock,
        )
        .with_patients(vec![Patient::new("2", "Bob", "Brown", 35)])
    }

    #[test]
    fn filters_by_status() {
        let store = store();
        assert_eq!(store.filtered(PrescriptionFilter::All).len(), 3);
        assert_eq!(store.filtered(PrescriptionFilter::Active).len(), 2);
        assert_eq!(store.filtered(PrescriptionFilter::Completed).len(), 1);
        assert!(store.filtered(PrescriptionFilter::Cancelled).is_empty());
        assert_eq!(store.active_count(), 2);
    }

    #[test]
    fn create_prescription_requires_a_named_medication() {
        let store = store();
        let doctor = Doctor::new(
            "1",
            "john@example.com",
            "John",
            "Smith",
            "Cardiology",
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        );

        let mut draft = PrescriptionDraft::new();
        draft.patient_id = "2".to_string();
        draft.diagnosis = "Hypertension".to_string();
        assert!(store.create_prescription(&draft, &doctor).is_err());

        let row = draft.medications()[0].id.clone();
        draft.update_medication(&row, MedicationField::Name, "Lisinopril");
        draft.update_medication(&row, MedicationField::Dosage, "10mg");

        let created = store.create_prescription(&draft, &doctor).unwrap();
        assert_eq!(created.status, PrescriptionStatus::Active);
        assert_eq!(created.patient_name, "Bob Brown");
        assert_eq!(created.doctor_name, "Dr. John Smith");
        assert_eq!(created.medications[0].name, "Lisinopril");
        assert_eq!(store.active_count(), 3);
        assert_eq!(store.get(&created.id), Some(created));
    }

    #[test]
    fn create_prescription_on_poisoned_list_is_not_a_form_error() {
        let store = Arc::new(store());
        let holder = Arc::clone(&store);
        let _ = std::thread::spawn(move || {
            let _guard = holder.prescriptions.write().unwrap();
            panic!("poison the prescription list");
        })
        .join();

        let doctor = Doctor::new(
            "1",
            "john@example.com",
            "John",
            "Smith",
            "Cardiology",
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        );
        let mut draft = PrescriptionDraft::new();
        draft.patient_id = "2".to_string();
        draft.diagnosis = "Hypertension".to_string();
        let row = draft.medications()[0].id.clone();
        draft.update_medication(&row, MedicationField::Name, "Lisinopril");
        draft.update_medication(&row, MedicationField::Dosage, "10mg");

        let err = store.create_prescription(&draft, &doctor).unwrap_err();
        assert!(matches!(err, DomainError::Unavailable(_)));
    }
}
