//! Appointment store
//!
//! Holds the doctor's appointment list in memory. Mutations never edit in
//! place: each one builds a new list and swaps it in, so readers holding a
//! snapshot keep a consistent view. Concurrent mutations are last-write-wins.
//!
//! Status changes are caller-directed. The store does not check whether a
//! transition makes sense; a cancelled appointment can be accepted again.

use std::sync::{Arc, RwLock};

use chrono::NaiveDate;
use medidesk_domain::common::{compose_local_datetime, local_date};
use medidesk_domain::{
    Appointment, AppointmentDraft, AppointmentId, AppointmentStatus, Consultation,
    ConsultationStatus, DoctorId, DomainError, Patient,
};

use crate::application::dto::{AppointmentFilter, ConsultationFilter};
use crate::ports::outbound::ClockPort;

pub struct AppointmentStore {
    appointments: RwLock<Arc<Vec<Appointment>>>,
    /// Patients that can be picked on the new-appointment form
    patients: Vec<Patient>,
    clock: Arc<dyn ClockPort>,
}

impl AppointmentStore {
    pub fn new(appointments: Vec<Appointment>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            appointments: RwLock::new(Arc::new(appointments)),
            patients: Vec::new(),
            clock,
        }
    }

    pub fn with_patients(mut self, patients: Vec<Patient>) -> Self {
        self.patients = patients;
        self
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// Current list. The snapshot is not affected by later mutations.
    pub fn appointments(&self) -> Arc<Vec<Appointment>> {
        match self.appointments.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(e) => {
                tracing::error!("Failed to acquire read lock for appointments: {}", e);
                Arc::new(Vec::new())
            }
        }
    }

    pub fn get(&self, id: &AppointmentId) -> Option<Appointment> {
        self.appointments().iter().find(|apt| &apt.id == id).cloned()
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn appointments_by_status(&self, status: AppointmentStatus) -> Vec<Appointment> {
        self.appointments()
            .iter()
            .filter(|apt| apt.status == status)
            .cloned()
            .collect()
    }

    /// Appointments whose start falls on `day` in the device's time zone
    pub fn appointments_on(&self, day: NaiveDate) -> Vec<Appointment> {
        let offset = self.clock.local_offset();
        self.appointments()
            .iter()
            .filter(|apt| local_date(apt.scheduled_at, offset) == day)
            .cloned()
            .collect()
    }

    pub fn today_appointments(&self) -> Vec<Appointment> {
        let today = local_date(self.clock.now(), self.clock.local_offset());
        self.appointments_on(today)
    }

    pub fn filtered(&self, filter: AppointmentFilter) -> Vec<Appointment> {
        match filter {
            AppointmentFilter::All => self.appointments().as_ref().clone(),
            AppointmentFilter::Today => self.today_appointments(),
            AppointmentFilter::Upcoming => {
                let now = self.clock.now();
                self.appointments()
                    .iter()
                    .filter(|apt| {
                        apt.scheduled_at > now && apt.status != AppointmentStatus::Completed
                    })
                    .cloned()
                    .collect()
            }
            AppointmentFilter::Completed => self.appointments_by_status(AppointmentStatus::Completed),
        }
    }

    /// Appointments as shown on the consultations tab
    pub fn consultations(&self, filter: ConsultationFilter) -> Vec<Consultation> {
        let wanted = match filter {
            ConsultationFilter::All => None,
            ConsultationFilter::Active => Some(ConsultationStatus::Active),
            ConsultationFilter::Waiting => Some(ConsultationStatus::Waiting),
            ConsultationFilter::Completed => Some(ConsultationStatus::Completed),
        };
        self.appointments()
            .iter()
            .map(Consultation::from)
            .filter(|c| wanted.map_or(true, |status| c.status == status))
            .collect()
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Mark an appointment confirmed. Returns false if no appointment matched.
    pub fn accept_appointment(&self, id: &AppointmentId) -> bool {
        self.update(id, |apt| apt.status = AppointmentStatus::Confirmed)
    }

    /// Move an appointment to `new_date` (`YYYY-MM-DD`) at `new_time`
    /// (`HH:MM`), local time, and put it back to scheduled.
    ///
    /// Returns `Ok(false)` if no appointment matched. Malformed input is
    /// rejected before the list is touched.
    pub fn reschedule_appointment(
        &self,
        id: &AppointmentId,
        new_date: &str,
        new_time: &str,
        reason: Option<&str>,
    ) -> Result<bool, DomainError> {
        let scheduled_at = compose_local_datetime(new_date, new_time, self.clock.local_offset())?;

        if let Some(reason) = reason {
            tracing::info!(appointment_id = %id, reason, "Rescheduling appointment");
        }

        Ok(self.update(id, |apt| {
            apt.scheduled_at = scheduled_at;
            apt.status = AppointmentStatus::Scheduled;
        }))
    }

    /// Cancel an appointment, recording why in its notes.
    pub fn refuse_appointment(&self, id: &AppointmentId, reason: &str) -> bool {
        self.update(id, |apt| {
            apt.status = AppointmentStatus::Cancelled;
            apt.notes = Some(reason.to_string());
        })
    }

    /// Validate the new-appointment form and add the appointment as scheduled.
    pub fn create_appointment(
        &self,
        draft: &AppointmentDraft,
        doctor_id: DoctorId,
    ) -> Result<Appointment, DomainError> {
        draft.validate()?;

        let patient_id = draft.patient_id();
        let patient = self
            .patients
            .iter()
            .find(|p| p.id == patient_id)
            .cloned()
            .ok_or_else(|| DomainError::validation("Selected patient was not found"))?;

        let now = self.clock.now();
        let mut appointment = Appointment::new(
            patient,
            doctor_id,
            draft.title.trim(),
            draft.scheduled_at.unwrap_or(now),
            now,
        )
        .with_type(draft.appointment_type)
        .with_priority(draft.priority);
        appointment.description = draft.description();
        if let Some(minutes) = draft.duration {
            appointment.duration = minutes;
        }

        let mut guard = self.appointments.write().map_err(|e| {
            tracing::error!("Failed to acquire write lock for appointments: {}", e);
            DomainError::unavailable("appointment list")
        })?;
        let mut next = guard.as_ref().clone();
        next.push(appointment.clone());
        *guard = Arc::new(next);

        tracing::info!(appointment_id = %appointment.id, "Appointment created");
        Ok(appointment)
    }

    /// Copy the list, apply `change` to the matching appointment, swap it in.
    fn update(&self, id: &AppointmentId, change: impl FnOnce(&mut Appointment)) -> bool {
        let mut guard = match self.appointments.write() {
            Ok(guard) => guard,
            Err(e) => {
                tracing::error!("Failed to acquire write lock for appointments: {}", e);
                return false;
            }
        };

        let Some(index) = guard.iter().position(|apt| &apt.id == id) else {
            tracing::debug!(appointment_id = %id, "No appointment with this id, ignoring");
            return false;
        };

        let mut next = guard.as_ref().clone();
        if let Some(apt) = next.get_mut(index) {
            change(apt);
        }
        *guard = Arc::new(next);
        true
    }
}
