//! Dashboard summary figures

use std::collections::HashSet;

use chrono::{DateTime, Duration, FixedOffset, Utc};
use medidesk_domain::common::local_date;
use medidesk_domain::{Appointment, Prescription, PrescriptionStatus};

/// How far ahead the "upcoming" card looks
pub const UPCOMING_WINDOW_MINUTES: i64 = 120;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub today_appointments: usize,
    /// Later today and starting within the next two hours
    pub upcoming_appointments: usize,
    pub active_prescriptions: usize,
    /// Distinct patients across all appointments
    pub total_patients: usize,
    pub hours_today: f64,
}

impl DashboardSummary {
    pub fn compute(
        appointments: &[Appointment],
        prescriptions: &[Prescription],
        now: DateTime<Utc>,
        offset: FixedOffset,
    ) -> Self {
        let today = local_date(now, offset);
        let window_end = now + Duration::minutes(UPCOMING_WINDOW_MINUTES);

        let todays: Vec<&Appointment> = appointments
            .iter()
            .filter(|apt| local_date(apt.scheduled_at, offset) == today)
            .collect();

        let upcoming_appointments = todays
            .iter()
            .filter(|apt| apt.scheduled_at > now && apt.scheduled_at <= window_end)
            .count();

        let minutes_today: u32 = todays.iter().map(|apt| apt.billable_minutes()).sum();

        let total_patients = appointments
            .iter()
            .map(|apt| apt.patient_id.as_str())
            .collect::<HashSet<_>>()
            .len();

        let active_prescriptions = prescriptions
            .iter()
            .filter(|p| p.status == PrescriptionStatus::Active)
            .count();

        Self {
            today_appointments: todays.len(),
            upcoming_appointments,
            active_prescriptions,
            total_patients,
            hours_today: f64::from(minutes_today) / 60.0,
        }
    }

    /// Hours rounded to one decimal for the stat card
    pub fn hours_label(&self) -> String {
        format!("{:.1}h", self.hours_today)
    }
}
