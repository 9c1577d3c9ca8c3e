//! Application composition.

use std::sync::Arc;

use crate::application::dto::DashboardSummary;
use crate::application::services::{AppointmentStore, AuthService, PrescriptionStore};
use crate::infrastructure::mock_data;
use crate::ports::outbound::{IdentityPort, ProfileRepo};
use crate::state::Platform;

/// Every service the screens talk to, built over one platform.
pub struct App {
    pub platform: Platform,
    pub auth: Arc<AuthService>,
    pub appointments: Arc<AppointmentStore>,
    pub prescriptions: Arc<PrescriptionStore>,
}

impl App {
    /// Wire services over the given adapters. Appointment and prescription
    /// stores start from the seed data.
    pub fn new(
        platform: Platform,
        identity: Arc<dyn IdentityPort>,
        profiles: Arc<dyn ProfileRepo>,
    ) -> Self {
        let now = platform.now();
        let auth = Arc::new(AuthService::new(
            identity,
            profiles,
            platform.storage_service(),
        ));
        let appointments = Arc::new(
            AppointmentStore::new(mock_data::appointments(now), platform.clock())
                .with_patients(mock_data::patients()),
        );
        let prescriptions = Arc::new(
            PrescriptionStore::new(mock_data::prescriptions(now), platform.clock())
                .with_patients(mock_data::patients()),
        );

        Self {
            platform,
            auth,
            appointments,
            prescriptions,
        }
    }

    pub fn dashboard(&self) -> DashboardSummary {
        DashboardSummary::compute(
            &self.appointments.appointments(),
            &self.prescriptions.prescriptions(),
            self.platform.now(),
            self.platform.local_offset(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::platform::InMemoryStorageProvider;
    use crate::ports::outbound::{MockIdentityPort, MockProfileRepo};
    use chrono::{TimeZone, Utc};

    #[test]
    fn dashboard_over_seed_data() {
        let now = Utc.with_ymd_and_hms(2025, 2, 20, 10, 0, 0).unwrap();
        let platform = Platform::new(FixedClock::utc(now), InMemoryStorageProvider::new());
        let app = App::new(
            platform,
            Arc::new(MockIdentityPort::new()),
            Arc::new(MockProfileRepo::new()),
        );

        let summary = app.dashboard();

        // +2h and +30min today, +24h tomorrow
        assert_eq!(summary.today_appointments, 2);
        assert_eq!(summary.upcoming_appointments, 2);
        assert_eq!(summary.active_prescriptions, 2);
        assert_eq!(summary.total_patients, 3);
        assert!((summary.hours_today - 1.25).abs() < f64::EPSILON);
        assert!(app.auth.is_loading());
    }
}
