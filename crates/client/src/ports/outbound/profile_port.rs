//! Profile database port - the remote `doctors` table.

use async_trait::async_trait;
use medidesk_domain::{AvailabilityStatus, Doctor, DoctorId, StaffRole};

use super::RepoError;

/// Fields needed to insert a profile record; the database fills the rest.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewDoctor {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub specialization: String,
    pub profile_photo: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub verified: Option<bool>,
    pub languages: Option<Vec<String>>,
    pub availability_status: Option<AvailabilityStatus>,
    pub license_number: Option<String>,
    pub years_of_experience: Option<u32>,
    pub role: Option<StaffRole>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileRepo: Send + Sync {
    /// `Ok(None)` when no row matches.
    async fn get_doctor_by_id(&self, id: &DoctorId) -> Result<Option<Doctor>, RepoError>;

    /// `Ok(None)` when no row matches.
    async fn get_doctor_by_email(&self, email: &str) -> Result<Option<Doctor>, RepoError>;

    async fn create_doctor(&self, doctor: &NewDoctor) -> Result<Doctor, RepoError>;
}
