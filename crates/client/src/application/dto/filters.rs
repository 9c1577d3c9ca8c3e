//! List filters offered by the tab screens.

use std::str::FromStr;

use medidesk_domain::DomainError;

/// Appointments tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppointmentFilter {
    #[default]
    All,
    Today,
    /// Scheduled in the future and not completed
    Upcoming,
    Completed,
}

/// Consultations tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsultationFilter {
    #[default]
    All,
    Active,
    Waiting,
    Completed,
}

/// Prescriptions tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrescriptionFilter {
    #[default]
    All,
    Active,
    Completed,
    Cancelled,
}

impl FromStr for AppointmentFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "today" => Ok(Self::Today),
            "upcoming" => Ok(Self::Upcoming),
            "completed" => Ok(Self::Completed),
            other => Err(DomainError::parse(format!("unknown appointment filter: {other}"))),
        }
    }
}

impl FromStr for ConsultationFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "waiting" => Ok(Self::Waiting),
            "completed" => Ok(Self::Completed),
            other => Err(DomainError::parse(format!("unknown consultation filter: {other}"))),
        }
    }
}

impl FromStr for PrescriptionFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(DomainError::parse(format!("unknown prescription filter: {other}"))),
        }
    }
}
