//! Application layer - services and the data they hand to screens.

pub mod dto;
pub mod services;
