//! Common utility functions shared by the domain and the client.
//!
//! Pure functions only: no side effects, no I/O. Anything that needs the
//! current time takes it as a parameter.

pub mod datetime;
pub mod string;

pub use datetime::{compose_local_datetime, local_date, parse_datetime, parse_datetime_or};
pub use string::{is_blank, none_if_blank};
