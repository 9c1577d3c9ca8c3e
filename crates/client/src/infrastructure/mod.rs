//! Infrastructure layer - adapters behind the outbound ports.

pub mod clock;
pub mod mock_data;
pub mod platform;
pub mod supabase;
