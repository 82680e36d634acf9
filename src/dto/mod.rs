//! DTO modules that bridge services with templates.

pub mod bookings;
pub mod calls;
pub mod conversations;
pub mod dashboard;
pub mod display;
pub mod list;
pub mod shops;
