pub mod auth;
pub mod booking;

pub use auth::Authenticator;
pub use booking::BookingManager;
