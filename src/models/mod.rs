pub mod hall;
pub mod movie;
pub mod showtime;
pub mod ticket;
pub mod user;

pub use hall::{Hall, Seat};
pub use movie::Movie;
pub use showtime::Showtime;
pub use ticket::Ticket;
pub use user::UserRecord;
