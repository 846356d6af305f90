pub mod booking;
pub mod event;

pub use booking::{Booking, BookingWithEvent, NewBooking};
pub use event::Event;
