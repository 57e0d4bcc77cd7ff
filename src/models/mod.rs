pub mod booking;
pub mod chat;
pub mod event;
pub mod session;

pub use booking::{
    Booking, BookingRequest, BookingStatus, BookingType, GuestCategory, PaymentMethod,
    VehicleClass,
};
pub use chat::{ChatMessage, Sender};
pub use event::BookingEvent;
pub use session::{OperatorRole, SessionContext};
