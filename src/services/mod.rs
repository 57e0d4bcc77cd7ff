pub mod booking_form;
pub mod chat;
pub mod events;
pub mod reference;
pub mod seed;
pub mod stats;
pub mod store;
