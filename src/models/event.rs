use serde::Serialize;

use crate::models::{Booking, BookingStatus, ChatMessage};

/// Change notification fanned out to list and dashboard subscribers.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BookingEvent {
    Created {
        booking: Booking,
    },
    StatusChanged {
        reference: String,
        from: BookingStatus,
        to: BookingStatus,
    },
    Message {
        message: ChatMessage,
    },
}

impl BookingEvent {
    pub fn reference(&self) -> &str {
        match self {
            BookingEvent::Created { booking } => &booking.reference,
            BookingEvent::StatusChanged { reference, .. } => reference,
            BookingEvent::Message { message } => &message.booking_reference,
        }
    }
}
