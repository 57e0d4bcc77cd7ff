use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use chrono::Utc;

use crate::models::{
    Booking, BookingRequest, BookingStatus, BookingType, GuestCategory, PaymentMethod,
    VehicleClass,
};
use crate::services::reference::next_reference;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidField {
    pub field: &'static str,
    pub value: String,
}

/// Everything wrong with a submitted form, reported in one go.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", describe(.missing, .invalid))]
pub struct ValidationError {
    pub missing: Vec<&'static str>,
    pub invalid: Vec<InvalidField>,
}

fn describe(missing: &[&'static str], invalid: &[InvalidField]) -> String {
    let mut parts = Vec::new();
    if !missing.is_empty() {
        parts.push(format!("missing required fields: {}", missing.join(", ")));
    }
    if !invalid.is_empty() {
        let fields: Vec<String> = invalid
            .iter()
            .map(|f| format!("{} ({:?})", f.field, f.value))
            .collect();
        parts.push(format!("invalid values: {}", fields.join(", ")));
    }
    parts.join("; ")
}

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("a booking submission is already in progress")]
    Busy,

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Build a confirmed booking from raw form values.
///
/// Fails without constructing anything when a required field is blank or an
/// enum selection is outside its closed set.
pub fn create_booking(request: &BookingRequest) -> Result<Booking, ValidationError> {
    let mut missing = Vec::new();
    let required = [
        ("guest_name", &request.guest_name),
        ("phone", &request.phone),
        ("pickup_location", &request.pickup_location),
        ("date", &request.date),
        ("time", &request.time),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            missing.push(field);
        }
    }

    let mut invalid = Vec::new();
    let booking_type = parse_choice(
        "booking_type",
        &request.booking_type,
        BookingType::parse,
        &mut invalid,
    );
    let vehicle_class = parse_choice(
        "vehicle_class",
        &request.vehicle_class,
        VehicleClass::parse,
        &mut invalid,
    );
    let guest_category = parse_choice(
        "guest_category",
        &request.guest_category,
        GuestCategory::parse,
        &mut invalid,
    );
    let payment_method = parse_choice(
        "payment_method",
        &request.payment_method,
        PaymentMethod::parse,
        &mut invalid,
    );

    let (Some(booking_type), Some(vehicle_class), Some(guest_category), Some(payment_method)) =
        (booking_type, vehicle_class, guest_category, payment_method)
    else {
        return Err(ValidationError { missing, invalid });
    };
    if !missing.is_empty() {
        return Err(ValidationError { missing, invalid });
    }

    Ok(Booking {
        reference: next_reference(),
        guest_name: request.guest_name.clone(),
        phone: request.phone.clone(),
        room_number: non_empty(&request.room_number),
        booking_type,
        vehicle_class,
        guest_category,
        pickup_location: request.pickup_location.clone(),
        dropoff_location: non_empty(&request.dropoff_location),
        stops: normalize_stops(booking_type, &request.stops),
        flight_number: non_empty(&request.flight_number),
        duration: non_empty(&request.duration),
        date: request.date.clone(),
        time: request.time.clone(),
        passengers: parse_passengers(&request.passengers),
        child_seat: request.child_seat,
        service_type: non_empty(&request.service_type),
        notes: non_empty(&request.notes),
        payment_method,
        status: BookingStatus::Confirmed,
        created_at: Utc::now(),
    })
}

fn parse_choice<T>(
    field: &'static str,
    value: &str,
    parse: fn(&str) -> Option<T>,
    invalid: &mut Vec<InvalidField>,
) -> Option<T> {
    let parsed = parse(value.trim());
    if parsed.is_none() {
        invalid.push(InvalidField {
            field,
            value: value.to_string(),
        });
    }
    parsed
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn parse_passengers(value: &str) -> u32 {
    match value.trim().parse::<i64>() {
        Ok(n) if n >= 1 => u32::try_from(n).unwrap_or(u32::MAX),
        _ => 1,
    }
}

fn normalize_stops(booking_type: BookingType, stops: &[String]) -> Option<Vec<String>> {
    if booking_type != BookingType::MultiStop {
        return None;
    }
    let kept: Vec<String> = stops
        .iter()
        .filter(|s| !s.trim().is_empty())
        .cloned()
        .collect();
    if kept.is_empty() {
        None
    } else {
        Some(kept)
    }
}

/// One booking form instance with its simulated submit latency.
///
/// The busy flag belongs to the submission itself: it is raised when a
/// submission enters the delay and lowered by a guard when that submission
/// finishes or is dropped mid-delay.
pub struct BookingForm {
    delay: Duration,
    submitting: AtomicBool,
}

impl BookingForm {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            submitting: AtomicBool::new(false),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::SeqCst)
    }

    pub async fn submit(&self, request: &BookingRequest) -> Result<Booking, FormError> {
        let _busy = SubmitGuard::acquire(&self.submitting).ok_or(FormError::Busy)?;

        tokio::time::sleep(self.delay).await;

        let booking = create_booking(request)?;
        tracing::info!(
            reference = %booking.reference,
            booking_type = booking.booking_type.as_str(),
            "booking constructed"
        );
        Ok(booking)
    }
}

struct SubmitGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> SubmitGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}
