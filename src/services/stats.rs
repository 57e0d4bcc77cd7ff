//! Summary figures derived from the booking list.
//!
//! Every function here recomputes from the slice it is given; nothing is
//! cached between calls.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Booking, BookingStatus, BookingType, GuestCategory, VehicleClass};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct StatusCounts {
    pub pending: usize,
    pub confirmed: usize,
    pub dispatched: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl StatusCounts {
    pub fn get(&self, status: BookingStatus) -> usize {
        match status {
            BookingStatus::Pending => self.pending,
            BookingStatus::Confirmed => self.confirmed,
            BookingStatus::Dispatched => self.dispatched,
            BookingStatus::InProgress => self.in_progress,
            BookingStatus::Completed => self.completed,
        }
    }

    pub fn total(&self) -> usize {
        BookingStatus::ALL.iter().map(|s| self.get(*s)).sum()
    }
}

pub fn count_by_status(bookings: &[Booking]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for booking in bookings {
        match booking.status {
            BookingStatus::Pending => counts.pending += 1,
            BookingStatus::Confirmed => counts.confirmed += 1,
            BookingStatus::Dispatched => counts.dispatched += 1,
            BookingStatus::InProgress => counts.in_progress += 1,
            BookingStatus::Completed => counts.completed += 1,
        }
    }
    counts
}

/// Bookings whose `date` is exactly `date` (ISO `YYYY-MM-DD`).
pub fn count_for_date(bookings: &[Booking], date: &str) -> usize {
    bookings.iter().filter(|b| b.date == date).count()
}

pub fn count_active(bookings: &[Booking]) -> usize {
    bookings.iter().filter(|b| b.is_active()).count()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub today: usize,
    pub pending: usize,
    pub active: usize,
}

pub fn dashboard_summary(bookings: &[Booking], today: &str) -> DashboardSummary {
    DashboardSummary {
        today: count_for_date(bookings, today),
        pending: count_by_status(bookings).pending,
        active: count_active(bookings),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListSummary {
    pub total: usize,
    pub confirmed: usize,
    pub pending: usize,
    /// Dispatched plus in-progress.
    pub in_progress: usize,
    pub finished: usize,
}

pub fn list_summary(bookings: &[Booking]) -> ListSummary {
    let counts = count_by_status(bookings);
    ListSummary {
        total: bookings.len(),
        confirmed: counts.confirmed,
        pending: counts.pending,
        in_progress: counts.dispatched + counts.in_progress,
        finished: counts.completed,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analytics {
    pub by_status: StatusCounts,
    pub by_booking_type: BTreeMap<BookingType, usize>,
    pub by_vehicle_class: BTreeMap<VehicleClass, usize>,
    pub by_guest_category: BTreeMap<GuestCategory, usize>,
    pub total_passengers: u64,
    pub child_seat_requests: usize,
}

pub fn analytics(bookings: &[Booking]) -> Analytics {
    let mut by_booking_type = BTreeMap::new();
    let mut by_vehicle_class = BTreeMap::new();
    let mut by_guest_category = BTreeMap::new();
    for booking in bookings {
        *by_booking_type.entry(booking.booking_type).or_insert(0) += 1;
        *by_vehicle_class.entry(booking.vehicle_class).or_insert(0) += 1;
        *by_guest_category.entry(booking.guest_category).or_insert(0) += 1;
    }

    Analytics {
        by_status: count_by_status(bookings),
        by_booking_type,
        by_vehicle_class,
        by_guest_category,
        total_passengers: bookings.iter().map(|b| u64::from(b.passengers)).sum(),
        child_seat_requests: bookings.iter().filter(|b| b.child_seat).count(),
    }
}
