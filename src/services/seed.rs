use chrono::Utc;

use crate::models::{
    Booking, BookingStatus, BookingType, GuestCategory, PaymentMethod, Sender, VehicleClass,
};
use crate::services::chat::ChatLog;
use crate::services::store::{BookingStore, StoreError};

/// Sample trips shown on a fresh desk, listed newest first.
pub fn demo_bookings() -> Vec<Booking> {
    let now = Utc::now();
    let base = Booking {
        reference: String::new(),
        guest_name: String::new(),
        phone: String::new(),
        room_number: None,
        booking_type: BookingType::Airport,
        vehicle_class: VehicleClass::Sedan,
        guest_category: GuestCategory::Regular,
        pickup_location: String::new(),
        dropoff_location: None,
        stops: None,
        flight_number: None,
        duration: None,
        date: String::new(),
        time: String::new(),
        passengers: 1,
        child_seat: false,
        service_type: None,
        notes: None,
        payment_method: PaymentMethod::Cash,
        status: BookingStatus::Confirmed,
        created_at: now,
    };

    vec![
        Booking {
            reference: "BKG-ABC123".to_string(),
            guest_name: "Michael Chen".to_string(),
            phone: "+20 (100) 234-5678".to_string(),
            room_number: Some("1201".to_string()),
            booking_type: BookingType::Airport,
            vehicle_class: VehicleClass::LuxurySedan,
            guest_category: GuestCategory::Vvip,
            pickup_location: "Four Seasons Cairo - Main Lobby".to_string(),
            dropoff_location: Some("Cairo International - Terminal 3".to_string()),
            flight_number: Some("MS804".to_string()),
            date: "2025-12-23".to_string(),
            time: "14:30".to_string(),
            passengers: 2,
            service_type: Some("vip".to_string()),
            ..base.clone()
        },
        Booking {
            reference: "BKG-DEF456".to_string(),
            guest_name: "Sarah Williams".to_string(),
            phone: "+20 (100) 345-6789".to_string(),
            room_number: Some("805".to_string()),
            booking_type: BookingType::Hourly,
            vehicle_class: VehicleClass::LuxurySuv,
            guest_category: GuestCategory::Vip,
            pickup_location: "Four Seasons Cairo - Valet Entrance".to_string(),
            duration: Some("4".to_string()),
            date: "2025-12-23".to_string(),
            time: "09:00".to_string(),
            passengers: 4,
            child_seat: true,
            service_type: Some("premium".to_string()),
            payment_method: PaymentMethod::HotelBilling,
            status: BookingStatus::Dispatched,
            ..base.clone()
        },
        Booking {
            reference: "BKG-GHI789".to_string(),
            guest_name: "James Thompson".to_string(),
            phone: "+20 (100) 456-7890".to_string(),
            room_number: Some("302".to_string()),
            booking_type: BookingType::City,
            pickup_location: "Four Seasons Cairo - Side Exit".to_string(),
            dropoff_location: Some("Giza Pyramids".to_string()),
            date: "2025-12-24".to_string(),
            time: "08:00".to_string(),
            notes: Some("Guest prefers quiet driver".to_string()),
            status: BookingStatus::Pending,
            ..base.clone()
        },
        Booking {
            reference: "BKG-JKL012".to_string(),
            guest_name: "Corporate Group".to_string(),
            phone: "+20 (100) 567-8901".to_string(),
            booking_type: BookingType::MultiStop,
            vehicle_class: VehicleClass::Coaster,
            guest_category: GuestCategory::Vip,
            pickup_location: "Four Seasons Cairo - Conference Center".to_string(),
            stops: Some(vec![
                "Egyptian Museum".to_string(),
                "Khan el-Khalili".to_string(),
                "Citadel of Saladin".to_string(),
            ]),
            date: "2025-12-26".to_string(),
            time: "07:00".to_string(),
            passengers: 15,
            service_type: Some("corporate".to_string()),
            payment_method: PaymentMethod::Online,
            ..base
        },
    ]
}

/// Load the demo trips plus an opening driver exchange on the dispatched one.
pub fn seed(store: &mut BookingStore, chat: &mut ChatLog) -> Result<usize, StoreError> {
    let bookings = demo_bookings();
    let count = bookings.len();
    for booking in bookings.into_iter().rev() {
        store.insert(booking)?;
    }

    let dispatched: Vec<String> = store
        .list()
        .iter()
        .filter(|b| b.status == BookingStatus::Dispatched)
        .map(|b| b.reference.clone())
        .collect();
    for reference in dispatched {
        chat.record(&reference, Sender::Driver, "I'm on my way to the pickup location.");
        chat.send(&reference, "Great! The guest is waiting at the main lobby.");
    }

    tracing::info!(count, "seeded demo bookings");
    Ok(count)
}
