use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub reference: String,
    pub guest_name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_number: Option<String>,
    pub booking_type: BookingType,
    pub vehicle_class: VehicleClass,
    pub guest_category: GuestCategory,
    pub pickup_location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff_location: Option<String>,
    /// Intermediate stops, only ever present (and non-empty) for multi-stop trips.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stops: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight_number: Option<String>,
    /// Hours, as entered on the form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    pub date: String,
    pub time: String,
    pub passengers: u32,
    pub child_seat: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub payment_method: PaymentMethod,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Dispatched,
    InProgress,
    Completed,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 5] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::Dispatched,
        BookingStatus::InProgress,
        BookingStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Dispatched => "dispatched",
            BookingStatus::InProgress => "in-progress",
            BookingStatus::Completed => "completed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(BookingStatus::Pending),
            "confirmed" => Some(BookingStatus::Confirmed),
            "dispatched" => Some(BookingStatus::Dispatched),
            "in-progress" => Some(BookingStatus::InProgress),
            "completed" => Some(BookingStatus::Completed),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Dispatched => "Dispatched",
            BookingStatus::InProgress => "In Progress",
            BookingStatus::Completed => "Finished",
        }
    }

    /// The only status a booking may move to from this one.
    pub fn next(&self) -> Option<Self> {
        match self {
            BookingStatus::Pending => Some(BookingStatus::Confirmed),
            BookingStatus::Confirmed => Some(BookingStatus::Dispatched),
            BookingStatus::Dispatched => Some(BookingStatus::InProgress),
            BookingStatus::InProgress => Some(BookingStatus::Completed),
            BookingStatus::Completed => None,
        }
    }

    pub fn can_transition_to(&self, to: BookingStatus) -> bool {
        self.next() == Some(to)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::Completed)
    }

    /// Confirmed, dispatched and in-progress trips count as active.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            BookingStatus::Confirmed | BookingStatus::Dispatched | BookingStatus::InProgress
        )
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum BookingType {
    Airport,
    Hourly,
    City,
    PointToPoint,
    MultiStop,
}

impl BookingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingType::Airport => "airport",
            BookingType::Hourly => "hourly",
            BookingType::City => "city",
            BookingType::PointToPoint => "point-to-point",
            BookingType::MultiStop => "multi-stop",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "airport" => Some(BookingType::Airport),
            "hourly" => Some(BookingType::Hourly),
            "city" => Some(BookingType::City),
            "point-to-point" => Some(BookingType::PointToPoint),
            "multi-stop" => Some(BookingType::MultiStop),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BookingType::Airport => "Airport Transfer",
            BookingType::Hourly => "Hourly Chauffeur",
            BookingType::City => "City-to-City",
            BookingType::PointToPoint => "Point-to-Point",
            BookingType::MultiStop => "Multi-Stop",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum VehicleClass {
    Sedan,
    Suv,
    Van,
    LuxurySedan,
    LuxurySuv,
    LuxuryVan,
    Coaster,
    Coach,
}

impl VehicleClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleClass::Sedan => "sedan",
            VehicleClass::Suv => "suv",
            VehicleClass::Van => "van",
            VehicleClass::LuxurySedan => "luxury-sedan",
            VehicleClass::LuxurySuv => "luxury-suv",
            VehicleClass::LuxuryVan => "luxury-van",
            VehicleClass::Coaster => "coaster",
            VehicleClass::Coach => "coach",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "sedan" => Some(VehicleClass::Sedan),
            "suv" => Some(VehicleClass::Suv),
            "van" => Some(VehicleClass::Van),
            "luxury-sedan" => Some(VehicleClass::LuxurySedan),
            "luxury-suv" => Some(VehicleClass::LuxurySuv),
            "luxury-van" => Some(VehicleClass::LuxuryVan),
            "coaster" => Some(VehicleClass::Coaster),
            "coach" => Some(VehicleClass::Coach),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VehicleClass::Sedan => "Sedan",
            VehicleClass::Suv => "SUV",
            VehicleClass::Van => "Van",
            VehicleClass::LuxurySedan => "Luxury Sedan",
            VehicleClass::LuxurySuv => "Luxury SUV",
            VehicleClass::LuxuryVan => "Luxury Van",
            VehicleClass::Coaster => "Coaster",
            VehicleClass::Coach => "Coach",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum GuestCategory {
    Vvip,
    Vip,
    Regular,
}

impl GuestCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            GuestCategory::Vvip => "vvip",
            GuestCategory::Vip => "vip",
            GuestCategory::Regular => "regular",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "vvip" => Some(GuestCategory::Vvip),
            "vip" => Some(GuestCategory::Vip),
            "regular" => Some(GuestCategory::Regular),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GuestCategory::Vvip => "VVIP",
            GuestCategory::Vip => "VIP",
            GuestCategory::Regular => "Regular",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    Cash,
    Online,
    HotelBilling,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Online => "online",
            PaymentMethod::HotelBilling => "hotel-billing",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "cash" => Some(PaymentMethod::Cash),
            "online" => Some(PaymentMethod::Online),
            "hotel-billing" => Some(PaymentMethod::HotelBilling),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Online => "Online (Visa)",
            PaymentMethod::HotelBilling => "Hotel Billing",
        }
    }
}

/// Raw values from the booking form, exactly as submitted.
///
/// Enum selections arrive as strings and are checked against the closed
/// variant sets when the booking is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingRequest {
    pub guest_name: String,
    pub phone: String,
    pub room_number: String,
    pub booking_type: String,
    pub vehicle_class: String,
    pub guest_category: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub stops: Vec<String>,
    pub flight_number: String,
    pub duration: String,
    pub date: String,
    pub time: String,
    pub passengers: String,
    pub child_seat: bool,
    pub service_type: String,
    pub notes: String,
    pub payment_method: String,
}

impl Default for BookingRequest {
    fn default() -> Self {
        Self {
            guest_name: String::new(),
            phone: String::new(),
            room_number: String::new(),
            booking_type: BookingType::Airport.as_str().to_string(),
            vehicle_class: VehicleClass::Sedan.as_str().to_string(),
            guest_category: GuestCategory::Regular.as_str().to_string(),
            pickup_location: String::new(),
            dropoff_location: String::new(),
            stops: Vec::new(),
            flight_number: String::new(),
            duration: String::new(),
            date: String::new(),
            time: String::new(),
            passengers: "1".to_string(),
            child_seat: false,
            service_type: String::new(),
            notes: String::new(),
            payment_method: PaymentMethod::Cash.as_str().to_string(),
        }
    }
}
