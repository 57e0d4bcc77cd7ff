use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Staff,
    Driver,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::Staff => "staff",
            Sender::Driver => "driver",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub booking_reference: String,
    pub sender: Sender,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}
