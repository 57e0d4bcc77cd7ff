use std::sync::{Mutex, MutexGuard, PoisonError};

use tokio::sync::broadcast;

use crate::config::AppConfig;
use crate::models::BookingEvent;
use crate::services::booking_form::BookingForm;
use crate::services::chat::ChatLog;
use crate::services::store::BookingStore;

pub struct AppState {
    pub config: AppConfig,
    pub form: BookingForm,
    pub store: Mutex<BookingStore>,
    pub chat: Mutex<ChatLog>,
    pub events_tx: broadcast::Sender<BookingEvent>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let (events_tx, _) = broadcast::channel(config.event_buffer.max(1));
        Self {
            form: BookingForm::new(config.submit_delay),
            store: Mutex::new(BookingStore::new()),
            chat: Mutex::new(ChatLog::new()),
            events_tx,
            config,
        }
    }

    pub fn store(&self) -> MutexGuard<'_, BookingStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn chat(&self) -> MutexGuard<'_, ChatLog> {
        self.chat.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
