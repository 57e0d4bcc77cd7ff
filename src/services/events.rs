use crate::models::BookingEvent;
use crate::state::AppState;

pub fn publish(state: &AppState, event: BookingEvent) {
    let reference = event.reference().to_string();
    // No subscribers is the normal case between page loads.
    if state.events_tx.send(event).is_err() {
        tracing::trace!(reference = %reference, "no event subscribers");
    }
}
