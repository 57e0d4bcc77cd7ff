use crate::models::{Booking, BookingStatus};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("booking {0} not found")]
    NotFound(String),

    #[error("booking {reference} cannot move from {from} to {to}")]
    InvalidTransition {
        reference: String,
        from: BookingStatus,
        to: BookingStatus,
    },

    #[error("booking {0} already exists")]
    DuplicateReference(String),
}

/// The session's bookings, most recent first.
///
/// Entries are only ever replaced whole; callers get shared slices and never
/// a mutable handle to a stored booking.
#[derive(Debug, Default)]
pub struct BookingStore {
    bookings: Vec<Booking>,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, booking: Booking) -> Result<&Booking, StoreError> {
        let duplicate = self.position(&booking.reference).is_some();
        debug_assert!(
            !duplicate,
            "booking reference {} inserted twice",
            booking.reference
        );
        if duplicate {
            tracing::error!(reference = %booking.reference, "duplicate booking reference rejected");
            return Err(StoreError::DuplicateReference(booking.reference));
        }

        tracing::debug!(reference = %booking.reference, "booking inserted");
        self.bookings.insert(0, booking);
        Ok(&self.bookings[0])
    }

    pub fn list(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn get(&self, reference: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.reference == reference)
    }

    pub fn contains(&self, reference: &str) -> bool {
        self.position(reference).is_some()
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    /// Move a booking one step along its lifecycle.
    ///
    /// Returns the status it left. The store is unchanged on error.
    pub fn update_status(
        &mut self,
        reference: &str,
        to: BookingStatus,
    ) -> Result<BookingStatus, StoreError> {
        let idx = self
            .position(reference)
            .ok_or_else(|| StoreError::NotFound(reference.to_string()))?;

        let current = &self.bookings[idx];
        let from = current.status;
        if !from.can_transition_to(to) {
            tracing::warn!(reference, from = %from, to = %to, "rejected status transition");
            return Err(StoreError::InvalidTransition {
                reference: reference.to_string(),
                from,
                to,
            });
        }

        let replacement = Booking {
            status: to,
            ..current.clone()
        };
        self.bookings[idx] = replacement;

        tracing::info!(reference, from = %from, to = %to, "booking status updated");
        Ok(from)
    }

    /// Step to whatever status follows the current one.
    pub fn advance(&mut self, reference: &str) -> Result<(BookingStatus, BookingStatus), StoreError> {
        let current = self
            .get(reference)
            .ok_or_else(|| StoreError::NotFound(reference.to_string()))?
            .status;
        let Some(next) = current.next() else {
            return Err(StoreError::InvalidTransition {
                reference: reference.to_string(),
                from: current,
                to: current,
            });
        };
        let from = self.update_status(reference, next)?;
        Ok((from, next))
    }

    fn position(&self, reference: &str) -> Option<usize> {
        self.bookings.iter().position(|b| b.reference == reference)
    }
}
