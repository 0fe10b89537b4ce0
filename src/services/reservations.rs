use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{Event, Reservation, ReservationStatus},
};

/// In-memory list of the session's reservations
#[derive(Debug, Default)]
pub struct ReservationBook {
    reservations: Vec<Reservation>,
}

impl ReservationBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Books tickets for an event
    pub fn make_reservation(
        &mut self,
        event: &Event,
        ticket_count: u32,
        ticket_type: &str,
    ) -> AppResult<Reservation> {
        if ticket_count == 0 {
            return Err(AppError::InvalidInput(
                "ticketCount must be at least 1".to_string(),
            ));
        }

        let ticket_type = ticket_type.trim();
        if ticket_type.is_empty() {
            return Err(AppError::InvalidInput(
                "ticketType must not be empty".to_string(),
            ));
        }

        let reservation = Reservation::new(event, ticket_count, ticket_type.to_string());
        tracing::info!(
            reservation_id = %reservation.id,
            event_id = %event.id,
            ticket_count,
            total_price = reservation.total_price(),
            "Reservation made"
        );

        self.reservations.push(reservation.clone());
        Ok(reservation)
    }

    /// Cancels a reservation; cancelling twice is a no-op
    pub fn cancel(&mut self, id: Uuid) -> AppResult<Reservation> {
        let reservation = self
            .reservations
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::NotFound(format!("reservation {}", id)))?;

        if reservation.status != ReservationStatus::Cancelled {
            reservation.status = ReservationStatus::Cancelled;
            tracing::info!(reservation_id = %id, "Reservation cancelled");
        }

        Ok(reservation.clone())
    }

    pub fn get(&self, id: Uuid) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.id == id)
    }

    /// All reservations in booking order
    pub fn list(&self) -> &[Reservation] {
        &self.reservations
    }
}
