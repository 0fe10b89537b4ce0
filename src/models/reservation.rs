use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Event;

/// Default start time shown on tickets when the catalog has none
pub const DEFAULT_EVENT_TIME: &str = "20:00";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Confirmed,
    Pending,
    Cancelled,
    Refunded,
}

/// A booking of one or more tickets for an event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: Uuid,
    pub event_id: String,
    pub event_name: String,
    pub date: String,
    pub time: String,
    pub location: String,
    /// Unit price at booking time
    pub price: f64,
    pub ticket_count: u32,
    pub ticket_type: String,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    /// Creates a confirmed reservation snapshotting the event's details
    pub fn new(event: &Event, ticket_count: u32, ticket_type: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            event_id: event.id.clone(),
            event_name: event.title.clone(),
            date: event.date.clone(),
            time: DEFAULT_EVENT_TIME.to_string(),
            location: event.location.clone(),
            price: event.price,
            ticket_count,
            ticket_type,
            status: ReservationStatus::Confirmed,
            created_at: Utc::now(),
        }
    }

    pub fn total_price(&self) -> f64 {
        self.price * f64::from(self.ticket_count)
    }

    pub fn is_active(&self) -> bool {
        matches!(
            self.status,
            ReservationStatus::Confirmed | ReservationStatus::Pending
        )
    }
}
