pub mod catalog;
pub mod matcher;
pub mod questionnaire;
pub mod recommendations;
pub mod reservations;
pub mod search;

pub use catalog::{EventCatalog, MockCatalog};
pub use matcher::match_events;
pub use reservations::ReservationBook;
