//! Core data models for EventDesk.
//!
//! This crate provides the schema shared by the store and the view-models:
//! events with their embedded venue, tickets and leads, the request shapes
//! used to create and update events, and the remote feed document.

pub mod builders;
pub mod event;
pub mod feed;
pub mod lead;
pub mod request;
pub mod ticket;
pub mod venue;

// Re-export main types
pub use builders::EventBuilder;
pub use event::{parse_timestamp, Event, Organizer, DEFAULT_IS_PUBLIC, DEFAULT_STATUS};
pub use feed::{EventFeed, SkippedRecord};
pub use lead::{HandlerLink, HandlerUser, Lead, LeadOrganization, LeadPerson};
pub use request::{CreateEventRequest, UpdateEventRequest, VenuePatch, VenueRequest};
pub use ticket::{Coupon, Purchaser, Ticket, TicketPurchase};
pub use venue::Venue;
