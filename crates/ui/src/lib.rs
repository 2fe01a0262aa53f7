//! # Citaflow UI
//!
//! Headless state layer behind the booking dashboard and the public booking
//! page. Nothing here renders; a shell (web view, terminal, tests) drives
//! these controllers and reads their state back.
//!
//! The moving parts:
//!
//! - [`cache::QueryCache`]: explicit response cache keyed by resource +
//!   params, invalidated (never merged) when mutations succeed.
//! - [`debounce::Debounced`]: settle-timer for search inputs.
//! - [`lists::ListController`]: pagination/search state around one paginated
//!   resource, stale-but-shown while the next page loads.
//! - [`wizard::BookingWizard`]: the five-step public booking state machine.
//! - [`calendar::CalendarController`]: date-range-driven appointment window
//!   with the shared create/edit/delete modal flow.

pub mod admin;
pub mod cache;
pub mod calendar;
pub mod cancel;
pub mod debounce;
pub mod lists;
pub mod mutation;
pub mod schedule;
pub mod stats;
pub mod wizard;
