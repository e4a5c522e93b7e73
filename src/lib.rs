//! Monthly work-roster generation engine.
//!
//! This crate generates day-by-day rest/holiday/work rosters for a firm's
//! positions, shifts and employees, approximating contractual working-day
//! counts while honouring labour-law limits (weekly hour ceilings,
//! consecutive-day caps, extended-shift rest rules and minor protections).
//! Staffing shortfalls are reported as coverage gaps rather than silently
//! resolved by overriding rest days.

#![warn(missing_docs)]

pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
pub mod scheduling;
