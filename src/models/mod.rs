//! Core data models for the roster generation engine.
//!
//! This module contains all the domain records consumed and produced by the
//! engine. Input records ([`Position`], [`Shift`], [`Employee`]) are plain
//! in-memory values and are never mutated during a generation run; output
//! records ([`MonthSchedule`] and its parts) are fully constructed by the
//! generator in one pass.

mod employee;
mod position;
mod schedule;
mod shift;

pub use employee::{ContractHours, Employee};
pub use position::Position;
pub use schedule::{CoverageGap, EmployeeSchedule, MonthSchedule, ScheduleEntry};
pub use shift::Shift;
