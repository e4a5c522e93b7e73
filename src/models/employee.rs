//! Employee model and related types.
//!
//! This module defines the Employee struct and the ContractHours enumeration
//! for representing workers in the roster system.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::RosterError;

/// The supported daily contract-hour values.
///
/// Contract hours are a target and limit for monthly accounting, never the
/// actual clocked time (worked hours always derive from the assigned
/// shift). Only this fixed set of values is accepted; anything else is a
/// precondition violation.
///
/// # Example
///
/// ```
/// use roster_engine::models::ContractHours;
/// use rust_decimal::Decimal;
///
/// let hours = ContractHours::try_from(8).unwrap();
/// assert_eq!(hours, ContractHours::Eight);
/// assert_eq!(hours.as_decimal(), Decimal::from(8));
/// assert!(ContractHours::try_from(5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ContractHours {
    /// 2 hours per working day.
    Two,
    /// 4 hours per working day.
    Four,
    /// 6 hours per working day.
    Six,
    /// 7 hours per working day.
    Seven,
    /// 8 hours per working day.
    Eight,
    /// 10 hours per working day.
    Ten,
    /// 12 hours per working day.
    Twelve,
}

impl ContractHours {
    /// Returns the numeric hour value.
    pub fn as_u8(self) -> u8 {
        match self {
            ContractHours::Two => 2,
            ContractHours::Four => 4,
            ContractHours::Six => 6,
            ContractHours::Seven => 7,
            ContractHours::Eight => 8,
            ContractHours::Ten => 10,
            ContractHours::Twelve => 12,
        }
    }

    /// Returns the hour value as a [`Decimal`] for hour accounting.
    pub fn as_decimal(self) -> Decimal {
        Decimal::from(self.as_u8())
    }
}

impl TryFrom<u8> for ContractHours {
    type Error = RosterError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(ContractHours::Two),
            4 => Ok(ContractHours::Four),
            6 => Ok(ContractHours::Six),
            7 => Ok(ContractHours::Seven),
            8 => Ok(ContractHours::Eight),
            10 => Ok(ContractHours::Ten),
            12 => Ok(ContractHours::Twelve),
            other => Err(RosterError::InvalidEmployee {
                field: "contract_hours".to_string(),
                message: format!("unsupported value {other} (expected 2, 4, 6, 7, 8, 10 or 12)"),
            }),
        }
    }
}

impl From<ContractHours> for u8 {
    fn from(value: ContractHours) -> Self {
        value.as_u8()
    }
}

/// An employee subject to roster generation.
///
/// Input employee records are never mutated by the generator. Employees
/// without an assigned position are excluded from a generation run.
///
/// # Example
///
/// ```
/// use roster_engine::models::{ContractHours, Employee};
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     name: "Ivan Petrov".to_string(),
///     position_id: Some("pos_reception".to_string()),
///     contract_hours: ContractHours::Eight,
///     is_minor: false,
///     birth_date: None,
/// };
/// assert!(employee.position_id.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// The assigned position, or None when unassigned.
    #[serde(default)]
    pub position_id: Option<String>,
    /// Contracted hours per working day.
    pub contract_hours: ContractHours,
    /// Whether the employee is legally a minor (precomputed upstream).
    pub is_minor: bool,
    /// The employee's birth date, carried for display only.
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
}
