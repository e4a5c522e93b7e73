//! Position model.

use serde::{Deserialize, Serialize};

/// A staffed position within the firm (e.g. reception, kitchen).
///
/// Each position carries the minimum number of employees that must be
/// working it on any workable day. Positions are part of the firm
/// configuration and immutable for the duration of a generation run.
///
/// # Example
///
/// ```
/// use roster_engine::models::Position;
///
/// let position = Position {
///     id: "pos_reception".to_string(),
///     name: "Reception".to_string(),
///     min_per_day: 2,
/// };
/// assert_eq!(position.min_per_day, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Unique identifier for the position.
    pub id: String,
    /// The human-readable name of the position.
    pub name: String,
    /// Minimum number of employees required on any workable day (>= 1).
    pub min_per_day: u32,
}
