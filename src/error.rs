//! Engine error type.
//!
//! Only two conditions abort a solve: a missing restaurant identity and
//! an empty staff list. Every other input anomaly is absorbed locally at
//! intake (record dropped, default applied) or reported in the result
//! (staffing gaps), so a single malformed record never prevents
//! scheduling the rest of the staff.

use thiserror::Error;

/// Fatal rostering failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// The restaurant identity is missing or blank.
    #[error("restaurant identity is missing or empty")]
    InvalidRestaurant,

    /// No usable employee records remained after intake.
    #[error("no employees found for restaurant '{restaurant}'")]
    NoEmployees {
        /// Restaurant the roster was requested for.
        restaurant: String,
    },
}

/// Result alias for rostering operations.
pub type RosterResult<T> = Result<T, RosterError>;
