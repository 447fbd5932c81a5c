//! RSVP attendance answer

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A guest's answer to an invitation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attendance {
    Yes,
    No,
    Maybe,
}

impl Attendance {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::Maybe => "maybe",
        }
    }

    /// Only confirmed guests count toward approved headcounts
    pub const fn is_confirmed(self) -> bool {
        matches!(self, Self::Yes)
    }

    /// A declined response never carries a headcount.
    pub const fn normalize_guest_count(self, guest_count: i32) -> i32 {
        match self {
            Self::No => 0,
            Self::Yes | Self::Maybe => guest_count,
        }
    }
}

impl fmt::Display for Attendance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid attendance value: {0}")]
pub struct ParseAttendanceError(pub String);

impl FromStr for Attendance {
    type Err = ParseAttendanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes" => Ok(Self::Yes),
            "no" => Ok(Self::No),
            "maybe" => Ok(Self::Maybe),
            other => Err(ParseAttendanceError(other.to_string())),
        }
    }
}
