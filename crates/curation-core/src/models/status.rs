use std::fmt;

use serde::{Deserialize, Serialize};

/// Derived classification of a file's confidence trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Unprocessed,
    NeedsWork,
    Stagnant,
    Improving,
    Converged,
}

impl Status {
    pub const ALL: [Status; 5] = [
        Status::Unprocessed,
        Status::NeedsWork,
        Status::Stagnant,
        Status::Improving,
        Status::Converged,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unprocessed => "unprocessed",
            Self::NeedsWork => "needs-work",
            Self::Stagnant => "stagnant",
            Self::Improving => "improving",
            Self::Converged => "converged",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
