//! `[future]` compatibility flags.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FutureOptions {
    pub v4: Option<bool>,
}

/// Opt-in flags for behavior of the next major renderer version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FutureConfig {
    pub v4: bool,
}

impl FutureOptions {
    pub fn resolve(self) -> FutureConfig {
        FutureConfig {
            v4: self.v4.unwrap_or(false),
        }
    }
}
