//! Reconciliation mode and path style definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which side of the computed keep-set gets deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReconcileMode {
    /// Delete exactly the computed names from the target folder.
    #[default]
    KeepList,
    /// Delete everything in the target folder except the computed names.
    Complement,
}

impl fmt::Display for ReconcileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReconcileMode::KeepList => write!(f, "keep-list"),
            ReconcileMode::Complement => write!(f, "complement"),
        }
    }
}

impl FromStr for ReconcileMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "keep-list" | "keep_list" | "keeplist" => Ok(ReconcileMode::KeepList),
            "complement" => Ok(ReconcileMode::Complement),
            _ => Err(format!("Unknown reconcile mode: {}", s)),
        }
    }
}

/// How a folder and a bare filename are combined into a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathStyle {
    /// Platform path join, inserting a separator when needed.
    #[default]
    Join,
    /// Plain string concatenation; the folder must already end in a separator.
    Concat,
}

impl fmt::Display for PathStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathStyle::Join => write!(f, "join"),
            PathStyle::Concat => write!(f, "concat"),
        }
    }
}
