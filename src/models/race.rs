//! Race model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A goal race a training cycle can be linked to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Race {
    pub id: String,
    /// Owner
    pub user_id: String,
    pub name: String,
    /// Race day in the athlete's calendar
    pub race_date: NaiveDate,
    /// e.g. "marathon", "ultra_trail"
    #[serde(default)]
    pub race_type: Option<String>,
}
