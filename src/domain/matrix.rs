use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Daily quantities for one customer part.
///
/// `days` is sparse: a missing day number means zero quantity.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct PartMatrix {
    pub part_number: String,
    pub part_desc: String,
    #[serde(default)]
    pub days: HashMap<u32, i64>,
}

impl PartMatrix {
    /// Quantity committed on the given day of the month, zero when absent.
    pub fn qty_on(&self, day: u32) -> i64 {
        self.days.get(&day).copied().unwrap_or(0)
    }
}
