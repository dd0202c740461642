use serde::{Deserialize, Serialize};

use crate::domain::matrix::PartMatrix;

/// Query parameters accepted by the matrix page.
#[derive(Debug, Default, Deserialize)]
pub struct MatrixQuery {
    pub month: Option<u32>,
    pub year: Option<i32>,
    pub version: Option<u32>,
    /// Part number picked in the selector; falls back to the first row.
    pub part: Option<String>,
}

/// The selected part expanded over the full day grid, zeros filled in.
#[derive(Debug, Serialize, PartialEq)]
pub struct SelectedPart {
    pub part_number: String,
    pub part_desc: String,
    /// DI quantities for days `1..=N`, aligned with `MatrixPageData::days`.
    pub cells: Vec<i64>,
}

/// Data required to render the matrix template.
#[derive(Debug, Serialize)]
pub struct MatrixPageData {
    pub month: u32,
    pub year: i32,
    pub version: u32,
    pub days: Vec<u32>,
    pub parts: Vec<PartMatrix>,
    pub selected: Option<SelectedPart>,
    /// Years offered by the selector, centered on the current year.
    pub year_options: Vec<i32>,
}
