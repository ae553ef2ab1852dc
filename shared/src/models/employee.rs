//! Employee Model

use super::break_record::BreakRecord;
use serde::{Deserialize, Serialize};

/// Top-level staffing area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Area {
    /// Front-of-House (counter, drive thru)
    #[serde(rename = "FOH")]
    Foh,
    /// Back-of-House (kitchen)
    #[serde(rename = "BOH")]
    Boh,
}

impl Area {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Foh => "FOH",
            Self::Boh => "BOH",
        }
    }

    /// Parse an area label from uploaded text ("FOH"/"BOH", any case)
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        if label.eq_ignore_ascii_case("foh") {
            Some(Self::Foh)
        } else if label.eq_ignore_ascii_case("boh") {
            Some(Self::Boh)
        } else {
            None
        }
    }
}

/// Employee record as it appears in rosters and uploaded schedules
///
/// `id` is the only reliable key within a day's working set; names repeat
/// and "Unknown Employee" placeholders occur, so reconciliation is always
/// by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    /// Staffing area, unset when it must be inferred
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<Area>,
    /// Raw day-of-week text from the upload; unset means "every day"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,
    /// Single "<start> - <end>" range for roster entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_block: Option<String>,
    /// Ranges aggregated from multiple assigned positions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub time_blocks: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub breaks: Vec<BreakRecord>,
}

impl Employee {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            area: None,
            day: None,
            time_block: None,
            time_blocks: Vec::new(),
            breaks: Vec::new(),
        }
    }

    /// All raw shift ranges this employee carries, single range first
    pub fn shift_ranges(&self) -> impl Iterator<Item = &str> {
        self.time_block
            .as_deref()
            .into_iter()
            .chain(self.time_blocks.iter().map(String::as_str))
    }

    /// Record an assigned-position range without duplicating it
    pub fn add_time_block(&mut self, range: impl Into<String>) {
        let range = range.into();
        if self.time_block.as_deref() != Some(range.as_str())
            && !self.time_blocks.contains(&range)
        {
            self.time_blocks.push(range);
        }
    }
}
