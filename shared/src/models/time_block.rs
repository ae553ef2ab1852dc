//! Time block and day schedule models

use super::position::Position;
use serde::{Deserialize, Serialize};

/// A contiguous scheduled interval within a day holding one or more
/// positions.
///
/// `start`/`end` are raw time-of-day strings as uploaded ("8", "8:30",
/// "5:00 pm"); comparisons always go through the engine's time parsing.
/// Blocks within one day may overlap. Position order is presentation
/// only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeBlock {
    pub id: String,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub positions: Vec<Position>,
}

impl TimeBlock {
    pub fn new(id: impl Into<String>, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            start: start.into(),
            end: end.into(),
            positions: Vec::new(),
        }
    }

    /// "<start> - <end>" label, the shape roster ranges use
    pub fn range_label(&self) -> String {
        format!("{} - {}", self.start, self.end)
    }

    pub fn position(&self, position_id: &str) -> Option<&Position> {
        self.positions.iter().find(|p| p.id == position_id)
    }

    pub fn position_mut(&mut self, position_id: &str) -> Option<&mut Position> {
        self.positions.iter_mut().find(|p| p.id == position_id)
    }
}

/// One day's worth of time blocks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    pub day: String,
    #[serde(default)]
    pub time_blocks: Vec<TimeBlock>,
}

impl DaySchedule {
    pub fn new(day: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            time_blocks: Vec::new(),
        }
    }

    pub fn time_block(&self, block_id: &str) -> Option<&TimeBlock> {
        self.time_blocks.iter().find(|b| b.id == block_id)
    }

    pub fn time_block_mut(&mut self, block_id: &str) -> Option<&mut TimeBlock> {
        self.time_blocks.iter_mut().find(|b| b.id == block_id)
    }

    /// Locate a position anywhere in the day, with its containing block
    pub fn find_position(&self, position_id: &str) -> Option<(&TimeBlock, &Position)> {
        self.time_blocks.iter().find_map(|b| {
            b.position(position_id).map(|p| (b, p))
        })
    }

    /// Mutable position lookup across all blocks of the day
    pub fn find_position_mut(&mut self, position_id: &str) -> Option<&mut Position> {
        self.time_blocks
            .iter_mut()
            .find_map(|b| b.position_mut(position_id))
    }

    /// Ids of every employee bound to a position in this day
    pub fn assigned_employee_ids(&self) -> impl Iterator<Item = &str> {
        self.time_blocks
            .iter()
            .flat_map(|b| b.positions.iter())
            .filter_map(|p| p.employee_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_day() -> DaySchedule {
        let mut day = DaySchedule::new("monday");
        let mut block = TimeBlock::new("b1", "08:00", "12:00");
        block.positions.push(Position::new("p1", "Register 1", "Front Counter"));
        block.positions.push(Position::new("p2", "Grill 1", "Kitchen"));
        day.time_blocks.push(block);
        day
    }

    #[test]
    fn test_find_position() {
        let day = sample_day();
        let (block, pos) = day.find_position("p2").unwrap();
        assert_eq!(block.id, "b1");
        assert_eq!(pos.name, "Grill 1");
        assert!(day.find_position("p9").is_none());
    }

    #[test]
    fn test_assigned_employee_ids() {
        let mut day = sample_day();
        day.find_position_mut("p1").unwrap().assign("e1", "Ann");
        let ids: Vec<&str> = day.assigned_employee_ids().collect();
        assert_eq!(ids, vec!["e1"]);
    }

    #[test]
    fn test_range_label() {
        let block = TimeBlock::new("b1", "8", "12:30");
        assert_eq!(block.range_label(), "8 - 12:30");
    }

    #[test]
    fn test_serde_week_shape() {
        let day = sample_day();
        let json = serde_json::to_string(&day).unwrap();
        assert!(json.contains("\"timeBlocks\""));
        let back: DaySchedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, day);
    }
}
