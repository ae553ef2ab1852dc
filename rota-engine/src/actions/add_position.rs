//! Add-position action
//!
//! Appends an ad-hoc, unassigned position to a time block in the active
//! day, creating the block when it does not exist yet.

use super::{Applied, Revert, validate_request};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};
use shared::models::{Position, Setup, TimeBlock};
use shared::util::snowflake_id;
use validator::Validate;

/// Add-position payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddPositionRequest {
    #[validate(length(min = 1, message = "time block id is required"))]
    pub time_block_id: String,
    #[validate(length(min = 1, message = "position name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,
    /// Block window, only consulted when the block must be created
    pub block_start: Option<String>,
    pub block_end: Option<String>,
}

/// Append a new unassigned position to the named block.
///
/// When the block is missing it is created from
/// `block_start`/`block_end`; omitting those while the block does not
/// exist is a validation error (rejected before any mutation).
pub fn add_position(
    setup: &mut Setup,
    active_day: &str,
    request: &AddPositionRequest,
) -> AppResult<Applied> {
    // 1. Validate the payload
    validate_request(request)?;

    // 2. Check whether the target block must be created, before any write
    let block_exists = setup
        .day_schedule(active_day)
        .is_some_and(|day| day.time_block(&request.time_block_id).is_some());
    if !block_exists && (request.block_start.is_none() || request.block_end.is_none()) {
        return Err(AppError::validation(
            "Creating a new time block requires start and end times",
        ));
    }

    // 3. Mint and place the position
    let position_id = format!("pos-{}", snowflake_id());
    let position = Position::new(&position_id, request.name.trim(), request.category.trim());

    let day = setup.day_schedule_entry(active_day);
    let created_block = !block_exists;
    if created_block {
        // Range presence was checked in step 2
        let start = request.block_start.as_deref().unwrap_or_default().trim();
        let end = request.block_end.as_deref().unwrap_or_default().trim();
        day.time_blocks
            .push(TimeBlock::new(&request.time_block_id, start, end));
    }
    if let Some(block) = day.time_block_mut(&request.time_block_id) {
        block.positions.push(position);
    }

    tracing::info!(
        position_id,
        time_block_id = request.time_block_id.as_str(),
        day = active_day,
        created_block,
        "added position"
    );
    Ok(Applied::new(Revert::PositionAdded {
        day: active_day.to_string(),
        time_block_id: request.time_block_id.clone(),
        position_id,
        created_block,
    }))
}
