// rota-client/tests/session_integration.rs
// 集成测试

use rota_client::{MemoryStore, ScheduleSession, ScheduleStore};
use rota_engine::{AddEmployeeRequest, AddPositionRequest, AvailabilityQuery};
use shared::ErrorCode;
use shared::models::{Area, Employee, Position, Setup, TimeBlock};
use std::sync::Arc;

fn roster_employee(id: &str, name: &str, day: &str, range: &str) -> Employee {
    let mut employee = Employee::new(id, name);
    employee.day = Some(day.to_string());
    employee.time_block = Some(range.to_string());
    employee.area = Some(Area::Foh);
    employee
}

/// Monday block 08:00-12:00 holding "Register 1" (Front Counter);
/// roster has Ann working Monday 07:00 - 13:00.
fn seeded_store() -> Arc<MemoryStore> {
    let mut setup = Setup::new("s1", "2026-08-03", "2026-08-09");
    setup.uploaded_schedules = Some(vec![roster_employee("e1", "Ann", "monday", "07:00 - 13:00")]);

    let day = setup.day_schedule_entry("monday");
    let mut block = TimeBlock::new("b1", "08:00", "12:00");
    block
        .positions
        .push(Position::new("p1", "Register 1", "Front Counter"));
    day.time_blocks.push(block);

    let store = MemoryStore::new();
    store.insert(setup);
    Arc::new(store)
}

async fn open_monday_session(store: &Arc<MemoryStore>) -> ScheduleSession<MemoryStore> {
    let mut session = ScheduleSession::open(Arc::clone(store), "s1").await.unwrap();
    session.set_active_day("monday").unwrap();
    session
}

#[tokio::test]
async fn test_assign_flows_end_to_end() {
    let store = seeded_store();
    let mut session = open_monday_session(&store).await;

    // Ann starts out unassigned
    let unassigned = session.unassigned_employees();
    assert_eq!(unassigned.len(), 1);
    assert_eq!(unassigned[0].id, "e1");

    assert!(session.assign("p1", "e1", "Ann").await.unwrap());

    // The position holds her id and she left the unassigned view
    let day = session.setup().day_schedule("monday").unwrap();
    let (_, position) = day.find_position("p1").unwrap();
    assert_eq!(position.assignment(), Some(("e1", "Ann")));
    assert!(session.unassigned_employees().is_empty());

    // The write reached the store
    let persisted = store.fetch("s1").await.unwrap();
    let day = persisted.day_schedule("monday").unwrap();
    assert_eq!(
        day.find_position("p1").unwrap().1.assignment(),
        Some(("e1", "Ann"))
    );

    // A new 10:00-14:00 slot excludes Ann: her block overlaps it, even
    // though her own 07:00-13:00 shift would otherwise qualify her
    let query = AvailabilityQuery {
        block_start: 10 * 60,
        block_end: 14 * 60,
        ..Default::default()
    };
    assert!(session.available_employees(&query).iter().all(|e| e.id != "e1"));

    // A touching 12:00-15:00 slot does not conflict; only her own
    // shift window (ends 13:00) governs
    let query = AvailabilityQuery {
        block_start: 12 * 60,
        block_end: 15 * 60,
        ..Default::default()
    };
    assert!(session.available_employees(&query).iter().any(|e| e.id == "e1"));
}

#[tokio::test]
async fn test_remove_round_trip_restores_views() {
    let store = seeded_store();
    let mut session = open_monday_session(&store).await;

    session.assign("p1", "e1", "Ann").await.unwrap();
    assert!(session.unassigned_employees().is_empty());

    assert!(session.remove("p1").await.unwrap());

    let day = session.setup().day_schedule("monday").unwrap();
    assert_eq!(day.find_position("p1").unwrap().1.assignment(), None);
    let unassigned = session.unassigned_employees();
    assert_eq!(unassigned.len(), 1);
    assert_eq!(unassigned[0].id, "e1");
}

#[tokio::test]
async fn test_stale_references_are_noops() {
    let store = seeded_store();
    let mut session = open_monday_session(&store).await;

    assert!(!session.assign("p9", "e1", "Ann").await.unwrap());
    assert!(!session.remove("p9").await.unwrap());
    assert!(!session.rename_employee("e9", "Nobody").await.unwrap());
    assert!(!session.delete_employee("e9").await.unwrap());
    // Nothing was written for no-ops
    assert_eq!(store.replace_count(), 0);
}

#[tokio::test]
async fn test_failed_save_rolls_back_only_touched_fields() {
    let store = seeded_store();
    let mut session = open_monday_session(&store).await;

    store.fail_next_replace();
    let err = session.assign("p1", "e1", "Ann").await.unwrap_err();
    assert!(err.is_retryable());

    // The optimistic assignment was reverted...
    let day = session.setup().day_schedule("monday").unwrap();
    assert_eq!(day.find_position("p1").unwrap().1.assignment(), None);
    let unassigned = session.unassigned_employees();
    assert_eq!(unassigned.len(), 1);

    // ...and the retry succeeds
    assert!(session.assign("p1", "e1", "Ann").await.unwrap());
    let persisted = store.fetch("s1").await.unwrap();
    assert_eq!(
        persisted
            .day_schedule("monday")
            .unwrap()
            .find_position("p1")
            .unwrap()
            .1
            .assignment(),
        Some(("e1", "Ann"))
    );
}

#[tokio::test]
async fn test_delete_is_week_wide_while_rename_is_day_scoped() {
    let store = seeded_store();
    {
        // Give Ann a Wednesday position too
        let mut setup = store.fetch("s1").await.unwrap();
        let day = setup.day_schedule_entry("wednesday");
        let mut block = TimeBlock::new("b2", "08:00", "12:00");
        block
            .positions
            .push(Position::new("p2", "Register 2", "Front Counter"));
        day.time_blocks.push(block);
        store.insert(setup);
    }

    let mut session = open_monday_session(&store).await;
    session.assign("p1", "e1", "Ann").await.unwrap();
    session.set_active_day("wednesday").unwrap();
    session.assign("p2", "e1", "Ann").await.unwrap();
    session.set_active_day("monday").unwrap();

    // Rename while monday is active: only monday's display name moves
    session.rename_employee("e1", "Annabel").await.unwrap();
    let setup = session.setup();
    assert_eq!(
        setup
            .day_schedule("monday")
            .unwrap()
            .find_position("p1")
            .unwrap()
            .1
            .assignment(),
        Some(("e1", "Annabel"))
    );
    assert_eq!(
        setup
            .day_schedule("wednesday")
            .unwrap()
            .find_position("p2")
            .unwrap()
            .1
            .assignment(),
        Some(("e1", "Ann"))
    );

    // Delete clears both days in a single call
    session.delete_employee("e1").await.unwrap();
    let persisted = store.fetch("s1").await.unwrap();
    for (day, position_id) in [("monday", "p1"), ("wednesday", "p2")] {
        assert_eq!(
            persisted
                .day_schedule(day)
                .unwrap()
                .find_position(position_id)
                .unwrap()
                .1
                .assignment(),
            None
        );
    }
    assert!(persisted.uploaded_schedules.as_ref().unwrap().is_empty());
}

#[tokio::test]
async fn test_add_employee_and_position_compose() {
    let store = seeded_store();
    let mut session = open_monday_session(&store).await;

    session
        .add_employee(&AddEmployeeRequest {
            name: "Bob".to_string(),
            area: Some(Area::Boh),
            start: "09:00".to_string(),
            end: "17:00".to_string(),
        })
        .await
        .unwrap();

    session
        .add_position(&AddPositionRequest {
            time_block_id: "b1".to_string(),
            name: "Grill 1".to_string(),
            category: "Kitchen".to_string(),
            block_start: None,
            block_end: None,
        })
        .await
        .unwrap();

    // The new position is fillable by the new BOH employee only
    let day = session.setup().day_schedule("monday").unwrap();
    let grill_id = day
        .time_block("b1")
        .unwrap()
        .positions
        .iter()
        .find(|p| p.name == "Grill 1")
        .unwrap()
        .id
        .clone();
    let available = session.available_for_position(&grill_id, None);
    assert_eq!(available.len(), 1, "Ann is FOH and must be filtered out");
    assert_eq!(available[0].name, "Bob");

    let bob_id = available[0].id.clone();
    session.assign(&grill_id, &bob_id, "Bob").await.unwrap();

    let persisted = store.fetch("s1").await.unwrap();
    let day = persisted.day_schedule("monday").unwrap();
    let (_, position) = day.find_position(&grill_id).unwrap();
    assert_eq!(position.assignment().map(|(id, _)| id), Some(bob_id.as_str()));
}

#[tokio::test]
async fn test_add_position_validation_failure_leaves_state_untouched() {
    let store = seeded_store();
    let mut session = open_monday_session(&store).await;

    let err = session
        .add_position(&AddPositionRequest {
            time_block_id: "b9".to_string(),
            name: "Register 9".to_string(),
            category: "Front Counter".to_string(),
            block_start: None,
            block_end: None,
        })
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ValidationFailed);
    assert_eq!(store.replace_count(), 0);
    assert!(session.setup().day_schedule("monday").unwrap().time_block("b9").is_none());
}

#[tokio::test]
async fn test_break_flow_through_session() {
    let store = seeded_store();
    let session = open_monday_session(&store).await;

    session.start_break("e1", 30).unwrap();
    assert!(session.breaks().is_on_break("e1"));
    assert!(session.breaks().has_had_break("e1"));
    assert!(session.breaks().remaining_minutes("e1") <= 30);

    // Second break while one is active is rejected untouched
    let err = session.start_break("e1", 60).unwrap_err();
    assert_eq!(err.code, ErrorCode::BreakAlreadyActive);
    assert_eq!(session.breaks().breaks_for("e1").len(), 1);

    let finished = session.end_break("e1").unwrap();
    assert!(finished.end_time.is_some());
    assert!(!session.breaks().is_on_break("e1"));
    // Break state never touches the schedule document
    assert_eq!(store.replace_count(), 0);

    // Ending again is a harmless no-op
    assert!(session.end_break("e1").is_none());
}

#[tokio::test]
async fn test_snapshot_staleness_window() {
    let store = seeded_store();
    let mut session = open_monday_session(&store).await;

    assert!(!session.is_snapshot_stale(std::time::Duration::from_secs(30 * 60)));
    assert!(session.is_snapshot_stale(std::time::Duration::ZERO));

    session.reload().await.unwrap();
    assert!(!session.is_snapshot_stale(std::time::Duration::from_secs(30 * 60)));
}

#[tokio::test]
async fn test_set_active_day_tolerates_upload_spellings() {
    let store = seeded_store();
    let mut session = open_monday_session(&store).await;

    session.set_active_day("Thursday, June 15").unwrap();
    assert_eq!(session.active_day(), "thursday");
    assert!(session.set_active_day("xyz").is_err());
    // A failed switch leaves the prior day active
    assert_eq!(session.active_day(), "thursday");
}
