//! Schedule editing walkthrough against the in-memory store
//!
//! Run with: cargo run --example schedule_demo -p rota-client

use rota_client::{MemoryStore, ScheduleSession, ScheduleStore};
use rota_engine::time::format_time_12h;
use rota_engine::{AddEmployeeRequest, AddPositionRequest, is_on_current_shift};
use shared::models::{Area, Employee, Position, Setup, TimeBlock};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn seed() -> Setup {
    let mut setup = Setup::new("demo-week", "2026-08-03", "2026-08-09");
    setup.name = Some("Demo Week".to_string());

    let mut ann = Employee::new("e1", "Ann");
    ann.day = Some("monday".to_string());
    ann.time_block = Some("07:00 - 13:00".to_string());
    ann.area = Some(Area::Foh);
    setup.uploaded_schedules = Some(vec![ann]);

    let day = setup.day_schedule_entry("monday");
    let mut block = TimeBlock::new("b1", "08:00", "12:00");
    block
        .positions
        .push(Position::new("p1", "Register 1", "Front Counter"));
    day.time_blocks.push(block);
    setup
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let store = Arc::new(MemoryStore::new());
    store.insert(seed());

    let mut session = ScheduleSession::open(Arc::clone(&store), "demo-week").await?;
    session.set_active_day("monday")?;

    let date = session
        .setup()
        .date_for_day("monday")
        .map(|d| d.to_string())
        .unwrap_or_default();
    println!("Editing monday ({})", date);

    println!("Unassigned before edits:");
    for employee in session.unassigned_employees() {
        let area = employee.area.map(|a| a.as_str()).unwrap_or("?");
        let on_shift = if is_on_current_shift(&employee) {
            "on shift"
        } else {
            "off shift"
        };
        println!("  {} [{}] ({})", employee.name, area, on_shift);
    }

    session.assign("p1", "e1", "Ann").await?;
    println!("Assigned Ann to Register 1");

    session
        .add_employee(&AddEmployeeRequest {
            name: "Bob".to_string(),
            area: Some(Area::Boh),
            start: "09:00".to_string(),
            end: "17:00".to_string(),
        })
        .await?;
    session
        .add_position(&AddPositionRequest {
            time_block_id: "b1".to_string(),
            name: "Grill 1".to_string(),
            category: "Kitchen".to_string(),
            block_start: None,
            block_end: None,
        })
        .await?;
    println!("Added Bob and an ad-hoc Grill 1 position");

    session.start_break("e1", 30)?;
    println!(
        "Ann on break, {} minutes remaining",
        session.breaks().remaining_minutes("e1")
    );
    session.end_break("e1");

    let persisted = store.fetch("demo-week").await?;
    let monday = persisted.day_schedule("monday").expect("monday exists");
    println!("Persisted positions on monday:");
    for block in &monday.time_blocks {
        let label = format!(
            "{} - {}",
            format_time_12h(&block.start),
            format_time_12h(&block.end)
        );
        for position in &block.positions {
            let holder = position
                .assignment()
                .map(|(_, name)| name.to_string())
                .unwrap_or_else(|| "<open>".to_string());
            println!("  [{}] {} -> {}", label, position.name, holder);
        }
    }
    Ok(())
}
