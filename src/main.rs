use std::sync::Arc;

use chrono::NaiveDate;
use tracing_subscriber::{EnvFilter, fmt};

use schedule_sync::adapters::in_memory::in_memory_attendance_source::InMemoryAttendanceSource;
use schedule_sync::adapters::in_memory::in_memory_directory_source::InMemoryDirectorySource;
use schedule_sync::adapters::in_memory::in_memory_schedule_store::InMemoryScheduleStore;
use schedule_sync::application::orchestrator::EtlOrchestrator;
use schedule_sync::core::attendance::{AttendanceEvent, EmployeeIdentity};
use schedule_sync::shell::config::EtlConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let config = EtlConfig::from_env();

    // In-memory deps seeded with sample data for now; real deployments plug
    // their own adapters into the same ports.
    let attendance = Arc::new(InMemoryAttendanceSource::new(sample_attendance()));
    let directory = Arc::new(InMemoryDirectorySource::new(sample_directory()));
    let schedule = Arc::new(InMemoryScheduleStore::new());

    let orchestrator = EtlOrchestrator::new(
        attendance,
        directory,
        schedule.clone(),
        config.stage_timeout,
    );
    let report = orchestrator.run().await;

    println!("{}", serde_json::to_string_pretty(&report)?);
    for row in schedule.snapshot().await {
        println!("{}", serde_json::to_string(&row)?);
    }
    Ok(())
}

fn sample_attendance() -> Vec<AttendanceEvent> {
    let event = |name: &str, date: (i32, u32, u32), hours: f64| AttendanceEvent {
        employee_external_id: 1000,
        employee_name: name.to_string(),
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).expect("valid sample date"),
        hours_worked: hours,
    };
    vec![
        event("John Doe", (2024, 3, 6), 8.5),
        event("John Doe", (2024, 3, 8), 4.0),
        event("Jane Roe", (2024, 3, 6), 7.75),
        event("Unknown Visitor", (2024, 3, 7), 6.0),
    ]
}

fn sample_directory() -> Vec<EmployeeIdentity> {
    vec![
        EmployeeIdentity {
            id: 7,
            display_name: "john doe".to_string(),
        },
        EmployeeIdentity {
            id: 8,
            display_name: "Jane Roe".to_string(),
        },
    ]
}
