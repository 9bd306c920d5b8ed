//! Full-flow test: mark attendance through the daily code, maintain the
//! holiday calendar, run a leave request through its lifecycle, then
//! reconcile the month and check the report against the store contents.

use chrono::{Local, NaiveDate, TimeZone};
use rollcall::clock::FixedClock;
use rollcall::model::holiday::HolidayCategory;
use rollcall::model::leave_request::{LeaveKind, LeaveStatus};
use rollcall::model::report::{DayStatus, MonthlyLeaveCount, MonthlyReport};
use rollcall::model::role::Role;
use rollcall::model::user::User;
use rollcall::service::attendance::AttendanceService;
use rollcall::service::holiday::HolidayService;
use rollcall::service::leave::LeaveService;
use rollcall::service::reconciliation::ReconciliationService;
use rollcall::store::memory::MemoryStore;

fn clock_at(y: i32, m: u32, d: u32) -> FixedClock {
    FixedClock(Local.with_ymd_and_hms(y, m, d, 9, 0, 0).unwrap())
}

fn feb(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, day).unwrap()
}

#[tokio::test]
async fn month_end_report_reflects_the_whole_flow() {
    let store = MemoryStore::new();
    store
        .add_user(User {
            id: 1,
            username: "ayesha".into(),
            email: "ayesha@example.com".into(),
            role: Role::User,
        })
        .unwrap();

    // during February: attendance, holidays, a leave request
    let during = clock_at(2024, 2, 1);
    let attendance = AttendanceService::new(store.clone(), store.clone(), during);
    let holidays = HolidayService::new(store.clone());
    let leaves = LeaveService::new(store.clone(), during);

    store.set_code(feb(5), "7301").unwrap();
    store.set_code(feb(6), "9944").unwrap();
    attendance.mark(1, "2024-02-05", "7301").await.unwrap();
    attendance.mark(1, "2024-02-06", "9944").await.unwrap();

    // 2024-02-21 is a Wednesday
    holidays
        .add("2024-02-21", "International Mother Language Day", HolidayCategory::Government)
        .await
        .unwrap();

    let sat_leave = leaves.apply(1, "2024-02-10", LeaveKind::FullDay, None).await.unwrap();
    leaves.decide(sat_leave.id, LeaveStatus::Approved).await.unwrap();
    let dropped = leaves.apply(1, "2024-02-12", LeaveKind::HalfDay, None).await.unwrap();
    leaves.cancel(1, dropped.id).await.unwrap();

    // after the month closed: reconcile
    let after = clock_at(2024, 3, 4);
    let reconciliation =
        ReconciliationService::new(store.clone(), store.clone(), store.clone(), store.clone(), after);

    let report = reconciliation.reconcile(1, 2024, 2).await.unwrap();
    let summary = report.summary().expect("February is in the past");

    assert_eq!(summary.days.len(), 29);

    let status_on = |day: u32| {
        summary.days.iter().find(|r| r.date == feb(day)).map(|r| r.status).unwrap()
    };
    assert_eq!(status_on(5), DayStatus::Present);
    assert_eq!(status_on(6), DayStatus::Present);
    assert_eq!(status_on(21), DayStatus::Holiday);
    assert_eq!(status_on(10), DayStatus::LeaveFull);
    assert_eq!(status_on(12), DayStatus::Absent); // canceled leave has no effect
    assert_eq!(status_on(4), DayStatus::RestDay);

    // 4 Sundays + 1 holiday + 2 punches + 1 approved leave
    assert_eq!(summary.total_holidays, 1);
    assert_eq!(summary.total_present, 8);
    assert_eq!(summary.total_absent, 20);
    assert_eq!(
        summary.total_present + summary.total_absent + summary.total_holidays,
        29
    );

    assert_eq!(summary.leave_summary.approved, 1);
    assert_eq!(summary.leave_summary.approved_full_day, 1);
    assert_eq!(summary.leave_summary.approved_in_month, MonthlyLeaveCount::Taken(1));

    // April has not happened yet (March is the current month and computes)
    let april = reconciliation.reconcile(1, 2024, 4).await.unwrap();
    assert!(matches!(april, MonthlyReport::NotYetAvailable { month: 4, .. }));
    assert!(reconciliation.reconcile(1, 2024, 3).await.unwrap().is_ready());

    // the wire shape keeps presence timestamps only on present days
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["availability"], "ready");
    let days = json["days"].as_array().unwrap();
    assert!(days.iter().any(|d| d["status"] == "present" && d.get("present_at").is_some()));
    assert!(days.iter().filter(|d| d["status"] == "absent").all(|d| d.get("present_at").is_none()));
}
