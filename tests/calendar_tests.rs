use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rbilllog::core::calculator::month::{budget_status, month_key_of, summarize_by_month};
use rbilllog::core::calculator::week::{group_by_work_week, monday_of, sunday_of, week_bounds};
use rbilllog::errors::AppError;
use rbilllog::models::budget::{BudgetStatus, MonthlyBudget};
use rbilllog::models::day::DayRecord;
use rbilllog::models::totals::TotalsResult;

mod common;
use common::approx;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn day(id: i64, date: &str, minutes: i64, grand_total: f64) -> DayRecord {
    DayRecord {
        id,
        date: d(date),
        created_at: "2026-02-01T00:00:00+00:00".to_string(),
        totals: TotalsResult {
            total_minutes: minutes,
            total_hours: (minutes + 59) / 60,
            amount_with_bbi: grand_total * 0.9,
            amount_without_bbi: grand_total * 0.8,
            loading_amount: grand_total * 0.1,
            grand_total,
        },
    }
}

#[test]
fn test_monday_of_wednesday() {
    assert_eq!(monday_of(d("2026-02-11")), d("2026-02-09"));
    assert_eq!(sunday_of(d("2026-02-09")).unwrap(), d("2026-02-15"));
}

#[test]
fn test_monday_of_sunday_goes_back_six_days() {
    assert_eq!(monday_of(d("2026-02-15")), d("2026-02-09"));
    assert_eq!(monday_of(d("2026-02-09")), d("2026-02-09"));
    // across a month and a year boundary
    assert_eq!(monday_of(d("2026-01-01")), d("2025-12-29"));
}

#[test]
fn test_monday_of_is_stable_for_every_day_of_a_year() {
    let mut date = d("2026-01-01");
    while date.year() == 2026 {
        let monday = monday_of(date);
        assert_eq!(monday.weekday(), Weekday::Mon);
        assert_eq!(monday_of(monday), monday);
        assert!(monday <= date && date - monday < Duration::days(7));
        assert_eq!(sunday_of(monday).unwrap(), monday + Duration::days(6));
        assert_eq!(week_bounds(date), (monday, monday + Duration::days(6)));
        date = date.succ_opt().unwrap();
    }
}

#[test]
fn test_sunday_of_rejects_non_monday() {
    let err = sunday_of(d("2026-02-11")).unwrap_err();
    assert!(matches!(err, AppError::NotAMonday(ref s) if s == "2026-02-11"));
}

#[test]
fn test_days_in_same_week_group_together() {
    let a = day(1, "2026-02-09", 30, 100.0);
    let b = day(2, "2026-02-13", 45, 50.5);

    let weeks = group_by_work_week(&[b.clone(), a.clone()]);

    assert_eq!(weeks.len(), 1);
    let w = &weeks[0];
    assert_eq!(w.monday, d("2026-02-09"));
    assert_eq!(w.sunday, d("2026-02-15"));
    assert_eq!(w.label(), "2026-02-09 to 2026-02-15");
    assert_eq!(w.days, vec![a.clone(), b.clone()]);
    assert_eq!(w.totals, a.totals + b.totals);
    assert_eq!(w.totals.total_minutes, 75);
    assert!(approx(w.totals.grand_total, 150.5));
}

#[test]
fn test_weeks_are_most_recent_first() {
    let days = vec![
        day(1, "2026-01-05", 10, 10.0),
        day(2, "2026-02-15", 10, 20.0), // Sunday → week of 02-09
        day(3, "2026-02-16", 10, 30.0),
        day(4, "2026-02-09", 10, 40.0),
    ];

    let weeks = group_by_work_week(&days);
    let mondays: Vec<NaiveDate> = weeks.iter().map(|w| w.monday).collect();
    assert_eq!(
        mondays,
        vec![d("2026-02-16"), d("2026-02-09"), d("2026-01-05")]
    );

    let feb9: Vec<i64> = weeks[1].days.iter().map(|x| x.id).collect();
    assert_eq!(feb9, vec![4, 2]);
}

#[test]
fn test_grouping_conserves_grand_total() {
    let days: Vec<DayRecord> = (0..40)
        .map(|i| {
            let date = d("2026-01-01") + Duration::days(i * 3);
            day(i, &date.format("%Y-%m-%d").to_string(), i * 7, 12.34 * i as f64)
        })
        .collect();

    let weeks = group_by_work_week(&days);
    let by_weeks: f64 = weeks.iter().map(|w| w.totals.grand_total).sum();
    let by_days: f64 = days.iter().map(|x| x.totals.grand_total).sum();
    assert!((by_weeks - by_days).abs() < 1e-6);

    let count: usize = weeks.iter().map(|w| w.days.len()).sum();
    assert_eq!(count, days.len());
}

#[test]
fn test_empty_input_gives_no_weeks() {
    assert!(group_by_work_week(&[]).is_empty());
}

#[test]
fn test_month_key() {
    assert_eq!(month_key_of(d("2026-02-09")), "2026-02");
    assert_eq!(month_key_of(d("2025-12-31")), "2025-12");
}

#[test]
fn test_budget_status_epsilon() {
    assert_eq!(budget_status(100.0, 100.0), BudgetStatus::OnBudget);
    assert_eq!(budget_status(100.005, 100.0), BudgetStatus::OnBudget);
    assert!(matches!(budget_status(100.5, 100.0), BudgetStatus::Over(x) if approx(x, 0.5)));
    assert!(matches!(budget_status(90.0, 100.0), BudgetStatus::Under(x) if approx(x, 10.0)));
}

#[test]
fn test_month_summaries_join_budgets() {
    let days = vec![
        day(1, "2026-01-20", 10, 100.0),
        day(2, "2026-02-09", 10, 200.0),
        day(3, "2026-02-13", 10, 300.0),
    ];
    let budgets = vec![MonthlyBudget {
        month: "2026-02".to_string(),
        budget_amount: 450.0,
    }];

    let months = summarize_by_month(&days, &budgets);
    assert_eq!(months.len(), 2);

    assert_eq!(months[0].month, "2026-02");
    assert_eq!(months[0].day_count, 2);
    assert!(approx(months[0].totals.grand_total, 500.0));
    assert_eq!(months[0].budget, Some(450.0));
    assert!(matches!(months[0].status, Some(BudgetStatus::Over(x)) if approx(x, 50.0)));

    assert_eq!(months[1].month, "2026-01");
    assert_eq!(months[1].budget, None);
    assert_eq!(months[1].status, None);
}
