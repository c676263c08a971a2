//! Gestational progress derived from a [`PregnancyRecord`].

use chrono::NaiveDate;
use shared::{Countdown, WeekInfo};

use crate::domain::dates::{countdown, days_until, weeks_between};
use crate::domain::models::pregnancy::FULL_TERM_WEEKS;
use crate::domain::models::PregnancyRecord;
use crate::domain::reference::nearest_week_info;

const FIRST_TRIMESTER_LAST_WEEK: u32 = 13;
const SECOND_TRIMESTER_LAST_WEEK: u32 = 27;

#[derive(Debug, Clone, PartialEq)]
pub struct PregnancyProgress {
    pub current_week: u32,
    pub trimester: u8,
    pub progress_percent: f64,
    pub days_until_due: u32,
    pub due_countdown: Countdown,
    pub week_info: &'static WeekInfo,
}

/// Completed weeks since the last menstrual period, clamped to `[0, 40]`
pub fn current_week(record: &PregnancyRecord, today: NaiveDate) -> u32 {
    weeks_between(record.last_period_date, today).clamp(0, FULL_TERM_WEEKS as i64) as u32
}

/// Days left until the due date; 0 once it has been reached
pub fn days_until_due(record: &PregnancyRecord, today: NaiveDate) -> u32 {
    u32::try_from(days_until(today, record.due_date).max(0)).unwrap_or(u32::MAX)
}

pub fn trimester(week: u32) -> u8 {
    if week <= FIRST_TRIMESTER_LAST_WEEK {
        1
    } else if week <= SECOND_TRIMESTER_LAST_WEEK {
        2
    } else {
        3
    }
}

pub fn progress_percent(week: u32) -> f64 {
    week as f64 / FULL_TERM_WEEKS as f64 * 100.0
}

pub fn progress(record: &PregnancyRecord, today: NaiveDate) -> PregnancyProgress {
    let week = current_week(record, today);
    PregnancyProgress {
        current_week: week,
        trimester: trimester(week),
        progress_percent: progress_percent(week),
        days_until_due: days_until_due(record, today),
        due_countdown: countdown(today, record.due_date),
        week_info: nearest_week_info(week),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dates::add_days;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record() -> PregnancyRecord {
        PregnancyRecord::from_last_period(date(2024, 1, 1))
    }

    #[test]
    fn test_second_trimester_progress() {
        let record = record();
        assert_eq!(record.due_date, date(2024, 10, 7));

        let progress = progress(&record, date(2024, 4, 22));
        assert_eq!(progress.current_week, 16);
        assert_eq!(progress.trimester, 2);
        assert_eq!(progress.progress_percent, 40.0);
        assert_eq!(progress.days_until_due, 168);
        assert_eq!(progress.due_countdown, Countdown::Remaining { days: 168 });
        assert_eq!(progress.week_info.week, 16);
    }

    #[test]
    fn test_trimester_boundaries() {
        assert_eq!(trimester(0), 1);
        assert_eq!(trimester(13), 1);
        assert_eq!(trimester(14), 2);
        assert_eq!(trimester(27), 2);
        assert_eq!(trimester(28), 3);
        assert_eq!(trimester(40), 3);
    }

    #[test]
    fn test_current_week_is_monotonic_and_clamped() {
        let record = record();
        let mut previous = 0;
        for offset in -30..400 {
            let week = current_week(&record, add_days(record.last_period_date, offset));
            assert!(week >= previous);
            assert!(week <= 40);
            previous = week;
        }
        assert_eq!(current_week(&record, date(2023, 12, 1)), 0);
        assert_eq!(current_week(&record, date(2025, 6, 1)), 40);
    }

    #[test]
    fn test_past_due() {
        let record = record();

        let on_due = progress(&record, record.due_date);
        assert_eq!(on_due.days_until_due, 0);
        assert_eq!(on_due.due_countdown, Countdown::Passed);
        assert_eq!(on_due.progress_percent, 100.0);

        let overdue = progress(&record, date(2024, 10, 20));
        assert_eq!(overdue.days_until_due, 0);
        assert_eq!(overdue.due_countdown, Countdown::Passed);
        assert_eq!(overdue.current_week, 40);
        assert_eq!(overdue.week_info.week, 40);
    }

    #[test]
    fn test_week_info_uses_nearest_milestone() {
        let record = record();
        // Week 6 is midway between 4 and 8
        let progress = progress(&record, add_days(record.last_period_date, 6 * 7));
        assert_eq!(progress.current_week, 6);
        assert_eq!(progress.week_info.week, 4);
    }
}
