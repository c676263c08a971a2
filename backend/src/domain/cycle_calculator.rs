//! Menstrual cycle predictions.
//!
//! All predictions are derived from the stored [`CycleRecord`] and an explicit
//! `today`; nothing is cached between calls. The luteal phase is fixed at 14
//! days, so ovulation always falls `cycle_length - 14` days after the last
//! period started.

use chrono::NaiveDate;
use shared::{Countdown, CyclePhase};

use crate::domain::dates::{add_days, countdown, days_between};
use crate::domain::models::CycleRecord;

/// Days from ovulation to the next period
pub const LUTEAL_PHASE_DAYS: i64 = 14;

const FERTILE_DAYS_BEFORE_OVULATION: i64 = 5;
const FERTILE_DAYS_AFTER_OVULATION: i64 = 1;

// Absolute day numbers, independent of the cycle length
const FOLLICULAR_LAST_DAY: u32 = 13;
const OVULATORY_LAST_DAY: u32 = 16;

/// Inclusive range of days with the highest chance of conception
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FertileWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Everything the cycle overview shows for a given day
#[derive(Debug, Clone, PartialEq)]
pub struct CyclePrediction {
    pub day_in_cycle: u32,
    pub current_phase: CyclePhase,
    pub ovulation_date: NaiveDate,
    pub ovulation_countdown: Countdown,
    pub fertile_window: FertileWindow,
    pub next_period_date: NaiveDate,
    pub next_period_countdown: Countdown,
}

pub fn ovulation_date(record: &CycleRecord) -> NaiveDate {
    add_days(
        record.last_period_date,
        record.cycle_length as i64 - LUTEAL_PHASE_DAYS,
    )
}

pub fn fertile_window(record: &CycleRecord) -> FertileWindow {
    let ovulation = ovulation_date(record);
    FertileWindow {
        start: add_days(ovulation, -FERTILE_DAYS_BEFORE_OVULATION),
        end: add_days(ovulation, FERTILE_DAYS_AFTER_OVULATION),
    }
}

pub fn next_period_date(record: &CycleRecord) -> NaiveDate {
    add_days(record.last_period_date, record.cycle_length as i64)
}

/// Position of `today` within the repeating cycle, starting at 0 on the first
/// day of each period
pub fn day_in_cycle(record: &CycleRecord, today: NaiveDate) -> u32 {
    let elapsed = days_between(record.last_period_date, today);
    (elapsed % record.cycle_length.max(1) as i64) as u32
}

/// Phase for `today`.
///
/// The follicular and ovulatory cut-offs are fixed day numbers, so for long
/// cycles the predicted ovulation date can fall inside what this reports as
/// the luteal phase.
pub fn current_phase(record: &CycleRecord, today: NaiveDate) -> CyclePhase {
    let day = day_in_cycle(record, today);
    if day <= record.period_length {
        CyclePhase::Menstrual
    } else if day <= FOLLICULAR_LAST_DAY {
        CyclePhase::Follicular
    } else if day <= OVULATORY_LAST_DAY {
        CyclePhase::Ovulatory
    } else {
        CyclePhase::Luteal
    }
}

pub fn predict(record: &CycleRecord, today: NaiveDate) -> CyclePrediction {
    let ovulation = ovulation_date(record);
    let next_period = next_period_date(record);
    CyclePrediction {
        day_in_cycle: day_in_cycle(record, today),
        current_phase: current_phase(record, today),
        ovulation_date: ovulation,
        ovulation_countdown: countdown(today, ovulation),
        fertile_window: fertile_window(record),
        next_period_date: next_period,
        next_period_countdown: countdown(today, next_period),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::cycle::{MAX_CYCLE_LENGTH, MIN_CYCLE_LENGTH};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(cycle_length: u32, period_length: u32) -> CycleRecord {
        CycleRecord::new(date(2024, 1, 1), cycle_length, period_length).unwrap()
    }

    #[test]
    fn test_standard_cycle_predictions() {
        let record = record(28, 5);

        assert_eq!(ovulation_date(&record), date(2024, 1, 15));
        assert_eq!(
            fertile_window(&record),
            FertileWindow {
                start: date(2024, 1, 10),
                end: date(2024, 1, 16),
            }
        );
        assert_eq!(next_period_date(&record), date(2024, 1, 29));
    }

    #[test]
    fn test_ovulation_offset_for_every_cycle_length() {
        for cycle_length in MIN_CYCLE_LENGTH..=MAX_CYCLE_LENGTH {
            let record = record(cycle_length, 5);
            let ovulation = ovulation_date(&record);
            assert_eq!(
                (ovulation - record.last_period_date).num_days(),
                cycle_length as i64 - 14
            );

            let window = fertile_window(&record);
            assert_eq!((window.end - window.start).num_days(), 6);
            assert!(window.start < ovulation && ovulation < window.end);
        }
    }

    #[test]
    fn test_phase_boundaries() {
        let record = record(28, 5);
        let phase_on = |day: i64| current_phase(&record, add_days(date(2024, 1, 1), day));

        assert_eq!(phase_on(0), CyclePhase::Menstrual);
        assert_eq!(phase_on(5), CyclePhase::Menstrual);
        assert_eq!(phase_on(6), CyclePhase::Follicular);
        assert_eq!(phase_on(13), CyclePhase::Follicular);
        assert_eq!(phase_on(14), CyclePhase::Ovulatory);
        assert_eq!(phase_on(16), CyclePhase::Ovulatory);
        assert_eq!(phase_on(17), CyclePhase::Luteal);
        assert_eq!(phase_on(27), CyclePhase::Luteal);
        // Wraps into the next cycle
        assert_eq!(phase_on(28), CyclePhase::Menstrual);
        assert_eq!(phase_on(34), CyclePhase::Follicular);
    }

    #[test]
    fn test_predictions_near_date_range_limit() {
        let record = CycleRecord::new(add_days(NaiveDate::MAX, -3), 35, 5).unwrap();
        let prediction = predict(&record, date(2024, 1, 1));

        assert_eq!(prediction.ovulation_date, NaiveDate::MAX);
        assert_eq!(prediction.next_period_date, NaiveDate::MAX);
        assert_eq!(prediction.fertile_window.end, NaiveDate::MAX);
        assert!(matches!(prediction.ovulation_countdown, Countdown::Remaining { .. }));
    }

    #[test]
    fn test_long_cycle_ovulation_reported_as_luteal() {
        let record = record(35, 5);
        let ovulation = ovulation_date(&record);
        assert_eq!(day_in_cycle(&record, ovulation), 21);
        assert_eq!(current_phase(&record, ovulation), CyclePhase::Luteal);
    }

    #[test]
    fn test_day_in_cycle_before_last_period_uses_distance() {
        let record = record(28, 5);
        assert_eq!(day_in_cycle(&record, date(2023, 12, 29)), 3);
    }

    #[test]
    fn test_predict_countdowns() {
        let record = record(28, 5);

        let early = predict(&record, date(2024, 1, 3));
        assert_eq!(early.day_in_cycle, 2);
        assert_eq!(early.ovulation_countdown, Countdown::Remaining { days: 12 });
        assert_eq!(early.next_period_countdown, Countdown::Remaining { days: 26 });

        let on_ovulation = predict(&record, date(2024, 1, 15));
        assert_eq!(on_ovulation.ovulation_countdown, Countdown::Passed);
        assert_eq!(on_ovulation.current_phase, CyclePhase::Ovulatory);

        let late = predict(&record, date(2024, 2, 10));
        assert_eq!(late.ovulation_countdown, Countdown::Passed);
        assert_eq!(late.next_period_countdown, Countdown::Passed);
    }
}
