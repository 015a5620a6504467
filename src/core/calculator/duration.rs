//! Net worked duration of a shift, meal breaks excluded.

use crate::utils::time::minutes_between;
use chrono::NaiveTime;

/// Net worked hours between clock-in and clock-out, minus the lunch break and
/// the optional dinner break.
///
/// All times belong to the same calendar day. The dinner block counts only
/// when both `dinner_start` and `dinner_end` are given; a lone half is ignored.
///
/// Validity is checked on ordering only:
/// - without dinner: `start <= lunch_start <= lunch_end <= end`
/// - with dinner: `start <= lunch_start <= lunch_end <= dinner_start <= dinner_end <= end`
///
/// Any violation returns exactly `0.0`. Callers must treat a result `<= 0` as
/// invalid input and refuse to persist the shift. The value is not rounded.
pub fn net_duration(
    start: NaiveTime,
    lunch_start: NaiveTime,
    lunch_end: NaiveTime,
    dinner_start: Option<NaiveTime>,
    dinner_end: Option<NaiveTime>,
    end: NaiveTime,
) -> f64 {
    if lunch_start < start || lunch_end < lunch_start {
        return 0.0;
    }

    // Morning block
    let mut minutes = minutes_between(start, lunch_start);

    match (dinner_start, dinner_end) {
        (Some(ds), Some(de)) => {
            if ds < lunch_end || de < ds || end < de {
                return 0.0;
            }
            minutes += minutes_between(lunch_end, ds);
            minutes += minutes_between(de, end);
        }
        _ => {
            if end < lunch_end {
                return 0.0;
            }
            minutes += minutes_between(lunch_end, end);
        }
    }

    minutes as f64 / 60.0
}
