use chrono::{NaiveDateTime, NaiveTime, TimeDelta};

/// Time left until the next daily release at `release` (UTC wall clock).
/// Once today's release has passed the countdown targets tomorrow's.
pub fn until_release(now: NaiveDateTime, release: NaiveTime) -> TimeDelta {
    let todays = now.date().and_time(release);
    let target = if now > todays {
        todays + TimeDelta::days(1)
    } else {
        todays
    };
    target - now
}

/// `HH:MM:SS`, truncated to whole seconds.
pub fn format_remaining(remaining: TimeDelta) -> String {
    let seconds = remaining.num_seconds().max(0);
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        seconds % 3600 / 60,
        seconds % 60
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32, ms: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_milli_opt(h, m, s, ms)
            .unwrap()
    }

    fn release() -> NaiveTime {
        NaiveTime::from_hms_opt(16, 0, 0).unwrap()
    }

    #[test]
    fn counts_down_to_todays_release() {
        assert_eq!(format_remaining(until_release(at(15, 59, 59, 0), release())), "00:00:01");
        assert_eq!(format_remaining(until_release(at(8, 0, 0, 0), release())), "08:00:00");
    }

    #[test]
    fn rolls_over_to_tomorrow_after_release() {
        assert_eq!(format_remaining(until_release(at(16, 0, 1, 0), release())), "23:59:59");
        assert_eq!(format_remaining(until_release(at(23, 30, 0, 0), release())), "16:30:00");
    }

    #[test]
    fn release_instant_reads_zero() {
        assert_eq!(format_remaining(until_release(at(16, 0, 0, 0), release())), "00:00:00");
    }

    #[test]
    fn partial_seconds_are_truncated() {
        assert_eq!(format_remaining(until_release(at(15, 59, 58, 250), release())), "00:00:01");
    }
}
