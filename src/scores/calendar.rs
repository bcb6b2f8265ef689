//! Month-based tournament calendar used to steer the search prompt

use chrono::{Datelike, NaiveDate};

/// Tournaments expected to be running during a calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthSchedule {
    /// Same tournaments for the whole month.
    Fixed(&'static str),
    /// Tournaments change within the month. Each window is `(last_day, tournaments)`
    /// in ascending order; days past the last window use `rest`.
    Split {
        windows: &'static [(u32, &'static str)],
        rest: &'static str,
    },
}

impl MonthSchedule {
    /// Returns the tournaments for a day of this month.
    pub fn tournaments_on(&self, day: u32) -> &'static str {
        match self {
            MonthSchedule::Fixed(tournaments) => *tournaments,
            MonthSchedule::Split { windows, rest } => windows
                .iter()
                .find(|(last_day, _)| day <= *last_day)
                .map(|(_, tournaments)| *tournaments)
                .unwrap_or(*rest),
        }
    }
}

/// One entry per month, January first.
pub static TENNIS_CALENDAR: [MonthSchedule; 12] = [
    MonthSchedule::Split {
        windows: &[
            (
                11,
                "United Cup, ATP Hong Kong Open, ASB Classic Auckland, Brisbane International",
            ),
            (17, "Adelaide International, ASB Classic Auckland ATP"),
        ],
        rest: "Australian Open",
    },
    MonthSchedule::Fixed("Australian Open (if early Feb), Rotterdam, Dubai, Doha"),
    MonthSchedule::Fixed("Indian Wells Masters, Miami Open"),
    MonthSchedule::Fixed("Monte Carlo Masters, Barcelona Open"),
    MonthSchedule::Fixed("Madrid Masters, Rome Masters, French Open"),
    MonthSchedule::Fixed("French Open, Queens Club, Halle, Wimbledon"),
    MonthSchedule::Fixed("Wimbledon, Hamburg, Washington"),
    MonthSchedule::Fixed("Montreal/Toronto Masters, Cincinnati Masters, US Open"),
    MonthSchedule::Fixed("US Open, Laver Cup"),
    MonthSchedule::Fixed("Shanghai Masters, Vienna, Paris Masters"),
    MonthSchedule::Fixed("ATP Finals Turin, WTA Finals, Davis Cup Finals"),
    MonthSchedule::Fixed("Off-season exhibitions"),
];

/// Returns the schedule entry for `date`'s month.
pub fn schedule_for(date: NaiveDate) -> &'static MonthSchedule {
    // month0() is always 0..=11
    &TENNIS_CALENDAR[date.month0() as usize]
}

/// Returns the comma-separated tournament hint for `date`.
pub fn active_tournaments(date: NaiveDate) -> &'static str {
    schedule_for(date).tournaments_on(date.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_january_windows() {
        assert_eq!(
            active_tournaments(date(2026, 1, 1)),
            "United Cup, ATP Hong Kong Open, ASB Classic Auckland, Brisbane International"
        );
        assert_eq!(
            active_tournaments(date(2026, 1, 11)),
            "United Cup, ATP Hong Kong Open, ASB Classic Auckland, Brisbane International"
        );
        assert_eq!(
            active_tournaments(date(2026, 1, 12)),
            "Adelaide International, ASB Classic Auckland ATP"
        );
        assert_eq!(
            active_tournaments(date(2026, 1, 17)),
            "Adelaide International, ASB Classic Auckland ATP"
        );
        assert_eq!(active_tournaments(date(2026, 1, 18)), "Australian Open");
        assert_eq!(active_tournaments(date(2026, 1, 31)), "Australian Open");
    }

    #[test]
    fn test_fixed_schedule_ignores_day() {
        let schedule = MonthSchedule::Fixed("Laver Cup");
        assert_eq!(schedule.tournaments_on(1), "Laver Cup");
        assert_eq!(schedule.tournaments_on(31), "Laver Cup");
    }

    #[test]
    fn test_only_january_is_split() {
        for (index, schedule) in TENNIS_CALENDAR.iter().enumerate() {
            let is_split = matches!(schedule, MonthSchedule::Split { .. });
            assert_eq!(is_split, index == 0, "month {}", index + 1);
        }
    }

    #[test]
    fn test_leap_day_uses_february() {
        assert_eq!(
            active_tournaments(date(2028, 2, 29)),
            "Australian Open (if early Feb), Rotterdam, Dubai, Doha"
        );
    }
}
