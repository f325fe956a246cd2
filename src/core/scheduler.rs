use chrono::Datelike;

use crate::models::{ScheduleConstraints, ShowHost, ShowSlot};

/// Highest-viewership hours for live commerce
pub const PEAK_HOURS: [u8; 6] = [12, 13, 19, 20, 21, 22];

/// Number of slots returned
pub const MAX_SLOTS: usize = 10;

/// Longest window searched, in days. Longer windows are rejected at the
/// HTTP boundary; direct callers get the first `MAX_SEARCH_DAYS` dates.
pub const MAX_SEARCH_DAYS: usize = 366;

/// Rank candidate show slots for a host within a date window
///
/// Every non-blocked date in `[start_date, end_date]` is paired with each of
/// the host's preferred hours. A slot scores 0.5, plus 0.2 on a preferred
/// weekday, plus 0.2 on a preferred hour, plus 0.1 for a peak hour when
/// `prefer_peak_hours` is set. Equal scores keep chronological order.
pub fn find_optimal_show_time(host: &ShowHost, constraints: &ScheduleConstraints) -> Vec<ShowSlot> {
    let availability = &host.availability;

    let mut hours = availability.preferred_hours.clone();
    hours.sort_unstable();
    hours.dedup();

    if hours.is_empty() || constraints.end_date < constraints.start_date {
        return Vec::new();
    }

    let mut slots: Vec<ShowSlot> = constraints
        .start_date
        .iter_days()
        .take_while(|date| *date <= constraints.end_date)
        .take(MAX_SEARCH_DAYS)
        .filter(|date| !availability.blocked_dates.contains(date))
        .flat_map(|date| {
            let weekday = date.weekday().number_from_monday() as u8;
            let day_preferred = availability.preferred_days.contains(&weekday);

            hours.iter().map(move |&hour| {
                let mut score = 0.5;
                if day_preferred {
                    score += 0.2;
                }
                if availability.preferred_hours.contains(&hour) {
                    score += 0.2;
                }
                if constraints.prefer_peak_hours && PEAK_HOURS.contains(&hour) {
                    score += 0.1;
                }

                ShowSlot {
                    date,
                    start_time: format!("{:02}:00", hour),
                    score: round_slot_score(score),
                }
            })
        })
        .collect();

    slots.sort_by(|a, b| b.score.total_cmp(&a.score));
    slots.truncate(MAX_SLOTS);
    slots
}

#[inline]
fn round_slot_score(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}
