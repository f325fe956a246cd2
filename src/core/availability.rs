use std::cmp::Ordering;

use chrono::Datelike;

use crate::models::{Availability, ShowHost, ShowSchedule};

impl Availability {
    /// Sort rank, lower is better
    #[inline]
    pub fn rank(self) -> u8 {
        match self {
            Availability::Available => 0,
            Availability::Limited => 1,
            Availability::Busy => 2,
        }
    }
}

impl PartialOrd for Availability {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// available > limited > busy
impl Ord for Availability {
    fn cmp(&self, other: &Self) -> Ordering {
        other.rank().cmp(&self.rank())
    }
}

/// Classify a host against a requested show slot
///
/// 1. Blocked date → busy
/// 2. Weekly capacity reached → busy
/// 3. Preferred weekday and preferred hour → available
/// 4. Anything else → limited
pub fn check_availability(host: &ShowHost, schedule: &ShowSchedule) -> Availability {
    let availability = &host.availability;

    if availability.blocked_dates.contains(&schedule.date) {
        return Availability::Busy;
    }

    if availability.current_bookings >= availability.max_shows_per_week {
        return Availability::Busy;
    }

    let weekday = schedule.date.weekday().number_from_monday() as u8;
    let day_preferred = availability.preferred_days.contains(&weekday);
    let hour_preferred = schedule
        .hour()
        .is_some_and(|hour| availability.preferred_hours.contains(&hour));

    if day_preferred && hour_preferred {
        Availability::Available
    } else {
        Availability::Limited
    }
}
