//! Pure cron occurrence projection.

use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;
use cron::Schedule;

use jobdeck_types::{CalendarOccurrence, ScheduleDefinition, Timestamp};

use crate::error::{Result, ScheduleError};

/// How long a projected occurrence spans on the calendar.
pub const OCCURRENCE_MINUTES: i64 = 30;

/// Parse a cron expression.
///
/// User-facing expressions are classic 5-field cron; the `cron` crate wants
/// a leading seconds field, so one is prepended before parsing.
pub fn parse_cron(expression: &str) -> Result<Schedule> {
    let trimmed = expression.trim();
    let normalized = if trimmed.split_whitespace().count() == 5 {
        format!("0 {trimmed}")
    } else {
        trimmed.to_string()
    };
    Schedule::from_str(&normalized).map_err(|e| ScheduleError::InvalidCron {
        expression: expression.to_string(),
        message: e.to_string(),
    })
}

/// Resolve an IANA timezone name.
pub fn parse_timezone(timezone: &str) -> Result<Tz> {
    Tz::from_str(timezone).map_err(|_| ScheduleError::InvalidTimezone(timezone.to_string()))
}

/// Next firing of a definition strictly after `after`, in UTC.
///
/// `None` when the expression never fires again (or the definition is
/// disabled).
pub fn next_run_at(
    definition: &ScheduleDefinition,
    after: DateTime<Utc>,
) -> Result<Option<DateTime<Utc>>> {
    if !definition.enabled {
        return Ok(None);
    }
    let tz = parse_timezone(&definition.timezone)?;
    let schedule = parse_cron(&definition.cron_expression)?;
    Ok(schedule
        .after(&after.with_timezone(&tz))
        .next()
        .map(|dt| dt.with_timezone(&Utc)))
}

/// Project the concrete occurrences of the given definitions onto the
/// window `[start, end)`.
///
/// Pure and side-effect-free: the result depends only on the definitions
/// and the window, so repeated calls are identical. Disabled definitions
/// contribute nothing. Output is sorted by start instant, then schedule id,
/// for a deterministic order across definitions firing at the same time.
pub fn project_occurrences(
    definitions: &[ScheduleDefinition],
    start: Timestamp,
    end: Timestamp,
) -> Result<Vec<CalendarOccurrence>> {
    let mut occurrences = Vec::new();

    for definition in definitions.iter().filter(|d| d.enabled) {
        let tz = parse_timezone(&definition.timezone)?;
        let schedule = parse_cron(&definition.cron_expression)?;

        // `after` is exclusive; back up one second so a firing exactly on
        // `start` is included, then re-check against the real bound (the
        // back-off alone would admit firings inside the final sub-second).
        let from = (start - Duration::seconds(1)).with_timezone(&tz);
        for fire_time in schedule.after(&from) {
            let starts_at = fire_time.with_timezone(&Utc);
            if starts_at < start {
                continue;
            }
            if starts_at >= end {
                break;
            }
            occurrences.push(CalendarOccurrence {
                schedule_id: definition.id.clone(),
                name: definition.name.clone(),
                description: definition.description.clone(),
                color: definition.color.clone(),
                starts_at,
                ends_at: starts_at + Duration::minutes(OCCURRENCE_MINUTES),
            });
        }
    }

    occurrences.sort_by(|a, b| {
        a.starts_at
            .cmp(&b.starts_at)
            .then_with(|| a.schedule_id.cmp(&b.schedule_id))
    });
    Ok(occurrences)
}
