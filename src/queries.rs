use chrono::TimeZone;
use itertools::Itertools;

use crate::model::{Match, ScheduleSection};

const DAY_LABEL_FORMAT: &str = "%A, %B %-d";

/// Every match `team` plays in, in source order.
pub fn matches_for_team<'a>(matches: &'a [Match], team: &str) -> Vec<&'a Match> {
    matches.iter().filter(|m| m.involves(team)).collect()
}

/// The team's completed matches, most recent first.
pub fn completed_matches_for_team<'a>(matches: &'a [Match], team: &str) -> Vec<&'a Match> {
    matches
        .iter()
        .filter(|m| m.involves(team) && m.is_completed)
        .sorted_by(|a, b| b.date.cmp(&a.date))
        .collect()
}

/// The team's matches that have not finished yet, soonest first.
pub fn upcoming_matches_for_team<'a>(matches: &'a [Match], team: &str) -> Vec<&'a Match> {
    matches
        .iter()
        .filter(|m| m.involves(team) && !m.is_completed)
        .sorted_by_key(|m| m.date)
        .collect()
}

/// Group one section of the schedule by calendar day in `tz`.
///
/// Labels look like `Monday, January 5`. Upcoming days run soonest first and
/// completed days most recent first; matches inside a day follow the same
/// order.
pub fn group_by_day<'a, Tz>(
    matches: &'a [Match],
    section: ScheduleSection,
    tz: &Tz,
) -> Vec<(String, Vec<&'a Match>)>
where
    Tz: TimeZone,
{
    let sorted = matches
        .iter()
        .filter(|m| m.section() == section)
        .sorted_by(|a, b| match section {
            ScheduleSection::Upcoming => a.date.cmp(&b.date),
            ScheduleSection::Completed => b.date.cmp(&a.date),
        });

    let days = sorted.chunk_by(|m| m.date.with_timezone(tz).date_naive());
    let groups = days
        .into_iter()
        .map(|(day, group)| (day.format(DAY_LABEL_FORMAT).to_string(), group.collect_vec()))
        .collect();
    groups
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, FixedOffset, Utc};

    use super::*;

    fn game(id: &str, team1: &str, team2: &str, secs: i64, is_completed: bool) -> Match {
        Match {
            id: id.to_string(),
            team1_name: team1.to_string(),
            team2_name: team2.to_string(),
            team1_logo: String::new(),
            team2_logo: String::new(),
            team1_score: is_completed.then_some(3),
            team2_score: is_completed.then_some(1),
            date: DateTime::from_timestamp(secs, 0).unwrap(),
            is_completed,
            match_title: None,
        }
    }

    fn schedule() -> Vec<Match> {
        vec![
            game("1", "OpTic Texas", "Toronto KOI", 1_700_000_000, true),
            game("2", "FaZe Vegas", "OpTic Texas", 1_700_500_000, true),
            game("3", "OpTic Texas", "Boston Breach", 1_699_000_000, true),
            game("4", "Toronto KOI", "FaZe Vegas", 1_701_000_000, false),
            game("5", "OpTic Texas", "Miami Heretics", 1_702_000_000, false),
            game("6", "Cloud9 New York", "OpTic Texas", 1_701_500_000, false),
        ]
    }

    fn ids(matches: &[&Match]) -> Vec<String> {
        matches.iter().map(|m| m.id.clone()).collect()
    }

    #[test]
    fn test_matches_for_team() {
        let schedule = schedule();
        assert_eq!(
            ids(&matches_for_team(&schedule, "OpTic Texas")),
            vec!["1", "2", "3", "5", "6"]
        );
        assert!(matches_for_team(&schedule, "optic texas").is_empty());
    }

    #[test]
    fn test_completed_matches_for_team() {
        let schedule = schedule();
        let completed = completed_matches_for_team(&schedule, "OpTic Texas");
        assert_eq!(ids(&completed), vec!["2", "1", "3"]);
        assert!(completed.windows(2).all(|w| w[0].date >= w[1].date));
    }

    #[test]
    fn test_upcoming_matches_for_team() {
        let schedule = schedule();
        let upcoming = upcoming_matches_for_team(&schedule, "OpTic Texas");
        assert_eq!(ids(&upcoming), vec!["6", "5"]);
        assert!(upcoming.windows(2).all(|w| w[0].date <= w[1].date));
    }

    #[test]
    fn test_group_by_day() {
        let day = |d: u32, h: u32| {
            chrono::NaiveDate::from_ymd_opt(2026, 1, d)
                .unwrap()
                .and_hms_opt(h, 0, 0)
                .unwrap()
                .and_utc()
                .timestamp()
        };
        let schedule = vec![
            game("a", "A", "B", day(5, 18), false),
            game("b", "C", "D", day(4, 20), false),
            game("c", "A", "C", day(5, 15), false),
            game("d", "B", "D", day(3, 15), true),
        ];

        let upcoming = group_by_day(&schedule, ScheduleSection::Upcoming, &Utc);
        let labels = upcoming.iter().map(|(l, _)| l.as_str()).collect_vec();
        assert_eq!(labels, vec!["Sunday, January 4", "Monday, January 5"]);
        assert_eq!(ids(&upcoming[1].1), vec!["c", "a"]);

        let completed = group_by_day(&schedule, ScheduleSection::Completed, &Utc);
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].0, "Saturday, January 3");
    }

    #[test]
    fn test_group_by_day_in_timezone() {
        let eastern = FixedOffset::west_opt(5 * 3600).unwrap();
        let late = chrono::NaiveDate::from_ymd_opt(2026, 1, 5)
            .unwrap()
            .and_hms_opt(2, 0, 0)
            .unwrap()
            .and_utc()
            .timestamp();
        let schedule = vec![game("x", "A", "B", late, false)];

        let groups = group_by_day(&schedule, ScheduleSection::Upcoming, &eastern);
        assert_eq!(groups[0].0, "Sunday, January 4");
    }
}
