use crate::model::TeamStanding;

/// Join the standings table with the scraped rosters by exact team name.
///
/// The standings side decides which teams appear, their order and their
/// stats; each row's roster is taken from the roster row with the same name,
/// or left empty when there is none.
pub fn merge_standings(standings: &[TeamStanding], rosters: &[TeamStanding]) -> Vec<TeamStanding> {
    standings
        .iter()
        .map(|standing| TeamStanding {
            roster: rosters
                .iter()
                .find(|r| r.name == standing.name)
                .map(|r| r.roster.clone())
                .unwrap_or_default(),
            ..standing.clone()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standing(rank: i32, name: &str, points: i32) -> TeamStanding {
        TeamStanding {
            rank,
            name: name.to_string(),
            points,
            ..Default::default()
        }
    }

    fn roster(name: &str, players: &[&str]) -> TeamStanding {
        TeamStanding {
            rank: 99,
            name: name.to_string(),
            roster: players.iter().map(|p| p.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_merge_standings() {
        let standings = vec![
            standing(1, "OpTic Texas", 140),
            standing(2, "Toronto KOI", 120),
            standing(3, "Boston Breach", 90),
        ];
        let rosters = vec![
            roster("Toronto KOI", &["CleanX", "Scrap"]),
            roster("OpTic Texas", &["Shotzzy", "Dashy"]),
            roster("boston breach", &["Snoopy"]),
            roster("Paris Gentle Mates", &["Hicksy"]),
        ];

        let merged = merge_standings(&standings, &rosters);
        assert_eq!(merged.len(), 3);

        assert_eq!(merged[0].rank, 1);
        assert_eq!(merged[0].points, 140);
        assert_eq!(merged[0].roster, vec!["Shotzzy", "Dashy"]);
        assert_eq!(merged[1].roster, vec!["CleanX", "Scrap"]);
        assert!(merged[2].roster.is_empty());
    }

    #[test]
    fn test_merge_roster_matches_source() {
        let standings = vec![standing(1, "A", 1), standing(2, "B", 2), standing(3, "C", 3)];
        let rosters = vec![roster("C", &["x"]), roster("A", &[]), roster("A", &["dup"])];

        for merged in merge_standings(&standings, &rosters) {
            let expected = rosters
                .iter()
                .find(|r| r.name == merged.name)
                .map(|r| r.roster.clone())
                .unwrap_or_default();
            assert_eq!(merged.roster, expected);
        }
    }

    #[test]
    fn test_merge_without_rosters() {
        let standings = vec![standing(1, "A", 1)];
        let merged = merge_standings(&standings, &[]);
        assert_eq!(merged, standings);
    }
}
