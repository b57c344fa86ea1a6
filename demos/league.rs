use chrono::Local;
use tracing_subscriber::EnvFilter;

use cdl_scraper::{group_by_day, CdlClient, League, ScheduleSection};

#[tokio::main]
async fn main() -> cdl_scraper::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cdl_scraper=info")),
        )
        .init();

    let league = League::new(CdlClient::new());
    if let Err(e) = league.refresh_all().await {
        eprintln!("some data failed to load: {e}");
    }

    println!("{:<4} {:<24} {:>5} {:>7} {:>7}  Roster", "Rank", "Team", "Pts", "Series", "Maps");
    for team in league.standings() {
        println!(
            "{:<4} {:<24} {:>5} {:>7} {:>7}  {}",
            team.rank,
            team.name,
            team.points,
            team.record(),
            format!("{}-{}", team.map_wins, team.map_losses),
            team.roster.join(", ")
        );
    }

    let schedule = league.matches();
    for (day, matches) in group_by_day(&schedule, ScheduleSection::Upcoming, &Local)
        .into_iter()
        .take(3)
    {
        println!("\n{day}");
        for m in matches {
            println!("  {}  {} vs {}", m.time_display(), m.team1_name, m.team2_name);
        }
    }

    let team = "OpTic Texas";
    println!("\nLast results for {team}:");
    for m in league.completed_matches_for_team(team).iter().take(5) {
        println!(
            "  {}  {} {} - {} {}",
            m.short_display_date(),
            m.team1_name,
            m.team1_score.unwrap_or_default(),
            m.team2_score.unwrap_or_default(),
            m.team2_name
        );
    }

    Ok(())
}
