use chrono::{Local, NaiveDate};
use clap::Parser;
use masterleague_stats::cli::Args;
use masterleague_stats::config::Config;
use masterleague_stats::data_fetcher::{MasterLeagueClient, Match};
use masterleague_stats::error::AppError;
use masterleague_stats::logging::setup_logging;
use tracing::info;

fn parse_date(date: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|e| {
        AppError::datetime_parse_error(format!("'{date}' is not a YYYY-MM-DD date: {e}"))
    })
}

fn print_matches(day: NaiveDate, matches: &[Match]) {
    println!("\nMatches on {}", day.format("%Y-%m-%d"));
    println!("────────────────────────────────────");
    if matches.is_empty() {
        println!("No matches scheduled");
    }
    for game in matches {
        println!(
            "{} vs {} ({}) {} - {}",
            game.left_team.name, game.right_team.name, game.format, game.name, game.when
        );
    }
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    if args.list_config {
        return Config::display().await;
    }

    let mut config = Config::load().await?;
    if args.insecure {
        config.verify_tls = false;
    }

    let (log_file_path, _guard) = setup_logging(&args, &config).await?;
    info!("Logging to {}", log_file_path);

    if args.has_no_query() {
        println!("Nothing to look up. Try --heroes, --team <NAME>, --today or --date <YYYY-MM-DD>.");
        return Ok(());
    }

    let client = MasterLeagueClient::new(config.api_root.clone(), config.fetcher_options())?;

    if args.heroes {
        let heroes = client.all_heroes().await?;
        println!("\nHeroes ({})", heroes.len());
        println!("────────────────────────────────────");
        for hero in heroes {
            println!("{hero}");
        }
    }

    if let Some(name) = &args.team {
        let team = client.find_team(name).await?;
        println!("\nTeam");
        println!("────────────────────────────────────");
        match team.id {
            Some(id) => println!("{} (id {id})", team.name),
            None => println!("{}", team.name),
        }

        if let Some(url) = args.standings.as_ref().or(config.standings_url.as_ref()) {
            match client.team_record(&team, url).await? {
                Some(row) => println!("Record: {}-{}", row.wins, row.losses),
                None => println!("Record: not listed"),
            }
        }
    }

    if args.today || args.date.is_some() {
        let day = match &args.date {
            Some(date) => parse_date(date)?,
            None => Local::now().date_naive(),
        };
        let matches = client.matches_on(day).await?;
        print_matches(day, &matches);
    }

    Ok(())
}
