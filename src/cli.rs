use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Master League stats
///
/// Looks up Heroes of the Storm esports data from the Master League API:
/// heroes, teams, and the matches scheduled for a day.
#[derive(Parser, Debug, Default)]
#[command(about, long_about = None, version)]
#[command(styles = get_styles())]
pub struct Args {
    /// List every hero.
    #[arg(long, help_heading = "Queries")]
    pub heroes: bool,

    /// Look up a team by its exact name.
    #[arg(long, short = 't', value_name = "NAME", help_heading = "Queries")]
    pub team: Option<String>,

    /// Show a team's win/loss record from this tournament stage page (requires --team).
    /// Falls back to `standings_url` from the config.
    #[arg(long, value_name = "URL", requires = "team", help_heading = "Queries")]
    pub standings: Option<String>,

    /// Show today's matches.
    #[arg(long, help_heading = "Queries")]
    pub today: bool,

    /// Show matches for a specific date in YYYY-MM-DD format.
    #[arg(long, short = 'd', conflicts_with = "today", help_heading = "Queries")]
    pub date: Option<String>,

    /// Skip TLS certificate validation for this run.
    #[arg(long, help_heading = "Connection")]
    pub insecure: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write logs to stdout.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

impl Args {
    /// True when no query flag was given.
    pub fn has_no_query(&self) -> bool {
        !self.heroes && self.team.is_none() && !self.today && self.date.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_team_with_standings() {
        let args = Args::try_parse_from([
            "masterleague_stats",
            "--team",
            "Tempo Storm",
            "--standings",
            "https://masterleague.net/tournament/42/stage/1/",
        ])
        .unwrap();

        assert_eq!(args.team.as_deref(), Some("Tempo Storm"));
        assert!(args.standings.is_some());
        assert!(!args.has_no_query());
    }

    #[test]
    fn test_standings_requires_team() {
        assert!(Args::try_parse_from(["masterleague_stats", "--standings", "https://x"]).is_err());
    }

    #[test]
    fn test_today_conflicts_with_date() {
        assert!(
            Args::try_parse_from(["masterleague_stats", "--today", "--date", "2018-03-10"])
                .is_err()
        );
    }

    #[test]
    fn test_no_query() {
        let args = Args::try_parse_from(["masterleague_stats", "--debug"]).unwrap();
        assert!(args.has_no_query());
    }
}
