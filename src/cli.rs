use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use club_standings::results::{Competition, Gender, TeamCategory};

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

/// Whether the arguments ask to change the stored configuration
pub fn is_config_update(args: &Args) -> bool {
    args.set_club.is_some() || args.set_log_file.is_some() || args.clear_log_file
}

/// Club standings viewer
///
/// Reads an exported feed of match results and prints the league table of one
/// competition together with the goal-scorer leaderboard of all competitions,
/// teletext style.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// JSON file with match results (an array, or an object with a `results` array).
    #[arg(short, long, value_name = "FILE")]
    pub results: Option<String>,

    /// JSON file with the club's players: names or {firstName, lastName} objects.
    #[arg(short, long, value_name = "FILE")]
    pub players: Option<String>,

    /// Club name to use instead of the configured one.
    #[arg(long, value_name = "NAME")]
    pub club: Option<String>,

    /// Competition tab: championnat, coupe or tournoi.
    #[arg(short = 't', long, help_heading = "Filters")]
    pub competition: Option<Competition>,

    /// Team category, e.g. Sénior or U13.
    #[arg(short = 'k', long, help_heading = "Filters")]
    pub category: Option<TeamCategory>,

    /// Gender: Masculin or Féminin.
    #[arg(short, long, help_heading = "Filters")]
    pub gender: Option<Gender>,

    /// Print the report as JSON instead of the teletext page.
    #[arg(long, help_heading = "Display Options")]
    pub json: bool,

    /// Disable colors.
    #[arg(long, help_heading = "Display Options")]
    pub plain: bool,

    /// Show only the league table.
    #[arg(long, help_heading = "Display Options")]
    pub table_only: bool,

    /// Show only the scorer leaderboard.
    #[arg(long, help_heading = "Display Options")]
    pub scorers_only: bool,

    /// Limit the scorer leaderboard to the first N players.
    #[arg(long, value_name = "N", help_heading = "Display Options")]
    pub top: Option<usize>,

    /// List current configuration settings.
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Store the club name in the config.
    #[arg(long, value_name = "NAME", help_heading = "Configuration")]
    pub set_club: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long, value_name = "PATH", help_heading = "Configuration")]
    pub set_log_file: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long, help_heading = "Configuration")]
    pub clear_log_file: bool,

    /// Also write logs to stderr.
    #[arg(long, help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long, value_name = "PATH", help_heading = "Debug")]
    pub log_file: Option<String>,
}
