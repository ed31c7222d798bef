use crate::cli::Args;
use club_standings::config::Config;
use club_standings::display::StandingsPage;
use club_standings::error::AppError;
use club_standings::results::{
    ClubRoster, ResultFilter, load_results_from_path, load_roster_from_path,
};
use club_standings::standings::{StandingsReport, build_report};
use crossterm::{execute, terminal::SetTitle};
use std::io::stdout;

/// Validates command line argument combinations.
///
/// Returns an error if incompatible arguments are used together.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.table_only && args.scorers_only {
        return Err(AppError::invalid_argument(
            "Cannot use both --table-only and --scorers-only",
        ));
    }
    if args.top == Some(0) {
        return Err(AppError::invalid_argument("--top must be at least 1"));
    }
    Ok(())
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--set-club, --set-log-file, --clear-log-file).
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load_stored().await?;

    if let Some(club_name) = &args.set_club {
        config.club_name = club_name.trim().to_string();
    }

    if let Some(new_log_path) = &args.set_log_file {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Squad description for the page subheader, e.g. "U13 Féminin".
fn squad_subtitle(filter: &ResultFilter) -> String {
    let parts: Vec<&str> = [
        filter.team_category.map(|category| category.label()),
        filter.gender.map(|gender| gender.label()),
    ]
    .into_iter()
    .flatten()
    .collect();
    parts.join(" ")
}

/// Loads results, roster and config, then builds the report the arguments ask for.
pub async fn build_report_from_args(args: &Args) -> Result<StandingsReport, AppError> {
    let config = Config::load().await?;
    let club_name = config.resolve_club_name(args.club.as_deref())?;
    let competition = match args.competition {
        Some(competition) => competition,
        None => config.competition()?,
    };

    let results_path = args.results.as_deref().ok_or_else(|| {
        AppError::invalid_argument("No results feed given. Use --results <FILE>")
    })?;
    let results = load_results_from_path(results_path).await?;

    let mut roster = match &args.players {
        Some(path) => load_roster_from_path(path).await?,
        None => ClubRoster::new(),
    };
    roster.extend(config.club_players.iter().cloned());
    if roster.is_empty() {
        tracing::warn!("No club players known; every scorer will be listed as external");
    }

    let filter = ResultFilter::new(args.category, args.gender);
    Ok(build_report(
        &results,
        &filter,
        &club_name,
        &roster,
        competition,
    ))
}

/// Handles the default command: print the standings once and exit.
pub async fn handle_standings_command(args: &Args) -> Result<(), AppError> {
    let report = build_report_from_args(args).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if !args.plain {
        execute!(stdout(), SetTitle(format!("{} 235", report.club_name)))?;
    }

    let filter = ResultFilter::new(args.category, args.gender);
    let page = StandingsPage::new(&report, args.plain)
        .with_subtitle(squad_subtitle(&filter))
        .with_sections(!args.scorers_only, !args.table_only)
        .with_scorer_limit(args.top);

    let mut out = stdout().lock();
    page.render(&mut out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use club_standings::results::{Gender, TeamCategory};

    #[test]
    fn test_validate_args_conflicts() {
        let args =
            Args::try_parse_from(["club_standings", "--table-only", "--scorers-only"]).unwrap();
        assert!(validate_args(&args).is_err());

        let args = Args::try_parse_from(["club_standings", "--top", "0"]).unwrap();
        assert!(validate_args(&args).is_err());

        let args = Args::try_parse_from(["club_standings", "--table-only"]).unwrap();
        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_squad_subtitle() {
        assert_eq!(squad_subtitle(&ResultFilter::default()), "");
        assert_eq!(
            squad_subtitle(&ResultFilter::new(Some(TeamCategory::U13), Some(Gender::Female))),
            "U13 Féminin"
        );
        assert_eq!(
            squad_subtitle(&ResultFilter::new(None, Some(Gender::Male))),
            "Masculin"
        );
    }
}
