use crate::error::AppError;
use crate::results::Competition;
use std::path::Path;

/// Validates the configuration settings
///
/// # Arguments
/// * `club_name` - The configured club name, empty when not set yet
/// * `default_competition` - Optional competition tab to show by default
/// * `log_file_path` - Optional log file path to validate
///
/// # Validation Rules
/// - A club name that is set cannot be only whitespace
/// - The default competition must name one of the competition tabs
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    club_name: &str,
    default_competition: &Option<String>,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if !club_name.is_empty() && club_name.trim().is_empty() {
        return Err(AppError::config_error("Club name cannot be blank"));
    }

    if let Some(competition) = default_competition {
        competition.parse::<Competition>().map_err(|_| {
            AppError::config_error(format!(
                "Unknown default competition '{competition}' (expected championnat, coupe or tournoi)"
            ))
        })?;
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
