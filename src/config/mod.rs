use crate::constants::{DEFAULT_LOG_FILE_NAME, env_vars};
use crate::error::AppError;
use crate::results::Competition;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Name the club appears under in league tables.
    #[serde(default)]
    pub club_name: String,
    /// Extra player names that count as club players, on top of any roster file.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub club_players: Vec<String>,
    /// Competition tab shown when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_competition: Option<String>,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

impl Config {
    /// Loads configuration from the default config file location.
    /// A missing file yields an empty configuration; the club name can then
    /// come from the environment or the command line.
    ///
    /// # Environment Variables
    /// - `CLUB_STANDINGS_CLUB_NAME` - Override club name
    /// - `CLUB_STANDINGS_LOG_FILE` - Override log file path
    /// - `CLUB_STANDINGS_COMPETITION` - Override default competition
    pub async fn load() -> Result<Self, AppError> {
        Self::load_or_default_from(&get_config_path()).await
    }

    /// Loads configuration from `path` if it exists, applies environment
    /// overrides and validates the result.
    pub async fn load_or_default_from(path: &str) -> Result<Self, AppError> {
        let mut config = if Path::new(path).exists() {
            Self::load_from_path(path).await?
        } else {
            tracing::debug!("No config file at {path}, using defaults");
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Loads the stored configuration for editing.
    ///
    /// Unlike [`Config::load`], environment overrides are not applied, so
    /// saving the result never persists them. A missing file yields defaults;
    /// an unreadable or malformed file is an error.
    pub async fn load_stored() -> Result<Self, AppError> {
        Self::load_stored_from(&get_config_path()).await
    }

    pub async fn load_stored_from(path: &str) -> Result<Self, AppError> {
        if Path::new(path).exists() {
            Self::load_from_path(path).await
        } else {
            Ok(Config::default())
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(club_name) = std::env::var(env_vars::CLUB_NAME) {
            self.club_name = club_name;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Ok(competition) = std::env::var(env_vars::COMPETITION) {
            self.default_competition = Some(competition);
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.club_name,
            &self.default_competition,
            &self.log_file_path,
        )
    }

    /// The configured default competition, championship when unset.
    pub fn competition(&self) -> Result<Competition, AppError> {
        match &self.default_competition {
            Some(label) => label.parse(),
            None => Ok(Competition::Championship),
        }
    }

    /// Picks the club name from the command line override or the config.
    ///
    /// # Errors
    /// * `AppError::Config` - neither source provides a non-blank name
    pub fn resolve_club_name(&self, cli_override: Option<&str>) -> Result<String, AppError> {
        let name = cli_override.unwrap_or(&self.club_name).trim();
        if name.is_empty() {
            return Err(AppError::config_error(
                "Club name is not set. Use --club or --set-club <NAME>",
            ));
        }
        Ok(name.to_string())
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if Path::new(&config_path).exists() {
            let config = Config::load().await?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("Club Name:");
            println!("{}", config.club_name);
            println!("────────────────────────────────────");
            println!("Club Players:");
            if config.club_players.is_empty() {
                println!("(none)");
            }
            for player in &config.club_players {
                println!("{player}");
            }
            println!("────────────────────────────────────");
            println!("Default Competition:");
            println!("{}", config.competition()?);
            println!("────────────────────────────────────");
            println!("Log File Location:");
            if let Some(custom_path) = &config.log_file_path {
                println!("{custom_path}");
            } else {
                println!("{log_dir}/{DEFAULT_LOG_FILE_NAME}");
                println!("(Default location)");
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        tracing::info!("Saved configuration to {path}");
        Ok(())
    }

    /// Loads configuration from a custom file path without environment overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn clear_env() {
        // SAFETY: env-mutating tests are serialized with #[serial]
        unsafe {
            std::env::remove_var(env_vars::CLUB_NAME);
            std::env::remove_var(env_vars::LOG_FILE);
            std::env::remove_var(env_vars::COMPETITION);
        }
    }

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
club_name = "FC Club"
club_players = ["Léo Martin", "Hugo Petit"]
default_competition = "coupe"
log_file_path = "/custom/log/path"
"#;
        tokio::fs::write(&config_path, config_content).await.unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(config.club_name, "FC Club");
        assert_eq!(config.club_players, vec!["Léo Martin", "Hugo Petit"]);
        assert_eq!(config.competition().unwrap(), Competition::Cup);
        assert_eq!(config.log_file_path, Some("/custom/log/path".to_string()));
    }

    #[tokio::test]
    async fn test_config_load_minimal_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "club_name = \"FC Club\"\n")
            .await
            .unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();

        assert_eq!(config.club_name, "FC Club");
        assert!(config.club_players.is_empty());
        assert_eq!(config.competition().unwrap(), Competition::Championship);
        assert_eq!(config.log_file_path, None);
    }

    #[tokio::test]
    async fn test_config_save_and_load_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let config = Config {
            club_name: "Étoile Sportive".to_string(),
            club_players: vec!["Léo Martin".to_string()],
            default_competition: Some("tournoi".to_string()),
            log_file_path: None,
        };

        config.save_to_path(&config_path_str).await.unwrap();
        assert!(config_path.exists());

        let content = tokio::fs::read_to_string(&config_path).await.unwrap();
        assert!(content.contains("club_name"));
        assert!(!content.contains("log_file_path"));

        let loaded = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(loaded, config);
    }

    #[tokio::test]
    async fn test_config_malformed_toml_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "club_name = [unterminated")
            .await
            .unwrap();

        let result = Config::load_from_path(&config_path.to_string_lossy()).await;
        assert!(matches!(result.unwrap_err(), AppError::TomlDeserialize(_)));
    }

    #[tokio::test]
    async fn test_config_load_from_nonexistent_path() {
        let result = Config::load_from_path("/nonexistent/path/config.toml").await;
        assert!(matches!(result.unwrap_err(), AppError::Io(_)));
    }

    #[tokio::test]
    #[serial]
    async fn test_missing_file_yields_defaults() {
        clear_env();
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("absent.toml");

        let config = Config::load_or_default_from(&config_path.to_string_lossy())
            .await
            .unwrap();
        assert_eq!(config, Config::default());
    }

    #[tokio::test]
    #[serial]
    async fn test_env_overrides_file_values() {
        clear_env();
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "club_name = \"FC Club\"\n")
            .await
            .unwrap();

        // SAFETY: serialized with #[serial]
        unsafe {
            std::env::set_var(env_vars::CLUB_NAME, "AS Village");
            std::env::set_var(env_vars::COMPETITION, "coupe");
        }
        let config = Config::load_or_default_from(&config_path.to_string_lossy())
            .await
            .unwrap();
        clear_env();

        assert_eq!(config.club_name, "AS Village");
        assert_eq!(config.competition().unwrap(), Competition::Cup);
    }

    #[tokio::test]
    #[serial]
    async fn test_invalid_env_competition_fails_validation() {
        clear_env();
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("absent.toml");

        // SAFETY: serialized with #[serial]
        unsafe {
            std::env::set_var(env_vars::COMPETITION, "amical");
        }
        let result = Config::load_or_default_from(&config_path.to_string_lossy()).await;
        clear_env();

        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_resolve_club_name() {
        let config = Config {
            club_name: "FC Club".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolve_club_name(None).unwrap(), "FC Club");
        assert_eq!(
            config.resolve_club_name(Some("AS Village")).unwrap(),
            "AS Village"
        );
        assert!(Config::default().resolve_club_name(None).is_err());
        assert!(Config::default().resolve_club_name(Some("  ")).is_err());
    }

    #[test]
    fn test_get_config_path() {
        let path = Config::get_config_path();
        assert!(path.contains("club_standings"));
        assert!(path.ends_with("config.toml"));
    }

    #[test]
    fn test_get_log_dir_path() {
        let path = Config::get_log_dir_path();
        assert!(path.contains("club_standings"));
        assert!(path.ends_with("logs"));
    }

    #[tokio::test]
    #[serial]
    async fn test_load_stored_ignores_env_overrides() {
        clear_env();
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy().to_string();
        tokio::fs::write(
            &config_path,
            "club_name = \"FC Club\"\nclub_players = [\"Léo Martin\"]\ndefault_competition = \"coupe\"\n",
        )
        .await
        .unwrap();

        // SAFETY: serialized with #[serial]
        unsafe {
            std::env::set_var(env_vars::CLUB_NAME, "Temporary FC");
            std::env::set_var(env_vars::COMPETITION, "not-a-competition");
        }

        let mut config = Config::load_stored_from(&config_path_str).await.unwrap();
        assert_eq!(config.club_name, "FC Club");
        config.log_file_path = Some("/tmp/club.log".to_string());
        config.save_to_path(&config_path_str).await.unwrap();
        clear_env();

        let saved = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(saved.club_name, "FC Club");
        assert_eq!(saved.club_players, vec!["Léo Martin"]);
        assert_eq!(saved.default_competition.as_deref(), Some("coupe"));
        assert_eq!(saved.log_file_path.as_deref(), Some("/tmp/club.log"));
    }

    #[tokio::test]
    async fn test_load_stored_rejects_malformed_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let broken = "club_name = \"FC Club\"\nclub_players = [\"Léo\"\n";
        tokio::fs::write(&config_path, broken).await.unwrap();

        let result = Config::load_stored_from(&config_path.to_string_lossy()).await;
        assert!(matches!(result, Err(AppError::TomlDeserialize(_))));
        let content = tokio::fs::read_to_string(&config_path).await.unwrap();
        assert_eq!(content, broken);
    }

    #[tokio::test]
    async fn test_load_stored_missing_file_is_default() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("missing.toml");
        let config = Config::load_stored_from(&config_path.to_string_lossy())
            .await
            .unwrap();
        assert_eq!(config, Config::default());
    }
}
