//! Reads result feeds and club rosters exported from the result store.

use super::models::MatchResult;
use super::roster::{ClubRoster, RosterEntry};
use crate::error::AppError;
use serde_json::Value;
use tokio::fs;

/// Loads a JSON result feed from disk.
///
/// The feed is either a bare array of result documents or an object with a
/// `results` array. Documents that cannot be decoded at all (e.g. a string
/// where an object is expected) are skipped with a warning; everything else
/// about a document is decoded leniently, see [`MatchResult`].
///
/// # Errors
/// * `AppError::ResultsLoad` - the file cannot be read or has neither shape
/// * `AppError::JsonParse` - the file is not JSON
pub async fn load_results_from_path(path: &str) -> Result<Vec<MatchResult>, AppError> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::results_load(path, e.to_string()))?;
    let results = parse_results_feed(&content).map_err(|e| match e {
        AppError::ResultsLoad { message, .. } => AppError::results_load(path, message),
        other => other,
    })?;
    tracing::info!("Loaded {} results from {path}", results.len());
    Ok(results)
}

/// Parses the content of a result feed. See [`load_results_from_path`].
pub fn parse_results_feed(content: &str) -> Result<Vec<MatchResult>, AppError> {
    let documents = match serde_json::from_str::<Value>(content)? {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("results") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(AppError::results_load(
                    "<feed>",
                    "object feed must contain a `results` array",
                ));
            }
        },
        _ => {
            return Err(AppError::results_load(
                "<feed>",
                "feed must be an array of results",
            ));
        }
    };

    let total = documents.len();
    let results: Vec<MatchResult> = documents
        .into_iter()
        .enumerate()
        .filter_map(|(index, document)| match serde_json::from_value(document) {
            Ok(result) => Some(result),
            Err(e) => {
                tracing::warn!("Skipping result #{index}: {e}");
                None
            }
        })
        .collect();

    if results.len() < total {
        tracing::warn!("Skipped {} undecodable results", total - results.len());
    }
    Ok(results)
}

/// Loads the club roster from a JSON array of names or `{firstName, lastName}` objects.
pub async fn load_roster_from_path(path: &str) -> Result<ClubRoster, AppError> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::roster_load(path, e.to_string()))?;
    let entries: Vec<RosterEntry> =
        serde_json::from_str(&content).map_err(|e| AppError::roster_load(path, e.to_string()))?;
    let roster = ClubRoster::from_entries(&entries);
    tracing::info!("Loaded {} club players from {path}", roster.len());
    Ok(roster)
}
