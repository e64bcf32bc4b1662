//! Rendering of resource collections for the terminal, as HTML fragments or
//! as JSON.

use std::{fmt, str::FromStr};

use clap::ValueEnum;
use serde::Deserialize;
use thiserror::Error;

pub mod views;

pub use views::{render_login_prompt, render_processor_panel, render_records};

/// Output format of rendered views. Fixed for the life of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ViewFormat {
    #[default]
    Text,
    Html,
    Json,
}

impl ViewFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            ViewFormat::Text => "text",
            ViewFormat::Html => "html",
            ViewFormat::Json => "json",
        }
    }
}

impl fmt::Display for ViewFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown view format `{0}` (expected text, html or json)")]
pub struct ParseViewFormatError(pub String);

impl FromStr for ViewFormat {
    type Err = ParseViewFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(ViewFormat::Text),
            "html" => Ok(ViewFormat::Html),
            "json" => Ok(ViewFormat::Json),
            _ => Err(ParseViewFormatError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("template rendering failed: {0}")]
    Render(#[from] askama::Error),
    #[error("failed to serialize records: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to format date: {0}")]
    Date(#[from] time::error::Format),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_parses_case_insensitively() {
        assert_eq!("HTML".parse::<ViewFormat>().ok(), Some(ViewFormat::Html));
        assert_eq!(" json ".parse::<ViewFormat>().ok(), Some(ViewFormat::Json));
        assert!("yaml".parse::<ViewFormat>().is_err());
    }

    #[test]
    fn format_round_trips_through_display() {
        for format in [ViewFormat::Text, ViewFormat::Html, ViewFormat::Json] {
            assert_eq!(format.to_string().parse::<ViewFormat>().ok(), Some(format));
        }
    }
}
