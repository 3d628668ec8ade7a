pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_required_field, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "raffle-tickets")]
#[command(about = "Assign random raffle numbers to a participant list and print the tickets")]
pub struct CliConfig {
    /// Participant list, one identifier (e.g. an email address) per line in the first column
    pub input: String,

    /// Organization or event name printed on every ticket (prompted for when omitted)
    pub organization: Option<String>,

    #[arg(short, long, default_value = "tickets.html")]
    pub output: String,

    #[arg(long, help = "Also write an Email,Number,Organization assignment file")]
    pub assignments: Option<String>,

    #[arg(long, help = "TOML file with layout and style settings")]
    pub config: Option<String>,

    #[arg(long, help = "Date printed on the tickets (defaults to today, YYYY.MM.DD)")]
    pub date: Option<String>,

    #[arg(long, help = "Skip the first line of the input file")]
    pub header: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output
    }

    fn assignments_path(&self) -> Option<&str> {
        self.assignments.as_deref()
    }

    fn organization(&self) -> &str {
        self.organization.as_deref().unwrap_or("")
    }

    fn has_header(&self) -> bool {
        self.header
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_path("output", &self.output)?;
        if let Some(path) = &self.assignments {
            validate_path("assignments", path)?;
        }
        let organization = validate_required_field("organization", &self.organization)?;
        validate_non_empty_string("organization", organization)?;
        if let Some(date) = &self.date {
            validate_non_empty_string("date", date)?;
        }
        Ok(())
    }
}
