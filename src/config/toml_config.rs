use crate::core::layout::LayoutConfig;
use crate::core::render::TicketStyle;
use crate::utils::error::{RaffleError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional settings file passed with `--config`.
///
/// ```toml
/// organization = "2024 Board Game Club"
///
/// [layout]
/// rows = 5
/// columns = 2
///
/// [style]
/// page_size = "A4"
/// keep_label = "Keep"
/// draw_label = "Draw"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TicketSettings {
    /// Used when no organization is given on the command line.
    pub organization: Option<String>,
    pub layout: LayoutConfig,
    pub style: TicketStyle,
}

impl TicketSettings {
    /// Loads settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(RaffleError::MissingFile {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RaffleError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RaffleError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for TicketSettings {
    fn validate(&self) -> Result<()> {
        self.layout.validate()?;
        if let Some(organization) = &self.organization {
            validate_non_empty_string("organization", organization)?;
        }
        validate_non_empty_string("style.page_size", &self.style.page_size)?;
        validate_non_empty_string("style.keep_label", &self.style.keep_label)?;
        validate_non_empty_string("style.draw_label", &self.style.draw_label)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_file_gives_defaults() {
        let settings = TicketSettings::from_toml_str("").unwrap();
        assert_eq!(settings, TicketSettings::default());
        assert_eq!(settings.layout.capacity(), 10);
        assert_eq!(settings.style.page_size, "A4");
    }

    #[test]
    fn test_parse_partial_settings() {
        let toml_content = r##"
organization = "Go Club"

[layout]
rows = 4

[style]
draw_label = "Draw box"
keep_color = "#eeeeee"
"##;

        let settings = TicketSettings::from_toml_str(toml_content).unwrap();
        assert_eq!(settings.organization.as_deref(), Some("Go Club"));
        assert_eq!(settings.layout.rows, 4);
        assert_eq!(settings.layout.columns, 2);
        assert_eq!(settings.style.draw_label, "Draw box");
        assert_eq!(settings.style.keep_color, "#eeeeee");
        assert_eq!(settings.style.keep_label, "Keep");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("RAFFLE_TEST_ORGANIZATION", "Env Club");

        let toml_content = r#"
organization = "${RAFFLE_TEST_ORGANIZATION}"

[style]
keep_label = "${RAFFLE_TEST_UNSET_VARIABLE}"
"#;

        let settings = TicketSettings::from_toml_str(toml_content).unwrap();
        assert_eq!(settings.organization.as_deref(), Some("Env Club"));
        assert_eq!(settings.style.keep_label, "${RAFFLE_TEST_UNSET_VARIABLE}");

        std::env::remove_var("RAFFLE_TEST_ORGANIZATION");
    }

    #[test]
    fn test_invalid_settings() {
        let settings = TicketSettings::from_toml_str("[layout]\ncolumns = 0\n").unwrap();
        assert!(settings.validate().is_err());

        assert!(matches!(
            TicketSettings::from_toml_str("[layout]\nrows = \"five\"\n"),
            Err(RaffleError::ConfigError { .. })
        ));
        assert!(TicketSettings::from_toml_str("unknown_key = 1\n").is_err());
        assert!(matches!(
            TicketSettings::from_toml_str("[style]\nkeep_colour = \"#eeeeee\"\n"),
            Err(RaffleError::ConfigError { .. })
        ));
        assert!(matches!(
            TicketSettings::from_toml_str("[layout]\ncolumn = 3\n"),
            Err(RaffleError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_settings_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[layout]\nrows = 3\ncolumns = 3\n")
            .unwrap();

        let settings = TicketSettings::from_file(temp_file.path()).unwrap();
        assert_eq!(settings.layout.capacity(), 9);

        assert!(matches!(
            TicketSettings::from_file("/definitely/not/here.toml"),
            Err(RaffleError::MissingFile { .. })
        ));
    }
}
