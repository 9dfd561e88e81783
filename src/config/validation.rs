// src/config/validation.rs

use crate::cli::Cli;
use crate::errors::{Error, Result};

/// Validates combinations of CLI options that clap cannot easily express.
pub(super) fn validate_cli_options(cli: &Cli) -> Result<()> {
    if cli.urls.is_empty() {
        return Err(Error::ConfigError(
            "No URL given (pass URLs as arguments or on stdin).".to_string(),
        ));
    }

    if cli.quiet && cli.format.is_some() {
        return Err(Error::ConfigError(
            "Cannot use --quiet (-q) and --format (-f) simultaneously.".to_string(),
        ));
    }

    #[cfg(feature = "json")]
    {
        if cli.quiet && cli.json {
            return Err(Error::ConfigError(
                "Cannot use --quiet (-q) and --json (-j) simultaneously.".to_string(),
            ));
        }
        if cli.json && cli.format.is_some() {
            return Err(Error::ConfigError(
                "Cannot use --json (-j) and --format (-f) simultaneously.".to_string(),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    #[test]
    fn test_empty_url_list_is_rejected() {
        let cli = Cli::parse_from(["giturlparse"]);
        let result = validate_cli_options(&cli);
        assert!(result.unwrap_err().to_string().contains("No URL given"));
    }

    #[test]
    fn test_quiet_and_format_conflict() {
        let cli = Cli::parse_from(["giturlparse", "-q", "-f", "ssh", "a@b:c/d"]);
        let result = validate_cli_options(&cli);
        assert!(result.unwrap_err().to_string().contains("simultaneously"));
    }

    #[test]
    #[cfg(feature = "json")]
    fn test_json_conflicts() {
        let cli = Cli::parse_from(["giturlparse", "-q", "-j", "a@b:c/d"]);
        assert!(validate_cli_options(&cli).is_err());

        let cli = Cli::parse_from(["giturlparse", "-j", "-f", "git", "a@b:c/d"]);
        assert!(validate_cli_options(&cli).is_err());
    }

    #[test]
    fn test_valid_options_pass() -> Result<()> {
        validate_cli_options(&Cli::parse_from(["giturlparse", "a@b:c/d"]))?;
        validate_cli_options(&Cli::parse_from(["giturlparse", "-s", "a@b:c/d", "e@f:g/h"]))?;
        validate_cli_options(&Cli::parse_from(["giturlparse", "-f", "https", "a@b:c/d"]))?;
        Ok(())
    }
}
