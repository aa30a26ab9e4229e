//! `defaults`: print a calibration as JSON, for use as a `--config` base.

use clap::Args;

use seismograph_core::config::SeismographConfig;

use crate::error::CliError;

/// Arguments for the `defaults` subcommand.
#[derive(Debug, Args)]
pub struct DefaultsArgs {
    /// Print the strict preset instead of the standard calibration.
    #[arg(long)]
    pub strict: bool,

    /// Pretty-print the JSON.
    #[arg(long)]
    pub pretty: bool,
}

/// Render the requested calibration.
pub fn render(args: &DefaultsArgs) -> Result<String, CliError> {
    let config = if args.strict {
        SeismographConfig::strict()
    } else {
        SeismographConfig::standard()
    };
    let rendered = if args.pretty {
        serde_json::to_string_pretty(&config)?
    } else {
        serde_json::to_string(&config)?
    };
    Ok(rendered)
}

/// Run the subcommand end to end.
pub fn execute(args: &DefaultsArgs) -> Result<(), CliError> {
    println!("{}", render(args)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rendered_defaults_round_trip() {
        let rendered = render(&DefaultsArgs {
            strict: false,
            pretty: true,
        })
        .unwrap();
        let parsed: SeismographConfig = serde_json::from_str(&rendered).unwrap();
        assert!(parsed.validate().is_ok());
    }

    #[test]
    fn test_strict_flag_changes_caps() {
        let standard = render(&DefaultsArgs { strict: false, pretty: false }).unwrap();
        let strict = render(&DefaultsArgs { strict: true, pretty: false }).unwrap();
        assert_ne!(standard, strict);
    }
}
