use clap::Parser;

use crate::domain::course::Language;
use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of updates per second"
    )]
    pub tick_rate: Option<f64>,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of redraws per second"
    )]
    pub frame_rate: Option<f64>,

    #[arg(
        short,
        long,
        value_name = "LANG",
        value_parser = parse_language,
        help = "Course language at startup (en or de)"
    )]
    pub language: Option<Language>,
}

fn parse_language(s: &str) -> Result<Language, String> {
    match s.to_ascii_lowercase().as_str() {
        "en" | "english" => Ok(Language::En),
        "de" | "german" | "deutsch" => Ok(Language::De),
        other => Err(format!("unknown language `{other}` (expected en or de)")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_parsing() {
        assert_eq!(parse_language("EN"), Ok(Language::En));
        assert_eq!(parse_language("deutsch"), Ok(Language::De));
        assert!(parse_language("fr").is_err());
    }

    #[test]
    fn test_cli_defaults_to_config_values() {
        let cli = Cli::parse_from(["pyflap"]);
        assert!(cli.tick_rate.is_none());
        assert!(cli.frame_rate.is_none());
        assert!(cli.language.is_none());
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from(["pyflap", "-t", "120", "-l", "de"]);
        assert_eq!(cli.tick_rate, Some(120.0));
        assert_eq!(cli.language, Some(Language::De));
    }
}
