//! SnowDay CLI
//!
//! Estimate the chance of a snow day from a ZIP code or from manual weather values.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use snowday::synthesis::RegionalProfile;
use snowday::{
    ClosureLikelihood, PostalCode, ScoreResult, Scorer, SnowDayConfig, SnowDayError, Timing,
    WeatherObservation, logging, synthesize_with_profile,
};

/// Width of the per-factor bar in text output
const BAR_WIDTH: usize = 10;

/// SnowDay CLI
#[derive(Parser)]
#[command(name = "snowday")]
#[command(author, version, about = "Snow day closure probability calculator", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true, env = "SNOWDAY_CONFIG")]
    config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate weather for a ZIP code, then score it
    Lookup {
        /// Five digit ZIP code
        postal_code: PostalCode,

        /// Date to estimate for (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Score manually entered weather conditions
    Score {
        /// Temperature in °C
        #[arg(short, long, allow_negative_numbers = true)]
        temperature: f64,

        /// Expected snowfall in inches
        #[arg(short, long, default_value = "0")]
        snowfall: f64,

        /// Wind speed in mph
        #[arg(short, long, default_value = "0")]
        wind_speed: f64,

        /// When the snow is expected to fall
        #[arg(
            long,
            default_value = "overnight",
            value_parser = PossibleValuesParser::new(
                ["overnight", "early-morning", "morning", "afternoon", "evening"]
            ).map(|s| Timing::from(s.as_str()))
        )]
        timing: Timing,
    },
}

/// Everything shown to the user for one calculation
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    postal_code: Option<PostalCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    profile: Option<RegionalProfile>,
    observation: WeatherObservation,
    #[serde(flatten)]
    result: ScoreResult,
    likelihood: ClosureLikelihood,
    recommendation: &'static str,
}

impl Report {
    fn new(
        postal_code: Option<PostalCode>,
        profile: Option<RegionalProfile>,
        observation: WeatherObservation,
        result: ScoreResult,
    ) -> Self {
        let likelihood = result.likelihood();
        Self {
            postal_code,
            profile,
            observation,
            result,
            likelihood,
            recommendation: likelihood.recommendation(),
        }
    }

    fn print(&self) {
        if let (Some(code), Some(profile)) = (&self.postal_code, &self.profile) {
            let params = profile.parameters();
            println!("📍 ZIP {code} - {profile} climate estimate");
            println!(
                "   typical {:.0} to {:.0}°C, wind {:.0}-{:.0} mph",
                params.temperature.base,
                params.temperature.max(),
                params.wind.base,
                params.wind.max()
            );
        }

        let obs = &self.observation;
        println!(
            "🌡️  {}  ❄️  {}  💨 {}  🕑 {}",
            obs.format_temperature(),
            obs.format_snowfall(),
            obs.format_wind(),
            timing_description(obs.timing)
        );
        println!();
        println!(
            "Snow day probability: {:.1}% ({})",
            self.result.probability, self.likelihood
        );
        println!();

        let breakdown = &self.result.breakdown;
        for (factor, value) in breakdown.factors() {
            println!(
                "  {:<16} {} +{:>4.1} / {:.0}",
                factor.label(),
                factor_bar(breakdown.fill_ratio(factor)),
                value,
                factor.cap()
            );
        }

        if !self.result.adjustments.is_empty() {
            println!();
            for adjustment in &self.result.adjustments {
                println!("  • {adjustment}");
            }
        }

        println!();
        println!("{}", self.recommendation);
        for tip in self.likelihood.preparation_tips() {
            println!("  - {tip}");
        }
    }
}

/// Timing label with its clock window, when known
fn timing_description(timing: Timing) -> String {
    match timing.window() {
        Some(window) => format!("{} ({window})", timing.label()),
        None => timing.label().to_string(),
    }
}

/// Fixed-width bar for a 0.0-1.0 fill ratio
fn factor_bar(ratio: f64) -> String {
    let filled = ((ratio.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// Friendly hint for the first `SnowDayError` in an error chain
fn user_hint(err: &anyhow::Error) -> Option<String> {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<SnowDayError>())
        .map(SnowDayError::user_message)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            if let Some(hint) = user_hint(&err) {
                eprintln!("{hint}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = SnowDayConfig::load_from_path(cli.config.clone())
        .context("Failed to load configuration")?;
    logging::init(&config.logging, cli.verbose)?;

    let scorer = Scorer::new(&config.scoring);

    let report = match cli.command {
        Commands::Lookup { postal_code, date } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let (profile, observation) = synthesize_with_profile(&postal_code, date);
            info!("Estimating weather for {} on {} ({})", postal_code, date, profile);

            let result = scorer.score(&observation);
            Report::new(Some(postal_code), Some(profile), observation, result)
        }
        Commands::Score {
            temperature,
            snowfall,
            wind_speed,
            timing,
        } => {
            let observation = WeatherObservation::new(temperature, snowfall, wind_speed, timing);
            info!("Scoring manual observation: {:?}", observation);

            let result = scorer.score(&observation);
            Report::new(None, None, observation, result)
        }
    };

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize result")?
        );
    } else {
        report.print();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_lookup() {
        let cli = Cli::try_parse_from(["snowday", "lookup", "02134", "--date", "2025-01-15"])
            .expect("valid arguments");
        match cli.command {
            Commands::Lookup { postal_code, date } => {
                assert_eq!(postal_code.as_str(), "02134");
                assert_eq!(date, NaiveDate::from_ymd_opt(2025, 1, 15));
            }
            Commands::Score { .. } => unreachable!("Expected lookup command"),
        }
    }

    #[test]
    fn test_lookup_rejects_invalid_postal_code() {
        assert!(Cli::try_parse_from(["snowday", "lookup", "1234"]).is_err());
        assert!(Cli::try_parse_from(["snowday", "lookup", "abcde"]).is_err());
    }

    #[test]
    fn test_parse_score_with_negative_temperature() {
        let cli = Cli::try_parse_from([
            "snowday", "-vv", "score", "-t", "-8", "-s", "6", "-w", "22", "--timing",
            "early-morning",
        ])
        .expect("valid arguments");
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Score {
                temperature,
                snowfall,
                wind_speed,
                timing,
            } => {
                assert_eq!(temperature, -8.0);
                assert_eq!(snowfall, 6.0);
                assert_eq!(wind_speed, 22.0);
                assert_eq!(timing, Timing::EarlyMorning);
            }
            Commands::Lookup { .. } => unreachable!("Expected score command"),
        }
    }

    #[test]
    fn test_score_rejects_unknown_timing() {
        assert!(Cli::try_parse_from(["snowday", "score", "-t", "0", "--timing", "noon"]).is_err());
    }

    #[test]
    fn test_user_hint_found_through_context() {
        let err = anyhow::Error::from(SnowDayError::config("Regional factor must be greater than 0"))
            .context("Failed to load configuration");
        assert_eq!(
            user_hint(&err).as_deref(),
            Some("Configuration error. Please check your config file.")
        );

        let plain = anyhow::anyhow!("something else");
        assert!(user_hint(&plain).is_none());
    }

    #[test]
    fn test_invalid_config_file_fails_with_hint() {
        let path = std::env::temp_dir().join(format!("snowday-main-{}.toml", std::process::id()));
        std::fs::write(&path, "[scoring]\nregional_factor = 9.0\n").expect("write config");

        let cli = Cli::try_parse_from([
            "snowday",
            "--config",
            path.to_str().expect("utf-8 path"),
            "score",
            "-t",
            "0",
        ])
        .expect("valid arguments");
        let err = run(cli).expect_err("regional factor out of range");
        let _ = std::fs::remove_file(&path);

        assert!(format!("{err:#}").contains("Regional factor"));
        assert!(user_hint(&err).is_some_and(|hint| hint.contains("config file")));
    }

    #[test]
    fn test_factor_bar() {
        assert_eq!(factor_bar(0.0), "░░░░░░░░░░");
        assert_eq!(factor_bar(0.7), "███████░░░");
        assert_eq!(factor_bar(1.0), "██████████");
        assert_eq!(factor_bar(3.0).chars().count(), BAR_WIDTH);
    }

    #[test]
    fn test_timing_description() {
        assert_eq!(timing_description(Timing::EarlyMorning), "Early Morning (4 AM - 8 AM)");
        assert_eq!(timing_description(Timing::Unknown), "Unknown");
    }

    #[test]
    fn test_report_json_shape() {
        let observation = WeatherObservation::new(-8.0, 6.0, 22.0, Timing::Overnight);
        let result = Scorer::default().score(&observation);
        let report = Report::new(None, None, observation, result);

        let json = serde_json::to_value(&report).expect("serialize");
        assert_eq!(json["probability"], 100.0);
        assert_eq!(json["likelihood"], "almost-certain");
        assert_eq!(json["breakdown"]["snowfallFactor"], 28.0);
        assert!(json.get("postalCode").is_none());
    }
}
