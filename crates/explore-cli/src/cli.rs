//! CLI argument definitions for the explore URL tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use explore_cli::values::{
    QcFilter, parse_date_range, parse_location, parse_qc_filter, parse_variant,
};
use explore_model::{AnalysisMode, DateRangeSelector, LocationSelector, SamplingStrategy, VariantSelector};
use explore_url::Location;

#[derive(Parser)]
#[command(
    name = "explore",
    version,
    about = "Decode and navigate variant explore URLs",
    long_about = "Decode and navigate variant explore URLs.\n\n\
                  URLs have the form /explore/<location>/<samplingStrategy>/<dateRange>\
                  [/variants]?<params> and may also be given as absolute URLs."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// JSON file with the default location, sampling strategy, date range,
    /// analysis mode and host.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Decode a URL into its explore state.
    Decode(DecodeArgs),

    /// Apply setters to a URL and print where they lead.
    Navigate(NavigateArgs),

    /// Print the effective defaults.
    Defaults,
}

#[derive(Args)]
pub struct DecodeArgs {
    /// Path such as /explore/World/AllSamples/Past6M, or an absolute URL.
    #[arg(value_name = "URL")]
    pub url: Location,

    /// Print the result as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct NavigateArgs {
    /// Starting URL. Incomplete explore paths are completed first.
    #[arg(value_name = "URL")]
    pub url: Location,

    /// New location: World, a region, a country, or country--division.
    #[arg(long = "location", value_parser = parse_location)]
    pub location: Option<LocationSelector>,

    /// New sampling strategy.
    #[arg(long = "sampling-strategy", value_name = "STRATEGY")]
    pub sampling_strategy: Option<SamplingStrategy>,

    /// New date range: a preset such as Past6M, or YYYY-MM-DD--YYYY-MM-DD.
    #[arg(long = "date-range", value_name = "RANGE", value_parser = parse_date_range)]
    pub date_range: Option<DateRangeSelector>,

    /// Variant to show, in query form (pangoLineage=B.1.1.7&aaMutations=S:E484K).
    ///
    /// Repeat to compare several variants. Replaces all variants in the URL.
    #[arg(long = "variant", value_name = "FIELDS", value_parser = parse_variant)]
    pub variants: Vec<VariantSelector>,

    /// New analysis mode.
    #[arg(long = "analysis-mode", value_name = "MODE")]
    pub analysis_mode: Option<AnalysisMode>,

    /// Hosts to include, comma separated.
    #[arg(long = "host", value_name = "HOST", value_delimiter = ',')]
    pub host: Vec<String>,

    /// QC bound such as OverallScore=:29. Either side may be empty.
    #[arg(long = "qc", value_name = "METRIC=FROM:TO", value_parser = parse_qc_filter)]
    pub qc: Vec<QcFilter>,

    /// Also print every history entry.
    #[arg(long = "history")]
    pub history: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn navigate_collects_repeated_flags() {
        let cli = Cli::try_parse_from([
            "explore",
            "navigate",
            "/explore/World/AllSamples/Past6M",
            "--variant",
            "pangoLineage=B.1.1.7",
            "--variant",
            "pangoLineage=B.1.351",
            "--host",
            "Human,Bat",
            "--qc",
            "OverallScore=:29",
            "--sampling-strategy",
            "Surveillance",
        ])
        .unwrap();
        let Command::Navigate(args) = cli.command else {
            panic!("expected navigate");
        };
        assert_eq!(args.variants.len(), 2);
        assert_eq!(args.host, ["Human", "Bat"]);
        assert_eq!(args.qc.len(), 1);
        assert_eq!(args.sampling_strategy, Some(SamplingStrategy::Surveillance));
    }
}
