use anyhow::{Context, Result};
use tracing::info;

use explore_cli::navigate::{NavigateRequest, navigate};
use explore_cli::summary::{
    DecodeReport, defaults_rows, link_rows, print_history, print_rows, state_rows,
};
use explore_model::{ExploreDefaults, HostSelector};
use explore_url::{DecodeResult, ExploreStateCodec, Navigator};

use crate::cli::{DecodeArgs, NavigateArgs};

/// Exit code for URLs outside the explore routes.
pub const EXIT_NO_MATCH: i32 = 2;

pub fn run_decode(codec: &ExploreStateCodec, args: &DecodeArgs) -> Result<i32> {
    let location = args.url.to_string();
    let result = codec.decode(&args.url);
    if args.json {
        let report = match &result {
            DecodeResult::Valid(url) => DecodeReport::valid(url),
            DecodeResult::Redirect(target) => DecodeReport::Redirect {
                location,
                target: target.to_string(),
            },
            DecodeResult::NoMatch => DecodeReport::NoMatch { location },
        };
        let json = serde_json::to_string_pretty(&report).context("serialize decode report")?;
        println!("{json}");
    } else {
        match &result {
            DecodeResult::Valid(url) => {
                print_rows("State", &state_rows(&url.state));
                print_rows("Link", &link_rows(url));
            }
            DecodeResult::Redirect(target) => println!("redirect: {target}"),
            DecodeResult::NoMatch => println!("not an explore URL: {location}"),
        }
    }
    Ok(match result {
        DecodeResult::NoMatch => EXIT_NO_MATCH,
        DecodeResult::Valid(_) | DecodeResult::Redirect(_) => 0,
    })
}

pub fn run_navigate(codec: &ExploreStateCodec, args: &NavigateArgs) -> Result<()> {
    let request = NavigateRequest {
        location: args.location.clone(),
        sampling_strategy: args.sampling_strategy,
        date_range: args.date_range,
        variants: args.variants.clone(),
        analysis_mode: args.analysis_mode,
        host: (!args.host.is_empty()).then(|| HostSelector::new(args.host.iter())),
        qc: args.qc.clone(),
    };
    let outcome = navigate(codec, args.url.clone(), &request)?;
    info!(
        entries = outcome.history.entries().len(),
        "navigation finished"
    );
    println!("{}", outcome.history.current());
    if args.history {
        print_history(outcome.history.entries(), outcome.history.index());
    }
    Ok(())
}

pub fn run_defaults(defaults: &ExploreDefaults) {
    print_rows("Default", &defaults_rows(defaults));
}
