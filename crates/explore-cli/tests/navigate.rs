//! Integration tests for applying setters from the command line.

use explore_cli::navigate::{NavigateRequest, navigate};
use explore_cli::summary::DecodeReport;
use explore_cli::values::{parse_qc_filter, parse_variant};
use explore_model::{
    AnalysisMode, HostSelector, LocationSelector, QcSelector, SamplingStrategy,
};
use explore_url::{ExploreStateCodec, Location, Navigator};

fn loc(path: &str) -> Location {
    Location::parse(path).unwrap()
}

#[test]
fn test_navigate_completes_partial_start() {
    let codec = ExploreStateCodec::default();
    let outcome = navigate(&codec, loc("/explore/Germany"), &NavigateRequest::default()).unwrap();
    assert_eq!(
        outcome.history.current(),
        loc("/explore/Germany/AllSamples/Past6M")
    );
    assert_eq!(outcome.history.entries().len(), 2);
}

#[test]
fn test_navigate_applies_setters_in_order() {
    let codec = ExploreStateCodec::default();
    let request = NavigateRequest {
        location: Some(LocationSelector::country("Switzerland").unwrap()),
        sampling_strategy: Some(SamplingStrategy::Surveillance),
        variants: vec![parse_variant("pangoLineage=B.1.1.7").unwrap()],
        analysis_mode: Some(AnalysisMode::CompareToBaseline),
        host: Some(HostSelector::new(["Human", "Bat"])),
        qc: vec![parse_qc_filter("OverallScore=:29").unwrap()],
        ..NavigateRequest::default()
    };
    let outcome = navigate(&codec, loc("/explore/World/AllSamples/Past6M"), &request).unwrap();
    insta::assert_snapshot!(
        outcome.history.current(),
        @"/explore/Switzerland/Surveillance/Past6M/variants?pangoLineage=B.1.1.7&analysisMode=CompareToBaseline&host=Human%2CBat&nextcladeQcOverallScoreTo=29&"
    );
    // start, location, sampling strategy, variants, host and QC
    assert_eq!(outcome.history.entries().len(), 5);
    assert_eq!(outcome.url.state.qc, QcSelector::good());
    assert_eq!(outcome.url.state.host, HostSelector::new(["Bat", "Human"]));
}

#[test]
fn test_navigate_merges_qc_with_existing_bounds() {
    let codec = ExploreStateCodec::default();
    let request = NavigateRequest {
        qc: vec![parse_qc_filter("StopCodonsScore=1:").unwrap()],
        ..NavigateRequest::default()
    };
    let outcome = navigate(
        &codec,
        loc("/explore/World/AllSamples/Past6M?nextcladeQcOverallScoreTo=29"),
        &request,
    )
    .unwrap();
    let qc: Vec<_> = outcome.url.state.qc.iter().map(|(metric, _)| metric).collect();
    assert_eq!(qc.len(), 2);
}

#[test]
fn test_navigate_rejects_foreign_urls() {
    let codec = ExploreStateCodec::default();
    let err = navigate(&codec, loc("/about"), &NavigateRequest::default()).unwrap_err();
    assert_eq!(err.to_string(), "not an explore URL");
}

#[test]
fn test_decode_report_json() {
    let codec = ExploreStateCodec::default();
    let url = codec
        .decode(&loc("/explore/Europe/AllSamples/Y2021?host=Bat"))
        .valid()
        .unwrap();
    let json = serde_json::to_value(DecodeReport::valid(&url)).unwrap();
    assert_eq!(json["status"], "valid");
    assert_eq!(json["location"], "/explore/Europe/AllSamples/Y2021?host=Bat");
    assert_eq!(json["state"]["location"]["Region"], "Europe");
    assert_eq!(json["state"]["host"], serde_json::json!(["Bat"]));
    assert_eq!(
        json["overviewPageUrl"],
        "/explore/Europe/AllSamples/Y2021/variants?host=Bat"
    );

    let report = DecodeReport::NoMatch {
        location: "/about".to_string(),
    };
    insta::assert_snapshot!(
        serde_json::to_string(&report).unwrap(),
        @r#"{"status":"noMatch","location":"/about"}"#
    );
}
