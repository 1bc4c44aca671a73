//! Serialized shapes of the model types, as used by defaults files.

use chrono::NaiveDate;

use explore_model::{
    BoundSide, DateRangePreset, DateRangeSelector, ExploreDefaults, HostSelector,
    LocationSelector, ModelError, QcMetric, QcSelector, Region,
};

#[test]
fn defaults_json_shape() {
    insta::assert_json_snapshot!(ExploreDefaults::default(), @r#"
    {
      "location": "World",
      "samplingStrategy": "AllSamples",
      "dateRange": {
        "Preset": "Past6M"
      },
      "analysisMode": "Single",
      "host": [
        "Human"
      ]
    }
    "#);
}

#[test]
fn defaults_deserialize_from_partial_document() {
    let defaults: ExploreDefaults = serde_json::from_str(
        r#"{ "location": { "Region": "Europe" }, "dateRange": { "Preset": "Past3M" } }"#,
    )
    .unwrap();
    assert_eq!(defaults.location, LocationSelector::region(Region::Europe));
    assert_eq!(
        defaults.date_range,
        DateRangeSelector::Preset(DateRangePreset::Past3M)
    );
    assert!(defaults.host.is_default());
}

#[test]
fn qc_selector_serializes_as_map() {
    let qc = QcSelector::good().with_bound(QcMetric::StopCodonsScore, BoundSide::From, Some(1));
    let json = serde_json::to_value(&qc).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "OverallScore": { "from": null, "to": 29 },
            "StopCodonsScore": { "from": 1, "to": null },
        })
    );
}

#[test]
fn host_selector_serializes_as_list() {
    let host = HostSelector::new(["Human", "Bat"]);
    assert_eq!(
        serde_json::to_string(&host).unwrap(),
        r#"["Human","Bat"]"#
    );
}

#[test]
fn host_selector_deserializes_through_constructor() {
    let empty: HostSelector = serde_json::from_str("[]").unwrap();
    assert!(empty.is_default());
    assert_eq!(empty.hosts(), ["Human"]);

    let repeated: HostSelector = serde_json::from_str(r#"["Human","Human"]"#).unwrap();
    assert!(repeated.is_default());

    let mixed: HostSelector = serde_json::from_str(r#"[" Bat","","Bat","Mink"]"#).unwrap();
    assert_eq!(mixed.hosts(), ["Bat", "Mink"]);
}

#[test]
fn presets_resolve_relative_to_today() {
    let today = NaiveDate::from_ymd_opt(2021, 8, 31).unwrap();
    let bounds = DateRangeSelector::from(DateRangePreset::Past6M).resolve(today);
    assert_eq!(bounds.from, NaiveDate::from_ymd_opt(2021, 2, 28));
    assert_eq!(bounds.to, Some(today));
    assert!(bounds.contains(NaiveDate::from_ymd_opt(2021, 5, 1).unwrap()));
    assert!(!bounds.contains(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap()));
}

#[test]
fn model_errors_render() {
    insta::assert_snapshot!(
        LocationSelector::country("Asia").unwrap_err(),
        @"'Asia' is reserved and cannot be used as a country name"
    );
    let err = DateRangeSelector::explicit(
        NaiveDate::from_ymd_opt(2021, 3, 1).unwrap(),
        NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
    )
    .unwrap_err();
    assert_eq!(
        err,
        ModelError::InvertedDateRange {
            from: "2021-03-01".to_string(),
            to: "2021-01-01".to_string(),
        }
    );
}
