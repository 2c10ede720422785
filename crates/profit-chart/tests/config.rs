// File: crates/profit-chart/tests/config.rs
// Purpose: Chart config shape and serialized schema checks.

use profit_chart::{ChartConfig, ProfitRecord};

fn sample() -> Vec<ProfitRecord> {
    vec![
        ProfitRecord::new("Jan", 0.0, 100.0),
        ProfitRecord::new("Feb", 50.0, 150.0),
    ]
}

#[test]
fn profit_config_has_one_line_dataset() {
    let config = ChartConfig::profit(&sample());
    assert_eq!(config.chart_type, "line");
    assert_eq!(config.data.datasets.len(), 1);
    let ds = &config.data.datasets[0];
    assert_eq!(ds.label, "Profit");
    assert_eq!(config.data.labels.len(), ds.data.len());
}

#[test]
fn total_profit_config_uses_series_name() {
    let config = ChartConfig::total_profit(&sample());
    assert_eq!(config.data.datasets[0].label, "Total Profit");
    assert_eq!(config.data.labels, vec!["Jan", "Feb"]);
    assert_eq!(config.data.datasets[0].data, vec![100.0, 150.0]);
}

#[test]
fn serialized_config_matches_collaborator_schema() {
    let config = ChartConfig::profit(&sample());
    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["type"], "line");
    assert_eq!(json["data"]["labels"][0], "Feb");
    let ds = &json["data"]["datasets"][0];
    assert_eq!(ds["label"], "Profit");
    assert_eq!(ds["data"][0], 50.0);
    // Field name must be camelCase for the charting collaborator.
    assert!(ds.get("backgroundColor").is_some());
    assert!(ds.get("background_color").is_none());
}

#[test]
fn palettes_carry_rgba_fill_hints() {
    let config = ChartConfig::total_profit(&sample());
    let colors = &config.data.datasets[0].background_color;
    assert_eq!(colors.len(), 5);
    assert!(colors.iter().all(|c| c.starts_with("rgba(")));

    let config = ChartConfig::profit(&sample());
    assert_eq!(config.data.datasets[0].background_color.len(), 6);
}

#[test]
fn empty_source_serializes_to_empty_arrays() {
    let config = ChartConfig::profit(&[]);
    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["data"]["labels"].as_array().unwrap().len(), 0);
    assert_eq!(json["data"]["datasets"][0]["data"].as_array().unwrap().len(), 0);
}
