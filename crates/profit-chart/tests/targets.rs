// File: crates/profit-chart/tests/targets.rs
// Purpose: Render target injection and draw entry points.

use profit_chart::{draw_profit, draw_total_profit, CollectTarget, JsonWriter, ProfitRecord, RenderTarget};

fn sample() -> Vec<ProfitRecord> {
    vec![
        ProfitRecord::new("Jan", 0.0, 100.0),
        ProfitRecord::new("Feb", 50.0, 150.0),
    ]
}

#[test]
fn draw_hands_one_config_per_call() {
    let source = sample();
    let mut target = CollectTarget::new();
    draw_total_profit(&mut target, &source).unwrap();
    draw_profit(&mut target, &source).unwrap();

    assert_eq!(target.rendered.len(), 2);
    assert_eq!(target.rendered[0].data.datasets[0].label, "Total Profit");
    assert_eq!(target.rendered[1].data.datasets[0].label, "Profit");
}

#[test]
fn json_writer_emits_one_document_per_render() {
    let source = sample();
    let mut target = JsonWriter::new(Vec::new());
    draw_profit(&mut target, &source).unwrap();
    let bytes = target.into_inner();

    let text = String::from_utf8(bytes).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
    assert_eq!(parsed["type"], "line");
    assert_eq!(parsed["data"]["labels"][0], "Feb");
    assert!(text.ends_with('\n'));
}

#[test]
fn target_ids_are_stable() {
    assert_eq!(CollectTarget::new().id(), "collect");
    assert_eq!(JsonWriter::new(Vec::new()).id(), "json_writer");
}

#[test]
fn metric_selector_parses_both_spellings() {
    use profit_chart::Metric;
    assert_eq!("profit".parse::<Metric>().unwrap(), Metric::Profit);
    assert_eq!("total-profit".parse::<Metric>().unwrap(), Metric::TotalProfit);
    assert_eq!("TotalProfit".parse::<Metric>().unwrap(), Metric::TotalProfit);
    assert!("equity".parse::<Metric>().is_err());
}
