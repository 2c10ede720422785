// File: crates/demo/src/main.rs
// Summary: Demo loads a profit report CSV and writes both chart configs as JSON.

use anyhow::{Context, Result};
use chrono::DateTime;
use profit_chart::{draw_profit, draw_total_profit, JsonWriter, ProfitRecord};
use std::fs::File;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let raw = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "profit_report.csv".to_string());
    let path = Path::new(&raw);

    let records = load_profit_csv(path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    println!("Loaded {} records", records.len());

    if records.is_empty() {
        anyhow::bail!("no records loaded — check headers/delimiter.");
    }

    let out_total = out_name_with(path, "total_profit")?;
    let mut target = JsonWriter::new(File::create(&out_total)?);
    draw_total_profit(&mut target, &records)?;
    println!("Wrote {}", out_total.display());

    let out_profit = out_name_with(path, "profit")?;
    let mut target = JsonWriter::new(File::create(&out_profit)?);
    draw_profit(&mut target, &records)?;
    println!("Wrote {}", out_profit.display());

    Ok(())
}

/// Produce output file name like target/out/chart_<stem>_<suffix>.json
fn out_name_with(input: &Path, suffix: &str) -> Result<PathBuf> {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let out_dir = PathBuf::from("target/out");
    std::fs::create_dir_all(&out_dir)?;
    Ok(out_dir.join(format!("chart_{}_{}.json", stem, suffix)))
}

/// Load a profit report CSV into ProfitRecord vec. Headers are matched
/// case-insensitively; rows missing a numeric field are skipped.
fn load_profit_csv(path: &Path) -> Result<Vec<ProfitRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();

    let idx = |names: &[&str]| -> Option<usize> {
        for (i, h) in headers.iter().enumerate() {
            for want in names {
                if h == want {
                    return Some(i);
                }
            }
        }
        None
    };

    let i_time = idx(&["time", "timestamp", "date", "period"]);
    let i_profit = idx(&["profit", "p"]);
    let i_total = idx(&["totalprofit", "total_profit", "total"]);

    if i_profit.is_none() || i_total.is_none() {
        println!("Warning: could not find profit/totalprofit columns.");
    }

    let mut out = Vec::new();
    let mut row_index = 0_usize;

    for rec in rdr.records() {
        let rec = rec?;
        let parse = |i: Option<usize>| -> Option<f64> {
            i.and_then(|ix| rec.get(ix)).and_then(|s| s.trim().parse::<f64>().ok())
        };

        let time = match i_time.and_then(|ix| rec.get(ix)) {
            Some(raw) => period_label(raw),
            None => row_index.to_string(),
        };
        row_index += 1;

        if let (Some(profit), Some(total_profit)) = (parse(i_profit), parse(i_total)) {
            out.push(ProfitRecord::new(time, profit, total_profit));
        }
    }
    Ok(out)
}

/// Turn a raw time cell into a period label. Epoch seconds/millis are
/// formatted as UTC datetimes; anything else passes through verbatim.
fn period_label(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(n) = raw.parse::<i64>() {
        let secs = if n > 10_i64.pow(12) { n / 1000 } else { n };
        if secs > 10_i64.pow(9) {
            if let Some(dt) = DateTime::from_timestamp(secs, 0) {
                return dt.format("%Y-%m-%d %H:%M").to_string();
            }
        }
    }
    raw.to_string()
}
