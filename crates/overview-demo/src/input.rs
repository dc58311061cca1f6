// File: crates/overview-demo/src/input.rs
// Summary: Monthly amount CSV loading (`month,amount` or a single amount column).

use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use overview_core::MONTHS;

/// Load one amount per row, January first.
pub fn load_monthly_csv(path: &Path) -> Result<Vec<f64>> {
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let values = parse_monthly(file).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    tracing::info!(path = %path.display(), months = values.len(), "loaded monthly series");
    Ok(values)
}

pub fn parse_monthly<R: Read>(reader: R) -> Result<Vec<f64>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(reader);

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    tracing::debug!(?headers, "csv headers");

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_month = idx(&["month", "mon", "period"]);
    let i_amount = match idx(&["amount", "value", "budget", "actual", "total"]) {
        Some(i) => i,
        None if headers.len() == 1 => 0,
        None => bail!("no amount column among headers {:?}", headers),
    };

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let raw = rec.get(i_amount).unwrap_or_default();
        let amount: f64 = raw
            .parse()
            .with_context(|| format!("row {}: amount '{}' is not a number", row + 1, raw))?;

        if let (Some(label), Some(expected)) = (i_month.and_then(|i| rec.get(i)), MONTHS.get(row)) {
            if !label.to_lowercase().starts_with(&expected.to_lowercase()) {
                tracing::warn!(row = row + 1, label, expected, "month label out of calendar order; using row position");
            }
        }
        out.push(amount);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_amount_columns() {
        let csv = "Month,Amount\nJan,100\nFeb, 95.5\nMar,-3\n";
        assert_eq!(parse_monthly(csv.as_bytes()).unwrap(), vec![100.0, 95.5, -3.0]);
    }

    #[test]
    fn single_unnamed_column() {
        let csv = "spend\n1\n2\n";
        assert_eq!(parse_monthly(csv.as_bytes()).unwrap(), vec![1.0, 2.0]);
    }

    #[test]
    fn bad_amount_names_the_row() {
        let csv = "month,amount\nJan,1\nFeb,lots\n";
        let err = parse_monthly(csv.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("row 2"), "{err:#}");
    }

    #[test]
    fn missing_amount_column() {
        let csv = "month,note\nJan,x\n";
        assert!(parse_monthly(csv.as_bytes()).is_err());
    }
}
