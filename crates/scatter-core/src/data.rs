// File: crates/scatter-core/src/data.rs
// Summary: State dataset model and CSV loading with header-based column lookup.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// One parsed row of the state statistics dataset.
///
/// Numeric fields hold `NaN` when the source cell was not numeric; such a
/// row keeps rendering the rest of the chart and simply draws no mark.
#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    pub state: String,
    pub abbr: String,
    pub poverty: f64,
    pub healthcare: f64,
    pub obesity: f64,
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error("reading {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("column '{0}' not found in CSV header")]
    MissingColumn(&'static str),
}

/// Load the state dataset from `path`.
///
/// Columns are located by (lowercased) header name; columns beyond the five
/// required ones are ignored. I/O, CSV syntax, and missing-column problems
/// are errors; a malformed numeric cell is not (it becomes `NaN`).
pub fn load_states_csv(path: &Path) -> Result<Vec<DataPoint>, DataError> {
    let csv_err = |source: csv::Error| DataError::Csv { path: path.to_path_buf(), source };

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(csv_err)?;

    let headers = rdr
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    let find = |name: &'static str| -> Result<usize, DataError> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(DataError::MissingColumn(name))
    };

    let i_state = find("state")?;
    let i_abbr = find("abbr")?;
    let i_poverty = find("poverty")?;
    let i_healthcare = find("healthcare")?;
    let i_obesity = find("obesity")?;

    let text = |rec: &csv::StringRecord, ix: usize| -> String {
        rec.get(ix).unwrap_or("").trim().to_string()
    };
    let num = |rec: &csv::StringRecord, ix: usize| -> f64 {
        rec.get(ix)
            .and_then(|s| s.trim().parse::<f64>().ok())
            .unwrap_or(f64::NAN)
    };

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec.map_err(csv_err)?;
        out.push(DataPoint {
            state: text(&rec, i_state),
            abbr: text(&rec, i_abbr),
            poverty: num(&rec, i_poverty),
            healthcare: num(&rec, i_healthcare),
            obesity: num(&rec, i_obesity),
        });
    }
    Ok(out)
}
