//! Advertising dataset loading.

use ndarray::{Array1, Array2};
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::domain::{Feature, TARGET_COLUMN};
use crate::error::{AdSalesError, Result};

/// Feature matrix (`[TV, Radio, Newspaper]` columns) and Sales targets
#[derive(Debug, Clone)]
pub struct Dataset {
    pub features: Array2<f64>,
    pub targets: Array1<f64>,
}

impl Dataset {
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = match std::fs::File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(AdSalesError::DatasetNotFound(path.to_path_buf()));
            }
            Err(e) => return Err(e.into()),
        };

        let dataset = Self::from_reader(file)?;
        debug!(path = %path.display(), rows = dataset.len(), "loaded dataset");
        Ok(dataset)
    }

    /// Parse CSV with a header row.
    ///
    /// Columns are located by name, so order does not matter and extra
    /// columns (such as a leading row index) are ignored.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let column_index = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| AdSalesError::MissingColumn(name.to_string()))
        };

        let feature_idx = Feature::ALL
            .iter()
            .map(|f| column_index(f.as_str()))
            .collect::<Result<Vec<_>>>()?;
        let target_idx = column_index(TARGET_COLUMN)?;

        let mut features = Vec::new();
        let mut targets = Vec::new();
        for (i, record) in rdr.records().enumerate() {
            let record = record?;
            let row = i + 1;
            let cell = |idx: usize, column: &str| -> Result<f64> {
                let raw = record.get(idx).unwrap_or("");
                match raw.parse::<f64>() {
                    Ok(v) if v.is_finite() => Ok(v),
                    _ => Err(AdSalesError::InvalidValue {
                        row,
                        column: column.to_string(),
                        value: raw.to_string(),
                    }),
                }
            };

            for (feature, idx) in Feature::ALL.iter().zip(&feature_idx) {
                features.push(cell(*idx, feature.as_str())?);
            }
            targets.push(cell(target_idx, TARGET_COLUMN)?);
        }

        if targets.is_empty() {
            return Err(AdSalesError::EmptyDataset);
        }

        let n_rows = targets.len();
        let features = Array2::from_shape_vec((n_rows, Feature::ALL.len()), features)
            .map_err(|e| AdSalesError::Internal(format!("feature matrix shape: {e}")))?;

        Ok(Self {
            features,
            targets: Array1::from(targets),
        })
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
