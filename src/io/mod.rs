// src/io/mod.rs
pub mod csv_data;
pub mod xlsx;

use crate::model::elements;
use log::debug;
use std::collections::HashMap;
use std::io;

#[derive(Clone, Debug, PartialEq)]
pub struct DataRow {
    pub symbol: String,
    pub value: f64,
}

/// User-supplied dataset: one numeric value per element symbol.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    pub rows: Vec<DataRow>,
}

impl Dataset {
    /// Lowercased symbol -> value join table. Duplicate symbols keep the
    /// last row, matching input order.
    pub fn value_map(&self) -> HashMap<String, f64> {
        let mut map = HashMap::with_capacity(self.rows.len());
        for row in &self.rows {
            map.insert(row.symbol.to_ascii_lowercase(), row.value);
        }
        map
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.symbol.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(|r| r.value)
    }
}

pub fn load_dataset(path: &str) -> io::Result<Dataset> {
    let p = path.to_lowercase();

    let rows = if p.ends_with(".xlsx") || p.ends_with(".xls") || p.ends_with(".ods") {
        xlsx::parse(path)?
    } else {
        // Fallback to CSV for unknown extensions
        csv_data::parse(path)?
    };

    let dataset = Dataset { rows };
    validate(&dataset)?;
    Ok(dataset)
}

/// Every row must name a real element; an empty dataset cannot be scaled.
fn validate(dataset: &Dataset) -> io::Result<()> {
    if dataset.rows.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "no data rows found",
        ));
    }

    for (i, row) in dataset.rows.iter().enumerate() {
        match elements::by_symbol(&row.symbol) {
            Some(el) => debug!("row {}: {} = {}", i + 1, el.name, row.value),
            None => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("row {}: unknown element symbol '{}'", i + 1, row.symbol),
                ));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(symbol: &str, value: f64) -> DataRow {
        DataRow {
            symbol: symbol.to_string(),
            value,
        }
    }

    #[test]
    fn test_value_map_is_lowercased_and_last_wins() {
        let dataset = Dataset {
            rows: vec![row("Fe", 1.0), row("O", 2.0), row("FE", 7.5)],
        };
        let map = dataset.value_map();
        assert_eq!(map.len(), 2);
        assert_eq!(map["fe"], 7.5);
        assert_eq!(map["o"], 2.0);
    }

    #[test]
    fn test_validate_rejects_unknown_symbols() {
        let dataset = Dataset {
            rows: vec![row("Fe", 1.0), row("Xx", 2.0)],
        };
        let err = validate(&dataset).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().contains("Xx"), "{}", err);
    }

    #[test]
    fn test_validate_rejects_empty_dataset() {
        assert!(validate(&Dataset::default()).is_err());
    }
}
