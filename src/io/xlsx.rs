use calamine::{open_workbook_auto, Data, Reader};
use log::debug;
use std::io;

use super::DataRow;

/// Reads `symbol | value` pairs from the first two columns of the first
/// sheet of a spreadsheet. Rows whose second cell is not numeric (header
/// rows, stray text) are skipped, the same way the plain-text parsers
/// skip column headers.
pub fn parse(path: &str) -> io::Result<Vec<DataRow>> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;

    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "workbook has no sheets"))?;

    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;

    let mut rows = Vec::new();
    for (i, row) in range.rows().enumerate() {
        let symbol = match row.first() {
            Some(Data::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
            _ => continue,
        };

        let value = match row.get(1) {
            Some(Data::Float(v)) => *v,
            Some(Data::Int(v)) => *v as f64,
            Some(Data::String(s)) => match s.trim().parse::<f64>() {
                Ok(v) => v,
                Err(_) => {
                    debug!("sheet '{}' row {}: skipping non-numeric '{}'", sheet, i + 1, s);
                    continue;
                }
            },
            _ => {
                debug!("sheet '{}' row {}: no value for '{}'", sheet, i + 1, symbol);
                continue;
            }
        };

        rows.push(DataRow { symbol, value });
    }

    Ok(rows)
}
