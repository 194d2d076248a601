use std::fs::File;
use std::io;

use super::DataRow;

/// Parses a headerless CSV of `symbol,value` rows. Blank lines and `#`
/// comment lines are skipped; anything else malformed is an error naming
/// the row.
pub fn parse(path: &str) -> io::Result<Vec<DataRow>> {
    let file = File::open(path)?;
    parse_reader(file)
}

fn parse_reader<R: io::Read>(input: R) -> io::Result<Vec<DataRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(input);

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record =
            record.map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;

        // A lone empty field is what the csv crate yields for blank lines
        if record.len() == 0 || (record.len() == 1 && record[0].is_empty()) {
            continue;
        }

        if record.len() < 2 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("row {}: expected 'symbol,value'", i + 1),
            ));
        }

        let value: f64 = record[1].parse().map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("row {}: '{}' is not a number", i + 1, &record[1]),
            )
        })?;

        rows.push(DataRow {
            symbol: record[0].to_string(),
            value,
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_symbol_value_pairs() {
        let rows = parse_reader("Fe,1.5\nO,2\nce,-0.25\n".as_bytes()).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].symbol, "Fe");
        assert_eq!(rows[0].value, 1.5);
        assert_eq!(rows[2].symbol, "ce");
        assert_eq!(rows[2].value, -0.25);
    }

    #[test]
    fn test_skips_comments_and_blank_lines() {
        let rows = parse_reader("# first ionization energy\n\nH, 1312.0\n".as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].symbol, "H");
        assert_eq!(rows[0].value, 1312.0);
    }

    #[test]
    fn test_non_numeric_value_is_an_error() {
        let err = parse_reader("Fe,abc\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("row 1"), "{}", err);
        assert!(err.to_string().contains("abc"), "{}", err);
    }

    #[test]
    fn test_missing_value_field_is_an_error() {
        let err = parse_reader("Fe\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("symbol,value"), "{}", err);
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let rows = parse_reader("Fe,3.0,ignored\n".as_bytes()).unwrap();
        assert_eq!(rows, vec![DataRow { symbol: "Fe".into(), value: 3.0 }]);
    }
}
