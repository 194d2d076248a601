use crate::model::elements::{by_symbol, Element, ELEMENTS};

/// Number of columns in the standard table.
pub const GROUP_COUNT: u8 = 18;

/// Visual row indices (top to bottom). Periods 1-7 occupy rows 0-6; in
/// extended mode row 7 stays blank as a spacer and rows 8/9 hold the
/// relocated lanthanide/actinide series.
pub const LANTHANIDE_ROW: u8 = 8;
pub const ACTINIDE_ROW: u8 = 9;

/// First column of the relocated series. Fourteen elements packed into
/// columns 4-17, roughly centered under the main table.
const SERIES_START_COL: u8 = 4;

pub fn is_lanthanide(number: u8) -> bool {
    (57..=70).contains(&number)
}

pub fn is_actinide(number: u8) -> bool {
    (89..=102).contains(&number)
}

/// One placed element cell: 1-based column, 0-based visual row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub element: &'static Element,
    pub col: u8,
    pub row: u8,
}

#[derive(Debug, Clone)]
pub struct TableLayout {
    pub cells: Vec<Cell>,
    pub extended: bool,
}

impl TableLayout {
    /// Visual row count, spacer row included.
    pub fn rows(&self) -> u8 {
        if self.extended {
            ACTINIDE_ROW + 1
        } else {
            7
        }
    }
}

/// Builds the cell layout. Elements with a group land at (group, period);
/// the two ungrouped series are only placed in extended mode.
pub fn build(extended: bool) -> TableLayout {
    let mut cells = Vec::with_capacity(ELEMENTS.len());

    for el in &ELEMENTS {
        if let Some(group) = el.group {
            cells.push(Cell {
                element: el,
                col: group,
                row: el.period - 1,
            });
        } else if extended {
            let (row, start) = if is_lanthanide(el.number) {
                (LANTHANIDE_ROW, 57)
            } else {
                (ACTINIDE_ROW, 89)
            };
            cells.push(Cell {
                element: el,
                col: SERIES_START_COL + (el.number - start),
                row,
            });
        }
    }

    TableLayout { cells, extended }
}

/// True when any of the symbols names a lanthanide or actinide. Drives
/// the auto-enable of the extended rows when the flag is absent.
pub fn wants_extended<'a>(symbols: impl IntoIterator<Item = &'a str>) -> bool {
    symbols
        .into_iter()
        .filter_map(by_symbol)
        .any(|el| is_lanthanide(el.number) || is_actinide(el.number))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_extended_layout_places_all_118() {
        let layout = build(true);
        assert_eq!(layout.cells.len(), 118);
        assert_eq!(layout.rows(), 10);

        // Every element gets exactly one distinct coordinate
        let coords: HashSet<(u8, u8)> = layout.cells.iter().map(|c| (c.col, c.row)).collect();
        assert_eq!(coords.len(), 118);
        for cell in &layout.cells {
            assert!((1..=GROUP_COUNT).contains(&cell.col));
            assert!(cell.row < layout.rows());
        }
    }

    #[test]
    fn test_compact_layout_drops_the_f_block() {
        let layout = build(false);
        assert_eq!(layout.cells.len(), 90);
        assert_eq!(layout.rows(), 7);
        assert!(layout
            .cells
            .iter()
            .all(|c| !is_lanthanide(c.element.number) && !is_actinide(c.element.number)));
    }

    #[test]
    fn test_extended_toggle_only_moves_the_series() {
        let compact = build(false);
        let extended = build(true);

        // All 90 grouped placements are identical in both layouts
        for cell in &compact.cells {
            assert!(
                extended.cells.contains(cell),
                "{} moved when the series rows were enabled",
                cell.element.symbol
            );
        }

        // La-Yb packed left to right into columns 4-17 on their own row
        let la_row: Vec<&Cell> = extended
            .cells
            .iter()
            .filter(|c| c.row == LANTHANIDE_ROW)
            .collect();
        assert_eq!(la_row.len(), 14);
        assert_eq!(la_row[0].element.symbol, "La");
        assert_eq!(la_row[0].col, 4);
        assert_eq!(la_row[13].element.symbol, "Yb");
        assert_eq!(la_row[13].col, 17);

        // Ac-No likewise
        let ac_row: Vec<&Cell> = extended
            .cells
            .iter()
            .filter(|c| c.row == ACTINIDE_ROW)
            .collect();
        assert_eq!(ac_row.len(), 14);
        assert_eq!(ac_row[0].element.symbol, "Ac");
        assert_eq!(ac_row[13].element.symbol, "No");

        // Spacer row stays empty
        assert!(extended.cells.iter().all(|c| c.row != 7));
    }

    #[test]
    fn test_wants_extended() {
        assert!(wants_extended(["ce"]));
        assert!(wants_extended(["Fe", "U"]));
        assert!(!wants_extended(["Fe", "O", "Lu", "Lr"]));
        assert!(!wants_extended(Vec::<&str>::new()));
    }
}
