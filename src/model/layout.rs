// src/model/layout.rs
//
// The fixed table grid and every screen region of the 1280x720 canvas.
// Pure geometry: no drawing, no state.

use super::elements::{self, Element};

pub const CANVAS_WIDTH: f64 = 1280.0;
pub const CANVAS_HEIGHT: f64 = 720.0;

pub const CELL_SIZE: f64 = 53.0;
pub const GRID_PADDING: f64 = 4.0;
pub const TABLE_OFFSET_X: f64 = 80.0;

// Cell stride (size + padding)
const STRIDE: f64 = CELL_SIZE + GRID_PADDING;

/// Grid of symbol slots. "" is a blank slot; "*", "#", "*La" and "#Ac"
/// are row markers that link the main table to the lanthanide/actinide
/// sub-rows. Markers are not elements: they never draw and never hit.
pub static TABLE_LAYOUT: &[&[&str]] = &[
    &["H", "", "", "", "", "", "", "", "", "", "", "", "", "", "", "", "", "He"],
    &["Li", "Be", "", "", "", "", "", "", "", "", "", "", "B", "C", "N", "O", "F", "Ne"],
    &["Na", "Mg", "", "", "", "", "", "", "", "", "", "", "Al", "Si", "P", "S", "Cl", "Ar"],
    &["K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As", "Se", "Br", "Kr"],
    &["Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In", "Sn", "Sb", "Te", "I", "Xe"],
    &["Cs", "Ba", "La", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl", "Pb", "Bi", "Po", "At", "Rn"],
    &["Fr", "Ra", "Ac", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg", "Cn", "Nh", "Fl", "Mc", "Lv", "Ts", "Og"],
    &["", "", "*", "", "", "", "", "", "", "", "", "", "", "", "", "", "", ""],
    &["", "", "#", "", "", "", "", "", "", "", "", "", "", "", "", "", "", ""],
    &["", "", "*La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb", "Dy", "Ho", "Er", "Tm", "Yb", "Lu", ""],
    &["", "", "#Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk", "Cf", "Es", "Fm", "Md", "No", "Lr", ""],
];

/// Axis-aligned canvas rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Region {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }
}

// Fixed interaction regions on the 1280x720 canvas
pub const MERGE_AREA: Region = Region::new(CANVAS_WIDTH - 200.0, CANVAS_HEIGHT - 150.0, 180.0, 100.0);
pub const SHELL_BOX: Region = Region::new(CANVAS_WIDTH - 200.0, CANVAS_HEIGHT - 260.0, 180.0, 100.0);
pub const MERGE_BUTTON: Region = Region::new(CANVAS_WIDTH - 200.0, CANVAS_HEIGHT - 40.0, 180.0, 30.0);
pub const INFO_PANEL: Region = Region::new(10.0, CANVAS_HEIGHT - 150.0, 300.0, 140.0);

/// Top-left corner of a grid cell.
pub fn cell_origin(row: usize, col: usize) -> (f64, f64) {
    (
        col as f64 * STRIDE + GRID_PADDING + TABLE_OFFSET_X,
        row as f64 * STRIDE + GRID_PADDING,
    )
}

/// The element under a canvas position, if any.
///
/// The whole cell stride counts as the cell (the padding gap is not
/// excluded). Blank slots and marker cells resolve to None.
pub fn element_at(x: f64, y: f64) -> Option<&'static Element> {
    let col = ((x - TABLE_OFFSET_X) / STRIDE).floor();
    let row = (y / STRIDE).floor();
    if col < 0.0 || row < 0.0 {
        return None;
    }

    let (row, col) = (row as usize, col as usize);
    let symbol = TABLE_LAYOUT.get(row)?.get(col)?;
    elements::get(symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_shape() {
        assert_eq!(TABLE_LAYOUT.len(), 11);
        for row in TABLE_LAYOUT {
            assert_eq!(row.len(), 18);
        }

        // Every element appears exactly once: La and Ac sit in the main
        // table, their sub-row slots are the "*La"/"#Ac" markers
        let placed: Vec<&str> = TABLE_LAYOUT
            .iter()
            .flat_map(|r| r.iter())
            .filter(|s| elements::get(s).is_some())
            .copied()
            .collect();
        assert_eq!(placed.len(), 118);
        let unique: std::collections::HashSet<&str> = placed.iter().copied().collect();
        assert_eq!(unique.len(), placed.len());
    }

    #[test]
    fn test_hit_center_of_cell() {
        let (x, y) = cell_origin(0, 0);
        let e = element_at(x + CELL_SIZE / 2.0, y + CELL_SIZE / 2.0).unwrap();
        assert_eq!(e.symbol, "H");

        let (x, y) = cell_origin(3, 7);
        let e = element_at(x + 1.0, y + 1.0).unwrap();
        assert_eq!(e.symbol, "Fe");
    }

    #[test]
    fn test_blank_and_marker_slots_miss() {
        // Row 0 col 5 is a deliberately blank slot
        let (x, y) = cell_origin(0, 5);
        assert!(element_at(x + 10.0, y + 10.0).is_none());

        // Marker rows
        let (x, y) = cell_origin(7, 2); // "*"
        assert!(element_at(x + 10.0, y + 10.0).is_none());
        let (x, y) = cell_origin(9, 2); // "*La"
        assert!(element_at(x + 10.0, y + 10.0).is_none());
    }

    #[test]
    fn test_outside_grid_misses() {
        // Left of the table offset
        assert!(element_at(5.0, 30.0).is_none());
        // Below the last row
        assert!(element_at(100.0, CANVAS_HEIGHT - 10.0).is_none());
        // Merge area corner is far right of the populated columns
        assert!(element_at(MERGE_AREA.x + 5.0, MERGE_AREA.y + 5.0).is_none());
    }

    #[test]
    fn test_region_contains() {
        let r = Region::new(10.0, 10.0, 20.0, 20.0);
        assert!(r.contains(10.0, 10.0));
        assert!(r.contains(29.9, 29.9));
        assert!(!r.contains(30.0, 30.0));
        assert!(!r.contains(9.9, 15.0));
    }
}
