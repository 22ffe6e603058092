// src/state.rs

use crate::config::Config;
use crate::model::compounds::{self, Compound};
use crate::model::elements::{self, Element};
use crate::model::layout::{self, MERGE_AREA, MERGE_BUTTON};

/// Pointer interaction phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging { symbol: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupKind {
    Success,
    Failure,
    Info,
}

/// A transient message shown over the canvas. While one is set, press
/// and release events are ignored; the UI clears it after the configured
/// duration.
#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    pub message: String,
    pub kind: PopupKind,
}

/// Everything the viewer window mutates, behind one struct so the event
/// handlers and the draw function share a single Rc<RefCell<AppState>>.
pub struct AppState {
    pub drag: DragState,
    pub merge_area: Vec<&'static str>,
    pub info_lines: Vec<String>,
    pub hover: Option<&'static Element>,
    pub pointer: (f64, f64),
    pub popup: Option<Popup>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            drag: DragState::Idle,
            merge_area: Vec::new(),
            info_lines: Vec::new(),
            hover: None,
            pointer: (0.0, 0.0),
            popup: None,
            config,
        }
    }

    /// Pointer press. Merge button first, then the table grid.
    pub fn press(&mut self, x: f64, y: f64) {
        if self.popup.is_some() {
            return;
        }
        self.pointer = (x, y);

        if MERGE_BUTTON.contains(x, y) {
            self.evaluate_merge();
            return;
        }

        if let Some(element) = layout::element_at(x, y) {
            self.drag = DragState::Dragging { symbol: element.symbol };
            self.info_lines = elements::info_lines(element);
        }
    }

    /// Pointer moved while the button is held.
    pub fn drag_to(&mut self, x: f64, y: f64) {
        if self.popup.is_some() {
            return;
        }
        self.pointer = (x, y);
    }

    /// Pointer release. Lands in the merge area -> the dragged symbol is
    /// appended; anywhere else -> an informational popup names the
    /// element and the drag is discarded.
    pub fn release(&mut self, x: f64, y: f64) {
        if self.popup.is_some() {
            return;
        }

        if let DragState::Dragging { symbol } = self.drag {
            self.drag = DragState::Idle;
            if MERGE_AREA.contains(x, y) {
                self.merge_area.push(symbol);
            } else if let Some(element) = elements::get(symbol) {
                self.popup = Some(Popup {
                    message: element.name.to_string(),
                    kind: PopupKind::Info,
                });
            }
        }
    }

    /// Hover bookkeeping for the tooltip.
    pub fn hover_at(&mut self, x: f64, y: f64) {
        if self.popup.is_some() {
            return;
        }
        self.pointer = (x, y);
        self.hover = layout::element_at(x, y);
    }

    /// Tests the merge area against the compound catalog. Success keeps
    /// the merge sequence and swaps the info panel to the compound;
    /// failure clears the sequence.
    pub fn evaluate_merge(&mut self) {
        match compounds::find_match(&self.merge_area) {
            Some(compound) => {
                self.popup = Some(Popup {
                    message: format!("Created {} ({})", compound.name, compound.formula),
                    kind: PopupKind::Success,
                });
                self.info_lines = compounds::info_lines(compound);
            }
            None => {
                self.popup = Some(Popup {
                    message: "No compound formed".to_string(),
                    kind: PopupKind::Failure,
                });
                self.merge_area.clear();
            }
        }
    }

    pub fn clear_popup(&mut self) {
        self.popup = None;
    }

    /// Element whose shell diagram is shown: the most recently merged.
    pub fn shell_element(&self) -> Option<&'static Element> {
        self.merge_area.last().and_then(|s| elements::get(s))
    }

    /// Compound the merge area currently forms, if any, without the
    /// popup side effects of `evaluate_merge`.
    pub fn current_match(&self) -> Option<&'static Compound> {
        compounds::find_match(&self.merge_area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::layout::{cell_origin, CELL_SIZE, MERGE_AREA, MERGE_BUTTON};

    fn state() -> AppState {
        AppState::new(Config::default())
    }

    fn cell_center(row: usize, col: usize) -> (f64, f64) {
        let (x, y) = cell_origin(row, col);
        (x + CELL_SIZE / 2.0, y + CELL_SIZE / 2.0)
    }

    fn merge_center() -> (f64, f64) {
        (MERGE_AREA.x + MERGE_AREA.w / 2.0, MERGE_AREA.y + MERGE_AREA.h / 2.0)
    }

    fn drag_into_merge(st: &mut AppState, row: usize, col: usize) {
        let (x, y) = cell_center(row, col);
        st.press(x, y);
        let (mx, my) = merge_center();
        st.release(mx, my);
    }

    #[test]
    fn test_press_on_cell_starts_drag() {
        let mut st = state();
        let (x, y) = cell_center(0, 0);
        st.press(x, y);

        assert_eq!(st.drag, DragState::Dragging { symbol: "H" });
        assert_eq!(st.info_lines[0], "Name: Hydrogen");
    }

    #[test]
    fn test_press_on_blank_slot_is_inert() {
        let mut st = state();
        let (x, y) = cell_center(0, 5);
        st.press(x, y);

        assert_eq!(st.drag, DragState::Idle);
        assert!(st.info_lines.is_empty());
    }

    #[test]
    fn test_drop_in_merge_area_appends() {
        let mut st = state();
        drag_into_merge(&mut st, 0, 0);

        assert_eq!(st.merge_area, vec!["H"]);
        assert_eq!(st.drag, DragState::Idle);
        assert!(st.popup.is_none());
    }

    #[test]
    fn test_drop_elsewhere_discards_and_pops() {
        let mut st = state();
        let (x, y) = cell_center(2, 0); // Na
        st.press(x, y);
        st.release(400.0, 400.0);

        assert!(st.merge_area.is_empty());
        assert_eq!(st.drag, DragState::Idle);
        let popup = st.popup.as_ref().unwrap();
        assert_eq!(popup.message, "Sodium");
        assert_eq!(popup.kind, PopupKind::Info);
    }

    #[test]
    fn test_merge_success_keeps_sequence() {
        let mut st = state();
        drag_into_merge(&mut st, 0, 0); // H
        drag_into_merge(&mut st, 1, 15); // O
        drag_into_merge(&mut st, 0, 0); // H

        let (bx, by) = (MERGE_BUTTON.x + 5.0, MERGE_BUTTON.y + 5.0);
        st.press(bx, by);

        let popup = st.popup.as_ref().unwrap();
        assert_eq!(popup.kind, PopupKind::Success);
        assert_eq!(popup.message, "Created Water (H2O)");
        assert_eq!(st.merge_area, vec!["H", "O", "H"]);
        assert_eq!(st.info_lines[1], "Formula: H2O");
        assert_eq!(st.shell_element().unwrap().symbol, "H");
    }

    #[test]
    fn test_merge_failure_clears_sequence() {
        let mut st = state();
        drag_into_merge(&mut st, 0, 0); // H
        drag_into_merge(&mut st, 1, 15); // O

        let (bx, by) = (MERGE_BUTTON.x + 5.0, MERGE_BUTTON.y + 5.0);
        st.press(bx, by);

        let popup = st.popup.as_ref().unwrap();
        assert_eq!(popup.kind, PopupKind::Failure);
        assert_eq!(popup.message, "No compound formed");
        assert!(st.merge_area.is_empty());
    }

    #[test]
    fn test_popup_suppresses_input() {
        let mut st = state();
        let (x, y) = cell_center(2, 0);
        st.press(x, y);
        st.release(400.0, 400.0); // info popup now showing

        // Further presses are ignored until the popup clears
        let (hx, hy) = cell_center(0, 0);
        st.press(hx, hy);
        assert_eq!(st.drag, DragState::Idle);

        st.clear_popup();
        st.press(hx, hy);
        assert_eq!(st.drag, DragState::Dragging { symbol: "H" });
    }

    #[test]
    fn test_hover_tracks_table_only() {
        let mut st = state();
        let (x, y) = cell_center(1, 13); // C
        st.hover_at(x, y);
        assert_eq!(st.hover.unwrap().symbol, "C");

        st.hover_at(5.0, 700.0);
        assert!(st.hover.is_none());
    }

    #[test]
    fn test_salt_scenario() {
        let mut st = state();
        drag_into_merge(&mut st, 2, 0); // Na
        drag_into_merge(&mut st, 2, 16); // Cl
        assert_eq!(st.current_match().unwrap().formula, "NaCl");

        st.press(MERGE_BUTTON.x + 1.0, MERGE_BUTTON.y + 1.0);
        assert_eq!(st.popup.as_ref().unwrap().message, "Created Sodium Chloride (NaCl)");

        // One more Na after the popup clears makes it a non-compound
        st.clear_popup();
        drag_into_merge(&mut st, 2, 0);
        st.press(MERGE_BUTTON.x + 1.0, MERGE_BUTTON.y + 1.0);
        assert_eq!(st.popup.as_ref().unwrap().kind, PopupKind::Failure);
        assert!(st.merge_area.is_empty());
    }
}
