// src/rendering/painter.rs
//
// All cairo drawing for the viewer canvas. Pure presentation: every
// function reads AppState, none mutates it.

use crate::model::elements::{self, Element};
use crate::model::layout::{
    self, CELL_SIZE, INFO_PANEL, MERGE_AREA, MERGE_BUTTON, SHELL_BOX, TABLE_LAYOUT,
};
use crate::state::{AppState, DragState, PopupKind};
use gtk4::cairo;
use std::f64::consts::PI;

const WHITE: (f64, f64, f64) = (1.0, 1.0, 1.0);
const BLACK: (f64, f64, f64) = (0.0, 0.0, 0.0);
const RED: (f64, f64, f64) = (1.0, 0.0, 0.0);

fn set_rgb(cr: &cairo::Context, (r, g, b): (f64, f64, f64)) {
    cr.set_source_rgb(r, g, b);
}

/// Centers `text` on (cx, cy) at the current font settings.
fn draw_centered_text(cr: &cairo::Context, text: &str, cx: f64, cy: f64) {
    if let Ok(ext) = cr.text_extents(text) {
        cr.move_to(
            cx - ext.width() / 2.0 - ext.x_bearing(),
            cy - ext.height() / 2.0 - ext.y_bearing(),
        );
    } else {
        cr.move_to(cx, cy);
    }
    let _ = cr.show_text(text);
}

// ============================================================================
// BACKGROUND & TABLE
// ============================================================================

pub fn draw_background(cr: &cairo::Context, st: &AppState) {
    set_rgb(cr, st.config.style.background_color);
    cr.paint().expect("Failed to paint background");
}

/// One element cell: category-colored fill, thin border, centered symbol.
pub fn draw_cell(cr: &cairo::Context, element: &Element, x: f64, y: f64) {
    set_rgb(cr, element.category.color());
    cr.rectangle(x, y, CELL_SIZE, CELL_SIZE);
    cr.fill().expect("Failed to fill cell");

    set_rgb(cr, BLACK);
    cr.set_line_width(1.0);
    cr.rectangle(x, y, CELL_SIZE, CELL_SIZE);
    cr.stroke().expect("Failed to stroke cell");

    cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Normal);
    cr.set_font_size(20.0);
    draw_centered_text(cr, element.symbol, x + CELL_SIZE / 2.0, y + CELL_SIZE / 2.0);
}

pub fn draw_table(cr: &cairo::Context) {
    for (row, symbols) in TABLE_LAYOUT.iter().enumerate() {
        for (col, symbol) in symbols.iter().enumerate() {
            // Blank slots and row markers have no element entry
            if let Some(element) = elements::get(symbol) {
                let (x, y) = layout::cell_origin(row, col);
                draw_cell(cr, element, x, y);
            }
        }
    }
}

// ============================================================================
// MERGE AREA & BUTTON
// ============================================================================

pub fn draw_merge_area(cr: &cairo::Context, st: &AppState) {
    set_rgb(cr, WHITE);
    cr.set_line_width(2.0);
    cr.rectangle(MERGE_AREA.x, MERGE_AREA.y, MERGE_AREA.w, MERGE_AREA.h);
    cr.stroke().expect("Failed to stroke merge area");

    for (i, symbol) in st.merge_area.iter().enumerate() {
        if let Some(element) = elements::get(symbol) {
            let x = MERGE_AREA.x + 10.0 + i as f64 * 40.0;
            draw_cell(cr, element, x, MERGE_AREA.y + 10.0);
        }
    }
}

pub fn draw_merge_button(cr: &cairo::Context) {
    set_rgb(cr, WHITE);
    cr.rectangle(MERGE_BUTTON.x, MERGE_BUTTON.y, MERGE_BUTTON.w, MERGE_BUTTON.h);
    cr.fill().expect("Failed to fill merge button");

    set_rgb(cr, BLACK);
    cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Normal);
    cr.set_font_size(18.0);
    draw_centered_text(
        cr,
        "Merge",
        MERGE_BUTTON.x + MERGE_BUTTON.w / 2.0,
        MERGE_BUTTON.y + MERGE_BUTTON.h / 2.0,
    );
}

// ============================================================================
// ELECTRON SHELL DIAGRAM
// ============================================================================

/// Concentric rings, one per shell, electrons dotted at equal angular
/// spacing. Shown for the most recently merged element.
pub fn draw_shell_diagram(cr: &cairo::Context, st: &AppState) {
    set_rgb(cr, WHITE);
    cr.set_line_width(2.0);
    cr.rectangle(SHELL_BOX.x, SHELL_BOX.y, SHELL_BOX.w, SHELL_BOX.h);
    cr.stroke().expect("Failed to stroke shell box");

    let Some(element) = st.shell_element() else {
        return;
    };

    let cx = SHELL_BOX.x + SHELL_BOX.w / 2.0;
    let cy = SHELL_BOX.y + SHELL_BOX.h / 2.0;
    let step = (SHELL_BOX.w.min(SHELL_BOX.h) / (2.0 * element.shells.len() as f64)).floor();

    for (i, &electrons) in element.shells.iter().enumerate() {
        let radius = (i + 1) as f64 * step;

        // Ring
        cr.set_source_rgba(1.0, 1.0, 1.0, 0.3);
        cr.set_line_width(1.0);
        cr.arc(cx, cy, radius, 0.0, 2.0 * PI);
        cr.stroke().expect("Failed to stroke shell ring");

        if electrons == 0 {
            continue;
        }

        // Electrons
        set_rgb(cr, WHITE);
        let angle_step = 2.0 * PI / electrons as f64;
        for j in 0..electrons {
            let angle = j as f64 * angle_step;
            let ex = cx + radius * angle.cos();
            let ey = cy + radius * angle.sin();
            cr.arc(ex, ey, 2.0, 0.0, 2.0 * PI);
            cr.fill().expect("Failed to fill electron");
        }
    }
}

// ============================================================================
// INFO PANEL, TOOLTIP, POPUP, DRAG GHOST
// ============================================================================

pub fn draw_info_panel(cr: &cairo::Context, st: &AppState) {
    set_rgb(cr, WHITE);
    cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Normal);
    cr.set_font_size(18.0);

    for (i, line) in st.info_lines.iter().enumerate() {
        cr.move_to(INFO_PANEL.x, INFO_PANEL.y + 20.0 + i as f64 * 30.0);
        let _ = cr.show_text(line);
    }
}

pub fn draw_tooltip(cr: &cairo::Context, st: &AppState) {
    if !st.config.show_tooltips {
        return;
    }
    let Some(element) = st.hover else {
        return;
    };

    cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Normal);
    cr.set_font_size(18.0);

    let (px, py) = st.pointer;
    let (tx, ty) = (px + 15.0, py + 15.0);
    let ext = match cr.text_extents(element.name) {
        Ok(e) => e,
        Err(_) => return,
    };

    set_rgb(cr, st.config.style.tooltip_background);
    cr.rectangle(tx - 4.0, ty - 4.0, ext.width() + 8.0, ext.height() + 8.0);
    cr.fill().expect("Failed to fill tooltip");

    set_rgb(cr, st.config.style.tooltip_text);
    cr.move_to(tx - ext.x_bearing(), ty - ext.y_bearing());
    let _ = cr.show_text(element.name);
}

pub fn draw_popup(cr: &cairo::Context, st: &AppState, width: f64, height: f64) {
    let Some(popup) = &st.popup else {
        return;
    };

    let color = match popup.kind {
        PopupKind::Failure => RED,
        PopupKind::Success | PopupKind::Info => WHITE,
    };

    set_rgb(cr, color);
    cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
    cr.set_font_size(32.0);
    draw_centered_text(cr, &popup.message, width / 2.0, height - 260.0);
}

/// The element chip following the pointer during a drag.
pub fn draw_dragged(cr: &cairo::Context, st: &AppState) {
    if let DragState::Dragging { symbol } = st.drag {
        if let Some(element) = elements::get(symbol) {
            let (px, py) = st.pointer;
            draw_cell(cr, element, px - CELL_SIZE / 2.0, py - CELL_SIZE / 2.0);
        }
    }
}
