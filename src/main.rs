use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, DrawingArea};
use std::cell::RefCell;
use std::rc::Rc;

use elemental::config::Config;
use elemental::model::layout::{CANVAS_HEIGHT, CANVAS_WIDTH};
use elemental::rendering::painter;
use elemental::state::AppState;
use elemental::ui::interactions::setup_interactions;

fn main() {
    env_logger::init();

    let app = Application::builder()
        .application_id("com.example.elemental")
        .build();

    app.connect_activate(build_ui);
    app.run();
}

fn build_ui(app: &Application) {
    let (config, msg) = Config::load();
    log::info!("{}", msg);

    let state = Rc::new(RefCell::new(AppState::new(config)));

    let window = ApplicationWindow::builder()
        .application(app)
        .title("Periodic Table")
        .default_width(CANVAS_WIDTH as i32)
        .default_height(CANVAS_HEIGHT as i32)
        .resizable(false)
        .build();

    let drawing_area = DrawingArea::new();
    drawing_area.set_content_width(CANVAS_WIDTH as i32);
    drawing_area.set_content_height(CANVAS_HEIGHT as i32);
    window.set_child(Some(&drawing_area));

    // --- Setup Logic ---
    setup_interactions(state.clone(), &drawing_area);

    // Drawing Function
    let s = state.clone();
    drawing_area.set_draw_func(move |_, cr, w, h| {
        let st = s.borrow();

        // 1. Background
        painter::draw_background(cr, &st);

        // 2. Static table
        painter::draw_table(cr);

        // 3. Merge area with accumulated chips, shell diagram, button
        painter::draw_merge_area(cr, &st);
        painter::draw_shell_diagram(cr, &st);
        painter::draw_merge_button(cr);

        // 4. Info panel text
        painter::draw_info_panel(cr, &st);

        // 5. Hover tooltip
        painter::draw_tooltip(cr, &st);

        // 6. Popup, then the dragged chip on top
        painter::draw_popup(cr, &st, w as f64, h as f64);
        painter::draw_dragged(cr, &st);
    });

    window.present();
}
