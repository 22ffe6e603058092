// src/ui/interactions.rs

use crate::state::AppState;
use gtk4::glib;
use gtk4::prelude::*;
use gtk4::{self as gtk, EventControllerMotion, GestureDrag};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Arms the one-shot timer that clears a freshly shown popup. Input
/// stays suppressed (AppState ignores events while popup is set) until
/// it fires.
fn arm_popup_timer(state: &Rc<RefCell<AppState>>, drawing_area: &gtk::DrawingArea) {
  let duration = Duration::from_millis(state.borrow().config.popup_duration_ms);
  let s = Rc::downgrade(state);
  let da = drawing_area.downgrade();

  glib::timeout_add_local_once(duration, move || {
    if let Some(st) = s.upgrade() {
      st.borrow_mut().clear_popup();
    }
    if let Some(da) = da.upgrade() {
      da.queue_draw();
    }
  });
}

pub fn setup_interactions(state: Rc<RefCell<AppState>>, drawing_area: &gtk::DrawingArea) {
  // 1. DRAG (press, follow, release)
  let drag = GestureDrag::new();

  let s = state.clone();
  let da = drawing_area.clone();
  drag.connect_drag_begin(move |_, x, y| {
    let popped = {
      let mut st = s.borrow_mut();
      let had_popup = st.popup.is_some();
      st.press(x, y);
      !had_popup && st.popup.is_some()
    };
    if popped {
      arm_popup_timer(&s, &da);
    }
    da.queue_draw();
  });

  let s = state.clone();
  let da = drawing_area.clone();
  drag.connect_drag_update(move |gesture, dx, dy| {
    if let Some((sx, sy)) = gesture.start_point() {
      s.borrow_mut().drag_to(sx + dx, sy + dy);
      da.queue_draw();
    }
  });

  let s = state.clone();
  let da = drawing_area.clone();
  drag.connect_drag_end(move |gesture, dx, dy| {
    let Some((sx, sy)) = gesture.start_point() else {
      return;
    };
    let popped = {
      let mut st = s.borrow_mut();
      let had_popup = st.popup.is_some();
      st.release(sx + dx, sy + dy);
      !had_popup && st.popup.is_some()
    };
    if popped {
      arm_popup_timer(&s, &da);
    }
    da.queue_draw();
  });

  drawing_area.add_controller(drag);

  // 2. HOVER (tooltip)
  let motion = EventControllerMotion::new();
  let s = state.clone();
  let da = drawing_area.clone();
  motion.connect_motion(move |_, x, y| {
    s.borrow_mut().hover_at(x, y);
    da.queue_draw();
  });
  drawing_area.add_controller(motion);
}
