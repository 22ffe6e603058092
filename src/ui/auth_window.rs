// src/ui/auth_window.rs
//
// The signup/login screen. One white form panel slides between the
// signup position (left) and the login position (right); all outcomes
// surface as modal message dialogs. A successful login closes this
// window and launches the table viewer as its own process.

use crate::auth::{LoginOutcome, SignupOutcome, UserStore};
use gtk4::glib;
use gtk4::prelude::*;
use gtk4::{
  self as gtk, Application, ApplicationWindow, Button, CssProvider, Entry, Fixed, Label,
  MessageDialog, MessageType, STYLE_PROVIDER_PRIORITY_APPLICATION,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

const WINDOW_WIDTH: i32 = 1300;
const WINDOW_HEIGHT: i32 = 700;

// Panel rest positions and animation step (10 px every 50 ms)
const SIGNUP_X: f64 = 100.0;
const LOGIN_X: f64 = 700.0;
const SLIDE_STEP: f64 = 10.0;
const SLIDE_TICK_MS: u64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormMode {
  Signup,
  Login,
}

/// Mutable window state: which pane is active and where the panel sits.
struct AuthForm {
  mode: FormMode,
  x: f64,
  target_x: f64,
  animating: bool,
}

impl AuthForm {
  fn new() -> Self {
    Self {
      mode: FormMode::Signup,
      x: SIGNUP_X,
      target_x: SIGNUP_X,
      animating: false,
    }
  }
}

fn inject_css() {
  let provider = CssProvider::new();
  provider.load_from_data(
    "
        window.auth-window {
            background-color: black;
        }
        .form-panel {
            background-color: white;
        }
        label.form-heading {
            color: #00008b;
            font-size: 24px;
            font-weight: bold;
        }
        label.form-field {
            color: #00008b;
            font-size: 18px;
            font-weight: bold;
        }
        button.outer-toggle {
            background-image: none;
            background-color: black;
            color: white;
            font-size: 20px;
            font-weight: bold;
        }
        button.outer-toggle:hover {
            background-color: #E0115f;
        }
        button.form-submit {
            background-image: none;
            background-color: #00008b;
            color: white;
            font-size: 20px;
            font-weight: bold;
        }
    ",
  );

  if let Some(display) = gtk::gdk::Display::default() {
    gtk4::style_context_add_provider_for_display(
      &display,
      &provider,
      STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
  }
}

fn show_message(parent: &ApplicationWindow, kind: MessageType, title: &str, text: &str) {
  let dialog = MessageDialog::builder()
    .transient_for(parent)
    .modal(true)
    .message_type(kind)
    .buttons(gtk::ButtonsType::Ok)
    .text(title)
    .secondary_text(text)
    .build();
  dialog.connect_response(|d, _| d.close());
  dialog.show();
}

/// Starts (or redirects) the panel slide toward the active mode's rest
/// position. A single ticking closure reads the shared target, so a
/// second click mid-slide just changes destination.
fn start_slide(form: &Rc<RefCell<AuthForm>>, fixed: &Fixed, panel: &Fixed) {
  {
    let mut f = form.borrow_mut();
    f.target_x = match f.mode {
      FormMode::Signup => SIGNUP_X,
      FormMode::Login => LOGIN_X,
    };
    if f.animating {
      return;
    }
    f.animating = true;
  }

  let form = form.clone();
  let fixed = fixed.downgrade();
  let panel = panel.downgrade();
  glib::timeout_add_local(Duration::from_millis(SLIDE_TICK_MS), move || {
    let (Some(fixed), Some(panel)) = (fixed.upgrade(), panel.upgrade()) else {
      return glib::ControlFlow::Break;
    };

    let mut f = form.borrow_mut();
    let delta = f.target_x - f.x;
    if delta.abs() <= SLIDE_STEP {
      f.x = f.target_x;
      f.animating = false;
      fixed.move_(&panel, f.x, 10.0);
      return glib::ControlFlow::Break;
    }

    f.x += SLIDE_STEP * delta.signum();
    fixed.move_(&panel, f.x, 10.0);
    glib::ControlFlow::Continue
  });
}

fn launch_viewer() -> std::io::Result<()> {
  let exe = std::env::current_exe()?;
  let viewer = exe
    .parent()
    .map(|dir| dir.join("elemental"))
    .unwrap_or_else(|| "elemental".into());

  std::process::Command::new(viewer).spawn()?;
  Ok(())
}

pub fn build_auth_window(app: &Application, store: Rc<UserStore>) {
  inject_css();

  let window = ApplicationWindow::builder()
    .application(app)
    .title("Sign up and Login")
    .default_width(WINDOW_WIDTH)
    .default_height(WINDOW_HEIGHT)
    .resizable(false)
    .build();
  window.add_css_class("auth-window");

  let form = Rc::new(RefCell::new(AuthForm::new()));

  // Root container: absolute placement, like the panel itself
  let fixed = Fixed::new();
  window.set_child(Some(&fixed));

  // --- Outer toggle buttons ---
  let signup_toggle = Button::with_label("Sign Up");
  signup_toggle.add_css_class("outer-toggle");
  fixed.put(&signup_toggle, 240.0, 540.0);

  let login_toggle = Button::with_label("Login");
  login_toggle.add_css_class("outer-toggle");
  fixed.put(&login_toggle, 1040.0, 540.0);

  // --- Sliding form panel ---
  let panel = Fixed::new();
  panel.add_css_class("form-panel");
  panel.set_size_request(500, 590);

  let heading = Label::new(Some("Sign Up"));
  heading.add_css_class("form-heading");
  panel.put(&heading, 180.0, 180.0);

  let username_label = Label::new(Some("Username"));
  username_label.add_css_class("form-field");
  panel.put(&username_label, 60.0, 290.0);

  let username = Entry::new();
  username.set_width_chars(20);
  panel.put(&username, 200.0, 290.0);

  let password_label = Label::new(Some("Password"));
  password_label.add_css_class("form-field");
  panel.put(&password_label, 60.0, 380.0);

  let password = Entry::new();
  password.set_width_chars(20);
  password.set_visibility(false);
  panel.put(&password, 200.0, 380.0);

  let submit = Button::with_label("Sign Up");
  submit.add_css_class("form-submit");
  panel.put(&submit, 200.0, 450.0);

  fixed.put(&panel, SIGNUP_X, 10.0);

  // --- Mode toggles ---
  let f = form.clone();
  let fx = fixed.clone();
  let pn = panel.clone();
  let hd = heading.clone();
  let sb = submit.clone();
  signup_toggle.connect_clicked(move |_| {
    f.borrow_mut().mode = FormMode::Signup;
    hd.set_text("Sign Up");
    sb.set_label("Sign Up");
    start_slide(&f, &fx, &pn);
  });

  let f = form.clone();
  let fx = fixed.clone();
  let pn = panel.clone();
  let hd = heading.clone();
  let sb = submit.clone();
  login_toggle.connect_clicked(move |_| {
    f.borrow_mut().mode = FormMode::Login;
    hd.set_text("Login");
    sb.set_label("Login");
    start_slide(&f, &fx, &pn);
  });

  // --- Submit ---
  let f = form.clone();
  let win = window.clone();
  let fx = fixed.clone();
  let pn = panel.clone();
  let hd = heading.clone();
  let user_entry = username.clone();
  let pass_entry = password.clone();
  submit.connect_clicked(move |button| {
    let user = user_entry.text().to_string();
    let pass = pass_entry.text().to_string();

    if user.is_empty() || pass.is_empty() {
      show_message(&win, MessageType::Warning, "Warning", "Please fill all fields");
      return;
    }

    let mode = f.borrow().mode;
    match mode {
      FormMode::Signup => match store.signup(&user, &pass) {
        Ok(SignupOutcome::DuplicateUsername) => {
          log::warn!("Signup rejected: username '{}' already exists", user);
          show_message(&win, MessageType::Warning, "Warning", "Username already exists");
        }
        Ok(SignupOutcome::Created) => {
          show_message(&win, MessageType::Info, "Success", "Registration is Successful");
          // Move straight to the login pane with cleared fields
          f.borrow_mut().mode = FormMode::Login;
          hd.set_text("Login");
          button.set_label("Login");
          user_entry.set_text("");
          pass_entry.set_text("");
          start_slide(&f, &fx, &pn);
        }
        Err(e) => {
          log::error!("Signup failed: {}", e);
          show_message(&win, MessageType::Error, "Error", &e.to_string());
        }
      },
      FormMode::Login => match store.login(&user, &pass) {
        Ok(LoginOutcome::UnknownUser) => {
          show_message(&win, MessageType::Error, "Error", "Invalid Username");
        }
        Ok(LoginOutcome::WrongPassword) => {
          show_message(&win, MessageType::Error, "Error", "Invalid Password");
        }
        Ok(LoginOutcome::Success) => {
          // Acknowledge, then hand off to the viewer process
          let dialog = MessageDialog::builder()
            .transient_for(&win)
            .modal(true)
            .message_type(MessageType::Info)
            .buttons(gtk::ButtonsType::Ok)
            .text("Success")
            .secondary_text("Login Successful")
            .build();

          let win = win.clone();
          dialog.connect_response(move |d, _| {
            d.close();
            match launch_viewer() {
              Ok(()) => {
                log::info!("Viewer launched, closing login window");
                win.close();
              }
              Err(e) => {
                log::error!("Could not launch viewer: {}", e);
                show_message(&win, MessageType::Error, "Error", "Could not launch the viewer");
              }
            }
          });
          dialog.show();
        }
        Err(e) => {
          log::error!("Login failed: {}", e);
          show_message(&win, MessageType::Error, "Error", &e.to_string());
        }
      },
    }
  });

  window.present();
}
