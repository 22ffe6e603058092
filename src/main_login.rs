use gtk4::prelude::*;
use gtk4::Application;
use std::process;
use std::rc::Rc;

use elemental::auth::UserStore;
use elemental::ui::auth_window::build_auth_window;

fn main() {
    env_logger::init();

    let app = Application::builder()
        .application_id("com.example.elemental.login")
        .build();

    app.connect_activate(|app| {
        // Unreachable store is fatal: there is nothing to log into
        let db_path = UserStore::default_path();
        let store = match UserStore::open(&db_path) {
            Ok(s) => Rc::new(s),
            Err(e) => {
                log::error!("Cannot open credential store at {:?}: {}", db_path, e);
                process::exit(1);
            }
        };
        log::info!("Credential store ready at {:?}", db_path);

        build_auth_window(app, store);
    });

    app.run();
}
