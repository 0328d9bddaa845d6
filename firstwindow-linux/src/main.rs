mod app;
mod theme;
mod window;

use std::cell::RefCell;
use std::rc::Rc;

use firstwindow_core::lifecycle::{forwarded_args, process_exit_code, Session};
use firstwindow_core::{settings, AppIdentity, Settings, WindowSpec};
use gtk4::glib;
use libadwaita::prelude::*;

fn main() -> glib::ExitCode {
    let (settings, load_error) = match settings::try_load() {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(settings.log_level.as_str()),
    )
    .init();

    match load_error {
        Some(e) => log::warn!("{}; using defaults", e),
        None => {
            if settings::settings_path().is_some_and(|path| !path.exists()) {
                if let Err(e) = settings::save(&settings) {
                    log::warn!("Could not write default settings: {}", e);
                }
            }
        }
    }

    let identity = AppIdentity::with_flags(settings.launch_flags());
    let session = Rc::new(RefCell::new(Session::new(identity, WindowSpec::default())));
    if let Err(e) = session.borrow_mut().start() {
        log::error!("Failed to start: {}", e);
        return glib::ExitCode::FAILURE;
    }

    let app = app::build_application(session.borrow().identity());

    let color_scheme = settings.color_scheme;
    app.connect_startup(move |_app| {
        theme::apply_color_scheme(color_scheme);
    });

    {
        let session = session.clone();
        app.connect_activate(move |app| {
            let host = window::AppWindowHost::new(app);
            if let Err(e) = session.borrow_mut().activate(&host) {
                log::error!("{}", e);
            }
        });
    }

    app.connect_shutdown(|_app| {
        log::debug!("Application shutting down");
    });

    let args = forwarded_args(std::env::args_os());
    let status = app.run_with_args(args.as_slice());
    drop(app);

    let code = session.borrow_mut().finish(i32::from(status.get()));
    glib::ExitCode::new(process_exit_code(code))
}
