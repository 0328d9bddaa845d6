use firstwindow_core::{WindowHost, WindowSpec};
use gtk4::prelude::*;
use libadwaita as adw;

/// Opens windows parented to the running application.
pub struct AppWindowHost<'a> {
    app: &'a adw::Application,
}

impl<'a> AppWindowHost<'a> {
    pub fn new(app: &'a adw::Application) -> Self {
        AppWindowHost { app }
    }
}

impl WindowHost for AppWindowHost<'_> {
    fn open_window(&self, spec: &WindowSpec) {
        let window = build_window(self.app, spec);
        window.present();
    }
}

pub fn build_window(app: &adw::Application, spec: &WindowSpec) -> gtk4::ApplicationWindow {
    gtk4::ApplicationWindow::builder()
        .application(app)
        .title(spec.title.as_str())
        .default_width(spec.default_width)
        .default_height(spec.default_height)
        .build()
}
