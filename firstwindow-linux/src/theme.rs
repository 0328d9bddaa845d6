use firstwindow_core::ColorScheme;
use libadwaita as adw;

pub fn adw_color_scheme(scheme: ColorScheme) -> adw::ColorScheme {
    match scheme {
        ColorScheme::System => adw::ColorScheme::Default,
        ColorScheme::Light => adw::ColorScheme::ForceLight,
        ColorScheme::Dark => adw::ColorScheme::ForceDark,
    }
}

/// Must run after the application's `startup` signal so libadwaita is initialized.
pub fn apply_color_scheme(scheme: ColorScheme) {
    let style_manager = adw::StyleManager::default();
    style_manager.set_color_scheme(adw_color_scheme(scheme));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_mapping() {
        assert_eq!(adw_color_scheme(ColorScheme::System), adw::ColorScheme::Default);
        assert_eq!(adw_color_scheme(ColorScheme::Light), adw::ColorScheme::ForceLight);
        assert_eq!(adw_color_scheme(ColorScheme::Dark), adw::ColorScheme::ForceDark);
    }
}
