use firstwindow_core::{AppIdentity, LaunchFlags};
use gtk4::gio;
use libadwaita as adw;

pub fn application_flags(flags: LaunchFlags) -> gio::ApplicationFlags {
    match flags {
        LaunchFlags::Default => gio::ApplicationFlags::empty(),
        LaunchFlags::NonUnique => gio::ApplicationFlags::NON_UNIQUE,
    }
}

pub fn build_application(identity: &AppIdentity) -> adw::Application {
    log::debug!(
        "Creating application {} ({:?})",
        identity.application_id,
        identity.flags
    );
    adw::Application::builder()
        .application_id(identity.application_id.as_str())
        .flags(application_flags(identity.flags))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_are_empty() {
        assert!(application_flags(LaunchFlags::Default).is_empty());
    }

    #[test]
    fn non_unique_flag() {
        assert_eq!(
            application_flags(LaunchFlags::NonUnique),
            gio::ApplicationFlags::NON_UNIQUE
        );
    }
}
