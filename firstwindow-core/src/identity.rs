use serde::{Deserialize, Serialize};

/// Reverse-DNS identifier the application registers under.
pub const APP_ID: &str = "org.gtk.example.gtk4";

const MAX_APP_ID_LEN: usize = 255;

/// Behavior flags passed to the application constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaunchFlags {
    /// Toolkit defaults: single instance, activation forwarded to the primary.
    #[default]
    Default,
    /// Every launch runs as its own primary instance.
    NonUnique,
}

impl LaunchFlags {
    pub fn from_non_unique(non_unique: bool) -> Self {
        if non_unique {
            LaunchFlags::NonUnique
        } else {
            LaunchFlags::Default
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppIdentity {
    pub application_id: String,
    pub flags: LaunchFlags,
}

impl Default for AppIdentity {
    fn default() -> Self {
        AppIdentity {
            application_id: APP_ID.to_string(),
            flags: LaunchFlags::Default,
        }
    }
}

impl AppIdentity {
    pub fn with_flags(flags: LaunchFlags) -> Self {
        AppIdentity {
            flags,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if is_valid_application_id(&self.application_id) {
            Ok(())
        } else {
            Err(format!(
                "Invalid application id '{}'",
                self.application_id
            ))
        }
    }
}

/// Check an application id against the GApplication naming rules.
///
/// The id must be at most 255 bytes, contain at least two non-empty
/// dot-separated elements, use only `[A-Za-z0-9_-]`, and no element may
/// start with a digit.
pub fn is_valid_application_id(id: &str) -> bool {
    if id.is_empty() || id.len() > MAX_APP_ID_LEN {
        return false;
    }
    let elements: Vec<&str> = id.split('.').collect();
    if elements.len() < 2 {
        return false;
    }
    elements.iter().all(|element| {
        let mut chars = element.chars();
        match chars.next() {
            None => false,
            Some(first) if first.is_ascii_digit() => false,
            Some(first) => std::iter::once(first)
                .chain(chars)
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-'),
        }
    })
}
