/// Title shown on the window created for each activation.
pub const WINDOW_TITLE: &str = "My First GTK4 Window";
pub const DEFAULT_WIDTH: i32 = 400;
pub const DEFAULT_HEIGHT: i32 = 300;

/// Title and default size of the top-level window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSpec {
    pub title: String,
    pub default_width: i32,
    pub default_height: i32,
}

impl Default for WindowSpec {
    fn default() -> Self {
        WindowSpec {
            title: WINDOW_TITLE.to_string(),
            default_width: DEFAULT_WIDTH,
            default_height: DEFAULT_HEIGHT,
        }
    }
}

impl WindowSpec {
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Window title must not be empty".to_string());
        }
        if self.default_width <= 0 || self.default_height <= 0 {
            return Err(format!(
                "Window size must be positive, got {}x{}",
                self.default_width, self.default_height
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_spec_matches_literals() {
        let spec = WindowSpec::default();
        assert_eq!(spec.title, "My First GTK4 Window");
        assert_eq!(spec.default_width, 400);
        assert_eq!(spec.default_height, 300);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn empty_title_rejected() {
        let spec = WindowSpec {
            title: "   ".to_string(),
            ..Default::default()
        };
        assert!(spec.validate().is_err());
    }

    #[test]
    fn non_positive_size_rejected() {
        let spec = WindowSpec {
            default_width: 0,
            ..Default::default()
        };
        assert!(spec.validate().unwrap_err().contains("0x300"));

        let spec = WindowSpec {
            default_height: -1,
            ..Default::default()
        };
        assert!(spec.validate().is_err());
    }
}
