pub mod identity;
pub mod lifecycle;
pub mod settings;
pub mod window;

pub use identity::{AppIdentity, LaunchFlags, APP_ID};
pub use lifecycle::{Phase, Session, WindowHost};
pub use settings::{ColorScheme, Settings};
pub use window::WindowSpec;
