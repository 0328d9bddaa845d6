//! Lifecycle of the single application handle.
//!
//! The toolkit owns the real state machine; `Session` mirrors it so the
//! frontend's signal handlers can enforce the one-window-per-activation and
//! release-once rules without a display connection.

use std::ffi::OsStr;

use crate::identity::AppIdentity;
use crate::window::WindowSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Running,
    Terminating,
}

/// Something that can put a top-level window on screen.
pub trait WindowHost {
    fn open_window(&self, spec: &WindowSpec);
}

#[derive(Debug)]
pub struct Session {
    identity: AppIdentity,
    window: WindowSpec,
    phase: Phase,
    activations: u32,
    exit_status: Option<i32>,
}

impl Session {
    pub fn new(identity: AppIdentity, window: WindowSpec) -> Self {
        Session {
            identity,
            window,
            phase: Phase::Uninitialized,
            activations: 0,
            exit_status: None,
        }
    }

    pub fn identity(&self) -> &AppIdentity {
        &self.identity
    }

    pub fn window_spec(&self) -> &WindowSpec {
        &self.window
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn activations(&self) -> u32 {
        self.activations
    }

    pub fn exit_status(&self) -> Option<i32> {
        self.exit_status
    }

    /// Validate the identity and window spec and enter `Running`.
    pub fn start(&mut self) -> Result<(), String> {
        if self.phase != Phase::Uninitialized {
            return Err(format!("Session already started ({:?})", self.phase));
        }
        self.identity.validate()?;
        self.window.validate()?;
        self.phase = Phase::Running;
        log::debug!("Session started for {}", self.identity.application_id);
        Ok(())
    }

    /// Handle one activation: exactly one window is opened on `host`.
    pub fn activate<H: WindowHost + ?Sized>(&mut self, host: &H) -> Result<(), String> {
        if self.phase != Phase::Running {
            return Err(format!(
                "Activation received while {:?}",
                self.phase
            ));
        }
        host.open_window(&self.window);
        self.activations += 1;
        log::info!(
            "Activation #{}: opened '{}' ({}x{})",
            self.activations,
            self.window.title,
            self.window.default_width,
            self.window.default_height
        );
        Ok(())
    }

    /// Record the status the run loop returned and enter `Terminating`.
    ///
    /// The status is returned unchanged. Only the first call takes effect.
    pub fn finish(&mut self, status: i32) -> i32 {
        if let Some(previous) = self.exit_status {
            log::warn!(
                "Session already finished with status {}, ignoring {}",
                previous,
                status
            );
            return previous;
        }
        self.phase = Phase::Terminating;
        self.exit_status = Some(status);
        log::info!(
            "Run loop returned {} after {} activation(s)",
            status,
            self.activations
        );
        status
    }
}

/// The argument vector handed to the run loop.
///
/// The program defines no flags of its own, so arguments pass through in
/// order and never influence the window. Arguments that are not valid UTF-8
/// are converted lossily instead of aborting the launch.
pub fn forwarded_args<I, S>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    args.into_iter()
        .map(|arg| arg.as_ref().to_string_lossy().into_owned())
        .collect()
}

/// Narrow a run-loop status to the byte the process exits with.
///
/// Statuses outside `0..=255` become `1` so a failure never wraps to success.
pub fn process_exit_code(status: i32) -> u8 {
    u8::try_from(status).unwrap_or(1)
}
