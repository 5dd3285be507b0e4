//! Lifecycle control for the runtime communication engine.
//!
//! The engine itself runs outside this service; what the manager owns is the
//! activated configuration and the engine's lifecycle state. Both live in an
//! [`EngineController`] context object constructed at process start and
//! shared by reference with the HTTP handlers.

use log::{debug, info};
use serde::Serialize;
use tokio::time::{Duration, sleep};
use uuid::Uuid;

use crate::error::ManagerError;

/// Lifecycle states of the runtime communication engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineState {
    /// The engine holds no running sessions.
    #[default]
    Stopped,
    /// Sessions are being brought up against the activated configuration.
    Starting,
    /// The engine is running.
    Running,
}

/// The configuration document the engine was last handed.
#[derive(Debug, Clone)]
struct ActiveConfig {
    id: Uuid,
    document: String,
}

/// Context object owning the engine lifecycle.
///
/// Replaces an unguarded running flag: the only admitted startup sequence is
/// `Stopped -> Starting -> Running`. The controller does not validate that
/// the engine accepted the document; activation feedback is the state flip
/// alone.
pub struct EngineController {
    state: EngineState,
    active_config: Option<ActiveConfig>,
}

impl EngineController {
    pub fn new() -> Self {
        EngineController {
            state: EngineState::Stopped,
            active_config: None,
        }
    }

    /// The current lifecycle state.
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// The id of the activated configuration, if one was loaded.
    pub fn active_config_id(&self) -> Option<Uuid> {
        self.active_config.as_ref().map(|config| config.id)
    }

    /// Hands a raw configuration document to the engine. Takes effect on the
    /// next restart.
    pub fn load_config(&mut self, id: Uuid, document: String) {
        debug!(
            "Engine received configuration {} ({} bytes)",
            id,
            document.len()
        );
        self.active_config = Some(ActiveConfig { id, document });
    }

    /// Admits a single lifecycle transition.
    ///
    /// Stopping is allowed from any state; everything else must follow the
    /// startup sequence.
    fn transition(&mut self, next: EngineState) -> Result<(), ManagerError> {
        let allowed = matches!(
            (self.state, next),
            (_, EngineState::Stopped)
                | (EngineState::Stopped, EngineState::Starting)
                | (EngineState::Starting, EngineState::Running)
        );
        if !allowed {
            return Err(ManagerError::Engine("invalid engine state transition"));
        }
        debug!("Engine state {:?} -> {:?}", self.state, next);
        self.state = next;
        Ok(())
    }

    /// Runs the full restart sequence against the activated configuration.
    pub async fn restart(&mut self) -> Result<(), ManagerError> {
        match &self.active_config {
            Some(config) => debug!(
                "Restarting engine with configuration {} ({} bytes)",
                config.id,
                config.document.len()
            ),
            None => debug!("Restarting engine with no configuration loaded"),
        }

        self.transition(EngineState::Stopped)?;
        self.transition(EngineState::Starting)?;
        // Session spin-up time.
        sleep(Duration::from_millis(25)).await;
        self.transition(EngineState::Running)?;
        info!(
            "Engine restarted (active configuration: {:?})",
            self.active_config_id()
        );
        Ok(())
    }
}

impl Default for EngineController {
    fn default() -> Self {
        EngineController::new()
    }
}
