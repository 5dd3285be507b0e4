// crates/trdp-rs-manager/src/lib.rs

//! Web service for managing TRDP device-configuration documents.
//!
//! Operators upload XML device descriptions, review a structured summary of
//! each document (extracted by `trdp-rs-xml`), and activate one for the
//! runtime communication engine. The engine itself is modeled as a lifecycle
//! context object with a guarded restart sequence.

pub mod engine;
pub mod error;
pub mod model;
pub mod server;
pub mod storage;

pub use engine::{EngineController, EngineState};
pub use error::ManagerError;
pub use server::{AppState, serve};
pub use storage::ConfigStore;
