// src/lib.rs

#![no_std]
#![doc = "Reads TRDP XML device-description documents."]
#![doc = ""]
#![doc = "This `no_std + alloc` library parses a device-configuration document"]
#![doc = "(interfaces, telegram definitions, dataset layouts) and extracts a"]
#![doc = "typed, query-ready summary of its contents."]
#![doc = ""]
#![doc = "It supports:"]
#![doc = "- `load_summary_from_str`: Building a `ConfigSummary` from a document."]
#![doc = "- Field-level defaulting: a partially specified document is always"]
#![doc = "  summarizable; only an unparsable document or a missing `device`"]
#![doc = "  root is an error."]

extern crate alloc;

// --- Crate Modules ---

mod error;
mod extract;
mod model;
mod summary;

// --- Public API Re-exports ---

pub use error::TrdpXmlError;
pub use extract::load_summary_from_str;
pub use summary::{
    BusInterface, ConfigSummary, Dataset, DeviceInfo, Telegram, TelegramDirection,
};
