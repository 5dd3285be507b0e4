// crates/trdp-rs-xml/src/summary.rs

//! Public, ergonomic data structures for representing a summarized
//! device-description document.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use serde::Serialize;

// --- Root Summary Structure ---

/// The fully extracted summary of one device-description document.
///
/// This is the main public struct. It is a plain value: the caller owns it
/// outright, and extracting the same document twice yields structurally
/// equal summaries.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigSummary {
    /// Identity of the configured unit.
    pub device: DeviceInfo,

    /// Declared bus interfaces, in document order.
    pub interfaces: Vec<BusInterface>,

    /// Declared dataset layouts, in document order.
    pub datasets: Vec<Dataset>,
}

// --- Device Identity ---

/// Identity attributes of the `<device>` root.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    /// `@host-name`, empty when absent.
    pub host_name: String,

    /// `@type`, empty when absent.
    #[serde(rename = "type")]
    pub device_type: String,
}

// --- Bus Interfaces ---

/// One `<bus-interface>` with its telegram inventory, partitioned into
/// periodic (PD) and on-demand (MD) message definitions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusInterface {
    /// `@name`, empty when absent.
    pub name: String,

    /// `@network-id`. Absent when missing or non-numeric, never zeroed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_id: Option<u32>,

    /// `@host-ip`, empty when absent.
    pub host_ip: String,

    /// `@leader-ip`, empty when absent.
    pub leader_ip: String,

    /// Telegrams carrying a `<pd-parameter>` block, in document order.
    pub pd_telegrams: Vec<Telegram>,

    /// Telegrams carrying only an `<md-parameter>` block, in document order.
    pub md_telegrams: Vec<Telegram>,
}

// --- Telegrams ---

/// One message definition attached to exactly one interface.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Telegram {
    /// `@name`, empty when absent.
    pub name: String,

    /// `@com-id`. An absent ComId is not the same as ComId 0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub com_id: Option<u32>,

    /// `@data-set-id`, referencing a [`Dataset`] by id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_id: Option<u32>,

    /// Transmission cycle in microseconds, from the classifying parameter
    /// block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle: Option<u32>,

    /// Traffic direction derived from the declared endpoints.
    pub direction: TelegramDirection,
}

/// Traffic direction of a telegram, derived from the presence of `<source>`
/// and `<destination>` endpoint declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum TelegramDirection {
    /// At least one source, no destinations.
    #[serde(rename = "source")]
    Source,

    /// At least one destination, no sources.
    #[serde(rename = "sink")]
    Sink,

    /// Both sources and destinations declared.
    #[serde(rename = "source+sink")]
    SourceSink,

    /// Neither declared. A valid outcome for incompletely specified
    /// telegrams, not a fault.
    #[default]
    #[serde(rename = "unset")]
    Unset,
}

impl TelegramDirection {
    /// Derives the direction from endpoint presence.
    ///
    /// Total over all four combinations; duplicate endpoints do not change
    /// the outcome, only presence matters.
    pub fn classify(has_source: bool, has_destination: bool) -> Self {
        match (has_source, has_destination) {
            (true, true) => TelegramDirection::SourceSink,
            (true, false) => TelegramDirection::Source,
            (false, true) => TelegramDirection::Sink,
            (false, false) => TelegramDirection::Unset,
        }
    }
}

impl fmt::Display for TelegramDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TelegramDirection::Source => "source",
            TelegramDirection::Sink => "sink",
            TelegramDirection::SourceSink => "source+sink",
            TelegramDirection::Unset => "unset",
        })
    }
}

// --- Datasets ---

/// One `<data-set>` payload-layout definition.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// `@id`, referenced by telegrams via their `data-set-id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,

    /// `@name`, empty when absent.
    pub name: String,

    /// Number of `<element>` children, 0 when none are declared.
    pub element_count: usize,
}
