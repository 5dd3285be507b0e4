// crates/trdp-rs-xml/src/model.rs

//! Internal `serde` data structures that map directly to the TRDP
//! device-description XML schema. These are used for raw deserialization.
//!
//! Every field is optional or defaulted: a partially specified document must
//! deserialize, so that the extractor can apply its own defaulting rules.

#![allow(clippy::pedantic)] // XML schema names are not idiomatic Rust
#![allow(dead_code)] // The model mirrors the document schema, not just the summarized fields

use alloc::string::String;
use alloc::vec::Vec;
use serde::Deserialize;

/// The `<device>` root element of a device-description document.
#[derive(Debug, Deserialize, Default)]
#[serde(rename = "device")]
pub(crate) struct Device {
    #[serde(rename = "@host-name", default)]
    pub host_name: Option<String>,

    #[serde(rename = "@leader-name", default)]
    pub leader_name: Option<String>,

    #[serde(rename = "@type", default)]
    pub device_type: Option<String>,

    #[serde(rename = "bus-interface-list", default)]
    pub bus_interface_list: Option<BusInterfaceList>,

    #[serde(rename = "data-set-list", default)]
    pub data_set_list: Option<DataSetList>,
}

/// Wrapper element around the declared bus interfaces.
#[derive(Debug, Deserialize, Default)]
pub(crate) struct BusInterfaceList {
    /// A single `<bus-interface>` child and a repeated one both deserialize
    /// into this `Vec`; an absent child reads as empty.
    #[serde(rename = "bus-interface", default)]
    pub bus_interface: Vec<BusInterfaceNode>,
}

/// One `<bus-interface>` declaration.
#[derive(Debug, Deserialize, Default)]
pub(crate) struct BusInterfaceNode {
    #[serde(rename = "@name", default)]
    pub name: Option<String>,

    /// Kept as a string until coercion; "0" and "absent" must stay distinct.
    #[serde(rename = "@network-id", default)]
    pub network_id: Option<String>,

    #[serde(rename = "@host-ip", default)]
    pub host_ip: Option<String>,

    #[serde(rename = "@leader-ip", default)]
    pub leader_ip: Option<String>,

    #[serde(rename = "telegram", default)]
    pub telegram: Vec<TelegramNode>,
}

/// One `<telegram>` (message definition) under a bus interface.
#[derive(Debug, Deserialize, Default)]
pub(crate) struct TelegramNode {
    #[serde(rename = "@name", default)]
    pub name: Option<String>,

    #[serde(rename = "@com-id", default)]
    pub com_id: Option<String>,

    #[serde(rename = "@data-set-id", default)]
    pub data_set_id: Option<String>,

    #[serde(rename = "source", default)]
    pub source: Vec<EndpointNode>,

    #[serde(rename = "destination", default)]
    pub destination: Vec<EndpointNode>,

    /// Present on periodically transmitted (PD) telegrams.
    #[serde(rename = "pd-parameter", default)]
    pub pd_parameter: Option<PdParameterNode>,

    /// Present on on-demand (MD) telegrams.
    #[serde(rename = "md-parameter", default)]
    pub md_parameter: Option<MdParameterNode>,
}

/// A `<source>` or `<destination>` endpoint declaration.
///
/// Only presence matters for direction classification; the URI attributes
/// are carried for completeness (`uri1`/`uri2` on sources, `uri` on
/// destinations).
#[derive(Debug, Deserialize, Default)]
pub(crate) struct EndpointNode {
    #[serde(rename = "@id", default)]
    pub id: Option<String>,

    #[serde(rename = "@uri", default)]
    pub uri: Option<String>,

    #[serde(rename = "@uri1", default)]
    pub uri1: Option<String>,

    #[serde(rename = "@uri2", default)]
    pub uri2: Option<String>,
}

/// The `<pd-parameter>` block of a periodic telegram.
#[derive(Debug, Deserialize, Default)]
pub(crate) struct PdParameterNode {
    /// Transmission cycle in microseconds.
    #[serde(rename = "@cycle", default)]
    pub cycle: Option<String>,

    #[serde(rename = "@timeout", default)]
    pub timeout: Option<String>,
}

/// The `<md-parameter>` block of an on-demand telegram.
#[derive(Debug, Deserialize, Default)]
pub(crate) struct MdParameterNode {
    #[serde(rename = "@cycle", default)]
    pub cycle: Option<String>,

    #[serde(rename = "@reply-timeout", default)]
    pub reply_timeout: Option<String>,
}

/// Wrapper element around the dataset definitions.
#[derive(Debug, Deserialize, Default)]
pub(crate) struct DataSetList {
    #[serde(rename = "data-set", default)]
    pub data_set: Vec<DataSetNode>,
}

/// One `<data-set>` (payload layout) definition.
#[derive(Debug, Deserialize, Default)]
pub(crate) struct DataSetNode {
    #[serde(rename = "@id", default)]
    pub id: Option<String>,

    #[serde(rename = "@name", default)]
    pub name: Option<String>,

    #[serde(rename = "element", default)]
    pub element: Vec<ElementNode>,
}

/// One `<element>` declaration inside a dataset layout.
#[derive(Debug, Deserialize, Default)]
pub(crate) struct ElementNode {
    #[serde(rename = "@name", default)]
    pub name: Option<String>,

    #[serde(rename = "@type", default)]
    pub element_type: Option<String>,

    #[serde(rename = "@array-size", default)]
    pub array_size: Option<String>,
}
