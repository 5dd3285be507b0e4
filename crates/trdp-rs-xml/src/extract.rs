// crates/trdp-rs-xml/src/extract.rs

use crate::error::TrdpXmlError;
use crate::model;
use crate::summary::{
    BusInterface, ConfigSummary, Dataset, DeviceInfo, Telegram, TelegramDirection,
};
use alloc::string::String;
use alloc::vec::Vec;
use core::str::FromStr;
use log::{debug, trace};
use quick_xml::Reader;
use quick_xml::events::Event;

/// Parses a device-description document and extracts its summary.
///
/// The extraction is a pure, single-shot transform: it retains no state
/// across calls and the returned [`ConfigSummary`] is owned outright by the
/// caller. Field-level absence is resolved to defaults; only an unparsable
/// document or a missing `device` root is an error.
///
/// # Errors
/// Returns a `TrdpXmlError` if the document does not deserialize or has no
/// `device` root element.
pub fn load_summary_from_str(xml_content: &str) -> Result<ConfigSummary, TrdpXmlError> {
    // 1. The serde deserializer accepts any root element name, so the
    //    device root must be checked at the event level first.
    ensure_device_root(xml_content)?;

    // 2. Deserialize the raw XML string into our internal model.
    let device: model::Device = quick_xml::de::from_str(xml_content)?;

    // 3. Walk the model and build the summary, defaulting as we go.
    let summary = ConfigSummary {
        device: extract_device(&device),
        interfaces: extract_interfaces(&device),
        datasets: extract_datasets(&device),
    };

    debug!(
        "Summarized device '{}': {} interface(s), {} dataset(s)",
        summary.device.host_name,
        summary.interfaces.len(),
        summary.datasets.len()
    );
    Ok(summary)
}

/// Verifies that the first element of the document is `<device>`.
fn ensure_device_root(xml_content: &str) -> Result<(), TrdpXmlError> {
    let mut reader = Reader::from_str(xml_content);
    loop {
        match reader.read_event()? {
            Event::Start(start) | Event::Empty(start) => {
                return if start.name().as_ref() == b"device" {
                    Ok(())
                } else {
                    Err(TrdpXmlError::MissingElement { element: "device" })
                };
            }
            Event::Eof => return Err(TrdpXmlError::MissingElement { element: "device" }),
            // Declarations, comments and whitespace may precede the root.
            _ => {}
        }
    }
}

fn extract_device(device: &model::Device) -> DeviceInfo {
    DeviceInfo {
        host_name: text_or_empty(device.host_name.as_deref()),
        device_type: text_or_empty(device.device_type.as_deref()),
    }
}

fn extract_interfaces(device: &model::Device) -> Vec<BusInterface> {
    let interfaces = list_or_empty(
        device
            .bus_interface_list
            .as_ref()
            .map(|list| &list.bus_interface),
    );

    interfaces
        .iter()
        .map(|iface| {
            let (pd_telegrams, md_telegrams) = partition_telegrams(&iface.telegram);
            BusInterface {
                name: text_or_empty(iface.name.as_deref()),
                network_id: parse_number(iface.network_id.as_deref()),
                host_ip: text_or_empty(iface.host_ip.as_deref()),
                leader_ip: text_or_empty(iface.leader_ip.as_deref()),
                pd_telegrams,
                md_telegrams,
            }
        })
        .collect()
}

/// Splits an interface's telegram declarations into the periodic and
/// on-demand inventories.
///
/// Classification follows the parameter blocks: a `pd-parameter` block wins
/// over an `md-parameter` block when a malformed document declares both. A
/// telegram declaring neither block is dropped from both inventories.
fn partition_telegrams(telegrams: &[model::TelegramNode]) -> (Vec<Telegram>, Vec<Telegram>) {
    let mut pd_telegrams = Vec::new();
    let mut md_telegrams = Vec::new();

    for telegram in telegrams {
        let base = Telegram {
            name: text_or_empty(telegram.name.as_deref()),
            com_id: parse_number(telegram.com_id.as_deref()),
            dataset_id: parse_number(telegram.data_set_id.as_deref()),
            cycle: None,
            direction: TelegramDirection::classify(
                !telegram.source.is_empty(),
                !telegram.destination.is_empty(),
            ),
        };
        trace!(
            "Telegram '{}' classified as {}",
            base.name, base.direction
        );

        if let Some(pd) = &telegram.pd_parameter {
            pd_telegrams.push(Telegram {
                cycle: parse_number(pd.cycle.as_deref()),
                ..base
            });
        } else if let Some(md) = &telegram.md_parameter {
            md_telegrams.push(Telegram {
                cycle: parse_number(md.cycle.as_deref()),
                ..base
            });
        } else {
            debug!(
                "Telegram '{}' declares neither pd-parameter nor md-parameter; dropped from the inventory",
                base.name
            );
        }
    }

    (pd_telegrams, md_telegrams)
}

fn extract_datasets(device: &model::Device) -> Vec<Dataset> {
    let datasets = list_or_empty(device.data_set_list.as_ref().map(|list| &list.data_set));

    datasets
        .iter()
        .map(|data_set| Dataset {
            id: parse_number(data_set.id.as_deref()),
            name: text_or_empty(data_set.name.as_deref()),
            element_count: data_set.element.len(),
        })
        .collect()
}

// --- Helper Functions ---

/// Reads a possibly-absent list wrapper as an ordered sequence.
///
/// An absent wrapper (or an absent child sequence) is an empty sequence, a
/// single child tag is a one-element sequence, a repeated tag is taken
/// unchanged. Absence is not an error.
fn list_or_empty<T>(items: Option<&Vec<T>>) -> &[T] {
    items.map(Vec::as_slice).unwrap_or_default()
}

/// Reads a possibly-absent text scalar with an empty-string default.
fn text_or_empty(value: Option<&str>) -> String {
    value.map(String::from).unwrap_or_default()
}

/// Best-effort conversion of a loosely typed scalar to a number.
///
/// Absent or unparsable values read as `None`, never as zero: downstream
/// lookups must be able to tell a missing identifier from identifier 0.
fn parse_number<T: FromStr>(value: Option<&str>) -> Option<T> {
    value.and_then(|raw| raw.trim().parse().ok())
}
