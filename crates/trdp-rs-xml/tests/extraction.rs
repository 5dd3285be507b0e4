// crates/trdp-rs-xml/tests/extraction.rs

//! End-to-end extraction scenarios over complete documents.

use trdp_rs_xml::{ConfigSummary, Telegram, TelegramDirection, TrdpXmlError, load_summary_from_str};

/// A complete single-interface document: one periodic telegram with a
/// source endpoint, and one dataset with three elements.
const SPEED_UNIT_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<device host-name="UNIT01" type="ED">
  <bus-interface-list>
    <bus-interface network-id="1" name="eth0" host-ip="10.0.1.17">
      <telegram name="Speed" com-id="100" data-set-id="5">
        <source id="1" uri1="dev1@10.0.1.17"/>
        <pd-parameter cycle="10"/>
      </telegram>
    </bus-interface>
  </bus-interface-list>
  <data-set-list>
    <data-set id="5" name="SpeedSet">
      <element name="speed" type="UINT16"/>
      <element name="heading" type="UINT8"/>
      <element name="valid" type="BOOL8"/>
    </data-set>
  </data-set-list>
</device>"#;

fn summarize(xml: &str) -> ConfigSummary {
    load_summary_from_str(xml).expect("document should summarize")
}

#[test]
fn periodic_telegram_with_source_endpoint() {
    let summary = summarize(SPEED_UNIT_XML);

    assert_eq!(summary.device.host_name, "UNIT01");
    assert_eq!(summary.device.device_type, "ED");

    assert_eq!(summary.interfaces.len(), 1);
    let iface = &summary.interfaces[0];
    assert_eq!(iface.name, "eth0");
    assert_eq!(iface.network_id, Some(1));
    assert_eq!(iface.host_ip, "10.0.1.17");

    assert_eq!(
        iface.pd_telegrams,
        vec![Telegram {
            name: "Speed".into(),
            com_id: Some(100),
            dataset_id: Some(5),
            cycle: Some(10),
            direction: TelegramDirection::Source,
        }]
    );
    assert!(iface.md_telegrams.is_empty());
}

#[test]
fn source_and_destination_classify_as_source_sink() {
    let xml = SPEED_UNIT_XML.replace(
        r#"<source id="1" uri1="dev1@10.0.1.17"/>"#,
        r#"<source id="1" uri1="dev1@10.0.1.17"/>
        <destination id="2" uri="dev2@10.0.1.18"/>"#,
    );
    let summary = summarize(&xml);

    let telegram = &summary.interfaces[0].pd_telegrams[0];
    assert_eq!(telegram.direction, TelegramDirection::SourceSink);
}

#[test]
fn dataset_element_count_reflects_declared_elements() {
    let summary = summarize(SPEED_UNIT_XML);

    assert_eq!(summary.datasets.len(), 1);
    let dataset = &summary.datasets[0];
    assert_eq!(dataset.id, Some(5));
    assert_eq!(dataset.name, "SpeedSet");
    assert_eq!(dataset.element_count, 3);
}

#[test]
fn missing_device_root_is_an_error() {
    let xml = r#"<?xml version="1.0"?>
<bus-interface-list>
  <bus-interface name="eth0"/>
</bus-interface-list>"#;

    let result = load_summary_from_str(xml);
    assert!(
        matches!(
            result,
            Err(TrdpXmlError::MissingElement { element: "device" })
        ),
        "Expected MissingElement error for the device root, got {:?}",
        result
    );
}

#[test]
fn empty_document_is_an_error() {
    let result = load_summary_from_str("");
    assert!(matches!(result, Err(TrdpXmlError::MissingElement { .. })));
}

#[test]
fn bare_device_root_yields_empty_summary() {
    let summary = summarize(r#"<device host-name="solo"/>"#);

    assert_eq!(summary.device.host_name, "solo");
    assert_eq!(summary.device.device_type, "");
    assert!(summary.interfaces.is_empty());
    assert!(summary.datasets.is_empty());
}

#[test]
fn extraction_is_idempotent() {
    // Two extractions of the same document are structurally equal.
    assert_eq!(summarize(SPEED_UNIT_XML), summarize(SPEED_UNIT_XML));
}
