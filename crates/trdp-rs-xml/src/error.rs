// crates/trdp-rs-xml/src/error.rs

use core::fmt;
use quick_xml::Error as XmlError;
use quick_xml::errors::serialize::DeError;

/// Errors that can occur while reading a device-description document.
///
/// Field-level absence or malformation is never an error; it resolves to a
/// documented default during extraction. Only an unparsable document or a
/// missing `device` root surfaces here.
#[derive(Debug)]
pub enum TrdpXmlError {
    /// An error from the underlying `quick-xml` deserializer.
    XmlParsing(DeError),

    /// An error from the underlying `quick-xml` event reader.
    XmlReading(XmlError),

    /// A required XML element was missing (e.g., the `device` root).
    MissingElement { element: &'static str },
}

impl From<DeError> for TrdpXmlError {
    fn from(e: DeError) -> Self {
        TrdpXmlError::XmlParsing(e)
    }
}

impl From<XmlError> for TrdpXmlError {
    fn from(e: XmlError) -> Self {
        TrdpXmlError::XmlReading(e)
    }
}

impl fmt::Display for TrdpXmlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrdpXmlError::XmlParsing(e) => write!(f, "XML parsing error: {}", e),
            TrdpXmlError::XmlReading(e) => write!(f, "XML reading error: {}", e),
            TrdpXmlError::MissingElement { element } => {
                write!(f, "Missing required XML element: {}", element)
            }
        }
    }
}
