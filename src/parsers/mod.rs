pub mod clover;

use std::io::BufRead;

use quick_xml::events::BytesStart;
use quick_xml::Reader;

use crate::error::CloverMergeError;

/// Construct a quick-xml reader with the settings shared by all XML parsing
/// in this crate.
pub(crate) fn xml_reader<'r>(reader: &'r mut dyn BufRead) -> Reader<&'r mut dyn BufRead> {
    let mut xml = Reader::from_reader(reader);
    xml.trim_text(true);
    xml
}

/// Wrap a quick-xml error with the byte position it occurred at.
pub(crate) fn xml_err(source: quick_xml::Error, xml: &Reader<&mut dyn BufRead>) -> CloverMergeError {
    CloverMergeError::Xml {
        source,
        position: xml.buffer_position(),
    }
}

/// Fetch an attribute value from an element start tag, unescaped.
pub(crate) fn get_attr(e: &BytesStart<'_>, name: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == name)
        .and_then(|attr| attr.unescape_value().ok())
        .map(|v| v.into_owned())
}
