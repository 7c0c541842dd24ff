//! Parser for Clover XML coverage reports.
//!
//! Clover XML structure (as produced by OpenClover, Atlassian Clover, and
//! various plugins like `jest --coverageReporters=clover`, PHPUnit, etc.):
//!
//!   <coverage generated="..." clover="4.x.x">
//!     <project timestamp="..." name="...">
//!       <metrics .../>
//!       <package name="...">
//!         <file name="Foo.ts" path="/absolute/path/to/Foo.ts">
//!           <class name="Foo"><metrics .../></class>
//!           <line num="1" count="5" type="stmt"/>
//!           <line num="3" count="2" type="method" signature="do_stuff()"/>
//!           <line num="5" count="1" type="cond" truecount="1" falsecount="1"/>
//!         </file>
//!       </package>
//!     </project>
//!   </coverage>
//!
//! We collect `<file>` elements wherever they appear in the tree (the exact
//! nesting varies between Clover producers), but only the `<line>` elements
//! that are *direct* children of a `<file>` count — a `<line>` buried under
//! some other descendant belongs to that element, not the file. Only
//! `type="stmt"` records carry line coverage; `method` and `cond` records
//! are skipped. The `path` attribute is taken verbatim as the file key.

use std::io::BufRead;

use quick_xml::events::Event;

use super::{get_attr, xml_err, xml_reader};
use crate::error::Result;
use crate::model::{CoverageData, FileCoverage, LineCoverage};

/// Parse Clover XML coverage data from raw bytes.
pub fn parse(input: &[u8]) -> Result<CoverageData> {
    let mut data = CoverageData::new();
    parse_streaming(&mut &*input, &mut |file| {
        data.files.push(file);
        Ok(())
    })?;
    Ok(data)
}

/// Streaming Clover parser — calls `emit` once per `</file>`, in document
/// order. A document with no `<file>` elements emits nothing.
fn parse_streaming(
    reader: &mut dyn BufRead,
    emit: &mut dyn FnMut(FileCoverage) -> Result<()>,
) -> Result<()> {
    let mut xml = xml_reader(reader);
    let mut buf = Vec::new();

    // Depth of open elements; `file_depth` is the depth *inside* the current
    // <file>, so its direct children are the events seen at exactly that
    // depth.
    let mut depth = 0usize;
    let mut file_depth = 0usize;
    let mut current_file: Option<FileCoverage> = None;

    loop {
        let event = xml.read_event_into(&mut buf);
        match event {
            Err(e) => return Err(xml_err(e, &xml)),
            Ok(Event::Eof) => break,
            Ok(Event::Start(ref e)) => {
                match e.name().as_ref() {
                    b"file" => {
                        let path = get_attr(e, b"path").unwrap_or_default();
                        current_file = Some(FileCoverage::new(path));
                        file_depth = depth + 1;
                    }
                    b"line" => record_line(e, depth, file_depth, current_file.as_mut()),
                    _ => {}
                }
                depth += 1;
            }
            Ok(Event::Empty(ref e)) => match e.name().as_ref() {
                // A self-closed <file/> has no lines but still counts.
                b"file" => {
                    let path = get_attr(e, b"path").unwrap_or_default();
                    emit(FileCoverage::new(path))?;
                }
                b"line" => record_line(e, depth, file_depth, current_file.as_mut()),
                _ => {}
            },
            Ok(Event::End(ref e)) => {
                if e.name().as_ref() == b"file" && depth == file_depth {
                    if let Some(file) = current_file.take() {
                        emit(file)?;
                    }
                }
                depth = depth.saturating_sub(1);
            }
            _ => {}
        }
        buf.clear();
    }

    // Handle unclosed file
    if let Some(file) = current_file.take() {
        emit(file)?;
    }

    Ok(())
}

/// Record a `<line>` if it is a direct child of the current `<file>` and is
/// a statement record.
fn record_line(
    e: &quick_xml::events::BytesStart<'_>,
    depth: usize,
    file_depth: usize,
    current_file: Option<&mut FileCoverage>,
) {
    let Some(file) = current_file else { return };
    if depth != file_depth {
        return;
    }

    if get_attr(e, b"type").as_deref() != Some("stmt") {
        return;
    }

    let num: Option<u32> = get_attr(e, b"num").and_then(|v| v.parse().ok());
    let count: u64 = get_attr(e, b"count")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);

    if let Some(line_number) = num {
        file.lines.push(LineCoverage {
            line_number,
            hit_count: count,
        });
    }
}
