//! HAR-to-JMX conversion pipeline: filter, build, assemble, serialize.

mod cookies;
mod filter;
mod headers;
mod plan;
mod rewrite;
mod sampler;

pub use cookies::build_cookie_manager;
pub use filter::{filter_entries, FilteredEntry};
pub use headers::build_header_manager;
pub use plan::build_plan;
pub use rewrite::{origin_of, substitute_origin};
pub use sampler::build_sampler;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::config::ConvertConfig;
use crate::error::Result;
use crate::har::parse_har_file;
use crate::jmx::write_document;

/// Convert one HAR file into one JMX file.
///
/// The whole run is a single pass: load the capture, filter entries,
/// assemble the plan tree in memory, serialize it once.
pub fn run_convert(input: &Path, output: &Path, config: &ConvertConfig) -> Result<()> {
    let har = parse_har_file(input)?;
    let total = har.log.entries.len();

    let filtered = filter_entries(&har.log.entries, config)?;
    let plan = build_plan(&filtered, config)?;

    let mut writer = BufWriter::new(File::create(output)?);
    write_document(&mut writer, &plan)?;
    writer.flush()?;

    println!(
        "Converted {} of {} entries to {}",
        filtered.len(),
        total,
        output.display()
    );

    Ok(())
}
