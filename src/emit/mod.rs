//! Emission layer: two pure functions from the export model to C text.
//!
//! Neither emitter can fail and neither touches the filesystem; the driver
//! renders both strings completely before writing anything, so a bad spec can
//! never leave a truncated header/source pair behind.

pub mod header;
pub mod source;

pub use header::emit_header;
pub use source::emit_source;

/// Marker line placed at the top of both artifacts. `spec_name` identifies
/// the input document so readers know what to regenerate from.
pub(crate) fn generated_marker(spec_name: &str) -> String {
    format!("// AUTO-GENERATED. Do not edit by hand. See {}\n", spec_name)
}
