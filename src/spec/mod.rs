//! Spec layer: YAML wire shapes + validated in-memory export model.
//!
//! This module is intentionally separate from emission. It owns:
//! - the raw serde shapes as they appear in the spec document
//! - ExportSpec, the validated read-only model both emitters consume

pub mod exports;

pub use exports::{
    DimensionDescriptor, ElemType, ExportSpec, RawSpec, ViewDescriptor, load_spec_file,
};
