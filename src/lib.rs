//! Build-time generator for the mjwf WASM export surface.
//!
//! Reads a YAML spec of exported views/dims and emits a matched C header +
//! source pair of handle-checked accessors. The engine side (handle pool,
//! mjModel/mjData layout) is an external collaborator reached through three
//! forward-declared hooks; this crate only produces source text.

pub mod emit;
pub mod error;
pub mod spec;

pub type Result<T> = anyhow::Result<T>;
