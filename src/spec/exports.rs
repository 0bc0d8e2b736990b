//! Export spec (spec.yaml): raw wire shapes and the validated ExportSpec.
//!
//! YAML shape:
//! ```yaml
//! views:
//!   - { name: qpos, src: "d->qpos", dtype: f64 }
//!   - { name: ctrl, src: "d->ctrl", dtype: f64 }
//! dims:
//!   - nq: m->nq
//!   - nv: m->nv
//! ```
//!
//! Both top-level keys are optional (absent == empty). A `dims` entry is a
//! single-key mapping, not a record; that is the documented wire format and
//! the loader flattens it rather than generalizing it.
//!
//! `src`/`expr` values are trusted C fragments copied verbatim into the
//! generated source. We validate names and dtypes, never the expressions.

use crate::error::SpecError;
use regex::Regex;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Raw document shape as it appears in spec.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSpec {
    #[serde(default)]
    pub views: Vec<RawView>,

    #[serde(default)]
    pub dims: Vec<BTreeMap<String, String>>,
}

/// Raw view entry. `dtype` stays a string here so an unknown tag is reported
/// as UnsupportedDtype by validation instead of a generic decode error.
#[derive(Debug, Clone, Deserialize)]
pub struct RawView {
    pub name: String,
    pub src: String,
    pub dtype: String,
}

/// Element type of a view accessor. Exactly two variants; anything else on
/// the wire fails the load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElemType {
    F64,
    I32,
}

impl ElemType {
    /// C pointer type returned by the accessor.
    pub fn c_pointer(self) -> &'static str {
        match self {
            ElemType::F64 => "double*",
            ElemType::I32 => "int32_t*",
        }
    }
}

/// Validated flat-array accessor over the per-handle data record.
#[derive(Debug, Clone)]
pub struct ViewDescriptor {
    pub name: String,
    pub src: String,
    pub elem: ElemType,
}

/// Validated scalar accessor over the per-handle model record.
#[derive(Debug, Clone)]
pub struct DimensionDescriptor {
    pub name: String,
    pub expr: String,
}

/// Validated, read-only export model. Built once per run; emission order is
/// exactly the document order.
#[derive(Debug, Clone)]
pub struct ExportSpec {
    pub views: Vec<ViewDescriptor>,
    pub dims: Vec<DimensionDescriptor>,
}

/// Read and validate a spec document from disk.
pub fn load_spec_file(path: &str) -> anyhow::Result<ExportSpec> {
    use anyhow::Context;

    let text = std::fs::read_to_string(path).with_context(|| format!("read spec file {}", path))?;
    let raw: RawSpec =
        serde_yml::from_str(&text).with_context(|| format!("parse spec file {}", path))?;
    raw.validate_and_build()
        .with_context(|| format!("invalid spec file {}", path))
}

impl RawSpec {
    /// Flatten dim entries, resolve dtypes, and enforce name rules.
    pub fn validate_and_build(&self) -> anyhow::Result<ExportSpec> {
        // Names become C symbols (mjwf_<name>, mjwf_<name>_ptr); anything
        // outside this set breaks the emitted translation unit.
        let ident = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$")?;

        // 1) Views: dtype tag -> ElemType, rejecting unknown tags.
        let mut views = Vec::with_capacity(self.views.len());
        for v in &self.views {
            if !ident.is_match(&v.name) {
                return Err(SpecError::BadName {
                    name: v.name.clone(),
                }
                .into());
            }
            let elem = match v.dtype.as_str() {
                "f64" => ElemType::F64,
                "i32" => ElemType::I32,
                other => {
                    return Err(SpecError::UnsupportedDtype {
                        view: v.name.clone(),
                        dtype: other.to_string(),
                    }
                    .into());
                }
            };
            views.push(ViewDescriptor {
                name: v.name.clone(),
                src: v.src.clone(),
                elem,
            });
        }

        // 2) Dims: each wire entry must be a single-key mapping.
        let mut dims = Vec::with_capacity(self.dims.len());
        for (i, entry) in self.dims.iter().enumerate() {
            if entry.len() != 1 {
                return Err(SpecError::Format(format!(
                    "dims[{}] must be a single-key mapping, got {} keys",
                    i,
                    entry.len()
                ))
                .into());
            }
            for (name, expr) in entry {
                if !ident.is_match(name) {
                    return Err(SpecError::BadName { name: name.clone() }.into());
                }
                dims.push(DimensionDescriptor {
                    name: name.clone(),
                    expr: expr.clone(),
                });
            }
        }

        // 3) Unique names across the union; a collision only surfaces later
        // as a C symbol clash, so catch it here.
        let mut seen = std::collections::BTreeSet::new();
        for name in views.iter().map(|v| &v.name).chain(dims.iter().map(|d| &d.name)) {
            if !seen.insert(name.clone()) {
                return Err(SpecError::DuplicateName { name: name.clone() }.into());
            }
        }

        Ok(ExportSpec { views, dims })
    }
}
