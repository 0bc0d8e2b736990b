//! Declaration emitter: the generated C header.
//!
//! Layout: marker, fixed preamble (stdint include, EMSCRIPTEN_KEEPALIVE shim,
//! extern "C" open), one declaration per view then per dim in spec order,
//! extern "C" close. Downstream builds may cache on the output hash, so the
//! text must be byte-stable for a given spec.

use crate::emit::generated_marker;
use crate::spec::ExportSpec;

const PREAMBLE: &str = r#"#pragma once
#include <stdint.h>
#if defined(__EMSCRIPTEN__)
#include <emscripten/emscripten.h>
#else
#ifndef EMSCRIPTEN_KEEPALIVE
#define EMSCRIPTEN_KEEPALIVE
#endif
#endif
#ifdef __cplusplus
extern "C" {
#endif
"#;

const POSTAMBLE: &str = r#"
#ifdef __cplusplus
}
#endif
"#;

/// Render the full header text for an export spec.
pub fn emit_header(spec: &ExportSpec, spec_name: &str) -> String {
    let mut out = generated_marker(spec_name);
    out.push_str(PREAMBLE);

    for v in &spec.views {
        out.push_str(&format!(
            "EMSCRIPTEN_KEEPALIVE {} mjwf_{}_ptr(int h);\n",
            v.elem.c_pointer(),
            v.name
        ));
    }
    for d in &spec.dims {
        out.push_str(&format!("EMSCRIPTEN_KEEPALIVE int mjwf_{}(int h);\n", d.name));
    }

    out.push_str(POSTAMBLE);
    out
}
