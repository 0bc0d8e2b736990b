//! Definition emitter: the generated C source.
//!
//! Each accessor body guards on mjwf_valid before touching either lookup
//! hook, then null-checks the record pointer even though a valid handle is
//! supposed to guarantee one. Views read through _mjwf_data_of (live state),
//! dims through _mjwf_model_of (static structure). The spec's `src`/`expr`
//! fragments land in the output verbatim.

use crate::emit::generated_marker;
use crate::spec::ExportSpec;

// The three hooks are defined in the handle-pool TU (mjwf_handles.c), which
// owns the pool array; this TU only forward-declares them. _mjwf_view_pair is
// unreferenced but kept so existing consumers of the header keep compiling.
const PREAMBLE: &str = r#"#include <mujoco/mujoco.h>
#include <stddef.h>
#if defined(__EMSCRIPTEN__)
#include <emscripten/emscripten.h>
#else
#ifndef EMSCRIPTEN_KEEPALIVE
#define EMSCRIPTEN_KEEPALIVE
#endif
#endif

// Handle-pool hooks, defined in mjwf_handles.c.
int mjwf_valid(int h);

typedef struct { mjModel* m; mjData* d; } _mjwf_view_pair;

extern mjModel* _mjwf_model_of(int h);
extern mjData*  _mjwf_data_of(int h);

"#;

/// Render the full implementation text for an export spec.
pub fn emit_source(spec: &ExportSpec, spec_name: &str) -> String {
    let mut out = generated_marker(spec_name);
    out.push_str(PREAMBLE);

    for v in &spec.views {
        let cty = v.elem.c_pointer();
        out.push_str(&format!(
            "EMSCRIPTEN_KEEPALIVE {} mjwf_{}_ptr(int h) {{\n",
            cty, v.name
        ));
        out.push_str("  if (!mjwf_valid(h)) return NULL;\n");
        out.push_str("  mjData* d = _mjwf_data_of(h);\n");
        out.push_str(&format!("  return d ? ({})({}) : NULL;\n", cty, v.src));
        out.push_str("}\n\n");
    }
    for d in &spec.dims {
        out.push_str(&format!("EMSCRIPTEN_KEEPALIVE int mjwf_{}(int h) {{\n", d.name));
        out.push_str("  if (!mjwf_valid(h)) return 0;\n");
        out.push_str("  mjModel* m = _mjwf_model_of(h);\n");
        out.push_str(&format!("  return m ? (int)({}) : 0;\n", d.expr));
        out.push_str("}\n\n");
    }

    out
}
