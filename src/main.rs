use clap::Parser;
use mjwf_exportgen::Result;
use mjwf_exportgen::emit::{emit_header, emit_source};
use mjwf_exportgen::spec::load_spec_file;

#[derive(Parser)]
#[command(name = "mjwf-exportgen")]
#[command(about = "Generate the mjwf C export surface from a YAML spec", long_about = None)]
struct Cli {
    /// Export spec document (views + dims).
    spec: String,

    /// Output path for the declaration header.
    header_out: String,

    /// Output path for the implementation source.
    source_out: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1) Load + validate the spec. Any malformed entry aborts here, before
    // either output path is touched.
    let spec = load_spec_file(&cli.spec)?;

    // 2) Render both artifacts in full. Emission is pure and infallible, so
    // once we reach the writes there is nothing left that can half-fail.
    let header = emit_header(&spec, &cli.spec);
    let source = emit_source(&spec, &cli.spec);

    // 3) Write.
    std::fs::write(&cli.header_out, header)?;
    std::fs::write(&cli.source_out, source)?;
    println!("Wrote {}", cli.header_out);
    println!("Wrote {}", cli.source_out);

    Ok(())
}
