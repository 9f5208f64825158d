use std::path::PathBuf;

const PROTOS: &[&str] = &[
    "proto/opentelemetry/proto/collector/trace/v1/trace_service.proto",
    "proto/opentelemetry/proto/collector/logs/v1/logs_service.proto",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR")?);

    // message and service code comes from opentelemetry-proto; only the
    // encoded descriptor set is needed here, for server reflection
    tonic_prost_build::configure()
        .build_server(false)
        .build_client(false)
        .file_descriptor_set_path(out_dir.join("otlp_descriptor.bin"))
        .compile_protos(PROTOS, &["proto"])?;

    println!("cargo:rerun-if-changed=proto");

    Ok(())
}
