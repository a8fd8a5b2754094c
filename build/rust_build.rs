/**
 * Generates the metadata schema code and makes sure the compiled-in
 * metadata table is present before the crate is built.
 */

use std::path::Path;

use thiserror::Error;

const METADATA_SCHEMA: &str = "resources/phonemetadata.proto";
const METADATA_TABLE: &str = "resources/metadata.textproto";

#[derive(Debug, Error)]
enum BuildError {
    #[error("IO error occurred: {0}")]
    IO(#[from] std::io::Error),

    #[error("Metadata table '{path}' is empty")]
    EmptyMetadata { path: String },
}

fn check_metadata_table(path: &str) -> Result<(), BuildError> {
    let table = std::fs::metadata(Path::new(path))?;
    if table.len() == 0 {
        return Err(BuildError::EmptyMetadata { path: path.to_string() });
    }
    Ok(())
}

fn main() -> Result<(), BuildError> {
    println!("cargo:rerun-if-changed={}", METADATA_SCHEMA);
    println!("cargo:rerun-if-changed={}", METADATA_TABLE);

    check_metadata_table(METADATA_TABLE)?;

    protobuf_codegen::Codegen::new()
        .pure()
        .includes(["resources"])
        .input(METADATA_SCHEMA)
        .cargo_out_dir("proto_gen")
        .run_from_script();
    Ok(())
}
