//! Generation entry point: catalog file in, declaration file out.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::emit::{EmitConfig, render_catalog};

/// Read a catalog JSON file, render every definition, and write the
/// declaration file in one pass. The output file is always fully
/// overwritten, never appended to.
pub fn generate_declarations(
    catalog_path: &Path,
    output_path: &Path,
    config: &EmitConfig,
) -> Result<(), String> {
    let json = fs::read_to_string(catalog_path)
        .map_err(|err| format!("Failed to read catalog {}: {err}", catalog_path.display()))?;
    let catalog = Catalog::from_json(&json)?;

    debug!(
        output_path = %output_path.display(),
        definitions = catalog.types.len(),
        "Rendering type declarations."
    );

    let output = render_catalog(&catalog, config);

    // Ensure the output directory exists
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)
            .map_err(|err| format!("Failed to create output directory: {err}"))?;
    }

    fs::write(output_path, &output)
        .map_err(|err| format!("Failed to write {}: {err}", output_path.display()))?;

    info!(
        output_path = %output_path.display(),
        output_len = output.len(),
        "Type declarations generated successfully."
    );

    Ok(())
}
