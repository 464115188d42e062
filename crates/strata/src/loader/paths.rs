//! Naming convention for `.local.` override companions.

use std::path::{Path, PathBuf};

/// Path of the local override companion for a base config file.
///
/// The override lives next to the base file, with `.local` spliced in
/// before the extension: `app.json5` pairs with `app.local.json5`.
pub fn local_override_path(base: &Path) -> PathBuf {
    match base.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => base.with_extension(format!("local.{ext}")),
        None => base.with_extension("local"),
    }
}

/// Whether a path follows the `.local.<ext>` override convention.
pub(crate) fn is_local_override(path: &Path) -> bool {
    path.file_stem()
        .map(Path::new)
        .and_then(Path::extension)
        .is_some_and(|marker| marker.eq_ignore_ascii_case("local"))
}
