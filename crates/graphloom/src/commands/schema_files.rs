use libgraphloom::GraphLoom;
use libgraphloom::scalar;
use libgraphloom::scalar::ScalarConfig;
use libgraphloom::stock;
use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Schema files found under the paths given on the command line.
#[derive(Debug, Default)]
pub(crate) struct SchemaFiles {
    pub file_paths: Vec<PathBuf>,
    pub num_skipped: usize,
}

/// Recursively collect every file at or under `paths` whose extension is one
/// of `exts`.
///
/// If a single file path is passed it is used even when its extension does
/// not match.
pub(crate) fn discover(
    paths: &[PathBuf],
    exts: &[String],
) -> anyhow::Result<SchemaFiles> {
    let exts: HashSet<String> =
        exts.iter()
            .map(|ext| ext.trim_start_matches('.').to_string())
            .collect();

    log::debug!("Scanning {} input paths...", paths.len());
    let mut found = SchemaFiles::default();
    for path in paths {
        for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
            let entry = entry?;
            let entry_path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {entry_path:#?}.");
                continue;
            }

            let matches_ext = entry_path.extension()
                .map(|ext| exts.contains(&*ext.to_string_lossy()))
                .unwrap_or(false);
            if matches_ext {
                log::trace!("Found schema file at {entry_path:#?}.");
                found.file_paths.push(std::fs::canonicalize(entry_path)?);
            } else {
                found.num_skipped += 1;
            }
        }
    }

    if found.file_paths.is_empty()
        && let [single_path] = paths
        && single_path.is_file() {
        let single_path = std::fs::canonicalize(single_path)?;
        log::warn!(
            "Proceeding with {single_path:#?} even though it doesn't match \
            any of the schema file extensions ({}).",
            exts.iter()
                .map(|ext| format!("`.{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        found.num_skipped = 0;
        found.file_paths.push(single_path);
    }

    log::debug!("Found {} schema files.", found.file_paths.len());
    Ok(found)
}

/// A [`GraphLoom`] with the stock directives registered and `files` loaded.
///
/// Declared custom scalars get a pass-through config, since the command line
/// has no way to supply scalar behavior.
pub(crate) fn load_loom(files: &SchemaFiles) -> anyhow::Result<GraphLoom> {
    let mut loom = GraphLoom::new();
    loom.register_directives(stock::definitions())?;
    loom.load_files(&files.file_paths)?;

    let declared_scalars: Vec<String> =
        loom.declared_scalar_names()
            .into_iter()
            .filter(|name| !ScalarConfig::is_builtin_name(name))
            .filter(|name| *name != scalar::DATE_TIME_SCALAR_NAME)
            .map(|name| name.to_string())
            .collect();
    for scalar_name in declared_scalars {
        log::debug!("Registering pass-through config for scalar `{scalar_name}`.");
        loom.register_scalar(ScalarConfig::new(scalar_name))?;
    }
    Ok(loom)
}
