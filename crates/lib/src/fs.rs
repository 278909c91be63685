use camino::Utf8Path as Path;
use tracing::warn;

pub fn path_has_extensions(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .is_some_and(|ext| extensions.contains(&ext))
}

/// Names of the regular files directly inside `dir`, sorted ascending.
/// Entries whose names are not UTF-8 are skipped.
pub fn file_names(dir: &Path) -> Result<Vec<String>, std::io::Error> {
    let mut names = std::fs::read_dir(dir)?
        .filter_map(|entry| {
            entry
                .map(|entry| {
                    if !entry.path().is_file() {
                        return None;
                    }
                    match entry.file_name().into_string() {
                        Ok(name) => Some(name),
                        Err(name) => {
                            warn!("skipping non-UTF-8 file name {name:?}");
                            None
                        }
                    }
                })
                .transpose()
        })
        .collect::<Result<Vec<_>, _>>()?;
    names.sort();
    Ok(names)
}
