use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};


/// Returns the default configuration filepath, which is at
/// `./data/configuration.toml` (relative to the current working directory).
pub fn get_default_configuration_file_path() -> PathBuf {
    PathBuf::from("./data/configuration.toml")
}


/// Substitutes placeholders (e.g. `{BASE_DATA_DIRECTORY}`)
/// appearing in `path` with their corresponding values.
pub(crate) fn replace_placeholders_in_path(
    path: &Path,
    placeholders: HashMap<&'static str, String>,
) -> PathBuf {
    let mut path_string = path.to_string_lossy().to_string();

    for (placeholder, replacement) in placeholders {
        path_string = path_string.replace(placeholder, &replacement);
    }

    PathBuf::from(path_string)
}
