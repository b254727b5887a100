use std::path::{Component, MAIN_SEPARATOR, Path, PathBuf};

/// Make `raw` absolute against `base` and fold `.` and `..` lexically.
/// Nothing is read from disk, so the path does not have to exist.
pub fn absolute_path(base: &Path, raw: &str) -> PathBuf {
    let joined = base.join(raw);
    let mut out = PathBuf::new();

    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `/..` stays at the root
                if !matches!(out.components().next_back(), Some(Component::RootDir) | None) {
                    out.pop();
                }
            }
            other => out.push(other.as_os_str()),
        }
    }

    out
}

/// Absolute directory path that ends in exactly one separator.
///
/// One trailing `"` is dropped first: on Windows `"C:\dir\"` reaches the
/// program as `C:\dir"` because the backslash escapes the closing quote.
pub fn absolute_dir(base: &Path, raw: &str) -> PathBuf {
    let trimmed = raw.strip_suffix('"').unwrap_or(raw);
    let mut dir = absolute_path(base, trimmed).into_os_string();

    if !dir.to_string_lossy().ends_with(['/', MAIN_SEPARATOR]) {
        dir.push(MAIN_SEPARATOR.to_string());
    }

    PathBuf::from(dir)
}
