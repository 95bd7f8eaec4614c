//! Path helpers shared by the argument mapper and the file loader.

use std::path::{Component, Path, PathBuf};

/// Makes `path` absolute against `base` and removes `.` and `..` components
/// lexically. The file system is not consulted.
#[must_use]
pub fn absolutize(base: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut out = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
