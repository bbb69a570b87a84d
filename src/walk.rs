use ignore::WalkBuilder;
use std::path::Path;

/// Collect the relative paths of every regular file under `root/subdir`,
/// at every depth.
///
/// Standard filters are disabled: hidden files are included and no ignore
/// rules apply, so this behaves as a plain filesystem walk. A missing root
/// or subdirectory quietly yields an empty list and therefore empty
/// reports.
pub fn walk_files(root: &Path, subdir: &str) -> Vec<String> {
    let base = root.join(subdir);
    if !base.is_dir() {
        return Vec::new();
    }

    let mut files = Vec::new();
    for entry in WalkBuilder::new(&base).standard_filters(false).build().flatten() {
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        if let Ok(rel) = entry.path().strip_prefix(root) {
            files.push(rel.to_string_lossy().into_owned());
        }
    }
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn collects_nested_files_relative_to_root() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src/hotspot/share/gc/g1")).unwrap();
        fs::write(dir.path().join("src/hotspot/share/gc/g1/g1.cpp"), "x").unwrap();
        fs::write(dir.path().join("src/hotspot/share/os.cpp"), "y").unwrap();
        fs::write(dir.path().join("README"), "not scanned").unwrap();

        let mut files = walk_files(dir.path(), "src/hotspot");
        files.sort();
        assert_eq!(
            files,
            vec![
                "src/hotspot/share/gc/g1/g1.cpp".to_string(),
                "src/hotspot/share/os.cpp".to_string(),
            ]
        );
    }

    #[test]
    fn hidden_files_are_included() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src/hotspot")).unwrap();
        fs::write(dir.path().join("src/hotspot/.hidden"), "h").unwrap();

        let files = walk_files(dir.path(), "src/hotspot");
        assert_eq!(files, vec!["src/hotspot/.hidden".to_string()]);
    }

    #[test]
    fn missing_subdir_yields_empty_list() {
        let dir = tempdir().unwrap();
        assert!(walk_files(dir.path(), "src/hotspot").is_empty());
    }
}
