//! Bounded directory traversal

use super::rules::IgnoreRules;
use std::path::{Path, PathBuf};
use tracing::trace;
use walkdir::{DirEntry, WalkDir};

/// List regular files under `root`, at most `max_depth` levels deep and at
/// most `budget` entries.
///
/// Ignored and hidden directories are pruned rather than filtered afterwards.
/// Unreadable entries and broken links are skipped; the walk carries on.
pub fn list_files_under(
    root: &Path,
    max_depth: usize,
    rules: &IgnoreRules,
    budget: usize,
) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if budget == 0 {
        return files;
    }

    let walker = WalkDir::new(root)
        .max_depth(max_depth)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_skipped_dir(entry, rules));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                trace!("Skipping unreadable entry under {}: {}", root.display(), err);
                continue;
            }
        };

        if !is_regular_file(&entry) || rules.skips_file(entry.path()) {
            continue;
        }

        files.push(entry.into_path());
        if files.len() >= budget {
            break;
        }
    }

    files
}

fn is_skipped_dir(entry: &DirEntry, rules: &IgnoreRules) -> bool {
    entry.file_type().is_dir() && rules.skips_dir(&entry.file_name().to_string_lossy())
}

/// Regular files, including symlinks that resolve to one
fn is_regular_file(entry: &DirEntry) -> bool {
    if entry.file_type().is_file() {
        return true;
    }
    entry.path_is_symlink() && entry.path().is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FileIndexConfig;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_depth_limit() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("a/b")).unwrap();
        fs::write(root.join("top.txt"), "").unwrap();
        fs::write(root.join("a/mid.txt"), "").unwrap();
        fs::write(root.join("a/b/deep.txt"), "").unwrap();

        let rules = IgnoreRules::default();
        let shallow = list_files_under(root, 1, &rules, usize::MAX);
        assert_eq!(shallow, vec![root.join("top.txt")]);

        let all = list_files_under(root, 3, &rules, usize::MAX);
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_budget_stops_walk() {
        let temp_dir = TempDir::new().unwrap();
        for i in 0..10 {
            fs::write(temp_dir.path().join(format!("file{i}.txt")), "").unwrap();
        }

        let files = list_files_under(temp_dir.path(), 3, &IgnoreRules::default(), 4);
        assert_eq!(files.len(), 4);
        assert!(list_files_under(temp_dir.path(), 3, &IgnoreRules::default(), 0).is_empty());
    }

    #[test]
    fn test_missing_root_yields_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");
        assert!(list_files_under(&missing, 3, &IgnoreRules::default(), 10).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_broken_symlink_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("real.txt"), "").unwrap();
        std::os::unix::fs::symlink(root.join("real.txt"), root.join("link.txt")).unwrap();
        std::os::unix::fs::symlink(root.join("gone.txt"), root.join("broken.txt")).unwrap();

        let mut files = list_files_under(root, 2, &IgnoreRules::default(), usize::MAX);
        files.sort();
        assert_eq!(files, vec![root.join("link.txt"), root.join("real.txt")]);
    }

    #[test]
    fn test_ignored_and_hidden_dirs_pruned_at_any_depth() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        for relative in [
            "keep.txt",
            "a/.config/b.txt",
            "a/node_modules/pkg/index.js",
            "photos/2024/a.jpg",
            "docs/envelope.txt",
            "logs/Server.LOG",
        ] {
            let path = root.join(relative);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "").unwrap();
        }

        let config = FileIndexConfig::default().with_ignored_dirs(["photos"]);
        let mut files = list_files_under(root, 4, &IgnoreRules::from_config(&config), usize::MAX);
        files.sort();
        assert_eq!(files, vec![root.join("docs/envelope.txt"), root.join("keep.txt")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_dir_does_not_stop_walk() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let locked = root.join("locked");
        fs::create_dir_all(&locked).unwrap();
        fs::write(locked.join("secret.txt"), "").unwrap();
        fs::write(root.join("before.txt"), "").unwrap();
        fs::create_dir_all(root.join("open")).unwrap();
        fs::write(root.join("open/after.txt"), "").unwrap();

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
        let files = list_files_under(root, 3, &IgnoreRules::default(), usize::MAX);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert!(files.contains(&root.join("before.txt")));
        assert!(files.contains(&root.join("open/after.txt")));
    }
}
