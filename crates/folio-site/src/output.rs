//! Output directory allocation.

use std::env;
use std::path::{Path, PathBuf};

/// Return the first `<base>/Website <n>` path, n starting at 1, that does
/// not exist yet. Pure scan; nothing is created.
pub fn next_site_dir(base: &Path) -> PathBuf {
    let mut counter = 1;
    loop {
        let candidate = base.join(format!("Website {}", counter));
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}

/// Resolve the base directory for output.
///
/// A missing base path falls back to the current working directory so a run
/// on a machine without the configured path still produces a site.
pub fn resolve_base_dir(preferred: &Path) -> PathBuf {
    if preferred.exists() {
        return preferred.to_path_buf();
    }

    tracing::warn!(
        "Base directory {} does not exist, falling back to the current directory",
        preferred.display()
    );
    env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn empty_base_allocates_website_1() {
        let temp = tempdir().unwrap();

        assert_eq!(next_site_dir(temp.path()), temp.path().join("Website 1"));
    }

    #[test]
    fn contiguous_runs_allocate_the_next_index() {
        let temp = tempdir().unwrap();
        for n in 1..=3 {
            fs::create_dir(temp.path().join(format!("Website {}", n))).unwrap();
        }

        assert_eq!(next_site_dir(temp.path()), temp.path().join("Website 4"));
    }

    #[test]
    fn first_gap_wins() {
        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join("Website 1")).unwrap();
        fs::create_dir(temp.path().join("Website 3")).unwrap();

        assert_eq!(next_site_dir(temp.path()), temp.path().join("Website 2"));
    }

    #[test]
    fn allocation_has_no_side_effects() {
        let temp = tempdir().unwrap();

        let allocated = next_site_dir(temp.path());

        assert!(!allocated.exists());
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn existing_base_is_kept() {
        let temp = tempdir().unwrap();

        assert_eq!(resolve_base_dir(temp.path()), temp.path());
    }

    #[test]
    fn missing_base_falls_back_to_current_dir() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("no-such-dir");

        let resolved = resolve_base_dir(&missing);

        assert_ne!(resolved, missing);
        assert!(resolved.exists());
    }
}
