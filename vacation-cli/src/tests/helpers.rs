//! Test helpers for writing planning files into temporary workspaces.

use camino::Utf8PathBuf;
use tempfile::TempDir;

/// A temporary directory holding one planning file.
pub(super) struct PlanWorkspace {
    _dir: TempDir,
    path: Utf8PathBuf,
}

impl PlanWorkspace {
    pub(super) fn with_contents(contents: &str) -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let path = root.join("vacation.toml");
        std::fs::write(&path, contents).expect("write planning file");
        Self { _dir: dir, path }
    }

    pub(super) fn path(&self) -> &Utf8PathBuf {
        &self.path
    }
}
