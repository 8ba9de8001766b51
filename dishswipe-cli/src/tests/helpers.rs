//! Temporary workspaces holding a profile path and a candidate file.

use camino::Utf8PathBuf;
use dishswipe_core::FixedClock;
use dishswipe_core::test_support::sample_dishes;
use tempfile::TempDir;

pub(super) struct Workspace {
    _dir: TempDir,
    pub(super) root: Utf8PathBuf,
    pub(super) profile: Utf8PathBuf,
    pub(super) candidates: Utf8PathBuf,
}

impl Workspace {
    /// Create an empty workspace; neither file exists yet.
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self {
            profile: root.join("profile.json"),
            candidates: root.join("candidates.json"),
            root,
            _dir: dir,
        }
    }

    /// Create a workspace whose candidate file holds the sample dishes.
    pub(super) fn with_sample_candidates() -> Self {
        let workspace = Self::new();
        let payload = serde_json::to_string(&sample_dishes()).expect("serialise candidates");
        write_utf8(&workspace.candidates, payload.as_bytes());
        workspace
    }
}

pub(super) fn write_utf8(path: &Utf8PathBuf, contents: &[u8]) {
    std::fs::write(path, contents).expect("write file");
}

pub(super) fn evening() -> FixedClock {
    FixedClock::at_hour(19).expect("valid hour")
}
