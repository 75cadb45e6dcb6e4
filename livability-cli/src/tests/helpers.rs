//! Temporary workspaces holding location and profile fixtures.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

pub(super) const SAMPLE_LOCATIONS: &str = r#"[
  {
    "name": "Bedok",
    "price": 450000.0,
    "crime_rate": 1.2,
    "num_schools": 12,
    "num_malls": 3,
    "num_transport": 5
  },
  {
    "location_name": "Bishan",
    "price": 620000.0,
    "crime_rate": 0.6,
    "num_schools": 9,
    "num_malls": 2,
    "num_transport": 4
  },
  {
    "name": "Tampines",
    "price": 500000.0,
    "num_schools": 15,
    "num_malls": 5,
    "num_transport": 6
  }
]"#;

pub(super) const SAMPLE_PROFILE: &str = r#"{
  "importance_rank": ["crime_rate", "price", "transport", "schools", "malls"],
  "ideal_price": 500000.0
}"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write fixture");
}

/// A temporary directory removed when dropped.
#[derive(Debug)]
pub(super) struct Workspace {
    _tmp: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        Self { _tmp: tmp, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, contents.as_bytes());
        path
    }

    pub(super) fn locations(&self) -> Utf8PathBuf {
        self.write("locations.json", SAMPLE_LOCATIONS)
    }

    pub(super) fn profile(&self) -> Utf8PathBuf {
        self.write("profile.json", SAMPLE_PROFILE)
    }
}
