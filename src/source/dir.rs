use super::{DocumentSource, MatchResource};
use crate::error::{ScResult, StageCardError};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads previously downloaded documents from a local directory.
///
/// Files are looked up as `<root>/<match_id>/<file>` first, then `<root>/<file>`,
/// so both a bucket mirror and a single flat download work.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn resolve(&self, match_id: &str, resource: MatchResource) -> PathBuf {
        let nested = self.root.join(match_id).join(resource.file_name());
        if nested.is_file() {
            nested
        } else {
            self.root.join(resource.file_name())
        }
    }
}

impl DocumentSource for DirSource {
    async fn fetch(&self, match_id: &str, resource: MatchResource) -> ScResult<String> {
        let path = self.resolve(match_id, resource);
        debug!("Reading {}", path.display());
        let read = tokio::fs::read_to_string(&path).await;
        read.map_err(|source| StageCardError::Io { path, source })
    }
}
