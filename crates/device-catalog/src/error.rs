use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = CatalogError> = core::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unable to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to decode yaml in {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl CatalogError {
    /// Path of the directory or file that failed.
    pub fn path(&self) -> &std::path::Path {
        match self {
            CatalogError::Read { path, .. } | CatalogError::Decode { path, .. } => path,
        }
    }
}
