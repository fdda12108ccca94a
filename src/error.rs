use std::path::PathBuf;

/// Failure to bring a fixed asset (image or shader source) into memory.
///
/// Loading never retries and never substitutes a placeholder; the caller
/// decides whether to abort or report and exit.
#[derive(Debug, thiserror::Error)]
pub enum AssetLoadError {
    #[error("unable to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to decode image {}: {source}. Make sure the path is correct", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl AssetLoadError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            AssetLoadError::Io { path, .. } | AssetLoadError::Decode { path, .. } => path,
        }
    }
}
