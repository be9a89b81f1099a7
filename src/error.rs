use std::{io, path::PathBuf};

use thiserror::Error;
use zlib_rs::ReturnCode;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("cannot read fixture directory {}", path.display())]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot read fixture {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write artifact {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to deflate {} ({code:?})", path.display())]
    Compress { path: PathBuf, code: ReturnCode },
    #[error("failed to report progress for {}", path.display())]
    Progress {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
