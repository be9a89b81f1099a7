use std::{fs, path::PathBuf};

use tracing::debug;
use zlib_rs::{
    DeflateFlush, ReturnCode,
    deflate::{self, DeflateConfig},
};

use crate::{FixtureError, scanner::Fixture};

pub const ARTIFACT_EXTENSION: &str = "zlib";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Generated,
    Skipped,
}

/// Writes `<base>.zlib` artifacts for fixtures of one directory.
#[derive(Debug, Clone)]
pub struct Generator {
    dir: PathBuf,
}

impl Generator {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn source_path(&self, fixture: &Fixture) -> PathBuf {
        self.dir.join(&fixture.file_name)
    }

    pub fn artifact_path(&self, fixture: &Fixture) -> PathBuf {
        let mut name = fixture.base_name.clone();
        name.push(".");
        name.push(ARTIFACT_EXTENSION);
        self.dir.join(name)
    }

    /// Generates the artifact for `fixture` unless one already exists.
    ///
    /// An existing artifact is never inspected, so a stale one survives even
    /// if the fixture has changed since. The existence check and the write are
    /// separate steps: two runs racing on the same directory may both compress
    /// the same fixture.
    pub fn generate(&self, fixture: &Fixture) -> Result<Outcome, FixtureError> {
        let artifact = self.artifact_path(fixture);

        let exists = artifact
            .try_exists()
            .map_err(|source| FixtureError::Write {
                path: artifact.clone(),
                source,
            })?;
        if exists {
            debug!(artifact = %artifact.display(), "artifact exists, skipping");
            return Ok(Outcome::Skipped);
        }

        let source = self.source_path(fixture);
        let data = fs::read(&source).map_err(|err| FixtureError::Read {
            path: source.clone(),
            source: err,
        })?;

        let compressed = compress(&data).map_err(|code| FixtureError::Compress {
            path: source.clone(),
            code,
        })?;

        fs::write(&artifact, &compressed).map_err(|err| FixtureError::Write {
            path: artifact.clone(),
            source: err,
        })?;

        debug!(
            artifact = %artifact.display(),
            input_len = data.len(),
            output_len = compressed.len(),
            "generated artifact"
        );

        Ok(Outcome::Generated)
    }
}

/// Compresses `data` into a zlib stream at the default level: a two byte
/// header, the deflate payload and an Adler-32 trailer.
pub fn compress(data: &[u8]) -> Result<Vec<u8>, ReturnCode> {
    let mut buffer = vec![0; deflate::compress_bound(data.len())];

    let (deflated, err) = deflate::compress_slice_with_flush(
        &mut buffer,
        data,
        DeflateConfig::default(),
        DeflateFlush::Finish,
    );
    if err != ReturnCode::Ok {
        return Err(err);
    }
    let len = deflated.len();

    buffer.truncate(len);
    Ok(buffer)
}
