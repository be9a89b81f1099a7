use std::{
    ffi::{OsStr, OsString},
    fs::{self, ReadDir},
    path::{Path, PathBuf},
};

use tracing::trace;

use crate::FixtureError;

pub const FIXTURE_EXTENSION: &str = "out";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    pub file_name: OsString,
    pub base_name: OsString,
}

impl Fixture {
    /// Classifies a directory entry name, returning `None` for anything that
    /// is not a fixture. Dotfiles such as `.out` have no extension and are
    /// not fixtures.
    pub fn from_file_name(file_name: &OsStr) -> Option<Self> {
        let name = Path::new(file_name);
        if name.extension()? != FIXTURE_EXTENSION {
            return None;
        }
        let base_name = name.file_stem()?.to_owned();

        Some(Self {
            file_name: file_name.to_owned(),
            base_name,
        })
    }
}

/// Lazily enumerates the fixtures of a single directory, in whatever order the
/// filesystem lists them. Subdirectories are never descended into.
#[derive(Debug)]
pub struct Scanner {
    dir: PathBuf,
    entries: ReadDir,
}

impl Scanner {
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, FixtureError> {
        let dir = dir.into();
        let entries = fs::read_dir(&dir).map_err(|source| FixtureError::DirectoryAccess {
            path: dir.clone(),
            source,
        })?;

        Ok(Self { dir, entries })
    }
}

impl Iterator for Scanner {
    type Item = Result<Fixture, FixtureError>;

    fn next(&mut self) -> Option<Self::Item> {
        for entry in self.entries.by_ref() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(source) => {
                    return Some(Err(FixtureError::DirectoryAccess {
                        path: self.dir.clone(),
                        source,
                    }));
                }
            };

            let file_name = entry.file_name();
            let Some(fixture) = Fixture::from_file_name(&file_name) else {
                trace!(name = ?file_name, "not a fixture");
                continue;
            };

            // A failed lookup is left for the read to report.
            if entry.file_type().is_ok_and(|t| t.is_dir()) {
                trace!(name = ?file_name, "skipping directory");
                continue;
            }

            return Some(Ok(fixture));
        }

        None
    }
}
