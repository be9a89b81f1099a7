//! Generates zlib-compressed reference artifacts for a directory of
//! expected-output test fixtures.
//!
//! Every `<base>.out` file in the target directory gets a `<base>.zlib`
//! sibling holding its contents as a zlib stream. Artifacts that already
//! exist are left alone, so runs are idempotent.

use std::{io::Write, path::Path};

use tracing::info;

mod error;
pub mod generator;
pub mod scanner;

pub use error::FixtureError;
pub use generator::{Generator, Outcome, compress};
pub use scanner::{Fixture, Scanner};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub scanned: usize,
    pub generated: usize,
    pub skipped: usize,
}

/// Generates missing artifacts for every fixture in `dir`, one at a time.
///
/// Each fixture gets a `"<name>... "` progress line on `progress`, with
/// `"zlib... "` appended when an artifact was written and `"ok"` once the
/// fixture is done. The first error stops the run; artifacts written before
/// it stay on disk.
pub fn run<W: Write>(dir: &Path, progress: &mut W) -> Result<RunSummary, FixtureError> {
    let scanner = Scanner::open(dir)?;
    let generator = Generator::new(dir);
    let mut summary = RunSummary::default();

    for fixture in scanner {
        let fixture = fixture?;
        let report = |progress: &mut W, text: &str| -> Result<(), FixtureError> {
            progress
                .write_all(text.as_bytes())
                .and_then(|()| progress.flush())
                .map_err(|source| FixtureError::Progress {
                    path: generator.source_path(&fixture),
                    source,
                })
        };

        summary.scanned += 1;
        report(progress, &format!("{}... ", fixture.file_name.to_string_lossy()))?;

        match generator.generate(&fixture)? {
            // Reported after the write, so a failed fixture never shows `zlib... `.
            Outcome::Generated => {
                summary.generated += 1;
                report(progress, "zlib... ")?;
            }
            Outcome::Skipped => summary.skipped += 1,
        }

        report(progress, "ok\n")?;
    }

    info!(
        dir = %dir.display(),
        scanned = summary.scanned,
        generated = summary.generated,
        skipped = summary.skipped,
        "fixtures processed"
    );

    Ok(summary)
}
