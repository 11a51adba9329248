//! Run driver: snapshot the walk, then resolve, name and move each file in turn.
//! A failure on one file is reported and the run carries on with the next.

use anyhow::anyhow;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use crate::capture::{capture_time, TimestampSource};
use crate::config::Config;
use crate::errors::ExifSortError;
use crate::fs_ops::move_file;
use crate::naming::{name_destination, primary_destination};
use crate::output as out;
use crate::walk::FileWalk;

/// What happened to one source file.
#[derive(Debug)]
pub enum MoveOutcome {
    Moved {
        src: PathBuf,
        dest: PathBuf,
        collision: bool,
        source: TimestampSource,
    },
    /// The file already sits at its primary destination.
    AlreadyInPlace { path: PathBuf },
    Failed {
        src: PathBuf,
        dest: Option<PathBuf>,
        error: anyhow::Error,
    },
}

impl MoveOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, MoveOutcome::Failed { .. })
    }
}

/// Counters for a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub moved: usize,
    pub duplicates: usize,
    pub in_place: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.moved + self.in_place + self.failed
    }

    fn record(&mut self, outcome: &MoveOutcome) {
        match outcome {
            MoveOutcome::Moved { collision, .. } => {
                self.moved += 1;
                if *collision {
                    self.duplicates += 1;
                }
            }
            MoveOutcome::AlreadyInPlace { .. } => self.in_place += 1,
            MoveOutcome::Failed { .. } => self.failed += 1,
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} file(s): {} moved ({} to duplicates), {} already in place, {} failed",
            self.total(),
            self.moved,
            self.duplicates,
            self.in_place,
            self.failed
        )
    }
}

/// Organizes the files of one input directory according to a `Config`.
pub struct Sorter<'a> {
    config: &'a Config,
}

impl<'a> Sorter<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    pub fn walk(&self) -> FileWalk {
        FileWalk::new(&self.config.input_dir, self.config.recursive)
    }

    /// Process every file, printing one record per file.
    pub fn run(&self) -> RunSummary {
        self.run_with(report)
    }

    /// Process every file, handing each outcome to `on_outcome`.
    pub fn run_with<F>(&self, mut on_outcome: F) -> RunSummary
    where
        F: FnMut(&MoveOutcome),
    {
        // collected up front so directories created by this run are never visited
        let walk = self.walk();
        let files: Vec<PathBuf> = walk.iter().collect();
        debug!(
            root = %walk.root().display(),
            recursive = walk.is_recursive(),
            count = files.len(),
            "Collected files"
        );

        let mut summary = RunSummary::default();
        for src in &files {
            let outcome = self.process_file(src);
            summary.record(&outcome);
            if outcome.is_failure() {
                debug!(src = %src.display(), "Continuing after failure");
            }
            on_outcome(&outcome);
        }

        info!(
            moved = summary.moved,
            duplicates = summary.duplicates,
            in_place = summary.in_place,
            failed = summary.failed,
            "{summary}"
        );
        summary
    }

    /// Resolve, name and move a single file.
    pub fn process_file(&self, src: &Path) -> MoveOutcome {
        let Some(file_name) = src.file_name() else {
            return MoveOutcome::Failed {
                src: src.to_path_buf(),
                dest: None,
                error: anyhow!("path has no file name"),
            };
        };

        let ts = capture_time(src);
        let output_root = self.config.output_dir();
        let format = &self.config.format;

        if primary_destination(&ts, output_root, file_name, format) == src {
            debug!(path = %src.display(), "Already in place");
            return MoveOutcome::AlreadyInPlace {
                path: src.to_path_buf(),
            };
        }

        let dest = name_destination(&ts, output_root, file_name, format);
        debug!(
            src = %src.display(),
            dest = %dest.path().display(),
            source = ts.source().as_str(),
            collision = dest.is_collision(),
            "Resolved destination"
        );

        let collision = dest.is_collision();
        let dest = dest.into_path();
        match move_file(src, &dest) {
            Ok(()) => MoveOutcome::Moved {
                src: src.to_path_buf(),
                dest,
                collision,
                source: ts.source(),
            },
            Err(e) => {
                log_failure(src, &dest, &e);
                MoveOutcome::Failed {
                    src: src.to_path_buf(),
                    dest: Some(dest),
                    error: e,
                }
            }
        }
    }
}

fn log_failure(src: &Path, dest: &Path, e: &anyhow::Error) {
    if let Some(known) = e.downcast_ref::<ExifSortError>() {
        error!(
            code = known.code(),
            kind = known.kind(),
            src = %src.display(),
            dest = %dest.display(),
            "Move failed"
        );
    } else {
        error!(src = %src.display(), dest = %dest.display(), error = %format!("{e:#}"), "Move failed");
    }
}

/// Default per-file record: success lines on stdout, failures and notes on stderr.
pub fn report(outcome: &MoveOutcome) {
    match outcome {
        MoveOutcome::Moved { src, dest, .. } => out::print_move(src, dest),
        MoveOutcome::AlreadyInPlace { path } => {
            out::print_info(&format!("Already in place: {}", path.display()))
        }
        MoveOutcome::Failed { src, dest, error } => {
            let dest = dest
                .as_deref()
                .map(|d| d.display().to_string())
                .unwrap_or_default();
            out::print_move_failure(src, &dest, &format!("{error:#}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::testdata::jpeg_with_original;
    use std::fs;
    use tempfile::tempdir;

    /// Run and keep (dest, source) for every moved file.
    fn collect(cfg: &Config) -> (RunSummary, Vec<(PathBuf, TimestampSource)>) {
        let mut moved = Vec::new();
        let summary = Sorter::new(cfg).run_with(|o| {
            if let MoveOutcome::Moved { dest, source, .. } = o {
                moved.push((dest.clone(), *source));
            }
        });
        (summary, moved)
    }

    #[test]
    fn moves_exif_file_into_date_tree() {
        let td = tempdir().unwrap();
        fs::write(td.path().join("a.jpg"), jpeg_with_original("2023:06:01 10:00:00", None)).unwrap();

        let cfg = Config::new(td.path());
        let (summary, outcomes) = collect(&cfg);

        assert_eq!(summary.moved, 1);
        let expected = td.path().join("2023").join("06").join("01").join("20230601_100000.jpg");
        assert!(expected.is_file());
        assert_eq!(outcomes, vec![(expected, TimestampSource::Embedded)]);
    }

    #[test]
    fn rerun_over_sorted_tree_is_a_no_op() {
        let td = tempdir().unwrap();
        fs::write(td.path().join("a.jpg"), jpeg_with_original("2023:06:01 10:00:00", None)).unwrap();
        let cfg = Config::new(td.path()).with_recursive(true);

        let (first, _) = collect(&cfg);
        assert_eq!(first.moved, 1);

        let (second, _) = collect(&cfg);
        assert_eq!(second.moved, 0);
        assert_eq!(second.in_place, 1);
        assert!(!td.path().join("2023").join("duplicates").exists());
    }

    #[test]
    fn same_timestamp_goes_to_duplicates() {
        let td = tempdir().unwrap();
        let bytes = jpeg_with_original("2023:06:01 10:00:00", None);
        fs::write(td.path().join("a.jpg"), &bytes).unwrap();
        fs::write(td.path().join("b.jpg"), &bytes).unwrap();

        let (summary, _) = collect(&Config::new(td.path()));

        assert_eq!(summary.moved, 2);
        assert_eq!(summary.duplicates, 1);
        let dup_dir = td.path().join("2023").join("duplicates").join("06").join("01");
        let dups: Vec<_> = fs::read_dir(&dup_dir).unwrap().filter_map(Result::ok).collect();
        assert_eq!(dups.len(), 1);
        let name = dups[0].file_name().to_string_lossy().into_owned();
        assert!(name.starts_with("20230601_100000.jpg_"), "name was {name}");
    }

    #[test]
    fn summary_display_mentions_counts() {
        let s = RunSummary {
            moved: 3,
            duplicates: 1,
            in_place: 2,
            failed: 1,
        };
        assert_eq!(
            s.to_string(),
            "6 file(s): 3 moved (1 to duplicates), 2 already in place, 1 failed"
        );
    }
}
