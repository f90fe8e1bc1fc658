use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context as _};
use log::{debug, info, trace, warn};

use super::assembler::{AssembledVolume, Assembler, LocalFile};
use super::matcher::match_volume;
use crate::context::Context;
use crate::models::{CatalogRecord, NovelInfo};
use crate::sink::CatalogSink;
use crate::stage::{self, Stage};
use crate::utils::{digest_file, normalize, write_sidecar, FileDigest};

#[derive(Debug)]
pub enum FileOutcome {
    Organized {
        record: CatalogRecord,
        destination: PathBuf,
        sidecar: PathBuf,
        /// Whether the catalog acknowledged the record.
        submitted: bool,
    },
    Skipped {
        file: PathBuf,
    },
    Failed {
        file: PathBuf,
        error: anyhow::Error,
    },
}

#[derive(Debug, Default)]
pub struct OrganizeReport {
    pub outcomes: Vec<FileOutcome>,
    pub novel_sidecar: Option<PathBuf>,
    /// Set when the run stopped early on cancellation.
    pub cancelled: bool,
}

impl OrganizeReport {
    pub fn organized(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, FileOutcome::Organized { .. }))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, FileOutcome::Skipped { .. }))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, FileOutcome::Failed { .. }))
            .count()
    }
}

/// Files in `dir` whose extension is in `extensions`, ordered by file name.
pub fn list_files(dir: &Path, extensions: &[String]) -> anyhow::Result<Vec<LocalFile>> {
    let mut files = vec![];

    for entry in fs::read_dir(dir).with_context(|| format!("list {}", dir.display()))? {
        let entry = entry?;

        if !entry.file_type()?.is_file() {
            continue;
        }

        if let Some(file) = LocalFile::from_path(&entry.path()) {
            if extensions.contains(&file.extension) {
                files.push(file);
            }
        }
    }

    files.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));

    Ok(files)
}

/// Moves `from` to `to`, refusing to replace a different existing file.
fn rename_checked(from: &Path, to: &Path) -> anyhow::Result<()> {
    if from == to {
        return Ok(());
    }

    if to.exists() {
        return Err(anyhow!("destination {} already exists", to.display()));
    }

    fs::rename(from, to)
        .with_context(|| format!("rename {} to {}", from.display(), to.display()))
}

/// Hashes the file at its new location.
type DigestFn = fn(&Path) -> anyhow::Result<FileDigest>;

/// Renames one file and records it. A hashing failure moves the file back;
/// later failures leave it renamed.
fn organize_file(
    ctx: &Context,
    sink: &dyn CatalogSink,
    file: &LocalFile,
    assembled: AssembledVolume,
    digest: DigestFn,
) -> anyhow::Result<FileOutcome> {
    let name = file.file_name();
    let destination = ctx.working_dir.join(assembled.file_name());

    rename_checked(&file.path, &destination)?;
    stage::update(&name, Stage::Renamed(&assembled.file_name()));

    let digest = match digest(&destination) {
        Ok(digest) => digest,
        Err(err) => {
            if let Err(rollback) = rename_checked(&destination, &file.path) {
                warn!("{}: rollback failed: {:#}", name, rollback);
            }
            return Err(err);
        }
    };
    stage::update(&name, Stage::Hashed);

    let filepath = fs::canonicalize(&destination).unwrap_or_else(|_| destination.clone());
    let stem = assembled.stem.clone();
    let record = assembled.into_record(&filepath, &digest);

    let submitted = match sink.submit(&record) {
        Ok(response) => response.success,
        Err(err) => {
            warn!("{}: catalog submission failed: {:#}", name, err);
            false
        }
    };
    stage::update(
        &name,
        if submitted {
            Stage::Submitted
        } else {
            Stage::Rejected
        },
    );

    let sidecar = write_sidecar(&ctx.working_dir, &stem, &record)?;
    stage::update(&name, Stage::Persisted);

    Ok(FileOutcome::Organized {
        record,
        destination,
        sidecar,
        submitted,
    })
}

/// Renames, hashes, submits and records every file of `ctx.working_dir` that
/// belongs to one of the novel's volumes.
///
/// Only a novel without an author, an unreadable directory or an unwritable
/// novel sidecar fail the run; per-file problems end up in the report.
pub fn organize(
    ctx: &Context,
    novel: &NovelInfo,
    sink: &dyn CatalogSink,
) -> anyhow::Result<OrganizeReport> {
    trace!("organize()");
    let assembler = Assembler::new(novel, &ctx.base_url)?;
    let files = list_files(&ctx.working_dir, &ctx.extensions)?;

    debug!("author = {}", assembler.author());
    debug!("{} candidate files", files.len());

    let mut report = OrganizeReport::default();

    for (offset, file) in files.iter().enumerate() {
        if ctx.cancel.is_cancelled() {
            info!("cancelled, {} files left untouched", files.len() - offset);
            report.cancelled = true;
            break;
        }

        let name = file.file_name();
        let matched = match_volume(&novel.volumes, &file.stem);

        let assembled = match assembler.assemble(file, matched, offset + 1) {
            Some(assembled) => assembled,
            None => {
                stage::update(&name, Stage::Skipped);
                report.outcomes.push(FileOutcome::Skipped {
                    file: file.path.clone(),
                });
                continue;
            }
        };
        stage::update(&name, Stage::Matched(matched.kind()));

        let outcome =
            organize_file(ctx, sink, file, assembled, digest_file).unwrap_or_else(|error| {
                stage::update(&name, Stage::Fail(&error));
                FileOutcome::Failed {
                    file: file.path.clone(),
                    error,
                }
            });

        report.outcomes.push(outcome);
    }

    report.novel_sidecar = Some(write_sidecar(
        &ctx.working_dir,
        &normalize(&novel.title),
        novel,
    )?);

    info!(
        "organized = {}, skipped = {}, failed = {}",
        report.organized(),
        report.skipped(),
        report.failed()
    );

    Ok(report)
}
