use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::{
    assets::decode::{decode_image, downscale_to_width},
    assets::encode::encode_webp,
    foundation::error::ScrollworkResult,
};

/// Raster input extensions the batch recognizes (ASCII case-insensitive).
pub const RASTER_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Fixed settings for one batch run.
#[derive(Clone, Copy, Debug)]
pub struct ConvertOpts {
    /// Lossy WebP quality factor (0-100).
    pub quality: f32,
    /// Maximum output width in pixels; wider sources are downscaled.
    pub max_width: u32,
}

impl Default for ConvertOpts {
    fn default() -> Self {
        Self {
            quality: 80.0,
            max_width: 1920,
        }
    }
}

/// Outcome of a single file visited by the batch.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub enum FileOutcome {
    /// Re-encoded; byte sizes before and after.
    Converted {
        /// Source size in bytes.
        bytes_before: u64,
        /// Written WebP size in bytes.
        bytes_after: u64,
    },
    /// Left alone because a strictly newer `.webp` counterpart exists.
    Skipped,
    /// Failed; the batch continued past it.
    Failed {
        /// Human-readable failure description.
        message: String,
    },
}

/// One visited file in the report.
#[derive(Clone, Debug, serde::Serialize)]
pub struct ConvertEntry {
    /// Source path as visited.
    pub path: PathBuf,
    /// What happened to it.
    pub outcome: FileOutcome,
}

/// Aggregate result of a batch run.
///
/// The report is an explicit accumulator threaded through the walk and
/// returned at the end; the batch keeps no process-wide running totals, so
/// runs are referentially transparent and independently testable.
#[derive(Clone, Debug, Default, serde::Serialize)]
pub struct ConvertReport {
    /// Files re-encoded.
    pub converted: usize,
    /// Files skipped for an up-to-date output.
    pub skipped: usize,
    /// Files that failed and were recovered past.
    pub failed: usize,
    /// Total source bytes of converted files.
    pub bytes_before: u64,
    /// Total written bytes of converted files.
    pub bytes_after: u64,
    /// Per-file outcomes in visit order.
    pub entries: Vec<ConvertEntry>,
}

impl ConvertReport {
    /// Net byte savings over converted files; negative when outputs grew.
    pub fn bytes_saved(&self) -> i64 {
        self.bytes_before as i64 - self.bytes_after as i64
    }

    /// Savings as a percentage of the converted source bytes.
    pub fn savings_percent(&self) -> f64 {
        if self.bytes_before == 0 {
            return 0.0;
        }
        self.bytes_saved() as f64 / self.bytes_before as f64 * 100.0
    }
}

/// Convert every recognized raster image under `root` to lossy WebP.
///
/// Synchronous, file-by-file, depth-first in sorted order. A `.webp` is
/// written alongside each source unless a strictly newer one already exists.
/// Per-file failures and unreadable directories are logged and recovered;
/// the walk always runs to completion and returns the full report.
#[tracing::instrument(skip(opts))]
pub fn convert_tree(root: &Path, opts: &ConvertOpts) -> ConvertReport {
    let mut report = ConvertReport::default();
    walk(root, opts, &mut report);
    report
}

fn walk(dir: &Path, opts: &ConvertOpts, report: &mut ConvertReport) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(dir = %dir.display(), error = %err, "skipping unreadable directory");
            return;
        }
    };

    // Sorted visit order keeps reports stable across runs.
    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .collect();
    paths.sort();

    for path in paths {
        if path.is_dir() {
            walk(&path, opts, report);
        } else if has_raster_extension(&path) {
            visit_file(&path, opts, report);
        }
    }
}

fn has_raster_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            RASTER_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

fn visit_file(path: &Path, opts: &ConvertOpts, report: &mut ConvertReport) {
    let target = path.with_extension("webp");

    match output_is_newer(path, &target) {
        Ok(true) => {
            tracing::debug!(file = %path.display(), "skipping, newer webp exists");
            report.skipped += 1;
            report.entries.push(ConvertEntry {
                path: path.to_path_buf(),
                outcome: FileOutcome::Skipped,
            });
            return;
        }
        Ok(false) => {}
        Err(err) => {
            record_failure(path, &err.to_string(), report);
            return;
        }
    }

    match convert_file(path, &target, opts) {
        Ok((bytes_before, bytes_after)) => {
            report.converted += 1;
            report.bytes_before += bytes_before;
            report.bytes_after += bytes_after;
            report.entries.push(ConvertEntry {
                path: path.to_path_buf(),
                outcome: FileOutcome::Converted {
                    bytes_before,
                    bytes_after,
                },
            });
        }
        Err(err) => record_failure(path, &err.to_string(), report),
    }
}

fn record_failure(path: &Path, message: &str, report: &mut ConvertReport) {
    tracing::warn!(file = %path.display(), error = message, "conversion failed");
    report.failed += 1;
    report.entries.push(ConvertEntry {
        path: path.to_path_buf(),
        outcome: FileOutcome::Failed {
            message: message.to_string(),
        },
    });
}

/// True when `target` exists and is strictly newer than `source`.
fn output_is_newer(source: &Path, target: &Path) -> ScrollworkResult<bool> {
    if !target.exists() {
        return Ok(false);
    }
    let source_mtime = fs::metadata(source)
        .and_then(|meta| meta.modified())
        .with_context(|| format!("stat '{}'", source.display()))?;
    let target_mtime = fs::metadata(target)
        .and_then(|meta| meta.modified())
        .with_context(|| format!("stat '{}'", target.display()))?;
    Ok(target_mtime > source_mtime)
}

/// Decode, downscale, re-encode, and write one image. Returns the byte sizes
/// (source, written).
fn convert_file(source: &Path, target: &Path, opts: &ConvertOpts) -> ScrollworkResult<(u64, u64)> {
    let bytes_before = fs::metadata(source)
        .with_context(|| format!("stat '{}'", source.display()))?
        .len();
    let decoded = decode_image(source)?;
    let image = downscale_to_width(decoded.image, opts.max_width);
    let encoded = encode_webp(&image, opts.quality);
    let bytes_after = encoded.len() as u64;
    fs::write(target, &encoded).with_context(|| format!("write webp '{}'", target.display()))?;
    Ok((bytes_before, bytes_after))
}

#[cfg(test)]
#[path = "../../tests/unit/convert/batch.rs"]
mod tests;
