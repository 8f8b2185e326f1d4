use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Which template files to pick up
#[derive(Debug)]
pub struct ScanOptions<'a> {
    pub dir: &'a Path,
    pub suffix: &'a str,
    pub exclude: &'a [String],
    pub recursive: bool,
    pub follow_symlinks: bool,
    /// Files never treated as templates (output catalog, header template)
    pub reserved: &'a [&'a Path],
}

/// Build a GlobSet from patterns
fn compile_globs(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for p in patterns {
        builder.add(Glob::new(p).with_context(|| format!("invalid glob pattern: {p}"))?);
    }
    Ok(builder.build()?)
}

fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(suffix))
}

/// Collect template files under `opts.dir`, ordered by file name.
pub fn discover(opts: &ScanOptions) -> Result<Vec<PathBuf>> {
    let excludes = compile_globs(opts.exclude)?;
    let reserved: Vec<PathBuf> = opts
        .reserved
        .iter()
        .filter_map(|p| fs::canonicalize(p).ok())
        .collect();

    let max_depth = if opts.recursive { usize::MAX } else { 1 };
    let walker = WalkDir::new(opts.dir)
        .min_depth(1)
        .max_depth(max_depth)
        .follow_links(opts.follow_symlinks)
        .sort_by_file_name();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.with_context(|| format!("failed to scan {}", opts.dir.display()))?;
        let path = entry.path();

        if !entry.file_type().is_file() || !has_suffix(path, opts.suffix) {
            continue;
        }

        let relative = path.strip_prefix(opts.dir).unwrap_or(path);
        if excludes.is_match(relative) {
            debug!("{}: excluded", path.display());
            continue;
        }

        if !reserved.is_empty() {
            let canonical = fs::canonicalize(path)
                .with_context(|| format!("failed to resolve {}", path.display()))?;
            if reserved.contains(&canonical) {
                debug!("{}: reserved file, skipped", path.display());
                continue;
            }
        }

        files.push(path.to_owned());
    }

    Ok(files)
}
