use crate::cli::Args;
use crate::header::{self, HeaderOutcome};
use crate::scan::{self, ScanOptions};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Concatenate the header template and every template body, each followed
/// by a newline.
pub fn merge_contents<I, S>(header: &str, contents: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut catalog = String::with_capacity(header.len() + 1);
    catalog.push_str(header);
    catalog.push('\n');
    for content in contents {
        catalog.push_str(content.as_ref());
        catalog.push('\n');
    }
    catalog
}

/// Load a template with its header removed, either in memory or on disk
fn load_template(path: &Path, in_place: bool) -> Result<(HeaderOutcome, String)> {
    if in_place {
        return header::strip_file(path);
    }

    let raw = header::read_text(path)?;
    match header::strip_header(&raw) {
        Some(rest) => {
            info!("{}: header removed", path.display());
            Ok((HeaderOutcome::Stripped, rest.to_owned()))
        }
        None => {
            info!("{}: header does not match, kept as is", path.display());
            Ok((HeaderOutcome::Unchanged, raw))
        }
    }
}

fn write_catalog(path: &Path, catalog: &str) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    out.write_all(catalog.as_bytes())
        .with_context(|| format!("failed to write {}", path.display()))?;
    out.flush()
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

pub fn run(args: Args) -> Result<()> {
    // Read the header first so a missing template aborts before anything else
    let header_text = header::read_text(&args.header)
        .with_context(|| format!("header template {} is required", args.header.display()))?;

    let reserved = [args.output.as_path(), args.header.as_path()];
    let files: Vec<PathBuf> = scan::discover(&ScanOptions {
        dir: &args.dir,
        suffix: &args.suffix,
        exclude: &args.exclude,
        recursive: args.recursive,
        follow_symlinks: args.follow_symlinks,
        reserved: &reserved,
    })?;
    debug!("found {} template files in {}", files.len(), args.dir.display());

    if args.dry_run {
        println!(
            "Dry-run. Would merge {} files into {}:",
            files.len(),
            args.output.display()
        );
        for f in &files {
            println!("{}", f.display());
        }
        return Ok(());
    }

    // Progress bar
    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("=>-"),
    );

    let mut stripped = 0usize;
    let mut contents = Vec::with_capacity(files.len());
    for file in &files {
        pb.inc(1);
        pb.set_message(format!("{}", file.display()));

        let (outcome, content) = pb.suspend(|| load_template(file, args.strip_in_place))?;
        if outcome == HeaderOutcome::Stripped {
            stripped += 1;
        }
        contents.push(content);
    }

    pb.finish_and_clear();

    let catalog = merge_contents(&header_text, &contents);
    write_catalog(&args.output, &catalog)?;

    info!(
        "merged {} files ({} headers removed) into {}",
        files.len(),
        stripped,
        args.output.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_header_plus_newline() {
        let contents: [&str; 0] = [];
        assert_eq!(merge_contents("HEADER", contents), "HEADER\n");
    }

    #[test]
    fn every_body_is_followed_by_a_newline() {
        let catalog = merge_contents("H\n", ["a\n", "b"]);
        assert_eq!(catalog, "H\n\na\n\nb\n");
    }

    #[test]
    fn empty_bodies_still_add_separators() {
        assert_eq!(merge_contents("", ["", ""]), "\n\n\n");
    }
}
