use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Merge translation templates into a single localized catalog."
)]
pub struct Args {
    /// Directory scanned for template files
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Header/template file written at the top of the catalog
    #[arg(long, default_value = "zh-hans.tpl")]
    pub header: PathBuf,

    /// Output catalog file (overwritten on every run)
    #[arg(short, long, default_value = "zh-hans.po")]
    pub output: PathBuf,

    /// File-name suffix identifying template files
    #[arg(long, default_value = ".pot")]
    pub suffix: String,

    /// Glob patterns to exclude, relative to --dir (repeatable)
    #[arg(short = 'x', long = "exclude")]
    pub exclude: Vec<String>,

    /// Descend into subdirectories of --dir
    #[arg(long)]
    pub recursive: bool,

    /// Follow symlinked directories
    #[arg(long = "follow-symlinks")]
    pub follow_symlinks: bool,

    /// Rewrite template files on disk without their header
    #[arg(long = "strip-in-place")]
    pub strip_in_place: bool,

    /// Dry-run mode (no files written)
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Wait for Enter before exiting
    #[arg(long)]
    pub pause: bool,

    /// Verbose logging
    #[arg(long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_match_fixed_file_names() {
        let args = Args::parse_from(["potmerge"]);
        assert_eq!(args.dir, PathBuf::from("."));
        assert_eq!(args.header, PathBuf::from("zh-hans.tpl"));
        assert_eq!(args.output, PathBuf::from("zh-hans.po"));
        assert_eq!(args.suffix, ".pot");
        assert!(args.exclude.is_empty());
        assert!(!args.strip_in_place && !args.dry_run && !args.pause);
    }

    #[test]
    fn exclude_is_repeatable() {
        let args = Args::parse_from(["potmerge", "-x", "old/**", "--exclude", "*_bak.pot"]);
        assert_eq!(args.exclude, vec!["old/**", "*_bak.pot"]);
    }
}
