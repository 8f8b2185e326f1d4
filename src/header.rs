use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

/// Preamble emitted at the top of every generated template.
pub const POT_HEADER: [&str; 4] = [
    "msgid \"\"",
    "msgstr \"\"",
    "\"Application: Oxygen Not Included\"",
    "\"POT Version: 2.0\"",
];

/// What happened to a template's header
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum HeaderOutcome {
    Stripped,
    Unchanged,
}

/// Return the content following the header, or `None` if the first four
/// lines do not match it. Lines are compared trimmed; the remainder is
/// returned verbatim.
pub fn strip_header(content: &str) -> Option<&str> {
    let mut lines = content.split_inclusive('\n');
    let mut offset = 0;

    for expected in POT_HEADER {
        let line = lines.next()?;
        if line.trim() != expected.trim() {
            return None;
        }
        offset += line.len();
    }

    Some(&content[offset..])
}

/// Strip the header of a template file on disk. The file is only rewritten
/// when the header matches; the resulting content is returned either way.
pub fn strip_file(path: &Path) -> Result<(HeaderOutcome, String)> {
    let content = read_text(path)?;

    match strip_header(&content) {
        Some(rest) => {
            fs::write(path, rest)
                .with_context(|| format!("failed to rewrite {}", path.display()))?;
            info!("{}: header removed", path.display());
            Ok((HeaderOutcome::Stripped, rest.to_owned()))
        }
        None => {
            info!("{}: header does not match, left unchanged", path.display());
            Ok((HeaderOutcome::Unchanged, content))
        }
    }
}

/// Read a UTF-8 text file, naming the path on failure
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
