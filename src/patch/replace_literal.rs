use std::path::Path;
use tracing::{debug, warn};

use crate::error::Result;
use crate::utils::fs::{read_file_to_string, write_file};

/// Outcome of a literal find/replace over a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Replacement {
    pub occurrences: usize,
}

/// Replace every non-overlapping occurrence of `needle`, left to right.
///
/// Plain substring matching with no word boundaries or regex. Returns the new
/// text and how many spans were replaced.
pub fn replace_literal(content: &str, needle: &str, replacement: &str) -> (String, usize) {
    let occurrences = content.matches(needle).count();
    if occurrences == 0 {
        return (content.to_string(), 0);
    }
    (content.replace(needle, replacement), occurrences)
}

/// Apply [`replace_literal`] to the file at `path` and write it back.
///
/// The file is rewritten even when the needle is absent.
pub fn replace_literal_in_file(
    path: impl AsRef<Path>,
    needle: &str,
    replacement: &str,
) -> Result<Replacement> {
    let path = path.as_ref();
    let content = read_file_to_string(path)?;

    let (updated, occurrences) = replace_literal(&content, needle, replacement);
    write_file(path, &updated)?;

    if occurrences == 0 {
        warn!("'{}' not found in {}", needle, path.display());
    } else {
        debug!(
            "Replaced {} occurrence(s) of '{}' in {}",
            occurrences,
            needle,
            path.display()
        );
    }

    Ok(Replacement { occurrences })
}
