use std::path::Path;
use tracing::{debug, warn};

use crate::error::Result;
use crate::utils::fs::{read_file_to_string, write_file};

/// Outcome of removing a single line from a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineDeletion {
    /// Zero-based index that was requested
    pub index: usize,
    pub lines_before: usize,
    pub lines_after: usize,
}

impl LineDeletion {
    pub fn removed(&self) -> bool {
        self.lines_after < self.lines_before
    }
}

/// Split into lines on `\r\n`, `\n` or a lone `\r`, each line keeping its
/// own terminator. A trailing fragment without one is a line too.
pub fn split_lines(content: &str) -> impl Iterator<Item = &str> + '_ {
    let bytes = content.as_bytes();
    let mut start = 0;

    std::iter::from_fn(move || {
        if start >= bytes.len() {
            return None;
        }

        let mut end = start;
        while end < bytes.len() {
            match bytes[end] {
                b'\n' => {
                    end += 1;
                    break;
                }
                b'\r' => {
                    end += 1;
                    if bytes.get(end) == Some(&b'\n') {
                        end += 1;
                    }
                    break;
                }
                _ => end += 1,
            }
        }

        let line = &content[start..end];
        start = end;
        Some(line)
    })
}

/// Number of lines in `content`, as counted by [`split_lines`]
pub fn count_lines(content: &str) -> usize {
    split_lines(content).count()
}

/// Drop the line at zero-based `index`, keeping every terminator as-is.
///
/// Returns the new text and whether a line was removed. An index at or past
/// the end leaves the text untouched.
pub fn delete_line(content: &str, index: usize) -> (String, bool) {
    let mut removed = false;
    let kept: String = split_lines(content)
        .enumerate()
        .filter_map(|(i, line)| {
            if i == index {
                removed = true;
                None
            } else {
                Some(line)
            }
        })
        .collect();

    (kept, removed)
}

/// Remove line `index` from the file at `path` and write it back.
///
/// The file is rewritten even when nothing was removed.
pub fn delete_line_in_file(path: impl AsRef<Path>, index: usize) -> Result<LineDeletion> {
    let path = path.as_ref();
    let content = read_file_to_string(path)?;
    let lines_before = count_lines(&content);

    let (updated, removed) = delete_line(&content, index);
    write_file(path, &updated)?;

    let outcome = LineDeletion {
        index,
        lines_before,
        lines_after: if removed { lines_before - 1 } else { lines_before },
    };

    if removed {
        debug!(
            "Deleted line {} of {}: {} -> {} lines",
            index,
            path.display(),
            outcome.lines_before,
            outcome.lines_after
        );
    } else {
        warn!(
            "{} has only {} lines; line {} not deleted",
            path.display(),
            lines_before,
            index
        );
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_delete_middle_line_keeps_order() {
        let (out, removed) = delete_line("a\nb\nc\nd\n", 1);
        assert!(removed);
        assert_eq!(out, "a\nc\nd\n");
    }

    #[test]
    fn test_delete_last_line_without_newline() {
        let (out, removed) = delete_line("a\nb\nc", 2);
        assert!(removed);
        assert_eq!(out, "a\nb\n");
    }

    #[test]
    fn test_index_past_end_is_noop() {
        let input = "a\nb\n";
        assert_eq!(delete_line(input, 2), (input.to_string(), false));
        assert_eq!(delete_line(input, 5000), (input.to_string(), false));
        assert_eq!(delete_line("", 0), (String::new(), false));
    }

    #[test]
    fn test_crlf_terminators_preserved() {
        let (out, _) = delete_line("a\r\nb\r\nc\r\n", 0);
        assert_eq!(out, "b\r\nc\r\n");
    }

    #[test]
    fn test_lone_carriage_return_ends_a_line() {
        let (out, removed) = delete_line("a\rb\nc\n", 1);
        assert!(removed);
        assert_eq!(out, "a\rc\n");
    }

    #[test]
    fn test_split_lines_keeps_terminators() {
        let lines: Vec<&str> = split_lines("a\r\nb\rc\nd").collect();
        assert_eq!(lines, vec!["a\r\n", "b\r", "c\n", "d"]);

        let lines: Vec<&str> = split_lines("\r\r\n\n").collect();
        assert_eq!(lines, vec!["\r", "\r\n", "\n"]);
    }

    #[test]
    fn test_count_lines() {
        assert_eq!(count_lines(""), 0);
        assert_eq!(count_lines("x"), 1);
        assert_eq!(count_lines("x\n"), 1);
        assert_eq!(count_lines("x\ny"), 2);
        assert_eq!(count_lines("x\ry\r\nz\n"), 3);
    }

    #[test]
    fn test_delete_line_in_file() {
        let mut file = NamedTempFile::new().unwrap();
        for i in 0..5 {
            writeln!(file, "Line {}", i).unwrap();
        }
        file.flush().unwrap();

        let outcome = delete_line_in_file(file.path(), 3).unwrap();
        assert!(outcome.removed());
        assert_eq!(outcome.lines_before, 5);
        assert_eq!(outcome.lines_after, 4);

        let content = fs::read_to_string(file.path()).unwrap();
        assert_eq!(content, "Line 0\nLine 1\nLine 2\nLine 4\n");
    }

    #[test]
    fn test_short_file_left_unchanged() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "only\nthree\nlines\n").unwrap();
        file.flush().unwrap();

        let outcome = delete_line_in_file(file.path(), 2709).unwrap();
        assert!(!outcome.removed());
        assert_eq!(outcome.lines_after, 3);
        assert_eq!(
            fs::read_to_string(file.path()).unwrap(),
            "only\nthree\nlines\n"
        );
    }
}
