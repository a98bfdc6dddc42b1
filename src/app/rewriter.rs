use crate::app::error::{RedubError, Result};
use std::fs;
use std::path::Path;

/// Replaces every occurrence of `old` with `new` inside the file at `path`.
///
/// Works on raw bytes split at `\n`, so files that are not UTF-8 go through
/// untouched unless they contain the token, and `\r\n` endings keep their
/// `\r` on each line. Returns how many *lines* matched, not how many
/// occurrences were replaced. The file is only written when that count is
/// non-zero.
pub fn rewrite(path: &Path, old: &str, new: &str) -> Result<usize> {
    let io_err = |source: std::io::Error| RedubError::ContentIo {
        path: path.to_path_buf(),
        source,
    };

    let content = fs::read(path).map_err(io_err)?;
    let (rewritten, lines) = replace_lines(&content, old.as_bytes(), new.as_bytes());

    if lines > 0 {
        fs::write(path, rewritten).map_err(io_err)?;
    }

    Ok(lines)
}

fn replace_lines(content: &[u8], old: &[u8], new: &[u8]) -> (Vec<u8>, usize) {
    let mut out = Vec::with_capacity(content.len());
    let mut lines = 0;

    for (i, line) in content.split(|&b| b == b'\n').enumerate() {
        if i > 0 {
            out.push(b'\n');
        }
        if find(line, old).is_some() {
            lines += 1;
            replace_all(line, old, new, &mut out);
        } else {
            out.extend_from_slice(line);
        }
    }

    (out, lines)
}

/// Appends `haystack` to `out` with non-overlapping `old` swapped for `new`.
pub(crate) fn replace_all(mut haystack: &[u8], old: &[u8], new: &[u8], out: &mut Vec<u8>) {
    while let Some(at) = find(haystack, old) {
        out.extend_from_slice(&haystack[..at]);
        out.extend_from_slice(new);
        haystack = &haystack[at + old.len()..];
    }
    out.extend_from_slice(haystack);
}

pub(crate) fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}
