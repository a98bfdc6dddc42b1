use crate::app::error::{RedubError, Result};
use crate::app::models::{Entry, Event};
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::Path;

/// Renames `parent/entry` when its name contains `old`. Returns whether a rename happened.
///
/// The move stays inside `parent` and never replaces an existing entry.
pub fn rename<F>(parent: &Path, entry: &Entry, old: &str, new: &str, emit: &mut F) -> Result<bool>
where
    F: FnMut(Event),
{
    let Some(new_name) = replace_name(&entry.name, old, new) else {
        return Ok(false);
    };

    let from = parent.join(&entry.name);
    let to = parent.join(new_name);

    if to.symlink_metadata().is_ok() {
        return Err(RedubError::Rename {
            from,
            to,
            source: io::Error::new(io::ErrorKind::AlreadyExists, "destination already exists"),
        });
    }

    if let Err(source) = fs::rename(&from, &to) {
        return Err(RedubError::Rename { from, to, source });
    }

    emit(Event::Renamed {
        from,
        to,
        is_dir: entry.is_dir,
    });
    Ok(true)
}

/// `name` with every `old` swapped for `new`, or `None` when it has no match.
#[cfg(unix)]
fn replace_name(name: &OsStr, old: &str, new: &str) -> Option<OsString> {
    use crate::app::rewriter;
    use std::os::unix::ffi::OsStringExt;

    let bytes = name.as_encoded_bytes();
    rewriter::find(bytes, old.as_bytes())?;

    let mut out = Vec::with_capacity(bytes.len());
    rewriter::replace_all(bytes, old.as_bytes(), new.as_bytes(), &mut out);
    Some(OsString::from_vec(out))
}

// Names that are not valid Unicode cannot be rebuilt from bytes here.
#[cfg(not(unix))]
fn replace_name(name: &OsStr, old: &str, new: &str) -> Option<OsString> {
    let Some(name) = name.to_str() else {
        log::debug!("Leaving non Unicode name {:?} as is", name);
        return None;
    };
    name.contains(old)
        .then(|| OsString::from(name.replace(old, new)))
}
