//! Capability-based file access for catalog inputs and report outputs.
//!
//! Every helper resolves an ambient directory once and performs the actual
//! IO through `cap-std`, keeping path handling UTF-8 via `camino`.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use std::io;

/// Open an existing file for reading.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Create or truncate `path` for writing, creating missing parent directories.
pub fn create_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    ensure_parent_dir(path)?;
    let (dir, name) = open_dir_and_file(path)?;
    dir.create(name.as_str())
}

/// Open the directory containing `path` and return it with the bare file name.
fn open_dir_and_file(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other("path should include a file name"))?
        .to_owned();
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

/// Whether `path` names a regular file.
///
/// A missing file surfaces as an [`io::ErrorKind::NotFound`] error rather than
/// `Ok(false)`, so callers can tell "absent" from "not a file".
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = open_dir_and_file(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_file())
}

/// Create every missing directory above `path`.
///
/// The nearest existing ancestor is opened as a capability and the missing
/// remainder is created beneath it.
fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => return Ok(()),
    };
    let (base, missing) = nearest_existing_dir(parent)?;
    if missing.as_str().is_empty() {
        return Ok(());
    }
    base.create_dir_all(missing)
}

/// Open the deepest ancestor of `dir` that exists and return the path below it.
fn nearest_existing_dir(dir: &Utf8Path) -> io::Result<(fs_utf8::Dir, &Utf8Path)> {
    for ancestor in dir.ancestors() {
        let candidate = if ancestor.as_str().is_empty() {
            Utf8Path::new(".")
        } else {
            ancestor
        };
        match fs_utf8::Dir::open_ambient_dir(candidate, ambient_authority()) {
            Ok(base) => {
                let missing = dir
                    .strip_prefix(ancestor)
                    .map_err(|_| io::Error::other("ancestor is not a prefix of the directory"))?;
                return Ok((base, missing));
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => return Err(err),
        }
    }
    Err(io::Error::new(
        io::ErrorKind::NotFound,
        format!("no existing ancestor of {dir}"),
    ))
}
