//! Depth-first pre-order directory walk

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::exclude::is_excluded;

/// Sink for traversal events.
///
/// The walker reports each visited directory and file here; formatting and
/// destination are the implementor's concern.
pub trait TreeOutput {
    /// A directory label at the given depth (0 for the root).
    fn dir(&mut self, depth: usize, name: &str) -> io::Result<()>;

    /// A file inside the directory most recently reported at `depth`.
    fn file(&mut self, depth: usize, name: &str) -> io::Result<()>;
}

/// Walk `root` depth-first, reporting every non-excluded directory and
/// file to `out`.
///
/// Each directory is reported before its contents; files come in
/// lexicographic order, subdirectories in filesystem enumeration order.
/// The first enumeration error aborts the walk.
pub fn walk<O: TreeOutput>(root: &Path, out: &mut O) -> io::Result<()> {
    walk_dir(root, 0, out)
}

fn walk_dir<O: TreeOutput>(path: &Path, depth: usize, out: &mut O) -> io::Result<()> {
    out.dir(depth, &display_name(path))?;

    let mut files = Vec::new();
    let mut subdirs = Vec::new();

    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            subdirs.push(entry.path());
        } else if file_type.is_symlink() && entry.path().is_dir() {
            // Symlinked directories are neither entered nor listed.
        } else {
            files.push(entry.file_name().to_string_lossy().into_owned());
        }
    }

    files.sort();
    for name in &files {
        out.file(depth, name)?;
    }

    // Filtered copy of the subdirectory list; excluded names and anything
    // beneath them are never visited. The root itself is exempt.
    let entered: Vec<PathBuf> = subdirs
        .into_iter()
        .filter(|p| !dir_name_excluded(p))
        .collect();

    for dir in &entered {
        walk_dir(dir, depth + 1, out)?;
    }

    Ok(())
}

fn dir_name_excluded(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|s| is_excluded(&s.to_string_lossy()))
}

/// Base name of a path, or the `.` placeholder when there is none
/// (filesystem root).
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| ".".to_string())
}
