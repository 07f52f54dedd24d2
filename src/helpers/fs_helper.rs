use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub struct FsHelper;

impl FsHelper {
    /// Recursively copies `source` into `target`, leaving files that already
    /// exist in `target` untouched. Returns the number of files copied.
    pub fn copy_missing(source: &Path, target: &Path) -> io::Result<u64> {
        fs::create_dir_all(target)?;

        let mut copied = 0;
        for entry in fs::read_dir(source)? {
            let entry = entry?;
            let path = entry.path();
            let destination = target.join(entry.file_name());

            if entry.file_type()?.is_dir() {
                copied += Self::copy_missing(&path, &destination)?;
            } else if !destination.exists() {
                fs::copy(&path, &destination)?;
                copied += 1;
            }
        }

        Ok(copied)
    }

    /// [`FsHelper::copy_missing`] on the blocking pool.
    pub async fn restore_directory(source: PathBuf, target: PathBuf) -> io::Result<u64> {
        tokio::task::spawn_blocking(move || Self::copy_missing(&source, &target))
            .await
            .map_err(io::Error::other)?
    }
}
