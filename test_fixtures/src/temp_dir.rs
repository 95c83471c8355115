// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter},
          ops::Deref,
          path::{Path, PathBuf}};

use miette::IntoDiagnostic;
use rand::Rng as _;

const TEMP_DIR_PREFIX: &str = "gradanim";

#[derive(Debug)]
pub struct TempDir {
    pub inner: PathBuf,
}

/// Create a temporary directory. The directory is automatically deleted when the
/// [`TempDir`] struct is dropped.
///
/// # Errors
///
/// Returns an error if the directory can't be created, eg: insufficient permissions or
/// the file system is full.
pub fn try_create_temp_dir() -> miette::Result<TempDir> {
    let root = std::env::temp_dir();
    let suffix: u64 = rand::rng().random();
    let new_temp_dir = root.join(format!("{TEMP_DIR_PREFIX}_{suffix:016x}"));
    std::fs::create_dir(&new_temp_dir).into_diagnostic()?;
    Ok(TempDir {
        inner: new_temp_dir,
    })
}

/// Automatically delete the temporary directory when the [`TempDir`] struct is dropped.
impl Drop for TempDir {
    fn drop(&mut self) {
        // We don't care about the result of this operation.
        std::fs::remove_dir_all(&self.inner).ok();
    }
}

/// Allow access to the inner [`PathBuf`], eg: `temp_dir.join("rainbow.css")`.
impl Deref for TempDir {
    type Target = PathBuf;

    fn deref(&self) -> &Self::Target { &self.inner }
}

impl AsRef<Path> for TempDir {
    fn as_ref(&self) -> &Path { &self.inner }
}

impl Display for TempDir {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner.display())
    }
}
