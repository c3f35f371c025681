// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Read a y/N answer; anything but `y`/`yes` is a no.
fn confirm<R: BufRead>(input: &mut R) -> AppResult<bool> {
    print!("Overwrite? [y/N]: ");
    io::stdout().flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

/// Refuse to clobber an existing export unless `force` is set or the user
/// agrees on stdin.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    if confirm(&mut io::stdin().lock())? {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(format!(
            "export cancelled: {} was left untouched",
            path.display()
        )))
    }
}
