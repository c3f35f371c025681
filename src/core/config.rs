use crate::config::{Config, check};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", serde_yaml::to_string(cfg)?);
        Ok(())
    }

    /// Report keys missing from the config file and validate the values.
    pub fn check(cfg: &Config, path: &Path) -> AppResult<Vec<String>> {
        cfg.timezone()?;
        cfg.wage_rule()?;
        cfg.deletion_window()?;

        if !path.exists() {
            warning(format!(
                "No configuration file at {} (defaults in use).",
                path.display()
            ));
            return Ok(Vec::new());
        }

        let missing = check::missing_keys(path)?;
        if missing.is_empty() {
            success("Configuration file is complete.");
        } else {
            warning(format!("Missing keys: {}", missing.join(", ")));
        }
        Ok(missing)
    }

    pub fn migrate(path: &Path) -> AppResult<Vec<String>> {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "{} does not exist; run `timecard init` first",
                path.display()
            )));
        }

        let added = check::fill_missing_keys(path)?;
        if added.is_empty() {
            info("Nothing to migrate.");
        } else {
            success(format!("Added default values for: {}", added.join(", ")));
        }
        Ok(added)
    }

    /// Open the config file in `editor`, `$EDITOR`/`$VISUAL`, or the
    /// platform default.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });
        let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&editor_to_use).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using '{}'",
                    editor_to_use
                ));
                Ok(())
            }
            _ if editor_to_use != default_editor => {
                warning(format!(
                    "Editor '{}' not available, falling back to '{}'",
                    editor_to_use, default_editor
                ));
                let status = Command::new(&default_editor)
                    .arg(path)
                    .status()
                    .map_err(|e| AppError::Config(e.to_string()))?;
                if status.success() {
                    success(format!(
                        "Configuration file edited successfully using fallback '{}'",
                        default_editor
                    ));
                    Ok(())
                } else {
                    Err(AppError::Config(format!(
                        "editor '{}' exited with {}",
                        default_editor, status
                    )))
                }
            }
            _ => Err(AppError::Config(format!(
                "failed to edit configuration with '{}'",
                editor_to_use
            ))),
        }
    }
}
