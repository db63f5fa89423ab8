use crate::config::{Config, check};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
        println!("📄 Current configuration:\n");
        println!("{}", yaml);
        Ok(())
    }

    pub fn check(path: &Path) -> AppResult<()> {
        if !path.exists() {
            info(format!(
                "No configuration file at {}, defaults are in use",
                path.display()
            ));
            return Ok(());
        }

        let missing = check::missing_fields(path)?;
        if missing.is_empty() {
            success("Configuration file is complete");
        } else {
            for field in &missing {
                warning(format!("Missing field '{}' (default value is used)", field));
            }
        }
        Ok(())
    }

    /// Open `path` in the requested editor, falling back to $EDITOR/$VISUAL or the platform default.
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
            _ => {
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
                        "Failed to edit configuration file using fallback '{}'",
                        default_editor
                    )))
                }
            }
        }
    }
}
