use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::fs;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Print the configuration file, or the effective defaults when no file exists.
    pub fn print(cfg: &Config) -> AppResult<()> {
        let path = Config::config_file();
        let content = if path.exists() {
            fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?
        } else {
            cfg.to_yaml()?
        };
        println!("{}", content);
        Ok(())
    }

    pub fn edit(editor: &Option<String>) -> AppResult<()> {
        let path = Config::config_file();
        if !path.exists() {
            return Err(AppError::Config(format!(
                "{} does not exist, run `rfortnight init` first",
                path.display()
            )));
        }

        let ed = editor
            .clone()
            .or_else(|| std::env::var("EDITOR").ok())
            .or_else(|| std::env::var("VISUAL").ok())
            .unwrap_or_else(|| {
                if cfg!(target_os = "windows") {
                    "notepad".into()
                } else {
                    "nano".into()
                }
            });

        let status = Command::new(&ed)
            .arg(&path)
            .status()
            .map_err(|e| AppError::Config(format!("cannot launch {ed}: {e}")))?;

        if !status.success() {
            return Err(AppError::Config(format!("{ed} exited with {status}")));
        }
        Ok(())
    }
}
