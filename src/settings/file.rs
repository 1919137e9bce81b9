use super::{SettingValue, SettingsStore};
use crate::config::Config;
use anyhow::{Context, Result};
use fs2::FileExt;
use log::{debug, info, warn};
use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Settings store backed by a small TOML file.
///
/// Every `set_*` call rewrites the file immediately: the write happens under
/// an exclusive lock on a sibling `.lock` file, into a temporary file that is
/// then renamed over the target.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, SettingValue>,
}

impl FileStore {
    /// Default location: `~/.config/scribe-panel/settings.toml`.
    pub fn default_path() -> Result<PathBuf> {
        Ok(Config::config_dir()?.join("settings.toml"))
    }

    /// Opens the store at `path`, reading existing values if the file exists.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = if path.exists() {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("failed to read settings from {}", path.display()))?;
            let values: BTreeMap<String, SettingValue> = toml::from_str(&text)
                .with_context(|| format!("failed to parse settings from {}", path.display()))?;
            info!("Loaded {} setting(s) from {}", values.len(), path.display());
            values
        } else {
            debug!("No settings file at {}, starting empty", path.display());
            BTreeMap::new()
        };

        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("toml.tmp")
    }

    fn set(&mut self, key: &str, value: SettingValue) -> Result<()> {
        self.values.insert(key.to_string(), value);
        self.flush()
            .with_context(|| format!("failed to persist setting '{key}'"))
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create settings directory {}", parent.display())
            })?;
        }

        let lock_path = self.lock_path();
        let lock_file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .with_context(|| format!("failed to open settings lock file {}", lock_path.display()))?;
        lock_file
            .lock_exclusive()
            .with_context(|| format!("failed to lock settings file {}", lock_path.display()))?;

        let result = self.write_locked();

        FileExt::unlock(&lock_file).unwrap_or_else(|err| {
            warn!(
                "failed to unlock settings file {}: {}",
                lock_path.display(),
                err
            )
        });

        result
    }

    fn write_locked(&self) -> Result<()> {
        let payload = toml::to_string(&self.values).context("failed to serialise settings")?;
        let tmp_path = self.temp_path();
        {
            let mut tmp_file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&tmp_path)
                .with_context(|| {
                    format!(
                        "failed to open temporary settings file {}",
                        tmp_path.display()
                    )
                })?;
            tmp_file
                .write_all(payload.as_bytes())
                .context("failed to write settings payload")?;
            tmp_file
                .sync_all()
                .context("failed to sync settings payload")?;
        }

        fs::rename(&tmp_path, &self.path).with_context(|| {
            format!(
                "failed to move {} to {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;
        Ok(())
    }
}

impl SettingsStore for FileStore {
    fn set_int(&mut self, key: &str, value: i64) -> Result<()> {
        self.set(key, SettingValue::Int(value))
    }

    fn set_string(&mut self, key: &str, value: &str) -> Result<()> {
        self.set(key, SettingValue::Text(value.to_string()))
    }

    fn get_int(&self, key: &str) -> Option<i64> {
        match self.values.get(key) {
            Some(SettingValue::Int(value)) => Some(*value),
            _ => None,
        }
    }

    fn get_string(&self, key: &str) -> Option<String> {
        match self.values.get(key) {
            Some(SettingValue::Text(value)) => Some(value.clone()),
            _ => None,
        }
    }
}
