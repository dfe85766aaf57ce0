//! INI-backed settings store.
//!
//! A [`Ini`] is named sections of `key=value` text lines. Parsing is
//! forgiving: lines are trimmed, blank lines and `;`/`#` comments are
//! skipped, and malformed lines are silently dropped. Serialization is
//! deterministic - sections and keys come out sorted.
//!
//! [`Settings`] binds an `Ini` to a file path. Load/save failures are
//! surfaced as [`SettingsError`] for the caller to judge, and logged.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

/// Settings I/O failure, carrying the offending path.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("no file path configured for settings")]
    NoPath,

    #[error("failed to read settings from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write settings to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

type Section = BTreeMap<String, String>;

/// In-memory key-value store organized into named sections.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Ini {
    sections: BTreeMap<String, Section>,
}

impl Ini {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value under `[section] key`, serialized via `Display`.
    pub fn set(&mut self, section: &str, key: &str, value: impl Display) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
    }

    /// Raw text value, if present.
    pub fn get_raw(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|kv| kv.get(key))
            .map(String::as_str)
    }

    /// Typed read: `None` when the key is missing or fails to parse.
    pub fn get<T: FromStr>(&self, section: &str, key: &str) -> Option<T> {
        self.get_raw(section, key)?.parse().ok()
    }

    /// Typed read with a fallback.
    pub fn get_or<T: FromStr>(&self, section: &str, key: &str, default: T) -> T {
        self.get(section, key).unwrap_or(default)
    }

    pub fn has(&self, section: &str, key: &str) -> bool {
        self.get_raw(section, key).is_some()
    }

    /// Remove one key; returns its previous value.
    pub fn remove(&mut self, section: &str, key: &str) -> Option<String> {
        let kv = self.sections.get_mut(section)?;
        let prev = kv.remove(key);
        if kv.is_empty() {
            self.sections.remove(section);
        }
        prev
    }

    pub fn clear(&mut self) {
        self.sections.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Section names, sorted.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Parse INI text, replacing the current content. Keys before any
    /// `[section]` header land in the unnamed section `""`.
    pub fn parse(&mut self, content: &str) {
        self.sections.clear();
        let mut current = String::new();

        for raw in content.lines() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                current = line[1..line.len() - 1].trim().to_string();
                self.sections.entry(current.clone()).or_default();
                continue;
            }

            // key=value; anything without '=' is silently skipped.
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            self.sections
                .entry(current.clone())
                .or_default()
                .insert(key.to_string(), value.trim().to_string());
        }
    }

    /// Serialize to INI text, sections and keys in sorted order.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for (section, kv) in &self.sections {
            if !section.is_empty() {
                let _ = writeln!(out, "[{section}]");
            }
            for (key, value) in kv {
                let _ = writeln!(out, "{key}={value}");
            }
            out.push('\n');
        }
        out
    }

    /// Read and parse a file.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse(&content);
        Ok(())
    }

    /// Serialize and write a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        fs::write(path, self.serialize()).map_err(|source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// An [`Ini`] bound to its file path.
#[derive(Debug, Default)]
pub struct Settings {
    path: Option<PathBuf>,
    ini: Ini,
}

impl Settings {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ini: Ini::new(),
        }
    }

    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
    }

    pub fn ini(&self) -> &Ini {
        &self.ini
    }

    pub fn ini_mut(&mut self) -> &mut Ini {
        &mut self.ini
    }

    pub fn set(&mut self, section: &str, key: &str, value: impl Display) {
        self.ini.set(section, key, value);
    }

    pub fn get<T: FromStr>(&self, section: &str, key: &str) -> Option<T> {
        self.ini.get(section, key)
    }

    pub fn get_or<T: FromStr>(&self, section: &str, key: &str, default: T) -> T {
        self.ini.get_or(section, key, default)
    }

    /// Load from the configured path. The error is informational for the
    /// caller to judge - a missing settings file is often fine on first run.
    pub fn load(&mut self) -> Result<(), SettingsError> {
        let path = self.path.clone().ok_or(SettingsError::NoPath)?;
        match self.ini.load(&path) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "settings loaded");
                Ok(())
            }
            Err(err) => {
                tracing::error!(path = %path.display(), error = %err, "failed to load settings");
                Err(err)
            }
        }
    }

    /// Save to the configured path.
    pub fn save(&self) -> Result<(), SettingsError> {
        let path = self.path.as_ref().ok_or(SettingsError::NoPath)?;
        match self.ini.save(path) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "settings saved");
                Ok(())
            }
            Err(err) => {
                tracing::error!(path = %path.display(), error = %err, "failed to save settings");
                Err(err)
            }
        }
    }
}
