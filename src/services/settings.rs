//! 配置服务：查找相关的持久化设置
//!
//! 设置文件位于 `<cache dir>/.zfind/settings.json`，缺失字段取默认值。

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::controller::StatusLocale;

const SETTINGS_DIR: &str = ".zfind";
const SETTINGS_FILE: &str = "settings.json";
const LOG_DIR: &str = "logs";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FindSettings {
    /// 打开查找时的初始大小写敏感设置
    pub case_sensitive: bool,
    pub locale: StatusLocale,
    /// 自动清除状态消息的延时（由宿主调度）
    pub status_clear_ms: u64,
    pub viewport_lines: usize,
}

impl Default for FindSettings {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            locale: StatusLocale::En,
            status_clear_ms: 3000,
            viewport_lines: 20,
        }
    }
}

impl FindSettings {
    pub fn status_clear_delay(&self) -> Duration {
        Duration::from_millis(self.status_clear_ms)
    }
}

#[derive(Debug)]
pub enum SettingsError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "settings io error: {}", e),
            SettingsError::Parse(e) => write!(f, "invalid settings file: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
        }
    }
}

impl From<io::Error> for SettingsError {
    fn from(e: io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

pub fn get_settings_path() -> Option<PathBuf> {
    get_cache_dir().map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
}

pub fn load_settings_from(path: &Path) -> Result<FindSettings, SettingsError> {
    let data = std::fs::read_to_string(path)?;
    let settings = serde_json::from_str(&data)?;
    Ok(settings)
}

/// 读取默认位置的设置；任何失败都视为没有设置
pub fn load_settings() -> Option<FindSettings> {
    let path = get_settings_path()?;
    match load_settings_from(&path) {
        Ok(settings) => Some(settings),
        Err(SettingsError::Io(e)) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to load settings");
            None
        }
    }
}

/// 若设置文件不存在则写入默认设置
pub fn ensure_settings_file_at(path: &Path) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    if !path.exists() {
        let content = serde_json::to_string_pretty(&FindSettings::default())?;
        std::fs::write(path, content)?;
    }
    Ok(())
}

pub fn ensure_settings_file() -> Result<PathBuf, SettingsError> {
    let path = get_settings_path().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Cannot determine settings directory",
        )
    })?;
    ensure_settings_file_at(&path)?;
    Ok(path)
}

/// 确保日志目录存在
pub fn ensure_log_dir() -> io::Result<PathBuf> {
    let dir = get_cache_dir()
        .map(|dir| dir.join(SETTINGS_DIR).join(LOG_DIR))
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "Cannot determine log directory"))?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

#[allow(clippy::needless_return)]
fn get_cache_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Caches"));
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CACHE_HOME") {
            return Some(PathBuf::from(xdg));
        }
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".cache"));
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(local) = std::env::var("LOCALAPPDATA") {
            return Some(PathBuf::from(local));
        }
        return std::env::var("APPDATA").ok().map(PathBuf::from);
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

#[cfg(test)]
#[path = "../../tests/unit/services/settings.rs"]
mod tests;
