use crate::error::{Result, ShiftRosterError};
use serde::{Deserialize, Serialize};
use shift_roster_common::DEFAULT_MIN_NAME_LEN;
use std::path::{Path, PathBuf};

/// `--layout` 未指定かつ設定にも無い場合のレイアウトファイル
pub const FALLBACK_LAYOUT_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 既定のレイアウト設定ファイル
    pub layout_path: Option<PathBuf>,
    /// この文字数以下の名前セルは無視する
    pub min_name_len: usize,
    /// 名簿更新で人が削除される前に確認する
    pub confirm_updates: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            layout_path: None,
            min_name_len: DEFAULT_MIN_NAME_LEN,
            confirm_updates: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ShiftRosterError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("shift-roster").join("config.json"))
    }

    /// 使用するレイアウトファイル（引数 > 設定 > ./config.json）
    pub fn layout_file(&self, cli_layout: Option<&Path>) -> PathBuf {
        cli_layout
            .map(Path::to_path_buf)
            .or_else(|| self.layout_path.clone())
            .unwrap_or_else(|| PathBuf::from(FALLBACK_LAYOUT_FILE))
    }

    pub fn set_layout_path(&mut self, path: PathBuf) -> Result<()> {
        if !path.exists() {
            return Err(ShiftRosterError::FileNotFound(path.display().to_string()));
        }
        self.layout_path = Some(path);
        self.save()
    }
}
