//! Загрузка `GameConfig` из JSON. Отсутствующие поля берутся из значений по умолчанию.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::domain::GameConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("не удалось прочитать конфиг: {0}")]
    Io(#[from] std::io::Error),

    #[error("не удалось разобрать JSON конфига: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("некорректный конфиг: {0}")]
    Invalid(String),
}

/// Разобрать и проверить конфиг из строки JSON.
pub fn config_from_json(json: &str) -> Result<GameConfig, ConfigError> {
    let config: GameConfig = serde_json::from_str(json)?;
    config.validate().map_err(ConfigError::Invalid)?;
    Ok(config)
}

/// Прочитать конфиг из файла.
pub fn load_config(path: impl AsRef<Path>) -> Result<GameConfig, ConfigError> {
    let raw = fs::read_to_string(path)?;
    config_from_json(&raw)
}

/// Конфиг в JSON (для `--dump-config` в CLI).
pub fn config_to_json(config: &GameConfig) -> Result<String, ConfigError> {
    Ok(serde_json::to_string_pretty(config)?)
}
