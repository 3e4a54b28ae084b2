//! Инфраструктурный слой вокруг движка блэкджека:
//! - RNG-реализации для движка;
//! - загрузка конфига из JSON.

pub mod config;
pub mod rng;

pub use config::{config_from_json, config_to_json, load_config, ConfigError};
pub use rng::*;
