//! Движок блэкджека для одного игрока против дилера.
//!
//! Слои:
//! - `domain` — карты, колода, фишки, руки, фазы раунда, правила;
//! - `engine` — тасовка, ставки, ход игрока, правило дилера, расчёт, сессия;
//! - `api` — команды/запросы/DTO для фронта;
//! - `infra` — RNG и загрузка конфига.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;

pub use api::{execute, query, ApiError, Command, CommandResponse, GameViewDto, Query, QueryResponse};
pub use domain::{Card, Chips, GameConfig, Outcome, Rank, RoundPhase, Suit};
pub use engine::{EngineError, GameSession, RandomSource, RoundStatus};
pub use infra::{DeterministicRng, SystemRng};
