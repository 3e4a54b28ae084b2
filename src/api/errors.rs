use serde::{Deserialize, Serialize};

use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON команды).
    BadRequest(String),

    /// Ставка не принята: неположительная или больше банкролла. Пользователь может исправить.
    InvalidBet(String),

    /// Команда не может быть выполнена в текущей фазе.
    InvalidCommand(String),

    /// Колода кончилась или повреждена — нужна перетасовка.
    DeckFailure(String),

    /// Внутренняя ошибка.
    Internal(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        let msg = err.to_string();
        match err {
            EngineError::InvalidBet { .. } | EngineError::InsufficientFunds { .. } => {
                ApiError::InvalidBet(msg)
            }
            EngineError::InvalidPhaseTransition { .. } => ApiError::InvalidCommand(msg),
            EngineError::InsufficientCards { .. } | EngineError::DeckIntegrity(_) => {
                ApiError::DeckFailure(msg)
            }
            EngineError::InvalidConfig(_) => ApiError::BadRequest(msg),
            EngineError::NoActiveBet | EngineError::Internal(_) => ApiError::Internal(msg),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
