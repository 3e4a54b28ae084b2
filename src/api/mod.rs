//! Внешний API движка блэкджека.
//!
//! Здесь описываются:
//! - команды (commands.rs) — всё, что меняет состояние (ставка, hit/stay, новый раунд, сброс);
//! - запросы (queries.rs) — только чтение;
//! - DTO (dto.rs) — удобные структуры для фронта;
//! - ошибки (errors.rs) — то, что видит клиент;
//! - диспетчер (dispatch.rs) — одна точка входа для фронта.

pub mod commands;
pub mod dispatch;
pub mod dto;
pub mod errors;
pub mod queries;

pub use commands::*;
pub use dispatch::*;
pub use dto::*;
pub use errors::*;
pub use queries::*;
