//! Диспетчер событий: одна команда за раз, синхронно до конца.
//!
//! Фронт не трогает сессию напрямую — только через `execute` / `query`.

use tracing::debug;

use crate::engine::{GameSession, RandomSource, RoundStatus};

use super::commands::Command;
use super::dto::CommandResponse;
use super::errors::ApiError;
use super::queries::{build_game_view, Query, QueryResponse};

/// Выполнить команду над сессией.
pub fn execute<R: RandomSource>(
    session: &mut GameSession<R>,
    command: Command,
) -> Result<CommandResponse, ApiError> {
    debug!(?command, phase = %session.phase(), "команда");

    match command {
        Command::NewGame | Command::ResetGame => {
            session.reset_game();
            Ok(CommandResponse::State(build_game_view(session)))
        }
        Command::Shuffle => {
            let cards_remaining = session.shuffle()?.remaining();
            Ok(CommandResponse::Shuffled { cards_remaining })
        }
        Command::PlaceBet { amount } => {
            let status = session.place_bet(amount)?;
            Ok(map_round_status(session, status))
        }
        Command::Hit => {
            let status = session.hit()?;
            Ok(map_round_status(session, status))
        }
        Command::Stay => {
            let status = session.stay()?;
            Ok(map_round_status(session, status))
        }
        Command::NewRound => {
            session.new_round()?;
            Ok(CommandResponse::State(build_game_view(session)))
        }
    }
}

/// Выполнить запрос (без мутаций).
pub fn query<R: RandomSource>(session: &GameSession<R>, query: Query) -> QueryResponse {
    match query {
        Query::GetState => QueryResponse::State(build_game_view(session)),
        Query::GetRoundEvents { from } => {
            QueryResponse::RoundEvents(session.round().history.since(from).to_vec())
        }
    }
}

/// Разобрать команду из JSON и выполнить.
pub fn execute_json<R: RandomSource>(
    session: &mut GameSession<R>,
    raw: &str,
) -> Result<CommandResponse, ApiError> {
    let command: Command = serde_json::from_str(raw)?;
    execute(session, command)
}

fn map_round_status<R: RandomSource>(session: &GameSession<R>, status: RoundStatus) -> CommandResponse {
    let state = build_game_view(session);
    match status {
        RoundStatus::Ongoing => CommandResponse::State(state),
        RoundStatus::Finished(_) => CommandResponse::RoundFinished {
            state,
            events: session.round().history.events.clone(),
        },
    }
}
