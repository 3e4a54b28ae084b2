use serde::{Deserialize, Serialize};

/// Команда верхнего уровня — всё, что меняет состояние сессии.
///
/// Фронт шлёт их в ответ на ввод пользователя; правила и выплаты
/// он не дублирует, а читает из `GameViewDto`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Сбросить сессию к новой игре (стартовый банкролл, колоды нет).
    NewGame,

    /// Перетасовать свежую колоду (фронт показывает статус «тасуем»).
    Shuffle,

    /// Поставить и раздать.
    ///
    /// Сумма знаковая: фронт может прислать что угодно, проверку делает движок.
    PlaceBet { amount: i64 },

    /// Взять карту.
    Hit,

    /// Остановиться; дилер доигрывает, раунд рассчитывается.
    Stay,

    /// Следующий раунд после завершения текущего.
    NewRound,

    /// Полный сброс из любой фазы.
    ResetGame,
}
