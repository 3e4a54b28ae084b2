// src/bin/blackjack_dev_cli.rs

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::Parser;
use tracing::level_filters::LevelFilter;

use blackjack_engine::api::{self, Command, CommandResponse, DealerHandDto, GameViewDto};
use blackjack_engine::domain::GameConfig;
use blackjack_engine::engine::{GameSession, RandomSource, RoundEvent, RoundEventKind};
use blackjack_engine::infra::{config_to_json, load_config, DeterministicRng, SystemRng};

/// Интерактивный dev-CLI: играем в блэкджек из терминала через API движка.
#[derive(Parser, Debug)]
#[command(name = "blackjack_dev_cli")]
struct Args {
    /// Путь к JSON-конфигу (иначе — конфиг по умолчанию).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed для детерминированной колоды.
    #[arg(long)]
    seed: Option<u64>,

    /// Уровень логов: error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,

    /// Напечатать итоговый конфиг и выйти.
    #[arg(long)]
    dump_config: bool,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => match load_config(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("[CLI] ОШИБКА конфига {}: {e}", path.display());
                std::process::exit(2);
            }
        },
        None => GameConfig::default(),
    };

    if args.dump_config {
        match config_to_json(&config) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("[CLI] ОШИБКА: {e}"),
        }
        return;
    }

    match args.seed {
        Some(seed) => run(config, DeterministicRng::from_seed(seed)),
        None => run(config, SystemRng),
    }
}

fn run<R: RandomSource>(config: GameConfig, rng: R) {
    let delay = Duration::from_millis(config.dealer_draw_delay_ms);
    let mut session = match GameSession::with_config(config, rng) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("[CLI] ОШИБКА: {e}");
            return;
        }
    };

    println!("blackjack_dev_cli: новая игра. Команды: shuffle, bet <n>, hit, stay, new, reset, state, quit");
    print_state(&api::build_game_view(&session));

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let command = match parse_command(line.trim()) {
            Some(Input::Quit) => break,
            Some(Input::State) => {
                print_state(&api::build_game_view(&session));
                continue;
            }
            Some(Input::Command(cmd)) => cmd,
            None => {
                println!("[CLI] Неизвестная команда: {}", line.trim());
                continue;
            }
        };

        match api::execute(&mut session, command) {
            Ok(CommandResponse::State(view)) => print_state(&view),
            Ok(CommandResponse::Shuffled { cards_remaining }) => {
                println!("[CLI] Колода перетасована, карт: {cards_remaining}");
            }
            Ok(CommandResponse::RoundFinished { state, events }) => {
                replay_dealer_turn(&events, delay);
                print_state(&state);
            }
            Err(e) => println!("[CLI] ОШИБКА: {e:?}"),
        }
    }

    println!("[CLI] Завершение работы dev-CLI.");
}

enum Input {
    Command(Command),
    State,
    Quit,
}

fn parse_command(line: &str) -> Option<Input> {
    let mut parts = line.split_whitespace();
    let head = parts.next()?;
    let cmd = match head {
        "shuffle" => Command::Shuffle,
        "bet" => Command::PlaceBet {
            amount: parts.next()?.parse().ok()?,
        },
        "hit" | "h" => Command::Hit,
        "stay" | "stand" | "s" => Command::Stay,
        "new" => Command::NewRound,
        "reset" => Command::ResetGame,
        "state" => return Some(Input::State),
        "quit" | "q" | "exit" => return Some(Input::Quit),
        _ => return None,
    };
    Some(Input::Command(cmd))
}

/// Проигрываем ход дилера с паузами — движок уже всё посчитал.
fn replay_dealer_turn(events: &[RoundEvent], delay: Duration) {
    for ev in events {
        match &ev.kind {
            RoundEventKind::HoleCardRevealed { card, total } => {
                println!("[DEALER] Открывает {card}, сумма {total}");
            }
            RoundEventKind::DealerDrew { card, total } => {
                thread::sleep(delay);
                println!("[DEALER] Берёт {card}, сумма {total}");
            }
            RoundEventKind::DealerStood { total } => println!("[DEALER] Стоит на {total}"),
            RoundEventKind::DealerBusted { total } => println!("[DEALER] Перебор: {total}"),
            RoundEventKind::PlayerBusted { total } => println!("[PLAYER] Перебор: {total}"),
            _ => {}
        }
    }
}

fn print_state(view: &GameViewDto) {
    println!("---------------- ROUND {} | {} ----------------", view.round_id, view.phase);
    println!(
        "Банкролл: {} | Ставка: {} | Карт в колоде: {}{}",
        view.bankroll,
        view.current_bet,
        view.cards_remaining,
        if view.deck_shuffled { "" } else { " (колода не перетасована)" }
    );

    if !view.player_hand.cards.is_empty() {
        let cards: Vec<String> = view.player_hand.cards.iter().map(|c| c.to_string()).collect();
        println!(
            "Игрок:  {} = {}{}",
            cards.join(" "),
            view.player_hand.total,
            if view.player_hand.is_soft { " (soft)" } else { "" }
        );
        println!("Дилер:  {}", format_dealer(&view.dealer_hand));
    }

    if let Some(result) = &view.result {
        println!(
            "Итог: {:?}{} | ставка {} | возврат {} | net {:+}",
            result.outcome,
            if result.blackjack { " (blackjack)" } else { "" },
            result.bet,
            result.credited,
            result.net
        );
    }

    if view.player_can_act {
        println!("Ваш ход: hit / stay");
    } else if view.can_bet {
        println!("Делайте ставку: bet <n>");
    }
}

fn format_dealer(dealer: &DealerHandDto) -> String {
    let cards: Vec<String> = dealer
        .cards
        .iter()
        .map(|c| c.map(|c| c.to_string()).unwrap_or_else(|| "??".to_string()))
        .collect();
    match dealer.total {
        Some(total) => format!("{} = {}", cards.join(" "), total),
        None => cards.join(" "),
    }
}
