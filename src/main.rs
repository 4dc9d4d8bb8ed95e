use hitler_engine::config::Config;
use hitler_engine::session::SessionManager;
use rand::RngCore;
use std::time::Duration;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::try_init().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            log::error!("Invalid configuration: {:#}", err);
            return;
        }
    };
    let seed = config.seed.unwrap_or_else(|| rand::thread_rng().next_u64());
    log::info!(
        "Playing {} games of {} players, starting from seed {}",
        config.num_games,
        config.num_players,
        seed
    );

    let manager: &'static SessionManager = Box::leak(Box::new(SessionManager::new()));
    let names: Vec<String> = (1..=config.num_players).map(|i| format!("CPU {}", i)).collect();
    let cpu = vec![true; config.num_players];
    let delay = Duration::from_millis(config.cpu_delay_ms);

    let mut tasks = vec![];
    for game in 0..config.num_games {
        let handle = match manager.create_game(&names, &cpu, seed.wrapping_add(game as u64)) {
            Ok(handle) => handle,
            Err(err) => {
                log::error!("Could not create game: {}", err);
                return;
            }
        };
        let id = match handle.lock() {
            Ok(session) => session.id().to_string(),
            Err(_) => continue,
        };
        tasks.push(tokio::spawn(play(manager, id, delay)));
    }

    for task in tasks {
        if let Err(err) = task.await {
            log::error!("Game task failed: {}", err);
        }
    }
    manager.purge_games();
    log::info!("{} games left unfinished", manager.num_games());
}

/// Plays an all-CPU game to completion, logging what the board and the first seat see as it goes.
async fn play(manager: &'static SessionManager, id: String, delay: Duration) {
    let Ok(handle) = manager.find_game(&id) else {
        return;
    };
    let (mut board, mut seat) = {
        let Ok(mut session) = handle.lock() else {
            return;
        };
        let board = session.join_board();
        let Ok(seat) = session.join_player(0) else {
            return;
        };
        if let Err(err) = session.start_game() {
            log::error!("Could not start game {}: {}", id, err);
            return;
        }
        (board, seat)
    };

    let watch_id = id.clone();
    let watcher = tokio::spawn(async move {
        let mut phase = serde_json::Value::Null;
        loop {
            tokio::select! {
                changed = board.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let state = board.borrow_and_update().clone();
                    if state["phase"] != phase {
                        phase = state["phase"].clone();
                        log::debug!("Game {} entered {}", watch_id, phase);
                    }
                    log::trace!("Game {} board: {}", watch_id, state);
                }
                changed = seat.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    log::trace!("Game {} seat 0: {}", watch_id, *seat.borrow_and_update());
                }
            }
        }
    });

    loop {
        let acted = match handle.lock() {
            Ok(mut session) => session.step_cpus(),
            Err(_) => false,
        };
        if !acted {
            break;
        }
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
    watcher.abort();

    let Ok(session) = handle.lock() else {
        return;
    };
    match session.summary() {
        Some(summary) => match serde_json::to_string(&summary) {
            Ok(json) => log::info!("Game over: {}", json),
            Err(err) => log::error!("Could not serialise summary of game {}: {}", id, err),
        },
        None => log::warn!("Game {} stalled in {:?}", id, session.game().phase()),
    }
}
