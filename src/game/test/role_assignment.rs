//! Game creation and role assignment tests

use super::super::player::{num_fascists, Role};
use super::super::{GameState, Phase};
use super::test_utils::*;
use crate::error::GameError;
use crate::game::Game;

#[test]
fn roles_match_player_count() {
    for num_players in 5..=10 {
        for seed in 0..20 {
            let game = create_started_game(num_players, seed);
            let count = |role| game.players().iter().filter(|p| p.role == role).count();
            assert_eq!(count(Role::Hitler), 1);
            assert_eq!(count(Role::Fascist), num_fascists(num_players).unwrap());
            assert_eq!(count(Role::Liberal), num_players - 1 - num_fascists(num_players).unwrap());
            assert_eq!(count(Role::Unassigned), 0);
        }
    }
}

#[test]
fn fascist_table() {
    let fascists: Vec<_> = (5..=10).map(|n| num_fascists(n).unwrap()).collect();
    assert_eq!(fascists, vec![1, 1, 2, 2, 3, 3]);
}

#[test]
fn hitler_seat_varies_with_seed() {
    let seats: std::collections::HashSet<_> = (0..30)
        .map(|seed| {
            let game = create_started_game(5, seed);
            game.players().iter().position(|p| p.role == Role::Hitler).unwrap()
        })
        .collect();
    assert!(seats.len() > 1);
}

#[test]
fn new_game_waits_in_setup() {
    let game = Game::new(&player_names(6), 0).unwrap();
    assert_eq!(game.phase(), Phase::Setup);
    assert_eq!(game.round(), 0);
    assert_eq!(game.current_president(), None);
    assert!(game.players().iter().all(|p| p.role == Role::Unassigned && p.alive));
    assert!((0..6).all(|p| !game.awaiting(p)));
}

#[test]
fn start_hands_presidency_to_first_seat() {
    let game = create_started_game(7, 1);
    assert_eq!(game.phase(), Phase::ChancellorNomination);
    assert!(matches!(game.state, GameState::Nomination { president: 0 }));
    assert_eq!(game.current_president(), Some(0));
    assert_eq!(game.round(), 1);
    assert_eq!(game.election_tracker(), 0);
    assert_eq!(game.draw_size(), 17);
    assert_eq!(game.discard_size(), 0);
    assert!(game.awaiting(0));
    assert!(!game.awaiting(1));
}

#[test]
fn cannot_start_twice() {
    let mut game = create_started_game(5, 0);
    assert_eq!(game.start(), Err(GameError::GameAlreadyStarted));
}

#[test]
fn player_count_limits() {
    assert_eq!(Game::new(&player_names(4), 0).unwrap_err(), GameError::TooFewPlayers);
    assert_eq!(Game::new(&player_names(11), 0).unwrap_err(), GameError::TooManyPlayers);
    assert!(Game::new(&player_names(5), 0).is_ok());
    assert!(Game::new(&player_names(10), 0).is_ok());
}

#[test]
fn duplicate_names_rejected() {
    let mut names = player_names(5);
    names[4] = names[1].clone();
    assert_eq!(Game::new(&names, 0).unwrap_err(), GameError::DuplicatePlayer);
}

#[test]
fn find_player_by_name() {
    let game = create_started_game(5, 0);
    assert_eq!(game.find_player("Player3"), Ok(3));
    assert_eq!(game.find_player("Nobody"), Err(GameError::PlayerNotFound));
}

#[test]
fn same_seed_same_deal() {
    let roles = |seed| {
        let game = create_started_game(10, seed);
        game.players().iter().map(|p| p.role).collect::<Vec<_>>()
    };
    assert_eq!(roles(99), roles(99));
}
