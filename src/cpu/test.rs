#![cfg(test)]

use super::{CpuAgent, Weights, MAX_REPUTATION};
use crate::game::{Game, Party, Phase, Role};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use Party::*;

const FIVE_PLAYERS: [Role; 5] = [Role::Liberal, Role::Liberal, Role::Fascist, Role::Hitler, Role::Liberal];
const SEVEN_PLAYERS: [Role; 7] = [
    Role::Liberal,
    Role::Liberal,
    Role::Fascist,
    Role::Hitler,
    Role::Liberal,
    Role::Fascist,
    Role::Liberal,
];

fn game_with_roles(roles: &[Role]) -> Game {
    let names: Vec<String> = (0..roles.len()).map(|i| format!("Player{}", i)).collect();
    let mut game = Game::new(&names, 42).unwrap();
    game.start().unwrap();
    game.set_roles(roles);
    for player in 0..roles.len() {
        game.set_cpu(player, true).unwrap();
    }
    game
}

fn agent(game: &Game, seat: usize, seed: u64) -> CpuAgent {
    let mut agent = CpuAgent::new(&format!("Player{}", seat), ChaCha8Rng::seed_from_u64(seed));
    agent.initialize(game).unwrap();
    agent
}

fn vote_all(game: &mut Game, vote: bool) {
    for player in 0..game.num_players() {
        if game.awaiting(player) {
            game.cast_vote(player, vote).unwrap();
        }
    }
}

/// Counts how often each player is chosen from the living players.
fn tally(agent: &mut CpuAgent, game: &Game, weights: Weights, draws: usize) -> Vec<usize> {
    let pool: Vec<usize> = (0..game.num_players()).collect();
    let mut counts = vec![0; game.num_players()];
    for _ in 0..draws {
        if let Some(player) = agent.choose_player(game, &pool, weights) {
            counts[player] += 1;
        }
    }
    counts
}

#[test]
fn never_chooses_self_or_dead() {
    let mut game = game_with_roles(&FIVE_PLAYERS);
    game.kill(2);
    let mut agent = agent(&game, 0, 1);
    let counts = tally(&mut agent, &game, Weights::new(1.0, 1.0, 1.0, 0.0), 500);
    assert_eq!(counts[0], 0);
    assert_eq!(counts[2], 0);
    assert_eq!(counts.iter().sum::<usize>(), 500);
}

#[test]
fn equal_weights_are_uniform() {
    let game = game_with_roles(&FIVE_PLAYERS);
    let mut agent = agent(&game, 0, 2);
    let counts = tally(&mut agent, &game, Weights::new(1.0, 1.0, 1.0, 0.0), 4000);
    for count in &counts[1..] {
        assert!((800..1200).contains(count), "{:?}", counts);
    }
}

#[test]
fn zero_weight_never_chosen() {
    let game = game_with_roles(&FIVE_PLAYERS);
    // Fascists know every role
    let mut agent = agent(&game, 2, 3);
    let counts = tally(&mut agent, &game, Weights::new(1.0, 0.0, 1.0, 0.0), 1000);
    assert_eq!(counts[3], 0);
    assert_eq!(agent.player_weight(&game, 3, Weights::new(1.0, 0.0, 1.0, 0.0)), 0.0);
}

#[test]
fn unknown_players_weighted_by_reputation() {
    let game = game_with_roles(&FIVE_PLAYERS);
    let mut agent = agent(&game, 0, 4);
    let weights = Weights::new(0.0, 0.0, 1.0, 0.0);
    agent.reputation[1] = MAX_REPUTATION;
    agent.reputation[4] = -MAX_REPUTATION;
    assert_eq!(agent.player_weight(&game, 1, weights), 1.0);
    assert_eq!(agent.player_weight(&game, 2, weights), 0.5);
    assert_eq!(agent.player_weight(&game, 4, weights), 0.0);
}

#[test]
fn human_bias_favours_humans() {
    let mut game = game_with_roles(&FIVE_PLAYERS);
    game.set_cpu(4, false).unwrap();
    let mut agent = agent(&game, 0, 5);
    let weights = Weights::new(1.0, 1.0, 1.0, 3.0);
    assert_eq!(agent.player_weight(&game, 4, weights), 4.0);
    let counts = tally(&mut agent, &game, weights, 1000);
    assert!(counts[4] > counts[1] + counts[2] + counts[3], "{:?}", counts);
}

#[test]
fn all_zero_weights_fall_back_to_uniform() {
    let game = game_with_roles(&FIVE_PLAYERS);
    let mut agent = agent(&game, 0, 6);
    let weights = Weights::new(0.0, 0.0, 0.0, 0.0);
    let pool = [0, 1, 2];
    assert_eq!(agent.choose_player_weighted(&game, &pool, weights), None);
    for _ in 0..50 {
        let player = agent.choose_player(&game, &pool, weights).unwrap();
        assert!(player == 1 || player == 2);
    }
    assert_eq!(agent.choose_player(&game, &[0], weights), None);
}

#[test]
fn initial_knowledge() {
    let game = game_with_roles(&FIVE_PLAYERS);
    let liberal = agent(&game, 0, 0);
    assert_eq!(liberal.seat(), 0);
    assert_eq!(liberal.known_role(0), Some(Role::Liberal));
    assert!((1..5).all(|p| liberal.known_role(p).is_none()));

    let fascist = agent(&game, 2, 0);
    assert!((0..5).all(|p| fascist.known_role(p) == Some(FIVE_PLAYERS[p])));

    let hitler = agent(&game, 3, 0);
    assert_eq!(hitler.known_role(2), Some(Role::Fascist));

    let game = game_with_roles(&SEVEN_PLAYERS);
    let hitler = agent(&game, 3, 0);
    assert_eq!(hitler.known_role(3), Some(Role::Hitler));
    assert!(hitler.known_role(2).is_none());
    assert!(hitler.known_role(5).is_none());
}

#[test]
fn unknown_name_fails_to_initialize() {
    let game = game_with_roles(&FIVE_PLAYERS);
    let mut agent = CpuAgent::new("Nobody", ChaCha8Rng::seed_from_u64(0));
    assert!(agent.initialize(&game).is_err());
}

#[test]
fn acts_only_when_awaited() {
    let mut game = game_with_roles(&FIVE_PLAYERS);
    let mut bystander = agent(&game, 1, 0);
    assert_eq!(bystander.act(&mut game), Ok(false));
    assert_eq!(game.phase(), Phase::ChancellorNomination);

    let mut president = agent(&game, 0, 0);
    assert_eq!(president.act(&mut game), Ok(true));
    assert_eq!(game.phase(), Phase::ChancellorVoting);
    assert!(game.current_chancellor().is_some());

    assert_eq!(bystander.act(&mut game), Ok(true));
    assert!(game.has_voted(1));
    assert_eq!(bystander.act(&mut game), Ok(false));

    game.kill(4);
    let mut dead = agent(&game, 4, 0);
    assert_eq!(dead.act(&mut game), Ok(false));
}

#[test]
fn presidents_discard_by_role() {
    for (seat, chancellor, expected) in [(0, 1, [Liberal, Fascist]), (2, 1, [Fascist, Fascist])] {
        let mut game = game_with_roles(&FIVE_PLAYERS);
        // Hand the presidency to `seat` by failing elections
        while game.current_president() != Some(seat) {
            let nominee = game.eligible_chancellors().indices()[0];
            game.nominate_chancellor(nominee).unwrap();
            vote_all(&mut game, false);
            game.end_presidential_term().unwrap();
        }
        let mut president = agent(&game, seat, 7);
        game.stack_deck(&[Liberal, Fascist, Fascist]);
        game.nominate_chancellor(chancellor).unwrap();
        vote_all(&mut game, true);

        president.act(&mut game).unwrap();
        assert_eq!(game.phase(), Phase::LegislativeChancellor);
        assert_eq!(game.legislative_choices().unwrap(), &expected);
    }
}

#[test]
fn chancellors_enact_by_role() {
    for (chancellor, expected) in [(1, Liberal), (2, Fascist)] {
        let mut game = game_with_roles(&FIVE_PLAYERS);
        game.stack_deck(&[Liberal, Fascist, Fascist]);
        game.nominate_chancellor(chancellor).unwrap();
        vote_all(&mut game, true);
        game.president_discard_policy(2).unwrap();

        let mut agent = agent(&game, chancellor, 8);
        agent.act(&mut game).unwrap();
        assert_eq!(game.last_enacted(), Some(expected));
    }
}

#[test]
fn hitler_chancellor_hides_until_liberals_threaten() {
    for (liberal_cards, expected) in [(0, Liberal), (3, Liberal), (4, Fascist)] {
        let mut game = game_with_roles(&FIVE_PLAYERS);
        game.set_policies(liberal_cards, 0);
        game.stack_deck(&[Liberal, Fascist, Fascist]);
        game.nominate_chancellor(3).unwrap();
        vote_all(&mut game, true);
        game.president_discard_policy(2).unwrap();
        assert_eq!(game.legislative_choices().unwrap(), &[Liberal, Fascist]);

        let mut hitler = agent(&game, 3, 8);
        hitler.act(&mut game).unwrap();
        assert_eq!(game.last_enacted(), Some(expected), "{} liberal policies", liberal_cards);
    }
}

#[test]
fn fascists_back_a_winning_hitler_chancellor() {
    let mut yes = 0;
    for seed in 0..200 {
        let mut game = game_with_roles(&FIVE_PLAYERS);
        game.set_policies(0, 3);
        game.nominate_chancellor(3).unwrap();
        let mut fascist = agent(&game, 2, seed);
        fascist.act(&mut game).unwrap();
        if game.votes().unwrap()[2] == Some(true) {
            yes += 1;
        }
    }
    assert!(yes >= 190, "{} yes votes", yes);
}

#[test]
fn fascist_chancellor_vetoes_liberals_only_with_a_fascist_president() {
    // Hitler holds the presidency, so the fascist chancellor knows an ally is there
    let roles = [Role::Hitler, Role::Liberal, Role::Fascist, Role::Liberal, Role::Liberal];
    for (roles, expected) in [(roles, Phase::LegislativePresidentVeto), (FIVE_PLAYERS, Phase::PostLegislative)] {
        let mut game = game_with_roles(&roles);
        game.set_policies(0, 5);
        game.stack_deck(&[Liberal, Liberal, Liberal]);
        game.nominate_chancellor(2).unwrap();
        vote_all(&mut game, true);
        game.president_discard_policy(0).unwrap();

        let mut chancellor = agent(&game, 2, 10);
        assert!(game.can_veto());
        chancellor.act(&mut game).unwrap();
        assert_eq!(game.phase(), expected);
        if expected == Phase::PostLegislative {
            assert_eq!(game.last_enacted(), Some(Liberal));
        }
    }
}

#[test]
fn special_election_picks_another_living_player() {
    for seed in 0..20 {
        let mut game = game_with_roles(&SEVEN_PLAYERS);
        game.set_policies(0, 2);
        game.kill(6);
        let mut president = agent(&game, 0, seed);
        game.stack_deck(&[Fascist, Fascist, Fascist]);
        game.nominate_chancellor(1).unwrap();
        vote_all(&mut game, true);
        game.president_discard_policy(0).unwrap();
        game.chancellor_enact_policy(0).unwrap();
        assert_eq!(game.phase(), Phase::PresidentialPowerElection);

        president.act(&mut game).unwrap();
        assert_eq!(game.phase(), Phase::PostLegislative);
        game.end_presidential_term().unwrap();
        let elected = game.current_president().unwrap();
        assert!(elected != 0 && elected != 6, "seed {} elected {}", seed, elected);
    }
}

#[test]
fn liberal_chancellor_vetoes_fascist_hand() {
    let mut game = game_with_roles(&FIVE_PLAYERS);
    game.set_policies(0, 5);
    game.stack_deck(&[Fascist, Fascist, Fascist]);
    game.nominate_chancellor(1).unwrap();
    vote_all(&mut game, true);
    game.president_discard_policy(0).unwrap();

    let mut chancellor = agent(&game, 1, 9);
    chancellor.act(&mut game).unwrap();
    assert_eq!(game.phase(), Phase::LegislativePresidentVeto);

    // A liberal president accepts, and trusts the chancellor more
    let mut president = agent(&game, 0, 9);
    president.act(&mut game).unwrap();
    assert_eq!(game.phase(), Phase::PostLegislative);
    assert_eq!(president.reputation(1), 4);
}

#[test]
fn observers_judge_enacted_policies() {
    let mut game = game_with_roles(&FIVE_PLAYERS);
    let mut observer = agent(&game, 4, 0);
    game.stack_deck(&[Fascist, Fascist, Fascist]);
    game.nominate_chancellor(1).unwrap();
    vote_all(&mut game, true);
    game.president_discard_policy(0).unwrap();
    game.chancellor_enact_policy(0).unwrap();

    observer.update(&game);
    assert_eq!(observer.reputation(0), -1);
    assert_eq!(observer.reputation(1), -1);
    assert_eq!(observer.reputation(2), 0);
    // Only once per round
    observer.update(&game);
    assert_eq!(observer.reputation(0), -1);
}

#[test]
fn president_judges_chancellor_given_mixed_hand() {
    let mut game = game_with_roles(&FIVE_PLAYERS);
    let mut president = agent(&game, 0, 0);
    game.stack_deck(&[Liberal, Fascist, Fascist]);
    game.nominate_chancellor(1).unwrap();
    vote_all(&mut game, true);
    president.act(&mut game).unwrap();
    assert_eq!(game.legislative_choices().unwrap(), &[Liberal, Fascist]);

    game.chancellor_enact_policy(1).unwrap();
    president.update(&game);
    assert_eq!(president.reputation(1), -3);
}

#[test]
fn reputation_is_clamped() {
    let game = game_with_roles(&FIVE_PLAYERS);
    let mut agent = agent(&game, 0, 0);
    for _ in 0..4 {
        agent.update_reputation(1, 4);
        agent.update_reputation(2, -4);
    }
    assert_eq!(agent.reputation(1), MAX_REPUTATION);
    assert_eq!(agent.reputation(2), -MAX_REPUTATION);
}

#[test]
fn liberals_reject_suspected_fascists() {
    let mut yes = 0;
    for seed in 0..200 {
        let mut game = game_with_roles(&FIVE_PLAYERS);
        let mut voter = agent(&game, 4, seed);
        voter.reputation[0] = -MAX_REPUTATION;
        voter.reputation[1] = -MAX_REPUTATION;
        game.nominate_chancellor(1).unwrap();
        voter.act(&mut game).unwrap();
        if game.votes().unwrap()[4] == Some(true) {
            yes += 1;
        }
    }
    assert!(yes < 30, "{} yes votes", yes);
}

#[test]
fn fascists_never_execute_hitler() {
    for seed in 0..50 {
        let mut game = game_with_roles(&FIVE_PLAYERS);
        game.set_policies(0, 3);
        // Hand the presidency to the fascist in seat 2
        for nominee in [1, 2] {
            game.nominate_chancellor(nominee).unwrap();
            vote_all(&mut game, false);
            game.end_presidential_term().unwrap();
        }
        assert_eq!(game.current_president(), Some(2));

        game.stack_deck(&[Fascist, Fascist, Fascist]);
        game.nominate_chancellor(4).unwrap();
        vote_all(&mut game, true);
        game.president_discard_policy(0).unwrap();
        game.chancellor_enact_policy(0).unwrap();
        assert_eq!(game.phase(), Phase::PresidentialPowerExecution);

        let mut fascist = agent(&game, 2, seed);
        fascist.act(&mut game).unwrap();
        assert!(game.players()[3].alive);
        assert!(!game.game_over());
    }
}

#[test]
fn investigation_teaches_role() {
    let mut game = game_with_roles(&SEVEN_PLAYERS);
    game.set_policies(0, 1);
    let mut president = agent(&game, 0, 11);
    game.stack_deck(&[Fascist, Fascist, Fascist]);
    game.nominate_chancellor(1).unwrap();
    vote_all(&mut game, true);
    game.president_discard_policy(0).unwrap();
    game.chancellor_enact_policy(0).unwrap();
    assert_eq!(game.phase(), Phase::PresidentialPowerInvestigate);

    president.act(&mut game).unwrap();
    let target = (1..7).find(|p| game.players()[*p].investigated).unwrap();
    let expected = if SEVEN_PLAYERS[target] == Role::Liberal {
        Role::Liberal
    } else {
        Role::Fascist
    };
    assert_eq!(president.known_role(target), Some(expected));
}
