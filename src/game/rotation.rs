use super::player::Player;

/// Finds the first living player clockwise after `player`, wrapping around the table.
/// Returns `player` itself if every other player is dead, and `None` if nobody is alive.
pub fn next_alive(players: &[Player], player: usize) -> Option<usize> {
    (player + 1..players.len())
        .chain(0..(player + 1).min(players.len()))
        .find(|idx| players[*idx].alive)
}

/// Finds the first living player at or after `player`, wrapping around the table.
pub fn first_alive_from(players: &[Player], player: usize) -> Option<usize> {
    if players.get(player).map(|p| p.alive).unwrap_or(false) {
        return Some(player);
    }
    next_alive(players, player)
}

/// Counts the living players.
pub fn num_alive(players: &[Player]) -> usize {
    players.iter().filter(|p| p.alive).count()
}
