//! Window title / status line

use crate::sim::GameState;

pub const TITLE: &str = "Ghost Busters";

/// Status text shown once per frame
pub fn window_title(state: &GameState) -> String {
    if state.is_game_over() {
        format!(
            "{TITLE}  |  SCORE: {}   GAME OVER  (press R to restart)",
            state.score
        )
    } else {
        format!(
            "{TITLE}  |  SCORE: {}   LIVES: {}   [A/D or \u{2190}\u{2192} to move, SPACE to shoot]",
            state.score, state.lives
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GamePhase;

    #[test]
    fn test_playing_title() {
        let mut state = GameState::new(1);
        state.score = 30;
        assert_eq!(
            window_title(&state),
            "Ghost Busters  |  SCORE: 30   LIVES: 3   [A/D or ←→ to move, SPACE to shoot]"
        );
    }

    #[test]
    fn test_game_over_title() {
        let mut state = GameState::new(1);
        state.score = 120;
        state.lives = 0;
        state.phase = GamePhase::GameOver;
        assert_eq!(
            window_title(&state),
            "Ghost Busters  |  SCORE: 120   GAME OVER  (press R to restart)"
        );
    }
}
