//! Legality predicates.
//!
//! Every card needs the game to be in `Normal` state unless its variant
//! overrides that: a king is always playable and a +2 can be chained onto
//! an open +2. Colored cards additionally match on color or sign.

use super::card::{Card, CardKind};
use super::color::Constraint;
use crate::core::GameState;

impl Card {
    /// Whether this card may be played against the given state and constraint.
    #[must_use]
    pub fn can_play(&self, state: GameState, active: &Constraint) -> bool {
        let normal = state == GameState::Normal;
        match self.kind() {
            CardKind::King => true,
            CardKind::PlusTwo(_) => state.is_plus_two() || (normal && self.matches(active)),
            CardKind::Number { .. }
            | CardKind::Stop(_)
            | CardKind::FlipOrder(_)
            | CardKind::Plus(_)
            | CardKind::Taki(_) => normal && self.matches(active),
            CardKind::SuperTaki
            | CardKind::ChangeColor
            | CardKind::PlusThree
            | CardKind::BreakThree => normal,
        }
    }

    fn matches(&self, active: &Constraint) -> bool {
        active.admits(self.kind().color(), self.kind().sign())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, Color, Sign, Target};

    fn card(kind: CardKind) -> Card {
        Card::new(CardId::new(0), kind)
    }

    fn red_five() -> Constraint {
        Constraint::exact(Color::Red, Sign::Number(5))
    }

    #[test]
    fn test_standard_matches_color_or_sign() {
        let active = red_five();
        let normal = GameState::Normal;

        assert!(card(CardKind::Number { color: Color::Red, value: 9 }).can_play(normal, &active));
        assert!(card(CardKind::Number { color: Color::Blue, value: 5 }).can_play(normal, &active));
        assert!(!card(CardKind::Number { color: Color::Blue, value: 9 }).can_play(normal, &active));
        assert!(card(CardKind::Stop(Color::Red)).can_play(normal, &active));
        assert!(!card(CardKind::Taki(Color::Green)).can_play(normal, &active));
    }

    #[test]
    fn test_base_legality_needs_normal_state() {
        let active = red_five();
        let red_nine = card(CardKind::Number { color: Color::Red, value: 9 });

        for state in [GameState::Skip, GameState::Plus, GameState::plus_two(), GameState::Setup] {
            assert!(!red_nine.can_play(state, &active));
            assert!(!card(CardKind::ChangeColor).can_play(state, &active));
            assert!(!card(CardKind::SuperTaki).can_play(state, &active));
            assert!(!card(CardKind::PlusThree).can_play(state, &active));
        }

        assert!(card(CardKind::ChangeColor).can_play(GameState::Normal, &active));
        assert!(card(CardKind::BreakThree).can_play(GameState::Normal, &active));
    }

    #[test]
    fn test_plus_two_chains_regardless_of_color() {
        let active = red_five();
        let blue_plus_two = card(CardKind::PlusTwo(Color::Blue));

        assert!(!blue_plus_two.can_play(GameState::Normal, &active));
        assert!(blue_plus_two.can_play(GameState::plus_two(), &active));
        assert!(blue_plus_two.can_play(GameState::PlusTwo { stake: 6 }, &active));
    }

    #[test]
    fn test_king_always_legal() {
        let king = card(CardKind::King);
        for state in [GameState::Normal, GameState::plus_two(), GameState::Skip] {
            assert!(king.can_play(state, &red_five()));
        }
    }

    #[test]
    fn test_wild_matches_everything() {
        let wild = Constraint::wild();
        assert!(card(CardKind::Number { color: Color::Yellow, value: 1 }).can_play(GameState::Normal, &wild));
        assert!(card(CardKind::FlipOrder(Color::Green)).can_play(GameState::Normal, &wild));
    }

    #[test]
    fn test_cleared_sign_matches_color_only() {
        let active = Constraint {
            color: Target::Exact(Color::Green),
            sign: Target::Cleared,
        };
        assert!(card(CardKind::Number { color: Color::Green, value: 3 }).can_play(GameState::Normal, &active));
        assert!(!card(CardKind::Number { color: Color::Red, value: 3 }).can_play(GameState::Normal, &active));
    }
}
