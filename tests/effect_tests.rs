//! Special-card effects played through full turns.

mod common;

use common::{after, blue, card_total, count_notices, red, start_stacked};
use taki_engine::{
    Answer, Card, CardKind, Color, Constraint, GameState, Notice, Prompt, Scripted, Selection,
    Sign, Target,
};

/// Queue a pick of the first card of `kind` in the current player's hand.
fn pick(game: &mut taki_engine::Game<Scripted>, kind: CardKind) {
    let player = game.next_player();
    let card: Card = game
        .hand(player)
        .unwrap()
        .sorted()
        .into_iter()
        .find(|c| c.kind() == kind)
        .unwrap();
    game.decider_mut().push(Answer::Select(Selection::Pick(card.id())));
}

#[test]
fn test_plus_three_everyone_else_draws() {
    let hand: &[CardKind] = &[CardKind::PlusThree, blue(3)];
    let mut game = start_stacked(&[hand, hand, hand], red(5), &[blue(9); 6], Scripted::new());
    let a = game.next_player();
    let pile_before = game.pile().len();

    assert!(game.advance_turn().unwrap());

    assert_eq!(game.hand(a).unwrap().len(), 1);
    for other in game.players_in_order(a).skip(1) {
        assert_eq!(game.hand(other).unwrap().len(), 5);
    }
    assert_eq!(game.pile().len(), pile_before + 1);
    assert_eq!(game.constraint(), Constraint::exact(Color::Red, Sign::Number(5)));
    assert_eq!(game.next_player(), after(&game, a));
}

#[test]
fn test_plus_three_first_breaker_absorbs() {
    let hand: &[CardKind] = &[CardKind::PlusThree, CardKind::BreakThree];
    let mut game = start_stacked(&[hand, hand, hand], red(5), &[blue(9); 6], Scripted::new());
    let a = game.next_player();
    let b = after(&game, a);
    let c = after(&game, b);
    pick(&mut game, CardKind::PlusThree);

    assert!(game.advance_turn().unwrap());

    // b is offered first and accepts; c is never asked.
    let prompts = game.decider().prompts();
    assert_eq!(prompts, &[(b, Prompt::PlayBreaker)]);
    assert_eq!(game.hand(b).unwrap().len(), 1 + 3);
    assert_eq!(game.hand(c).unwrap().len(), 2);
    assert_eq!(game.hand(a).unwrap().len(), 1);
    assert_eq!(game.pile().top().map(|c| c.kind()), Some(CardKind::BreakThree));
    assert_eq!(game.constraint(), Constraint::exact(Color::Red, Sign::Number(5)));
    assert_eq!(count_notices(game.decider(), |n| *n == Notice::BrokePlusThree(b)), 1);
    // The +3 doesn't move the pointer past the breaker.
    assert_eq!(game.next_player(), b);
}

#[test]
fn test_taki_turn_drops_and_closes() {
    let hand: &[CardKind] = &[
        CardKind::Taki(Color::Red),
        red(3),
        red(4),
        CardKind::Stop(Color::Red),
        blue(9),
    ];
    let mut game = start_stacked(&[hand, hand], red(5), &[], Scripted::new());
    let a = game.next_player();
    let b = after(&game, a);
    let pile_before = game.pile().len();
    pick(&mut game, CardKind::Taki(Color::Red));

    assert!(game.advance_turn().unwrap());

    // TAKI, two dropped cards, then the stop closer.
    assert_eq!(game.pile().len(), pile_before + 4);
    assert_eq!(game.pile().top().map(|c| c.kind()), Some(CardKind::Stop(Color::Red)));
    assert_eq!(game.pile().active_index(), Some(game.pile().len() - 1));
    assert_eq!(game.state(), GameState::Skip);
    assert_eq!(game.hand(a).unwrap().len(), 1);
    assert_eq!(game.next_player(), b);
    assert_eq!(card_total(&game), 11);
}

#[test]
fn test_change_color_turn() {
    let hand: &[CardKind] = &[CardKind::ChangeColor, blue(3)];
    let script = [Answer::Color(Color::Yellow)];
    let mut game = start_stacked(&[hand, hand], red(5), &[], Scripted::with_script(script));

    assert!(game.advance_turn().unwrap());

    assert_eq!(game.active_color(), Target::Exact(Color::Yellow));
    assert_eq!(game.active_sign(), Target::Cleared);
    assert_eq!(count_notices(game.decider(), |n| *n == Notice::ColorChanged(Color::Yellow)), 1);
    assert_eq!(
        game.pile().top().map(|c| c.to_string()),
        Some("change color (to Yellow)".to_string())
    );
}

#[test]
fn test_super_taki_takes_active_color() {
    let hand: &[CardKind] = &[CardKind::SuperTaki, red(3), blue(4)];
    let mut game = start_stacked(&[hand, hand], red(5), &[], Scripted::new());
    let a = game.next_player();
    pick(&mut game, CardKind::SuperTaki);

    assert!(game.advance_turn().unwrap());

    // Adopts red; the red 3 closes the sequence.
    assert_eq!(count_notices(game.decider(), |n| *n == Notice::SuperTakiColor(Color::Red)), 1);
    assert_eq!(game.constraint(), Constraint::exact(Color::Red, Sign::Number(3)));
    assert_eq!(game.hand(a).unwrap().len(), 1);
    let super_taki = game.pile().iter().rev().nth(1).copied().unwrap();
    assert_eq!(super_taki.assigned_color(), Some(Color::Red));
}
