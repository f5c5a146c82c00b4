//! Shared helpers for integration tests.

#![allow(dead_code)]

use taki_engine::{
    CardKind, Color, Decider, Deck, Game, GameBuilder, Notice, PlayerId, Scripted,
};

pub fn red(value: u8) -> CardKind {
    CardKind::Number { color: Color::Red, value }
}

pub fn blue(value: u8) -> CardKind {
    CardKind::Number { color: Color::Blue, value }
}

pub fn green(value: u8) -> CardKind {
    CardKind::Number { color: Color::Green, value }
}

/// A deck that deals `hands` (one card per player per round, seat order),
/// then reveals `starter`, then yields `rest` in order.
///
/// Every hand must have the same length.
pub fn stacked(hands: &[&[CardKind]], starter: CardKind, rest: &[CardKind]) -> Deck {
    let rounds = hands.first().map_or(0, |h| h.len());
    assert!(hands.iter().all(|h| h.len() == rounds), "uneven hands");

    let mut draws = Vec::new();
    for round in 0..rounds {
        for hand in hands {
            draws.push(hand[round]);
        }
    }
    draws.push(starter);
    draws.extend_from_slice(rest);

    // Top of the deck is the last card.
    draws.reverse();
    Deck::from_kinds(draws)
}

/// Start a game on a stacked deck with one player per hand.
pub fn start_stacked(hands: &[&[CardKind]], starter: CardKind, rest: &[CardKind], decider: Scripted) -> Game<Scripted> {
    let rounds = hands.first().map_or(0, |h| h.len());
    GameBuilder::new()
        .players(hands.len())
        .cards_per_player(rounds)
        .deck(stacked(hands, starter, rest))
        .start(decider)
        .unwrap()
}

/// Player after `player` in the game's current direction.
pub fn after<D: Decider>(game: &Game<D>, player: PlayerId) -> PlayerId {
    game.players_in_order(player).nth(1).unwrap()
}

/// Count notices matching a predicate.
pub fn count_notices(decider: &Scripted, pred: impl Fn(&Notice) -> bool) -> usize {
    decider.notices().iter().filter(|(n, _)| pred(n)).count()
}

/// Total cards across deck, pile and hands.
pub fn card_total<D: Decider>(game: &Game<D>) -> usize {
    let hands: usize = PlayerId::all(game.player_count())
        .filter_map(|p| game.hand(p))
        .map(|h| h.len())
        .sum();
    game.deck().len() + game.pile().len() + hands
}
