//! Game integration tests.

use bjsolo::{
    Action, ActionError, Card, DECK_SIZE, DealError, DealerStep, Deck, Game, GameOptions,
    GameState, Outcome, Phase, Rank, Suit, Tone,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn game_from_draws(options: GameOptions, draws: &[Card]) -> Game {
    Game::from_deck(options, 1, Deck::from_cards(draws.to_vec())).unwrap()
}

const fn rejected(action: Action, phase: Phase) -> ActionError {
    ActionError::InvalidAction { action, phase }
}

#[test]
fn opening_deal_alternates_player_and_dealer() {
    let game = game_from_draws(
        GameOptions::default(),
        &[
            card(Suit::Hearts, Rank::Eight),   // player
            card(Suit::Clubs, Rank::Six),      // dealer
            card(Suit::Diamonds, Rank::Seven), // player
            card(Suit::Spades, Rank::Ten),     // dealer
            card(Suit::Hearts, Rank::Four),
        ],
    );

    let state = game.state();
    assert_eq!(
        state.player().cards(),
        [
            card(Suit::Hearts, Rank::Eight),
            card(Suit::Diamonds, Rank::Seven)
        ]
    );
    assert_eq!(
        state.dealer().cards(),
        [card(Suit::Clubs, Rank::Six), card(Suit::Spades, Rank::Ten)]
    );
    assert_eq!(state.cards_remaining(), 1);
    assert_eq!(state.phase(), Phase::PlayerTurn);
    assert_eq!(state.outcome(), None);
}

#[test]
fn short_deck_cannot_be_dealt() {
    let result = Game::from_deck(
        GameOptions::default(),
        1,
        Deck::from_cards(vec![
            card(Suit::Hearts, Rank::Nine),
            card(Suit::Clubs, Rank::Five),
            card(Suit::Diamonds, Rank::Seven),
        ]),
    );
    assert_eq!(
        result.err(),
        Some(DealError::NotEnoughCards { remaining: 3 })
    );
}

#[test]
fn basic_round_flow() {
    let game = game_from_draws(
        GameOptions::default(),
        &[
            card(Suit::Hearts, Rank::Eight),   // player
            card(Suit::Clubs, Rank::Six),      // dealer
            card(Suit::Diamonds, Rank::Seven), // player
            card(Suit::Spades, Rank::Ten),     // dealer
            card(Suit::Hearts, Rank::Four),    // player hit
            card(Suit::Clubs, Rank::Five),     // dealer draw
            card(Suit::Clubs, Rank::King),
        ],
    );

    let hit_card = game.hit().unwrap();
    assert_eq!(hit_card.rank, Rank::Four);
    assert_eq!(game.player_score(), 19);

    let drawn = game.stand().unwrap();
    assert_eq!(drawn, [card(Suit::Clubs, Rank::Five)]);
    assert_eq!(game.phase(), Phase::Resolved);
    assert_eq!(game.dealer_score(), 21);
    assert_eq!(game.outcome(), Some(Outcome::DealerWin));
    assert_eq!(game.cards_remaining(), 1);
}

#[test]
fn player_twenty_beats_dealer_nineteen() {
    let game = game_from_draws(
        GameOptions::default(),
        &[
            card(Suit::Hearts, Rank::King),
            card(Suit::Clubs, Rank::Nine),
            card(Suit::Diamonds, Rank::Queen),
            card(Suit::Spades, Rank::Jack),
        ],
    );

    assert!(game.stand().unwrap().is_empty());
    assert_eq!(game.player_score(), 20);
    assert_eq!(game.dealer_score(), 19);
    assert_eq!(game.outcome(), Some(Outcome::PlayerWin));
    assert_eq!(game.view().message(), Some("You Win!"));
}

#[test]
fn equal_eighteens_draw() {
    let game = game_from_draws(
        GameOptions::default(),
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Clubs, Rank::Nine),
            card(Suit::Diamonds, Rank::Eight),
            card(Suit::Spades, Rank::Nine),
        ],
    );

    game.stand().unwrap();
    assert_eq!(game.outcome(), Some(Outcome::Draw));
    assert_eq!(Outcome::Draw.tone(), Tone::Neutral);
}

#[test]
fn dealer_bust_pays_player() {
    let game = game_from_draws(
        GameOptions::default(),
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Two),
            card(Suit::Spades, Rank::Six),
            card(Suit::Hearts, Rank::Nine),
        ],
    );

    game.stand().unwrap();
    assert_eq!(game.dealer_score(), 25);
    assert_eq!(game.outcome(), Some(Outcome::DealerBust));
    assert!(Outcome::DealerBust.player_won());
}

#[test]
fn player_bust_ends_round_and_locks_hands() {
    let game = game_from_draws(
        GameOptions::default(),
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Clubs, Rank::Seven),
            card(Suit::Diamonds, Rank::Five),
            card(Suit::Spades, Rank::Ten),
            card(Suit::Hearts, Rank::Eight),
            card(Suit::Clubs, Rank::Two),
        ],
    );

    game.hit().unwrap();
    assert_eq!(game.player_score(), 23);
    assert_eq!(game.outcome(), Some(Outcome::PlayerBust));

    let before = game.state();
    assert_eq!(game.hit(), Err(rejected(Action::Hit, Phase::Resolved)));
    assert_eq!(game.stand(), Err(rejected(Action::Stand, Phase::Resolved)));
    assert_eq!(game.state(), before);
}

#[test]
fn hit_with_empty_deck_returns_error() {
    let game = game_from_draws(
        GameOptions::default(),
        &[
            card(Suit::Hearts, Rank::Five),
            card(Suit::Clubs, Rank::Nine),
            card(Suit::Spades, Rank::Six),
            card(Suit::Diamonds, Rank::Seven),
        ],
    );

    let before = game.state();
    assert_eq!(game.hit(), Err(ActionError::DeckExhausted));
    assert_eq!(game.state(), before);
    assert_eq!(game.phase(), Phase::PlayerTurn);
}

#[test]
fn dealer_turn_rejects_other_actions() {
    let game = game_from_draws(
        GameOptions::default(),
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Clubs, Rank::Two),
            card(Suit::Diamonds, Rank::Nine),
            card(Suit::Spades, Rank::Three),
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Clubs, Rank::Four),
        ],
    );

    game.begin_stand().unwrap();
    assert_eq!(game.phase(), Phase::DealerTurn);

    let before = game.state();
    assert_eq!(game.hit(), Err(rejected(Action::Hit, Phase::DealerTurn)));
    assert_eq!(game.stand(), Err(rejected(Action::Stand, Phase::DealerTurn)));
    assert_eq!(
        game.begin_stand(),
        Err(rejected(Action::Stand, Phase::DealerTurn))
    );
    assert_eq!(
        game.restart(),
        Err(rejected(Action::Restart, Phase::DealerTurn))
    );
    assert_eq!(game.state(), before);
    assert_eq!(game.rounds_started(), 1);

    // Dealer 2+3, draws A (soft 16) then 4 (hard 20).
    assert_eq!(
        game.dealer_step(),
        Ok(DealerStep::Drew(card(Suit::Hearts, Rank::Ace)))
    );
    assert_eq!(
        game.dealer_step(),
        Ok(DealerStep::Drew(card(Suit::Clubs, Rank::Four)))
    );
    assert_eq!(
        game.dealer_step(),
        Ok(DealerStep::Resolved(Outcome::DealerWin))
    );
    assert_eq!(
        game.dealer_step(),
        Err(rejected(Action::DealerStep, Phase::Resolved))
    );
    assert_eq!(game.dealer_score(), 20);
}

#[test]
fn restart_deals_full_fresh_round() {
    let game = Game::new(GameOptions::default(), 42);
    game.stand().unwrap();
    assert_eq!(game.phase(), Phase::Resolved);

    game.restart().unwrap();
    assert_eq!(game.rounds_started(), 2);
    assert_eq!(game.phase(), Phase::PlayerTurn);
    assert_eq!(game.outcome(), None);
    assert_eq!(game.cards_remaining(), DECK_SIZE - 4);

    // Restarting mid-turn is allowed too.
    game.restart().unwrap();
    assert_eq!(game.rounds_started(), 3);
}

#[test]
fn restart_applies_updated_options() {
    let mut game = Game::new(GameOptions::default(), 7);
    assert!(!game.view().hole_card_hidden);

    game.options = GameOptions::default().with_hide_hole_card(true);
    game.restart().unwrap();
    assert!(game.state().options().hide_hole_card);
    assert!(game.view().hole_card_hidden);
    assert_eq!(game.view().dealer_cards.len(), 1);
}

#[test]
fn same_seed_replays_same_game() {
    let a = Game::new(GameOptions::default(), 9);
    let b = Game::new(GameOptions::default(), 9);
    assert_eq!(a.state(), b.state());

    a.restart().unwrap();
    b.restart().unwrap();
    assert_eq!(a.state(), b.state());
}

#[test]
fn cards_are_conserved_across_hits() {
    let game = Game::new(GameOptions::default(), 5);
    let total = |state: &GameState| {
        state.cards_remaining() + state.player().len() + state.dealer().len()
    };

    assert_eq!(total(&game.state()), DECK_SIZE);
    while game.hit().is_ok() {
        assert_eq!(total(&game.state()), DECK_SIZE);
    }
    assert_eq!(game.phase(), Phase::Resolved);
    assert_eq!(total(&game.state()), DECK_SIZE);
}

#[test]
fn hidden_hole_card_in_view() {
    let game = game_from_draws(
        GameOptions::default().with_hide_hole_card(true),
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Clubs, Rank::Ace),
            card(Suit::Diamonds, Rank::Nine),
            card(Suit::Spades, Rank::King),
        ],
    );

    let view = game.view();
    assert!(view.hole_card_hidden);
    assert_eq!(view.dealer_cards, [card(Suit::Clubs, Rank::Ace)]);
    assert_eq!(view.dealer_score, 11);
    assert_eq!(game.dealer_score(), 21);

    game.stand().unwrap();
    let view = game.view();
    assert!(!view.hole_card_hidden);
    assert_eq!(view.dealer_cards.len(), 2);
    assert_eq!(view.outcome, Some(Outcome::DealerWin));
    assert_eq!(view.message(), Some("You Lose..."));
}

#[test]
fn pure_transitions_do_not_touch_input() {
    let state = GameState::from_deck(
        GameOptions::default(),
        Deck::from_cards(vec![
            card(Suit::Hearts, Rank::Two),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Three),
            card(Suit::Spades, Rank::Seven),
            card(Suit::Hearts, Rank::Ten),
        ]),
    )
    .unwrap();
    let snapshot = state.clone();

    let hit = state.hit().unwrap();
    let stood = state.stand().unwrap();
    assert_eq!(state, snapshot);
    assert_eq!(hit.player_score(), 15);
    assert_eq!(stood.outcome(), Some(Outcome::DealerWin));
    assert_eq!(stood.cards_remaining(), 1);
}
