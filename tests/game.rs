//! Game integration tests.

use eights::{
    Card, ConfigError, DECK_SIZE, Deck, DrawOutcome, Effect, Game, GameOptions, GameOutcome,
    GameState, INITIAL_HAND_SIZE, MoveError, Rank, SetupError, Suit,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Builds a full deck that deals `draws` first, followed by the remaining
/// cards in generation order.
fn stacked(draws: &[Card]) -> Vec<Card> {
    let mut deck = draws.to_vec();
    deck.extend(Deck::standard().into_iter().filter(|c| !draws.contains(c)));
    deck
}

fn unshuffled(players: u8) -> Game {
    let options = GameOptions::default()
        .with_players(players)
        .with_shuffle(false);
    let mut game = Game::new(options, 0).unwrap();
    game.start().unwrap();
    game
}

#[test]
fn player_count_must_be_two_to_four() {
    assert_eq!(
        Game::new(GameOptions::default().with_players(1), 1).unwrap_err(),
        ConfigError::InvalidPlayerCount(1)
    );
    assert_eq!(
        Game::new(GameOptions::default().with_players(5), 1).unwrap_err(),
        ConfigError::InvalidPlayerCount(5)
    );
}

#[test]
fn initialized_deck_holds_every_card_once() {
    let mut game = Game::new(GameOptions::default().with_players(3), 17).unwrap();
    game.initialize_deck().unwrap();

    let cards: Vec<Card> = game.deck().draw_pile().iter().copied().collect();
    assert_eq!(cards.len(), DECK_SIZE);
    assert!(Deck::is_complete(&cards));
    assert!(game.discard_pile().is_empty());
    assert!(game.hands().iter().all(eights::Hand::is_empty));
}

#[test]
fn setup_deals_five_each_and_seeds_one() {
    for players in 2..=4 {
        let mut game = Game::new(GameOptions::default().with_players(players), 5).unwrap();
        game.start().unwrap();

        assert_eq!(game.state(), GameState::AwaitingMove);
        assert_eq!(game.discard_pile().len(), 1);
        for hand in game.hands() {
            assert_eq!(hand.len(), INITIAL_HAND_SIZE);
        }
        assert_eq!(
            game.cards_remaining(),
            DECK_SIZE - 1 - players as usize * INITIAL_HAND_SIZE
        );
        assert_eq!(game.total_cards(), DECK_SIZE);
        assert_eq!(game.current_player(), 0);
    }
}

#[test]
fn dealing_before_initializing_fails() {
    let mut game = Game::new(GameOptions::default(), 1).unwrap();
    assert_eq!(
        game.deal_initial_hands().unwrap_err(),
        SetupError::DeckNotInitialized
    );
}

#[test]
fn same_seed_same_deal() {
    let mut a = Game::new(GameOptions::default().with_players(4), 99).unwrap();
    let mut b = Game::new(GameOptions::default().with_players(4), 99).unwrap();
    a.start().unwrap();
    b.start().unwrap();

    assert_eq!(a.hands(), b.hands());
    assert_eq!(a.top_card(), b.top_card());
}

#[test]
fn suit_match_play_advances_turn() {
    let mut game = unshuffled(2);
    let before = game.hand(0).unwrap().len();

    // Jack of clubs is on top; the three of clubs matches by suit.
    let outcome = game.play_card(1).unwrap();
    assert_eq!(outcome.card, card(Rank::Three, Suit::Clubs));
    assert_eq!(outcome.effect, None);
    assert_eq!(outcome.winner, None);

    assert_eq!(game.top_card(), Some(card(Rank::Three, Suit::Clubs)));
    assert_eq!(game.hand(0).unwrap().len(), before - 1);
    assert_eq!(game.end_turn(), Ok(1));
    assert_eq!(game.current_player(), 1);
}

#[test]
fn ace_on_top_accepts_any_card() {
    let draws = [
        card(Rank::Two, Suit::Hearts),
        card(Rank::Two, Suit::Diamonds),
        card(Rank::Three, Suit::Hearts),
        card(Rank::Three, Suit::Diamonds),
        card(Rank::Four, Suit::Hearts),
        card(Rank::Four, Suit::Diamonds),
        card(Rank::Five, Suit::Hearts),
        card(Rank::Five, Suit::Diamonds),
        card(Rank::Six, Suit::Hearts),
        card(Rank::Six, Suit::Diamonds),
        card(Rank::Ace, Suit::Spades),
    ];
    let mut game = Game::with_deck(GameOptions::default(), stacked(&draws)).unwrap();
    game.start().unwrap();

    assert_eq!(game.top_card(), Some(card(Rank::Ace, Suit::Spades)));
    assert!(!game.flags().skipped);
    for &held in game.hand(0).unwrap().cards() {
        assert!(game.is_valid_move(held));
        assert_eq!(game.is_valid_move(held), game.is_valid_move(held));
    }
}

#[test]
fn invalid_move_keeps_the_same_player() {
    let draws = [
        card(Rank::Two, Suit::Hearts),
        card(Rank::Two, Suit::Diamonds),
        card(Rank::Three, Suit::Hearts),
        card(Rank::Three, Suit::Diamonds),
        card(Rank::Four, Suit::Hearts),
        card(Rank::Four, Suit::Diamonds),
        card(Rank::Five, Suit::Hearts),
        card(Rank::Five, Suit::Diamonds),
        card(Rank::Six, Suit::Hearts),
        card(Rank::Six, Suit::Diamonds),
        card(Rank::Nine, Suit::Spades),
    ];
    let mut game = Game::with_deck(GameOptions::default(), stacked(&draws)).unwrap();
    game.start().unwrap();

    assert_eq!(game.check_move(0), Err(MoveError::InvalidMove));
    assert_eq!(game.play_card(0), Err(MoveError::InvalidMove));
    assert_eq!(game.play_card(INITIAL_HAND_SIZE), Err(MoveError::IndexOutOfRange));
    assert_eq!(game.current_player(), 0);
    assert_eq!(game.hand(0).unwrap().len(), INITIAL_HAND_SIZE);
    assert_eq!(game.discard_pile(), [card(Rank::Nine, Suit::Spades)]);
}

#[test]
fn emptying_a_hand_wins() {
    // Player 0 holds hearts two to six, player 1 holds spades two to six.
    let draws = [
        card(Rank::Two, Suit::Hearts),
        card(Rank::Two, Suit::Spades),
        card(Rank::Three, Suit::Hearts),
        card(Rank::Three, Suit::Spades),
        card(Rank::Four, Suit::Hearts),
        card(Rank::Four, Suit::Spades),
        card(Rank::Five, Suit::Hearts),
        card(Rank::Five, Suit::Spades),
        card(Rank::Six, Suit::Hearts),
        card(Rank::Six, Suit::Spades),
        card(Rank::Seven, Suit::Hearts),
    ];
    let mut game = Game::with_deck(GameOptions::default(), stacked(&draws)).unwrap();
    game.start().unwrap();

    for turn in 0..4 {
        let outcome = game.play_card(0).unwrap();
        assert_eq!(outcome.winner, None);
        assert_eq!(game.end_turn(), Ok(1));

        // Clubs ace to four never match the hearts on top.
        let drawn = game.draw_card().unwrap();
        assert!(
            matches!(drawn, DrawOutcome::Kept { player: 1, .. }),
            "turn {turn}: {drawn:?}"
        );
        assert_eq!(game.current_player(), 0);
    }

    let outcome = game.play_card(0).unwrap();
    assert_eq!(outcome.card, card(Rank::Six, Suit::Hearts));
    assert_eq!(outcome.winner, Some(0));
    assert_eq!(game.state(), GameState::Won { player: 0 });
    assert_eq!(game.outcome(), Some(GameOutcome::Win { player: 0 }));

    assert!(!game.is_valid_move(card(Rank::Six, Suit::Hearts)));
    assert_eq!(game.play_card(0), Err(MoveError::GameOver));
    assert_eq!(game.draw_card(), Err(MoveError::GameOver));
    assert_eq!(game.end_turn(), Err(MoveError::GameOver));
    assert_eq!(game.total_cards(), DECK_SIZE);
}

#[test]
fn empty_draw_pile_ends_in_a_draw() {
    let mut game = Game::new(GameOptions::default().with_players(4), 3).unwrap();
    game.start().unwrap();

    let mut draws = 0;
    loop {
        match game.draw_card().unwrap() {
            DrawOutcome::Played(play) => {
                assert_eq!(play.winner, None);
                game.end_turn().unwrap();
            }
            DrawOutcome::Kept { .. } => {}
            DrawOutcome::Exhausted => break,
        }
        draws += 1;
        assert_eq!(game.total_cards(), DECK_SIZE);
    }

    assert_eq!(draws, DECK_SIZE - 1 - 4 * INITIAL_HAND_SIZE);
    assert_eq!(game.cards_remaining(), 0);
    assert_eq!(game.state(), GameState::Drawn);
    assert_eq!(game.outcome(), Some(GameOutcome::Draw));

    let held: usize = game.hands().iter().map(eights::Hand::len).sum();
    assert_eq!(game.draw_card(), Err(MoveError::GameOver));
    assert_eq!(
        game.hands().iter().map(eights::Hand::len).sum::<usize>(),
        held
    );
}

#[test]
fn jack_guard_then_drawn_ace_skips() {
    // Player 0 holds queen, jack, two, three, four of clubs; player 1 holds
    // spades. The first card left to draw is the ace of clubs.
    let draws = [
        card(Rank::Queen, Suit::Clubs),
        card(Rank::Two, Suit::Spades),
        card(Rank::Jack, Suit::Clubs),
        card(Rank::Three, Suit::Spades),
        card(Rank::Two, Suit::Clubs),
        card(Rank::Four, Suit::Spades),
        card(Rank::Three, Suit::Clubs),
        card(Rank::Five, Suit::Spades),
        card(Rank::Four, Suit::Clubs),
        card(Rank::Six, Suit::Spades),
        card(Rank::Nine, Suit::Clubs),
    ];
    let mut game = Game::with_deck(GameOptions::default(), stacked(&draws)).unwrap();
    game.start().unwrap();

    let jack = game.play_card(1).unwrap();
    assert_eq!(jack.effect, Some(Effect::DrawFour));
    assert!(game.flags().draw_four);
    assert_eq!(game.end_turn(), Ok(1));

    // Jack on top with its flag set: only rank or suit matches count.
    assert_eq!(game.check_move(0), Err(MoveError::InvalidMove));

    let DrawOutcome::Played(ace) = game.draw_card().unwrap() else {
        panic!("ace of clubs should match the jack of clubs");
    };
    assert_eq!(ace.player, 1);
    assert_eq!(ace.card, card(Rank::Ace, Suit::Clubs));
    assert_eq!(ace.effect, Some(Effect::Skip));
    assert!(!game.flags().draw_four);
    assert!(game.flags().skipped);
    assert_eq!(game.hand(1).unwrap().len(), INITIAL_HAND_SIZE);

    // The skip keeps player 1 on move, once.
    assert_eq!(game.end_turn(), Ok(1));
    assert!(!game.flags().skipped);
    assert!(game.is_valid_move(card(Rank::Two, Suit::Spades)));
    game.play_card(0).unwrap();
    assert_eq!(game.end_turn(), Ok(0));
}
