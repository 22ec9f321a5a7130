use typefall::core::scoring::spawn_column_bound;
use typefall::core::{Dictionary, GameState, MatchOutcome};
use typefall::types::{Control, GameEvent, Phase, PLAYABLE_HEIGHT, START_LIVES};

fn game() -> GameState {
    let dict = Dictionary::from_words(["cat", "dog", "fish", "bird"], 12).unwrap();
    GameState::new(dict, 12345)
}

#[test]
fn test_typing_cat_scores_by_level() {
    let mut game = game();
    let id = game.insert_word("cat", 10, 0).unwrap();

    assert_eq!(
        game.type_letter('c'),
        MatchOutcome::Progress { id, matched: 1 }
    );
    assert_eq!(
        game.type_letter('a'),
        MatchOutcome::Progress { id, matched: 2 }
    );
    assert_eq!(game.current().map(|w| w.matched), Some(2));
    assert_eq!(game.type_letter('t'), MatchOutcome::Hit { id, points: 6 });

    assert_eq!(game.score(), 6);
    assert_eq!(game.words_typed(), 1);
    assert_eq!(game.input(), "");
    assert!(game.words().is_empty());
    assert_eq!(game.effects().len(), 1);
}

#[test]
fn test_word_on_last_row_costs_a_life() {
    let mut game = game();
    let id = game.insert_word("dog", 5, PLAYABLE_HEIGHT - 1).unwrap();

    assert!(game.tick());
    assert!(game.words().iter().all(|w| w.id != id));
    assert_eq!(game.lives(), START_LIVES - 1);
    assert_eq!(game.phase(), Phase::Playing);
}

#[test]
fn test_typo_clears_input_and_keeps_score() {
    let mut game = game();
    game.insert_word("cat", 10, 0).unwrap();
    game.type_letter('c');

    assert_eq!(game.type_letter('x'), MatchOutcome::Miss);
    assert_eq!(game.input(), "");
    assert_eq!(game.current_id(), None);
    assert_eq!(game.score(), 0);
    assert!(game.words().iter().all(|w| w.matched == 0));
}

#[test]
fn test_words_descend_one_row_per_tick() {
    let mut game = game();
    let a = game.insert_word("fish", 0, 0).unwrap();
    let b = game.insert_word("bird", 40, 7).unwrap();

    game.tick();
    game.tick();

    let row = |id| game.words().iter().find(|w| w.id == id).map(|w| w.y);
    assert_eq!(row(a), Some(2));
    assert_eq!(row(b), Some(9));
}

#[test]
fn test_pause_freezes_words() {
    let mut game = game();
    game.insert_word("fish", 3, 4).unwrap();
    assert_eq!(game.handle_event(GameEvent::PauseToggle), Control::Continue);
    assert!(game.paused());

    let before = game.words().to_vec();
    for _ in 0..10 {
        game.handle_event(GameEvent::Tick);
    }
    assert_eq!(game.words(), &before[..]);
    assert_eq!(game.type_letter('f'), MatchOutcome::Ignored);

    game.handle_event(GameEvent::PauseToggle);
    game.tick();
    assert_eq!(game.words()[0].y, 5);
}

#[test]
fn test_losing_all_lives_ends_the_game() {
    let mut game = game();
    for (i, word) in ["cat", "dog", "fish"].into_iter().enumerate() {
        game.insert_word(word, i as u16 * 10, PLAYABLE_HEIGHT - 1).unwrap();
    }

    game.tick();
    assert_eq!(game.lives(), 0);
    assert!(game.game_over());
    let ticks = game.ticks();

    // Nothing moves once the game is over.
    assert!(!game.tick());
    assert_eq!(game.ticks(), ticks);
    assert_eq!(game.type_letter('c'), MatchOutcome::Ignored);
    assert_eq!(game.handle_event(GameEvent::Quit), Control::Quit);
}

#[test]
fn test_level_rises_every_fifteen_words() {
    let mut game = game();
    for n in 1..=30u32 {
        game.insert_word("cat", 0, 0).unwrap();
        for ch in "cat".chars() {
            game.type_letter(ch);
        }
        let expected = 1 + n / 15;
        assert_eq!(game.level(), expected, "after {n} words");
    }
    assert_eq!(game.words_typed(), 30);
}

#[test]
fn test_same_seed_same_game() {
    let mut a = game();
    let mut b = game();
    for _ in 0..50 {
        a.tick();
        b.tick();
    }
    assert_eq!(a.words(), b.words());
    assert_eq!(a.lives(), b.lives());
}

#[test]
fn test_spawned_words_fit_the_playfield() {
    let mut game = game();
    for _ in 0..200 {
        game.tick();
        for w in game.words() {
            assert!(w.fits());
            assert!(w.y < PLAYABLE_HEIGHT);
            if w.y == 0 {
                // Spawned this tick.
                assert!(w.x <= spawn_column_bound(w.len()));
            }
        }
        if game.game_over() {
            break;
        }
    }
}
