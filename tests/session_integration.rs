//! Session integration tests
//!
//! Drive the game the way the window does, with clicks at logical pixel
//! positions and fixed-length ticks, using a seeded RNG.

use std::collections::BTreeSet;
use std::time::Duration;

use glam::Vec2;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use hangman::core::config::GameConfig;
use hangman::game::layout::{self, Control};
use hangman::game::{
    GameState, GuessOutcome, LoopAction, Phase, RoundOutcome, Session, Subject,
    MAX_WRONG_GUESSES,
};

const TICK: Duration = Duration::from_millis(16);

fn letter_point(state: &GameState, letter: char) -> Vec2 {
    state.letters().buttons()[(letter as u8 - b'A') as usize].position
}

fn started(subject: Subject, seed: u64) -> (Session, ChaCha8Rng) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut session = Session::new(&GameConfig::default());
    session.click(layout::subject_bounds(subject).center(), &mut rng);
    (session, rng)
}

fn run_for(session: &mut Session, rng: &mut ChaCha8Rng, total: Duration) {
    let mut elapsed = Duration::ZERO;
    while elapsed < total {
        session.tick(TICK, rng);
        elapsed += TICK;
    }
}

#[test]
fn test_full_winning_round_by_clicks() {
    let (mut session, mut rng) = started(Subject::Science, 21);
    let word = session.state().unwrap().word();
    let letters: BTreeSet<char> = word.chars().collect();

    for letter in &letters {
        let point = letter_point(session.state().unwrap(), *letter);
        assert_eq!(session.click(point, &mut rng), LoopAction::Continue);
        session.tick(TICK, &mut rng);
    }

    assert!(matches!(session.phase(), Phase::Announcing { .. }));
    let state = session.state().unwrap();
    assert_eq!(state.outcome(), RoundOutcome::Won);
    assert_eq!(state.wrong_guesses(), 0);

    // Pause, then banner, then a fresh round in the same subject
    run_for(&mut session, &mut rng, Duration::from_millis(1100));
    assert_eq!(session.visible_banner().unwrap().message, "You WON!");

    run_for(&mut session, &mut rng, Duration::from_millis(3000));
    let state = session.state().unwrap();
    assert!(matches!(session.phase(), Phase::Playing(_)));
    assert_eq!(state.subject(), Subject::Science);
    assert!(state.guessed().is_empty());
    assert_eq!(state.letters().visible().count(), 26);
}

#[test]
fn test_full_losing_round_by_clicks() {
    let (mut session, mut rng) = started(Subject::Geography, 4);
    let word = session.state().unwrap().word();
    let misses: Vec<char> = ('A'..='Z').filter(|c| !word.contains(*c)).take(6).collect();

    for (i, letter) in misses.iter().enumerate() {
        let point = letter_point(session.state().unwrap(), *letter);
        session.click(point, &mut rng);
        assert_eq!(session.state().unwrap().wrong_guesses() as usize, i + 1);
        session.tick(TICK, &mut rng);
    }

    run_for(&mut session, &mut rng, Duration::from_millis(1100));
    let banner = session.visible_banner().unwrap();
    assert_eq!(banner.outcome, RoundOutcome::Lost);
    assert_eq!(banner.message, format!("You LOST! Word: {word}"));
}

#[test]
fn test_hidden_letter_click_is_noop() {
    let (mut session, mut rng) = started(Subject::English, 8);
    let word = session.state().unwrap().word();
    let miss = ('A'..='Z').find(|c| !word.contains(*c)).unwrap();
    let point = letter_point(session.state().unwrap(), miss);

    session.click(point, &mut rng);
    session.click(point, &mut rng);

    let state = session.state().unwrap();
    assert_eq!(state.wrong_guesses(), 1);
    assert_eq!(state.guessed().len(), 1);
}

#[test]
fn test_subject_choice_is_final() {
    let (mut session, mut rng) = started(Subject::English, 2);
    session.select_subject(Subject::Science, &mut rng);
    assert_eq!(session.state().unwrap().subject(), Subject::English);
}

#[test]
fn test_quit_from_board() {
    let (mut session, mut rng) = started(Subject::Science, 1);
    let action = session.click(Control::Quit.bounds().center(), &mut rng);
    assert_eq!(action, LoopAction::Quit);
}

#[test]
fn test_custom_announcement_timing() {
    let config = GameConfig::from_toml_str("result_pause_ms = 0\nresult_display_ms = 100\n").unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(6);
    let mut session = Session::new(&config);
    session.select_subject(Subject::Science, &mut rng);

    let word = session.state().unwrap().word();
    for letter in word.chars() {
        let point = letter_point(session.state().unwrap(), letter);
        session.click(point, &mut rng);
    }
    session.tick(TICK, &mut rng);
    // No pause configured, so the banner shows immediately
    assert!(session.visible_banner().is_some());

    run_for(&mut session, &mut rng, Duration::from_millis(100));
    assert!(matches!(session.phase(), Phase::Playing(_)));
}

fn subject_strategy() -> impl Strategy<Value = Subject> {
    prop::sample::select(Subject::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_guesses_follow_the_rules(
        subject in subject_strategy(),
        seed in any::<u64>(),
        guesses in prop::collection::vec(prop::char::range('A', 'Z'), 0..40),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut state = GameState::new(subject, &mut rng);
        let word = state.word();
        prop_assert!(subject.words().contains(&word));

        let mut seen = BTreeSet::new();
        for letter in guesses {
            let before = state.wrong_guesses();
            let finished = state.outcome() != RoundOutcome::InProgress;
            let outcome = state.guess(letter);

            if finished || seen.contains(&letter) {
                prop_assert_eq!(outcome, GuessOutcome::Ignored);
                prop_assert_eq!(state.wrong_guesses(), before);
                continue;
            }
            seen.insert(letter);

            if word.contains(letter) {
                prop_assert_eq!(outcome, GuessOutcome::Hit);
                prop_assert_eq!(state.wrong_guesses(), before);
            } else {
                prop_assert_eq!(outcome, GuessOutcome::Miss);
                prop_assert_eq!(state.wrong_guesses(), before + 1);
            }
        }

        prop_assert_eq!(state.guessed(), &seen);
        prop_assert!(state.wrong_guesses() <= MAX_WRONG_GUESSES);
        for letter in 'A'..='Z' {
            prop_assert_eq!(state.letters().is_visible(letter), !seen.contains(&letter));
        }

        let all_guessed = word.chars().all(|c| seen.contains(&c));
        let expected = if all_guessed {
            RoundOutcome::Won
        } else if state.wrong_guesses() == MAX_WRONG_GUESSES {
            RoundOutcome::Lost
        } else {
            RoundOutcome::InProgress
        };
        prop_assert_eq!(state.outcome(), expected);
    }

    #[test]
    fn prop_random_clicks_keep_invariants(
        subject in subject_strategy(),
        seed in any::<u64>(),
        clicks in prop::collection::vec((0.0f32..800.0, 0.0f32..500.0), 0..60),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut session = Session::new(&GameConfig::default());
        session.select_subject(subject, &mut rng);

        for (x, y) in clicks {
            session.click(Vec2::new(x, y), &mut rng);
            session.tick(TICK, &mut rng);

            let state = session.state().unwrap();
            prop_assert_eq!(state.subject(), subject);
            prop_assert!(subject.words().contains(&state.word()));
            prop_assert!(state.wrong_guesses() <= MAX_WRONG_GUESSES);
            prop_assert!(state.guessed().iter().all(|c| c.is_ascii_uppercase()));
            prop_assert_eq!(
                state.letters().visible().count() + state.guessed().len(),
                26
            );
        }
    }
}
