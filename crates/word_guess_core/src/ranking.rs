//! crates/word_guess_core/src/ranking.rs
//!
//! The running-maximum tournament that turns raw scores into the public view.

use crate::domain::{
    normalize_word, Guess, PublicGame, PublicRound, RankedGuess, Side, WordOfDay,
};

fn percent(distance: f64) -> i32 {
    (distance * 100.0).round() as i32
}

fn ranked(guess: &Guess) -> RankedGuess {
    RankedGuess {
        word: guess.word.clone(),
        distance: percent(guess.distance),
    }
}

/// Folds the guess sequence into the public tournament view.
///
/// The champion starts as the seed guess (scored through the same pipeline
/// as any other guess, but never persisted and never counted against the
/// attempt limit) and is replaced only by a strictly closer guess. Each
/// round reports both sides' percentages as they stood at comparison time,
/// so the player gets relative feedback every round without ever seeing an
/// absolute score.
///
/// A trailing `pending` round for the current champion appears only while
/// the champion is not the secret word and attempts remain.
///
/// Pure function of its inputs; recomputed on every read.
pub fn public_view(
    guesses: &[Guess],
    word_of_day: &WordOfDay,
    seed: &Guess,
    max_attempts: usize,
) -> PublicGame {
    let secret = normalize_word(&word_of_day.word);
    let mut rounds = Vec::with_capacity(guesses.len() + 1);
    let mut champion = seed.clone();

    for guess in guesses {
        let winner = if guess.distance > champion.distance {
            Side::Right
        } else {
            Side::Left
        };
        rounds.push(PublicRound::Complete {
            left: ranked(&champion),
            right: ranked(guess),
            winner,
        });
        if winner == Side::Right {
            champion = guess.clone();
        }
    }

    if normalize_word(&champion.word) != secret && guesses.len() < max_attempts {
        rounds.push(PublicRound::Pending {
            word: champion.word.clone(),
            distance: percent(champion.distance),
        });
    }

    PublicGame {
        rounds,
        won: guesses
            .iter()
            .any(|guess| normalize_word(&guess.word) == secret),
        attempts_left: max_attempts as i32 - guesses.len() as i32,
    }
}
