//! Round sampling for the guessing game.
//!
//! A round shows up to [`MAX_OPTIONS`] of the player's top artists in random
//! order and secretly picks one of them as the artist the lyric imitates.
//! All randomness goes through [`RandomSource`] so the selection can be
//! replayed in tests.

use std::sync::Mutex;

use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::errors::GameError;

pub const MAX_OPTIONS: usize = 10;
pub const MIN_ARTISTS: usize = 2;

pub trait RandomSource: Send + Sync {
    /// Shuffles `items` in place.
    fn shuffle(&self, items: &mut [String]);

    /// Returns an index in `0..len`. `len` is never zero.
    fn index(&self, len: usize) -> usize;
}

/// Thread-local OS-seeded generator used by the server.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn shuffle(&self, items: &mut [String]) {
        items.shuffle(&mut rand::rng());
    }

    fn index(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Deterministic generator: the same seed replays the same rounds.
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn shuffle(&self, items: &mut [String]) {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        items.shuffle(&mut *rng);
    }

    fn index(&self, len: usize) -> usize {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.random_range(0..len)
    }
}

/// The artist choices of a round, before the lyric exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    pub options: Vec<String>,
    pub correct_artist: String,
}

/// Samples the options of a round from the player's top artists.
///
/// The options are a random subset without replacement of size
/// `min(MAX_OPTIONS, top_artists.len())`; the correct artist is picked among
/// them afterwards.
pub fn draw_round(top_artists: &[String], rng: &dyn RandomSource) -> Result<Draw, GameError> {
    if top_artists.len() < MIN_ARTISTS {
        return Err(GameError::NotEnoughArtists(top_artists.len()));
    }

    let mut pool = top_artists.to_vec();
    rng.shuffle(&mut pool);
    pool.truncate(MAX_OPTIONS.min(top_artists.len()));

    let pick = rng.index(pool.len()) % pool.len();
    let correct_artist = pool[pick].clone();

    Ok(Draw {
        options: pool,
        correct_artist,
    })
}
