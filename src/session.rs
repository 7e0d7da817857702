use std::time::{Duration, Instant};

use rand::prelude::*;
use tracing::debug;

use crate::balls::{self, BallStyle, BALL_COUNT};
use crate::sampler::UniqueSampler;

/// Knobs for a single game session.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    /// How long a revealed ball stays up before it hides itself.
    pub auto_hide: Duration,
    /// Picks allowed before the session asks for a new game.
    pub max_picks: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            auto_hide: Duration::from_secs(5),
            max_picks: BALL_COUNT,
        }
    }
}

/// What a reveal request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    /// A fresh ball was drawn and is now showing.
    Ball(&'static BallStyle),
    /// A ball was already showing; the request hid it instead.
    Hidden,
    /// Every allowed pick has been used; start a new game.
    MaxPlayers,
}

/// One game's worth of state: the ball pool, the picks-so-far counter and
/// the pending auto-hide deadline.
///
/// The session is synchronous; the embedder's event loop passes the current
/// time into [`GameSession::reveal`] and [`GameSession::tick`], which keeps
/// tests deterministic and the session free of timer threads.
pub struct GameSession<R> {
    sampler: UniqueSampler<u8, R>,
    config: SessionConfig,
    picked: usize,
    shown: Option<u8>,
    hide_at: Option<Instant>,
}

impl GameSession<SmallRng> {
    pub fn with_small_rng(config: SessionConfig) -> Self {
        Self::new(config, SmallRng::from_rng(thread_rng()).unwrap())
    }
}

impl<R: Rng> GameSession<R> {
    pub fn new(config: SessionConfig, rng: R) -> Self {
        let numbers = (1..=BALL_COUNT as u8).collect();
        let sampler = UniqueSampler::new(numbers, rng).expect("ball catalog is not empty");
        Self {
            sampler,
            config,
            picked: 0,
            shown: None,
            hide_at: None,
        }
    }

    /// Puts every ball back and clears the pick counter.
    pub fn new_game(&mut self) {
        self.sampler.reset();
        self.picked = 0;
        self.hide();
        debug!("new game started");
    }

    /// Draws the next ball, or hides the current one if it is still showing.
    pub fn reveal(&mut self, now: Instant) -> Reveal {
        if self.shown.is_some() {
            self.hide();
            return Reveal::Hidden;
        }
        if self.picked >= self.config.max_picks {
            return Reveal::MaxPlayers;
        }

        let number = self.sampler.pick();
        self.shown = Some(number);
        self.picked += 1;
        // Cancel-then-rearm: at most one hide deadline is ever pending.
        self.hide_at = Some(now + self.config.auto_hide);
        Reveal::Ball(balls::style(number).expect("sampler draws catalog numbers"))
    }

    /// Hides the current ball. Harmless when nothing is showing.
    pub fn hide(&mut self) {
        self.shown = None;
        self.hide_at = None;
    }

    /// Fires the auto-hide once its deadline has passed. Returns whether
    /// the ball was hidden by this call.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.hide_at {
            Some(deadline) if now >= deadline => {
                self.hide();
                debug!("auto-hide fired");
                true
            }
            _ => false,
        }
    }

    pub fn shown(&self) -> Option<&'static BallStyle> {
        self.shown.and_then(balls::style)
    }

    pub fn picked(&self) -> usize {
        self.picked
    }

    /// Mirrors the new-game control: disabled until something was picked.
    pub fn can_start_new_game(&self) -> bool {
        self.picked > 0
    }

    /// Mirrors the hide control: enabled only while a ball is showing.
    pub fn hide_enabled(&self) -> bool {
        self.shown.is_some()
    }
}
