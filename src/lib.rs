//! Random billiard-ball picking with no repeats until the rack runs out.
//!
//! [`UniqueSampler`] is the core: a generic pool that yields uniformly
//! random unique picks and refills itself once exhausted. [`GameSession`]
//! drives it the way the ball-picking UI does, over the static [`BALLS`]
//! catalog.

pub use crate::balls::{style, BallStyle, BALLS, BALL_COUNT};
pub use crate::error::SamplerError;
pub use crate::sampler::UniqueSampler;
pub use crate::session::{GameSession, Reveal, SessionConfig};

mod balls;
mod error;
mod sampler;
mod session;
