#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod assistant;
pub mod avatar;
pub mod catalog;
pub mod countdown;
pub mod dashboard;
pub mod error;
pub mod name;
pub mod profile;
pub mod progress;
pub mod scaling;
pub mod sequence;
pub mod sequencer;

use std::time::Duration;

pub use assistant::{Assistant, LanguageModel, Offline};
pub use avatar::{Avatar, Clip, Crossfade, Mode, Placement};
pub use catalog::{Course, Exercise, WARMUP_ROUTINE, WarmupStep};
pub use countdown::{Countdown, Tick};
pub use dashboard::Preview;
pub use error::{
    AssistantUnavailable, ProfileError, ResourceUnavailable, SequencerError, StorageError,
};
pub use name::{Name, NameError};
pub use profile::{Profile, ProfileRepository, Theme};
pub use progress::{
    Level, LevelError, ProgressService, ProgressTracker, RewardOutcome, UserProgress,
};
pub use scaling::Scaling;
pub use sequence::{Phase, PhaseKind, Sequence};
pub use sequencer::{Outcome, Sequencer, State};

pub trait Animator {
    /// Unknown or missing clips fall back to [`Clip::Idle`], replaying the active clip
    /// does nothing.
    fn play(&self, clip: Clip);
    /// Ignored while no avatar model is loaded.
    fn set_framing(&self, mode: Mode);
}

pub trait Presenter {
    fn show_mode(&self, mode: Mode);
    fn show_phase(&self, phase: &Phase);
    fn show_countdown(&self, tick: &Tick);
    fn show_completion(&self, reward: u32);
    fn show_level_up(&self, level: Level);
}

pub trait Speech {
    fn speak(&self, phrase: &str) -> Result<(), ResourceUnavailable>;
}

#[allow(async_fn_in_trait)]
pub trait Camera {
    async fn acquire_camera(&self) -> Result<(), ResourceUnavailable>;
    fn release_camera(&self);
}

#[allow(async_fn_in_trait)]
pub trait Clock {
    /// Suspends the caller. Dropping the future cancels the timer.
    async fn sleep(&self, duration: Duration);
}
