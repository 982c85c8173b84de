use std::{cell::RefCell, num::NonZeroU32, rc::Rc};

use derive_more::{Display, Into};
use log::{error, info};

use crate::{Course, Name, Profile, ProfileError, ProfileRepository, StorageError, Theme};

pub const XP_PER_LEVEL: u32 = 500;

pub trait ProgressService {
    fn level(&self) -> Level;
    fn add_reward(&self, amount: u32) -> Result<RewardOutcome, StorageError>;
}

impl<T: ProgressService> ProgressService for Rc<T> {
    fn level(&self) -> Level {
        (**self).level()
    }

    fn add_reward(&self, amount: u32) -> Result<RewardOutcome, StorageError> {
        (**self).add_reward(amount)
    }
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(u32);

impl Level {
    pub const ONE: Level = Level(1);

    pub fn new(value: u32) -> Result<Self, LevelError> {
        if value == 0 {
            return Err(LevelError::OutOfRange);
        }

        Ok(Self(value))
    }

    /// XP needed to reach the next level.
    #[must_use]
    pub fn threshold(self) -> u32 {
        self.0.saturating_mul(XP_PER_LEVEL)
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<&str> for Level {
    type Error = LevelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<u32>() {
            Ok(parsed_value) => Level::new(parsed_value),
            Err(_) => Err(LevelError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    #[error("Level must be 1 or greater")]
    OutOfRange,
    #[error("Level must be an integer")]
    ParseError,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UserProgress {
    pub level: Level,
    /// Always below `level.threshold()`.
    pub xp: u32,
    pub steps: u32,
}

impl UserProgress {
    /// Returns whether the reward caused a level-up.
    ///
    /// A level-up resets the XP to zero, any excess XP is dropped.
    pub fn add_reward(&mut self, amount: u32) -> bool {
        self.xp = self.xp.saturating_add(amount);
        if self.xp >= self.level.threshold() {
            self.level = self.level.next();
            self.xp = 0;
            true
        } else {
            false
        }
    }

    /// Fill level of the HUD progress ring in the range 0 to 1.
    #[must_use]
    pub fn ring_fraction(&self) -> f64 {
        f64::from(self.xp) / f64::from(self.level.threshold())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardOutcome {
    pub reward: u32,
    pub level: Level,
    pub xp: u32,
    pub leveled_up: bool,
}

/// Owner of the persisted profile.
///
/// All changes go through this type and are written to the repository immediately.
pub struct ProgressTracker<R> {
    repository: R,
    profile: RefCell<Profile>,
}

impl<R: ProfileRepository> ProgressTracker<R> {
    pub fn load(repository: R) -> Self {
        let profile = repository.read_profile().unwrap_or_else(|err| {
            error!("failed to read profile: {err}");
            Profile::default()
        });
        Self {
            repository,
            profile: RefCell::new(profile),
        }
    }

    #[must_use]
    pub fn profile(&self) -> Profile {
        self.profile.borrow().clone()
    }

    #[must_use]
    pub fn progress(&self) -> UserProgress {
        self.profile.borrow().progress
    }

    pub fn add_steps(&self, steps: u32) -> Result<u32, StorageError> {
        self.update(|profile| {
            profile.progress.steps = profile.progress.steps.saturating_add(steps);
            profile.progress.steps
        })
    }

    /// Logging in without a name registers the default operator name.
    pub fn login(&self, name: &str) -> Result<Name, ProfileError> {
        let name = if name.trim().is_empty() {
            Name::operator()
        } else {
            Name::new(name)?
        };
        info!("logged in as {name}");
        Ok(self.update(|profile| {
            profile.user = Some(name.clone());
            name
        })?)
    }

    pub fn rename(&self, name: &str) -> Result<Name, ProfileError> {
        let name = Name::new(name)?;
        Ok(self.update(|profile| {
            profile.user = Some(name.clone());
            name
        })?)
    }

    pub fn set_goal(&self, goal: NonZeroU32) -> Result<(), StorageError> {
        self.update(|profile| profile.goal = goal)
    }

    pub fn select_course(&self, course: Course) -> Result<(), StorageError> {
        self.update(|profile| profile.course = course)
    }

    pub fn toggle_theme(&self) -> Result<Theme, StorageError> {
        self.update(|profile| {
            profile.theme = profile.theme.toggled();
            profile.theme
        })
    }

    /// The in-memory change is kept even if writing the profile fails.
    fn update<T>(&self, change: impl FnOnce(&mut Profile) -> T) -> Result<T, StorageError> {
        let mut profile = self.profile.borrow_mut();
        let result = change(&mut profile);
        match self.repository.write_profile(&profile) {
            Ok(()) => Ok(result),
            Err(err) => {
                error!("failed to write profile: {err}");
                Err(err)
            }
        }
    }
}

impl<R: ProfileRepository> ProgressService for ProgressTracker<R> {
    fn level(&self) -> Level {
        self.profile.borrow().progress.level
    }

    fn add_reward(&self, amount: u32) -> Result<RewardOutcome, StorageError> {
        let outcome = self.update(|profile| {
            let leveled_up = profile.progress.add_reward(amount);
            RewardOutcome {
                reward: amount,
                level: profile.progress.level,
                xp: profile.progress.xp,
                leveled_up,
            }
        })?;
        if outcome.leveled_up {
            info!("reached level {}", outcome.level);
        }
        Ok(outcome)
    }
}
