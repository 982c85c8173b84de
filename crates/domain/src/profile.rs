use std::{num::NonZeroU32, rc::Rc};

use log::warn;
use strum::{AsRefStr, Display, EnumString};

use crate::{Course, Level, Name, NameError, StorageError, UserProgress};

pub const KEY_NAME: &str = "aura_user";
pub const KEY_COURSE: &str = "aura_course";
pub const KEY_LEVEL: &str = "aura_lvl";
pub const KEY_XP: &str = "aura_xp";
pub const KEY_STEPS: &str = "aura_steps";
pub const KEY_GOAL: &str = "aura_goal";
pub const KEY_THEME: &str = "aura_theme";

pub const DEFAULT_GOAL: NonZeroU32 = NonZeroU32::new(6000).unwrap();

pub trait ProfileRepository {
    fn read_profile(&self) -> Result<Profile, StorageError>;
    fn write_profile(&self, profile: &Profile) -> Result<(), StorageError>;
}

impl<T: ProfileRepository> ProfileRepository for Rc<T> {
    fn read_profile(&self) -> Result<Profile, StorageError> {
        (**self).read_profile()
    }

    fn write_profile(&self, profile: &Profile) -> Result<(), StorageError> {
        (**self).write_profile(profile)
    }
}

/// Persisted application state.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    /// `None` until someone has logged in.
    pub user: Option<Name>,
    pub course: Course,
    pub progress: UserProgress,
    /// Daily step goal.
    pub goal: NonZeroU32,
    pub theme: Theme,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            user: None,
            course: Course::default(),
            progress: UserProgress::default(),
            goal: DEFAULT_GOAL,
            theme: Theme::default(),
        }
    }
}

impl Profile {
    #[must_use]
    pub fn is_registered(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub fn display_name(&self) -> Name {
        self.user.clone().unwrap_or_else(Name::guest)
    }

    /// Decodes the string-valued storage fields.
    ///
    /// Missing or corrupt fields fall back to their defaults.
    pub fn from_entries(entry: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();
        let level = parse(&entry, KEY_LEVEL, |v| Level::try_from(v).ok()).unwrap_or_default();
        let xp = parse(&entry, KEY_XP, |v| v.parse::<u32>().ok()).unwrap_or_default();
        let xp = if xp < level.threshold() {
            xp
        } else {
            warn!("discarding stored xp {xp} at or above threshold of level {level}");
            0
        };

        Self {
            user: parse(&entry, KEY_NAME, |v| match Name::new(v) {
                Ok(name) => Some(name),
                Err(NameError::TooLong(len)) => {
                    warn!("truncating stored name of {len} characters");
                    Name::truncated(v).ok()
                }
                Err(NameError::Empty) => None,
            }),
            course: parse(&entry, KEY_COURSE, |v| v.parse().ok()).unwrap_or(default.course),
            progress: UserProgress {
                level,
                xp,
                steps: parse(&entry, KEY_STEPS, |v| v.parse().ok()).unwrap_or_default(),
            },
            goal: parse(&entry, KEY_GOAL, |v| v.parse().ok()).unwrap_or(default.goal),
            theme: parse(&entry, KEY_THEME, |v| v.parse().ok()).unwrap_or(default.theme),
        }
    }

    #[must_use]
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = vec![
            (KEY_COURSE, self.course.to_string()),
            (KEY_LEVEL, self.progress.level.to_string()),
            (KEY_XP, self.progress.xp.to_string()),
            (KEY_STEPS, self.progress.steps.to_string()),
            (KEY_GOAL, self.goal.to_string()),
            (KEY_THEME, self.theme.to_string()),
        ];
        if let Some(user) = &self.user {
            entries.insert(0, (KEY_NAME, user.to_string()));
        }
        entries
    }
}

fn parse<T>(
    entry: &impl Fn(&str) -> Option<String>,
    key: &str,
    decode: impl Fn(&str) -> Option<T>,
) -> Option<T> {
    let value = entry(key)?;
    let decoded = decode(value.trim());
    if decoded.is_none() {
        warn!("ignoring corrupt value \"{value}\" of {key}");
    }
    decoded
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}
