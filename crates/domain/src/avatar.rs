use std::{collections::HashSet, time::Duration};

use strum::{AsRefStr, EnumIter, EnumString};

pub const CROSSFADE_DURATION: Duration = Duration::from_millis(500);

/// Animation clips of the avatar model.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    AsRefStr,
    EnumIter,
    EnumString,
)]
pub enum Clip {
    #[default]
    Idle,
    Walking,
    Running,
    Dance,
    Jump,
    Punch,
    Wave,
    ThumbsUp,
    Sitting,
}

impl Clip {
    /// Unknown clip names resolve to [`Clip::Idle`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or(Clip::Idle)
    }
}

/// Whether the app shows the dashboard or an active workout.
///
/// Drives both the presenter layout and the avatar framing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Dashboard,
    Workout,
}

impl Mode {
    #[must_use]
    pub fn placement(self) -> Placement {
        match self {
            Mode::Dashboard => Placement {
                camera_z: 5.0,
                model_y: -2.0,
            },
            Mode::Workout => Placement {
                camera_z: 2.5,
                model_y: -1.5,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub camera_z: f32,
    pub model_y: f32,
}

/// Fade out of `from` and fade in of `to`, both running concurrently over `duration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crossfade {
    pub from: Option<Clip>,
    pub to: Clip,
    pub duration: Duration,
}

/// Clip and framing state of the avatar.
///
/// A renderer applies the returned [`Crossfade`] and [`Placement`] values to its scene.
#[derive(Debug, Default)]
pub struct Avatar {
    clips: Option<HashSet<Clip>>,
    active: Option<Clip>,
    mode: Mode,
}

impl Avatar {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_model(&mut self, clips: impl IntoIterator<Item = Clip>) -> Option<Crossfade> {
        self.clips = Some(clips.into_iter().collect());
        self.active = None;
        self.play(Clip::Idle)
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.clips.is_some()
    }

    #[must_use]
    pub fn active(&self) -> Option<Clip> {
        self.active
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns `None` if no model is loaded or `clip` is already playing.
    pub fn play(&mut self, clip: Clip) -> Option<Crossfade> {
        let clips = self.clips.as_ref()?;
        let next = if clips.contains(&clip) {
            clip
        } else {
            Clip::Idle
        };

        if self.active == Some(next) {
            return None;
        }

        let crossfade = Crossfade {
            from: self.active,
            to: next,
            duration: CROSSFADE_DURATION,
        };
        self.active = Some(next);
        Some(crossfade)
    }

    pub fn play_named(&mut self, name: &str) -> Option<Crossfade> {
        self.play(Clip::from_name(name))
    }

    /// Framing changes are ignored while no model is loaded.
    pub fn set_framing(&mut self, mode: Mode) -> Option<Placement> {
        self.clips.as_ref()?;
        self.mode = mode;
        Some(mode.placement())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    use super::*;

    fn loaded_avatar() -> Avatar {
        let mut avatar = Avatar::new();
        avatar.load_model(Clip::iter());
        avatar
    }

    #[rstest]
    #[case("Punch", Clip::Punch)]
    #[case("ThumbsUp", Clip::ThumbsUp)]
    #[case("Sitting", Clip::Sitting)]
    #[case("Backflip", Clip::Idle)]
    #[case("punch", Clip::Idle)]
    #[case("", Clip::Idle)]
    fn test_clip_from_name(#[case] name: &str, #[case] expected: Clip) {
        assert_eq!(Clip::from_name(name), expected);
    }

    #[test]
    fn test_clip_names_round_trip() {
        for clip in Clip::iter() {
            assert_eq!(Clip::from_name(clip.as_ref()), clip);
        }
    }

    #[test]
    fn test_avatar_load_model_plays_idle() {
        let mut avatar = Avatar::new();
        assert_eq!(
            avatar.load_model(Clip::iter()),
            Some(Crossfade {
                from: None,
                to: Clip::Idle,
                duration: CROSSFADE_DURATION,
            })
        );
        assert_eq!(avatar.active(), Some(Clip::Idle));
    }

    #[test]
    fn test_avatar_play_crossfades_from_active_clip() {
        let mut avatar = loaded_avatar();
        assert_eq!(
            avatar.play(Clip::Wave),
            Some(Crossfade {
                from: Some(Clip::Idle),
                to: Clip::Wave,
                duration: Duration::from_millis(500),
            })
        );
        assert_eq!(avatar.active(), Some(Clip::Wave));
    }

    #[test]
    fn test_avatar_play_active_clip_is_noop() {
        let mut avatar = loaded_avatar();
        avatar.play(Clip::Dance);
        assert_eq!(avatar.play(Clip::Dance), None);
        assert_eq!(avatar.active(), Some(Clip::Dance));
    }

    #[test]
    fn test_avatar_play_unknown_name_falls_back_to_idle() {
        let mut avatar = loaded_avatar();
        avatar.play(Clip::Jump);
        assert_eq!(
            avatar.play_named("Backflip"),
            Some(Crossfade {
                from: Some(Clip::Jump),
                to: Clip::Idle,
                duration: CROSSFADE_DURATION,
            })
        );
    }

    #[test]
    fn test_avatar_play_clip_missing_from_model_falls_back_to_idle() {
        let mut avatar = Avatar::new();
        avatar.load_model([Clip::Idle, Clip::Wave]);
        assert_eq!(avatar.play(Clip::Punch), None);
        assert_eq!(avatar.active(), Some(Clip::Idle));
    }

    #[test]
    fn test_avatar_without_model() {
        let mut avatar = Avatar::new();
        assert!(!avatar.is_loaded());
        assert_eq!(avatar.play(Clip::Wave), None);
        assert_eq!(avatar.set_framing(Mode::Workout), None);
        assert_eq!(avatar.mode(), Mode::Dashboard);
        assert_eq!(avatar.active(), None);
    }

    #[rstest]
    #[case(Mode::Workout, 2.5, -1.5)]
    #[case(Mode::Dashboard, 5.0, -2.0)]
    fn test_avatar_set_framing(#[case] mode: Mode, #[case] camera_z: f32, #[case] model_y: f32) {
        let mut avatar = loaded_avatar();
        assert_eq!(
            avatar.set_framing(mode),
            Some(Placement { camera_z, model_y })
        );
        assert_eq!(avatar.mode(), mode);
    }
}
