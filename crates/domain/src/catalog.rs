use std::sync::LazyLock;

use log::warn;
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::Clip;

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum Course {
    #[default]
    Strength,
    Cardio,
    Zen,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub course: Course,
    /// Seconds at level 0.
    pub base_time: u32,
    /// XP at level 0.
    pub base_reward: u32,
    pub clip: Clip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WarmupStep {
    pub name: &'static str,
    pub duration: u32,
    pub clip: Clip,
}

pub const WARMUP_ROUTINE: &[WarmupStep] = &[
    WarmupStep {
        name: "Head Tilts",
        duration: 10,
        clip: Clip::Idle,
    },
    WarmupStep {
        name: "Arm Circles",
        duration: 15,
        clip: Clip::Wave,
    },
    WarmupStep {
        name: "Torso Twists",
        duration: 15,
        clip: Clip::Dance,
    },
    WarmupStep {
        name: "Light Jog",
        duration: 15,
        clip: Clip::Walking,
    },
];

struct BaseExercise {
    id: &'static str,
    name: &'static str,
    category: &'static str,
    base_time: u32,
    base_reward: u32,
    clip: &'static str,
}

const fn base(
    id: &'static str,
    name: &'static str,
    category: &'static str,
    base_time: u32,
    base_reward: u32,
    clip: &'static str,
) -> BaseExercise {
    BaseExercise {
        id,
        name,
        category,
        base_time,
        base_reward,
        clip,
    }
}

const STRENGTH: &[BaseExercise] = &[
    base("str_u1", "Push Up Blitz (Upper)", "Upper", 30, 100, "Punch"),
    base("str_u2", "Tricep Dips (Arms)", "Upper", 40, 120, "Wave"),
    base("str_u3", "Shoulder Taps (Upper)", "Upper", 45, 130, "Punch"),
    base("str_l1", "Squat Power (Legs)", "Lower", 45, 150, "Jump"),
    base("str_l2", "Lunges (Legs)", "Lower", 60, 140, "Walking"),
    base("str_l3", "Calf Raises (Legs)", "Lower", 40, 100, "Idle"),
    base("str_c1", "Plank Hold (Core)", "Core", 45, 150, "Idle"),
    base("str_c2", "Superman Hold (Back)", "Back", 30, 130, "Running"),
    base("str_c3", "Russian Twists (Core)", "Core", 50, 160, "Dance"),
    base("str_iso1", "Neck Isometrics (Neck)", "Neck", 30, 80, "Idle"),
    base("str_iso2", "Fist Clinchers (Hands)", "Hands", 45, 90, "ThumbsUp"),
];

const CARDIO: &[BaseExercise] = &[
    base("car_1", "HIIT Sprints", "Full", 30, 110, "Running"),
    base("car_2", "Jumping Jacks", "Full", 60, 100, "Jump"),
    base("car_3", "Burpee Burn", "Full", 45, 180, "Dance"),
    base("car_4", "High Knees", "Legs", 40, 120, "Running"),
];

const ZEN: &[BaseExercise] = &[
    base("zen_1", "Box Breathing", "Breath", 60, 80, "Sitting"),
    base("zen_2", "Neck Rotations", "Neck", 45, 90, "Idle"),
    base("zen_3", "Lotus Flow", "Yoga", 90, 140, "Sitting"),
    base("zen_4", "4-7-8 Breathing", "Breath", 120, 150, "Sitting"),
];

static EXERCISES: LazyLock<Vec<Exercise>> = LazyLock::new(|| {
    [
        (Course::Strength, STRENGTH),
        (Course::Cardio, CARDIO),
        (Course::Zen, ZEN),
    ]
    .into_iter()
    .flat_map(|(course, exercises)| {
        exercises.iter().map(move |e| Exercise {
            id: e.id,
            name: e.name,
            category: e.category,
            course,
            base_time: e.base_time,
            base_reward: e.base_reward,
            clip: validated_clip(e),
        })
    })
    .collect()
});

fn validated_clip(exercise: &BaseExercise) -> Clip {
    exercise.clip.parse().unwrap_or_else(|_| {
        warn!(
            "unknown clip \"{}\" for exercise {}, falling back to Idle",
            exercise.clip, exercise.id
        );
        Clip::Idle
    })
}

#[must_use]
pub fn exercise(id: &str) -> Option<&'static Exercise> {
    EXERCISES.iter().find(|e| e.id == id)
}

/// Exercises of a course in catalog order.
pub fn exercises(course: Course) -> impl Iterator<Item = &'static Exercise> {
    EXERCISES.iter().filter(move |e| e.course == course)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_exercise() {
        assert_eq!(
            exercise("str_u1"),
            Some(&Exercise {
                id: "str_u1",
                name: "Push Up Blitz (Upper)",
                category: "Upper",
                course: Course::Strength,
                base_time: 30,
                base_reward: 100,
                clip: Clip::Punch,
            })
        );
        assert_eq!(exercise("zen_4").map(|e| e.course), Some(Course::Zen));
        assert_eq!(exercise("str_x9"), None);
    }

    #[rstest]
    #[case(Course::Strength, 11, "str_u1")]
    #[case(Course::Cardio, 4, "car_1")]
    #[case(Course::Zen, 4, "zen_1")]
    fn test_exercises(#[case] course: Course, #[case] len: usize, #[case] first: &str) {
        let exercises = exercises(course).collect::<Vec<_>>();
        assert_eq!(exercises.len(), len);
        assert_eq!(exercises[0].id, first);
        assert!(exercises.iter().all(|e| e.course == course));
    }

    #[test]
    fn test_exercise_ids_unique() {
        let ids = EXERCISES.iter().map(|e| e.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), EXERCISES.len());
    }

    #[test]
    fn test_exercise_base_values_positive() {
        for course in Course::iter() {
            for e in exercises(course) {
                assert!(e.base_time > 0, "{}", e.id);
                assert!(e.base_reward > 0, "{}", e.id);
            }
        }
    }

    #[test]
    fn test_exercise_clips_known() {
        for e in [STRENGTH, CARDIO, ZEN].into_iter().flatten() {
            assert!(e.clip.parse::<Clip>().is_ok(), "{}", e.id);
        }
    }

    #[test]
    fn test_validated_clip_unknown() {
        assert_eq!(
            validated_clip(&base("x", "X", "Full", 1, 1, "Cartwheel")),
            Clip::Idle
        );
    }

    #[test]
    fn test_warmup_routine() {
        assert_eq!(
            WARMUP_ROUTINE.iter().map(|w| w.name).collect::<Vec<_>>(),
            vec!["Head Tilts", "Arm Circles", "Torso Twists", "Light Jog"]
        );
        assert_eq!(WARMUP_ROUTINE.iter().map(|w| w.duration).sum::<u32>(), 55);
    }

    #[rstest]
    #[case("strength", Ok(Course::Strength))]
    #[case("cardio", Ok(Course::Cardio))]
    #[case("zen", Ok(Course::Zen))]
    #[case("yoga", Err(strum::ParseError::VariantNotFound))]
    fn test_course_from_str(
        #[case] value: &str,
        #[case] expected: Result<Course, strum::ParseError>,
    ) {
        assert_eq!(value.parse::<Course>(), expected);
    }

    #[test]
    fn test_course_display() {
        assert_eq!(Course::Cardio.to_string(), "cardio");
        assert_eq!(Course::Zen.as_ref(), "zen");
    }
}
