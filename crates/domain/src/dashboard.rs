use crate::{
    Course, Exercise, Level, catalog,
    scaling::{Scaling, scaled_duration, scaled_reward},
};

/// Number of exercises recommended on the dashboard.
pub const RECOMMENDATIONS: usize = 4;

/// Level-scaled duration and reward of an exercise, as shown before starting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub exercise: &'static Exercise,
    pub duration: u32,
    pub reward: u32,
}

impl Preview {
    #[must_use]
    pub fn new(exercise: &'static Exercise, level: Level, scaling: Scaling) -> Self {
        Self {
            exercise,
            duration: scaled_duration(exercise.base_time, level, scaling),
            reward: scaled_reward(exercise.base_reward, level, scaling),
        }
    }
}

/// Leading exercises of the course, scaled like an active run.
#[must_use]
pub fn recommendations(course: Course, level: Level) -> Vec<Preview> {
    catalog::exercises(course)
        .take(RECOMMENDATIONS)
        .map(|e| Preview::new(e, level, Scaling::Recommendation))
        .collect()
}

#[must_use]
pub fn challenges(course: Course, level: Level) -> Vec<Preview> {
    catalog::exercises(course)
        .map(|e| Preview::new(e, level, Scaling::Challenge))
        .collect()
}
