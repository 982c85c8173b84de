use crate::{
    Clip, Exercise, Level, WARMUP_ROUTINE,
    scaling::{Scaling, scaled_duration, scaled_reward},
};

pub const COOLDOWN_NAME: &str = "Deep Breathing Reset";
pub const COOLDOWN_DURATION: u32 = 20;
pub const COOLDOWN_CLIP: Clip = Clip::Sitting;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseKind {
    Warmup,
    Main,
    Cooldown,
}

impl PhaseKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PhaseKind::Warmup => "WARMUP",
            PhaseKind::Main => "WORKOUT",
            PhaseKind::Cooldown => "COOLDOWN",
        }
    }

    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            PhaseKind::Warmup => "#fbbf24",
            PhaseKind::Main => "#10b981",
            PhaseKind::Cooldown => "#60a5fa",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phase {
    pub kind: PhaseKind,
    pub name: &'static str,
    /// Seconds, always positive.
    pub duration: u32,
    pub clip: Clip,
    /// Only set for the main phase.
    pub reward: Option<u32>,
}

/// Ordered phases of one workout run: the warm-up routine, one main phase and one
/// cooldown phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    phases: Vec<Phase>,
    cursor: usize,
}

impl Sequence {
    /// Scales the main phase for `level`. The reward is fixed at this point, later level
    /// changes do not affect it.
    #[must_use]
    pub fn new(exercise: &Exercise, level: Level) -> Self {
        let warmup = WARMUP_ROUTINE.iter().map(|step| Phase {
            kind: PhaseKind::Warmup,
            name: step.name,
            duration: step.duration,
            clip: step.clip,
            reward: None,
        });
        let main = Phase {
            kind: PhaseKind::Main,
            name: exercise.name,
            duration: scaled_duration(exercise.base_time, level, Scaling::Run),
            clip: exercise.clip,
            reward: Some(scaled_reward(exercise.base_reward, level, Scaling::Run)),
        };
        let cooldown = Phase {
            kind: PhaseKind::Cooldown,
            name: COOLDOWN_NAME,
            duration: COOLDOWN_DURATION,
            clip: COOLDOWN_CLIP,
            reward: None,
        };

        Self {
            phases: warmup.chain([main, cooldown]).collect(),
            cursor: 0,
        }
    }

    #[must_use]
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.phases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    /// Index of the next phase to run.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// `None` once all phases have run.
    #[must_use]
    pub fn current(&self) -> Option<&Phase> {
        self.phases.get(self.cursor)
    }

    pub fn advance(&mut self) {
        if self.cursor < self.phases.len() {
            self.cursor += 1;
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.phases.len()
    }

    #[must_use]
    pub fn main(&self) -> Option<&Phase> {
        self.phases.iter().find(|p| p.kind == PhaseKind::Main)
    }

    /// Reward of the main phase.
    #[must_use]
    pub fn reward(&self) -> u32 {
        self.main().and_then(|p| p.reward).unwrap_or_default()
    }

    /// Seconds of all phases, excluding the pauses between them.
    #[must_use]
    pub fn duration(&self) -> u32 {
        self.phases.iter().map(|p| p.duration).sum()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::catalog;

    fn sequence(id: &str, level: u32) -> Sequence {
        Sequence::new(
            catalog::exercise(id).unwrap(),
            Level::new(level).unwrap(),
        )
    }

    #[test]
    fn test_sequence_new() {
        let sequence = sequence("str_u1", 1);
        assert_eq!(
            sequence
                .phases()
                .iter()
                .map(|p| (p.kind, p.name, p.duration, p.clip, p.reward))
                .collect::<Vec<_>>(),
            vec![
                (PhaseKind::Warmup, "Head Tilts", 10, Clip::Idle, None),
                (PhaseKind::Warmup, "Arm Circles", 15, Clip::Wave, None),
                (PhaseKind::Warmup, "Torso Twists", 15, Clip::Dance, None),
                (PhaseKind::Warmup, "Light Jog", 15, Clip::Walking, None),
                (
                    PhaseKind::Main,
                    "Push Up Blitz (Upper)",
                    33,
                    Clip::Punch,
                    Some(105)
                ),
                (
                    PhaseKind::Cooldown,
                    "Deep Breathing Reset",
                    20,
                    Clip::Sitting,
                    None
                ),
            ]
        );
        assert_eq!(sequence.reward(), 105);
        assert_eq!(sequence.duration(), 108);
    }

    #[rstest]
    #[case("str_u1", 1)]
    #[case("str_iso2", 4)]
    #[case("car_3", 2)]
    #[case("zen_4", 9)]
    fn test_sequence_structure(#[case] id: &str, #[case] level: u32) {
        let sequence = sequence(id, level);
        let exercise = catalog::exercise(id).unwrap();
        let level = Level::new(level).unwrap();
        let count = |kind: PhaseKind| sequence.phases().iter().filter(|p| p.kind == kind).count();

        assert_eq!(sequence.len(), WARMUP_ROUTINE.len() + 2);
        assert_eq!(count(PhaseKind::Warmup), WARMUP_ROUTINE.len());
        assert_eq!(count(PhaseKind::Main), 1);
        assert_eq!(count(PhaseKind::Cooldown), 1);
        assert_eq!(
            sequence.phases().last().map(|p| p.kind),
            Some(PhaseKind::Cooldown)
        );
        assert_eq!(
            sequence.reward(),
            scaled_reward(exercise.base_reward, level, Scaling::Run)
        );
        assert!(sequence.phases().iter().all(|p| p.duration > 0));
    }

    #[test]
    fn test_sequence_cursor() {
        let mut sequence = sequence("car_1", 1);
        assert_eq!(sequence.cursor(), 0);
        assert_eq!(sequence.current().map(|p| p.name), Some("Head Tilts"));
        for _ in 0..5 {
            sequence.advance();
        }
        assert_eq!(sequence.current().map(|p| p.kind), Some(PhaseKind::Cooldown));
        assert!(!sequence.is_finished());
        sequence.advance();
        assert!(sequence.is_finished());
        assert_eq!(sequence.current(), None);
        sequence.advance();
        assert_eq!(sequence.cursor(), 6);
    }

    #[rstest]
    #[case(PhaseKind::Warmup, "WARMUP", "#fbbf24")]
    #[case(PhaseKind::Main, "WORKOUT", "#10b981")]
    #[case(PhaseKind::Cooldown, "COOLDOWN", "#60a5fa")]
    fn test_phase_kind_presentation(
        #[case] kind: PhaseKind,
        #[case] label: &str,
        #[case] color: &str,
    ) {
        assert_eq!(kind.label(), label);
        assert_eq!(kind.color(), color);
    }
}
