use crate::Level;

/// Call site of a scaling operation.
///
/// Each call site uses its own factors, an active run must never be scaled with the
/// factors of a preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scaling {
    /// Phase durations and rewards of an active workout.
    Run,
    /// Dashboard recommendations, previewing an active run.
    Recommendation,
    /// Challenge list.
    Challenge,
}

impl Scaling {
    /// Duration increase per level in percent.
    #[must_use]
    pub const fn duration_percent(self) -> u32 {
        match self {
            Scaling::Run | Scaling::Recommendation => 10,
            Scaling::Challenge => 15,
        }
    }

    /// Reward increase per level in percent.
    #[must_use]
    pub const fn reward_percent(self) -> u32 {
        match self {
            Scaling::Run | Scaling::Recommendation => 5,
            Scaling::Challenge => 10,
        }
    }
}

/// `floor(base * (1 + level * factor))`
#[must_use]
pub fn scaled_duration(base: u32, level: Level, scaling: Scaling) -> u32 {
    scale(base, level, scaling.duration_percent())
}

/// `floor(base * (1 + level * factor))`
#[must_use]
pub fn scaled_reward(base: u32, level: Level, scaling: Scaling) -> u32 {
    scale(base, level, scaling.reward_percent())
}

fn scale(base: u32, level: Level, percent: u32) -> u32 {
    let factor = 100 + u128::from(u32::from(level)) * u128::from(percent);
    let scaled = u128::from(base) * factor / 100;
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn level(value: u32) -> Level {
        Level::new(value).unwrap()
    }

    #[rstest]
    #[case(30, 1, Scaling::Run, 33)]
    #[case(30, 2, Scaling::Run, 36)]
    #[case(45, 1, Scaling::Run, 49)]
    #[case(45, 3, Scaling::Run, 58)]
    #[case(30, 1, Scaling::Recommendation, 33)]
    #[case(30, 1, Scaling::Challenge, 34)]
    #[case(120, 4, Scaling::Challenge, 192)]
    #[case(1, 1, Scaling::Run, 1)]
    fn test_scaled_duration(
        #[case] base: u32,
        #[case] level_value: u32,
        #[case] scaling: Scaling,
        #[case] expected: u32,
    ) {
        assert_eq!(scaled_duration(base, level(level_value), scaling), expected);
    }

    #[rstest]
    #[case(100, 1, Scaling::Run, 105)]
    #[case(100, 2, Scaling::Run, 110)]
    #[case(130, 3, Scaling::Run, 149)]
    #[case(80, 1, Scaling::Recommendation, 84)]
    #[case(100, 1, Scaling::Challenge, 110)]
    #[case(150, 3, Scaling::Challenge, 195)]
    fn test_scaled_reward(
        #[case] base: u32,
        #[case] level_value: u32,
        #[case] scaling: Scaling,
        #[case] expected: u32,
    ) {
        assert_eq!(scaled_reward(base, level(level_value), scaling), expected);
    }

    #[test]
    fn test_scaled_values_never_below_base_and_monotonic() {
        for scaling in [Scaling::Run, Scaling::Recommendation, Scaling::Challenge] {
            for base in (1..500).step_by(7) {
                let mut previous = (base, base);
                for level_value in 1..60 {
                    let duration = scaled_duration(base, level(level_value), scaling);
                    let reward = scaled_reward(base, level(level_value), scaling);
                    assert!(duration >= base && reward >= base);
                    assert!(duration >= previous.0 && reward >= previous.1);
                    previous = (duration, reward);
                }
            }
        }
    }

    #[test]
    fn test_scaled_duration_saturates() {
        assert_eq!(
            scaled_duration(u32::MAX, level(u32::MAX), Scaling::Challenge),
            u32::MAX
        );
    }
}
