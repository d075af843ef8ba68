//! CPU difficulty presets

use super::cpu::CpuConfig;

/// How hard the CPU opponent plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    /// Slow paddle, wide dead zone, large aim error
    Easy,
    /// Balanced
    #[default]
    Normal,
    /// Fast paddle, reacts early, barely misses
    Hard,
}

impl Difficulty {
    /// The next difficulty, wrapping around
    #[must_use]
    pub fn cycle(self) -> Self {
        match self {
            Self::Easy => Self::Normal,
            Self::Normal => Self::Hard,
            Self::Hard => Self::Easy,
        }
    }

    /// Uppercase label for menus
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "EASY",
            Self::Normal => "NORMAL",
            Self::Hard => "HARD",
        }
    }

    /// CPU controller tuning for this difficulty
    #[must_use]
    pub fn cpu_config(self) -> CpuConfig {
        match self {
            Self::Easy => CpuConfig {
                max_speed: 65.0,
                dead_zone: 16.0,
                reaction_distance: 180.0,
                error_margin: 24.0,
            },
            Self::Normal => CpuConfig {
                max_speed: 140.0,
                dead_zone: 10.0,
                reaction_distance: 260.0,
                error_margin: 14.0,
            },
            Self::Hard => CpuConfig {
                max_speed: 240.0,
                dead_zone: 6.0,
                reaction_distance: 360.0,
                error_margin: 6.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(Difficulty::Easy.cycle(), Difficulty::Normal);
        assert_eq!(Difficulty::Normal.cycle(), Difficulty::Hard);
        assert_eq!(Difficulty::Hard.cycle(), Difficulty::Easy);
    }

    #[test]
    fn test_presets_scale_with_difficulty() {
        let easy = Difficulty::Easy.cpu_config();
        let hard = Difficulty::Hard.cpu_config();
        assert!(hard.max_speed > easy.max_speed);
        assert!(hard.reaction_distance > easy.reaction_distance);
        assert!(hard.error_margin < easy.error_margin);
    }
}
