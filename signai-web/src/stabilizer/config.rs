//! Operator-tunable stabilizer settings

/// Default minimum time between two commits
pub const DEFAULT_COOLDOWN_MS: u32 = 900;

/// Cooldowns at or below this are "Fast"
const FAST_MODE_MAX_MS: u32 = 500;

/// Cooldowns at or below this (and above fast) are "Normal"
const NORMAL_MODE_MAX_MS: u32 = 900;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StabilizerConfig {
    /// Minimum milliseconds between two committed gestures
    pub cooldown_ms: u32,
}

impl Default for StabilizerConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: DEFAULT_COOLDOWN_MS,
        }
    }
}

impl StabilizerConfig {
    pub fn speed_mode(&self) -> SpeedMode {
        SpeedMode::from_cooldown(self.cooldown_ms)
    }
}

/// Human-facing name for a cooldown setting
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpeedMode {
    Fast,
    Normal,
    Learning,
}

impl SpeedMode {
    pub fn from_cooldown(cooldown_ms: u32) -> Self {
        if cooldown_ms <= FAST_MODE_MAX_MS {
            SpeedMode::Fast
        } else if cooldown_ms <= NORMAL_MODE_MAX_MS {
            SpeedMode::Normal
        } else {
            SpeedMode::Learning
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SpeedMode::Fast => "Fast Mode",
            SpeedMode::Normal => "Normal Mode",
            SpeedMode::Learning => "Learning Mode",
        }
    }
}
