use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_TURNS: u32 = 20;
pub const DEFAULT_HAND_SIZE: usize = 5;
pub const DEFAULT_STORE_SIZE: usize = 5;
pub const DEFAULT_WIN_SCORE: u32 = 10;

fn default_max_turns() -> u32 {
    DEFAULT_MAX_TURNS
}

fn default_hand_size() -> usize {
    DEFAULT_HAND_SIZE
}

fn default_store_size() -> usize {
    DEFAULT_STORE_SIZE
}

fn default_win_score() -> u32 {
    DEFAULT_WIN_SCORE
}

fn default_enforce_phases() -> bool {
    false
}

/// Tunable game constants. Every field has a default so partial config files
/// are accepted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameConfig {
    #[serde(default = "default_max_turns")]
    pub max_turns: u32,
    #[serde(default = "default_hand_size")]
    pub hand_size: usize,
    #[serde(default = "default_store_size")]
    pub store_size: usize,
    /// Final score needed for a victory once the last turn ends.
    #[serde(default = "default_win_score")]
    pub win_score: u32,
    /// Reject play-phase actions during the buy phase and vice versa. Off by
    /// default; front ends opt in.
    #[serde(default = "default_enforce_phases")]
    pub enforce_phases: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_turns: DEFAULT_MAX_TURNS,
            hand_size: DEFAULT_HAND_SIZE,
            store_size: DEFAULT_STORE_SIZE,
            win_score: DEFAULT_WIN_SCORE,
            enforce_phases: false,
        }
    }
}
