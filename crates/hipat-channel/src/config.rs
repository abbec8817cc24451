use serde::{Deserialize, Serialize};

/// How long a frame may sit in `Loading` before the session gives up.
pub const LOAD_TIMEOUT_MS: i64 = 30_000;

/// Bounds applied to tool-requested frame heights.
pub const MIN_FRAME_HEIGHT: u32 = 400;
pub const MAX_FRAME_HEIGHT: u32 = 800;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChannelConfig {
    pub load_timeout_ms: i64,
    pub min_frame_height: u32,
    pub max_frame_height: u32,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            load_timeout_ms: LOAD_TIMEOUT_MS,
            min_frame_height: MIN_FRAME_HEIGHT,
            max_frame_height: MAX_FRAME_HEIGHT,
        }
    }
}

impl ChannelConfig {
    pub fn clamp_height(&self, requested: i64) -> u32 {
        requested.clamp(i64::from(self.min_frame_height), i64::from(self.max_frame_height)) as u32
    }
}
