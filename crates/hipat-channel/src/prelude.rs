pub use crate::config::{
    ChannelConfig, LOAD_TIMEOUT_MS, MAX_FRAME_HEIGHT, MIN_FRAME_HEIGHT,
};
pub use crate::errors::ChannelError;
pub use crate::gate::{admit, DropReason};
pub use crate::protocol::{ClientData, FrameId, MessageEnvelope, ToolMessage};
pub use crate::session::{ChannelState, FrameHandle, MessageOutcome, ToolSession};
