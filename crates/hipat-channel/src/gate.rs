use crate::protocol::{FrameId, MessageEnvelope};

/// Why a message was discarded. Internal bookkeeping only: rejections are
/// silent at the boundary and the reason never carries payload data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropReason {
    SourceMismatch,
    OriginMismatch,
    /// The active mode has no parseable URL, so no origin can be trusted.
    OriginUnresolved,
    ChannelClosed,
    Malformed,
}

impl DropReason {
    pub const fn as_str(self) -> &'static str {
        match self {
            DropReason::SourceMismatch => "source_mismatch",
            DropReason::OriginMismatch => "origin_mismatch",
            DropReason::OriginUnresolved => "origin_unresolved",
            DropReason::ChannelClosed => "channel_closed",
            DropReason::Malformed => "malformed",
        }
    }
}

/// The acceptance rule for embedded-tool messages. Source identity is
/// checked before origin so a hostile frame on the right origin is still
/// rejected; an unresolved origin rejects everything.
pub fn admit(
    expected_source: &FrameId,
    expected_origin: Option<&str>,
    envelope: &MessageEnvelope,
) -> Result<(), DropReason> {
    if envelope.source != *expected_source {
        return Err(DropReason::SourceMismatch);
    }
    match expected_origin {
        None => Err(DropReason::OriginUnresolved),
        Some(origin) if envelope.origin == origin => Ok(()),
        Some(_) => Err(DropReason::OriginMismatch),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::ToolMessage;

    fn envelope(source: &str, origin: &str) -> MessageEnvelope {
        MessageEnvelope {
            source: FrameId(source.into()),
            origin: origin.into(),
            message: ToolMessage::Ready,
        }
    }

    #[test]
    fn admits_matching_source_and_origin() {
        let frame = FrameId("frame_1".into());
        let env = envelope("frame_1", "https://tools.example.com");
        assert!(admit(&frame, Some("https://tools.example.com"), &env).is_ok());
    }

    #[test]
    fn rejects_foreign_source_even_with_matching_origin() {
        let frame = FrameId("frame_1".into());
        let env = envelope("frame_other", "https://tools.example.com");
        assert_eq!(
            admit(&frame, Some("https://tools.example.com"), &env),
            Err(DropReason::SourceMismatch)
        );
    }

    #[test]
    fn rejects_wrong_origin_even_with_matching_source() {
        let frame = FrameId("frame_1".into());
        let env = envelope("frame_1", "https://evil.example.com");
        assert_eq!(
            admit(&frame, Some("https://tools.example.com"), &env),
            Err(DropReason::OriginMismatch)
        );
    }

    #[test]
    fn rejects_everything_when_origin_cannot_be_resolved() {
        let frame = FrameId("frame_1".into());
        let env = envelope("frame_1", "https://tools.example.com");
        assert_eq!(admit(&frame, None, &env), Err(DropReason::OriginUnresolved));
    }
}
