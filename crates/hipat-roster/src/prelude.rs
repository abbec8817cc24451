pub use crate::errors::RosterError;
pub use crate::invite::{InviteSender, NoopInviteSender};
pub use crate::model::{Client, NewClient};
pub use crate::promotion::{PromotionDecision, PromotionFlow, PromotionOutcome};
pub use crate::roster::{ClientRoster, MemoryRoster};
