/// Ambient context attached to every log event.
#[derive(Clone, Debug, Default)]
pub struct ObserveCtx {
    pub mentor: Option<String>,
    pub resource: Option<String>,
    pub action: Option<String>,
}

impl ObserveCtx {
    pub fn for_mentor(mentor: impl Into<String>) -> Self {
        Self {
            mentor: Some(mentor.into()),
            ..Self::default()
        }
    }
}
