use crate::share::LaunchMode;
use hipat_types::prelude::MentorId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToolId(pub String);

/// Per-mentor URL replacements for a catalog tool. `None` means the
/// catalog default applies.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolUrlOverride {
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub self_service_url: Option<String>,
}

/// One catalog entry: an embeddable third-party assessment or calculator
/// mentors run with (live) or share to (self-service) prospects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ToolDef {
    pub id: ToolId,
    pub name: String,
    pub icon: String,
    pub color: String,
    /// Visible to mentors. System tools are deactivated, never deleted.
    pub is_active: bool,
    /// Derived: the registry recomputes this on every write from whether
    /// the live URL is usable.
    pub is_configured: bool,
    /// Mentor-added, as opposed to platform-seeded.
    pub is_custom: bool,
    pub live_url: String,
    pub self_service_url: String,
    #[serde(default)]
    pub mentor_overrides: HashMap<String, ToolUrlOverride>,
}

impl ToolDef {
    /// The raw URL that applies for this mentor and mode, before any
    /// usability check: mentor override first, catalog default second.
    pub fn url_candidate(&self, mentor: &MentorId, mode: LaunchMode) -> &str {
        let over = self.mentor_overrides.get(&mentor.0);
        match mode {
            LaunchMode::Live => over
                .and_then(|o| o.live_url.as_deref())
                .unwrap_or(&self.live_url),
            LaunchMode::SelfService => over
                .and_then(|o| o.self_service_url.as_deref())
                .unwrap_or(&self.self_service_url),
        }
    }
}

/// Platform-seeded tools. Integrators load these into a registry at boot;
/// tests use them as fixtures.
pub fn seed_catalog() -> Vec<ToolDef> {
    vec![
        ToolDef {
            id: ToolId("body-comp".into()),
            name: "Body Composition Assessment".into(),
            icon: "scale".into(),
            color: "#2F6FED".into(),
            is_active: true,
            is_configured: true,
            is_custom: false,
            live_url: "https://tools.hipat.example/body-comp".into(),
            self_service_url: "https://tools.hipat.example/body-comp/self".into(),
            mentor_overrides: HashMap::new(),
        },
        ToolDef {
            id: ToolId("macro-calc".into()),
            name: "Macro Calculator".into(),
            icon: "calculator".into(),
            color: "#15803D".into(),
            is_active: true,
            is_configured: true,
            is_custom: false,
            live_url: "https://tools.hipat.example/macro-calc".into(),
            self_service_url: "https://tools.hipat.example/macro-calc/self".into(),
            mentor_overrides: HashMap::new(),
        },
        ToolDef {
            id: ToolId("readiness-quiz".into()),
            name: "Training Readiness Quiz".into(),
            icon: "clipboard".into(),
            color: "#B45309".into(),
            is_active: true,
            is_configured: false,
            is_custom: false,
            live_url: String::new(),
            self_service_url: String::new(),
            mentor_overrides: HashMap::new(),
        },
    ]
}
