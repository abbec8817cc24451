use crate::catalog::{ToolDef, ToolId, ToolUrlOverride};
use crate::errors::ToolError;
use crate::share::{usable_url, validate_tool_url};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use hipat_types::prelude::MentorId;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct ToolState {
    pub def: ToolDef,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Default)]
pub struct ListFilter {
    pub include_inactive: bool,
    pub custom_only: bool,
}

/// URL changes for one tool. `None` leaves a slot unchanged; an empty
/// string clears it (the tool becomes unconfigured for that mode).
#[derive(Clone, Debug, Default)]
pub struct UrlPatch {
    pub live_url: Option<String>,
    pub self_service_url: Option<String>,
}

#[async_trait]
pub trait ToolRegistry: Send + Sync {
    /// Seed or customize a catalog entry. `is_configured` is recomputed
    /// here; callers cannot set it directly into a lie.
    async fn upsert(&self, def: ToolDef) -> Result<(), ToolError>;

    /// Reconfigure URLs, for the catalog defaults (`mentor = None`) or a
    /// single mentor's override. Non-http(s) URLs are rejected outright.
    async fn configure_urls(
        &self,
        tool: &ToolId,
        mentor: Option<&MentorId>,
        patch: UrlPatch,
    ) -> Result<ToolDef, ToolError>;

    /// Hide a tool from mentors. The entry stays in the catalog.
    async fn deactivate(&self, tool: &ToolId) -> Result<(), ToolError>;

    /// Drop a mentor-added tool. System tools are refused.
    async fn remove(&self, tool: &ToolId) -> Result<(), ToolError>;

    /// Active tools only; deactivated entries read as absent.
    async fn get(&self, tool: &ToolId) -> Result<Option<ToolDef>, ToolError>;

    async fn list(&self, filter: &ListFilter) -> Result<Vec<ToolDef>, ToolError>;
}

#[derive(Clone, Default)]
pub struct InMemoryToolRegistry {
    inner: Arc<RwLock<HashMap<ToolId, ToolState>>>,
}

impl InMemoryToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the platform seed catalog.
    pub fn seeded() -> Self {
        let registry = Self::new();
        let mut guard = registry.inner.write();
        for def in crate::catalog::seed_catalog() {
            guard.insert(
                def.id.clone(),
                ToolState {
                    def: normalize(def),
                    updated_at: Utc::now(),
                },
            );
        }
        drop(guard);
        registry
    }
}

fn normalize(mut def: ToolDef) -> ToolDef {
    def.is_configured = usable_url(&def.live_url).is_some();
    def
}

fn apply_patch(slot: &mut String, value: Option<String>) -> Result<(), ToolError> {
    if let Some(raw) = value {
        if raw.is_empty() {
            slot.clear();
        } else {
            validate_tool_url(&raw)?;
            *slot = raw;
        }
    }
    Ok(())
}

fn apply_override_patch(slot: &mut Option<String>, value: Option<String>) -> Result<(), ToolError> {
    if let Some(raw) = value {
        if raw.is_empty() {
            *slot = None;
        } else {
            validate_tool_url(&raw)?;
            *slot = Some(raw);
        }
    }
    Ok(())
}

#[async_trait]
impl ToolRegistry for InMemoryToolRegistry {
    async fn upsert(&self, def: ToolDef) -> Result<(), ToolError> {
        let state = ToolState {
            def: normalize(def),
            updated_at: Utc::now(),
        };
        let mut guard = self.inner.write();
        guard.insert(state.def.id.clone(), state);
        Ok(())
    }

    async fn configure_urls(
        &self,
        tool: &ToolId,
        mentor: Option<&MentorId>,
        patch: UrlPatch,
    ) -> Result<ToolDef, ToolError> {
        let mut guard = self.inner.write();
        let state = guard
            .get_mut(tool)
            .ok_or_else(|| ToolError::not_found(&tool.0))?;

        match mentor {
            None => {
                apply_patch(&mut state.def.live_url, patch.live_url)?;
                apply_patch(&mut state.def.self_service_url, patch.self_service_url)?;
            }
            Some(mentor) => {
                let over = state
                    .def
                    .mentor_overrides
                    .entry(mentor.0.clone())
                    .or_insert_with(ToolUrlOverride::default);
                apply_override_patch(&mut over.live_url, patch.live_url)?;
                apply_override_patch(&mut over.self_service_url, patch.self_service_url)?;
                if over.live_url.is_none() && over.self_service_url.is_none() {
                    state.def.mentor_overrides.remove(&mentor.0);
                }
            }
        }

        state.def.is_configured = usable_url(&state.def.live_url).is_some();
        state.updated_at = Utc::now();
        Ok(state.def.clone())
    }

    async fn deactivate(&self, tool: &ToolId) -> Result<(), ToolError> {
        let mut guard = self.inner.write();
        let state = guard
            .get_mut(tool)
            .ok_or_else(|| ToolError::not_found(&tool.0))?;
        state.def.is_active = false;
        state.updated_at = Utc::now();
        Ok(())
    }

    async fn remove(&self, tool: &ToolId) -> Result<(), ToolError> {
        let mut guard = self.inner.write();
        let state = guard
            .get(tool)
            .ok_or_else(|| ToolError::not_found(&tool.0))?;
        if !state.def.is_custom {
            return Err(ToolError::policy(&format!(
                "system tool {} cannot be removed, only deactivated",
                tool.0
            )));
        }
        guard.remove(tool);
        Ok(())
    }

    async fn get(&self, tool: &ToolId) -> Result<Option<ToolDef>, ToolError> {
        let guard = self.inner.read();
        Ok(guard
            .get(tool)
            .filter(|state| state.def.is_active)
            .map(|state| state.def.clone()))
    }

    async fn list(&self, filter: &ListFilter) -> Result<Vec<ToolDef>, ToolError> {
        let guard = self.inner.read();
        let mut out = Vec::new();
        for state in guard.values() {
            if !filter.include_inactive && !state.def.is_active {
                continue;
            }
            if filter.custom_only && !state.def.is_custom {
                continue;
            }
            out.push(state.def.clone());
        }
        out.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(out)
    }
}
