use crate::catalog::ToolDef;
use crate::errors::ToolError;
use hipat_types::prelude::MentorId;
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LaunchMode {
    Live,
    SelfService,
}

impl LaunchMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            LaunchMode::Live => "live",
            LaunchMode::SelfService => "self-service",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub const fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Parses `raw` and accepts it only under http/https. Everything else
/// (empty, relative, javascript:, file:, data:) is unusable.
pub fn usable_url(raw: &str) -> Option<Url> {
    if raw.trim().is_empty() {
        return None;
    }
    let url = Url::parse(raw).ok()?;
    match url.scheme() {
        "http" | "https" => Some(url),
        _ => None,
    }
}

/// Builds the fully parameterized launch URL for an embedded tool.
///
/// An unusable base yields `""` instead of an error: at render time a
/// broken link is recoverable, so the host shows its "not configured"
/// treatment rather than failing the whole view. Stored URLs are guarded
/// separately by [`validate_tool_url`].
pub fn build_launch_url(
    base: &str,
    mentor: &MentorId,
    mentor_name: &str,
    mode: LaunchMode,
    theme: Theme,
) -> String {
    let mut url = match usable_url(base) {
        Some(url) => url,
        None => return String::new(),
    };
    url.query_pairs_mut()
        .append_pair("mentorId", &mentor.0)
        .append_pair("mentorName", mentor_name)
        .append_pair("mode", mode.as_str())
        .append_pair("callback", "postMessage")
        .append_pair("theme", theme.as_str());
    url.to_string()
}

/// Persistence-time guard for mentor-supplied tool URLs. Unlike the
/// builder this rejects loudly: a bad URL on disk keeps failing until
/// someone notices, so it must never be stored.
pub fn validate_tool_url(raw: &str) -> Result<(), ToolError> {
    if raw.trim().is_empty() {
        return Err(ToolError::invalid_url("tool url is empty"));
    }
    let url = Url::parse(raw)
        .map_err(|err| ToolError::invalid_url(&format!("tool url did not parse: {err}")))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ToolError::invalid_url(&format!(
            "unsupported url scheme: {other}"
        ))),
    }
}

/// The URL a session would actually load for this mentor and mode, if
/// there is a usable one.
pub fn effective_url(def: &ToolDef, mentor: &MentorId, mode: LaunchMode) -> Option<String> {
    let candidate = def.url_candidate(mentor, mode);
    usable_url(candidate).map(|_| candidate.to_string())
}

/// The origin embedded-tool messages must arrive from, recomputed from
/// the current definition rather than cached alongside the session.
pub fn expected_origin(def: &ToolDef, mentor: &MentorId, mode: LaunchMode) -> Option<String> {
    usable_url(def.url_candidate(mentor, mode)).map(|url| url.origin().ascii_serialization())
}
