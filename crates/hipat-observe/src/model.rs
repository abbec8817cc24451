use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetricKind {
    Counter,
    Gauge,
}

/// Static description of a metric. Declared as consts next to the code
/// that records them so the full set is greppable.
#[derive(Clone, Copy, Debug)]
pub struct MetricSpec {
    pub name: &'static str,
    pub kind: MetricKind,
    pub help: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Clone, Debug)]
pub struct LogEvent {
    pub level: LogLevel,
    pub message: String,
    pub mentor: Option<String>,
    pub resource: Option<String>,
    pub action: Option<String>,
    pub labels: BTreeMap<&'static str, String>,
    pub fields: serde_json::Map<String, serde_json::Value>,
}
