use crate::model::LogEvent;
use serde_json::Value;

/// Applied to every event before it reaches a sink.
pub trait Redactor: Send + Sync {
    fn redact(&self, event: &mut LogEvent);
}

pub struct NoopRedactor;

impl Redactor for NoopRedactor {
    fn redact(&self, _event: &mut LogEvent) {}
}

/// Masks prospect contact data. Field names are matched exactly; the
/// masked form keeps just enough shape for correlation during debugging.
pub struct ContactRedactor;

const CONTACT_FIELDS: &[&str] = &["email", "phone", "name"];

impl Redactor for ContactRedactor {
    fn redact(&self, event: &mut LogEvent) {
        for key in CONTACT_FIELDS {
            if let Some(slot) = event.fields.get_mut(*key) {
                *slot = Value::String(mask(slot));
            }
        }
    }
}

fn mask(value: &Value) -> String {
    let raw = match value {
        Value::String(s) => s.as_str(),
        _ => return "***".to_string(),
    };
    match raw.split_once('@') {
        // Keep the mail domain; the local part is the sensitive half.
        Some((_, domain)) => format!("***@{domain}"),
        None => "***".to_string(),
    }
}
