use serde_json::Value;

/// Read-only view over a normalized AS1 activity owned by the framework.
///
/// Silos only look up individual fields; the overall shape is never validated.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct Activity(Value);

impl Activity {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Follows `path` through nested objects, `None` as soon as a step is missing.
    pub fn field(&self, path: &[&str]) -> Option<&Value> {
        path.iter()
            .try_fold(&self.0, |value, key| value.as_object()?.get(*key))
    }

    /// A non-negative integer at `path`.
    pub fn u64_at(&self, path: &[&str]) -> Option<u64> {
        self.field(path)?.as_u64()
    }

    /// An identifier at `path`: a non-empty string or a non-negative integer.
    pub fn id_at(&self, path: &[&str]) -> Option<String> {
        match self.field(path)? {
            Value::String(id) if !id.is_empty() => Some(id.clone()),
            Value::Number(number) => number.as_u64().map(|id| id.to_string()),
            _ => None,
        }
    }

    /// Entries of `object.tags`, empty when absent.
    pub fn tags(&self) -> &[Value] {
        self.field(&["object", "tags"])
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl From<Value> for Activity {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}
