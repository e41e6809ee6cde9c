use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// One of the five fixed form fields used for create/update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Gender,
    HeightCm,
    WeightKg,
    MedicalHistory,
}

impl Field {
    /// Schema order; also the order fields are shown and serialized in
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Gender,
        Field::HeightCm,
        Field::WeightKg,
        Field::MedicalHistory,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Gender => "gender",
            Field::HeightCm => "height_cm",
            Field::WeightKg => "weight_kg",
            Field::MedicalHistory => "medical_history",
        }
    }

    /// Input placeholder: the key with underscores as spaces
    pub fn placeholder(self) -> String {
        self.key().replace('_', " ")
    }

    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.key() == key)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Submission payload for create/update.
///
/// Always carries every [`Field`]; values are passed through verbatim with
/// no trimming or type coercion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPayload {
    values: [String; 5],
}

impl FieldPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Iterate `(field, value)` pairs in schema order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL.into_iter().map(|f| (f, self.get(f)))
    }

    pub fn to_json(&self) -> serde_json::Value {
        let map = self
            .iter()
            .map(|(f, v)| (f.key().to_string(), serde_json::Value::String(v.to_string())))
            .collect();
        serde_json::Value::Object(map)
    }
}

impl Serialize for FieldPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (field, value) in self.iter() {
            map.serialize_entry(field.key(), value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_payload_has_all_keys_empty() {
        let payload = FieldPayload::new();
        let json = payload.to_json();
        let obj = json.as_object().unwrap();

        assert_eq!(obj.len(), 5);
        assert!(obj.values().all(|v| v == ""));
    }

    #[test]
    fn test_serialized_order_follows_schema() {
        let payload = FieldPayload::new()
            .with(Field::MedicalHistory, "asthma")
            .with(Field::Name, "Ada");

        let text = serde_json::to_string(&payload).unwrap();
        assert_eq!(
            text,
            r#"{"name":"Ada","gender":"","height_cm":"","weight_kg":"","medical_history":"asthma"}"#
        );
    }

    #[test]
    fn test_from_key_rejects_unknown() {
        assert_eq!(Field::from_key("weight_kg"), Some(Field::WeightKg));
        assert_eq!(Field::from_key("bmi"), None);
    }

    #[test]
    fn test_values_are_not_trimmed() {
        let payload = FieldPayload::new().with(Field::Gender, "  f ");
        assert_eq!(payload.get(Field::Gender), "  f ");
    }
}
