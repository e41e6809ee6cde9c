use medboard_types::{Field, FieldPayload, FormMode};

/// State of the create/update dialog.
///
/// Holds exactly the five schema fields. Nothing is validated: what the
/// user typed is what gets submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    mode: FormMode,
    fields: FieldPayload,
    focus: usize,
}

impl FormState {
    /// Open a form pre-filled from `initial`; omitted fields start empty
    pub fn open(mode: FormMode, initial: FieldPayload) -> Self {
        Self {
            mode,
            fields: initial,
            focus: 0,
        }
    }

    pub fn empty(mode: FormMode) -> Self {
        Self::open(mode, FieldPayload::new())
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn value(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    /// Set a field by its schema key. Returns `false` for keys outside the schema.
    pub fn update_field(&mut self, key: &str, value: impl Into<String>) -> bool {
        match Field::from_key(key) {
            Some(field) => {
                self.fields.set(field, value);
                true
            }
            None => false,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    pub fn focused(&self) -> Field {
        Field::ALL[self.focus]
    }

    pub fn focus(&mut self, field: Field) {
        if let Some(idx) = Field::ALL.iter().position(|f| *f == field) {
            self.focus = idx;
        }
    }

    /// Field after the focused one, wrapping to the first
    pub fn next_field(&self) -> Field {
        Field::ALL[(self.focus + 1) % Field::ALL.len()]
    }

    /// Field before the focused one, wrapping to the last
    pub fn prev_field(&self) -> Field {
        Field::ALL[(self.focus + Field::ALL.len() - 1) % Field::ALL.len()]
    }

    /// Payload to send: the current field map, verbatim
    pub fn submit(&self) -> FieldPayload {
        self.fields.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_returns_all_keys_even_when_untouched() {
        let mut form = FormState::empty(FormMode::Create);
        form.update_field("name", "Ada");

        let payload = form.submit();
        let json = payload.to_json();
        let obj = json.as_object().unwrap();

        assert_eq!(obj.len(), 5);
        assert_eq!(obj["name"], "Ada");
        assert_eq!(obj["medical_history"], "");
    }

    #[test]
    fn test_open_keeps_initial_values() {
        let initial = FieldPayload::new().with(Field::HeightCm, "180");
        let form = FormState::open(FormMode::Update, initial);

        assert_eq!(form.value(Field::HeightCm), "180");
        assert_eq!(form.value(Field::Name), "");
        assert_eq!(form.mode(), FormMode::Update);
    }

    #[test]
    fn test_unknown_key_is_ignored() {
        let mut form = FormState::empty(FormMode::Create);

        assert!(!form.update_field("bmi", "22"));
        assert_eq!(form.submit(), FieldPayload::new());
    }

    #[test]
    fn test_submit_does_not_trim_or_coerce() {
        let mut form = FormState::empty(FormMode::Create);
        form.update_field("weight_kg", " seventy ");

        assert_eq!(form.submit().get(Field::WeightKg), " seventy ");
    }

    #[test]
    fn test_focus_wraps_around() {
        let mut form = FormState::empty(FormMode::Create);
        assert_eq!(form.focused(), Field::Name);

        assert_eq!(form.prev_field(), Field::MedicalHistory);
        assert_eq!(form.next_field(), Field::Gender);

        form.focus(form.prev_field());
        assert_eq!(form.focused(), Field::MedicalHistory);
        assert_eq!(form.next_field(), Field::Name);

        form.focus(Field::WeightKg);
        assert_eq!(form.focused(), Field::WeightKg);
    }
}
