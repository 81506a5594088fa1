use std::collections::BTreeMap;

use serde::{Serialize, Serializer};
use shared::domain::FieldName;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<FieldName, String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: FieldName, message: impl Into<String>) -> Self {
        let mut result = Self::new();
        result.insert(field, message);
        result
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, field: FieldName) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn has_error(&self, field: FieldName) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.errors
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }

    pub fn insert(&mut self, field: FieldName, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Entries outside `scope` are left alone.
    pub fn replace_scope(&mut self, scope: &[FieldName], fresh: &ValidationResult) {
        self.errors.retain(|field, _| !scope.contains(field));
        for (field, message) in fresh.iter() {
            if scope.contains(&field) {
                self.errors.insert(field, message.to_string());
            }
        }
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Repr<'a> {
            valid: bool,
            errors: &'a BTreeMap<FieldName, String>,
        }

        Repr {
            valid: self.is_valid(),
            errors: &self.errors,
        }
        .serialize(serializer)
    }
}
