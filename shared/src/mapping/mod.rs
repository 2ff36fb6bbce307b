use std::collections::BTreeMap;

use crate::config::RsvpConfig;
use crate::models::{FieldName, MappedSubmission, RsvpForm};

/// Translates local form field names into the receiving form's entry ids.
#[derive(Clone, Debug)]
pub struct FieldMapper {
    entry_ids: BTreeMap<FieldName, String>,
    fixed_values: BTreeMap<FieldName, String>,
}

impl FieldMapper {
    pub fn new(
        entry_ids: BTreeMap<FieldName, String>,
        fixed_values: BTreeMap<FieldName, String>,
    ) -> Self {
        Self {
            entry_ids,
            fixed_values,
        }
    }

    pub fn from_config(config: &RsvpConfig) -> Self {
        Self::new(config.entry_ids.clone(), config.fixed_values.clone())
    }

    /// Fixed values win over user input; anything absent becomes `""`.
    /// Fields without an entry id are skipped.
    pub fn map(&self, form: &RsvpForm) -> MappedSubmission {
        let fields = FieldName::ALL
            .into_iter()
            .filter_map(|field| {
                let key = self.entry_ids.get(&field)?;
                let value = self
                    .fixed_values
                    .get(&field)
                    .map(String::as_str)
                    .or_else(|| form.get(field))
                    .unwrap_or_default();
                Some((key.clone(), value.to_string()))
            })
            .collect();

        MappedSubmission { fields }
    }
}
