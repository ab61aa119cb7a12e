use std::collections::HashSet;
use thiserror::Error;

use super::dto::FiscalRecord;

/// Ошибки загрузки набора записей
#[derive(Debug, Error, PartialEq)]
pub enum RecordStoreError {
    #[error("record set is empty")]
    Empty,

    #[error("duplicate record name: {0}")]
    DuplicateName(String),

    #[error("field {field} of {name} is not a finite number")]
    NonFinite { name: String, field: &'static str },

    #[error("field {field} of {name} must not be negative")]
    Negative { name: String, field: &'static str },

    #[error("invalid record JSON: {0}")]
    Parse(String),
}

/// Immutable, ordered set of fiscal records.
///
/// Built once at start-up; nothing can insert, remove or mutate a record
/// afterwards. Order is the order of the source table.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordStore {
    records: Vec<FiscalRecord>,
}

impl RecordStore {
    pub fn new(records: Vec<FiscalRecord>) -> Result<Self, RecordStoreError> {
        if records.is_empty() {
            return Err(RecordStoreError::Empty);
        }

        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.name.as_str()) {
                return Err(RecordStoreError::DuplicateName(record.name.clone()));
            }
            validate_record(record)?;
        }

        Ok(Self { records })
    }

    /// Parse a JSON array of camelCase records
    pub fn from_json(json: &str) -> Result<Self, RecordStoreError> {
        let records: Vec<FiscalRecord> =
            serde_json::from_str(json).map_err(|e| RecordStoreError::Parse(e.to_string()))?;
        Self::new(records)
    }

    pub fn records(&self) -> &[FiscalRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a constructed store, kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&FiscalRecord> {
        self.records.iter().find(|r| r.name == name)
    }
}

fn validate_record(record: &FiscalRecord) -> Result<(), RecordStoreError> {
    let signed = [
        ("definitiveVariation2024", record.definitive_variation2024),
        ("ipmIncrement", record.ipm_increment),
    ];
    let non_negative = [
        ("iva2022", record.iva2022),
        ("iva2023", record.iva2023),
        ("ivaProvisional2024", record.iva_provisional2024),
        ("iva2024", record.iva2024),
        ("ipmProjection2026", record.ipm_projection2026),
        ("revenueProjection", record.revenue_projection),
        ("totalContribution", record.total_contribution),
        ("monthlyFee", record.monthly_fee),
    ];

    for (field, value) in signed.iter().chain(non_negative.iter()) {
        if !value.is_finite() {
            return Err(RecordStoreError::NonFinite {
                name: record.name.clone(),
                field: *field,
            });
        }
    }

    for (field, value) in non_negative {
        if value < 0.0 {
            return Err(RecordStoreError::Negative {
                name: record.name.clone(),
                field,
            });
        }
    }

    Ok(())
}


#[cfg(test)]
mod tests {
    use super::test_support::record;
    use super::*;

    #[test]
    fn test_empty_set_is_rejected() {
        assert_eq!(RecordStore::new(vec![]), Err(RecordStoreError::Empty));
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let result = RecordStore::new(vec![
            record("Alpha", 1.0, 10.0),
            record("Beta", 2.0, 20.0),
            record("Alpha", 3.0, 30.0),
        ]);
        assert_eq!(result, Err(RecordStoreError::DuplicateName("Alpha".into())));
    }

    #[test]
    fn test_negative_revenue_is_rejected() {
        let result = RecordStore::new(vec![record("Alpha", -5.0, -1.0)]);
        assert_eq!(
            result,
            Err(RecordStoreError::Negative {
                name: "Alpha".into(),
                field: "revenueProjection"
            })
        );
    }

    #[test]
    fn test_nan_is_rejected() {
        let result = RecordStore::new(vec![record("Alpha", f64::NAN, 1.0)]);
        assert!(matches!(
            result,
            Err(RecordStoreError::NonFinite { field: "definitiveVariation2024", .. })
        ));
    }

    #[test]
    fn test_lookup_keeps_source_order() {
        let store = RecordStore::new(vec![record("Beta", 1.0, 1.0), record("Alpha", 2.0, 2.0)])
            .unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0].name, "Beta");
        assert_eq!(store.get("Alpha").map(|r| r.revenue_projection), Some(2.0));
        assert!(store.get("Gamma").is_none());
    }

    #[test]
    fn test_from_json_reports_parse_errors() {
        assert!(matches!(
            RecordStore::from_json("[{\"name\": 1}]"),
            Err(RecordStoreError::Parse(_))
        ));
    }
}
