use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::dto::FiscalRecord;

/// Order of the sidebar list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Name, ascending (pt-BR collation)
    Name,
    /// `definitive_variation2024`, descending
    #[default]
    Variation,
    /// `revenue_projection`, descending
    Revenue,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Variation, SortKey::Revenue, SortKey::Name];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Variation => "variation",
            SortKey::Revenue => "revenue",
        }
    }

    pub fn from_str_opt(value: &str) -> Option<Self> {
        match value {
            "name" => Some(SortKey::Name),
            "variation" => Some(SortKey::Variation),
            "revenue" => Some(SortKey::Revenue),
            _ => None,
        }
    }

    /// Подпись для выпадающего списка сортировки
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Name => "Nome (A-Z)",
            SortKey::Variation => "Maior crescimento",
            SortKey::Revenue => "Maior repasse",
        }
    }
}

/// Filtered and ordered view over the record set.
///
/// Keeps a record iff its name contains `search_term` ignoring case (an empty
/// term keeps everything), then applies a stable sort by `sort_key`, so
/// records with equal keys stay in source order.
pub fn build_view<'a>(
    records: &'a [FiscalRecord],
    search_term: &str,
    sort_key: SortKey,
) -> Vec<&'a FiscalRecord> {
    let needle = search_term.to_lowercase();

    let mut view: Vec<&FiscalRecord> = records
        .iter()
        .filter(|r| needle.is_empty() || r.name.to_lowercase().contains(&needle))
        .collect();

    match sort_key {
        SortKey::Variation => view.sort_by(|a, b| {
            b.definitive_variation2024
                .total_cmp(&a.definitive_variation2024)
        }),
        SortKey::Revenue => {
            view.sort_by(|a, b| b.revenue_projection.total_cmp(&a.revenue_projection))
        }
        SortKey::Name => {
            // ключи считаем один раз, а не на каждое сравнение
            let mut keyed: Vec<(String, &FiscalRecord)> = view
                .into_iter()
                .map(|r| (collation_key(&r.name), r))
                .collect();
            keyed.sort_by(|(ka, a), (kb, b)| compare_names(ka, &a.name, kb, &b.name));
            view = keyed.into_iter().map(|(_, r)| r).collect();
        }
    }

    view
}

/// Accent- and case-insensitive sort key: "Água Fria" -> "agua fria"
pub fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn compare_names(key_a: &str, name_a: &str, key_b: &str, name_b: &str) -> Ordering {
    key_a.cmp(key_b).then_with(|| name_a.cmp(name_b))
}

/// 1-based position of `name` inside `view` (the "state ranking" badge)
pub fn position_in_view(view: &[&FiscalRecord], name: &str) -> Option<usize> {
    view.iter().position(|r| r.name == name).map(|idx| idx + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d404_fiscal_outlook::store::test_support::record;

    fn names(view: &[&FiscalRecord]) -> Vec<String> {
        view.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_variation_descending() {
        let records = vec![record("Alpha", 5.0, 0.0), record("Beta", 10.0, 0.0)];
        let view = build_view(&records, "", SortKey::Variation);
        assert_eq!(names(&view), vec!["Beta", "Alpha"]);
    }

    #[test]
    fn test_revenue_descending() {
        let records = vec![
            record("Alpha", 0.0, 100.0),
            record("Beta", 0.0, 300.0),
            record("Gamma", 0.0, 200.0),
        ];
        let view = build_view(&records, "", SortKey::Revenue);
        assert_eq!(names(&view), vec!["Beta", "Gamma", "Alpha"]);
    }

    #[test]
    fn test_name_collation_ignores_accents_and_case() {
        let records = vec![
            record("Barra", 0.0, 0.0),
            record("Água Fria", 0.0, 0.0),
            record("abaré", 0.0, 0.0),
            record("Ubaíra", 0.0, 0.0),
            record("Teolândia", 0.0, 0.0),
        ];
        let view = build_view(&records, "", SortKey::Name);
        assert_eq!(
            names(&view),
            vec!["abaré", "Água Fria", "Barra", "Teolândia", "Ubaíra"]
        );
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let records = vec![
            record("Santaluz", 1.0, 0.0),
            record("Barro Preto", 2.0, 0.0),
            record("Rio Real", 3.0, 0.0),
        ];
        let view = build_view(&records, "RR", SortKey::Variation);
        assert_eq!(names(&view), vec!["Barro Preto"]);

        let view = build_view(&records, "", SortKey::Variation);
        assert_eq!(view.len(), records.len());

        assert!(build_view(&records, "zzz", SortKey::Name).is_empty());
    }

    #[test]
    fn test_every_match_contains_term() {
        let records = vec![
            record("Cravolândia", 1.0, 0.0),
            record("Catolândia", 2.0, 0.0),
            record("Teolândia", 3.0, 0.0),
            record("Cipó", 4.0, 0.0),
        ];
        for term in ["lând", "LÂND", "c", "ó", "x"] {
            for key in SortKey::ALL {
                for r in build_view(&records, term, key) {
                    assert!(r.name.to_lowercase().contains(&term.to_lowercase()));
                }
            }
        }
    }

    #[test]
    fn test_sort_is_stable_and_deterministic() {
        let records = vec![
            record("Alpha", 1.0, 0.0),
            record("Beta", 1.0, 0.0),
            record("Gamma", 2.0, 0.0),
            record("Delta", 1.0, 0.0),
        ];
        let first = build_view(&records, "", SortKey::Variation);
        let second = build_view(&records, "", SortKey::Variation);
        assert_eq!(names(&first), vec!["Gamma", "Alpha", "Beta", "Delta"]);
        assert_eq!(names(&first), names(&second));

        for pair in first.windows(2) {
            assert!(pair[0].definitive_variation2024 >= pair[1].definitive_variation2024);
        }
    }

    #[test]
    fn test_view_holds_references_into_source() {
        let records = vec![record("Alpha", 1.0, 0.0)];
        let view = build_view(&records, "", SortKey::Name);
        assert!(std::ptr::eq(view[0], &records[0]));
    }

    #[test]
    fn test_position_in_view_is_one_based() {
        let records = vec![record("Alpha", 5.0, 0.0), record("Beta", 10.0, 0.0)];
        let view = build_view(&records, "", SortKey::Variation);
        assert_eq!(position_in_view(&view, "Beta"), Some(1));
        assert_eq!(position_in_view(&view, "Alpha"), Some(2));
        assert_eq!(position_in_view(&view, "Gamma"), None);
    }

    #[test]
    fn test_sort_key_round_trips_through_query_values() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::from_str_opt(key.as_str()), Some(key));
        }
        assert_eq!(SortKey::default(), SortKey::Variation);
        assert_eq!(SortKey::from_str_opt("population"), None);
    }
}
