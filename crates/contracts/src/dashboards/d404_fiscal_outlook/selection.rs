use super::dto::FiscalRecord;

/// Направление навигации по списку
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Holds the currently selected record, if any.
///
/// The selection is keyed by `name`. Navigation is computed against whatever
/// view the caller passes in, so a selection survives search/sort changes even
/// when the record is no longer visible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionController {
    current: Option<FiscalRecord>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&FiscalRecord> {
        self.current.as_ref()
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.current.as_ref().is_some_and(|r| r.name == name)
    }

    /// No existence check: any record may be selected
    pub fn select(&mut self, record: FiscalRecord) {
        self.current = Some(record);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Record that `next`/`previous` would move to, without moving.
    ///
    /// - nothing selected or empty view: `None`
    /// - selection inside the view: neighbour at `(idx ± 1) mod len`
    /// - selection filtered out of the view: first element for `Next`,
    ///   last element for `Previous`
    pub fn neighbour<'a>(
        &self,
        view: &[&'a FiscalRecord],
        direction: Direction,
    ) -> Option<&'a FiscalRecord> {
        let current = self.current.as_ref()?;
        if view.is_empty() {
            return None;
        }

        let len = view.len();
        let target = match view.iter().position(|r| r.name == current.name) {
            Some(idx) => match direction {
                Direction::Next => (idx + 1) % len,
                Direction::Previous => (idx + len - 1) % len,
            },
            None => match direction {
                Direction::Next => 0,
                Direction::Previous => len - 1,
            },
        };

        Some(view[target])
    }

    /// Move the selection one step; returns the newly selected record
    pub fn step(&mut self, view: &[&FiscalRecord], direction: Direction) -> Option<&FiscalRecord> {
        let target = self.neighbour(view, direction)?.clone();
        self.current = Some(target);
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d404_fiscal_outlook::store::test_support::record;
    use crate::dashboards::d404_fiscal_outlook::view::{build_view, SortKey};

    fn selected_name(selection: &SelectionController) -> Option<&str> {
        selection.current().map(|r| r.name.as_str())
    }

    #[test]
    fn test_next_wraps_around() {
        let records = vec![record("Alpha", 5.0, 0.0), record("Beta", 10.0, 0.0)];
        let view = build_view(&records, "", SortKey::Variation);

        let mut selection = SelectionController::new();
        selection.select(records[1].clone());

        selection.step(&view, Direction::Next);
        assert_eq!(selected_name(&selection), Some("Alpha"));
        selection.step(&view, Direction::Next);
        assert_eq!(selected_name(&selection), Some("Beta"));
    }

    #[test]
    fn test_previous_wraps_around() {
        let records = vec![
            record("Alpha", 3.0, 0.0),
            record("Beta", 2.0, 0.0),
            record("Gamma", 1.0, 0.0),
        ];
        let view = build_view(&records, "", SortKey::Variation);

        let mut selection = SelectionController::new();
        selection.select(records[0].clone());
        selection.step(&view, Direction::Previous);
        assert_eq!(selected_name(&selection), Some("Gamma"));
    }

    #[test]
    fn test_next_n_times_returns_to_start_and_previous_inverts_next() {
        let records: Vec<FiscalRecord> = (0..7)
            .map(|i| record(&format!("M{i}"), f64::from(i) * 1.5, 0.0))
            .collect();
        let view = build_view(&records, "", SortKey::Variation);

        for start in &view {
            let mut selection = SelectionController::new();
            selection.select((*start).clone());
            for _ in 0..view.len() {
                selection.step(&view, Direction::Next);
            }
            assert_eq!(selected_name(&selection), Some(start.name.as_str()));

            selection.step(&view, Direction::Next);
            selection.step(&view, Direction::Previous);
            assert_eq!(selected_name(&selection), Some(start.name.as_str()));
        }
    }

    #[test]
    fn test_single_element_view_stays_put() {
        let records = vec![record("Solo", 1.0, 0.0)];
        let view = build_view(&records, "", SortKey::Name);
        let mut selection = SelectionController::new();
        selection.select(records[0].clone());
        selection.step(&view, Direction::Next);
        assert_eq!(selected_name(&selection), Some("Solo"));
        selection.step(&view, Direction::Previous);
        assert_eq!(selected_name(&selection), Some("Solo"));
    }

    #[test]
    fn test_navigation_without_selection_is_noop() {
        let records = vec![record("Alpha", 1.0, 0.0)];
        let view = build_view(&records, "", SortKey::Name);
        let mut selection = SelectionController::new();
        assert!(selection.step(&view, Direction::Next).is_none());
        assert!(selection.current().is_none());
    }

    #[test]
    fn test_filtered_out_selection_falls_back_to_view_ends() {
        let records = vec![
            record("Santaluz", 3.0, 0.0),
            record("Teolândia", 2.0, 0.0),
            record("Catolândia", 1.0, 0.0),
        ];
        let narrowed = build_view(&records, "lând", SortKey::Variation);

        let mut selection = SelectionController::new();
        selection.select(records[0].clone());
        assert_eq!(
            selection.neighbour(&narrowed, Direction::Next).map(|r| r.name.as_str()),
            Some("Teolândia")
        );
        assert_eq!(
            selection.neighbour(&narrowed, Direction::Previous).map(|r| r.name.as_str()),
            Some("Catolândia")
        );
    }

    #[test]
    fn test_empty_view_keeps_selection() {
        let records = vec![record("Alpha", 1.0, 0.0)];
        let empty = build_view(&records, "zzz", SortKey::Name);
        let mut selection = SelectionController::new();
        selection.select(records[0].clone());
        assert!(selection.step(&empty, Direction::Next).is_none());
        assert_eq!(selected_name(&selection), Some("Alpha"));
    }

    #[test]
    fn test_clear() {
        let mut selection = SelectionController::new();
        selection.select(record("Alpha", 1.0, 0.0));
        assert!(selection.is_selected("Alpha"));
        selection.clear();
        assert!(selection.current().is_none());
        assert!(!selection.is_selected("Alpha"));
    }
}
