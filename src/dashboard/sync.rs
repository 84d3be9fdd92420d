use chrono::{DateTime, Local};

use crate::error::BoardResult;
use crate::logging::DiagnosticSink;

/// Client-side copy of a server-owned list.
///
/// A successful fetch replaces the held items verbatim. A failed fetch leaves
/// them untouched and is reported once under `label`.
#[derive(Debug, Clone)]
pub struct ListSync<T> {
    label: &'static str,
    items: Vec<T>,
    last_synced: Option<DateTime<Local>>,
}

impl<T> ListSync<T> {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            items: Vec::new(),
            last_synced: None,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn last_synced(&self) -> Option<DateTime<Local>> {
        self.last_synced
    }

    /// Returns whether the held list was replaced.
    pub fn apply(&mut self, result: BoardResult<Vec<T>>, sink: &dyn DiagnosticSink) -> bool {
        match result {
            Ok(items) => {
                self.items = items;
                self.last_synced = Some(Local::now());
                true
            }
            Err(e) => {
                sink.report(self.label, &e);
                false
            }
        }
    }

    /// Drop every held item matching `pred`, keeping the order of the rest.
    pub fn remove_where<F>(&mut self, mut pred: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.items.len();
        self.items.retain(|item| !pred(item));
        before - self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;
    use crate::logging::MemorySink;

    #[test]
    fn test_success_replaces_verbatim() {
        let sink = MemorySink::new();
        let mut list = ListSync::new("numbers");

        assert!(list.apply(Ok(vec![3, 1, 2]), &sink));
        assert_eq!(list.items(), &[3, 1, 2]);
        assert!(list.last_synced().is_some());

        assert!(list.apply(Ok(vec![9]), &sink));
        assert_eq!(list.items(), &[9]);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_failure_keeps_stale_items() {
        let sink = MemorySink::new();
        let mut list = ListSync::new("numbers");
        list.apply(Ok(vec![1, 2]), &sink);

        let failed = list.apply(
            Err(BoardError::HttpStatus {
                status: 503,
                endpoint: "/x".to_string(),
            }),
            &sink,
        );

        assert!(!failed);
        assert_eq!(list.items(), &[1, 2]);
        assert_eq!(sink.len(), 1);
        assert_eq!(sink.entries()[0].label, "numbers");
    }

    #[test]
    fn test_remove_where_preserves_order() {
        let sink = MemorySink::new();
        let mut list = ListSync::new("numbers");
        list.apply(Ok(vec![1, 2, 3, 2, 4]), &sink);

        assert_eq!(list.remove_where(|n| *n == 2), 2);
        assert_eq!(list.items(), &[1, 3, 4]);
        assert_eq!(list.remove_where(|n| *n == 99), 0);
    }
}
