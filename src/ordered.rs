//! Ordered List Operations
//!
//! Pure reducer behind the list editors. Every operation reads the current
//! collection and returns a fresh one whose `order` values match position;
//! `None` means nothing changed and the owner should not be notified.

/// An element of an ordered collection
pub trait OrderedItem: Clone {
    /// Partial update applied by `update_item`
    type Patch;

    fn order(&self) -> usize;

    fn set_order(&mut self, order: usize);

    /// New item with domain defaults at the given position
    fn blank(order: usize) -> Self;

    /// Shallow merge; must never touch `order`
    fn apply(&mut self, patch: Self::Patch);
}

/// One user-driven mutation of an ordered collection
#[derive(Debug, Clone, PartialEq)]
pub enum ListEdit<P> {
    Add,
    Remove(usize),
    Update(usize, P),
    Reorder {
        source: usize,
        /// `None` when the drag ended without a drop target
        destination: Option<usize>,
    },
}

impl<P> ListEdit<P> {
    /// Whether items change position, so per-position UI state no longer
    /// belongs to the item now shown there
    pub fn moves_items(&self) -> bool {
        matches!(self, ListEdit::Remove(_) | ListEdit::Reorder { .. })
    }
}

/// Rewrite `order` from array position (0..N-1)
pub fn renumber<T: OrderedItem>(items: &mut [T]) {
    for (position, item) in items.iter_mut().enumerate() {
        item.set_order(position);
    }
}

/// Display order: stable sort by stored `order`, then renumber.
///
/// Duplicate or gapped `order` values from the owner collapse into a
/// contiguous sequence, ties keeping their input order.
pub fn normalize<T: OrderedItem>(items: &[T]) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by_key(|item| item.order());
    renumber(&mut sorted);
    sorted
}

/// Append a blank item at the end
pub fn add_item<T: OrderedItem>(items: &[T]) -> Vec<T> {
    let mut next = items.to_vec();
    next.push(T::blank(items.len()));
    next
}

/// Remove the item at `index`, shifting later items down by one
pub fn remove_item<T: OrderedItem>(items: &[T], index: usize) -> Option<Vec<T>> {
    if index >= items.len() {
        log::warn!("[LIST] Ignoring remove of stale index {} (len {})", index, items.len());
        return None;
    }
    let mut next = items.to_vec();
    next.remove(index);
    renumber(&mut next);
    Some(next)
}

/// Merge `patch` into the item at `index`, leaving every other item as is
pub fn update_item<T: OrderedItem>(items: &[T], index: usize, patch: T::Patch) -> Option<Vec<T>> {
    if index >= items.len() {
        log::warn!("[LIST] Ignoring update of stale index {} (len {})", index, items.len());
        return None;
    }
    let mut next = items.to_vec();
    next[index].apply(patch);
    Some(next)
}

/// Move the item at `source` to `destination` and renumber everything
pub fn reorder_items<T: OrderedItem>(items: &[T], source: usize, destination: Option<usize>) -> Option<Vec<T>> {
    let destination = destination?;
    if source == destination {
        return None;
    }
    if source >= items.len() || destination >= items.len() {
        log::warn!(
            "[LIST] Ignoring reorder {} -> {} outside list of {}",
            source,
            destination,
            items.len()
        );
        return None;
    }
    let mut next = items.to_vec();
    let moved = next.remove(source);
    next.insert(destination, moved);
    renumber(&mut next);
    Some(next)
}

/// Dispatch one edit
pub fn apply_edit<T: OrderedItem>(items: &[T], edit: ListEdit<T::Patch>) -> Option<Vec<T>> {
    match edit {
        ListEdit::Add => Some(add_item(items)),
        ListEdit::Remove(index) => remove_item(items, index),
        ListEdit::Update(index, patch) => update_item(items, index, patch),
        ListEdit::Reorder { source, destination } => reorder_items(items, source, destination),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CustomField, FieldPatch, Task, TaskPatch, TaskStatus};
    use pretty_assertions::assert_eq;

    fn task(label: &str, order: usize) -> Task {
        let mut task = Task::blank(order);
        task.label = label.to_string();
        task
    }

    fn tasks(labels: &[&str]) -> Vec<Task> {
        labels.iter().enumerate().map(|(i, label)| task(label, i)).collect()
    }

    fn summary(items: &[Task]) -> Vec<(String, usize)> {
        items.iter().map(|t| (t.label.clone(), t.order)).collect()
    }

    fn pairs(expected: &[(&str, usize)]) -> Vec<(String, usize)> {
        expected.iter().map(|(label, order)| (label.to_string(), *order)).collect()
    }

    fn orders<T: OrderedItem>(items: &[T]) -> Vec<usize> {
        items.iter().map(|item| item.order()).collect()
    }

    #[test]
    fn test_add_appends_blank_task() {
        let next = add_item(&tasks(&["A", "B"]));
        assert_eq!(summary(&next), pairs(&[("A", 0), ("B", 1), ("", 2)]));
        assert_eq!(next[2].status, TaskStatus::Todo);
    }

    #[test]
    fn test_repeated_add_from_empty() {
        let mut items: Vec<Task> = Vec::new();
        for _ in 0..6 {
            items = add_item(&items);
        }
        assert_eq!(items.len(), 6);
        assert_eq!(orders(&items), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_add_custom_field_defaults() {
        let next = add_item::<CustomField>(&[]);
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].order, 0);
        assert!(next[0].display_name.is_empty());
        assert_eq!(next[0].default_value, None);
    }

    #[test]
    fn test_remove_middle() {
        let next = remove_item(&tasks(&["A", "B", "C"]), 1).unwrap();
        assert_eq!(summary(&next), pairs(&[("A", 0), ("C", 1)]));
    }

    #[test]
    fn test_remove_each_position_keeps_relative_order() {
        let items = tasks(&["A", "B", "C", "D"]);
        for index in 0..items.len() {
            let next = remove_item(&items, index).unwrap();
            let mut expected: Vec<String> = items.iter().map(|t| t.label.clone()).collect();
            expected.remove(index);
            assert_eq!(next.iter().map(|t| t.label.clone()).collect::<Vec<_>>(), expected);
            assert_eq!(orders(&next), vec![0, 1, 2]);
        }
    }

    #[test]
    fn test_remove_stale_index_is_noop() {
        let items = tasks(&["A"]);
        assert_eq!(remove_item(&items, 1), None);
        assert_eq!(summary(&items), pairs(&[("A", 0)]));
    }

    #[test]
    fn test_reorder_first_to_last() {
        let next = reorder_items(&tasks(&["A", "B", "C"]), 0, Some(2)).unwrap();
        assert_eq!(summary(&next), pairs(&[("B", 0), ("C", 1), ("A", 2)]));
    }

    #[test]
    fn test_reorder_last_to_first() {
        let next = reorder_items(&tasks(&["A", "B", "C"]), 2, Some(0)).unwrap();
        assert_eq!(summary(&next), pairs(&[("C", 0), ("A", 1), ("B", 2)]));
    }

    #[test]
    fn test_reorder_moves_exactly_one_item() {
        let items = tasks(&["A", "B", "C", "D", "E"]);
        for source in 0..items.len() {
            for destination in 0..items.len() {
                if source == destination {
                    continue;
                }
                let next = reorder_items(&items, source, Some(destination)).unwrap();
                assert_eq!(next[destination].label, items[source].label);
                assert_eq!(orders(&next), vec![0, 1, 2, 3, 4]);

                let rest: Vec<&str> = next
                    .iter()
                    .filter(|t| t.label != items[source].label)
                    .map(|t| t.label.as_str())
                    .collect();
                let expected: Vec<&str> = items
                    .iter()
                    .filter(|t| t.label != items[source].label)
                    .map(|t| t.label.as_str())
                    .collect();
                assert_eq!(rest, expected);
            }
        }
    }

    #[test]
    fn test_reorder_same_index_or_cancelled_is_noop() {
        let items = tasks(&["A", "B", "C"]);
        assert_eq!(reorder_items(&items, 1, Some(1)), None);
        assert_eq!(reorder_items(&items, 1, None), None);
        assert_eq!(reorder_items(&items, 0, Some(3)), None);
    }

    #[test]
    fn test_update_changes_only_patched_key() {
        let items = tasks(&["A", "B", "C"]);
        let next = update_item(&items, 1, TaskPatch::label("Bee")).unwrap();
        assert_eq!(summary(&next), pairs(&[("A", 0), ("Bee", 1), ("C", 2)]));
        assert_eq!(next[1].status, items[1].status);
        assert_eq!(next[0], items[0]);
        assert_eq!(next[2], items[2]);
    }

    #[test]
    fn test_update_keeps_order_even_when_out_of_sequence() {
        let items = vec![task("A", 4)];
        let next = update_item(&items, 0, TaskPatch::status(TaskStatus::Complete)).unwrap();
        assert_eq!(next[0].order, 4);
        assert_eq!(next[0].status, TaskStatus::Complete);
    }

    #[test]
    fn test_update_field_leaves_neighbours() {
        let fields = add_item(&add_item::<CustomField>(&[]));
        let next = update_item(&fields, 0, FieldPatch::required(true)).unwrap();
        assert!(next[0].required);
        assert!(!next[1].required);
        assert_eq!(next[1], fields[1]);
    }

    #[test]
    fn test_operations_do_not_touch_input() {
        let items = tasks(&["A", "B", "C"]);
        let before = items.clone();
        let _ = reorder_items(&items, 0, Some(2));
        let _ = remove_item(&items, 0);
        let _ = update_item(&items, 0, TaskPatch::label("Z"));
        assert_eq!(items, before);
    }

    #[test]
    fn test_normalize_sorts_and_renumbers() {
        let items = vec![task("C", 9), task("A", 1), task("B", 4)];
        assert_eq!(summary(&normalize(&items)), pairs(&[("A", 0), ("B", 1), ("C", 2)]));
    }

    #[test]
    fn test_normalize_duplicate_orders_keep_input_order() {
        let items = vec![task("X", 1), task("Y", 0), task("Z", 1)];
        assert_eq!(summary(&normalize(&items)), pairs(&[("Y", 0), ("X", 1), ("Z", 2)]));
    }

    #[test]
    fn test_apply_edit_dispatch() {
        let items = tasks(&["A", "B"]);
        assert_eq!(apply_edit(&items, ListEdit::Add).map(|v| v.len()), Some(3));
        assert_eq!(
            apply_edit(&items, ListEdit::Reorder { source: 0, destination: None }),
            None
        );
        let next = apply_edit(&items, ListEdit::Update(0, TaskPatch::label("a"))).unwrap();
        assert_eq!(next[0].label, "a");
        let next = apply_edit(&items, ListEdit::Remove(0)).unwrap();
        assert_eq!(summary(&next), pairs(&[("B", 0)]));
    }

    #[test]
    fn test_only_remove_and_reorder_move_items() {
        assert!(ListEdit::<TaskPatch>::Remove(1).moves_items());
        assert!(ListEdit::<TaskPatch>::Reorder { source: 1, destination: Some(0) }.moves_items());
        // Appending and editing in place keep every item at its position
        assert!(!ListEdit::<TaskPatch>::Add.moves_items());
        assert!(!ListEdit::Update(0, TaskPatch::label("a")).moves_items());
    }
}
