//! View helpers deriving display state from lists and todos.
//!
//! Pure functions, no storage access; handlers apply these when rendering.

use crate::TodoList;

/// Returns true when the list has at least one todo and none remain
/// incomplete. An empty list is never completed.
pub fn is_list_completed<L, T>(list: &TodoList<L, T>) -> bool {
    !list.todos.is_empty() && remaining_count(list) == 0
}

/// Number of incomplete todos in the list.
pub fn remaining_count<L, T>(list: &TodoList<L, T>) -> usize {
    list.todos.iter().filter(|todo| !todo.completed).count()
}

/// Total number of todos in the list.
pub fn total_count<L, T>(list: &TodoList<L, T>) -> usize {
    list.todos.len()
}

/// Orders items for display: items failing the predicate first, then items
/// passing it, each bucket keeping its original relative order.
///
/// A stable two-bucket partition, not a comparison sort; applying it twice
/// yields the same sequence as applying it once.
pub fn sort_for_display<I, F>(items: Vec<I>, is_completed: F) -> Vec<I>
where
    F: Fn(&I) -> bool,
{
    let (completed, mut pending): (Vec<I>, Vec<I>) =
        items.into_iter().partition(|item| is_completed(item));
    pending.extend(completed);
    pending
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ListToken, Todo, TodoToken};

    fn list_with(completed_flags: &[bool]) -> TodoList<ListToken, TodoToken> {
        let mut list = TodoList::new(ListToken::generate(), "Test");
        for &completed in completed_flags {
            let mut todo = Todo::new(TodoToken::generate(), "item");
            todo.completed = completed;
            list.todos.push(todo);
        }
        list
    }

    #[test]
    fn empty_list_is_never_completed() {
        assert!(!is_list_completed(&list_with(&[])));
    }

    #[test]
    fn list_is_completed_when_all_todos_are() {
        assert!(is_list_completed(&list_with(&[true, true])));
        assert!(!is_list_completed(&list_with(&[true, false])));
    }

    #[test]
    fn counts() {
        let list = list_with(&[true, false, false]);
        assert_eq!(total_count(&list), 3);
        assert_eq!(remaining_count(&list), 2);
    }

    #[test]
    fn sort_puts_incomplete_first_and_is_stable() {
        let items = vec![("a", true), ("b", false), ("c", true), ("d", false)];
        let sorted = sort_for_display(items, |&(_, done)| done);
        let names: Vec<&str> = sorted.iter().map(|&(name, _)| name).collect();
        assert_eq!(names, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn sort_is_idempotent() {
        let items = vec![("a", true), ("b", false), ("c", true)];
        let once = sort_for_display(items, |&(_, done)| done);
        let twice = sort_for_display(once.clone(), |&(_, done)| done);
        assert_eq!(once, twice);
    }
}
