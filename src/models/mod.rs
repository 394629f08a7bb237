use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::sync::Arc;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Todo {
    pub id: u32,
    pub text: String,
    pub checked: bool,
}

impl Todo {
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            checked: false,
        }
    }

    /// Copy of this entry with `checked` flipped.
    pub fn toggled(&self) -> Self {
        Self {
            checked: !self.checked,
            ..self.clone()
        }
    }
}

/// Ordered, immutable collection of todos.
///
/// Cloning is cheap. Every mutation builds a new `Todos`; entries that are not
/// touched keep their `Arc` so row memos can compare them without walking
/// the text.
#[derive(Clone, Debug, Default)]
pub(crate) struct Todos(Arc<Vec<Arc<Todo>>>);

impl Todos {
    pub fn new(items: Vec<Arc<Todo>>) -> Self {
        Self(Arc::new(items))
    }

    /// Identity check, `true` when both handles point at the same sequence.
    pub fn same(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    pub fn position(&self, id: u32) -> Option<usize> {
        self.0.iter().position(|t| t.id == id)
    }
}

impl Deref for Todos {
    type Target = [Arc<Todo>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for Todos {
    fn eq(&self, other: &Self) -> bool {
        Self::same(self, other) || self.0 == other.0
    }
}

impl Eq for Todos {}

impl FromIterator<Todo> for Todos {
    fn from_iter<I: IntoIterator<Item = Todo>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Arc::new).collect())
    }
}

/// Placeholder run used to put the list under load on cold start.
pub(crate) fn create_bulk_todos(count: u32) -> Todos {
    (1..=count).map(|i| Todo::new(i, format!("할 일 {i}"))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bulk_todos_are_numbered_from_one() {
        let todos = create_bulk_todos(2500);
        assert_eq!(todos.len(), 2500);
        assert_eq!(todos[0].id, 1);
        assert_eq!(todos[2499].id, 2500);
        assert_eq!(todos[41].text, "할 일 42");
        assert!(todos.iter().all(|t| !t.checked));
    }

    #[test]
    fn test_bulk_todos_empty() {
        assert!(create_bulk_todos(0).is_empty());
    }

    #[test]
    fn test_toggled_copies_text_and_id() {
        let t = Todo::new(7, "buy milk");
        let flipped = t.toggled();
        assert_eq!(flipped.id, 7);
        assert_eq!(flipped.text, "buy milk");
        assert!(flipped.checked);
        assert!(!flipped.toggled().checked);
    }

    #[test]
    fn test_todos_equality_is_by_value() {
        let a = create_bulk_todos(3);
        let b = create_bulk_todos(3);
        assert!(!Todos::same(&a, &b));
        assert_eq!(a, b);

        let c = a.clone();
        assert!(Todos::same(&a, &c));
    }

    #[test]
    fn test_todo_json_contract() {
        let t: Todo = serde_json::from_str(r#"{"id":1,"text":"a","checked":true}"#)
            .expect("todo should parse");
        assert_eq!(t.id, 1);
        assert!(t.checked);
    }
}
