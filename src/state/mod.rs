use crate::config::ListConfig;
use crate::models::{create_bulk_todos, Todo, Todos};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A change to the todo collection.
///
/// Mirrors the `{ "type": ..., ... }` action shape; any tag this build does not
/// know decodes to [`Action::Unknown`], which leaves the collection untouched.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, strum::AsRefStr)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum Action {
    Insert { todo: Todo },
    Remove { id: u32 },
    Toggle { id: u32 },
    #[serde(other)]
    Unknown,
}

/// Applies `action` to `todos` and returns the resulting collection.
///
/// Total over its input: a missing id returns `todos` itself (same identity).
pub(crate) fn reduce(todos: &Todos, action: &Action) -> Todos {
    match action {
        Action::Insert { todo } => {
            let mut next = Vec::with_capacity(todos.len() + 1);
            next.extend(todos.iter().cloned());
            next.push(Arc::new(todo.clone()));
            Todos::new(next)
        }
        Action::Remove { id } => match todos.position(*id) {
            Some(_) => Todos::new(todos.iter().filter(|t| t.id != *id).cloned().collect()),
            None => todos.clone(),
        },
        Action::Toggle { id } => match todos.position(*id) {
            Some(_) => Todos::new(
                todos
                    .iter()
                    .map(|t| {
                        if t.id == *id {
                            Arc::new(t.toggled())
                        } else {
                            Arc::clone(t)
                        }
                    })
                    .collect(),
            ),
            None => todos.clone(),
        },
        Action::Unknown => todos.clone(),
    }
}

/// Authoritative collection plus the id counter for new entries.
#[derive(Clone, Debug)]
pub(crate) struct TodoStore {
    todos: Todos,
    next_id: u32,
}

impl TodoStore {
    pub fn new(todos: Todos) -> Self {
        let next_id = todos.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Self { todos, next_id }
    }

    pub fn seeded(count: u32) -> Self {
        Self::new(create_bulk_todos(count))
    }

    pub fn todos(&self) -> &Todos {
        &self.todos
    }

    pub fn dispatch(&mut self, action: Action) {
        self.todos = reduce(&self.todos, &action);
        log::debug!("{} -> {} todos", action.as_ref(), self.todos.len());
    }

    /// Creates a todo from `draft`. Blank drafts are ignored.
    ///
    /// Returns the id assigned to the new entry.
    pub fn submit(&mut self, draft: &str) -> Option<u32> {
        let text = draft.trim();
        if text.is_empty() {
            log::debug!("ignoring blank submission");
            return None;
        }

        let id = self.next_id;
        self.dispatch(Action::Insert {
            todo: Todo::new(id, text),
        });
        self.next_id += 1;
        Some(id)
    }

    pub fn remove(&mut self, id: u32) {
        self.dispatch(Action::Remove { id });
    }

    pub fn toggle(&mut self, id: u32) {
        self.dispatch(Action::Toggle { id });
    }
}

/// Reactive handle on the store. Components get derived views of it, never the
/// signal itself.
#[derive(Clone, Copy)]
pub(crate) struct AppState {
    pub store: RwSignal<TodoStore>,
}

impl AppState {
    pub fn new(config: &ListConfig) -> Self {
        log::info!("seeding {} todos", config.seed_count);
        Self {
            store: RwSignal::new(TodoStore::seeded(config.seed_count)),
        }
    }

    /// Read-only view of the collection; only notifies when the value changes.
    pub fn todos(&self) -> Signal<Todos> {
        let store = self.store;
        Memo::new(move |_| store.with(|s| s.todos().clone())).into()
    }

    pub fn on_insert(&self) -> Callback<String> {
        let store = self.store;
        Callback::new(move |draft: String| {
            store.update(|s| {
                s.submit(&draft);
            })
        })
    }

    pub fn on_remove(&self) -> Callback<u32> {
        let store = self.store;
        Callback::new(move |id: u32| store.update(|s| s.remove(id)))
    }

    pub fn on_toggle(&self) -> Callback<u32> {
        let store = self.store;
        Callback::new(move |id: u32| store.update(|s| s.toggle(id)))
    }
}

#[derive(Clone)]
pub(crate) struct AppContext(pub AppState);

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Todos {
        create_bulk_todos(5)
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let todos = sample();
        let out = reduce(&todos, &Action::Remove { id: 99 });
        assert!(Todos::same(&todos, &out));
    }

    #[test]
    fn test_toggle_missing_id_is_noop() {
        let todos = sample();
        let out = reduce(&todos, &Action::Toggle { id: 0 });
        assert!(Todos::same(&todos, &out));
    }

    #[test]
    fn test_insert_then_remove_restores_collection() {
        let todos = sample();
        let inserted = reduce(
            &todos,
            &Action::Insert {
                todo: Todo::new(6, "buy milk"),
            },
        );
        assert_eq!(inserted.len(), 6);
        assert_eq!(inserted[5].text, "buy milk");

        let removed = reduce(&inserted, &Action::Remove { id: 6 });
        assert_eq!(removed, todos);
    }

    #[test]
    fn test_double_toggle_restores_value_not_identity() {
        let todos = sample();
        let once = reduce(&todos, &Action::Toggle { id: 3 });
        assert!(once[2].checked);
        assert_eq!(once.iter().filter(|t| t.checked).count(), 1);

        let twice = reduce(&once, &Action::Toggle { id: 3 });
        assert_eq!(twice, todos);
        assert!(!Todos::same(&twice, &todos));
        assert!(!Arc::ptr_eq(&twice[2], &todos[2]));
    }

    #[test]
    fn test_toggle_shares_untouched_entries() {
        let todos = sample();
        let out = reduce(&todos, &Action::Toggle { id: 2 });
        for (i, (before, after)) in todos.iter().zip(out.iter()).enumerate() {
            if i == 1 {
                assert!(!Arc::ptr_eq(before, after));
            } else {
                assert!(Arc::ptr_eq(before, after));
            }
        }
    }

    #[test]
    fn test_insert_shares_existing_entries() {
        let todos = sample();
        let out = reduce(
            &todos,
            &Action::Insert {
                todo: Todo::new(6, "x"),
            },
        );
        assert!(todos.iter().zip(out.iter()).all(|(a, b)| Arc::ptr_eq(a, b)));
    }

    #[test]
    fn test_insert_does_not_check_uniqueness() {
        let todos = sample();
        let out = reduce(
            &todos,
            &Action::Insert {
                todo: Todo::new(1, "dup"),
            },
        );
        assert_eq!(out.len(), 6);
        assert_eq!(out.iter().filter(|t| t.id == 1).count(), 2);
    }

    #[test]
    fn test_unknown_action_is_noop() {
        let todos = sample();
        let action: Action =
            serde_json::from_str(r#"{"type":"CLEAR"}"#).expect("unknown tag should decode");
        assert_eq!(action, Action::Unknown);
        assert!(Todos::same(&todos, &reduce(&todos, &action)));
    }

    #[test]
    fn test_action_json_contract() {
        let action: Action = serde_json::from_str(
            r#"{"type":"INSERT","todo":{"id":1,"text":"todo","checked":false}}"#,
        )
        .expect("insert should decode");
        assert_eq!(
            action,
            Action::Insert {
                todo: Todo::new(1, "todo")
            }
        );

        let v = serde_json::to_value(Action::Toggle { id: 4 }).expect("should serialize");
        assert_eq!(v["type"], "TOGGLE");
        assert_eq!(v["id"], 4);
        assert_eq!(Action::Remove { id: 1 }.as_ref(), "REMOVE");
    }

    #[test]
    fn test_store_counter_starts_after_seed() {
        let store = TodoStore::seeded(2500);
        assert_eq!(store.next_id, 2501);
        assert_eq!(TodoStore::seeded(0).next_id, 1);
    }

    #[test]
    fn test_store_end_to_end() {
        let mut store = TodoStore::seeded(2500);

        assert_eq!(store.submit("buy milk"), Some(2501));
        assert_eq!(store.todos().len(), 2501);
        let last = store.todos().last().expect("should have a last todo");
        assert_eq!(**last, Todo::new(2501, "buy milk"));
        assert_eq!(store.next_id, 2502);

        store.toggle(1);
        assert!(store.todos()[0].checked);
        assert_eq!(store.todos().len(), 2501);

        store.remove(1);
        assert_eq!(store.todos().len(), 2500);
        assert!(store.todos().position(1).is_none());
    }

    #[test]
    fn test_store_submit_trims() {
        let mut store = TodoStore::seeded(0);
        assert_eq!(store.submit("  walk dog \n"), Some(1));
        assert_eq!(store.todos()[0].text, "walk dog");
    }

    #[test]
    fn test_store_blank_submission_is_noop() {
        let mut store = TodoStore::seeded(3);
        let before = store.todos().clone();

        assert_eq!(store.submit(""), None);
        assert_eq!(store.submit("   \t"), None);

        assert!(Todos::same(&before, store.todos()));
        assert_eq!(store.next_id, 4);
    }

    #[test]
    fn test_todos_signal_skips_unchanged_collection() {
        use leptos::reactive::owner::Owner;
        use std::sync::atomic::{AtomicUsize, Ordering};

        let owner = Owner::new();
        owner.set();

        let state = AppState::new(&ListConfig {
            seed_count: 3,
            ..ListConfig::default()
        });
        let todos = state.todos();

        let runs = Arc::new(AtomicUsize::new(0));
        let checked = Memo::new({
            let runs = Arc::clone(&runs);
            move |_| {
                runs.fetch_add(1, Ordering::SeqCst);
                todos.with(|t| t.iter().filter(|t| t.checked).count())
            }
        });

        assert_eq!(checked.get_untracked(), 0);
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        state.on_remove().run(99);
        state.on_toggle().run(42);
        assert_eq!(checked.get_untracked(), 0);
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        state.on_toggle().run(1);
        assert_eq!(checked.get_untracked(), 1);
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_store_ids_stay_unique_after_remove() {
        let mut store = TodoStore::seeded(2);
        store.remove(2);
        assert_eq!(store.submit("c"), Some(3));
        assert_eq!(store.submit("d"), Some(4));
    }
}
