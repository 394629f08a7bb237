use leptos::prelude::*;

use crate::components::todo_list_item::TodoListItem;
use crate::components::virtual_list::{RowProps, Viewport, VirtualList};
use crate::state::AppContext;

/// Binds the collection from [`AppContext`] to [`VirtualList`].
///
/// Each realised row reads its entry through a memo, so a change elsewhere in
/// the collection does not rebuild it; only rows whose `Arc<Todo>` changed
/// re-render.
#[component]
pub(crate) fn TodoList(viewport: Viewport) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let todos = app_state.0.todos();
    let on_remove = app_state.0.on_remove();
    let on_toggle = app_state.0.on_toggle();

    let row_count = Memo::new(move |_| todos.with(|t| t.len()));

    let row_renderer = move |row: RowProps| {
        let RowProps { index, key, style } = row;
        let todo = Memo::new(move |_| todos.with(|t| t.get(index).cloned()));

        view! {
            {move || {
                todo.get().map(|todo| {
                    view! {
                        <TodoListItem
                            todo=todo
                            index=index
                            row_key=key
                            style=style.clone()
                            on_remove=on_remove
                            on_toggle=on_toggle
                        />
                    }
                })
            }}
        }
        .into_any()
    };

    view! { <VirtualList class="TodoList" row_count=row_count viewport=viewport row_renderer=row_renderer /> }
}
