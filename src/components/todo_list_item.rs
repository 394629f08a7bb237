use std::sync::Arc;

use icons::X;
use leptos::prelude::*;
use tw_merge::tw_merge;

use crate::components::ui::{Button, ButtonSize, ButtonVariant, Checkbox};
use crate::models::Todo;

/// One row: checkbox + text toggles, the trailing button removes.
#[component]
pub(crate) fn TodoListItem(
    todo: Arc<Todo>,
    index: usize,
    row_key: usize,
    #[prop(into)] style: String,
    on_remove: Callback<u32>,
    on_toggle: Callback<u32>,
) -> impl IntoView {
    let id = todo.id;
    let checked = todo.checked;

    // Zebra striping on even rows (1-based), divider between rows.
    let stripe = if index % 2 == 1 { "bg-muted/50" } else { "bg-background" };
    let row_class = tw_merge!("flex items-center gap-2 border-b px-4", stripe);
    let text_class = if checked {
        "truncate text-muted-foreground line-through"
    } else {
        "truncate"
    };

    view! {
        <div data-name="TodoListItem" data-id=id.to_string() data-key=row_key.to_string() role="listitem" class=row_class style=style>
            <div
                data-name="TodoListItemToggle"
                role="checkbox"
                aria-checked=checked.to_string()
                tabindex="0"
                class="flex min-w-0 flex-1 cursor-pointer items-center gap-3"
                on:click=move |_| on_toggle.run(id)
            >
                <Checkbox checked=checked />
                <span class=text_class>{todo.text.clone()}</span>
            </div>
            <Button
                variant=ButtonVariant::Destructive
                size=ButtonSize::IconSm
                attr:aria-label="Remove"
                on:click=move |_| on_remove.run(id)
            >
                <X />
            </Button>
        </div>
    }
}
