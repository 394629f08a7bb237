use icons::Plus;
use leptos::prelude::*;

use crate::components::ui::{Button, ButtonSize, Input};
use crate::state::AppContext;

/// Draft field plus add button. Emits the trimmed text and clears itself;
/// blank drafts are left in place and emit nothing.
#[component]
pub(crate) fn TodoInsert() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let on_insert = app_state.0.on_insert();
    let draft: RwSignal<String> = RwSignal::new(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let text = draft.get_untracked().trim().to_string();
        if text.is_empty() {
            return;
        }

        on_insert.run(text);
        draft.set(String::new());
    };

    view! {
        <form data-name="TodoInsert" class="flex items-center gap-2 border-b bg-muted p-3" on:submit=on_submit>
            <Input
                class="bg-background"
                placeholder="할 일을 입력하세요"
                bind_value=draft
                autofocus=true
            />
            <Button size=ButtonSize::Icon attr:aria-label="Add">
                <Plus />
            </Button>
        </form>
    }
}
