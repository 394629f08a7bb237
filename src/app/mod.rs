use crate::components::todo_insert::TodoInsert;
use crate::components::todo_list::TodoList;
use crate::components::todo_template::TodoTemplate;
use crate::config::ListConfig;
use crate::state::{AppContext, AppState};
use leptos::prelude::*;

#[component]
pub(crate) fn App(
    /// Defaults to [`ListConfig::new`], i.e. built-ins overridden by `window.ENV`.
    #[prop(optional)]
    config: Option<ListConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_else(ListConfig::new);
    log::debug!("list config: {config:?}");

    provide_context(AppContext(AppState::new(&config)));

    view! {
        <TodoTemplate title=config.title.clone()>
            <TodoInsert />
            <TodoList viewport=config.viewport() />
        </TodoTemplate>
    }
}
