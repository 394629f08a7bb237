use icons::Check;
use leptos::prelude::*;
use tw_merge::tw_merge;

/// Presentational checkbox; clicks are handled by the caller.
#[component]
pub fn Checkbox(checked: bool, #[prop(into, optional)] class: String) -> impl IntoView {
    let merged_class = tw_merge!(
        "inline-flex size-4 shrink-0 items-center justify-center rounded-[4px] border border-input shadow-xs transition-colors",
        "data-[state=checked]:border-primary data-[state=checked]:bg-primary data-[state=checked]:text-primary-foreground",
        class
    );

    view! {
        <span
            data-name="Checkbox"
            data-state=if checked { "checked" } else { "unchecked" }
            class=merged_class
        >
            {checked.then(|| view! { <Check class="size-3.5" /> })}
        </span>
    }
}
