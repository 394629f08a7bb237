use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Card, div, "bg-card text-card-foreground flex flex-col overflow-hidden rounded-xl border shadow-sm"}
    clx! {CardHeader, div, "flex items-center justify-center bg-primary px-6 py-4 text-primary-foreground"}
    clx! {CardTitle, h1, "text-xl leading-none font-semibold"}
    clx! {CardContent, div, "flex flex-col"}
}

pub use components::*;
