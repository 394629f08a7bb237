use leptos::prelude::*;

use crate::components::ui::{Card, CardContent, CardHeader, CardTitle};

/// Page chrome: centred card with the app title above a single content slot.
#[component]
pub(crate) fn TodoTemplate(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <div data-name="TodoTemplate" class="min-h-screen bg-background">
            <div class="mx-auto w-fit px-4 pt-24">
                <Card class="rounded-md">
                    <CardHeader>
                        <CardTitle>{title}</CardTitle>
                    </CardHeader>
                    <CardContent>{children()}</CardContent>
                </Card>
            </div>
        </div>
    }
}
