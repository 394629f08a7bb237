use std::ops::Range;

use leptos::prelude::*;
use tw_merge::tw_merge;

use crate::components::hooks::use_scroll_top::use_scroll_top;

/// Fixed-size window onto a list of equally tall rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Viewport {
    pub width: u32,
    pub height: u32,
    pub row_height: u32,
    /// Extra rows realised on each side of the visible window.
    pub overscan: usize,
}

impl Viewport {
    /// Indices of the rows intersecting the window when scrolled to
    /// `scroll_top` pixels, widened by `overscan` and clamped to `0..total`.
    pub fn visible_range(&self, total: usize, scroll_top: i32) -> Range<usize> {
        if total == 0 || self.row_height == 0 {
            return 0..0;
        }

        let row_height = self.row_height as usize;
        let top = scroll_top.max(0) as usize;
        let first = top / row_height;
        let last = top.saturating_add(self.height as usize).div_ceil(row_height);

        let start = first.saturating_sub(self.overscan).min(total);
        let end = last.saturating_add(self.overscan).min(total);
        start..end
    }

    pub fn content_height(&self, total: usize) -> u64 {
        total as u64 * u64::from(self.row_height)
    }

    pub fn row_style(&self, index: usize) -> String {
        format!(
            "position: absolute; left: 0; top: {}px; width: 100%; height: {}px;",
            index as u64 * u64::from(self.row_height),
            self.row_height
        )
    }

    pub fn row_props(&self, index: usize) -> RowProps {
        RowProps {
            index,
            key: index,
            style: self.row_style(index),
        }
    }
}

/// What a row renderer gets for one realised index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RowProps {
    pub index: usize,
    /// Stable identity of the mounted row; the same key the list reconciles on.
    pub key: usize,
    /// Absolute positioning inside the scroll spacer; must be applied to the
    /// row's outermost element.
    pub style: String,
}

/// Scrollable list that only mounts the rows currently in view.
///
/// The list never sees the items themselves: it knows the row count and calls
/// `row_renderer` for each realised index. Rows are keyed by index, so a row
/// scrolled out of the window is unmounted and one scrolled in is created.
#[component]
pub(crate) fn VirtualList<F>(
    #[prop(into)] row_count: Signal<usize>,
    viewport: Viewport,
    row_renderer: F,
    #[prop(into, optional)] class: String,
) -> impl IntoView
where
    F: Fn(RowProps) -> AnyView + Clone + Send + Sync + 'static,
{
    let (on_scroll, scroll_top) = use_scroll_top();

    let visible = Memo::new(move |_| viewport.visible_range(row_count.get(), scroll_top.get()));

    let merged_class = tw_merge!("relative overflow-x-hidden overflow-y-auto outline-none", class);

    view! {
        <div
            data-name="VirtualList"
            role="list"
            class=merged_class
            style=format!(
                "width: {}px; height: {}px; overflow-y: auto; will-change: transform;",
                viewport.width, viewport.height
            )
            on:scroll=on_scroll
        >
            <div
                data-name="VirtualListSpacer"
                style=move || format!(
                    "position: relative; width: 100%; height: {}px;",
                    viewport.content_height(row_count.get())
                )
            >
                <For
                    each=move || visible.get()
                    key=|index| *index
                    children=move |index| row_renderer(viewport.row_props(index))
                />
            </div>
        </div>
    }
}
