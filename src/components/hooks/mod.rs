pub mod use_scroll_top;
