pub mod hooks;
pub mod todo_insert;
pub mod todo_list;
pub mod todo_list_item;
pub mod todo_template;
pub mod ui;
pub mod virtual_list;
