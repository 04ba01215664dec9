// TUI widget modules for each dashboard panel.

pub mod comparison;
pub mod head_to_head;
pub mod quit_confirm;
pub mod selector;
pub mod status_bar;
pub mod summary;
