pub mod browser;
pub mod logging;
pub mod registry;
pub mod tree;
pub mod tui_shell;
pub mod viewport;
