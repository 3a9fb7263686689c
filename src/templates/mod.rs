pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{chart_panel, stat_card};
pub use layouts::desktop::desktop_layout;
