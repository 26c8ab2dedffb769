pub mod content;
pub mod render;
pub mod scene;
pub mod ui;
