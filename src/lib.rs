pub mod bleed;
pub mod canvas;
pub mod cli;
pub mod commands;
pub mod iconset;
pub mod manifest;
pub mod package;
pub mod render;
