pub mod generate;
pub mod resize;
