pub mod classify;
pub mod filter;
pub mod fs;
pub mod pipeline;
pub mod render;
pub mod sort;
