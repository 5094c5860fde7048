//! View formatting and rendering

pub mod console;
pub mod formatter;
pub mod renderer;
