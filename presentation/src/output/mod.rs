//! Output formatting for the terminal and rendered articles

pub mod console;
pub mod formatter;
pub mod html;
