pub mod legend;
pub mod list;
pub mod pie;
pub mod scroll;
