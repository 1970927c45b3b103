pub mod court;
pub mod matrix;
pub mod standings;
pub mod theme;
