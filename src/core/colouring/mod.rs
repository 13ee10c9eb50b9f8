pub mod mode;
pub mod opacity;
