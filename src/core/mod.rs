pub mod actions;
pub mod colouring;
pub mod data;
pub mod errors;
pub mod evaluator;
pub mod fractals;
