pub mod cancellation;
pub mod generate_escapes;
pub mod write_alphas;
