pub mod generate_escapes;
pub mod generate_escapes_parallel_rayon;
pub mod ports;
