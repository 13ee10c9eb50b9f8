pub mod algorithm;
pub mod family;
pub mod julia_presets;
pub mod params;
pub mod render_config;
