pub mod config;
pub mod generate;
pub mod input;
pub mod logging;
pub mod progress;
pub mod warehouse;
pub mod writer;

pub use synth_data;
