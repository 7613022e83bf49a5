pub mod toml_loader;
pub mod tsv_loader;

pub use toml_loader::load_rounds;
pub use tsv_loader::read_questions;
