pub mod composer;
pub mod renderer;
pub mod sampler;
pub mod styles;

pub use composer::DocumentComposer;
pub use renderer::{DocumentRenderer, DocxRenderer, JsonRenderer, OutputFormat, TextRenderer};
pub use sampler::{Sampler, DEFAULT_SEED};
pub use styles::DocumentStyles;
