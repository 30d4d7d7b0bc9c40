mod document;
mod playback;
mod renderer;

pub use renderer::{MapRenderer, RenderError};
