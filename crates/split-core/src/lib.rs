//! Effect engine for a chromatic-aberration ("RGB split") image.
//!
//! Two colour-filtered copies of an image are offset from the original each
//! frame. This crate decides those offsets; hosts forward lifecycle and
//! pointer events, schedule [`SplitEngine::frame`] once per display refresh,
//! and apply the translations it writes to each [`ChannelSink`].

pub mod clock;
pub mod config;
pub mod constants;
pub mod effect;
pub mod engine;
pub mod filters;
pub mod math;
pub mod offsets;
pub mod pointer;
pub mod resolver;
pub mod sink;
pub mod timer;

pub use clock::*;
pub use config::*;
pub use effect::*;
pub use engine::*;
pub use filters::*;
pub use offsets::*;
pub use pointer::*;
pub use resolver::*;
pub use sink::*;
pub use timer::*;
