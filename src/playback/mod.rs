//! Playback state machine, the audio output it drives, and transport-bar
//! formatting. Nothing here touches the DOM except the wasm output binding.

pub mod clock;
mod controller;
mod output;
mod poll;
#[cfg(test)]
pub mod testing;

pub use clock::*;
pub use controller::*;
pub use output::*;
pub use poll::*;
