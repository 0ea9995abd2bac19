//! Command-runner adapters.

pub mod recording;
pub mod system;

pub use recording::{Invocation, RecordingRunner};
pub use system::SystemRunner;
