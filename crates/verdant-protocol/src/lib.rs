pub mod command;
pub mod envelope;

pub use command::Command;
pub use envelope::{Envelope, PayloadKind};
