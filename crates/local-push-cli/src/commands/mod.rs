mod enter;
mod push;

pub use enter::enter;
pub use push::{PushOptions, local_push};
