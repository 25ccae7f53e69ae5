//! Command handlers behind the CLI.
//!
//! - [`run`]: square and rename every image under a source tree
//! - [`inspect`]: report what squaring would do to one file

mod inspect;
mod run;

pub use inspect::{InspectArgs, inspect_image};
pub use run::{RunArgs, run_batch};
