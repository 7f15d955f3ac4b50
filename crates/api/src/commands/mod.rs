//! Application commands - the entry points the CLI (or any other front end)
//! calls into

mod calendar;

pub use calendar::*;
