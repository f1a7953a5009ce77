//! Akaru Control - terminal front end for the Akaru chat bot.

pub mod cli;
pub mod logging;
pub mod repl;
pub mod session;

pub use session::Session;
