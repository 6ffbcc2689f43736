//! The command interpreter: grammar, dispatch, and the prompt loop.

pub mod command;
pub mod interpreter;

pub use command::Command;
pub use interpreter::{Interpreter, Response};
