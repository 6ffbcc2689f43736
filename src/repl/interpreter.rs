//! The read-dispatch-reply loop.

use crate::models::{AddressBook, Record};
use crate::repl::Command;
use std::io::{self, BufRead, Write};
use tracing::debug;

const PROMPT: &str = "Enter a command: ";
const GREETING: &str = "How can I help you?";
const FAREWELL: &str = "Good bye!";
const RECORD_NOT_FOUND: &str = "Record not found.";

/// What the interpreter wants done with one executed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Print the reply, keep looping.
    Continue(String),

    /// Print the reply, end the session.
    Exit(String),
}

impl Response {
    /// The reply text, regardless of loop control.
    pub fn message(&self) -> &str {
        match self {
            Self::Continue(msg) | Self::Exit(msg) => msg,
        }
    }
}

/// Line-oriented command interpreter over one [`AddressBook`].
///
/// The book is constructed by the caller and handed in, never ambient
/// state, so tests can run any number of independent interpreters.
/// [`Interpreter::execute`] is the pure dispatch seam (one line in, one
/// reply out); [`Interpreter::run`] wraps it in the blocking prompt loop.
///
/// No input is fatal: validation failures, missing records, and malformed
/// commands all come back as replies, and only `close`/`exit` (or end of
/// input) ends the loop.
#[derive(Debug, Default)]
pub struct Interpreter {
    book: AddressBook,
}

impl Interpreter {
    /// Create an interpreter owning the given book.
    pub fn new(book: AddressBook) -> Self {
        Self { book }
    }

    /// Read-only access to the underlying book.
    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Execute one input line and produce the reply.
    pub fn execute(&mut self, line: &str) -> Response {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(err) => {
                debug!(line = line.trim(), "rejected input: {}", err);
                return Response::Continue(err.to_string());
            }
        };

        debug!(?command, "dispatching");
        match command {
            Command::Hello => Response::Continue(GREETING.to_string()),

            Command::Exit => Response::Exit(FAREWELL.to_string()),

            Command::Add { name, phone } => {
                // A repeated name silently replaces the whole record.
                let mut record = Record::new(name);
                match record.add_phone(&phone) {
                    Ok(()) => {
                        self.book.add_record(record);
                        Response::Continue("Contact added.".to_string())
                    }
                    Err(err) => Response::Continue(err.to_string()),
                }
            }

            Command::Change {
                name,
                old_phone,
                new_phone,
            } => match self.book.find_mut(&name) {
                Some(record) => match record.edit_phone(&old_phone, &new_phone) {
                    Ok(()) => Response::Continue("Phone number updated.".to_string()),
                    Err(err) => Response::Continue(err.to_string()),
                },
                None => Response::Continue(RECORD_NOT_FOUND.to_string()),
            },

            Command::Phone { name } => match self.book.find(&name) {
                Some(record) => Response::Continue(record.to_string()),
                None => Response::Continue(RECORD_NOT_FOUND.to_string()),
            },

            Command::All => Response::Continue(self.book.to_string()),

            Command::AddBirthday { name, birthday } => match self.book.find_mut(&name) {
                Some(record) => match record.add_birthday(&birthday) {
                    Ok(()) => Response::Continue("Birthday added.".to_string()),
                    Err(err) => Response::Continue(err.to_string()),
                },
                None => Response::Continue(RECORD_NOT_FOUND.to_string()),
            },

            Command::ShowBirthday { name } => match self.book.find(&name) {
                Some(record) => match record.birthday() {
                    Some(birthday) => Response::Continue(format!(
                        "{}'s birthday: {}",
                        record.name(),
                        birthday
                    )),
                    None => Response::Continue(format!(
                        "{} has no birthday recorded.",
                        record.name()
                    )),
                },
                None => Response::Continue(RECORD_NOT_FOUND.to_string()),
            },

            Command::Birthdays => {
                let upcoming = self.book.get_birthdays_per_week();
                if upcoming.is_empty() {
                    Response::Continue("No birthdays coming up next week.".to_string())
                } else {
                    let mut lines = vec!["Birthdays coming up next week:".to_string()];
                    lines.extend(
                        upcoming
                            .into_iter()
                            .map(|(name, date)| format!("{}: {}", name, date)),
                    );
                    Response::Continue(lines.join("\n"))
                }
            }
        }
    }

    /// The blocking prompt loop: prompt, read a line, execute, print.
    ///
    /// Ends on `close`/`exit` or when the input is exhausted. Generic over
    /// the streams so tests can drive it with in-memory buffers.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, output: &mut W) -> io::Result<()> {
        let mut line = String::new();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                debug!("input closed, ending session");
                break;
            }

            match self.execute(&line) {
                Response::Continue(reply) => writeln!(output, "{}", reply)?,
                Response::Exit(reply) => {
                    writeln!(output, "{}", reply)?;
                    break;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hello() {
        let mut interpreter = Interpreter::default();
        assert_eq!(
            interpreter.execute("hello"),
            Response::Continue("How can I help you?".to_string())
        );
    }

    #[test]
    fn test_exit_and_close_end_the_session() {
        let mut interpreter = Interpreter::default();
        assert_eq!(
            interpreter.execute("exit"),
            Response::Exit("Good bye!".to_string())
        );
        assert_eq!(
            interpreter.execute("close"),
            Response::Exit("Good bye!".to_string())
        );
    }

    #[test]
    fn test_unknown_command_continues() {
        let mut interpreter = Interpreter::default();
        assert_eq!(
            interpreter.execute("foobar"),
            Response::Continue("Invalid command.".to_string())
        );
        // loop still alive afterwards
        assert_eq!(
            interpreter.execute("hello"),
            Response::Continue("How can I help you?".to_string())
        );
    }

    #[test]
    fn test_add_then_phone_round_trip() {
        let mut interpreter = Interpreter::default();
        assert_eq!(
            interpreter.execute("add alice 1234567890").message(),
            "Contact added."
        );
        assert_eq!(
            interpreter.execute("phone alice").message(),
            "Contact name: alice, phones: 1234567890"
        );
    }

    #[test]
    fn test_add_invalid_phone_replies_message_and_inserts_nothing() {
        let mut interpreter = Interpreter::default();
        assert_eq!(
            interpreter.execute("add alice 123").message(),
            "Phone number must be a 10-digit number."
        );
        assert!(interpreter.book().is_empty());
    }

    #[test]
    fn test_phone_missing_record() {
        let mut interpreter = Interpreter::default();
        assert_eq!(
            interpreter.execute("phone nosuchname").message(),
            "Record not found."
        );
    }
}
