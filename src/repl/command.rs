//! Command grammar for the interpreter.

use crate::error::CommandError;

/// A fully parsed command line, ready to dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: String },
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },
    Phone { name: String },
    All,
    AddBirthday { name: String, birthday: String },
    ShowBirthday { name: String },
    Birthdays,
    Exit,
}

impl Command {
    /// Parse one input line.
    ///
    /// The whole line is trimmed and lowercased before tokenizing, so names
    /// land in the book lowercase and lookups are effectively
    /// case-insensitive. Phones and birthdays are digits and dots, which
    /// lowercasing leaves alone.
    ///
    /// Dispatch is on the first whitespace-delimited token only. A known
    /// keyword with the wrong argument count gets its usage message; a
    /// zero-argument keyword followed by extra tokens is not that command
    /// and falls through to `Unknown`, as does everything else (including
    /// an empty line).
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let normalized = line.trim().to_lowercase();
        let tokens: Vec<&str> = normalized.split_whitespace().collect();

        let Some((&keyword, args)) = tokens.split_first() else {
            return Err(CommandError::Unknown);
        };

        match keyword {
            "hello" if args.is_empty() => Ok(Self::Hello),
            "all" if args.is_empty() => Ok(Self::All),
            "birthdays" if args.is_empty() => Ok(Self::Birthdays),
            "close" | "exit" if args.is_empty() => Ok(Self::Exit),
            "add" => match args {
                [name, phone] => Ok(Self::Add {
                    name: name.to_string(),
                    phone: phone.to_string(),
                }),
                _ => Err(CommandError::Usage {
                    usage: "add [name] [phone]",
                }),
            },
            "change" => match args {
                [name, old_phone, new_phone] => Ok(Self::Change {
                    name: name.to_string(),
                    old_phone: old_phone.to_string(),
                    new_phone: new_phone.to_string(),
                }),
                _ => Err(CommandError::Usage {
                    usage: "change [name] [old_phone] [new_phone]",
                }),
            },
            "phone" => match args {
                [name] => Ok(Self::Phone {
                    name: name.to_string(),
                }),
                _ => Err(CommandError::Usage {
                    usage: "phone [name]",
                }),
            },
            "add-birthday" => match args {
                [name, birthday] => Ok(Self::AddBirthday {
                    name: name.to_string(),
                    birthday: birthday.to_string(),
                }),
                _ => Err(CommandError::Usage {
                    usage: "add-birthday [name] [birthday]",
                }),
            },
            "show-birthday" => match args {
                [name] => Ok(Self::ShowBirthday {
                    name: name.to_string(),
                }),
                _ => Err(CommandError::Usage {
                    usage: "show-birthday [name]",
                }),
            },
            _ => Err(CommandError::Unknown),
        }
    }
}
