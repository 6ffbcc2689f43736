//! Data models: records and the address book that owns them.

pub mod address_book;
pub mod record;

pub use address_book::AddressBook;
pub use record::Record;
