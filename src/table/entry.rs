//! Key/value entries stored in table buckets.

use std::io::{self, Write};

/// A value stored against a key in the table.
///
/// The duplicate scanner only ever produces [`Value::Text`] (the first-seen
/// path for a digest), but the table stores either kind generically and
/// every consumption site matches exhaustively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// An owned text payload.
    Text(String),
    /// A signed 64-bit integer.
    Number(i64),
}

/// One stored key/value pair.
///
/// Owns both its key and its value; the key is copied from the caller at
/// insertion time and never aliases caller memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The entry's key (a content digest, for the duplicate scanner).
    pub key: String,
    /// The entry's value.
    pub value: Value,
}

impl Entry {
    /// Create a new entry owning copies of the given key and value.
    #[must_use]
    pub fn new(key: &str, value: Value) -> Self {
        Self {
            key: key.to_string(),
            value,
        }
    }

    /// Write this entry as one `"<key>\t<value>\n"` line.
    ///
    /// `Text` payloads are written as-is (embedded tabs or newlines are
    /// not escaped); `Number` values render as decimal integers.
    pub fn format<W: Write>(&self, sink: &mut W) -> io::Result<()> {
        match &self.value {
            Value::Text(text) => writeln!(sink, "{}\t{}", self.key, text),
            Value::Number(number) => writeln!(sink, "{}\t{}", self.key, number),
        }
    }
}
