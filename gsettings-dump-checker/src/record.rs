/// One dump line split on its first space only.
///
/// `<schema> <key> <value...>` becomes `schema` plus an opaque `remainder`;
/// the remainder is split again lazily by [`RawRecord::key_value`]. A line
/// with no space at all yields an empty remainder.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct RawRecord {
    pub schema: String,
    pub remainder: String,
}

impl RawRecord {
    /// Split `line` on the first space character.
    pub fn parse(line: &str) -> Self {
        match line.split_once(' ') {
            Some((schema, remainder)) => Self {
                schema: schema.to_owned(),
                remainder: remainder.to_owned(),
            },
            None => Self {
                schema: line.to_owned(),
                remainder: String::new(),
            },
        }
    }

    /// Split the remainder on its first space into `(key, value)`.
    /// The value keeps embedded whitespace and quote characters verbatim;
    /// a remainder with no space yields an empty value.
    pub fn key_value(&self) -> KeyValue {
        match self.remainder.split_once(' ') {
            Some((key, value)) => KeyValue {
                key: key.to_owned(),
                value: value.to_owned(),
            },
            None => KeyValue {
                key: self.remainder.clone(),
                value: String::new(),
            },
        }
    }
}

/// A single key with its literal stored value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}
