//! The three-argument query and its three-valued classification.

use core::fmt;

use crate::{error::CheckError, index::SettingsIndex};

/// Outcome of a verification run.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Classification {
    /// The stored value equals the expected value exactly.
    Set,
    /// The key exists but holds a different value.
    NotSet,
    /// Schema/key missing, bad invocation, or unreadable dump.
    Error,
}

impl Classification {
    /// The one-word label printed on stdout.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Set => "set",
            Self::NotSet => "not set",
            Self::Error => "error",
        }
    }

    /// Process exit code for this outcome. Only `error` is non-zero.
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Set | Self::NotSet => 0,
            Self::Error => 1,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A schema/key/expected-value triple taken from the invocation arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub schema: String,
    pub key: String,
    pub expected: String,
}

impl Query {
    /// Take the three positional arguments from `args`.
    /// Anything left on the iterator afterwards is the caller's concern.
    pub fn from_args<I>(args: &mut I) -> Result<Self, CheckError>
    where
        I: Iterator<Item = String>,
    {
        let schema = args.next().ok_or(CheckError::MissingArguments)?;
        let key = args.next().ok_or(CheckError::MissingArguments)?;
        let expected = args.next().ok_or(CheckError::MissingArguments)?;
        Ok(Self {
            schema,
            key,
            expected,
        })
    }

    /// Resolve the query against `index`.
    ///
    /// Only the first entry recorded for the schema is consulted; a key
    /// that appears in a later entry of the same schema still fails the
    /// lookup. Value comparison is exact string equality, quoting included.
    pub fn evaluate(&self, index: &SettingsIndex) -> Result<Classification, CheckError> {
        let entry = index
            .first_entry(&self.schema)
            .ok_or_else(|| CheckError::SchemaNotFound(self.schema.clone()))?;

        if entry.key != self.key {
            return Err(CheckError::KeyNotFound {
                schema: self.schema.clone(),
                key: self.key.clone(),
            });
        }

        Ok(if entry.value == self.expected {
            Classification::Set
        } else {
            Classification::NotSet
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{dump::parse_lines, record::RawRecord};

    fn index_of(text: &str) -> SettingsIndex {
        SettingsIndex::build(parse_lines(text))
    }

    fn query(schema: &str, key: &str, expected: &str) -> Query {
        Query {
            schema: schema.to_owned(),
            key: key.to_owned(),
            expected: expected.to_owned(),
        }
    }

    #[test]
    fn matching_value_is_set() {
        let index =
            index_of("org.gnome.rhythmbox.encoding-settings media-type 'audio/x-vorbis'\n");
        let verdict = query(
            "org.gnome.rhythmbox.encoding-settings",
            "media-type",
            "'audio/x-vorbis'",
        )
        .evaluate(&index)
        .unwrap();
        assert_eq!(verdict, Classification::Set);
    }

    #[test]
    fn differing_value_is_not_set() {
        let index =
            index_of("org.gnome.rhythmbox.encoding-settings media-type 'audio/x-vorbis'\n");
        let verdict = query(
            "org.gnome.rhythmbox.encoding-settings",
            "media-type",
            "'audio/flac'",
        )
        .evaluate(&index)
        .unwrap();
        assert_eq!(verdict, Classification::NotSet);
    }

    #[test]
    fn unknown_schema_is_a_lookup_error() {
        let index = index_of("a k v\n");
        let err = query("missing", "k", "v").evaluate(&index).unwrap_err();
        assert!(matches!(err, CheckError::SchemaNotFound(_)));
    }

    #[test]
    fn only_the_first_entry_is_consulted() {
        // k2 exists for schema `a`, but only in the second entry.
        let index = index_of("a k1 v1\na k2 v2\n");
        let err = query("a", "k2", "v2").evaluate(&index).unwrap_err();
        assert!(matches!(err, CheckError::KeyNotFound { .. }));
    }

    #[test]
    fn comparison_is_quote_sensitive() {
        let index = index_of("a k 'v'\n");
        let verdict = query("a", "k", "v").evaluate(&index).unwrap();
        assert_eq!(verdict, Classification::NotSet);
    }

    #[test]
    fn spaceless_line_is_reachable_only_via_empty_key() {
        let index = SettingsIndex::build(vec![RawRecord::parse("org.gnome.orphan")]);
        let err = query("org.gnome.orphan", "some-key", "v")
            .evaluate(&index)
            .unwrap_err();
        assert!(matches!(err, CheckError::KeyNotFound { .. }));

        let verdict = query("org.gnome.orphan", "", "").evaluate(&index).unwrap();
        assert_eq!(verdict, Classification::Set);
    }

    #[test]
    fn from_args_needs_three() {
        let mut none = Vec::<String>::new().into_iter();
        assert!(matches!(
            Query::from_args(&mut none),
            Err(CheckError::MissingArguments)
        ));

        let mut two = vec!["a".to_owned(), "k".to_owned()].into_iter();
        assert!(matches!(
            Query::from_args(&mut two),
            Err(CheckError::MissingArguments)
        ));

        let mut three = vec!["a".to_owned(), "k".to_owned(), "v".to_owned()].into_iter();
        assert_eq!(Query::from_args(&mut three).unwrap(), query("a", "k", "v"));
    }

    #[test]
    fn labels_and_exit_codes() {
        assert_eq!(Classification::Set.as_str(), "set");
        assert_eq!(Classification::NotSet.as_str(), "not set");
        assert_eq!(Classification::Error.to_string(), "error");
        assert_eq!(Classification::Set.exit_code(), 0);
        assert_eq!(Classification::NotSet.exit_code(), 0);
        assert_eq!(Classification::Error.exit_code(), 1);
    }
}
