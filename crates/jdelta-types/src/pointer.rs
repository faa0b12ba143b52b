//! JSON Pointer (RFC 6901) addressing.
//!
//! A pointer is a sequence of reference tokens. The string form joins the
//! tokens with `/`, escaping `~` as `~0` and `/` as `~1`. The empty string is
//! the root pointer and addresses the whole document.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::PointerError;

/// A location within a JSON document.
///
/// Tokens are stored unescaped; escaping happens only when rendering.
///
/// # Examples
///
/// ```
/// use jdelta_types::JsonPointer;
///
/// let pointer = JsonPointer::root().child("nested").child("a/b");
/// assert_eq!(pointer.to_string(), "/nested/a~1b");
/// assert_eq!(pointer.depth(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JsonPointer(Vec<String>);

impl JsonPointer {
    /// The root pointer (empty string).
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse the string form of a pointer.
    pub fn parse(input: &str) -> Result<Self, PointerError> {
        if input.is_empty() {
            return Ok(Self::root());
        }
        let Some(rest) = input.strip_prefix('/') else {
            return Err(PointerError::MissingLeadingSlash(input.to_string()));
        };
        rest.split('/')
            .map(|token| {
                unescape(token).ok_or_else(|| PointerError::InvalidEscape(input.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Append a token.
    pub fn push(&mut self, token: impl Into<String>) {
        self.0.push(token.into());
    }

    /// A new pointer one level below this one.
    pub fn child(&self, token: impl Into<String>) -> Self {
        let mut child = self.clone();
        child.push(token);
        child
    }

    /// A new pointer addressing an array element below this one.
    pub fn index(&self, index: usize) -> Self {
        self.child(index.to_string())
    }

    /// Unescaped reference tokens, root first.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// The final token, or `None` for the root.
    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// The pointer one level up, or `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        let (_, init) = self.0.split_last()?;
        Some(Self(init.to_vec()))
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of tokens.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if `prefix` addresses this location or one of its
    /// ancestors.
    pub fn starts_with(&self, prefix: &JsonPointer) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

fn escape(token: &str) -> Cow<'_, str> {
    if token.contains(['~', '/']) {
        Cow::Owned(token.replace('~', "~0").replace('/', "~1"))
    } else {
        Cow::Borrowed(token)
    }
}

fn unescape(token: &str) -> Option<String> {
    let mut out = String::with_capacity(token.len());
    let mut chars = token.chars();
    while let Some(ch) = chars.next() {
        if ch == '~' {
            match chars.next() {
                Some('0') => out.push('~'),
                Some('1') => out.push('/'),
                _ => return None,
            }
        } else {
            out.push(ch);
        }
    }
    Some(out)
}

impl fmt::Display for JsonPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.0 {
            write!(f, "/{}", escape(token))?;
        }
        Ok(())
    }
}

impl FromStr for JsonPointer {
    type Err = PointerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<S: Into<String>> FromIterator<S> for JsonPointer {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl Serialize for JsonPointer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for JsonPointer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn root_renders_empty() {
        assert_eq!(JsonPointer::root().to_string(), "");
        assert!(JsonPointer::root().is_root());
        assert_eq!(JsonPointer::parse("").unwrap(), JsonPointer::root());
    }

    #[test]
    fn nested_path_renders_slash_joined() {
        let p = JsonPointer::root().child("nested").child("baz").child("key");
        assert_eq!(p.to_string(), "/nested/baz/key");
        assert_eq!(p.depth(), 3);
        assert_eq!(p.last(), Some("key"));
    }

    #[test]
    fn special_characters_are_escaped() {
        let p = JsonPointer::root().child("a/b").child("m~n");
        assert_eq!(p.to_string(), "/a~1b/m~0n");
        assert_eq!(JsonPointer::parse("/a~1b/m~0n").unwrap(), p);
    }

    #[test]
    fn escape_order_follows_rfc_6901() {
        // "~01" decodes to "~1", never to "/".
        let p = JsonPointer::parse("/~01").unwrap();
        assert_eq!(p.last(), Some("~1"));
        assert_eq!(p.to_string(), "/~01");
    }

    #[test]
    fn empty_token_is_addressable() {
        let p = JsonPointer::root().child("");
        assert_eq!(p.to_string(), "/");
        assert_eq!(JsonPointer::parse("/").unwrap(), p);
    }

    #[test]
    fn array_index_token() {
        let p = JsonPointer::root().child("items").index(3);
        assert_eq!(p.to_string(), "/items/3");
    }

    #[test]
    fn parse_rejects_missing_slash() {
        assert_eq!(
            JsonPointer::parse("foo"),
            Err(PointerError::MissingLeadingSlash("foo".into()))
        );
    }

    #[test]
    fn parse_rejects_bad_escapes() {
        assert!(matches!(
            JsonPointer::parse("/a~2"),
            Err(PointerError::InvalidEscape(_))
        ));
        assert!(matches!(
            JsonPointer::parse("/a~"),
            Err(PointerError::InvalidEscape(_))
        ));
    }

    #[test]
    fn parent_and_prefix() {
        let p: JsonPointer = "/a/b/c".parse().unwrap();
        let parent = p.parent().unwrap();
        assert_eq!(parent.to_string(), "/a/b");
        assert!(p.starts_with(&parent));
        assert!(p.starts_with(&JsonPointer::root()));
        assert!(!parent.starts_with(&p));
        assert_eq!(JsonPointer::root().parent(), None);
    }

    #[test]
    fn serde_uses_string_form() {
        let p = JsonPointer::root().child("foo").child("a/b");
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json, serde_json::json!("/foo/a~1b"));
        let back: JsonPointer = serde_json::from_value(json).unwrap();
        assert_eq!(back, p);
        assert!(serde_json::from_value::<JsonPointer>(serde_json::json!("nope")).is_err());
    }

    proptest! {
        #[test]
        fn rendered_pointers_parse_back(tokens in prop::collection::vec("[a-z~/]{0,4}", 0..5)) {
            let p: JsonPointer = tokens.iter().cloned().collect();
            let parsed = JsonPointer::parse(&p.to_string()).unwrap();
            prop_assert_eq!(parsed, p);
        }
    }
}
