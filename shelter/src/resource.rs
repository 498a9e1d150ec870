//! Resource identifiers for the pet collection.
//!
//! Callers address pets by resource rather than by table: `pets` names the
//! whole collection and `pets/{id}` a single record. The full content URI
//! form, `content://com.example.android.pets/pets/{id}`, is accepted too.

use std::fmt;
use std::str::FromStr;

use crate::database::schema::TABLE_NAME;
use crate::error::{Error, Result};

/// Authority accepted in `content://` resource URIs.
pub const CONTENT_AUTHORITY: &str = "com.example.android.pets";

const CONTENT_SCHEME: &str = "content://";

/// A classified resource identifier.
///
/// # Examples
///
/// ```
/// use shelter::Resource;
///
/// assert_eq!(Resource::parse("pets").unwrap(), Resource::Collection);
/// assert_eq!(Resource::parse("pets/3").unwrap(), Resource::Item(3));
/// assert_eq!(
///     Resource::parse("content://com.example.android.pets/pets/3").unwrap(),
///     Resource::Item(3)
/// );
/// assert!(Resource::parse("cats").is_err());
/// assert_eq!(Resource::Item(3).to_string(), "pets/3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// Every pet.
    Collection,
    /// The pet with this id.
    Item(i64),
}

impl Resource {
    /// Classifies a resource identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedResource`] for any identifier that is not
    /// `pets` or `pets/{id}` with a decimal id.
    pub fn parse(input: &str) -> Result<Self> {
        let path = strip_content_prefix(input)?;

        let mut segments = path.split('/');
        if segments.next() != Some(TABLE_NAME) {
            return Err(Error::unsupported_resource(input, "unknown collection"));
        }

        match (segments.next(), segments.next()) {
            (None, _) => Ok(Self::Collection),
            (Some(id), None) => parse_id(id)
                .map(Self::Item)
                .ok_or_else(|| Error::unsupported_resource(input, "id must be a decimal integer")),
            (Some(_), Some(_)) => Err(Error::unsupported_resource(input, "too many path segments")),
        }
    }

    /// Returns the item resource for `id`.
    #[must_use]
    pub const fn item_of(id: i64) -> Self {
        Self::Item(id)
    }

    /// Returns true for the collection resource.
    #[must_use]
    pub const fn is_collection(&self) -> bool {
        matches!(self, Self::Collection)
    }

    /// Returns the record id for an item resource.
    #[must_use]
    pub const fn id(&self) -> Option<i64> {
        match self {
            Self::Collection => None,
            Self::Item(id) => Some(*id),
        }
    }

    /// Returns the enclosing resource, if any.
    #[must_use]
    pub const fn parent(&self) -> Option<Self> {
        match self {
            Self::Collection => None,
            Self::Item(_) => Some(Self::Collection),
        }
    }

    /// Returns this resource followed by each of its ancestors.
    ///
    /// A write to a resource is observable on every entry of this list.
    #[must_use]
    pub fn ancestors_and_self(&self) -> Vec<Self> {
        let mut chain = vec![*self];
        let mut current = *self;
        while let Some(parent) = current.parent() {
            chain.push(parent);
            current = parent;
        }
        chain
    }

    /// Returns the full content URI for this resource.
    #[must_use]
    pub fn to_content_uri(&self) -> String {
        format!("{CONTENT_SCHEME}{CONTENT_AUTHORITY}/{self}")
    }
}

fn strip_content_prefix(input: &str) -> Result<&str> {
    let Some(rest) = input.strip_prefix(CONTENT_SCHEME) else {
        return Ok(input);
    };
    match rest.split_once('/') {
        Some((authority, path)) if authority == CONTENT_AUTHORITY => Ok(path),
        Some(_) => Err(Error::unsupported_resource(input, "unknown authority")),
        None => Err(Error::unsupported_resource(input, "missing path")),
    }
}

// Digits only: no sign, no whitespace, no empty segment.
fn parse_id(segment: &str) -> Option<i64> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

impl FromStr for Resource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Collection => write!(f, "{TABLE_NAME}"),
            Self::Item(id) => write!(f, "{TABLE_NAME}/{id}"),
        }
    }
}
