//! Commute query parsing.

use std::fmt;

use super::error::QueryError;

/// Literal separator between origin and destination.
const SEPARATOR: &str = " to ";

/// An origin/destination pair taken from a user's message.
///
/// Both places are trimmed and non-empty. The separator is matched
/// case-sensitively, so `"A TO B"` is not a query.
///
/// # Examples
///
/// ```
/// use commute_bot::domain::RouteQuery;
///
/// let query = RouteQuery::parse("Koramangala to Majestic").unwrap();
/// assert_eq!(query.origin(), "Koramangala");
/// assert_eq!(query.destination(), "Majestic");
///
/// // Exactly one separator is required
/// assert!(RouteQuery::parse("Koramangala").is_err());
/// assert!(RouteQuery::parse("A to B to C").is_err());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct RouteQuery {
    origin: String,
    destination: String,
}

impl RouteQuery {
    /// Parse a free-text `"<origin> to <destination>"` message.
    pub fn parse(text: &str) -> Result<Self, QueryError> {
        let parts: Vec<&str> = text.split(SEPARATOR).collect();

        if parts.len() != 2 {
            return Err(QueryError::Separator {
                found: parts.len() - 1,
            });
        }

        let origin = parts[0].trim();
        let destination = parts[1].trim();

        if origin.is_empty() {
            return Err(QueryError::EmptyPlace("origin"));
        }
        if destination.is_empty() {
            return Err(QueryError::EmptyPlace("destination"));
        }

        Ok(Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
        })
    }

    /// The origin exactly as typed (trimmed).
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// The destination exactly as typed (trimmed).
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Origin in title case, for display.
    pub fn origin_title(&self) -> String {
        title_case(&self.origin)
    }

    /// Destination in title case, for display.
    pub fn destination_title(&self) -> String {
        title_case(&self.destination)
    }
}

impl fmt::Debug for RouteQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteQuery({:?} -> {:?})", self.origin, self.destination)
    }
}

/// Title-case a place name.
///
/// The first letter of every run of letters is upper-cased and the rest
/// lower-cased, so `"hsr layout"` becomes `"Hsr Layout"` and `"o'neil"`
/// becomes `"O'Neil"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }

    out
}
