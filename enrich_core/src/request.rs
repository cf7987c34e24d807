//! Request model for enrichment plans.
//!
//! An enrichment plan is an ordered collection of requests. Each request
//! names a target (the external data source), the local field whose value is
//! used as the lookup key, and the items to attach: key/alias pairs mapping a
//! source field to the name the fetched value lands under.

use serde::{Deserialize, Serialize};

use crate::error::RequestError;

/// Lookup field used when a request does not name one.
pub const DEFAULT_LOOKUP_FIELD: &str = "id";

/// One requested enrichment: fetch `key` from the target, attach it as
/// `alias`. Immutable once constructed; both parts are always non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    key: String,
    alias: String,
}

impl Item {
    /// Build an item, rejecting a missing or empty `key`/`alias` outright.
    pub fn new(key: impl Into<String>, alias: impl Into<String>) -> Result<Self, RequestError> {
        let key = key.into();
        let alias = alias.into();

        if key.is_empty() {
            return Err(RequestError::MalformedItem("key"));
        }
        if alias.is_empty() {
            return Err(RequestError::MalformedItem("alias"));
        }

        Ok(Self { key, alias })
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn alias(&self) -> &str {
        &self.alias
    }
}

/// Item input accepted by `add_request`: either a loose structured record
/// (validated on use) or an already-constructed [`Item`].
#[derive(Debug, Clone)]
pub enum ItemSpec {
    Record {
        key: Option<String>,
        alias: Option<String>,
    },
    Built(Item),
}

impl ItemSpec {
    /// Loose record with both parts present. Validation still happens when
    /// the spec is resolved, so empty strings are caught there.
    #[must_use]
    pub fn record(key: impl Into<String>, alias: impl Into<String>) -> Self {
        Self::Record {
            key: Some(key.into()),
            alias: Some(alias.into()),
        }
    }

    /// Resolve into a validated [`Item`].
    pub fn to_item(&self) -> Result<Item, RequestError> {
        match self {
            Self::Built(item) => Ok(item.clone()),
            Self::Record { key, alias } => {
                let key = key.as_deref().ok_or(RequestError::MalformedItem("key"))?;
                let alias = alias
                    .as_deref()
                    .ok_or(RequestError::MalformedItem("alias"))?;
                Item::new(key, alias)
            }
        }
    }
}

impl From<Item> for ItemSpec {
    fn from(item: Item) -> Self {
        Self::Built(item)
    }
}

/// Incrementally built enrichment request; frozen via [`RequestBuilder::build`].
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    target: String,
    field: String,
    items: Vec<Item>,
}

impl RequestBuilder {
    /// Seed a builder for a target, with the lookup field defaulted to
    /// [`DEFAULT_LOOKUP_FIELD`].
    pub fn new(target: impl Into<String>) -> Result<Self, RequestError> {
        let target = target.into();
        if target.is_empty() {
            return Err(RequestError::EmptyTarget);
        }

        Ok(Self {
            target,
            field: DEFAULT_LOOKUP_FIELD.to_string(),
            items: Vec::new(),
        })
    }

    /// Set the lookup field.
    pub fn field(&mut self, field: impl Into<String>) -> &mut Self {
        self.field = field.into();
        self
    }

    /// Validate and append one key/alias pair.
    pub fn item(
        &mut self,
        key: impl Into<String>,
        alias: impl Into<String>,
    ) -> Result<&mut Self, RequestError> {
        self.items.push(Item::new(key, alias)?);
        Ok(self)
    }

    /// Append an already-validated item.
    pub fn push_item(&mut self, item: Item) -> &mut Self {
        self.items.push(item);
        self
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Freeze the current state into an immutable request. The builder stays
    /// usable; later mutation does not affect the returned value.
    #[must_use]
    pub fn build(&self) -> Request {
        Request {
            target: self.target.clone(),
            field: self.field.clone(),
            items: self.items.clone(),
        }
    }
}

/// A frozen target + field + items bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub target: String,
    pub field: String,
    pub items: Vec<Item>,
}

/// Ordered collection of frozen requests: one full enrichment plan.
///
/// Serializes transparently as a JSON array, which is also the header wire
/// shape used on the HTTP path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestSet(Vec<Request>);

impl RequestSet {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, request: Request) {
        self.0.push(request);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, Request> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Request] {
        &self.0
    }
}

impl From<Vec<Request>> for RequestSet {
    fn from(requests: Vec<Request>) -> Self {
        Self(requests)
    }
}

impl FromIterator<Request> for RequestSet {
    fn from_iter<I: IntoIterator<Item = Request>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for RequestSet {
    type Item = Request;
    type IntoIter = std::vec::IntoIter<Request>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a RequestSet {
    type Item = &'a Request;
    type IntoIter = std::slice::Iter<'a, Request>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
