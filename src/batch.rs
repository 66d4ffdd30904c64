//! Batched requests and result correlation.
//!
//! The street and ZIP endpoints accept either one lookup or an array of
//! lookups. [`QueryParams`] mirrors that wire shape, and [`Batch`] is the
//! normalized ordered form every request goes through.
//!
//! The upstream service may omit failed lookups and may return several
//! candidates per lookup, so results are matched to inputs through the
//! echoed `input_index` (and `input_id`), never through their position in
//! the response array.
//!
//! ```
//! use addrverify::{Batch, us_street};
//!
//! let batch = Batch::new(vec![
//!     us_street::QueryParamsItem::new()
//!         .with_input_id("a")
//!         .with_street("1600 Pennsylvania Ave")
//!         .with_city("Washington")
//!         .with_state("DC"),
//!     us_street::QueryParamsItem::new()
//!         .with_input_id("b")
//!         .with_street("1 Infinite Loop"),
//! ]);
//! assert_eq!(batch.len(), 2);
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use log::{debug, warn};
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::SchemaError;

/// Request payload for batch-capable endpoints: one item or many.
///
/// A JSON object decodes as [`QueryParams::Single`] and a JSON array as
/// [`QueryParams::Multiple`]. Array elements must themselves be objects;
/// positional (array-shaped) lookups are rejected.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum QueryParams<T> {
    /// A single lookup.
    Single(T),
    /// An ordered list of lookups.
    Multiple(Vec<T>),
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for QueryParams<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OneOrManyVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for OneOrManyVisitor<T> {
            type Value = QueryParams<T>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a lookup object or an array of lookup objects")
            }

            fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                T::deserialize(de::value::MapAccessDeserializer::new(map)).map(QueryParams::Single)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut items = Vec::new();
                while let Some(Lookup(item)) = seq.next_element::<Lookup<T>>()? {
                    items.push(item);
                }
                Ok(QueryParams::Multiple(items))
            }
        }

        deserializer.deserialize_any(OneOrManyVisitor(PhantomData))
    }
}

/// One batch element, accepted only in object form.
struct Lookup<T>(T);

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Lookup<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LookupVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for LookupVisitor<T> {
            type Value = Lookup<T>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a lookup object")
            }

            fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                T::deserialize(de::value::MapAccessDeserializer::new(map)).map(Lookup)
            }
        }

        deserializer.deserialize_map(LookupVisitor(PhantomData))
    }
}

impl<T> QueryParams<T> {
    /// Flattens either shape into an ordered list.
    pub fn into_items(self) -> Vec<T> {
        match self {
            QueryParams::Single(item) => vec![item],
            QueryParams::Multiple(items) => items,
        }
    }
}

impl<T> From<Vec<T>> for QueryParams<T> {
    fn from(items: Vec<T>) -> Self {
        QueryParams::Multiple(items)
    }
}

impl<T, const N: usize> From<[T; N]> for QueryParams<T> {
    fn from(items: [T; N]) -> Self {
        QueryParams::Multiple(items.into())
    }
}

/// Access to the fields a result echoes back from its request item.
pub trait Correlate {
    /// The caller-supplied identifier copied from the request item.
    fn input_id(&self) -> Option<&str>;

    /// Position of the request item in the submitted batch.
    fn input_index(&self) -> Option<usize>;

    /// Position of this result among the candidates for one input.
    fn candidate_index(&self) -> Option<usize> {
        None
    }
}

/// Access to the caller-supplied identifier of a request item.
pub trait InputId {
    /// The identifier to be echoed in results, if one was set.
    fn input_id(&self) -> Option<&str>;
}

/// An ordered, non-polymorphic batch of request items.
///
/// Serializes as a JSON array regardless of how it was built.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(transparent)]
pub struct Batch<T> {
    items: Vec<T>,
}

impl<T> Batch<T> {
    /// Builds a batch from a single item, a `Vec`, an array, or an
    /// existing [`QueryParams`]. Input order is preserved.
    pub fn new(params: impl Into<QueryParams<T>>) -> Self {
        Batch {
            items: params.into().into_items(),
        }
    }

    /// The request items in submission order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of request items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the batch holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consumes the batch, returning the items in submission order.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T: InputId> Batch<T> {
    /// Position of the first item carrying `input_id`.
    pub fn position_of(&self, input_id: &str) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.input_id() == Some(input_id))
    }

    /// Groups `results` by the request item they answer.
    ///
    /// The returned map is keyed by input index. Each group is ordered by
    /// `candidate_index`, so the raw response order does not matter. A
    /// result without `input_index` is placed by its `input_id`; a result
    /// carrying neither is only accepted for a single-item batch.
    ///
    /// A result whose echoed `input_id` differs from the item at its
    /// `input_index` is an [`SchemaError::EchoMismatch`]. A result that
    /// omits `input_id` is not a mismatch and is placed by its index, the
    /// same rule [`Batch::results_for_id`] follows.
    ///
    /// Inputs with no results (e.g. omitted by the upstream service) are
    /// absent from the map.
    pub fn correlate<'r, R: Correlate>(
        &self,
        results: &'r [R],
    ) -> Result<BTreeMap<usize, Vec<&'r R>>, SchemaError> {
        let mut groups: BTreeMap<usize, Vec<&'r R>> = BTreeMap::new();

        for result in results {
            let index = self.resolve_index(result)?;
            let expected = self.items[index].input_id();
            if let (Some(expected), Some(found)) = (expected, result.input_id()) {
                if found != expected {
                    warn!(
                        "result for input {} echoed input_id {:?}, expected {:?}",
                        index, found, expected
                    );
                    return Err(SchemaError::EchoMismatch {
                        input_index: index,
                        expected: Some(expected.to_owned()),
                        found: Some(found.to_owned()),
                    });
                }
            }
            groups.entry(index).or_default().push(result);
        }

        for group in groups.values_mut() {
            group.sort_by_key(|r| r.candidate_index().unwrap_or(0));
        }
        debug!(
            "correlated {} results onto {} of {} inputs",
            results.len(),
            groups.len(),
            self.items.len()
        );
        Ok(groups)
    }

    /// All results answering the request item identified by `input_id`,
    /// ordered by `candidate_index`.
    ///
    /// Results that omit `input_id` but point at the item through
    /// `input_index` are included as well, matching [`Batch::correlate`].
    pub fn results_for_id<'r, R: Correlate>(&self, input_id: &str, results: &'r [R]) -> Vec<&'r R> {
        let position = self.position_of(input_id);
        let mut found: Vec<&'r R> = results
            .iter()
            .filter(|r| match r.input_id() {
                Some(id) => id == input_id,
                None => position.is_some() && r.input_index() == position,
            })
            .collect();
        found.sort_by_key(|r| (r.input_index(), r.candidate_index().unwrap_or(0)));
        found
    }

    fn resolve_index<R: Correlate>(&self, result: &R) -> Result<usize, SchemaError> {
        if let Some(index) = result.input_index() {
            if index >= self.items.len() {
                return Err(SchemaError::invalid_input(format!(
                    "result input_index {} out of range for batch of {}",
                    index,
                    self.items.len()
                )));
            }
            return Ok(index);
        }
        if let Some(id) = result.input_id() {
            return self.position_of(id).ok_or_else(|| {
                SchemaError::invalid_input(format!("result input_id {id:?} matches no request item"))
            });
        }
        if self.items.len() == 1 {
            return Ok(0);
        }
        Err(SchemaError::invalid_input(
            "result carries neither input_index nor input_id",
        ))
    }
}

impl<T> From<Vec<T>> for Batch<T> {
    fn from(items: Vec<T>) -> Self {
        Batch { items }
    }
}
