//! Ordered name → constructor-arguments lists.
//!
//! A [`Definitions`] list is the raw input of a declaring type: one entry per
//! enumerator, in declaration order. Lists come either from
//! [`enumeration!`](crate::enumeration) (compile-time constants) or from an
//! external source such as a TOML table.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{DeserializeOwned, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::error::DefinitionError;


/// Ordered `(name, args)` pairs of one declaring type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definitions<A> {
	entries: Vec<(Box<str>, A)>,
}

impl<A> Default for Definitions<A> {
	fn default() -> Self {
		Self { entries: Vec::new() }
	}
}

impl<A> Definitions<A> {
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a definition, builder style.
	pub fn with(mut self, name: impl Into<Box<str>>, args: A) -> Self {
		self.push(name, args);
		self
	}

	pub fn push(&mut self, name: impl Into<Box<str>>, args: A) {
		self.entries.push((name.into(), args));
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Declared names, in order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.entries.iter().map(|(name, _)| &**name)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &A)> {
		self.entries.iter().map(|(name, args)| (&**name, args))
	}
}

impl<A: DeserializeOwned> Definitions<A> {
	/// Parses a TOML document whose top-level keys are enumerator names.
	///
	/// ```toml
	/// RED = ["#FF0000", [255, 0, 0]]
	/// BLUE = ["#0000FF", [0, 0, 255]]
	/// ```
	///
	/// Key order in the document is the declaration order.
	pub fn from_toml_str(src: &str) -> Result<Self, DefinitionError> {
		toml::from_str(src).map_err(|e| DefinitionError::Parse(e.to_string()))
	}
}

impl<N: Into<Box<str>>, A> FromIterator<(N, A)> for Definitions<A> {
	fn from_iter<I: IntoIterator<Item = (N, A)>>(iter: I) -> Self {
		Self {
			entries: iter.into_iter().map(|(name, args)| (name.into(), args)).collect(),
		}
	}
}

impl<A> IntoIterator for Definitions<A> {
	type Item = (Box<str>, A);
	type IntoIter = std::vec::IntoIter<(Box<str>, A)>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}

/// Deserializes from any map, keeping the order in which the format yields keys.
impl<'de, A: Deserialize<'de>> Deserialize<'de> for Definitions<A> {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		struct DefinitionsVisitor<A>(PhantomData<A>);

		impl<'de, A: Deserialize<'de>> Visitor<'de> for DefinitionsVisitor<A> {
			type Value = Definitions<A>;

			fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.write_str("a table of enumerator names to constructor arguments")
			}

			fn visit_map<M: MapAccess<'de>>(self, mut map: M) -> Result<Self::Value, M::Error> {
				let mut defs = Definitions {
					entries: Vec::with_capacity(map.size_hint().unwrap_or(0)),
				};
				while let Some((name, args)) = map.next_entry::<String, A>()? {
					defs.push(name, args);
				}
				Ok(defs)
			}
		}

		deserializer.deserialize_map(DefinitionsVisitor(PhantomData))
	}
}
