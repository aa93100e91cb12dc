//! serde support: enumerators travel as their declared name.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::EnumLike;
use crate::enumerator::Enumerator;

impl<T> Serialize for Enumerator<T> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.name())
	}
}

/// Resolves the name through [`EnumLike::by_name`].
impl<'de, T: EnumLike> Deserialize<'de> for &'static Enumerator<T> {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		struct NameVisitor<T>(PhantomData<T>);

		impl<T: EnumLike> Visitor<'_> for NameVisitor<T> {
			type Value = &'static Enumerator<T>;

			fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				write!(f, "an enumerator name of {}", T::declaring_type())
			}

			fn visit_str<E: de::Error>(self, name: &str) -> Result<Self::Value, E> {
				T::by_name(name).map_err(E::custom)
			}
		}

		deserializer.deserialize_str(NameVisitor(PhantomData))
	}
}
