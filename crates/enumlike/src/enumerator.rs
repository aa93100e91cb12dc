//! The enumerator value handed out by declaring types.

use std::any::TypeId;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;

use crate::EnumLike;

/// One named, immutable instance of the declaring type `T`.
///
/// Enumerators are built once by the registry cache and handed out as
/// `&'static` references. The payload is reachable through [`Deref`], so
/// domain accessors of `T` can be called directly on the enumerator.
pub struct Enumerator<T> {
	name: Box<str>,
	ordinal: usize,
	value: T,
}

impl<T> Enumerator<T> {
	pub(crate) fn new(name: Box<str>, ordinal: usize, value: T) -> Self {
		Self { name, ordinal, value }
	}

	/// Declared name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Zero-based position in declaration order.
	pub fn ordinal(&self) -> usize {
		self.ordinal
	}

	/// The constructed payload.
	pub fn value(&self) -> &T {
		&self.value
	}

	pub(crate) fn replace_value(&mut self, value: T) {
		self.value = value;
	}
}

impl<T: EnumLike> Enumerator<T> {
	/// Display name of the declaring type.
	pub fn declaring_type(&self) -> &'static str {
		T::declaring_type()
	}
}

impl<T> Deref for Enumerator<T> {
	type Target = T;

	fn deref(&self) -> &T {
		&self.value
	}
}

/// Same declaring type and same name.
impl<T: EnumLike, U: EnumLike> PartialEq<Enumerator<U>> for Enumerator<T> {
	fn eq(&self, other: &Enumerator<U>) -> bool {
		TypeId::of::<T>() == TypeId::of::<U>() && self.name == other.name
	}
}

impl<T: EnumLike> Eq for Enumerator<T> {}

impl<T: EnumLike> Hash for Enumerator<T> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		TypeId::of::<T>().hash(state);
		self.name.hash(state);
	}
}

impl<T: EnumLike> PartialOrd for Enumerator<T> {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

/// Declaration order.
impl<T: EnumLike> Ord for Enumerator<T> {
	fn cmp(&self, other: &Self) -> Ordering {
		self.ordinal.cmp(&other.ordinal)
	}
}

impl<T: EnumLike> fmt::Display for Enumerator<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}::{}", T::declaring_type(), self.name)
	}
}

impl<T: fmt::Debug> fmt::Debug for Enumerator<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Enumerator")
			.field("name", &self.name)
			.field("ordinal", &self.ordinal)
			.field("value", &self.value)
			.finish()
	}
}
