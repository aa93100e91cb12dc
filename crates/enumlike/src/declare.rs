//! The declaring-type contract and the query surface built on it.

use std::fmt;

use crate::cache;
use crate::definitions::Definitions;
use crate::enumerator::Enumerator;
use crate::error::{DefinitionError, EnumError};

/// What construction does when a declaring type repeats a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
	/// Fail with [`DefinitionError::DuplicateName`].
	#[default]
	Reject,
	/// Keep the first definition, ignore later ones.
	FirstWins,
	/// Rebuild the first slot from the later definition. The ordinal stays put.
	LastWins,
}

/// A type whose values are a fixed, ordered set of named enumerators.
///
/// Implementors supply the definitions and the constructor; every query
/// method is provided. Most types are declared with
/// [`enumeration!`](crate::enumeration), which also generates one accessor per
/// constant. Types whose definitions live outside the code (a TOML table, a
/// generated file) implement the trait by hand and override
/// [`EnumLike::definitions`].
///
/// ```ignore
/// struct PaletteColor { code: String, rgb: [u8; 3] }
///
/// impl EnumLike for PaletteColor {
///     type Args = (String, [u8; 3]);
///
///     fn construct((code, rgb): Self::Args) -> Self {
///         Self { code, rgb }
///     }
///
///     fn definitions() -> Result<Definitions<Self::Args>, DefinitionError> {
///         Definitions::from_toml_str(include_str!("palette.toml"))
///     }
/// }
///
/// let red = PaletteColor::by_name("RED")?;
/// ```
pub trait EnumLike: Sized + Send + Sync + 'static {
	/// Constructor arguments of one constant: a scalar or a tuple.
	type Args;

	/// What to do with repeated names.
	const DUPLICATES: DuplicatePolicy = DuplicatePolicy::Reject;

	/// Builds the payload of one enumerator.
	fn construct(args: Self::Args) -> Self;

	/// The ordered name → arguments list. Called once, on first access.
	fn definitions() -> Result<Definitions<Self::Args>, DefinitionError>;

	/// Display name used by `Display` and in error messages.
	///
	/// Defaults to the type name without its module path.
	fn declaring_type() -> &'static str {
		short_type_name(std::any::type_name::<Self>())
	}

	/// All enumerators in declaration order.
	///
	/// Empty when the definitions failed to load; the failure is logged once and
	/// reported by [`EnumLike::try_values`].
	fn values() -> &'static [Enumerator<Self>] {
		match cache::table::<Self>() {
			Ok(table) => table.entries(),
			Err(_) => &[],
		}
	}

	fn try_values() -> Result<&'static [Enumerator<Self>], EnumError> {
		match cache::table::<Self>() {
			Ok(table) => Ok(table.entries()),
			Err(source) => Err(EnumError::Definitions {
				declaring_type: Self::declaring_type(),
				source: source.clone(),
			}),
		}
	}

	fn len() -> usize {
		Self::values().len()
	}

	fn is_empty() -> bool {
		Self::values().is_empty()
	}

	/// The first enumerator in declaration order.
	fn first() -> Option<&'static Enumerator<Self>> {
		Self::values().first()
	}

	/// The first enumerator in declaration order matching `predicate`.
	fn first_where(mut predicate: impl FnMut(&Enumerator<Self>) -> bool) -> Option<&'static Enumerator<Self>> {
		Self::values().iter().find(|e| predicate(e))
	}

	fn has(predicate: impl FnMut(&Enumerator<Self>) -> bool) -> bool {
		Self::first_where(predicate).is_some()
	}

	/// Looks up an enumerator by its declared name.
	///
	/// Fails with [`EnumError::Definitions`] when the definitions did not load.
	fn by_name(name: &str) -> Result<&'static Enumerator<Self>, EnumError> {
		match cache::table::<Self>() {
			Ok(table) => table
				.get(name)
				.ok_or_else(|| EnumError::not_found(Self::declaring_type(), "name", name)),
			Err(source) => Err(EnumError::Definitions {
				declaring_type: Self::declaring_type(),
				source: source.clone(),
			}),
		}
	}
}

/// Declaring types whose enumerators carry an identifier.
pub trait Identified: EnumLike {
	type Id: PartialEq + fmt::Display;

	fn id(&self) -> Self::Id;

	/// The first enumerator whose [`Identified::id`] equals `id`.
	fn by_id(id: Self::Id) -> Result<&'static Enumerator<Self>, EnumError> {
		Self::try_values()?
			.iter()
			.find(|e| e.id() == id)
			.ok_or_else(|| EnumError::not_found(Self::declaring_type(), "id", &id))
	}
}

/// Strips module paths from a `type_name`, keeping generic arguments intact.
fn short_type_name(full: &'static str) -> &'static str {
	let head = full.find('<').map_or(full, |lt| &full[..lt]);
	match head.rfind("::") {
		Some(sep) => &full[sep + 2..],
		None => full,
	}
}

/// Names of the provided query functions. A constant whose lowercase accessor
/// would be one of these is rejected by [`enumeration!`](crate::enumeration).
const QUERY_FUNCTIONS: &[&str] = &[
	"values",
	"try_values",
	"len",
	"is_empty",
	"first",
	"first_where",
	"has",
	"by_name",
	"by_id",
	"construct",
	"definitions",
	"declaring_type",
];

#[doc(hidden)]
pub const fn is_reserved_accessor(name: &str) -> bool {
	let mut i = 0;
	while i < QUERY_FUNCTIONS.len() {
		if eq_ignore_case(QUERY_FUNCTIONS[i].as_bytes(), name.as_bytes()) {
			return true;
		}
		i += 1;
	}
	false
}

const fn eq_ignore_case(a: &[u8], b: &[u8]) -> bool {
	if a.len() != b.len() {
		return false;
	}
	let mut i = 0;
	while i < a.len() {
		if a[i].to_ascii_lowercase() != b[i].to_ascii_lowercase() {
			return false;
		}
		i += 1;
	}
	true
}
