use thiserror::Error;

/// Errors returned by enumerator lookups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnumError {
	/// No enumerator matched the query.
	#[error("No results for [{declaring_type}] with {field}={value}.")]
	NotFound {
		/// Declaring type that was queried.
		declaring_type: &'static str,
		/// Queried field (`name`, `id`).
		field: &'static str,
		/// Rendered query value.
		value: String,
	},
	/// The declaring type's definitions could not be turned into enumerators.
	#[error("definitions for [{declaring_type}] could not be loaded: {source}")]
	Definitions {
		declaring_type: &'static str,
		source: DefinitionError,
	},
}

impl EnumError {
	pub(crate) fn not_found(declaring_type: &'static str, field: &'static str, value: impl std::fmt::Display) -> Self {
		Self::NotFound {
			declaring_type,
			field,
			value: value.to_string(),
		}
	}

	/// Returns true for [`EnumError::NotFound`].
	pub fn is_not_found(&self) -> bool {
		matches!(self, Self::NotFound { .. })
	}
}

/// Malformed definitions of a declaring type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DefinitionError {
	/// A name appeared twice under [`DuplicatePolicy::Reject`](crate::DuplicatePolicy::Reject).
	#[error("duplicate enumerator name: {0}")]
	DuplicateName(Box<str>),
	/// A definition had an empty name.
	#[error("empty enumerator name at position {position}")]
	EmptyName { position: usize },
	/// An external source could not be parsed.
	#[error("failed to parse definitions: {0}")]
	Parse(String),
}
