//! Construction of a declaring type's enumerator table.
//!
//! # Invariants
//!
//! - Ordinals are dense: `entries[i].ordinal() == i`.
//! - Every entry is reachable through the name index, and names are unique.

use rustc_hash::FxHashMap as HashMap;

use crate::definitions::Definitions;
use crate::enumerator::Enumerator;
use crate::error::DefinitionError;
use crate::{DuplicatePolicy, EnumLike};


/// Constructed enumerators of one declaring type, indexed by name.
pub(crate) struct Table<T> {
	entries: Box<[Enumerator<T>]>,
	by_name: HashMap<Box<str>, usize>,
}

impl<T: EnumLike> Table<T> {
	/// Loads `T`'s definitions and constructs every enumerator.
	pub(crate) fn build() -> Result<Self, DefinitionError> {
		let declaring_type = T::declaring_type();
		let table = Self::assemble(declaring_type, T::definitions()?, T::DUPLICATES, T::construct)?;
		tracing::debug!(declaring_type, count = table.entries.len(), "built enumerator table");
		Ok(table)
	}
}

impl<T> Table<T> {
	pub(crate) fn assemble<A>(
		declaring_type: &'static str,
		defs: Definitions<A>,
		policy: DuplicatePolicy,
		mut construct: impl FnMut(A) -> T,
	) -> Result<Self, DefinitionError> {
		let mut entries: Vec<Enumerator<T>> = Vec::with_capacity(defs.len());
		let mut by_name: HashMap<Box<str>, usize> = HashMap::default();

		for (position, (name, args)) in defs.into_iter().enumerate() {
			if name.is_empty() {
				return Err(DefinitionError::EmptyName { position });
			}

			if let Some(&ordinal) = by_name.get(&name) {
				match policy {
					DuplicatePolicy::Reject => return Err(DefinitionError::DuplicateName(name)),
					DuplicatePolicy::FirstWins => {
						tracing::warn!(declaring_type, name = %name, "duplicate enumerator ignored");
					}
					DuplicatePolicy::LastWins => {
						tracing::warn!(declaring_type, name = %name, ordinal, "duplicate enumerator replaced earlier definition");
						entries[ordinal].replace_value(construct(args));
					}
				}
				continue;
			}

			let ordinal = entries.len();
			by_name.insert(name.clone(), ordinal);
			entries.push(Enumerator::new(name, ordinal, construct(args)));
		}

		Ok(Self {
			entries: entries.into_boxed_slice(),
			by_name,
		})
	}

	pub(crate) fn entries(&self) -> &[Enumerator<T>] {
		&self.entries
	}

	pub(crate) fn get(&self, name: &str) -> Option<&Enumerator<T>> {
		self.by_name.get(name).map(|&ordinal| &self.entries[ordinal])
	}
}
