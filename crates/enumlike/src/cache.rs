//! Process-wide cache of enumerator tables, keyed by declaring type.
//!
//! The map lock is held only to fetch or insert a type's slot. Construction
//! runs inside the slot's [`OnceLock`], so it happens exactly once per type
//! and may itself query other declaring types.

use std::any::{Any, TypeId};
use std::sync::{LazyLock, OnceLock};

use parking_lot::Mutex;
use rustc_hash::FxHashMap as HashMap;

use crate::EnumLike;
use crate::error::DefinitionError;
use crate::table::Table;

pub(crate) type Built<T> = Result<Table<T>, DefinitionError>;

type Slot = &'static (dyn Any + Send + Sync);

static TABLES: LazyLock<Mutex<HashMap<TypeId, Slot>>> = LazyLock::new(|| Mutex::new(HashMap::default()));

/// Returns `T`'s table, building it on first access.
pub(crate) fn table<T: EnumLike>() -> &'static Built<T> {
	slot::<T>().get_or_init(|| {
		let built = Table::<T>::build();
		if let Err(e) = &built {
			tracing::error!(declaring_type = T::declaring_type(), error = %e, "enumerator definitions failed to load");
		}
		built
	})
}

fn slot<T: EnumLike>() -> &'static OnceLock<Built<T>> {
	let slot: Slot = *TABLES.lock().entry(TypeId::of::<T>()).or_insert_with(|| {
		let cell: &'static OnceLock<Built<T>> = Box::leak(Box::new(OnceLock::new()));
		cell as Slot
	});

	match slot.downcast_ref::<OnceLock<Built<T>>>() {
		Some(cell) => cell,
		None => unreachable!("enumerator cache slot for {} holds a foreign table", T::declaring_type()),
	}
}
