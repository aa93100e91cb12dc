//! Java-style enumerations with associated data.
//!
//! A declaring type lists a fixed, ordered set of named constants. On first
//! access the library constructs one [`Enumerator`] per name, assigns
//! ordinals in declaration order, and caches the table for the rest of the
//! process:
//!
//! - [`EnumLike`]: declaring-type contract plus `values`, `first`, `has` and
//!   `by_name` queries
//! - [`Identified`]: `by_id` for types whose payload carries an identifier
//! - [`Definitions`]: ordered name → constructor-arguments list, declared in
//!   code or loaded from a TOML table
//! - [`enumeration!`]: compile-time declaration with one accessor per constant
//!
//! ```ignore
//! pub struct DayOfWeek { id: i32 }
//!
//! enumeration! {
//!     DayOfWeek(i32) => |id| DayOfWeek { id };
//!     MONDAY = 1,
//!     TUESDAY = 2,
//! }
//!
//! assert_eq!(DayOfWeek::values().len(), 2);
//! assert_eq!(DayOfWeek::by_name("TUESDAY")?, DayOfWeek::tuesday());
//! ```

mod cache;
mod codec;
mod declare;
pub mod definitions;
mod enumerator;
pub mod error;
mod macros;
mod table;

pub use declare::{DuplicatePolicy, EnumLike, Identified};
pub use definitions::Definitions;
pub use enumerator::Enumerator;
pub use error::{DefinitionError, EnumError};

#[doc(hidden)]
pub use declare::is_reserved_accessor as __is_reserved_accessor;
#[doc(hidden)]
pub use paste as __paste;
