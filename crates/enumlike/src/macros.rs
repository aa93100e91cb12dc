//! Declaration macro for compile-time enumerations.

/// Declares the enumerators of a type from compile-time constants.
///
/// Implements [`EnumLike`](crate::EnumLike) for the type and generates one
/// accessor per constant, named after the constant in lowercase. Accessors
/// resolve by declaration position, so an undeclared name fails to compile.
/// Constants whose accessor would shadow a query function of
/// [`EnumLike`](crate::EnumLike) (`VALUES`, `FIRST`, `BY_NAME`, ...) are
/// rejected at compile time.
///
/// ```ignore
/// pub struct Color { code: &'static str, rgb: [u8; 3] }
///
/// enumeration! {
///     Color((&'static str, [u8; 3])) => |(code, rgb)| Color { code, rgb };
///
///     RED = ("#FF0000", [255, 0, 0]),
///     BLUE = ("#0000FF", [0, 0, 255]),
///     /// Absence of light.
///     BLACK = ("#000000", [0, 0, 0]),
/// }
///
/// assert_eq!(Color::red().code, "#FF0000");
/// assert_eq!(Color::black().ordinal(), 2);
/// assert_eq!(Color::blue().to_string(), "Color::BLUE");
/// ```
#[macro_export]
macro_rules! enumeration {
	(
		$ty:ident ($args:ty) => $ctor:expr;
		$(
			$(#[$attr:meta])*
			$name:ident = $value:expr
		),+ $(,)?
	) => {
		impl $crate::EnumLike for $ty {
			type Args = $args;

			fn construct(args: $args) -> Self {
				let ctor: fn($args) -> Self = $ctor;
				ctor(args)
			}

			fn definitions() -> ::core::result::Result<$crate::Definitions<$args>, $crate::DefinitionError> {
				::core::result::Result::Ok(<$crate::Definitions<$args> as ::core::iter::FromIterator<_>>::from_iter([
					$( (stringify!($name), $value) ),+
				]))
			}

			fn declaring_type() -> &'static str {
				stringify!($ty)
			}
		}

		const _: () = {
			$(
				if $crate::__is_reserved_accessor(stringify!($name)) {
					panic!(concat!(
						"enumerator `", stringify!($ty), "::", stringify!($name),
						"` would shadow an EnumLike query function"
					));
				}
			)+
		};

		$crate::__paste::paste! {
			#[doc(hidden)]
			#[allow(non_camel_case_types, clippy::upper_case_acronyms)]
			enum [<__ $ty Ordinal>] {
				$($name),+
			}

			impl $ty {
				$(
					$(#[$attr])*
					pub fn [<$name:lower>]() -> &'static $crate::Enumerator<Self> {
						&<Self as $crate::EnumLike>::values()[[<__ $ty Ordinal>]::$name as usize]
					}
				)+
			}
		}
	};
}
