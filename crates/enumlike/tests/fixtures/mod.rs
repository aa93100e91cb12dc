//! Declaring types shared by the integration tests.
#![allow(dead_code)]

use enumlike::{DefinitionError, Definitions, DuplicatePolicy, EnumLike, Identified, enumeration};

// Dependencies linked into every test binary, used by only some of them.
use parking_lot as _;
use paste as _;
use pretty_assertions as _;
use proptest as _;
use rstest as _;
use rustc_hash as _;
use serde as _;
use serde_json as _;
use thiserror as _;
use toml as _;
use tracing as _;

#[derive(Debug, PartialEq, Eq)]
pub struct DayOfWeek {
	id: i32,
}

enumeration! {
	DayOfWeek(i32) => |id| DayOfWeek { id };

	MONDAY = 1,
	TUESDAY = 2,
	WEDNESDAY = 3,
	THURSDAY = 4,
	FRIDAY = 5,
	SATURDAY = 6,
	SUNDAY = 7,
}

impl DayOfWeek {
	pub fn is_weekend(&self) -> bool {
		[Self::saturday(), Self::sunday()].iter().any(|day| day.value() == self)
	}
}

impl Identified for DayOfWeek {
	type Id = i32;

	fn id(&self) -> i32 {
		self.id
	}
}

#[derive(Debug)]
pub struct Color {
	code: &'static str,
	rgb: [u8; 3],
}

enumeration! {
	Color((&'static str, [u8; 3])) => |(code, rgb)| Color { code, rgb };

	RED = ("#FF0000", [255, 0, 0]),
	BLUE = ("#0000FF", [0, 0, 255]),
	BLACK = ("#000000", [0, 0, 0]),
}

impl Color {
	pub fn code(&self) -> &str {
		self.code
	}

	pub fn rgb(&self) -> [u8; 3] {
		self.rgb
	}
}

pub const PALETTE: &str = r##"
RED = ["#FF0000", [255, 0, 0]]
BLUE = ["#0000FF", [0, 0, 255]]
BLACK = ["#000000", [0, 0, 0]]
"##;

/// Same colors as [`Color`], loaded from a TOML table.
#[derive(Debug)]
pub struct PaletteColor {
	code: String,
	rgb: [u8; 3],
}

impl EnumLike for PaletteColor {
	type Args = (String, [u8; 3]);

	fn construct((code, rgb): Self::Args) -> Self {
		Self { code, rgb }
	}

	fn definitions() -> Result<Definitions<Self::Args>, DefinitionError> {
		Definitions::from_toml_str(PALETTE)
	}

	fn declaring_type() -> &'static str {
		"PaletteColor"
	}
}

impl PaletteColor {
	pub fn code(&self) -> &str {
		&self.code
	}

	pub fn rgb(&self) -> [u8; 3] {
		self.rgb
	}
}

#[derive(Debug)]
pub struct Status {
	text: &'static str,
}

enumeration! {
	Status(&'static str) => |text| Status { text };

	READY = "Ready",
	/// Work has started.
	IN_PROGRESS = "In Progress",
	DONE = "Done",
}

impl Status {
	pub fn text(&self) -> &str {
		self.text
	}
}

/// Shares the name `RED` with [`Color`].
#[derive(Debug)]
pub struct Signal;

enumeration! {
	Signal(()) => |()| Signal;

	RED = (),
	GREEN = (),
}

/// A source that never parses.
#[derive(Debug)]
pub struct Broken;

impl EnumLike for Broken {
	type Args = u8;

	fn construct(_: u8) -> Self {
		Broken
	}

	fn definitions() -> Result<Definitions<u8>, DefinitionError> {
		Definitions::from_toml_str("NOT TOML ===")
	}
}

/// Hand-written definitions that repeat a name.
#[derive(Debug)]
pub struct Legacy {
	code: u16,
}

impl EnumLike for Legacy {
	type Args = u16;

	const DUPLICATES: DuplicatePolicy = DuplicatePolicy::FirstWins;

	fn construct(code: u16) -> Self {
		Self { code }
	}

	fn definitions() -> Result<Definitions<u16>, DefinitionError> {
		Ok(Definitions::new().with("OK", 200).with("MOVED", 301).with("OK", 204))
	}

	fn declaring_type() -> &'static str {
		"Legacy"
	}
}

impl Legacy {
	pub fn code(&self) -> u16 {
		self.code
	}
}

/// Definitions derived from another declaring type.
#[derive(Debug)]
pub struct Shade {
	base: &'static str,
}

impl EnumLike for Shade {
	type Args = &'static str;

	fn construct(base: &'static str) -> Self {
		Self { base }
	}

	fn definitions() -> Result<Definitions<&'static str>, DefinitionError> {
		Ok(Color::values().iter().map(|c| (format!("DARK_{}", c.name()), c.code)).collect())
	}
}

impl Shade {
	pub fn base(&self) -> &str {
		self.base
	}
}

/// Repeats a name under the default policy.
#[derive(Debug)]
pub struct Strict;

impl EnumLike for Strict {
	type Args = u8;

	fn construct(_: u8) -> Self {
		Strict
	}

	fn definitions() -> Result<Definitions<u8>, DefinitionError> {
		Ok(Definitions::new().with("A", 1).with("B", 2).with("A", 3))
	}
}

impl Identified for Strict {
	type Id = u8;

	fn id(&self) -> u8 {
		0
	}
}

/// Later definitions override earlier ones.
#[derive(Debug)]
pub struct Revised {
	level: u8,
}

impl EnumLike for Revised {
	type Args = u8;

	const DUPLICATES: DuplicatePolicy = DuplicatePolicy::LastWins;

	fn construct(level: u8) -> Self {
		Self { level }
	}

	fn definitions() -> Result<Definitions<u8>, DefinitionError> {
		Ok(Definitions::new().with("LOW", 1).with("HIGH", 9).with("LOW", 2))
	}
}

impl Revised {
	pub fn level(&self) -> u8 {
		self.level
	}
}

/// Constant names close to, but distinct from, the query functions.
#[derive(Debug)]
pub struct Rank {
	points: u8,
}

enumeration! {
	Rank(u8) => |points| Rank { points };

	FIRST_PLACE = 3,
	VALUE = 2,
	HAS_BYE = 1,
}

impl Rank {
	pub fn points(&self) -> u8 {
		self.points
	}
}
