//! Fixed date-type and place catalogs, plus the option filter.

/// Places offered for the breakfast-flavored dates, in display order.
pub const BREAKFAST_PLACES: [&str; 5] = [
	"German Bakery",
	"Beans n Bakery",
	"French Window",
	"Le Flemington",
	"Zen Cafe",
];

/// Places offered for the dinner-flavored dates, in display order.
pub const DINNER_PLACES: [&str; 4] = ["Mister Merchants", "Tsuki", "Cafe Paash", "Kukoo"];

/// Label of the always-present free-text option.
pub const CUSTOM_LABEL: &str = "Custom";

/// Sentinel recorded when the chosen date type skips the restaurant pick.
pub const NO_RESTAURANT: &str = "No restaurant selected";

/// The four date types offered on the date-pick screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateType {
	BreakfastAndHotel,
	HotelAndUTurns,
	HotelAndDinner,
	FoodAndUTurns,
}

impl DateType {
	/// All date types in display order.
	pub const ALL: [DateType; 4] = [
		DateType::BreakfastAndHotel,
		DateType::HotelAndUTurns,
		DateType::HotelAndDinner,
		DateType::FoodAndUTurns,
	];

	/// The label shown on the button and recorded in [`FlowState`].
	///
	/// [`FlowState`]: crate::FlowState
	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			DateType::BreakfastAndHotel => "Breakfast n Hotel",
			DateType::HotelAndUTurns => "Hotel n u turns",
			DateType::HotelAndDinner => "Hotel n Dinner",
			DateType::FoodAndUTurns => "Food n u turns",
		}
	}

	/// Look a date type back up from its recorded label.
	#[must_use]
	pub fn from_label(label: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|date| date.label() == label)
	}

	/// Whether this date type jumps straight to the summary screen.
	#[must_use]
	pub fn skips_restaurant(self) -> bool {
		matches!(self, DateType::HotelAndUTurns)
	}
}

/// A selectable entry on the place-pick screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceOption {
	/// A place from one of the fixed catalogs.
	Named(&'static str),
	/// The free-text option.
	Custom,
}

impl PlaceOption {
	/// The label shown on the button.
	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			PlaceOption::Named(name) => name,
			PlaceOption::Custom => CUSTOM_LABEL,
		}
	}
}

/// Filter the place catalog for a chosen date type.
///
/// Breakfast-only dates see the breakfast catalog, dinner-only dates the
/// dinner catalog, and the combined date the union of both, each followed
/// by the custom option. The no-restaurant date type never reaches the
/// place pick and gets an empty list.
#[must_use]
pub fn options_for(date: DateType) -> Vec<PlaceOption> {
	let named: &[&'static str] = match date {
		DateType::BreakfastAndHotel => &BREAKFAST_PLACES,
		DateType::HotelAndDinner => &DINNER_PLACES,
		DateType::FoodAndUTurns => {
			let mut options: Vec<PlaceOption> = BREAKFAST_PLACES
				.iter()
				.chain(DINNER_PLACES.iter())
				.map(|name| PlaceOption::Named(name))
				.collect();
			options.push(PlaceOption::Custom);
			return options;
		}
		DateType::HotelAndUTurns => return Vec::new(),
	};

	let mut options: Vec<PlaceOption> =
		named.iter().map(|name| PlaceOption::Named(name)).collect();
	options.push(PlaceOption::Custom);
	options
}
