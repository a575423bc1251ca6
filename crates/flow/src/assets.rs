/// Derive the image asset file name for a choice label.
///
/// Lower-cases the label and strips all whitespace, so `"Zen Cafe"` maps to
/// `zencafe.jpg`. Purely a naming convention for best-effort visuals; whether
/// the file exists is the caller's problem.
#[must_use]
pub fn asset_file_name(label: &str) -> String {
	let mut name: String = label
		.chars()
		.filter(|ch| !ch.is_whitespace())
		.flat_map(char::to_lowercase)
		.collect();
	name.push_str(".jpg");
	name
}

#[cfg(test)]
mod tests {
	use super::asset_file_name;

	#[test]
	fn lowercases_and_strips_whitespace() {
		assert_eq!(asset_file_name("Zen Cafe"), "zencafe.jpg");
		assert_eq!(asset_file_name("Mister Merchants"), "mistermerchants.jpg");
		assert_eq!(asset_file_name("Tsuki"), "tsuki.jpg");
	}

	#[test]
	fn handles_tabs_and_multiple_spaces() {
		assert_eq!(asset_file_name("Le \t Flemington"), "leflemington.jpg");
	}
}
