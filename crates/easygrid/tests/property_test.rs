use easygrid::filter::FilterRegistry;
use easygrid::{Column, ColumnConfig, DataColumn, FormatterKind};
use proptest::prelude::*;
use serde_json::{Map, Value};

fn format_token() -> impl Strategy<Value = String> {
	prop_oneof![
		Just("text".to_string()),
		Just("html".to_string()),
		Just("image".to_string()),
		Just("url".to_string()),
		"[a-z]{1,8}",
	]
}

fn cell_value() -> impl Strategy<Value = Value> {
	prop_oneof![
		Just(Value::Null),
		any::<bool>().prop_map(Value::from),
		any::<i64>().prop_map(Value::from),
		".{0,24}".prop_map(Value::from),
	]
}

proptest! {
	/// Rendering a row equals formatting the extracted value.
	#[test]
	fn prop_render_is_format_of_value(
		token in format_token(),
		attribute in "[a-z_]{1,12}",
		value in cell_value(),
	) {
		let registry = FilterRegistry::with_defaults();
		let column = DataColumn::new(
			ColumnConfig::new().with_attribute(attribute.clone()).with_format(token),
			&registry,
		)
		.unwrap();
		let mut row = Map::new();
		row.insert(attribute, value.clone());

		let extracted = column.value(&row).unwrap();
		prop_assert_eq!(&extracted, &value);
		prop_assert_eq!(column.render(&row).unwrap(), column.formatter().format(&extracted));
	}

	/// Unknown format tokens always resolve to text.
	#[test]
	fn prop_unknown_token_is_text(token in "[a-z]{1,8}") {
		let column = DataColumn::new(
			ColumnConfig::new().with_attribute("col").with_format(token.clone()),
			&FilterRegistry::new(),
		)
		.unwrap();
		let expected = FormatterKind::from_token(&token).map_or("text", |kind| kind.as_str());
		prop_assert_eq!(column.formatter().name(), expected);
	}

	/// Any registered filter token forces the stub formatter.
	#[test]
	fn prop_token_filter_forces_stub(token in format_token(), data in cell_value()) {
		let column = DataColumn::new(
			ColumnConfig::new()
				.with_attribute("col")
				.with_filter_token("select")
				.with_filter_data(data)
				.with_format(token),
			&FilterRegistry::with_defaults(),
		)
		.unwrap();
		prop_assert_eq!(column.formatter().name(), "stub");
	}
}
