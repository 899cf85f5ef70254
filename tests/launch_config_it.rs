// crates.io
use color_eyre::Result;
// self
use lti_consumer::{
	config::LaunchConfig,
	consumer::LaunchRequestBuilder,
	error::ConfigError,
	params::ParamValue,
};

#[test]
fn first_config_wins_and_custom_params_union() -> Result<()> {
	let builder = LaunchRequestBuilder::new("ck", "cs").with_params([("resource_link_id", "rl1")]);
	let first = LaunchConfig::from_json(
		r#"{"launch_url":"https://first.example/launch","custom_params":{"chapter":"3"}}"#,
	)?;
	let second = LaunchConfig::new("https://second.example/launch").with_custom_param("level", "2");

	builder.apply_config(&first);
	builder.apply_config(&second);

	assert_eq!(builder.launch_url().as_deref(), Some("https://first.example/launch"));

	let data = builder.generate_launch_data("Learner", "full")?;

	assert_eq!(data.get("custom_chapter"), Some(&ParamValue::from("3")));

	Ok(())
}

#[test]
fn config_custom_params_do_not_override_stored_values() -> Result<()> {
	let builder = LaunchRequestBuilder::new("ck", "cs")
		.with_params([("resource_link_id", "rl1"), ("custom_chapter", "1")]);

	builder.apply_config(
		&LaunchConfig::new("https://tool.example/launch")
			.with_custom_param("chapter", "9")
			.with_custom_param("topic", "algebra"),
	);

	let data = builder.generate_launch_data("Learner", "full")?;

	assert_eq!(data.get("custom_chapter"), Some(&ParamValue::from("1")));
	assert_eq!(data.get("custom_topic"), Some(&ParamValue::from("algebra")));

	Ok(())
}

#[test]
fn explicit_launch_url_blocks_config() {
	let builder = LaunchRequestBuilder::new("ck", "cs")
		.with_params([("launch_url", "https://explicit.example/launch")]);

	builder.apply_config(
		&LaunchConfig::new("https://config.example/launch").with_custom_param("a", "b"),
	);

	assert_eq!(builder.launch_url().as_deref(), Some("https://explicit.example/launch"));
	assert_eq!(builder.params().custom_param("a"), None);
}

#[test]
fn missing_launch_url_in_json_is_reported() {
	let err = LaunchConfig::from_json(r#"{"custom_params":{}}"#)
		.expect_err("A configuration without launch_url must be rejected.");

	assert!(matches!(err, ConfigError::ConfigParse { .. }));
	assert_eq!(err.to_string(), "Launch configuration is malformed.");
}
