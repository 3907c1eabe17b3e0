use cdxkit::bind::VersionMismatchWarning;
use cdxkit::bom::{deserialize, serialize};
use cdxkit::models::{Bom, Component, ComponentType, ToolChoice};
use cdxkit::{CdxError, Converter, ConverterConfig, Format, Policy, SchemaVersion};

const TAGS_AT_1_4: &str = r#"{
    "bomFormat": "CycloneDX",
    "specVersion": "1.4",
    "components": [
        {"type": "library", "name": "libfoo", "tags": ["native"]}
    ]
}"#;

#[test]
fn field_visibility_follows_bounds() {
    let mut component = Component::new(ComponentType::Library, "libfoo");
    component.tags.push("native".to_string());
    component.model_card = Some(Default::default());
    let mut bom = Bom::default();
    bom.components.push(component);

    for version in SchemaVersion::all() {
        let json = serialize(&bom, *version, Format::Json).unwrap();
        // `modelCard` exists from 1.5, `tags` from 1.6
        assert_eq!(json.contains("modelCard"), *version >= SchemaVersion::V1_5, "{version}");
        assert_eq!(json.contains(r#""tags""#), *version >= SchemaVersion::V1_6, "{version}");
    }
}

#[test]
fn lenient_version_policy_drops_and_warns() {
    let (bom, warnings) = Converter::default()
        .deserialize_with_warnings(TAGS_AT_1_4, SchemaVersion::V1_4, Format::Json)
        .unwrap();

    assert!(bom.components[0].tags.is_empty());
    assert_eq!(bom.components[0].name.as_deref(), Some("libfoo"));
    assert_eq!(
        warnings,
        vec![VersionMismatchWarning {
            entity: "Component",
            field: "tags",
            version: SchemaVersion::V1_4,
        }]
    );
}

#[test]
fn strict_version_policy_fails() {
    let config = ConverterConfig {
        version_policy: Policy::Strict,
        ..Default::default()
    };
    let error = Converter::new(config)
        .deserialize(TAGS_AT_1_4, SchemaVersion::V1_4, Format::Json)
        .unwrap_err();

    let CdxError::Parse { path, message } = error else {
        panic!("expected a parse error");
    };
    assert_eq!(path, "components[0].tags");
    assert!(message.contains("1.4"));
}

#[test]
fn strict_version_policy_in_xml() {
    let xml = r#"<bom xmlns="http://cyclonedx.org/schema/bom/1.2">
  <components>
    <component type="library">
      <name>libfoo</name>
      <properties><property name="a">b</property></properties>
    </component>
  </components>
</bom>"#;

    let (bom, warnings) = Converter::default()
        .deserialize_with_warnings(xml, SchemaVersion::V1_2, Format::Xml)
        .unwrap();
    assert!(bom.components[0].properties.is_empty());
    assert_eq!(warnings.len(), 1);

    let error = Converter::new(ConverterConfig::strict())
        .deserialize(xml, SchemaVersion::V1_2, Format::Xml)
        .unwrap_err();
    assert_eq!(error.path(), Some("components[0].properties"));
}

#[test]
fn unknown_fields_are_ignored() {
    let json = r#"{
        "bomFormat": "CycloneDX",
        "specVersion": "1.5",
        "futureSection": {"anything": [1, 2, 3]},
        "components": [{"type": "library", "name": "libfoo", "flavour": "vanilla"}]
    }"#;
    for converter in [Converter::default(), Converter::new(ConverterConfig::strict())] {
        let bom = converter.deserialize(json, SchemaVersion::V1_5, Format::Json).unwrap();
        assert_eq!(bom.components.len(), 1);
    }

    let xml = r#"<bom xmlns="http://cyclonedx.org/schema/bom/1.5">
  <components><component type="library"><name>libfoo</name><flavour>vanilla</flavour></component></components>
  <futureSection/>
</bom>"#;
    let bom = deserialize(xml, SchemaVersion::V1_5, Format::Xml).unwrap();
    assert_eq!(bom.components[0].name.as_deref(), Some("libfoo"));
}

#[test]
fn unknown_enum_values_in_lists_are_dropped() {
    let json = r#"{
        "bomFormat": "CycloneDX",
        "specVersion": "1.5",
        "formulation": [{"workflows": [{"uid": "w", "taskTypes": ["build", "teleport", "test"]}]}]
    }"#;
    let bom = deserialize(json, SchemaVersion::V1_5, Format::Json).unwrap();
    let task_types: Vec<&str> = bom.formulation[0].workflows[0]
        .task_types
        .iter()
        .map(|t| t.as_str())
        .collect();
    assert_eq!(task_types, vec!["build", "test"]);

    let config = ConverterConfig {
        unknown_enums: Policy::Strict,
        ..Default::default()
    };
    let error = Converter::new(config)
        .deserialize(json, SchemaVersion::V1_5, Format::Json)
        .unwrap_err();
    assert_eq!(error.path(), Some("formulation[0].workflows[0].taskTypes[1]"));
}

#[test]
fn error_path_through_structured_tools() {
    let json = r#"{
        "bomFormat": "CycloneDX",
        "specVersion": "1.5",
        "metadata": {"tools": {"components": [{"type": "spaceship", "name": "x"}]}}
    }"#;

    let lenient = deserialize(json, SchemaVersion::V1_5, Format::Json).unwrap();
    assert!(lenient.metadata.is_some());

    let error = Converter::new(ConverterConfig::strict())
        .deserialize(json, SchemaVersion::V1_5, Format::Json)
        .unwrap_err();
    assert_eq!(error.path(), Some("metadata.tools.components[0].type"));
}

#[test]
fn malformed_input_is_a_parse_error() {
    let cases = [
        (r#"{"components": {"name": "not a list"}}"#, "components"),
        (r#"{"metadata": {"timestamp": "yesterday"}}"#, "metadata.timestamp"),
        (r#"{"version": "one"}"#, "version"),
        (r#"{"bomFormat": "SPDX"}"#, "bomFormat"),
    ];
    for (json, expected) in cases {
        let error = deserialize(json, SchemaVersion::V1_6, Format::Json).unwrap_err();
        assert_eq!(error.path(), Some(expected), "{json}");
    }
}

#[test]
fn empty_tools_element_is_legacy() {
    let xml = r#"<bom xmlns="http://cyclonedx.org/schema/bom/1.4" version="1">
  <metadata>
    <tools/>
  </metadata>
</bom>"#;

    let bom = Converter::new(ConverterConfig::strict())
        .deserialize(xml, SchemaVersion::V1_4, Format::Xml)
        .unwrap();
    let metadata = bom.metadata.as_ref().unwrap();
    assert_eq!(metadata.tools, Some(ToolChoice::Legacy(Vec::new())));

    let (_, warnings) = Converter::default()
        .deserialize_with_warnings(xml, SchemaVersion::V1_4, Format::Xml)
        .unwrap();
    assert!(warnings.is_empty());

    // the empty list is written back in both formats
    let written = serialize(&bom, SchemaVersion::V1_4, Format::Xml).unwrap();
    assert!(written.contains("<tools/>"));
    assert_eq!(deserialize(&written, SchemaVersion::V1_4, Format::Xml).unwrap(), bom);
    let json = serialize(&bom, SchemaVersion::V1_4, Format::Json).unwrap();
    assert!(json.contains(r#""tools": []"#));
    assert_eq!(deserialize(&json, SchemaVersion::V1_4, Format::Json).unwrap(), bom);
}
