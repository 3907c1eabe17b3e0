//! # Components
use super::{
    Extension, ExternalReference, Hash, LicenseChoice, ModelCard, OrganizationalContact,
    OrganizationalEntity, Property, Signature,
};
use crate::bind::macros::{entity, wire_enum};
use crate::schema::FieldDescriptor as Field;
use crate::schema::SchemaVersion as V;

wire_enum! {
    /// Component Type
    pub enum ComponentType {
        /// Application
        Application => "application",
        /// Framework
        Framework => "framework",
        /// Library
        Library => "library",
        /// Container image
        Container => "container",
        /// Platform or runtime environment
        Platform => "platform",
        /// Operating system
        OperatingSystem => "operating-system",
        /// Hardware device
        Device => "device",
        /// Device driver
        DeviceDriver => "device-driver",
        /// Firmware
        Firmware => "firmware",
        /// File
        File => "file",
        /// Machine learning model
        MachineLearningModel => "machine-learning-model",
        /// Data
        Data => "data",
        /// Cryptographic asset
        CryptographicAsset => "cryptographic-asset",
    }
}

wire_enum! {
    /// Component Scope
    pub enum ComponentScope {
        /// Required at runtime
        Required => "required",
        /// Not required at runtime
        Optional => "optional",
        /// Not part of the delivered product
        Excluded => "excluded",
    }
}

entity! {
    /// Software, hardware or data component
    pub struct Component {
        /// Component type
        component_type: Option<ComponentType> => 0, Field::new("type").attribute(),
        /// MIME type, mostly for `file` components
        mime_type: Option<String> => 1, Field::new("mime-type").attribute(),
        /// BOM reference
        bom_ref: Option<String> => 2, Field::new("bom-ref").attribute(),
        /// Supplier
        supplier: Option<OrganizationalEntity> => 3, Field::new("supplier"),
        /// Manufacturer
        manufacturer: Option<OrganizationalEntity> => 4, Field::new("manufacturer").since(V::V1_6),
        /// Authors
        authors: Vec<OrganizationalContact> => 5, Field::new("authors").wrapped("authors", "author").since(V::V1_6),
        /// Author (free text)
        author: Option<String> => 6, Field::new("author"),
        /// Publisher
        publisher: Option<String> => 7, Field::new("publisher"),
        /// Group or namespace
        group: Option<String> => 8, Field::new("group"),
        /// Name
        name: Option<String> => 9, Field::new("name"),
        /// Version
        version: Option<String> => 10, Field::new("version"),
        /// Description
        description: Option<String> => 11, Field::new("description"),
        /// Scope
        scope: Option<ComponentScope> => 12, Field::new("scope"),
        /// Hashes
        hashes: Vec<Hash> => 13, Field::new("hashes").wrapped("hashes", "hash"),
        /// Licenses
        licenses: Option<LicenseChoice> => 14, Field::new("licenses"),
        /// Copyright notice
        copyright: Option<String> => 15, Field::new("copyright"),
        /// CPE identifier
        cpe: Option<String> => 16, Field::new("cpe"),
        /// Package URL
        purl: Option<String> => 17, Field::new("purl"),
        /// OmniBOR artifact identifiers
        omnibor_id: Vec<String> => 18, Field::new("omniborId").since(V::V1_6),
        /// Software Heritage identifiers
        swhid: Vec<String> => 19, Field::new("swhid").since(V::V1_6),
        /// Modified from the original (deprecated)
        modified: Option<bool> => 20, Field::new("modified"),
        /// External references
        external_references: Vec<ExternalReference> => 21,
            Field::new("externalReferences").wrapped("externalReferences", "reference"),
        /// Properties
        properties: Vec<Property> => 22, Field::new("properties").wrapped("properties", "property").since(V::V1_3),
        /// Sub-components
        components: Vec<Component> => 23, Field::new("components").wrapped("components", "component"),
        /// Model card of a machine learning model
        model_card: Option<ModelCard> => 24, Field::new("modelCard").since(V::V1_5),
        /// Tags
        tags: Vec<String> => 25, Field::new("tags").wrapped("tags", "tag").since(V::V1_6),
        /// Enveloped signature
        signature: Option<Signature> => 26, Field::new("signature").json_only().since(V::V1_4),
        /// Foreign namespace extensions
        extensions: Vec<Extension> => 27, Field::new("extensions").xml_only().foreign(),
    }
}

impl Component {
    /// New component
    pub fn new(component_type: ComponentType, name: impl Into<String>) -> Self {
        Self {
            component_type: Some(component_type),
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Set the version
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set the BOM reference
    pub fn with_bom_ref(mut self, bom_ref: impl Into<String>) -> Self {
        self.bom_ref = Some(bom_ref.into());
        self
    }

    /// Set the package URL
    pub fn with_purl(mut self, purl: impl Into<String>) -> Self {
        self.purl = Some(purl.into());
        self
    }

    /// This component and every nested sub-component, depth first
    pub fn walk(&self) -> Vec<&Component> {
        let mut all = vec![self];
        for child in self.components.iter() {
            all.extend(child.walk());
        }
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bind::{Bind, Context};
    use crate::schema::{Format, SchemaVersion};
    use crate::utils::config::{ConverterConfig, Policy};
    use serde_json::json;

    #[test]
    fn test_json_key_order() {
        let ctx = Context::new(SchemaVersion::V1_6, Format::Json, &ConverterConfig::default());
        let component = Component::new(ComponentType::Library, "libfoo")
            .with_version("1.0.0")
            .with_bom_ref("pkg:libfoo")
            .with_purl("pkg:generic/libfoo@1.0.0");

        let value = component.to_json(&ctx).unwrap().unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["type", "bom-ref", "name", "version", "purl"]);
    }

    #[test]
    fn test_unknown_type() {
        let value = json!({"type": "spaceship", "name": "libfoo"});

        let lenient = Context::new(SchemaVersion::V1_6, Format::Json, &ConverterConfig::default());
        let component = Component::from_json(&value, &lenient).unwrap().unwrap();
        assert_eq!(component.component_type, None);
        assert_eq!(component.name.as_deref(), Some("libfoo"));

        let config = ConverterConfig {
            unknown_enums: Policy::Strict,
            ..Default::default()
        };
        let strict = Context::new(SchemaVersion::V1_6, Format::Json, &config);
        let error = Component::from_json(&value, &strict).unwrap_err();
        assert_eq!(error.path(), Some("type"));
    }

    #[test]
    fn test_walk() {
        let mut parent = Component::new(ComponentType::Application, "app");
        let mut child = Component::new(ComponentType::Library, "child");
        child.components.push(Component::new(ComponentType::File, "grandchild"));
        parent.components.push(child);

        let names: Vec<&str> = parent.walk().iter().filter_map(|c| c.name.as_deref()).collect();
        assert_eq!(names, vec!["app", "child", "grandchild"]);
    }
}
