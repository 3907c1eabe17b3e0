//! # BOM Metadata
use chrono::{DateTime, Utc};

use super::{
    Component, LicenseChoice, Lifecycle, OrganizationalContact, OrganizationalEntity, Property,
    ToolChoice,
};
use crate::bind::macros::entity;
use crate::schema::FieldDescriptor as Field;
use crate::schema::SchemaVersion as V;

entity! {
    /// Information about the BOM itself
    pub struct Metadata {
        /// Creation time
        timestamp: Option<DateTime<Utc>> => 0, Field::new("timestamp"),
        /// Lifecycle stages the BOM was produced in
        lifecycles: Vec<Lifecycle> => 1, Field::new("lifecycles").wrapped("lifecycles", "lifecycle").since(V::V1_5),
        /// Tools used to create the BOM
        tools: Option<ToolChoice> => 2, Field::new("tools"),
        /// Authors of the BOM
        authors: Vec<OrganizationalContact> => 3, Field::new("authors").wrapped("authors", "author"),
        /// Component the BOM describes
        component: Option<Component> => 4, Field::new("component"),
        /// Manufacturer of the component (deprecated from 1.6)
        manufacture: Option<OrganizationalEntity> => 5, Field::new("manufacture"),
        /// Manufacturer of the component
        manufacturer: Option<OrganizationalEntity> => 6, Field::new("manufacturer").since(V::V1_6),
        /// Supplier of the component
        supplier: Option<OrganizationalEntity> => 7, Field::new("supplier"),
        /// Licenses of the BOM document
        licenses: Option<LicenseChoice> => 8, Field::new("licenses").since(V::V1_3),
        /// Properties
        properties: Vec<Property> => 9, Field::new("properties").wrapped("properties", "property").since(V::V1_3),
    }
}

impl Metadata {
    /// Metadata stamped with the current time
    pub fn now() -> Self {
        Self {
            timestamp: Some(Utc::now()),
            ..Default::default()
        }
    }
}
