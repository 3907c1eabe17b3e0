use crate::bind::macros::entity;
use crate::schema::FieldDescriptor as Field;

entity! {
    /// Name-value pair
    pub struct Property {
        /// Name, namespaced by convention (`cdx:` is reserved)
        name: Option<String> => 0, Field::new("name").attribute(),
        /// Value
        value: Option<String> => 1, Field::new("value").text(),
    }
}

impl Property {
    /// New property
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
        }
    }
}
