//! # Organizations and Contacts
use crate::bind::macros::entity;
use crate::schema::FieldDescriptor as Field;
use crate::schema::SchemaVersion as V;

entity! {
    /// Organization (supplier, manufacturer, provider, ...)
    pub struct OrganizationalEntity {
        /// BOM reference
        bom_ref: Option<String> => 0, Field::new("bom-ref").attribute().since(V::V1_5),
        /// Name
        name: Option<String> => 1, Field::new("name"),
        /// Postal address
        address: Option<PostalAddress> => 2, Field::new("address").since(V::V1_6),
        /// Websites
        url: Vec<String> => 3, Field::new("url"),
        /// Contacts
        contact: Vec<OrganizationalContact> => 4, Field::new("contact"),
    }
}

impl OrganizationalEntity {
    /// Organization with a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

entity! {
    /// Person acting on behalf of an organization
    pub struct OrganizationalContact {
        /// BOM reference
        bom_ref: Option<String> => 0, Field::new("bom-ref").attribute().since(V::V1_5),
        /// Name
        name: Option<String> => 1, Field::new("name"),
        /// Email address
        email: Option<String> => 2, Field::new("email"),
        /// Phone number
        phone: Option<String> => 3, Field::new("phone"),
    }
}

impl OrganizationalContact {
    /// Contact with a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

entity! {
    /// Postal address
    pub struct PostalAddress {
        /// BOM reference
        bom_ref: Option<String> => 0, Field::new("bom-ref").attribute(),
        /// Country
        country: Option<String> => 1, Field::new("country"),
        /// Region or state
        region: Option<String> => 2, Field::new("region"),
        /// Locality or city
        locality: Option<String> => 3, Field::new("locality"),
        /// Post office box number
        post_office_box_number: Option<String> => 4, Field::new("postOfficeBoxNumber"),
        /// Postal code
        postal_code: Option<String> => 5, Field::new("postalCode"),
        /// Street address
        street_address: Option<String> => 6, Field::new("streetAddress"),
    }
}
