//! # Field Visibility
use super::{FieldDescriptor, Format, SchemaVersion};

/// Is the field part of the target schema version
///
/// Both bounds are inclusive and optional; a missing bound is open.
pub fn is_visible(field: &FieldDescriptor, version: SchemaVersion) -> bool {
    in_range(field.introduced, field.removed, version)
}

/// Is the field present in a (version, format) pair
pub fn is_present(field: &FieldDescriptor, version: SchemaVersion, format: Format) -> bool {
    is_visible(field, version) && field.channel.includes(format)
}

/// Version range check shared with union variants
pub(crate) fn in_range(
    introduced: Option<SchemaVersion>,
    removed: Option<SchemaVersion>,
    version: SchemaVersion,
) -> bool {
    introduced.is_none_or(|since| version >= since) && removed.is_none_or(|until| version <= until)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbounded() {
        let field = FieldDescriptor::new("name");
        for version in SchemaVersion::all() {
            assert!(is_visible(&field, *version));
        }
    }

    #[test]
    fn test_introduced() {
        let field = FieldDescriptor::new("modelCard").since(SchemaVersion::V1_5);
        assert!(!is_visible(&field, SchemaVersion::V1_2));
        assert!(!is_visible(&field, SchemaVersion::V1_4));
        assert!(is_visible(&field, SchemaVersion::V1_5));
        assert!(is_visible(&field, SchemaVersion::V1_6));
    }

    #[test]
    fn test_removed() {
        let field = FieldDescriptor::new("legacy").until(SchemaVersion::V1_3);
        assert!(is_visible(&field, SchemaVersion::V1_2));
        assert!(is_visible(&field, SchemaVersion::V1_3));
        assert!(!is_visible(&field, SchemaVersion::V1_4));
    }

    #[test]
    fn test_range() {
        let field = FieldDescriptor::new("window")
            .since(SchemaVersion::V1_3)
            .until(SchemaVersion::V1_5);
        let visible: Vec<SchemaVersion> = SchemaVersion::all()
            .iter()
            .copied()
            .filter(|v| is_visible(&field, *v))
            .collect();
        assert_eq!(
            visible,
            vec![SchemaVersion::V1_3, SchemaVersion::V1_4, SchemaVersion::V1_5]
        );
    }

    #[test]
    fn test_presence_conjunction() {
        let field = FieldDescriptor::new("signature")
            .since(SchemaVersion::V1_4)
            .json_only();
        assert!(is_present(&field, SchemaVersion::V1_4, Format::Json));
        assert!(!is_present(&field, SchemaVersion::V1_4, Format::Xml));
        assert!(!is_present(&field, SchemaVersion::V1_3, Format::Json));
    }
}
