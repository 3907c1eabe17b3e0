//! # Conversion Context
use std::cell::RefCell;

use log::warn;

use crate::CdxError;
use crate::schema::visibility::in_range;
use crate::schema::{FieldDescriptor, Format, SchemaVersion, WireShape, is_visible, wire_shape_for};
use crate::utils::config::{ConverterConfig, Policy};

/// A field (or union variant) found in the input that does not exist in the
/// target version, dropped under the lenient policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionMismatchWarning {
    /// Entity or union type holding the field
    pub entity: &'static str,
    /// Field identity or variant name
    pub field: &'static str,
    /// Target version of the conversion
    pub version: SchemaVersion,
}

impl std::fmt::Display for VersionMismatchWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "`{}.{}` is not part of CycloneDX {}",
            self.entity, self.field, self.version
        )
    }
}

/// State of one document conversion
///
/// Created per conversion and never shared between threads.
#[derive(Debug)]
pub struct Context {
    version: SchemaVersion,
    format: Format,
    version_policy: Policy,
    enum_policy: Policy,
    warnings: RefCell<Vec<VersionMismatchWarning>>,
}

impl Context {
    /// New context for a (version, format) pair
    pub fn new(version: SchemaVersion, format: Format, config: &ConverterConfig) -> Self {
        Self {
            version,
            format,
            version_policy: config.version_policy,
            enum_policy: config.unknown_enums,
            warnings: RefCell::new(Vec::new()),
        }
    }

    /// Target schema version
    pub fn version(&self) -> SchemaVersion {
        self.version
    }

    /// Wire format
    pub fn format(&self) -> Format {
        self.format
    }

    /// Wire shape of a field when it is present in this (version, format) pair
    pub fn shape(&self, field: &FieldDescriptor) -> Option<WireShape> {
        if !is_visible(field, self.version) {
            return None;
        }
        wire_shape_for(field, self.format)
    }

    /// Is a version range part of the target version
    pub fn in_version(&self, introduced: Option<SchemaVersion>, removed: Option<SchemaVersion>) -> bool {
        in_range(introduced, removed, self.version)
    }

    /// Input carried something the target version does not define
    pub fn out_of_version(&self, entity: &'static str, field: &'static str) -> Result<(), CdxError> {
        match self.version_policy {
            Policy::Strict => Err(CdxError::VersionMismatch {
                entity,
                field,
                version: self.version,
            }),
            Policy::Lenient => {
                warn!(
                    "Dropping `{}` of {}: not part of CycloneDX {}",
                    field, entity, self.version
                );
                self.warnings.borrow_mut().push(VersionMismatchWarning {
                    entity,
                    field,
                    version: self.version,
                });
                Ok(())
            }
        }
    }

    /// Tolerate an unknown enumerated value according to the policy
    ///
    /// Returns `Ok(None)` when the value is dropped, any other error is passed on.
    pub fn tolerate<T>(&self, result: Result<T, CdxError>) -> Result<Option<T>, CdxError> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(CdxError::UnknownVariant { kind, value }) if self.enum_policy == Policy::Lenient => {
                warn!("Ignoring unknown {} value `{}`", kind, value);
                Ok(None)
            }
            Err(error) => Err(error),
        }
    }

    /// Warnings collected so far
    pub fn take_warnings(&self) -> Vec<VersionMismatchWarning> {
        self.warnings.take()
    }
}
