//! SSL enumerations.

/// Where private-key/certificate material comes from.
pub mod key_material_source;

/// Where trusted CA material comes from.
pub mod trust_material_source;

/// Container file formats, inferred from the file extension.
pub mod store_format;

/// Errors surfaced by credential building, reloading and watching.
pub mod ssl_error;

/// The underlying cause of a credential load failure.
pub mod load_failure;
