use thiserror::Error;

/// Failures raised while assembling the catalog. Lookup misses are not errors
/// and never show up here; they come back as `None`.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Unsupported repository type: {kind}")]
    InvalidConfiguration { kind: String },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
