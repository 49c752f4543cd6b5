//! Validation gates for Axum handlers.
//!
//! Each extractor checks one request part against a schema before the
//! handler body runs. A failing gate rejects with [`AppError`], so the
//! response is rendered by the shared error mapping. Gates run in argument
//! order, which lets a handler chain them: path first, then body.
//!
//! [`AppError`]: crate::errors::AppError

pub mod uuid_path;
pub mod validated_json;
pub mod validated_query;

pub use uuid_path::UuidPath;
pub use validated_json::ValidatedJson;
pub use validated_query::ValidatedQuery;
