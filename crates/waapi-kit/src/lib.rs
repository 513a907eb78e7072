//! ## Crate layout
//! - `core`: identifiers, gateway boundary, entity handles, event bridges,
//!   and the WAQL query builder.
//! - `schema`: kind/property/enum declarations and the link pass.
//! - `kinds`: the standard catalogue of authoring kinds and enums.
//!
//! The `prelude` module brings the typed vocabulary and the standard kinds
//! into scope.

pub use waapi_kit_core as core;
pub use waapi_kit_schema as schema;

pub mod kinds;

pub use kinds::standard_schema;
pub use waapi_kit_core::{Error, client::Client, config::ClientConfig, gateway::Gateway};

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// connect
/// Client over `gateway` carrying the linked standard schema.
pub fn connect(gateway: impl Gateway + 'static, config: ClientConfig) -> Result<Client, Error> {
    config.validate()?;
    let schema = standard_schema()?;
    tracing::debug!(kinds = schema.kinds().count(), "standard schema linked");

    Ok(Client::builder(gateway)
        .config(config)
        .schema(schema)
        .build())
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::kinds::*;
    pub use waapi_kit_core::prelude::*;
}
