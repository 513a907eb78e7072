//! Standard authoring kinds.
//!
//! Property names are the remote attribute names; the Rust constants carry
//! their wire types.

mod audio;
mod bus;
mod enums;
mod event;
mod structure;

pub use audio::{ActorMixer, RandomSequenceContainer, Sound};
pub use bus::{AuxBus, Bus};
pub use enums::{ActionType, ContainerMode, SpeakerPanning};
pub use event::{Action, Event};
pub use structure::{Folder, WorkUnit};

use waapi_kit_core::{model::Kind, value::WireEnum};
use waapi_kit_schema::{
    build::{BuildError, SchemaBuilder},
    schema::Schema,
};

/// standard_schema
/// Declare and link every standard kind and enum.
pub fn standard_schema() -> Result<Schema, BuildError> {
    let mut builder = SchemaBuilder::new();

    builder
        .declare_enum(ActionType::decl())
        .declare_enum(ContainerMode::decl())
        .declare_enum(SpeakerPanning::decl());

    for decl in [
        Action::declare(),
        ActorMixer::declare(),
        AuxBus::declare(),
        Bus::declare(),
        Event::declare(),
        Folder::declare(),
        RandomSequenceContainer::declare(),
        Sound::declare(),
        WorkUnit::declare(),
    ] {
        builder.declare_kind(decl);
    }

    builder.link()
}

///
/// TESTS
///
