use crate::kinds::ActionType;
use waapi_kit_core::{kind, model::Reference};

kind! {
    pub struct Event = "Event" {}
}

kind! {
    /// One step of an event. `Target` may point at any kind.
    pub struct Action = "Action" {
        ACTION_TYPE: ActionType = "ActionType",
        TARGET: Reference = "Target",
        DELAY: f64 = "Delay",
        FADE_TIME: f64 = "FadeTime",
    }
}
