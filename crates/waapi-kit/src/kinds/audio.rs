use crate::kinds::{Bus, ContainerMode, SpeakerPanning};
use waapi_kit_core::{kind, model::Reference};

kind! {
    pub struct Sound = "Sound" {
        VOLUME: f64 = "Volume",
        PITCH: i32 = "Pitch",
        LOWPASS: i32 = "Lowpass",
        HIGHPASS: i32 = "Highpass",
        IS_LOOPING_ENABLED: bool = "IsLoopingEnabled",
        /// Zero loops forever.
        LOOP_COUNT: i32 = "LoopCount",
        IS_STREAMING_ENABLED: bool = "IsStreamingEnabled",
        OUTPUT_BUS: Reference<Bus> = "OutputBus",
        SPEAKER_PANNING: SpeakerPanning = "SpeakerPanning",
    }
}

kind! {
    pub struct ActorMixer = "ActorMixer" {
        VOLUME: f64 = "Volume",
        PITCH: i32 = "Pitch",
        LOWPASS: i32 = "Lowpass",
        HIGHPASS: i32 = "Highpass",
        OUTPUT_BUS: Reference<Bus> = "OutputBus",
        SPEAKER_PANNING: SpeakerPanning = "SpeakerPanning",
    }
}

kind! {
    pub struct RandomSequenceContainer = "RandomSequenceContainer" {
        VOLUME: f64 = "Volume",
        PITCH: i32 = "Pitch",
        RANDOM_OR_SEQUENCE: ContainerMode = "RandomOrSequence",
        OUTPUT_BUS: Reference<Bus> = "OutputBus",
    }
}
