use waapi_kit_core::wire_enum;

wire_enum! {
    /// Speaker panning mode of a voice.
    pub enum SpeakerPanning {
        DirectAssignment = 0,
        BalanceFade = 1,
        SteeringPanner = 2,
    }
}

wire_enum! {
    /// Playback mode of a random/sequence container.
    pub enum ContainerMode {
        Sequence = 0,
        Random = 1,
    }
}

wire_enum! {
    /// What an event action does to its target.
    pub enum ActionType {
        Play = 1,
        Stop = 2,
        StopAll = 3,
        Pause = 7,
        PauseAll = 8,
        Resume = 9,
        ResumeAll = 10,
    }
}
