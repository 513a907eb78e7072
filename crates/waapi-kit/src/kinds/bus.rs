use waapi_kit_core::kind;

kind! {
    pub struct Bus = "Bus" {
        VOLUME: f64 = "Volume",
        BUS_VOLUME: f64 = "BusVolume",
        PITCH: i32 = "Pitch",
        LOWPASS: i32 = "Lowpass",
        HIGHPASS: i32 = "Highpass",
    }
}

kind! {
    pub struct AuxBus = "AuxBus" {
        VOLUME: f64 = "Volume",
        BUS_VOLUME: f64 = "BusVolume",
    }
}
