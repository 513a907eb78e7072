use waapi_kit_core::kind;

kind! {
    pub struct WorkUnit = "WorkUnit" {}
}

kind! {
    pub struct Folder = "Folder" {}
}
