//! Remote procedure names.

pub const OBJECT_GET: &str = "ak.wwise.core.object.get";
pub const OBJECT_SET_PROPERTY: &str = "ak.wwise.core.object.setProperty";
pub const OBJECT_SET_REFERENCE: &str = "ak.wwise.core.object.setReference";
pub const OBJECT_SET_NAME: &str = "ak.wwise.core.object.setName";
pub const OBJECT_SET_NOTES: &str = "ak.wwise.core.object.setNotes";
pub const OBJECT_MOVE: &str = "ak.wwise.core.object.move";
pub const OBJECT_DELETE: &str = "ak.wwise.core.object.delete";
