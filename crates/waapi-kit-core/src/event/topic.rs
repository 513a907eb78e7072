//! Remote notification topics, typed by their payload.

use crate::event::{
    ChildAdded, ChildRemoved, NameChanged, NotesChanged, ObjectCreated, ObjectPostDeleted,
    ObjectPreDeleted, ProjectLoaded, ProjectPostClosed, ProjectSaved, PropertyChanged,
    SelectionChanged,
};
use std::{fmt, marker::PhantomData};

///
/// Topic
///

pub struct Topic<A> {
    name: &'static str,
    _marker: PhantomData<fn() -> A>,
}

impl<A> Topic<A> {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<A> Clone for Topic<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for Topic<A> {}

impl<A> fmt::Debug for Topic<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Topic").field(&self.name).finish()
    }
}

impl<A> fmt::Display for Topic<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

pub const OBJECT_CREATED: Topic<ObjectCreated> = Topic::new("ak.wwise.core.object.created");
pub const OBJECT_PRE_DELETED: Topic<ObjectPreDeleted> =
    Topic::new("ak.wwise.core.object.preDeleted");
pub const OBJECT_POST_DELETED: Topic<ObjectPostDeleted> =
    Topic::new("ak.wwise.core.object.postDeleted");
pub const NAME_CHANGED: Topic<NameChanged> = Topic::new("ak.wwise.core.object.nameChanged");
pub const NOTES_CHANGED: Topic<NotesChanged> = Topic::new("ak.wwise.core.object.notesChanged");
pub const CHILD_ADDED: Topic<ChildAdded> = Topic::new("ak.wwise.core.object.childAdded");
pub const CHILD_REMOVED: Topic<ChildRemoved> = Topic::new("ak.wwise.core.object.childRemoved");
pub const PROPERTY_CHANGED: Topic<PropertyChanged> =
    Topic::new("ak.wwise.core.object.propertyChanged");
pub const PROJECT_LOADED: Topic<ProjectLoaded> = Topic::new("ak.wwise.core.project.loaded");
pub const PROJECT_POST_CLOSED: Topic<ProjectPostClosed> =
    Topic::new("ak.wwise.core.project.postClosed");
pub const PROJECT_SAVED: Topic<ProjectSaved> = Topic::new("ak.wwise.core.project.saved");
pub const SELECTION_CHANGED: Topic<SelectionChanged> = Topic::new("ak.wwise.ui.selectionChanged");
