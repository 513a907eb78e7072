use super::*;
use crate::{
    node::{DeclaredType, EnumDecl, KindDecl},
    types::Primitive,
};

fn speaker_panning() -> EnumDecl {
    EnumDecl::new("SpeakerPanning")
        .member("DirectAssignment", 0)
        .member("BalanceFade", 1)
        .member("SteeringPanner", 2)
}

#[test]
fn link_resolves_cyclic_kind_references() {
    let mut builder = SchemaBuilder::new();
    builder
        .declare_kind(
            KindDecl::new("Sound")
                .property("Volume", DeclaredType::Primitive(Primitive::Real64))
                .property("OutputBus", DeclaredType::Entity(Some("Bus")))
                .property("SpeakerPanning", DeclaredType::Enum("SpeakerPanning")),
        )
        // declared after the kind that references it
        .declare_kind(
            KindDecl::new("Bus").property("OwnerSound", DeclaredType::Entity(Some("Sound"))),
        )
        .declare_enum(speaker_panning());

    let schema = builder.link().expect("schema links");

    let output_bus = schema.binding("Sound", "OutputBus").expect("binding");
    assert!(output_bus.is_reference);
    assert_eq!(output_bus.ty, TypeDescriptor::Reference(Some("Bus")));

    let volume = schema.binding("Sound", "Volume").expect("binding");
    assert!(!volume.is_reference);

    let panning = schema.binding("Sound", "SpeakerPanning").expect("binding");
    let TypeDescriptor::Enum(ref e) = panning.ty else {
        panic!("expected enum descriptor");
    };
    assert_eq!(
        e.member_by_value(2).map(|m| m.ident),
        Some("SteeringPanner")
    );
    assert!(e.member_by_value(7).is_none());

    assert_eq!(schema.referrers("Bus"), vec!["Sound"]);
}

#[test]
fn link_reports_every_unresolved_reference() {
    let mut builder = SchemaBuilder::new();
    builder.declare_kind(
        KindDecl::new("Sound")
            .property("OutputBus", DeclaredType::Entity(Some("Bus")))
            .property("SpeakerPanning", DeclaredType::Enum("SpeakerPanning")),
    );

    let Err(BuildError::Validation(errs)) = builder.link() else {
        panic!("expected validation failure");
    };

    let lines = errs.flatten();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Sound.OutputBus"), "{lines:?}");
    assert!(
        lines[1].contains("unknown enum 'SpeakerPanning'"),
        "{lines:?}"
    );
}

#[test]
fn duplicates_are_rejected() {
    let mut builder = SchemaBuilder::new();
    builder
        .declare_kind(KindDecl::new("Sound"))
        .declare_kind(
            KindDecl::new("Sound")
                .property("Volume", DeclaredType::Primitive(Primitive::Real64))
                .property("Volume", DeclaredType::Primitive(Primitive::Real32)),
        )
        .declare_enum(EnumDecl::new("Mode").member("A", 1).member("B", 1));

    let Err(BuildError::Validation(errs)) = builder.link() else {
        panic!("expected validation failure");
    };

    let text = errs.to_string();
    assert!(text.contains("kind declared more than once"), "{text}");
    assert!(text.contains("property declared more than once"), "{text}");
    assert!(
        text.contains("wire value 1 used by more than one member"),
        "{text}"
    );
}

#[test]
fn invalid_identifiers_are_rejected() {
    let mut builder = SchemaBuilder::new();
    builder
        .declare_kind(KindDecl::new("Bad Kind"))
        .declare_kind(
            KindDecl::new("Sound").property("3DSpatialization", DeclaredType::Entity(None)),
        )
        .declare_enum(EnumDecl::new("Empty"));

    let Err(BuildError::Validation(errs)) = builder.link() else {
        panic!("expected validation failure");
    };

    let lines = errs.flatten();
    assert!(lines.iter().any(|l| l.contains("invalid characters")));
    assert!(lines.iter().any(|l| l == "Empty: enum has no members"));
    assert!(!lines.iter().any(|l| l.contains("3DSpatialization")));
}
