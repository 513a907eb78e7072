use crate::{
    MAX_IDENT_LEN, err,
    error::ErrorTree,
    node::{EnumDecl, KindDecl},
};
use std::collections::BTreeSet;

// Structural checks that do not need resolution: naming, duplicates,
// and enum member uniqueness.
pub(super) fn validate_declarations(kinds: &[KindDecl], enums: &[EnumDecl], errs: &mut ErrorTree) {
    let mut seen_kinds = BTreeSet::new();
    for kind in kinds {
        let mut kind_errs = ErrorTree::new();
        validate_ident(kind.name, &mut kind_errs);

        if !seen_kinds.insert(kind.name) {
            err!(kind_errs, "kind declared more than once");
        }

        let mut seen_props = BTreeSet::new();
        for property in &kind.properties {
            let mut prop_errs = ErrorTree::new();
            validate_ident(property.name, &mut prop_errs);

            if !seen_props.insert(property.name) {
                err!(prop_errs, "property declared more than once");
            }
            kind_errs.merge_at(property.name, prop_errs);
        }

        errs.merge_at(kind.name, kind_errs);
    }

    let mut seen_enums = BTreeSet::new();
    for decl in enums {
        let mut enum_errs = ErrorTree::new();
        validate_ident(decl.name, &mut enum_errs);

        if !seen_enums.insert(decl.name) {
            err!(enum_errs, "enum declared more than once");
        }
        if decl.members.is_empty() {
            err!(enum_errs, "enum has no members");
        }

        let mut values = BTreeSet::new();
        let mut idents = BTreeSet::new();
        for member in &decl.members {
            validate_ident(member.ident, &mut enum_errs);

            if !values.insert(member.value) {
                err!(
                    enum_errs,
                    "wire value {} used by more than one member",
                    member.value
                );
            }
            if !idents.insert(member.ident) {
                err!(
                    enum_errs,
                    "member '{}' declared more than once",
                    member.ident
                );
            }
        }

        errs.merge_at(decl.name, enum_errs);
    }
}

// Identifiers are ascii alphanumerics/underscores; remote names such as
// `3DSpatialization` may start with a digit.
fn validate_ident(ident: &str, errs: &mut ErrorTree) {
    if ident.is_empty() {
        err!(errs, "identifier is empty");
        return;
    }
    if ident.len() > MAX_IDENT_LEN {
        err!(
            errs,
            "identifier '{ident}' exceeds {MAX_IDENT_LEN} characters"
        );
    }
    if !ident.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        err!(errs, "identifier '{ident}' contains invalid characters");
    }
}
