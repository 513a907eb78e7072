use super::*;
use crate::types::{Guid, Name, ObjectRef, Path};

const ID: &str = "{1C2B3A4D-5E6F-4A1B-9C8D-0E1F2A3B4C5D}";

#[test]
fn renders_a_filtered_kind_query() {
    let query = Query::new()
        .from_kinds(["Sound"])
        .where_(("Volume", "<", -6.0), false)
        .take(10);

    assert_eq!(
        query.to_string(),
        "$ from type Sound where Volume < -6.0 take 10"
    );
}

#[test]
fn empty_query_is_just_the_marker() {
    assert_eq!(Query::new().to_string(), "$");
    assert!(Query::new().is_empty());
}

#[test]
fn operator_aliases_are_normalised() {
    for (alias, canonical) in [
        ("==", "="),
        ("is", "="),
        ("&", "and"),
        ("&&", "and"),
        ("|", "or"),
        ("||", "or"),
        ("not", "!"),
        ("<=", "<="),
        (":", ":"),
    ] {
        assert_eq!(normalize_operator(alias), canonical, "alias {alias:?}");
    }

    let condition = Condition::new("IsLoopingEnabled", "==", true);
    assert_eq!(condition.to_string(), "IsLoopingEnabled = true");

    let aliased = Query::new().where_(("X", "==", 1), false);
    let canonical = Query::new().where_(("X", "=", 1), false);
    assert_eq!(aliased.to_string(), canonical.to_string());
}

#[test]
fn brackets_are_literal() {
    let query = Query::new()
        .from_everything()
        .where_(("Volume", "<", -6), true)
        .or_where(("Pitch", ">", 0), false, true)
        .and_where(("name", ":", "Foot"), false, false);

    assert_eq!(
        query.to_string(),
        "$ from project where (Volume < -6 or Pitch > 0) and name : \"Foot\""
    );
}

#[test]
fn shaping_clauses_keep_call_order() {
    let query = Query::new()
        .take(5)
        .distinct()
        .skip(2)
        .select(["name", "@Volume"]);

    assert_eq!(
        query.clauses().collect::<Vec<_>>(),
        vec!["take 5", "distinct", "skip 2", "select name, @Volume"]
    );
}

#[test]
fn source_seeds_replaces_or_leads() {
    // a late source still leads
    let query = Query::new().take(1).from_kinds(["Bus"]);
    assert_eq!(query.to_string(), "$ from type Bus take 1");

    // a second source replaces the first
    let query = query.from_text_search("Foot");
    assert_eq!(query.to_string(), "$ from search \"Foot\" take 1");
}

#[test]
fn id_and_reference_sources_are_quoted() {
    let id = Guid::parse(ID).unwrap();
    let query = Query::new().from_ids([id, id]);
    assert_eq!(
        query.to_string(),
        format!("$ from object \"{ID}\", \"{ID}\"")
    );

    let kind_name =
        ObjectRef::kind_name(Name::new("Event").unwrap(), Name::new("Play").unwrap()).unwrap();
    let query = Query::new().from_refs([kind_name]);
    assert_eq!(query.to_string(), "$ from object \"Event:Play\"");

    let saved = Path::new("\\Queries\\Factory Queries\\All Sounds").unwrap();
    let query = Query::new().from_named_query(saved);
    assert_eq!(
        query.to_string(),
        "$ from query \"\\Queries\\Factory Queries\\All Sounds\""
    );
}

#[test]
fn values_render_by_type() {
    assert_eq!(QueryValue::from(2.5).to_string(), "2.5");
    assert_eq!(QueryValue::from(3.0_f64).to_string(), "3.0");
    assert_eq!(QueryValue::from(-6).to_string(), "-6");
    assert_eq!(
        QueryValue::from("say \"hi\"").to_string(),
        "\"say \\\"hi\\\"\""
    );

    let kind_name =
        ObjectRef::kind_name(Name::new("Bus").unwrap(), Name::new("Master").unwrap()).unwrap();
    assert_eq!(QueryValue::from(kind_name).to_string(), "\"Bus:Master\"");

    let path = Path::new("\\A\\B").unwrap();
    assert_eq!(QueryValue::from(path).to_string(), "\"\\A\\B\"");
}

#[test]
fn regex_values_are_validated_and_delimited() {
    let regex = QueryValue::regex("^Foot.*$").unwrap();
    assert_eq!(regex.to_string(), "/^Foot.*$/");

    let query = Query::new()
        .from_kinds(["Sound"])
        .where_(Condition::new("name", ":", regex), false);
    assert_eq!(
        query.to_string(),
        "$ from type Sound where name : /^Foot.*$/"
    );

    assert!(QueryValue::regex("(unclosed").is_err());
}

#[test]
fn regex_delimiter_is_escaped_inside_the_pattern() {
    let regex = QueryValue::regex("Music/Loops").unwrap();
    assert_eq!(regex.to_string(), "/Music\\/Loops/");

    let query = Query::new()
        .from_kinds(["Sound"])
        .where_(Condition::new("path", ":", regex), false);
    assert_eq!(
        query.to_string(),
        "$ from type Sound where path : /Music\\/Loops/"
    );

    // already escaped slashes are left alone
    let escaped = QueryValue::Regex("a\\/b".to_string());
    assert_eq!(escaped.to_string(), "/a\\/b/");

    // an escaped backslash does not escape the following slash
    let backslash = QueryValue::Regex("a\\\\/b".to_string());
    assert_eq!(backslash.to_string(), "/a\\\\\\/b/");
}

#[test]
fn text_and_path_literals_share_one_quoting_rule() {
    let path = Path::new("\\A\\Foo").unwrap();

    let as_text = Query::new().where_(("path", "=", "\\A\\Foo"), false);
    let as_path = Query::new().where_(("path", "=", path), false);

    assert_eq!(as_text.to_string(), as_path.to_string());
    assert_eq!(as_text.to_string(), "$ where path = \"\\A\\Foo\"");
}
