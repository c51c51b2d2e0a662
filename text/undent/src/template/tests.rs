use std::borrow::Cow;

use pretty_assertions::assert_eq;

use super::{Template, Value};

#[test]
fn value_from_str_is_text() {
    assert_eq!(Value::from("a"), Value::Text(Cow::Borrowed("a")));
}

#[test]
fn value_from_string_is_text() {
    assert_eq!(
        Value::from("a".to_string()),
        Value::Text(Cow::Owned("a".to_string()))
    );
}

#[test]
fn value_display_is_rendered() {
    assert_eq!(Value::display(42), Value::Rendered("42".to_string()));
    assert_eq!(Value::display(true), Value::Rendered("true".to_string()));
}

#[test]
fn empty_template_dedents_to_empty() {
    assert_eq!(Template::new("").dedent(), "");
}

#[test]
fn bind_interleaves_values_and_fragments() {
    let out = Template::new("\n\t\t\t")
        .bind(Value::display(1), ". line #")
        .bind(Value::display(1), "\n\t\t\t")
        .bind(Value::display(2), ". line\n\t\t\t")
        .dedent();
    assert_eq!(out, "1. line #1\n2. line");
}

#[test]
fn displayed_numbers_are_inserted_verbatim() {
    let out = Template::new("count: ").bind(Value::display(7), "").dedent();
    assert_eq!(out, "count: 7");
}

#[test]
fn multiline_string_value_follows_insertion_column() {
    let out = Template::new("\n    - ")
        .bind("first\nsecond", "\n    ")
        .dedent();
    assert_eq!(out, "- first\nsecond");
}
