use serde_json::{Value, json};
use sprig_dom::{NodeType, VNode, h, h_fragment, h_string, without_nulls};

fn three_nodes() -> Vec<Option<VNode>> {
    vec![
        Some(h("div", [("class", "container")], ())),
        Some(h_string("Hello world")),
        Some(h("span", (), ["Nested text"])),
    ]
}

fn with_absent_entries() -> Vec<Option<VNode>> {
    vec![
        Some(h("h1", [("id", "title")], ["Main Title"])),
        None,
        Some(h_string("Some text")),
        None,
        Some(h("footer", [("class", "page-footer")], ())),
    ]
}

#[test]
fn returns_equal_sequence_when_nothing_is_absent() {
    let input = three_nodes();
    let result = without_nulls(input.clone());
    assert_eq!(result.len(), 3);
    let expected: Vec<VNode> = input.into_iter().flatten().collect();
    assert_eq!(result, expected);
}

#[test]
fn single_entry_survives() {
    let frag = h_fragment(["Fragment content"]);
    assert_eq!(without_nulls(vec![Some(frag.clone())]), vec![frag]);
}

#[test]
fn empty_input_gives_empty_output() {
    let result = without_nulls(Vec::<Option<VNode>>::new());
    assert!(result.is_empty());
}

#[test]
fn drops_absent_entries_in_order() {
    let input = with_absent_entries();
    let result = without_nulls(input.clone());
    assert_eq!(result.len(), 3);
    assert_eq!(Some(&result[0]), input[0].as_ref());
    assert_eq!(Some(&result[1]), input[2].as_ref());
    assert_eq!(Some(&result[2]), input[4].as_ref());
}

#[test]
fn all_absent_gives_empty_output() {
    let result = without_nulls(vec![None::<VNode>, None, None, None]);
    assert!(result.is_empty());
}

#[test]
fn falsy_but_present_values_are_kept() {
    let input: Vec<Option<Value>> = vec![
        Some(json!(0)),
        Some(json!("")),
        Some(json!(false)),
        None,
        None,
        Some(serde_json::to_value(h_string("")).unwrap()),
        Some(serde_json::to_value(h("div", (), ())).unwrap()),
    ];
    let result = without_nulls(input);
    assert_eq!(result.len(), 5);
    assert!(result.contains(&json!(0)));
    assert!(result.contains(&json!("")));
    assert!(result.contains(&json!(false)));
    assert!(result.contains(&json!({"type": "text", "value": ""})));
    assert!(result.iter().any(|v| v["type"] == "element" && v["tag"] == "div"));
}

#[test]
fn falsy_primitives_are_kept_untyped_too() {
    assert_eq!(without_nulls([Some(0), None, Some(0)]), vec![0, 0]);
    assert_eq!(without_nulls([Some(false), None]), vec![false]);
    assert_eq!(without_nulls([None, Some("")]), vec![""]);
}

#[test]
fn node_structure_is_preserved() {
    let result = without_nulls(three_nodes());

    let element = &result[0];
    assert_eq!(element.node_type(), NodeType::Element);
    assert_eq!(element.tag(), Some("div"));
    assert!(element.props().is_some());
    assert!(element.children().is_empty());

    let text = &result[1];
    assert_eq!(text.node_type(), NodeType::Text);
    assert_eq!(text.text(), Some("Hello world"));
}
