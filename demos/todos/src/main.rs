use anyhow::Result;
use serde_json::json;
use sprig_dom::{Child, VNode, h, h_string};

/// Drafts shorter than this can't be added.
const MIN_TODO_LEN: usize = 3;

fn render_app(todos: &[&str], draft: &str) -> VNode {
    let can_add = draft.chars().count() >= MIN_TODO_LEN;
    h(
        "div",
        [("id", "app")],
        vec![
            Some(Child::from(h("h1", (), ["My TODOs"]))),
            Some(Child::from(h(
                "div",
                (),
                vec![
                    h("label", [("for", "todo-input")], ["New TODO"]),
                    h(
                        "input",
                        vec![("type", json!("text")), ("id", json!("todo-input")), ("value", json!(draft))],
                        (),
                    ),
                    h(
                        "button",
                        vec![("id", json!("add-todo-btn")), ("disabled", json!(!can_add))],
                        ["Add"],
                    ),
                ],
            ))),
            todos
                .is_empty()
                .then(|| Child::from(h("p", [("class", "empty")], ["Nothing to do"]))),
            Some(Child::from(h(
                "ul",
                [("id", "todos-list")],
                todos.iter().map(|t| render_todo_in_read_mode(t)).collect::<Vec<_>>(),
            ))),
        ],
    )
}

fn render_todo_in_read_mode(todo: &str) -> VNode {
    h(
        "li",
        (),
        vec![
            h("span", [("class", "label")], [todo]),
            h("button", [("class", "done")], [h_string("Done")]),
        ],
    )
}

fn main() -> Result<()> {
    let todos = ["apply to apartment", "clean up pizza"];
    let app = render_app(&todos, "");
    println!("{}", serde_json::to_string_pretty(&app)?);
    Ok(())
}
