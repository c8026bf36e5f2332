//! Prompt routing regression suite
//!
//! Loads cases from tests/data/dispatcher_routing.toml and checks each one
//! against `resolve_component`. Add a case there whenever a keyword changes.
//!
//! Run with: cargo test --test dispatcher_routing

use genui_common::dispatcher::{resolve_component, ComponentKind, PROMPT_RULES};
use genui_common::prompts::EXAMPLE_PROMPTS;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct RoutingCase {
    id: String,
    prompt: String,
    expect: String,
    #[serde(default)]
    notes: String,
}

#[derive(Debug, Deserialize)]
struct RoutingSuite {
    test: Vec<RoutingCase>,
}

fn load_suite() -> RoutingSuite {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/dispatcher_routing.toml");
    let content = std::fs::read_to_string(path).expect("Failed to read routing test data");
    toml::from_str(&content).expect("Failed to parse routing test TOML")
}

fn route_id(kind: Option<ComponentKind>) -> &'static str {
    kind.map(ComponentKind::id).unwrap_or("none")
}

#[test]
fn test_routing_suite() {
    let suite = load_suite();
    assert!(!suite.test.is_empty());

    let failures: Vec<String> = suite
        .test
        .iter()
        .filter_map(|case| {
            let actual = route_id(resolve_component(&case.prompt));
            (actual != case.expect).then(|| {
                format!(
                    "{} ({}): \"{}\" expected {}, got {}",
                    case.id, case.notes, case.prompt, case.expect, actual
                )
            })
        })
        .collect();

    assert!(failures.is_empty(), "routing failures:\n{}", failures.join("\n"));
}

#[test]
fn test_suite_ids_are_unique() {
    let suite = load_suite();
    let mut ids: Vec<&str> = suite.test.iter().map(|c| c.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), suite.test.len());
}

#[test]
fn test_every_keyword_alone_routes_to_its_rule() {
    for rule in PROMPT_RULES {
        for keyword in rule.keywords {
            assert_eq!(
                resolve_component(keyword),
                Some(rule.component),
                "keyword {} should route to {}",
                keyword,
                rule.component
            );
        }
    }
}

#[test]
fn test_routing_is_pure() {
    for prompt in EXAMPLE_PROMPTS {
        let first = resolve_component(prompt.text);
        for _ in 0..10 {
            assert_eq!(resolve_component(prompt.text), first);
        }
    }
}
