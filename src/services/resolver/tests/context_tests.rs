use super::*;
use std::sync::Arc;
use url::Url;

fn url(path: &str) -> Url {
    Url::parse(&format!("file://{path}")).unwrap()
}

#[test]
fn test_search_order_is_parent_first() {
    let root = Arc::new(LoadingContext::new(vec![url("/base/core.jar")], None));
    let middle = Arc::new(LoadingContext::new(
        vec![url("/app/lib/a.jar")],
        Some(root.clone()),
    ));
    let leaf = LoadingContext::new(
        vec![url("/plugins/b.jar"), url("/plugins/temp/c.jar")],
        Some(middle),
    );

    let order: Vec<&str> = leaf.search_order().into_iter().map(Url::path).collect();
    assert_eq!(
        order,
        vec![
            "/base/core.jar",
            "/app/lib/a.jar",
            "/plugins/b.jar",
            "/plugins/temp/c.jar",
        ]
    );
    assert_eq!(leaf.locations().len(), 2);
}

#[test]
fn test_find_prefers_parent() {
    let parent = Arc::new(LoadingContext::new(vec![url("/base/a.jar")], None));
    let child = LoadingContext::new(
        vec![url("/plugins/a.jar"), url("/plugins/b.jar")],
        Some(parent),
    );

    assert_eq!(child.find("a.jar").map(Url::path), Some("/base/a.jar"));
    assert_eq!(child.find("b.jar").map(Url::path), Some("/plugins/b.jar"));
    assert!(child.find("missing.jar").is_none());
}

#[test]
fn test_find_decodes_escaped_names() {
    let context = LoadingContext::new(vec![url("/plugins/my%20plugin.jar")], None);
    assert!(context.find("my plugin.jar").is_some());
}

#[test]
fn test_no_parent() {
    let context = LoadingContext::new(Vec::new(), None);
    assert!(context.parent().is_none());
    assert!(context.search_order().is_empty());
}
