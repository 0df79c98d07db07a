use super::*;
use crate::doc::LoadOptions;

fn corpus() -> DocSet {
    DocSet::from_sources(
        vec![
            (Language::En, "b.md", "# Memory Module\n".to_owned()),
            (Language::En, "a.md", "# Agent Basics\n".to_owned()),
            (Language::Zh, "a.md", "# 智能体\n".to_owned()),
        ],
        LoadOptions::default(),
    )
    .unwrap()
}

#[test]
fn blank_query_keeps_all_in_title_order() {
    let docs = corpus();
    let titles: Vec<String> = sidebar(&docs, Language::En, "  ").into_iter().map(|item| item.title).collect();
    assert_eq!(titles, vec!["Agent Basics", "Memory Module"]);
}

#[test]
fn query_matches_title_case_insensitively() {
    let docs = corpus();
    let items = sidebar(&docs, Language::En, "MEMORY");
    assert_eq!(items, vec![SidebarItem { id: "en:b".to_owned(), title: "Memory Module".to_owned() }]);
}

#[test]
fn query_matches_non_latin_titles() {
    let docs = corpus();
    assert_eq!(sidebar(&docs, Language::Zh, "智能").len(), 1);
    assert!(sidebar(&docs, Language::Zh, "agent").is_empty());
}
