use crate::content::blog::BLOG_POSTS;
use crate::content::features::FEATURES;
use crate::content::industries::INDUSTRIES;
use crate::content::nav::NAV_LINKS;
use crate::icons::Icon;

pub const MAX_RESULTS: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    Page,
    Industry,
    Article,
    Feature,
}

impl ItemKind {
    pub fn label(self) -> &'static str {
        match self {
            ItemKind::Page => "Page",
            ItemKind::Industry => "Industry",
            ItemKind::Article => "Article",
            ItemKind::Feature => "Feature",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SearchItem {
    pub name: String,
    pub href: String,
    pub kind: ItemKind,
    pub icon: Icon,
}

impl SearchItem {
    fn new(name: &str, href: String, kind: ItemKind, icon: Icon) -> Self {
        Self { name: name.to_string(), href, kind, icon }
    }
}

/// Everything the search box can find, in display order: pages, industries,
/// articles, then features.
pub fn build_corpus() -> Vec<SearchItem> {
    let pages = NAV_LINKS
        .iter()
        .map(|link| SearchItem::new(link.label, link.href.to_string(), ItemKind::Page, link.icon));
    let industries = INDUSTRIES
        .iter()
        .map(|industry| SearchItem::new(industry.name, industry.href(), ItemKind::Industry, industry.icon));
    let articles = BLOG_POSTS
        .iter()
        .map(|post| SearchItem::new(post.title, post.href(), ItemKind::Article, Icon::Newspaper));
    let features = FEATURES
        .iter()
        .map(|feature| SearchItem::new(feature.name, feature.href.to_string(), ItemKind::Feature, feature.icon));

    pages.chain(industries).chain(articles).chain(features).collect()
}

/// Case-insensitive substring match on item names, capped at [`MAX_RESULTS`].
/// A blank query matches nothing.
pub fn filter<'a>(corpus: &'a [SearchItem], query: &str) -> Vec<&'a SearchItem> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    corpus
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .take(MAX_RESULTS)
        .collect()
}

#[derive(Debug, PartialEq)]
pub enum SearchOutcome<'a> {
    Idle,
    NoMatches,
    Matches(Vec<&'a SearchItem>),
}

impl<'a> SearchOutcome<'a> {
    pub fn evaluate(corpus: &'a [SearchItem], query: &str) -> Self {
        if query.trim().is_empty() {
            return SearchOutcome::Idle;
        }
        let results = filter(corpus, query);
        if results.is_empty() {
            SearchOutcome::NoMatches
        } else {
            SearchOutcome::Matches(results)
        }
    }

    /// Text for the empty states, `None` when there are results to show.
    pub fn message(&self, query: &str) -> Option<String> {
        match self {
            SearchOutcome::Idle => Some("Type to search pages, industries and articles".to_string()),
            SearchOutcome::NoMatches => Some(format!("No results found for \"{}\"", query)),
            SearchOutcome::Matches(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn item(name: &str, href: &str, kind: ItemKind) -> SearchItem {
        SearchItem::new(name, href.to_string(), kind, Icon::Star)
    }

    #[test]
    fn blank_queries_are_idle_not_empty_matches() {
        let corpus = build_corpus();
        assert!(filter(&corpus, "").is_empty());
        assert!(filter(&corpus, "   \t").is_empty());
        assert_eq!(SearchOutcome::evaluate(&corpus, "  "), SearchOutcome::Idle);
        assert_eq!(
            SearchOutcome::Idle.message(""),
            Some("Type to search pages, industries and articles".to_string())
        );
    }

    #[test]
    fn hvac_scenario() {
        let corpus = vec![
            item("Home", "/", ItemKind::Page),
            item("HVAC", "/industries/hvac", ItemKind::Industry),
            item("Dental Practices", "/industries/dental", ItemKind::Industry),
        ];

        let results = filter(&corpus, "hva");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].href, "/industries/hvac");
        assert_eq!(results[0].kind, ItemKind::Industry);

        let outcome = SearchOutcome::evaluate(&corpus, "ZZZ");
        assert_eq!(outcome, SearchOutcome::NoMatches);
        assert_eq!(outcome.message("ZZZ"), Some("No results found for \"ZZZ\"".to_string()));
    }

    #[test]
    fn matches_name_only() {
        let corpus = vec![item("Pricing", "/pricing", ItemKind::Page)];
        assert!(filter(&corpus, "/pricing").is_empty());
        assert!(filter(&corpus, "page").is_empty());
        assert_eq!(filter(&corpus, "PRIC").len(), 1);
    }

    #[test]
    fn results_keep_corpus_order_across_kinds() {
        let corpus = build_corpus();
        let results = filter(&corpus, "s");
        let kinds: Vec<ItemKind> = results.iter().map(|item| item.kind).collect();
        let mut sorted = kinds.clone();
        sorted.sort_by_key(|kind| match kind {
            ItemKind::Page => 0,
            ItemKind::Industry => 1,
            ItemKind::Article => 2,
            ItemKind::Feature => 3,
        });
        assert_eq!(kinds, sorted);
    }

    #[test]
    fn results_are_capped() {
        let corpus: Vec<SearchItem> = (0..50)
            .map(|i| item(&format!("Review tip {}", i), "/blog", ItemKind::Article))
            .collect();
        let results = filter(&corpus, "review");
        assert_eq!(results.len(), MAX_RESULTS);
        assert_eq!(results[0].name, "Review tip 0");
        assert_eq!(results[19].name, "Review tip 19");
    }

    #[test]
    fn corpus_is_assembled_in_source_order() {
        let corpus = build_corpus();
        assert_eq!(corpus.first().map(|i| i.kind), Some(ItemKind::Page));
        assert_eq!(corpus.last().map(|i| i.kind), Some(ItemKind::Feature));
        assert_eq!(
            corpus.len(),
            NAV_LINKS.len() + INDUSTRIES.len() + BLOG_POSTS.len() + FEATURES.len()
        );
        for entry in &corpus {
            assert!(!entry.name.is_empty());
            assert!(!entry.href.is_empty());
        }
    }

    proptest! {
        #[test]
        fn every_result_contains_the_query(query in "[a-zA-Z &]{0,6}") {
            let corpus = build_corpus();
            let results = filter(&corpus, &query);
            prop_assert!(results.len() <= MAX_RESULTS);
            for found in results {
                prop_assert!(found.name.to_lowercase().contains(&query.to_lowercase()));
            }
        }

        #[test]
        fn results_are_a_prefix_of_all_matches(query in "[a-z]{1,3}") {
            let corpus = build_corpus();
            let needle = query.to_lowercase();
            let all: Vec<&SearchItem> = corpus
                .iter()
                .filter(|item| item.name.to_lowercase().contains(&needle))
                .collect();
            let results = filter(&corpus, &query);
            prop_assert_eq!(&results[..], &all[..results.len()]);
        }
    }
}
