use once_cell::sync::Lazy;

use crate::models::{RecordKind, SiteRecord};

fn record(
    id: &str,
    title: &str,
    description: &str,
    url: &str,
    kind: RecordKind,
    labels: &[&str],
) -> SiteRecord {
    SiteRecord {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        url: url.to_string(),
        kind,
        labels: Some(labels.iter().map(|l| l.to_string()).collect()),
    }
}

// The site-wide search corpus: every page plus the featured projects.
pub static SITE_RECORDS: Lazy<Vec<SiteRecord>> = Lazy::new(|| {
    vec![
        record(
            "1",
            "Home",
            "Landing page introducing featured projects and technologies",
            "/",
            RecordKind::Page,
            &["Navigation"],
        ),
        record(
            "2",
            "My Projects",
            "Web development, artificial intelligence and gaming projects",
            "/projects",
            RecordKind::Page,
            &["Portfolio"],
        ),
        record(
            "3",
            "Football Prediction AI",
            "Artificial intelligence system predicting football match results with 78% accuracy",
            "/projects",
            RecordKind::Project,
            &["Python", "TensorFlow", "AI"],
        ),
        record(
            "4",
            "Dashboard Minecraft",
            "Full administration interface for Minecraft servers with real-time monitoring",
            "/projects",
            RecordKind::Project,
            &["React", "Node.js", "Gaming"],
        ),
        record(
            "5",
            "Minecraft Servers",
            "Management and monitoring of Minecraft servers with live statistics",
            "/minecraft-servers",
            RecordKind::Page,
            &["Gaming", "Monitoring"],
        ),
        record(
            "6",
            "Profile",
            "Personal information, experience and technical skills",
            "/profile",
            RecordKind::Page,
            &["Personal"],
        ),
        record(
            "7",
            "Contact",
            "Contact form and ways to reach me",
            "/contact",
            RecordKind::Page,
            &["Communication"],
        ),
        record(
            "8",
            "Dashboard",
            "Personal dashboard with access to projects and tools",
            "/dashboard",
            RecordKind::Page,
            &["Private", "Admin"],
        ),
    ]
});

/// Case-insensitive substring filter over title, description and labels.
/// An empty (or whitespace-only) query yields nothing: show nothing until
/// asked. Result order follows the record set; no ranking.
pub fn filter_records<'a>(records: &'a [SiteRecord], query: &str) -> Vec<&'a SiteRecord> {
    if query.trim().is_empty() {
        return vec![];
    }
    // emptiness is decided on the trimmed query, matching is not
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|r| {
            r.title.to_lowercase().contains(&needle)
                || r.description.to_lowercase().contains(&needle)
                || r.labels
                    .as_ref()
                    .is_some_and(|labels| labels.iter().any(|l| l.to_lowercase().contains(&needle)))
        })
        .collect()
}

pub fn search(query: &str) -> Vec<SiteRecord> {
    let t0 = std::time::Instant::now();
    let hits: Vec<SiteRecord> = filter_records(&SITE_RECORDS, query).into_iter().cloned().collect();
    tracing::debug!(
        "search q=\"{}\" n={} elapsed={}ms",
        query,
        hits.len(),
        t0.elapsed().as_millis()
    );
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Vec<SiteRecord> {
        vec![
            record("1", "Dashboard Minecraft", "Admin interface", "/projects", RecordKind::Project, &["React"]),
            record("2", "Contact", "How to reach me", "/contact", RecordKind::Page, &["Mail"]),
        ]
    }

    #[test]
    fn empty_query_yields_nothing() {
        let records = fixture();
        assert!(filter_records(&records, "").is_empty());
        assert!(filter_records(&records, "   ").is_empty());
    }

    #[test]
    fn matches_are_case_insensitive_substrings() {
        let records = fixture();
        let hits = filter_records(&records, "mine");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Dashboard Minecraft");
        assert!(filter_records(&records, "zzz").is_empty());
    }

    #[test]
    fn labels_participate_in_matching() {
        let records = fixture();
        let hits = filter_records(&records, "react");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");
    }

    #[test]
    fn order_is_stable() {
        let records = fixture();
        // both records match "a"; record-set order is preserved
        let hits = filter_records(&records, "a");
        let ids: Vec<&str> = hits.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[test]
    fn site_corpus_answers_known_queries() {
        let hits = search("minecraft");
        assert!(hits.iter().any(|r| r.title == "Dashboard Minecraft"));
        assert!(hits.iter().any(|r| r.title == "Minecraft Servers"));
        assert!(search("").is_empty());
    }

    #[test]
    fn untrimmed_queries_match_verbatim() {
        let records = fixture();
        // a padded query is non-empty but the padding takes part in matching
        assert!(filter_records(&records, " mine ").is_empty());
    }
}
