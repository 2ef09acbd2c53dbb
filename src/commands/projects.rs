use once_cell::sync::Lazy;

use crate::models::{Category, Project, ProjectLinks, ProjectStats, ProjectStatus};

// Gallery filter: All, or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(Category),
}

impl CategoryFilter {
    fn accepts(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => category == wanted,
        }
    }
}

pub static PROJECTS: Lazy<Vec<Project>> = Lazy::new(|| {
    vec![
        Project {
            id: "1".to_string(),
            title: "Football Prediction AI".to_string(),
            description: "Artificial intelligence system predicting football match results with 78% accuracy.".to_string(),
            image: "https://images.unsplash.com/photo-1461749280684-dccba630e2f6?w=400&h=240&fit=crop".to_string(),
            tags: vec!["Python".to_string(), "TensorFlow".to_string(), "API".to_string(), "Machine Learning".to_string()],
            category: Category::Ai,
            status: ProjectStatus::Completed,
            links: ProjectLinks {
                demo: Some("/dashboard".to_string()),
                github: Some("https://github.com".to_string()),
            },
            stats: Some(ProjectStats { stars: Some(89), users: Some(234) }),
        },
        Project {
            id: "2".to_string(),
            title: "Dashboard Minecraft".to_string(),
            description: "Full administration interface for Minecraft servers with real-time monitoring.".to_string(),
            image: "https://images.unsplash.com/photo-1498050108023-c5249f4df085?w=400&h=240&fit=crop".to_string(),
            tags: vec!["React".to_string(), "Node.js".to_string(), "WebSocket".to_string(), "Docker".to_string()],
            category: Category::Games,
            status: ProjectStatus::InProgress,
            links: ProjectLinks {
                demo: Some("/minecraft-servers".to_string()),
                github: Some("https://github.com".to_string()),
            },
            stats: Some(ProjectStats { stars: Some(45), users: Some(67) }),
        },
        Project {
            id: "3".to_string(),
            title: "E-commerce Platform".to_string(),
            description: "Modern e-commerce platform with Stripe payments and advanced inventory management.".to_string(),
            image: "https://images.unsplash.com/photo-1487058792275-0ad4aaf24ca7?w=400&h=240&fit=crop".to_string(),
            tags: vec!["Next.js".to_string(), "Prisma".to_string(), "Stripe".to_string(), "PostgreSQL".to_string()],
            category: Category::Web,
            status: ProjectStatus::Completed,
            links: ProjectLinks {
                demo: Some("https://demo.example.com".to_string()),
                github: Some("https://github.com".to_string()),
            },
            stats: Some(ProjectStats { stars: Some(156), users: Some(1200) }),
        },
        Project {
            id: "4".to_string(),
            title: "API Analytics Tool".to_string(),
            description: "API monitoring and analysis tool with automatic alerts and detailed metrics.".to_string(),
            image: "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?w=400&h=240&fit=crop".to_string(),
            tags: vec!["Node.js".to_string(), "Redis".to_string(), "Grafana".to_string(), "Docker".to_string()],
            category: Category::Tools,
            status: ProjectStatus::Planning,
            links: ProjectLinks {
                demo: None,
                github: Some("https://github.com".to_string()),
            },
            stats: None,
        },
    ]
});

/// Gallery filter: text match on title, description or any tag, combined
/// with the category selector. Unlike the site search, an empty query keeps
/// everything — the gallery starts fully populated.
pub fn filter_projects<'a>(
    projects: &'a [Project],
    query: &str,
    filter: CategoryFilter,
) -> Vec<&'a Project> {
    let needle = query.to_lowercase();
    projects
        .iter()
        .filter(|p| {
            let matches_text = p.title.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
                || p.tags.iter().any(|t| t.to_lowercase().contains(&needle));
            matches_text && filter.accepts(p.category)
        })
        .collect()
}

pub fn category_counts(projects: &[Project]) -> Vec<(CategoryFilter, usize)> {
    let mut counts = vec![(CategoryFilter::All, projects.len())];
    for category in [Category::Web, Category::Ai, Category::Games, Category::Tools] {
        let n = projects.iter().filter(|p| p.category == category).count();
        counts.push((CategoryFilter::Only(category), n));
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_keeps_the_whole_gallery() {
        let hits = filter_projects(&PROJECTS, "", CategoryFilter::All);
        assert_eq!(hits.len(), PROJECTS.len());
    }

    #[test]
    fn category_narrows_the_gallery() {
        let hits = filter_projects(&PROJECTS, "", CategoryFilter::Only(Category::Ai));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Football Prediction AI");
    }

    #[test]
    fn text_and_category_combine() {
        let hits = filter_projects(&PROJECTS, "docker", CategoryFilter::Only(Category::Tools));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "API Analytics Tool");
        let none = filter_projects(&PROJECTS, "docker", CategoryFilter::Only(Category::Ai));
        assert!(none.is_empty());
    }

    #[test]
    fn tags_match_case_insensitively() {
        let hits = filter_projects(&PROJECTS, "STRIPE", CategoryFilter::All);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].category, Category::Web);
    }

    #[test]
    fn counts_cover_every_category() {
        let counts = category_counts(&PROJECTS);
        assert_eq!(counts[0], (CategoryFilter::All, 4));
        let total: usize = counts[1..].iter().map(|(_, n)| n).sum();
        assert_eq!(total, 4);
    }
}
