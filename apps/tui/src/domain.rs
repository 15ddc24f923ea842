use serde::{Deserialize, Serialize};

/// A single portfolio entry as it appears in the dataset.
///
/// Everything except the title is optional; identity is positional within
/// the loaded array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl Project {
    pub fn new(title: impl Into<String>, year: Option<i32>) -> Self {
        Self {
            title: title.into(),
            year,
            description: None,
            image: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Number of visible projects sharing one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearCount {
    pub year: i32,
    pub count: usize,
}

/// Applies both filters to the full dataset, preserving input order.
///
/// The year filter runs first (exact match, skipped when `active_year` is
/// `None`), then a case-insensitive substring match against title OR
/// description. Absent fields never match.
pub fn visible_projects<'a>(
    all: &'a [Project],
    active_year: Option<i32>,
    query: &str,
) -> Vec<&'a Project> {
    let needle = query.trim().to_lowercase();

    all.iter()
        .filter(|project| active_year.map_or(true, |year| project.year == Some(year)))
        .filter(|project| needle.is_empty() || matches_query(project, &needle))
        .collect()
}

fn matches_query(project: &Project, needle: &str) -> bool {
    let title = project.title.to_lowercase();
    if title.contains(needle) {
        return true;
    }
    project
        .description
        .as_deref()
        .is_some_and(|description| description.to_lowercase().contains(needle))
}

/// Groups a subset by year and counts occurrences, ascending by year.
///
/// Entries without a year are excluded entirely rather than counted as an
/// "unknown" bucket.
pub fn year_counts(subset: &[&Project]) -> Vec<YearCount> {
    let mut counts: Vec<YearCount> = Vec::new();

    for project in subset {
        let Some(year) = project.year else { continue };
        match counts.iter_mut().find(|entry| entry.year == year) {
            Some(entry) => entry.count += 1,
            None => counts.push(YearCount { year, count: 1 }),
        }
    }

    counts.sort_by_key(|entry| entry.year);
    counts
}

/// The first `limit` entries, used by the home screen (dataset is assumed
/// newest-first).
pub fn latest(all: &[Project], limit: usize) -> &[Project] {
    &all[..all.len().min(limit)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Project> {
        vec![
            Project::new("A", Some(2020)).with_description("terminal dashboard"),
            Project::new("B", Some(2020)).with_description("pie charts"),
            Project::new("C", Some(2021)).with_description("search tooling"),
        ]
    }

    #[test]
    fn identity_case_returns_everything_in_order() {
        let projects = sample();
        let visible = visible_projects(&projects, None, "");

        assert_eq!(visible.len(), 3);
        assert_eq!(visible[0].title, "A");
        assert_eq!(visible[2].title, "C");
    }

    #[test]
    fn year_filter_is_exact() {
        let projects = sample();
        let visible = visible_projects(&projects, Some(2020), "");

        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|p| p.year == Some(2020)));
    }

    #[test]
    fn search_is_case_insensitive_on_title_or_description() {
        let projects = sample();

        let by_title = visible_projects(&projects, None, " b ");
        assert_eq!(by_title.len(), 2); // title "B" plus "dashboard"

        let by_description = visible_projects(&projects, None, "PIE");
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].title, "B");
    }

    #[test]
    fn missing_description_never_matches() {
        let projects = vec![Project::new("Bare", Some(2019))];
        assert!(visible_projects(&projects, None, "anything").is_empty());
    }

    #[test]
    fn both_filters_compose() {
        let projects = sample();
        let visible = visible_projects(&projects, Some(2020), "charts");

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "B");
    }

    #[test]
    fn counts_ascend_and_sum_to_subset_size_minus_yearless() {
        let mut projects = sample();
        projects.push(Project::new("undated", None));
        projects.push(Project::new("old", Some(2018)));

        let visible = visible_projects(&projects, None, "");
        let counts = year_counts(&visible);

        let years: Vec<i32> = counts.iter().map(|c| c.year).collect();
        assert_eq!(years, vec![2018, 2020, 2021]);

        let total: usize = counts.iter().map(|c| c.count).sum();
        assert_eq!(total, visible.len() - 1);
    }

    #[test]
    fn scenario_two_years() {
        let projects = sample();
        let visible = visible_projects(&projects, None, "");
        let counts = year_counts(&visible);

        assert_eq!(
            counts,
            vec![
                YearCount { year: 2020, count: 2 },
                YearCount { year: 2021, count: 1 },
            ]
        );
    }

    #[test]
    fn no_match_yields_empty_subset_and_empty_counts() {
        let projects = sample();
        let visible = visible_projects(&projects, None, "zzz");

        assert!(visible.is_empty());
        assert!(year_counts(&visible).is_empty());
    }

    #[test]
    fn latest_clamps_to_dataset_length() {
        let projects = sample();
        assert_eq!(latest(&projects, 2).len(), 2);
        assert_eq!(latest(&projects, 10).len(), 3);
    }
}
