//! Site navigation model: a static page list resolved against a base path,
//! with the current entry marked and cross-origin entries flagged external.

/// Relationship attributes applied to every external entry.
pub const EXTERNAL_REL: &str = "noopener noreferrer";

#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub url: &'static str,
    pub title: &'static str,
}

pub const PAGES: &[Page] = &[
    Page { url: "", title: "Main" },
    Page { url: "projects/", title: "Projects" },
    Page { url: "contact/", title: "Contact" },
    Page { url: "cv/", title: "CV/Resume" },
    Page {
        url: "https://github.com/ArtienVoskanian",
        title: "Github",
    },
];

/// One resolved navigation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub title: &'static str,
    pub href: String,
    pub current: bool,
    pub external: bool,
    /// `Some(EXTERNAL_REL)` for external entries; they open in a new context.
    pub rel: Option<&'static str>,
}

/// Base path used when serving locally; deployments sit under a prefix.
pub fn default_base_path(host: &str) -> &'static str {
    if host == "localhost" || host == "127.0.0.1" {
        "/"
    } else {
        "/portfolio/"
    }
}

pub fn is_external(url: &str) -> bool {
    let lower = url.to_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Normalizes a path so `/index.html` and `/` compare equal, and every path
/// carries a trailing slash.
pub fn normalize_path(path: &str) -> String {
    let trimmed = path
        .strip_suffix("/index.html")
        .map_or(path, |rest| if rest.is_empty() { "/" } else { rest });

    if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    }
}

/// Builds the full nav bar: internal URLs get the base-path prefix, the entry
/// matching `current_path` is marked current, externals never are.
pub fn build_nav(base_path: &str, current_path: &str) -> Vec<NavEntry> {
    let current_normalized = normalize_path(current_path);

    PAGES
        .iter()
        .map(|page| {
            let external = is_external(page.url);
            let href = if external {
                page.url.to_string()
            } else {
                format!("{base_path}{}", page.url)
            };

            let current = !external && normalize_path(&href) == current_normalized;

            NavEntry {
                title: page.title,
                href,
                current,
                external,
                rel: external.then_some(EXTERNAL_REL),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_hosts_use_root_base_path() {
        assert_eq!(default_base_path("localhost"), "/");
        assert_eq!(default_base_path("127.0.0.1"), "/");
        assert_eq!(default_base_path("example.github.io"), "/portfolio/");
    }

    #[test]
    fn internal_urls_are_prefixed_with_base_path() {
        let nav = build_nav("/portfolio/", "/portfolio/");
        assert_eq!(nav[1].href, "/portfolio/projects/");
        assert!(!nav[1].external);
        assert_eq!(nav[1].rel, None);
    }

    #[test]
    fn external_urls_keep_their_scheme_and_get_safe_rel() {
        let nav = build_nav("/", "/");
        let github = nav.last().unwrap();

        assert!(github.external);
        assert_eq!(github.href, "https://github.com/ArtienVoskanian");
        assert_eq!(github.rel, Some(EXTERNAL_REL));
        assert!(!github.current);
    }

    #[test]
    fn index_html_and_trailing_slash_are_equivalent() {
        assert_eq!(normalize_path("/portfolio/index.html"), "/portfolio/");
        assert_eq!(normalize_path("/index.html"), "/");
        assert_eq!(normalize_path("/projects"), "/projects/");
        assert_eq!(normalize_path("/projects/"), "/projects/");
    }

    #[test]
    fn current_page_is_marked_after_normalization() {
        let nav = build_nav("/portfolio/", "/portfolio/projects/index.html");

        let current: Vec<&NavEntry> = nav.iter().filter(|entry| entry.current).collect();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].title, "Projects");
    }

    #[test]
    fn scheme_detection_is_case_insensitive() {
        assert!(is_external("HTTPS://example.com"));
        assert!(is_external("http://example.com"));
        assert!(!is_external("projects/"));
    }
}
