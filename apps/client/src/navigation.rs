//! Route table for the interactive shell.

/// A top-level page, addressed by path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Jobs,
    Cvs,
    Matches,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::Jobs, Page::Cvs, Page::Matches];

    /// Resolves a path such as `/jobs` or `/jobs/`. Unknown paths yield `None`.
    pub fn from_path(path: &str) -> Option<Page> {
        let path = path.trim();
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() && path.starts_with('/') {
            "/"
        } else {
            trimmed
        };

        Page::ALL.into_iter().find(|p| p.path() == normalized)
    }

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Jobs => "/jobs",
            Page::Cvs => "/cvs",
            Page::Matches => "/matches",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "AI-Powered Recruitment System",
            Page::Jobs => "Process Job Description",
            Page::Cvs => "CV Management",
            Page::Matches => "Matches",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Page::Home => {
                "Streamline your recruitment process with our advanced AI system. Process job \
                 descriptions, analyze CVs, and match candidates automatically."
            }
            Page::Jobs => "Enter the job details below to analyze and extract key information.",
            Page::Cvs => "Upload and manage your CVs to match with job opportunities.",
            Page::Matches => "Match candidates to jobs and generate interview requests.",
        }
    }

    /// Links shown on the page, as (label, target).
    pub fn links(self) -> &'static [(&'static str, Page)] {
        match self {
            Page::Home => &[
                ("Process Job Description", Page::Jobs),
                ("Submit CV", Page::Cvs),
            ],
            Page::Matches => &[("Back to Jobs", Page::Home), ("Back to CVs", Page::Cvs)],
            Page::Jobs | Page::Cvs => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_resolve() {
        assert_eq!(Page::from_path("/"), Some(Page::Home));
        assert_eq!(Page::from_path("/jobs"), Some(Page::Jobs));
        assert_eq!(Page::from_path("/cvs"), Some(Page::Cvs));
        assert_eq!(Page::from_path("/matches"), Some(Page::Matches));
    }

    #[test]
    fn test_trailing_slash_and_whitespace() {
        assert_eq!(Page::from_path(" /matches/ "), Some(Page::Matches));
        assert_eq!(Page::from_path("//"), Some(Page::Home));
    }

    #[test]
    fn test_singular_cv_path_is_not_routed() {
        assert_eq!(Page::from_path("/cv"), None);
        assert_eq!(Page::from_path("jobs"), None);
        assert_eq!(Page::from_path(""), None);
    }

    #[test]
    fn test_every_link_target_is_routable() {
        for page in Page::ALL {
            for (_, target) in page.links() {
                assert_eq!(Page::from_path(target.path()), Some(*target));
            }
        }
    }

    #[test]
    fn test_matches_back_link_goes_to_cvs() {
        let targets: Vec<_> = Page::Matches.links().iter().map(|(_, p)| p.path()).collect();
        assert_eq!(targets, vec!["/", "/cvs"]);
    }
}
