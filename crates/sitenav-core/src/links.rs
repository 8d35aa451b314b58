//! Outbound profile links

use std::fmt;

const GITHUB_PROFILE: &str = "https://github.com/captain-projects-creator";
const LINKEDIN_PROFILE: &str = "https://www.linkedin.com/in/deva-r-a9034232a";

/// Buttons that leave the site in a new, isolated browsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExternalLink {
    /// `#link-git` social button
    GitHub,
    /// `#link-linkedin` social button
    LinkedIn,
    /// `.visit-btn` call to action, points at the GitHub profile
    Visit,
}

impl ExternalLink {
    pub const ALL: [ExternalLink; 3] = [Self::GitHub, Self::LinkedIn, Self::Visit];

    /// Destination URL
    pub fn url(self) -> &'static str {
        match self {
            Self::GitHub | Self::Visit => GITHUB_PROFILE,
            Self::LinkedIn => LINKEDIN_PROFILE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::GitHub => "github",
            Self::LinkedIn => "linkedin",
            Self::Visit => "visit",
        }
    }
}

impl fmt::Display for ExternalLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
