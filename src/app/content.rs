use serde::Deserialize;

use super::error::AppError;

/// Everything the page displays. The web original scattered this across HTML
/// `data-*` attributes; here it lives in one embedded JSON document parsed at
/// startup.
#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioContent {
    pub name: String,
    pub tagline: String,
    /// Strings cycled by the hero typing effect (the old `data-texts`)
    pub texts: Vec<String>,
    pub about: AboutSection,
    pub stats: Vec<StatItem>,
    pub skills: Vec<SkillItem>,
    pub nav_links: Vec<NavLink>,
    pub contact: ContactInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AboutSection {
    pub heading: String,
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatItem {
    pub label: String,
    /// Counter end value (the old `data-target`)
    pub target: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillItem {
    pub name: String,
    /// Fill percentage 0-100 (the old `data-level`)
    pub level: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NavLink {
    pub label: String,
    /// Either a page name ("index.html") or an in-page anchor ("#about")
    pub href: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub relay_endpoint: String,
}

const EMBEDDED_CONTENT: &str = include_str!("../../assets/portfolio.json");

impl PortfolioContent {
    /// Parse the content compiled into the binary. Failing here means the
    /// shipped asset is broken, so the caller treats it as a startup error.
    pub fn embedded() -> Result<Self, AppError> {
        let content: PortfolioContent = serde_json::from_str(EMBEDDED_CONTENT)?;
        content.checked()
    }

    fn checked(self) -> Result<Self, AppError> {
        if self.skills.iter().any(|s| s.level > 100) {
            return Err(AppError::Content(
                "skill level above 100 percent".to_string(),
            ));
        }
        if self.stats.iter().any(|s| s.target < 0) {
            return Err(AppError::Content("negative stat target".to_string()));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_parses() {
        let content = PortfolioContent::embedded().unwrap();
        assert!(!content.name.is_empty());
        assert!(!content.texts.is_empty());
        assert!(!content.nav_links.is_empty());
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        let content = PortfolioContent::embedded().unwrap();
        assert!(content.skills.iter().all(|s| s.level <= 100));
    }

    #[test]
    fn test_stat_targets_are_non_negative() {
        let content = PortfolioContent::embedded().unwrap();
        assert!(content.stats.iter().all(|s| s.target >= 0));
    }

    #[test]
    fn test_relay_endpoint_is_https() {
        let content = PortfolioContent::embedded().unwrap();
        assert!(content.contact.relay_endpoint.starts_with("https://"));
    }

    #[test]
    fn test_level_above_100_is_rejected() {
        let json = r#"{
            "name": "n", "tagline": "t", "texts": ["a"],
            "about": { "heading": "h", "paragraphs": [] },
            "stats": [], "skills": [{ "name": "x", "level": 101 }],
            "nav_links": [],
            "contact": {
                "email": "e", "phone": "p", "linkedin": "l",
                "github": "g", "relay_endpoint": "r"
            }
        }"#;
        let content: PortfolioContent = serde_json::from_str(json).unwrap();
        let err = content.checked().unwrap_err();
        assert!(err.to_string().contains("skill level"));
    }
}
