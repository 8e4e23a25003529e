use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the six fixed quiz categories. Chosen once per quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Topic {
    Wellness,
    TechTrends,
    Space,
    History,
    Science,
    PopCulture,
}

impl Topic {
    pub const ALL: [Topic; 6] = [
        Topic::Wellness,
        Topic::TechTrends,
        Topic::Space,
        Topic::History,
        Topic::Science,
        Topic::PopCulture,
    ];

    /// Stable identifier used in URLs and form values.
    pub fn slug(self) -> &'static str {
        match self {
            Topic::Wellness => "wellness",
            Topic::TechTrends => "tech-trends",
            Topic::Space => "space",
            Topic::History => "history",
            Topic::Science => "science",
            Topic::PopCulture => "pop-culture",
        }
    }

    /// Human-facing category name, used in prompts and feedback lines.
    pub fn display_name(self) -> &'static str {
        match self {
            Topic::Wellness => "Wellness",
            Topic::TechTrends => "Tech Trends",
            Topic::Space => "Space Exploration",
            Topic::History => "World History",
            Topic::Science => "Science & Nature",
            Topic::PopCulture => "Pop Culture",
        }
    }

    /// One-line description for topic listings.
    pub fn blurb(self) -> &'static str {
        match self {
            Topic::Wellness => "Health, mindfulness & self-care",
            Topic::TechTrends => "AI, blockchain & emerging tech",
            Topic::Space => "Cosmos, planets & astronomy",
            Topic::History => "Ancient civilizations & events",
            Topic::Science => "Biology, physics & chemistry",
            Topic::PopCulture => "Movies, music & entertainment",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Topic {
    type Err = String;

    /// Parse a topic from its slug (case insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let slug = s.trim().to_lowercase();
        Topic::ALL
            .into_iter()
            .find(|topic| topic.slug() == slug)
            .ok_or_else(|| {
                format!(
                    "Unknown topic: '{}'. Supported: wellness, tech-trends, space, history, science, pop-culture",
                    s
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_round_trips_for_all_topics() {
        for topic in Topic::ALL {
            assert_eq!(topic.slug().parse::<Topic>().unwrap(), topic);
        }
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!("TECH-TRENDS".parse::<Topic>().unwrap(), Topic::TechTrends);
        assert_eq!(" space ".parse::<Topic>().unwrap(), Topic::Space);
    }

    #[test]
    fn unknown_slug_is_rejected() {
        assert!("geography".parse::<Topic>().is_err());
    }
}
