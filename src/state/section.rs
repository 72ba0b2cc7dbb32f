//! Page sections

use serde::{Deserialize, Serialize};

/// One named, anchorable region of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    About,
    Experience,
    Skills,
    Projects,
    Education,
    Interests,
    Contact,
}

impl Section {
    /// All sections in page order
    pub const ALL: [Section; 8] = [
        Section::Home,
        Section::About,
        Section::Experience,
        Section::Skills,
        Section::Projects,
        Section::Education,
        Section::Interests,
        Section::Contact,
    ];

    /// Anchor identifier (`#home`, `#about`, ...)
    pub fn id(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Experience => "experience",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Education => "education",
            Self::Interests => "interests",
            Self::Contact => "contact",
        }
    }

    /// Label shown in the navigation bar
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Experience => "Experience",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Education => "Education",
            Self::Interests => "Interests",
            Self::Contact => "Contact",
        }
    }

    /// Position in page order
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or_default()
    }

    /// Section at a page-order position
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_home() {
        assert_eq!(Section::default(), Section::Home);
    }

    #[test]
    fn test_page_order() {
        let ids: Vec<&str> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(
            ids,
            vec![
                "home",
                "about",
                "experience",
                "skills",
                "projects",
                "education",
                "interests",
                "contact"
            ]
        );
    }

    #[test]
    fn test_index_round_trips_through_from_index() {
        for (i, section) in Section::ALL.iter().enumerate() {
            assert_eq!(section.index(), i);
            assert_eq!(Section::from_index(i), Some(*section));
        }
        assert_eq!(Section::from_index(8), None);
    }

    #[test]
    fn test_label_lowercases_to_id() {
        for section in Section::ALL {
            assert_eq!(section.label().to_lowercase(), section.id());
        }
    }

    #[test]
    fn test_serializes_as_id() {
        let json = serde_json::to_string(&Section::Education).unwrap();
        assert_eq!(json, "\"education\"");
    }
}
