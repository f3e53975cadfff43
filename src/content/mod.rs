//! Portfolio content: personal info, skills, projects, experience, education
//!
//! Content is read-only data. The bundled file is compiled into the binary;
//! a user file named by `content_path` replaces it entirely. Both go through
//! the same validation before anything renders.

pub mod dates;

use crate::typing::PhraseList;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

const BUNDLED: &str = include_str!("portfolio.toml");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid content TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("duplicate project id: {0}")]
    DuplicateProject(String),
    #[error("typing_phrases must contain at least one phrase")]
    NoPhrases,
    #[error("invalid {field} date {value:?} (expected YYYY-MM)")]
    InvalidDate { field: &'static str, value: String },
}

// ─────────────────────────────────────────────────────────────────────────────
// Records
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub location: String,
    pub linkedin: String,
    pub github: String,
    #[serde(default)]
    pub portfolio: Option<String>,
    #[serde(default)]
    pub resume: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub bio: String,
    #[serde(default)]
    pub about_subtitle: Option<String>,
    #[serde(default)]
    pub extended_bio: Vec<String>,
    #[serde(default)]
    pub quick_info_title: Option<String>,
    #[serde(default)]
    pub availability_status: Option<String>,
    #[serde(default)]
    pub skills_title: Option<String>,
    #[serde(default)]
    pub education_badge: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    pub contact: Contact,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationItem {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub is_external: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    pub icon: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    /// 1..=4, for pip meters
    pub fn rank(self) -> u8 {
        match self {
            SkillLevel::Beginner => 1,
            SkillLevel::Intermediate => 2,
            SkillLevel::Advanced => 3,
            SkillLevel::Expert => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
            SkillLevel::Expert => "expert",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Frameworks,
    Languages,
    Tools,
    Ai,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 6] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Frameworks,
        SkillCategory::Languages,
        SkillCategory::Tools,
        SkillCategory::Ai,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend Development",
            SkillCategory::Backend => "Backend Development",
            SkillCategory::Frameworks => "Frameworks & Libraries",
            SkillCategory::Languages => "Programming Languages",
            SkillCategory::Tools => "Tools & Technologies",
            SkillCategory::Ai => "AI/ML Technologies",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: SkillLevel,
    pub category: SkillCategory,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonKind {
    #[default]
    Primary,
    Secondary,
    Outline,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectButton {
    pub label: String,
    pub url: String,
    #[serde(rename = "type", default)]
    pub kind: ButtonKind,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub long_description: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub buttons: Vec<ProjectButton>,
    #[serde(default)]
    pub featured: bool,
}

/// Technologies shown on a card before collapsing into "+N more"
pub const CARD_TECH_LIMIT: usize = 3;
/// Buttons shown on a card; the modal shows all of them
pub const CARD_BUTTON_LIMIT: usize = 2;

impl Project {
    /// First few technologies plus how many were left out
    pub fn tech_preview(&self) -> (&[String], usize) {
        let shown = self.technologies.len().min(CARD_TECH_LIMIT);
        (&self.technologies[..shown], self.technologies.len() - shown)
    }

    pub fn card_buttons(&self) -> &[ProjectButton] {
        &self.buttons[..self.buttons.len().min(CARD_BUTTON_LIMIT)]
    }

    /// Long description if present, else the card description
    pub fn modal_description(&self) -> &str {
        self.long_description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(&self.description)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceKind {
    Internship,
    Training,
    Leadership,
}

impl ExperienceKind {
    pub fn label(self) -> &'static str {
        match self {
            ExperienceKind::Internship => "Internship",
            ExperienceKind::Training => "Training",
            ExperienceKind::Leadership => "Leadership",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub key_areas: Vec<String>,
    #[serde(rename = "type")]
    pub kind: ExperienceKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EducationStatus {
    Completed,
    InProgress,
    Expected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thesis {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub advisor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field: String,
    #[serde(default)]
    pub major: Option<String>,
    #[serde(default)]
    pub specialization: Option<String>,
    pub location: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub status: Option<EducationStatus>,
    #[serde(default)]
    pub gpa: Option<String>,
    #[serde(default)]
    pub grade_system: Option<String>,
    #[serde(default)]
    pub honors: Option<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub relevant_coursework: Vec<String>,
    #[serde(default)]
    pub thesis: Option<Thesis>,
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub awards: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
}

impl Education {
    /// Label for a missing end date
    pub fn open_end_label(&self) -> &'static str {
        match self.status {
            Some(EducationStatus::Expected) => "Expected",
            _ => "Present",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Portfolio
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub personal: PersonalInfo,
    pub typing_phrases: Vec<String>,
    #[serde(default)]
    pub navigation: Vec<NavigationItem>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
}

impl Portfolio {
    /// Content compiled into the binary
    pub fn bundled() -> Result<Self, ContentError> {
        Self::from_toml_str(BUNDLED)
    }

    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// User file if configured, bundled content otherwise
    pub fn load(path: Option<&Path>) -> Result<Self, ContentError> {
        match path {
            Some(path) => {
                tracing::info!("Loading content from {}", path.display());
                Self::from_path(path)
            }
            None => Self::bundled(),
        }
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ContentError> {
        let portfolio: Portfolio = toml::from_str(raw)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.typing_phrases.is_empty() {
            return Err(ContentError::NoPhrases);
        }

        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.id.as_str()) {
                return Err(ContentError::DuplicateProject(project.id.clone()));
            }
        }

        for exp in &self.experience {
            dates::check("start_date", &exp.start_date)?;
            if let Some(end) = &exp.end_date {
                dates::check("end_date", end)?;
            }
        }
        for edu in &self.education {
            dates::check("start_date", &edu.start_date)?;
            if let Some(end) = &edu.end_date {
                dates::check("end_date", end)?;
            }
        }
        Ok(())
    }

    pub fn phrase_list(&self) -> Result<PhraseList, ContentError> {
        PhraseList::new(self.typing_phrases.iter().cloned()).map_err(|_| ContentError::NoPhrases)
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Skills grouped by category in display order; empty groups omitted
    pub fn skills_by_category(&self) -> Vec<(SkillCategory, Vec<&Skill>)> {
        SkillCategory::ALL
            .iter()
            .filter_map(|&category| {
                let group: Vec<&Skill> = self
                    .skills
                    .iter()
                    .filter(|s| s.category == category)
                    .collect();
                (!group.is_empty()).then_some((category, group))
            })
            .collect()
    }
}
