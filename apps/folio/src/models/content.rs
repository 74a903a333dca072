//! Content records backing the project and experience pages.
//!
//! These mirror the frontmatter schemas of the MDX content files. Records
//! are immutable once loaded; everything downstream (filtering, sorting,
//! rendering) derives new sequences instead of mutating them.

use serde::{Deserialize, Serialize};

use super::dates::{DateStamp, EndDate};

// ────────────────────────────────────────────────────────────────────────────
// Kind enumerations
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    School,
    Personal,
    Company,
}

impl ProjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectKind::School => "school",
            ProjectKind::Personal => "personal",
            ProjectKind::Company => "company",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceKind {
    Internship,
    Teaching,
    Research,
    Fulltime,
}

impl ExperienceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceKind::Internship => "internship",
            ExperienceKind::Teaching => "teaching",
            ExperienceKind::Research => "research",
            ExperienceKind::Fulltime => "fulltime",
        }
    }

    /// Human-readable label for UI chips.
    pub fn label(&self) -> &'static str {
        match self {
            ExperienceKind::Internship => "Internship",
            ExperienceKind::Teaching => "Teaching",
            ExperienceKind::Research => "Research",
            ExperienceKind::Fulltime => "Full-time",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Shipped,
    Prototype,
    Research,
    Coursework,
}

// ────────────────────────────────────────────────────────────────────────────
// Records
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectLinks {
    pub github: Option<String>,
    pub demo: Option<String>,
    pub paper: Option<String>,
    pub video: Option<String>,
    pub blog: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroImage {
    pub src: String,
    pub alt: String,
}

/// One project page, as declared in its frontmatter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub slug: String,
    pub date: DateStamp,
    #[serde(rename = "type")]
    pub kind: ProjectKind,
    #[serde(default)]
    pub featured: bool,
    pub summary: String,
    pub tags: Vec<String>,
    pub stack: Vec<String>,
    #[serde(default)]
    pub links: ProjectLinks,
    pub hero_image: Option<HeroImage>,
    #[serde(default)]
    pub highlights: Vec<String>,
    pub role: Option<String>,
    pub team_size: Option<u32>,
    pub organization: Option<String>,
    pub location: Option<String>,
    pub status: Option<ProjectStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceLinks {
    pub company: Option<String>,
    pub related_project: Option<String>,
}

/// One experience page (role, internship, teaching position, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub title: String,
    pub slug: String,
    pub organization: String,
    pub location: String,
    pub start_date: DateStamp,
    pub end_date: EndDate,
    #[serde(rename = "type")]
    pub kind: ExperienceKind,
    pub summary: String,
    pub stack: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub links: ExperienceLinks,
}

// ────────────────────────────────────────────────────────────────────────────
// The generalization consumed by the filter engine
// ────────────────────────────────────────────────────────────────────────────

/// Common view over projects and experiences for filtering and sorting.
///
/// `search_text` returns the free-text fields the search box matches
/// against, in addition to tags and stack which are always searched.
pub trait ContentRecord {
    fn slug(&self) -> &str;
    fn kind(&self) -> &'static str;
    fn tags(&self) -> &[String];
    fn stack(&self) -> &[String];
    fn sort_date(&self) -> DateStamp;
    fn featured(&self) -> bool {
        false
    }
    fn search_text(&self) -> Vec<&str>;
}

impl ContentRecord for Project {
    fn slug(&self) -> &str {
        &self.slug
    }

    fn kind(&self) -> &'static str {
        self.kind.as_str()
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn stack(&self) -> &[String] {
        &self.stack
    }

    fn sort_date(&self) -> DateStamp {
        self.date
    }

    fn featured(&self) -> bool {
        self.featured
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.title, &self.summary]
    }
}

impl ContentRecord for Experience {
    fn slug(&self) -> &str {
        &self.slug
    }

    fn kind(&self) -> &'static str {
        self.kind.as_str()
    }

    fn tags(&self) -> &[String] {
        // Experiences carry no tag list; the stack doubles as their
        // filterable vocabulary.
        &[]
    }

    fn stack(&self) -> &[String] {
        &self.stack
    }

    fn sort_date(&self) -> DateStamp {
        self.start_date
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.title, &self.organization, &self.summary]
    }
}
