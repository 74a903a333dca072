//! Content loader — reads `.mdx` files, parses their YAML frontmatter into
//! typed records, and enforces the slug-uniqueness invariant.
//!
//! Only the frontmatter is interpreted; the MDX body is handed back as raw
//! text for the rendering pipeline, which is outside this crate.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::errors::FolioError;
use crate::models::content::{ContentRecord, Experience, Project};

/// A single content file: its validated frontmatter plus the raw MDX body.
#[derive(Debug, Clone)]
pub struct Document<T> {
    pub frontmatter: T,
    pub body: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Public operations
// ────────────────────────────────────────────────────────────────────────────

/// Loads every project under `dir`, sorted by date descending.
/// A missing directory is an empty record set, not an error.
pub fn load_projects(dir: &Path) -> Result<Vec<Project>, FolioError> {
    let mut projects = load_records::<Project>(dir)?;
    projects.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(projects)
}

/// Loads every experience under `dir`, sorted by start date descending.
pub fn load_experiences(dir: &Path) -> Result<Vec<Experience>, FolioError> {
    let mut experiences = load_records::<Experience>(dir)?;
    experiences.sort_by(|a, b| b.start_date.cmp(&a.start_date));
    Ok(experiences)
}

/// Loads one project by slug; `Ok(None)` if no such file exists.
pub fn project_by_slug(dir: &Path, slug: &str) -> Result<Option<Document<Project>>, FolioError> {
    load_document(dir, slug)
}

/// Loads one experience by slug; `Ok(None)` if no such file exists.
pub fn experience_by_slug(
    dir: &Path,
    slug: &str,
) -> Result<Option<Document<Experience>>, FolioError> {
    load_document(dir, slug)
}

/// Lists the slugs (file stems) of all content files under `dir`.
pub fn content_slugs(dir: &Path) -> Result<Vec<String>, FolioError> {
    Ok(content_files(dir)?
        .iter()
        .filter_map(|p| p.file_stem())
        .map(|stem| stem.to_string_lossy().into_owned())
        .collect())
}

// ────────────────────────────────────────────────────────────────────────────
// Internals
// ────────────────────────────────────────────────────────────────────────────

fn content_files(dir: &Path) -> Result<Vec<PathBuf>, FolioError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "mdx"))
        .collect();
    // Directory iteration order is platform-dependent
    files.sort();
    Ok(files)
}

fn load_records<T>(dir: &Path) -> Result<Vec<T>, FolioError>
where
    T: DeserializeOwned + ContentRecord,
{
    let mut records: Vec<T> = Vec::new();
    for path in content_files(dir)? {
        let document: Document<T> = parse_document(&path)?;
        let slug = document.frontmatter.slug();
        if records.iter().any(|r| r.slug() == slug) {
            return Err(FolioError::DuplicateSlug {
                slug: slug.to_string(),
                path,
            });
        }
        records.push(document.frontmatter);
    }
    Ok(records)
}

fn load_document<T: DeserializeOwned>(
    dir: &Path,
    slug: &str,
) -> Result<Option<Document<T>>, FolioError> {
    let path = dir.join(format!("{slug}.mdx"));
    if !path.exists() {
        return Ok(None);
    }
    parse_document(&path).map(Some)
}

fn parse_document<T: DeserializeOwned>(path: &Path) -> Result<Document<T>, FolioError> {
    let raw = std::fs::read_to_string(path)?;
    let (front, body) = split_frontmatter(&raw).map_err(|reason| FolioError::Frontmatter {
        path: path.to_path_buf(),
        reason,
    })?;
    let frontmatter = serde_yaml::from_str(front).map_err(|e| FolioError::Frontmatter {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(Document {
        frontmatter,
        body: body.to_string(),
    })
}

/// Splits a `---`-delimited YAML frontmatter block from the MDX body.
fn split_frontmatter(raw: &str) -> Result<(&str, &str), String> {
    let raw = raw.trim_start_matches('\u{feff}');
    let rest = raw
        .strip_prefix("---")
        .ok_or_else(|| "missing opening frontmatter delimiter".to_string())?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))
        .ok_or_else(|| "malformed opening frontmatter delimiter".to_string())?;

    let end = rest
        .find("\n---")
        .ok_or_else(|| "missing closing frontmatter delimiter".to_string())?;
    let front = &rest[..end];
    let body = &rest[end + "\n---".len()..];
    let body = body
        .strip_prefix("\r\n")
        .or_else(|| body.strip_prefix('\n'))
        .unwrap_or(body);
    Ok((front, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const PROJECT_MDX: &str = "---\n\
title: Raft in a Weekend\n\
slug: raft-weekend\n\
date: \"2024-06-01\"\n\
type: personal\n\
featured: true\n\
summary: A toy Raft implementation.\n\
tags: [distributed-systems]\n\
stack: [Rust, Tokio]\n\
---\n\
\n\
## What it is\n\
A log-replicated KV store.\n";

    fn write_project(dir: &Path, slug: &str, date: &str) {
        let contents = format!(
            "---\ntitle: {slug}\nslug: {slug}\ndate: \"{date}\"\ntype: school\nsummary: x\ntags: []\nstack: []\n---\nbody\n"
        );
        fs::write(dir.join(format!("{slug}.mdx")), contents).unwrap();
    }

    #[test]
    fn test_split_frontmatter() {
        let (front, body) = split_frontmatter("---\na: 1\n---\nbody text\n").unwrap();
        assert_eq!(front, "a: 1");
        assert_eq!(body, "body text\n");
    }

    #[test]
    fn test_split_frontmatter_requires_delimiters() {
        assert!(split_frontmatter("title: no frontmatter\n").is_err());
        assert!(split_frontmatter("---\nnever closed\n").is_err());
    }

    #[test]
    fn test_load_projects_sorted_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        write_project(dir.path(), "older", "2023-01-01");
        write_project(dir.path(), "newer", "2025-01-01");

        let projects = load_projects(dir.path()).unwrap();
        let slugs: Vec<&str> = projects.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["newer", "older"]);
    }

    #[test]
    fn test_missing_directory_is_empty_set() {
        let dir = tempfile::tempdir().unwrap();
        let projects = load_projects(&dir.path().join("no-such-dir")).unwrap();
        assert!(projects.is_empty());
    }

    #[test]
    fn test_duplicate_slug_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_project(dir.path(), "same", "2023-01-01");
        // Different file name, same slug in frontmatter
        let contents = fs::read_to_string(dir.path().join("same.mdx")).unwrap();
        fs::write(dir.path().join("other.mdx"), contents).unwrap();

        let err = load_projects(dir.path()).unwrap_err();
        assert!(matches!(err, FolioError::DuplicateSlug { slug, .. } if slug == "same"));
    }

    #[test]
    fn test_non_mdx_files_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        write_project(dir.path(), "real", "2024-01-01");
        fs::write(dir.path().join("notes.txt"), "not content").unwrap();
        fs::write(dir.path().join(".DS_Store"), "junk").unwrap();

        assert_eq!(load_projects(dir.path()).unwrap().len(), 1);
    }

    #[test]
    fn test_project_by_slug_returns_body() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("raft-weekend.mdx"), PROJECT_MDX).unwrap();

        let doc = project_by_slug(dir.path(), "raft-weekend").unwrap().unwrap();
        assert_eq!(doc.frontmatter.slug, "raft-weekend");
        assert!(doc.frontmatter.featured);
        assert!(doc.body.starts_with("\n## What it is"));
    }

    #[test]
    fn test_by_slug_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(project_by_slug(dir.path(), "ghost").unwrap().is_none());
    }

    #[test]
    fn test_content_slugs_lists_file_stems() {
        let dir = tempfile::tempdir().unwrap();
        write_project(dir.path(), "alpha", "2024-01-01");
        write_project(dir.path(), "beta", "2024-01-01");
        assert_eq!(content_slugs(dir.path()).unwrap(), vec!["alpha", "beta"]);
    }

    #[test]
    fn test_invalid_frontmatter_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.mdx"), "---\ntitle: only\n---\nbody\n").unwrap();

        let err = load_projects(dir.path()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("broken.mdx"), "error must name the file: {message}");
    }
}
