//! Read-only virtual file system built from the content catalog.
//!
//! The tree is a tagged union of directories and files. Children keep the
//! order in which the builder inserted them, which is also the order `ls`
//! prints and `grep` searches.

use std::fmt;

use thiserror::Error;

use crate::content::ContentCatalog;

/// Display name of the root directory
pub const ROOT: &str = "~";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VfsNode {
    Directory { children: Vec<(String, VfsNode)> },
    File { content: String },
}

/// Failures of path resolution against the tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VfsError {
    #[error("{0}: No such file or directory")]
    NotFound(String),

    #[error("{0}: Not a directory")]
    NotADirectory(String),

    #[error("{0}: Is a directory")]
    IsADirectory(String),
}

/// One `ls` entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirEntry<'a> {
    pub name: &'a str,
    pub is_dir: bool,
}

impl fmt::Display for DirEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dir {
            write!(f, "{}/", self.name)
        } else {
            f.write_str(self.name)
        }
    }
}

/// One line matched by [`VirtualFs::grep`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrepHit {
    /// Path relative to the root, `/`-separated
    pub path: String,
    /// 1-based line number
    pub line_number: usize,
    /// Matched line with surrounding whitespace trimmed
    pub text: String,
}

impl fmt::Display for GrepHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.path, self.line_number, self.text)
    }
}

impl VfsNode {
    fn dir(children: Vec<(String, VfsNode)>) -> Self {
        Self::Directory { children }
    }

    fn file(content: impl Into<String>) -> Self {
        Self::File {
            content: content.into(),
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Directory { .. })
    }

    /// Direct child by exact name. Files have no children.
    pub fn child(&self, name: &str) -> Option<&VfsNode> {
        match self {
            Self::Directory { children } => children
                .iter()
                .find(|(child, _)| child == name)
                .map(|(_, node)| node),
            Self::File { .. } => None,
        }
    }

    pub fn content(&self) -> Option<&str> {
        match self {
            Self::File { content } => Some(content),
            Self::Directory { .. } => None,
        }
    }
}

/// File-name form used by the tree: lowercase, whitespace runs become `_`
pub fn slug(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

/// The whole tree plus the operations the shell needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualFs {
    root: VfsNode,
}

impl VirtualFs {
    /// Build the tree from the catalog. Pure: the same catalog always yields
    /// the same tree.
    pub fn build(catalog: &ContentCatalog) -> Self {
        let personal = catalog.personal;

        let contact = format!(
            "Email: {}\nGitHub: {}\nLinkedIn: {}",
            personal.email, personal.github, personal.linkedin
        );

        let projects = catalog
            .projects
            .iter()
            .map(|project| {
                let json = serde_json::to_string_pretty(project).unwrap_or_default();
                (format!("{}.json", slug(project.name)), VfsNode::file(json))
            })
            .collect();

        let experience = catalog
            .experience
            .iter()
            .map(|job| {
                let logs = job
                    .details
                    .iter()
                    .map(|d| format!("- {d}"))
                    .collect::<Vec<_>>()
                    .join("\n");
                let content = format!(
                    "ROLE: {}\nPERIOD: {}\n\nLOGS:\n{}",
                    job.role, job.period, logs
                );
                (format!("{}.log", slug(job.company)), VfsNode::file(content))
            })
            .collect();

        let skills = catalog
            .skills
            .iter()
            .map(|cat| format!("{}:\n  - {}", cat.category, cat.items.join("\n  - ")))
            .collect::<Vec<_>>()
            .join("\n\n");

        let root = VfsNode::dir(vec![
            ("about.txt".into(), VfsNode::file(personal.bio)),
            ("contact.md".into(), VfsNode::file(contact)),
            ("projects".into(), VfsNode::dir(projects)),
            ("experience".into(), VfsNode::dir(experience)),
            ("skills.yaml".into(), VfsNode::file(skills)),
        ]);

        Self { root }
    }

    pub fn root(&self) -> &VfsNode {
        &self.root
    }

    /// Resolve a path of directory names below the root
    pub fn resolve<S: AsRef<str>>(&self, path: &[S]) -> Option<&VfsNode> {
        path.iter()
            .try_fold(&self.root, |node, name| node.child(name.as_ref()))
    }

    /// Children of the directory at `cwd`
    pub fn list<S: AsRef<str>>(&self, cwd: &[S]) -> Result<Vec<DirEntry<'_>>, VfsError> {
        match self.resolve(cwd) {
            Some(VfsNode::Directory { children }) => Ok(children
                .iter()
                .map(|(name, node)| DirEntry {
                    name,
                    is_dir: node.is_dir(),
                })
                .collect()),
            Some(VfsNode::File { .. }) => Err(VfsError::NotADirectory(display_path(cwd))),
            None => Err(VfsError::NotFound(display_path(cwd))),
        }
    }

    /// Look up `name` inside the directory at `cwd`. A single trailing `/`
    /// on the name is accepted.
    pub fn lookup<S: AsRef<str>>(&self, cwd: &[S], name: &str) -> Result<&VfsNode, VfsError> {
        let key = name.strip_suffix('/').unwrap_or(name);
        self.resolve(cwd)
            .and_then(|dir| dir.child(key))
            .ok_or_else(|| VfsError::NotFound(name.to_string()))
    }

    /// Content of the file `name` in `cwd`
    pub fn read<S: AsRef<str>>(&self, cwd: &[S], name: &str) -> Result<&str, VfsError> {
        match self.lookup(cwd, name)? {
            VfsNode::File { content } => Ok(content),
            VfsNode::Directory { .. } => Err(VfsError::IsADirectory(name.to_string())),
        }
    }

    /// Name of the child directory `name` in `cwd`, validated
    pub fn child_dir<S: AsRef<str>>(&self, cwd: &[S], name: &str) -> Result<String, VfsError> {
        let key = name.strip_suffix('/').unwrap_or(name);
        match self.lookup(cwd, name) {
            Ok(VfsNode::Directory { .. }) => Ok(key.to_string()),
            Ok(VfsNode::File { .. }) => Err(VfsError::NotADirectory(name.to_string())),
            Err(e) => Err(e),
        }
    }

    /// Case-insensitive substring search over every line of every file, in
    /// tree order.
    pub fn grep(&self, term: &str) -> Vec<GrepHit> {
        let needle = term.to_lowercase();
        let mut hits = Vec::new();
        search(&self.root, "", &needle, &mut hits);
        hits
    }

    /// Number of entries in a top-level directory, zero when absent
    pub fn count(&self, dir: &str) -> usize {
        match self.root.child(dir) {
            Some(VfsNode::Directory { children }) => children.len(),
            _ => 0,
        }
    }
}

fn search(node: &VfsNode, prefix: &str, needle: &str, hits: &mut Vec<GrepHit>) {
    let VfsNode::Directory { children } = node else {
        return;
    };

    for (name, child) in children {
        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}/{name}")
        };

        match child {
            VfsNode::File { content } => {
                for (idx, line) in content.split('\n').enumerate() {
                    if line.to_lowercase().contains(needle) {
                        hits.push(GrepHit {
                            path: path.clone(),
                            line_number: idx + 1,
                            text: line.trim().to_string(),
                        });
                    }
                }
            }
            VfsNode::Directory { .. } => search(child, &path, needle, hits),
        }
    }
}

fn display_path<S: AsRef<str>>(path: &[S]) -> String {
    std::iter::once(ROOT)
        .chain(path.iter().map(AsRef::as_ref))
        .collect::<Vec<_>>()
        .join("/")
}
