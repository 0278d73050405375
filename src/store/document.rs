//! In-memory portfolio document and its accessors.

use serde_json::{Map, Value};

/// Fixed top-level sections of the portfolio document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Personal,
    Education,
    Skills,
    Projects,
    BasicProjects,
    Blogs,
    BlogPosts,
    Social,
}

impl Section {
    /// Sections that must be present for the process to serve traffic.
    /// `basicProjects` appears in only some documents and stays optional.
    pub const REQUIRED: [Section; 7] = [
        Section::Personal,
        Section::Education,
        Section::Skills,
        Section::Projects,
        Section::Blogs,
        Section::BlogPosts,
        Section::Social,
    ];

    /// Top-level document key for this section.
    pub fn key(self) -> &'static str {
        match self {
            Section::Personal => "personal",
            Section::Education => "education",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::BasicProjects => "basicProjects",
            Section::Blogs => "blogs",
            Section::BlogPosts => "blogPosts",
            Section::Social => "social",
        }
    }
}

/// Read-only portfolio content, loaded once at startup.
#[derive(Debug, Clone)]
pub struct PortfolioStore {
    sections: Map<String, Value>,
}

impl PortfolioStore {
    pub(crate) fn new(sections: Map<String, Value>) -> Self {
        Self { sections }
    }

    /// Value of a fixed section, verbatim.
    pub fn section(&self, section: Section) -> Option<&Value> {
        self.sections.get(section.key())
    }

    /// Blog post by numeric id.
    ///
    /// The `blogPosts` index maps stringified integers to post records, so
    /// the lookup is an exact string match on the rendered id.
    pub fn blog_post(&self, id: i64) -> Option<&Value> {
        self.section(Section::BlogPosts)?
            .as_object()?
            .get(id.to_string().as_str())
    }
}
