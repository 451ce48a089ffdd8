//! Compiled-in portfolio content.
//!
//! Everything the desktop sections and the virtual file system show comes
//! from the constants in this module. The catalog is immutable for the
//! lifetime of the process.

use serde::Serialize;

/// Identity and contact details
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonalInfo {
    pub name: &'static str,
    pub role: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
    pub bio: &'static str,
}

/// A single position in the work history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Job {
    pub company: &'static str,
    pub location: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub details: &'static [&'static str],
}

/// A showcased project.
///
/// Serializes to the camelCase JSON exposed as `projects/*.json` in the
/// virtual file system; absent optionals are omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub tech_stack: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<&'static [&'static str]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub architecture: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub institution: &'static str,
    pub location: &'static str,
    pub degree: &'static str,
    pub date: &'static str,
    pub gpa: &'static str,
    pub awards: &'static str,
    pub coursework: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub category: &'static str,
    pub items: &'static [&'static str],
}

/// Borrowed view over the whole catalog.
///
/// The file-system builder and the shell take a catalog rather than reaching
/// for the constants directly, so tests can feed a smaller one.
#[derive(Debug, Clone, Copy)]
pub struct ContentCatalog {
    pub personal: &'static PersonalInfo,
    pub experience: &'static [Job],
    pub projects: &'static [Project],
    pub education: &'static Education,
    pub skills: &'static [SkillCategory],
    pub certifications: &'static [&'static str],
}

impl ContentCatalog {
    /// The built-in portfolio content
    pub const fn builtin() -> Self {
        Self {
            personal: &PERSONAL_INFO,
            experience: EXPERIENCE,
            projects: PROJECTS,
            education: &EDUCATION,
            skills: SKILLS,
            certifications: CERTIFICATIONS,
        }
    }
}

impl Default for ContentCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

pub const PERSONAL_INFO: PersonalInfo = PersonalInfo {
    name: "Syed Nisar Hussain",
    role: "Backend Developer II & ML Engineer",
    location: "Karachi, PK",
    email: "nisarsyed510@gmail.com",
    phone: "(92) 333 4058268",
    linkedin: "linkedin.com/in/snh510/",
    github: "github.com/NisarSyed",
    bio: "Architecting reliable event-driven systems and optimizing backend pipelines. \
          Passionate about bridging the gap between scalable software engineering and \
          machine learning intelligence.",
};

pub const EXPERIENCE: &[Job] = &[
    Job {
        company: "Future Technologies",
        location: "Karachi, PK",
        role: "Backend Developer II",
        period: "July 2024 - Present",
        details: &[
            "Architecting a Kafka-based event-driven system with pub/sub and the outbox pattern, \
             ensuring reliable microservice synchronization.",
            "Optimized end-to-end testing pipelines with pytest, reducing execution time by 70% \
             (30s → ~7s) and enabling faster iteration cycles.",
        ],
    },
    Job {
        company: "Sych",
        location: "Karachi, PK",
        role: "Software Development Engineer",
        period: "Feb 2025 - June 2025",
        details: &[
            "Built and optimized scalable pages in a Next.js AI app using TypeScript, following \
             clean architecture principles.",
            "Extended FastAPI backend with new features and endpoints to support evolving \
             frontend requirements.",
            "Maintained 95%+ test coverage using Jest and Playwright for robust unit and \
             end-to-end testing.",
        ],
    },
    Job {
        company: "Systems Limited",
        location: "Karachi, PK",
        role: "ML Intern",
        period: "June 2024 - Sept 2024",
        details: &[
            "Developed a Python script to automate data extraction and tokenization from large \
             log file datasets.",
            "Trained and containerized a K-Means clustering model (using Podman) to classify \
             log data.",
            "Leveraged the ELK stack and Elastic ML to analyze live service data, enhancing \
             real-time monitoring.",
        ],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        name: "HireHub",
        description: "Recruitment platform featuring an LLM-based resume ranking and analysis \
                      system using LlamaIndex and OpenAI.",
        tech_stack: &["Next.js", "FastAPI", "Docker", "Google Cloud Run", "CI/CD"],
        link: None,
        features: Some(&[
            "LLM Resume Parsing & Ranking",
            "Automated CI/CD Pipeline via GCR",
            "Clean Architecture Implementation",
            "Real-time Candidate Status Tracking",
        ]),
        architecture: Some(
            "Microservices (FastAPI) <-> Next.js Frontend. Data persistence via PostgreSQL. \
             AI processing via LlamaIndex + OpenAI API.",
        ),
    },
    Project {
        name: "Financial Fraud Detection",
        description: "Data app identifying financial fraud using graph features extracted from \
                      a Neo4j database and Random Forest classification.",
        tech_stack: &[
            "Python",
            "Neo4j",
            "Streamlit",
            "GraphDataScience",
            "Scikit-learn",
        ],
        link: None,
        features: Some(&[
            "Graph-based Feature Extraction",
            "Random Forest Classification Model",
            "Interactive Streamlit Dashboard",
            "Cypher Query Optimization",
        ]),
        architecture: Some(
            "Neo4j Graph DB -> GraphDataScience Lib -> Random Forest Model -> Streamlit UI \
             Visualization.",
        ),
    },
    Project {
        name: "Welfare Society CMS",
        description: "Responsive website and admin panel for a social welfare society with \
                      Cloudinary image handling.",
        tech_stack: &["MERN Stack", "Cloudinary", "Vercel", "Render"],
        link: None,
        features: Some(&[
            "Custom Content Management System",
            "Role-based Admin Panel",
            "Cloudinary Media Optimization",
            "Secure Donation Gateway Integration",
        ]),
        architecture: Some(
            "MongoDB Atlas <-> Express/Node API <-> React Frontend. Static Assets via \
             Cloudinary CDN.",
        ),
    },
];

pub const EDUCATION: Education = Education {
    institution: "Habib University",
    location: "Karachi",
    degree: "B.S. in Computer Science",
    date: "May 2025",
    gpa: "3.60/4.00",
    awards: "YOHSIN Scholar (100% Merit Scholarship), Dean's List - Fall 2023",
    coursework: "OOP, Data Structures, Algorithms, Database Systems, OS, Data Science, WebDev",
};

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        category: "Languages",
        items: &["Python", "JavaScript", "TypeScript", "SQL", "HTML/CSS"],
    },
    SkillCategory {
        category: "Frameworks & Backend",
        items: &[
            "FastAPI",
            "Express.js",
            "Next.js",
            "SQLAlchemy",
            "Apache Kafka",
            "Pub/Sub",
        ],
    },
    SkillCategory {
        category: "ML & Data",
        items: &[
            "PyTorch",
            "TensorFlow",
            "Hugging Face",
            "LlamaIndex",
            "PostgreSQL",
            "MongoDB",
        ],
    },
    SkillCategory {
        category: "DevOps & Tools",
        items: &["Docker", "Git", "Google Cloud", "pytest", "Jest", "Playwright"],
    },
];

pub const CERTIFICATIONS: &[&str] = &[
    "Machine Learning Specialization – Stanford Online, Coursera",
    "Open-Source Models with Hugging Face – DeepLearning.AI",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_counts() {
        let catalog = ContentCatalog::builtin();
        assert_eq!(catalog.experience.len(), 3);
        assert_eq!(catalog.projects.len(), 3);
        assert_eq!(catalog.skills.len(), 4);
        assert_eq!(catalog.certifications.len(), 2);
    }

    #[test]
    fn test_multiline_literals_have_single_spaces() {
        // Line continuations must not leave double spaces behind
        assert!(!PERSONAL_INFO.bio.contains("  "));
        for job in EXPERIENCE {
            for detail in job.details {
                assert!(!detail.contains("  "), "{detail}");
            }
        }
    }

    #[test]
    fn test_project_serializes_camel_case() {
        let json = serde_json::to_value(PROJECTS[0]).unwrap();
        assert_eq!(json["name"], "HireHub");
        assert!(json.get("techStack").is_some());
        assert!(json.get("link").is_none());
    }
}
