//! Portfolio content: the static data every section renders.
//!
//! Ships with placeholder content. A TOML file with the same shape replaces
//! it wholesale:
//!
//! ```toml
//! [profile]
//! name = "Sam Rivera"
//! taglines = ["Systems Programmer", "Rustacean"]
//! bio = "I build fast, careful software."
//!
//! [[stats]]
//! value = 99.9
//! suffix = "%"
//! label = "Uptime Achieved"
//! ```

use super::error::ContentError;
use serde::Deserialize;
use std::path::Path;

/// Everything shown on the page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Portfolio {
    /// Who the page is about.
    pub profile: Profile,
    /// Animated statistics in the about section.
    #[serde(default)]
    pub stats: Vec<Stat>,
    /// Hobbies listed under the bio.
    #[serde(default)]
    pub hobbies: Vec<String>,
    /// Skill categories.
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    /// Headline technologies shown above the categories.
    #[serde(default)]
    pub tech_stack: Vec<String>,
    /// Education timeline, newest first.
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    /// Showcased projects.
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Contact channels.
    #[serde(default)]
    pub contact: Vec<Channel>,
    /// Social links in the footer.
    #[serde(default)]
    pub links: Vec<Channel>,
}

/// Identity and hero copy.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    /// Display name, typed after the greeting.
    pub name: String,
    /// Text typed before the name.
    #[serde(default = "default_greeting")]
    pub greeting: String,
    /// Phrases cycled under the headline. Must not be empty.
    pub taglines: Vec<String>,
    /// Short introduction.
    #[serde(default)]
    pub bio: String,
}

fn default_greeting() -> String {
    "Hi, I'm ".to_string()
}

/// One animated statistic.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Stat {
    /// Value the counter lands on.
    pub value: f64,
    /// Suffix shown after the number.
    #[serde(default)]
    pub suffix: String,
    /// Caption under the number.
    pub label: String,
}

/// A titled group of skills.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkillCategory {
    /// Category heading.
    pub title: String,
    /// Skills in the category.
    pub skills: Vec<String>,
}

/// One stop on the education timeline.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EducationEntry {
    /// Time span, e.g. "2021 - 2025".
    pub period: String,
    /// Degree or role.
    pub title: String,
    /// School or organisation.
    pub institution: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
}

/// A showcased project.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    /// Project name.
    pub title: String,
    /// One-paragraph summary.
    pub description: String,
    /// Technologies used.
    #[serde(default)]
    pub tech: Vec<String>,
    /// Where to find it.
    #[serde(default)]
    pub link: Option<String>,
}

/// A way to reach the author.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Channel {
    /// Channel name, e.g. "Email".
    pub label: String,
    /// Address or handle shown to the reader.
    pub value: String,
}

impl Portfolio {
    /// Parse content from TOML text.
    ///
    /// # Errors
    ///
    /// [`ContentError::Parse`] for malformed TOML, [`ContentError::NoTaglines`]
    /// when the profile lists no taglines.
    pub fn from_toml(source: &str, path: &Path) -> Result<Self, ContentError> {
        let portfolio: Portfolio = toml::from_str(source).map_err(|e| ContentError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    /// Load content from a TOML file.
    ///
    /// # Errors
    ///
    /// [`ContentError::Read`] if the file cannot be read, otherwise as
    /// [`Portfolio::from_toml`].
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let source = std::fs::read_to_string(path).map_err(|e| ContentError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&source, path)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.profile.taglines.is_empty() {
            return Err(ContentError::NoTaglines);
        }
        Ok(())
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for Portfolio {
    fn default() -> Self {
        Self {
            profile: Profile {
                name: "Alex Morgan".to_string(),
                greeting: default_greeting(),
                taglines: strings(&[
                    "Software Engineer & Web Designer",
                    "Full-Stack Developer",
                    "UI/UX Enthusiast",
                    "Problem Solver",
                ]),
                bio: "I design and develop interactive experiences that are both \
                      beautiful and functional, turning ideas into software that \
                      delights users and drives impact."
                    .to_string(),
            },
            stats: vec![
                Stat {
                    value: 3.0,
                    suffix: "+".to_string(),
                    label: "Years Experience".to_string(),
                },
                Stat {
                    value: 25.0,
                    suffix: "+".to_string(),
                    label: "Projects Completed".to_string(),
                },
                Stat {
                    value: 99.9,
                    suffix: "%".to_string(),
                    label: "Uptime Achieved".to_string(),
                },
            ],
            hobbies: strings(&["Travelling", "Coffee", "Gaming", "Football"]),
            tech_stack: strings(&["React", "Node.js", "Next.js", "Supabase", "Tailwind", "TypeScript"]),
            skills: vec![
                SkillCategory {
                    title: "Frontend Development".to_string(),
                    skills: strings(&["React", "TypeScript", "Next.js", "Tailwind CSS", "HTML5", "CSS3"]),
                },
                SkillCategory {
                    title: "Design & UI/UX".to_string(),
                    skills: strings(&["Figma", "Prototyping", "User Research", "Responsive Design"]),
                },
                SkillCategory {
                    title: "Backend Development".to_string(),
                    skills: strings(&["Node.js", "PostgreSQL", "MongoDB", "Express.js", "RESTful APIs"]),
                },
                SkillCategory {
                    title: "Coding Languages".to_string(),
                    skills: strings(&["Java", "C", "C++"]),
                },
                SkillCategory {
                    title: "Tools".to_string(),
                    skills: strings(&["VS Code", "Git", "Notion", "Testing"]),
                },
            ],
            education: vec![
                EducationEntry {
                    period: "2025 - Present".to_string(),
                    title: "Packaged App Development".to_string(),
                    institution: "Consulting Firm".to_string(),
                    description: "Designing and delivering packaged applications with \
                                  cross-functional teams."
                        .to_string(),
                },
                EducationEntry {
                    period: "2021 - 2025".to_string(),
                    title: "B.Tech in Information Technology".to_string(),
                    institution: "Institute of Technology".to_string(),
                    description: "Specialised in software engineering.".to_string(),
                },
                EducationEntry {
                    period: "2020 - 2021".to_string(),
                    title: "Senior Secondary Education".to_string(),
                    institution: "Techno School".to_string(),
                    description: "Science, mathematics and computing.".to_string(),
                },
            ],
            projects: vec![
                Project {
                    title: "Trackify - Expense Tracker".to_string(),
                    description: "Budgets, spending history and interactive charts \
                                  for personal finances."
                        .to_string(),
                    tech: strings(&["React", "TypeScript", "Chart.js"]),
                    link: None,
                },
                Project {
                    title: "NOTEsHIVE - Note Taking".to_string(),
                    description: "Rich text notes with tagging and real-time sync.".to_string(),
                    tech: strings(&["Next.js", "Supabase"]),
                    link: None,
                },
                Project {
                    title: "WeatherNow - Weather App".to_string(),
                    description: "Live conditions, five-day forecasts and geolocation."
                        .to_string(),
                    tech: strings(&["React", "OpenWeather API"]),
                    link: None,
                },
            ],
            contact: vec![
                Channel {
                    label: "Email".to_string(),
                    value: "hello@example.com".to_string(),
                },
                Channel {
                    label: "Phone".to_string(),
                    value: "+1 555 0100".to_string(),
                },
                Channel {
                    label: "Location".to_string(),
                    value: "Remote".to_string(),
                },
            ],
            links: vec![
                Channel {
                    label: "GitHub".to_string(),
                    value: "github.com/example".to_string(),
                },
                Channel {
                    label: "LinkedIn".to_string(),
                    value: "linkedin.com/in/example".to_string(),
                },
            ],
        }
    }
}
