//! Section dispatch table: maps a resume section to its fixed enhancement text.
//!
//! The set of sections is closed. Anything outside it takes the generic arm in
//! `enhance_text`, so adding a section means adding a variant here and nowhere else.

/// Suffix applied to sections outside the known set.
pub const GENERIC_SUFFIX: &str = " (Improved by AI: rephrased professionally for clarity and impact.)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Also matches "summary".
    Objective,
    Education,
    Extracurriculars,
    Trainings,
    Projects,
    Portfolio,
    Accomplishments,
    Skills,
}

impl Section {
    /// Case-insensitive lookup. Returns `None` for unknown sections.
    /// Whitespace is significant: " skills" is not a known section.
    pub fn parse(name: &str) -> Option<Section> {
        match name.to_lowercase().as_str() {
            "objective" | "summary" => Some(Section::Objective),
            "education" => Some(Section::Education),
            "extracurriculars" => Some(Section::Extracurriculars),
            "trainings" => Some(Section::Trainings),
            "projects" => Some(Section::Projects),
            "portfolio" => Some(Section::Portfolio),
            "accomplishments" => Some(Section::Accomplishments),
            "skills" => Some(Section::Skills),
            _ => None,
        }
    }

    /// Text appended verbatim after the trimmed content.
    pub fn suffix(self) -> &'static str {
        match self {
            Section::Objective => {
                " Highly motivated developer skilled in delivering robust web solutions. \
                 Proficient in modern technologies with a passion for clean, scalable code \
                 and continuous learning."
            }
            Section::Education => {
                " Demonstrated academic excellence in computer science. \
                 Consider including: degree, graduation year, GPA, and institution name \
                 for comprehensive academic representation."
            }
            Section::Extracurriculars => {
                " Played a pivotal role in organizing campus tech events. \
                 Actively contributed to coding communities and peer learning initiatives."
            }
            Section::Trainings => {
                " Completed multiple hands-on certifications in full stack development. \
                 Focused on practical application, real-world project development, \
                 and agile methodologies."
            }
            Section::Projects => {
                " Engineered scalable full-stack solutions with high performance. \
                 Implemented modern UI/UX principles and optimized backend services \
                 for real-time usage."
            }
            Section::Portfolio => {
                " Maintains an active GitHub with clean, well-documented code. \
                 Demonstrates professional project structure and collaboration readiness."
            }
            Section::Accomplishments => {
                " Recognized for leadership in hackathons and consistent open-source \
                 contributions. Achieved measurable impact in cross-functional tech teams."
            }
            // Skills extends the list instead of adding a sentence.
            Section::Skills => {
                ", system design, CI/CD pipelines, RESTful APIs, GraphQL, Agile/Scrum, \
                 Unit Testing, Web Performance Optimization"
            }
        }
    }
}

/// Applies the static template for `section` to `content`.
/// Never fails; empty content still gets the suffix.
pub fn enhance_text(section: &str, content: &str) -> String {
    let content = content.trim();
    let suffix = Section::parse(section)
        .map(Section::suffix)
        .unwrap_or(GENERIC_SUFFIX);
    format!("{content}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED: [(&str, &str); 9] = [
        (
            "objective",
            "Built things. Highly motivated developer skilled in delivering robust web solutions. Proficient in modern technologies with a passion for clean, scalable code and continuous learning.",
        ),
        (
            "summary",
            "Built things. Highly motivated developer skilled in delivering robust web solutions. Proficient in modern technologies with a passion for clean, scalable code and continuous learning.",
        ),
        (
            "education",
            "Built things. Demonstrated academic excellence in computer science. Consider including: degree, graduation year, GPA, and institution name for comprehensive academic representation.",
        ),
        (
            "extracurriculars",
            "Built things. Played a pivotal role in organizing campus tech events. Actively contributed to coding communities and peer learning initiatives.",
        ),
        (
            "trainings",
            "Built things. Completed multiple hands-on certifications in full stack development. Focused on practical application, real-world project development, and agile methodologies.",
        ),
        (
            "projects",
            "Built things. Engineered scalable full-stack solutions with high performance. Implemented modern UI/UX principles and optimized backend services for real-time usage.",
        ),
        (
            "portfolio",
            "Built things. Maintains an active GitHub with clean, well-documented code. Demonstrates professional project structure and collaboration readiness.",
        ),
        (
            "accomplishments",
            "Built things. Recognized for leadership in hackathons and consistent open-source contributions. Achieved measurable impact in cross-functional tech teams.",
        ),
        (
            "skills",
            "Built things., system design, CI/CD pipelines, RESTful APIs, GraphQL, Agile/Scrum, Unit Testing, Web Performance Optimization",
        ),
    ];

    #[test]
    fn test_every_known_section_appends_its_suffix() {
        for (section, expected) in EXPECTED {
            assert_eq!(
                enhance_text(section, "  Built things.  "),
                expected,
                "wrong text for section {section:?}"
            );
        }
    }

    #[test]
    fn test_padded_section_name_is_not_recognized() {
        for section in [" skills", "Skills ", "\teducation"] {
            assert_eq!(Section::parse(section), None);
            assert_eq!(
                enhance_text(section, "x"),
                "x (Improved by AI: rephrased professionally for clarity and impact.)"
            );
        }
    }

    #[test]
    fn test_summary_is_alias_for_objective() {
        assert_eq!(Section::parse("summary"), Some(Section::Objective));
        assert_eq!(
            enhance_text("summary", "Dev"),
            enhance_text("objective", "Dev")
        );
    }

    #[test]
    fn test_unknown_section_gets_generic_suffix() {
        assert_eq!(Section::parse("hobbies"), None);
        assert_eq!(
            enhance_text("hobbies", "Chess"),
            "Chess (Improved by AI: rephrased professionally for clarity and impact.)"
        );
    }

    #[test]
    fn test_section_lookup_is_case_insensitive() {
        assert_eq!(enhance_text("Skills", "Rust"), enhance_text("skills", "Rust"));
        assert_eq!(Section::parse("EDUCATION"), Some(Section::Education));
    }

    #[test]
    fn test_skills_suffix_text() {
        assert_eq!(
            enhance_text("skills", "Rust"),
            "Rust, system design, CI/CD pipelines, RESTful APIs, GraphQL, Agile/Scrum, \
             Unit Testing, Web Performance Optimization"
        );
    }

    #[test]
    fn test_objective_suffix_text() {
        assert_eq!(
            enhance_text("objective", "I code."),
            "I code. Highly motivated developer skilled in delivering robust web solutions. \
             Proficient in modern technologies with a passion for clean, scalable code and \
             continuous learning."
        );
    }

    #[test]
    fn test_empty_content_is_accepted() {
        assert_eq!(enhance_text("portfolio", "   "), Section::Portfolio.suffix());
    }
}
