//! Fixed option lists offered by the listing and registration forms.

pub const CATEGORIES: &[&str] = &[
    "Information Technology",
    "Marketing & Sales",
    "Data Science",
    "Media & Communications",
    "Finance & Banking",
    "Human Resources",
    "Operations",
    "Design & Creative",
    "Research & Development",
    "Customer Service",
];

pub const SKILL_SUGGESTIONS: &[&str] = &[
    "JavaScript",
    "Python",
    "React",
    "HTML/CSS",
    "Java",
    "SQL",
    "Content Writing",
    "Social Media Marketing",
    "SEO",
    "Digital Marketing",
    "Excel",
    "Data Analysis",
    "Statistics",
    "Power BI",
    "Tableau",
    "Photoshop",
    "Canva",
    "UI/UX Design",
    "Video Editing",
    "Communication",
    "Teamwork",
    "Leadership",
    "Problem Solving",
    "Research",
    "Project Management",
    "Time Management",
];

pub fn categories() -> Vec<String> {
    CATEGORIES.iter().map(|c| c.to_string()).collect()
}

pub fn skill_suggestions() -> Vec<String> {
    SKILL_SUGGESTIONS.iter().map(|s| s.to_string()).collect()
}
