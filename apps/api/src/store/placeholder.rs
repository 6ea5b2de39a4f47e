//! Built-in data served when a store read fails, so the portal stays populated.
//! Ids are fixed so the UI can link between placeholder records.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use crate::models::activity::{
    Application, ApplicationStatus, Notification, NotificationKind, SavedListing,
};
use crate::models::listing::{DurationBucket, Listing};
use crate::models::profile::{Profile, WorkMode};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn timestamp(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn listing_id(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

struct Seed {
    title: &'static str,
    organization: &'static str,
    location: &'static str,
    region: &'static str,
    duration: DurationBucket,
    compensation: &'static str,
    skills: &'static [&'static str],
    listing_type: &'static str,
    category: &'static str,
    remote: bool,
    description: &'static str,
    requirements: &'static [&'static str],
    benefits: &'static [&'static str],
    deadline: (i32, u32, u32),
    start: (i32, u32, u32),
    first_timers: bool,
    languages: &'static [&'static str],
}

const SEEDS: &[Seed] = &[
    Seed {
        title: "Software Development Intern",
        organization: "TechCorp Solutions",
        location: "Bangalore, Karnataka",
        region: "Karnataka",
        duration: DurationBucket::ThreeMonths,
        compensation: "₹15,000/month",
        skills: &["JavaScript", "React", "Python", "Git"],
        listing_type: "Technical",
        category: "Information Technology",
        remote: true,
        description: "Join our development team and work on real-world projects using modern technologies. Perfect for beginners with basic programming knowledge.",
        requirements: &["Basic programming knowledge", "Willingness to learn", "Good communication skills"],
        benefits: &["Mentorship program", "Flexible working hours", "Certificate of completion"],
        deadline: (2024, 3, 15),
        start: (2024, 4, 1),
        first_timers: true,
        languages: &["English", "Hindi"],
    },
    Seed {
        title: "Digital Marketing Assistant",
        organization: "Creative Agency Pvt Ltd",
        location: "Mumbai, Maharashtra",
        region: "Maharashtra",
        duration: DurationBucket::FourMonths,
        compensation: "₹12,000/month",
        skills: &["Social Media Marketing", "Content Writing", "Google Analytics", "Canva"],
        listing_type: "Marketing",
        category: "Marketing & Sales",
        remote: false,
        description: "Learn digital marketing strategies and help manage social media campaigns for clients.",
        requirements: &["Creative thinking", "Basic computer skills", "Social media familiarity"],
        benefits: &["Industry exposure", "Portfolio building", "Networking opportunities"],
        deadline: (2024, 3, 20),
        start: (2024, 4, 5),
        first_timers: true,
        languages: &["English", "Hindi", "Marathi"],
    },
    Seed {
        title: "Data Analysis Trainee",
        organization: "DataViz Corp",
        location: "Delhi NCR",
        region: "Delhi",
        duration: DurationBucket::SixMonths,
        compensation: "₹18,000/month",
        skills: &["Excel", "Statistics", "SQL", "Power BI"],
        listing_type: "Analytics",
        category: "Data Science",
        remote: true,
        description: "Work with data teams to analyze business metrics and create insightful reports.",
        requirements: &["Analytical mindset", "Excel proficiency", "Attention to detail"],
        benefits: &["Data certification", "Remote work opportunity", "Career guidance"],
        deadline: (2024, 3, 25),
        start: (2024, 4, 10),
        first_timers: true,
        languages: &["English", "Hindi"],
    },
    Seed {
        title: "Content Writing Intern",
        organization: "MediaHub Communications",
        location: "Chennai, Tamil Nadu",
        region: "Tamil Nadu",
        duration: DurationBucket::ThreeMonths,
        compensation: "₹10,000/month",
        skills: &["Content Writing", "SEO", "WordPress", "Research"],
        listing_type: "Content",
        category: "Media & Communications",
        remote: true,
        description: "Create engaging content for websites, blogs, and social media.",
        requirements: &["Excellent writing skills", "Research abilities", "Time management"],
        benefits: &["Portfolio development", "SEO training", "Writing workshops"],
        deadline: (2024, 3, 18),
        start: (2024, 4, 2),
        first_timers: true,
        languages: &["English", "Tamil"],
    },
    Seed {
        title: "Finance & Accounting Assistant",
        organization: "FinanceFirst Services",
        location: "Pune, Maharashtra",
        region: "Maharashtra",
        duration: DurationBucket::FourMonths,
        compensation: "₹14,000/month",
        skills: &["Accounting", "Excel", "Tally", "Financial Analysis"],
        listing_type: "Finance",
        category: "Finance & Banking",
        remote: false,
        description: "Support financial operations and learn accounting principles.",
        requirements: &["Commerce background preferred", "Numerical aptitude", "Attention to detail"],
        benefits: &["Professional certification", "Industry mentorship", "Job placement support"],
        deadline: (2024, 3, 22),
        start: (2024, 4, 8),
        first_timers: true,
        languages: &["English", "Hindi", "Marathi"],
    },
    Seed {
        title: "Machine Learning Intern",
        organization: "NeuroTech Labs",
        location: "Bengaluru",
        region: "Karnataka",
        duration: DurationBucket::ThreeMonths,
        compensation: "₹15,000/month",
        skills: &["Python", "TensorFlow", "scikit-learn", "Data Preprocessing"],
        listing_type: "AI/ML",
        category: "Artificial Intelligence",
        remote: false,
        description: "Assist in building predictive models and training machine learning pipelines on real-world datasets.",
        requirements: &["Strong Python skills", "Basic ML concepts", "Problem-solving ability"],
        benefits: &["Hands-on ML projects", "Mentorship from experts"],
        deadline: (2024, 4, 15),
        start: (2024, 5, 1),
        first_timers: false,
        languages: &["English"],
    },
    Seed {
        title: "Frontend Development Intern",
        organization: "PixelWave Solutions",
        location: "Hyderabad",
        region: "Telangana",
        duration: DurationBucket::FourMonths,
        compensation: "₹12,000/month",
        skills: &["React.js", "HTML", "CSS", "JavaScript"],
        listing_type: "Development",
        category: "Web Development",
        remote: true,
        description: "Work on user-facing applications, improve UI/UX, and optimize performance for web platforms.",
        requirements: &["Knowledge of React.js", "Understanding of responsive design", "Basic Git/GitHub"],
        benefits: &["Remote work", "Project certificate", "Exposure to real clients"],
        deadline: (2024, 4, 5),
        start: (2024, 4, 20),
        first_timers: true,
        languages: &["English", "Hindi"],
    },
    Seed {
        title: "Cybersecurity Intern",
        organization: "SecureNet Pvt Ltd",
        location: "Pune",
        region: "Maharashtra",
        duration: DurationBucket::SixMonths,
        compensation: "₹20,000/month",
        skills: &["Networking", "Linux", "Penetration Testing", "Ethical Hacking"],
        listing_type: "Security",
        category: "Cybersecurity",
        remote: false,
        description: "Assist in vulnerability assessment, penetration testing, and network security audits.",
        requirements: &["Basic knowledge of OSI model", "Linux fundamentals", "Interest in cybersecurity"],
        benefits: &["Cybersecurity certification", "Job referral", "Industry mentorship"],
        deadline: (2024, 4, 10),
        start: (2024, 4, 25),
        first_timers: false,
        languages: &["English"],
    },
    Seed {
        title: "Cloud Computing Intern",
        organization: "CloudSphere Technologies",
        location: "Chennai",
        region: "Tamil Nadu",
        duration: DurationBucket::FiveMonths,
        compensation: "₹18,500/month",
        skills: &["AWS", "Docker", "Kubernetes", "DevOps Basics"],
        listing_type: "Cloud",
        category: "Cloud Engineering",
        remote: true,
        description: "Support cloud engineers in building and maintaining scalable cloud infrastructure.",
        requirements: &["Basic AWS knowledge", "Linux commands", "Understanding of containers"],
        benefits: &["AWS free credits", "Career mentoring"],
        deadline: (2024, 4, 18),
        start: (2024, 5, 5),
        first_timers: true,
        languages: &["English"],
    },
    Seed {
        title: "Database Management Intern",
        organization: "DataHive Systems",
        location: "Noida",
        region: "Uttar Pradesh",
        duration: DurationBucket::ThreeMonths,
        compensation: "₹12,500/month",
        skills: &["SQL", "MySQL", "PostgreSQL", "Data Modeling"],
        listing_type: "Database",
        category: "DBMS",
        remote: true,
        description: "Assist in designing, maintaining, and optimizing relational databases for enterprise applications.",
        requirements: &["Strong SQL queries", "Normalization knowledge", "Analytical mindset"],
        benefits: &["Certificate", "Database admin exposure", "Remote flexibility"],
        deadline: (2024, 4, 18),
        start: (2024, 5, 2),
        first_timers: true,
        languages: &["English", "Hindi"],
    },
];

/// Active placeholder listings, newest first (ids 1..=10).
pub fn listings() -> Vec<Listing> {
    let newest = timestamp(2024, 2, 1, 9, 0);
    SEEDS
        .iter()
        .enumerate()
        .map(|(i, s)| Listing {
            id: listing_id(i as u128 + 1),
            title: s.title.to_string(),
            organization: s.organization.to_string(),
            location: s.location.to_string(),
            region: s.region.to_string(),
            duration: s.duration,
            compensation: s.compensation.to_string(),
            skills: strings(s.skills),
            listing_type: s.listing_type.to_string(),
            category: s.category.to_string(),
            remote: s.remote,
            description: s.description.to_string(),
            requirements: strings(s.requirements),
            benefits: strings(s.benefits),
            application_deadline: date(s.deadline.0, s.deadline.1, s.deadline.2),
            start_date: date(s.start.0, s.start.1, s.start.2),
            is_active: true,
            suitable_for_first_timers: s.first_timers,
            language_requirements: strings(s.languages),
            created_at: newest - Duration::hours(i as i64),
        })
        .collect()
}

/// Stand-in profile for a user whose profile could not be loaded.
pub fn profile(id: Uuid) -> Profile {
    Profile {
        id,
        display_name: "Student".to_string(),
        education_level: String::new(),
        field_of_study: String::new(),
        skills: Vec::new(),
        interests: Vec::new(),
        region: String::new(),
        preferred_duration: None,
        work_mode: WorkMode::Any,
    }
}

pub fn applications(user_id: Uuid) -> Vec<Application> {
    let listings = listings();
    let entries = [
        (
            0,
            ApplicationStatus::Pending,
            timestamp(2024, 1, 15, 0, 0),
            timestamp(2024, 1, 15, 0, 0),
            "Application submitted successfully. Waiting for initial screening.",
        ),
        (
            1,
            ApplicationStatus::Accepted,
            timestamp(2024, 1, 10, 0, 0),
            timestamp(2024, 1, 20, 0, 0),
            "Congratulations! You have been selected for the internship. Please check your email for next steps.",
        ),
        (
            2,
            ApplicationStatus::Rejected,
            timestamp(2024, 1, 5, 0, 0),
            timestamp(2024, 1, 18, 0, 0),
            "Thank you for your interest. We have decided to move forward with other candidates.",
        ),
    ];

    entries
        .into_iter()
        .map(|(i, status, applied_at, updated_at, notes)| {
            let l = &listings[i];
            Application {
                id: Uuid::from_u128(101 + i as u128),
                user_id,
                listing_id: l.id,
                listing_title: l.title.clone(),
                organization: l.organization.clone(),
                location: l.location.clone(),
                duration: l.duration.to_string(),
                status,
                applied_at,
                updated_at,
                notes: Some(notes.to_string()),
                resume_ref: None,
                cover_letter: None,
            }
        })
        .collect()
}

pub fn saved(user_id: Uuid) -> Vec<SavedListing> {
    let listings = listings();
    [(0, timestamp(2024, 1, 15, 0, 0)), (3, timestamp(2024, 1, 12, 0, 0))]
        .into_iter()
        .map(|(i, saved_at)| {
            let l = &listings[i];
            SavedListing {
                id: Uuid::from_u128(201 + i as u128),
                user_id,
                listing_id: l.id,
                listing_title: l.title.clone(),
                organization: l.organization.clone(),
                location: l.location.clone(),
                duration: l.duration.to_string(),
                compensation: l.compensation.clone(),
                skills: l.skills.clone(),
                remote: l.remote,
                saved_at,
            }
        })
        .collect()
}

pub fn notifications(user_id: Uuid) -> Vec<Notification> {
    let entries = [
        (
            NotificationKind::ApplicationUpdate,
            "Application Status Update",
            "Your application for Software Development Intern at TechCorp Solutions has been accepted! Check your email for next steps.",
            false,
            timestamp(2024, 1, 20, 10, 30),
        ),
        (
            NotificationKind::NewInternship,
            "New Internship Match",
            "We found a new internship that matches your profile: Frontend Development Intern at PixelWave Solutions.",
            false,
            timestamp(2024, 1, 19, 14, 15),
        ),
        (
            NotificationKind::DeadlineReminder,
            "Application Deadline Reminder",
            "The application deadline for Data Analysis Trainee at DataViz Corp is in 3 days. Don't miss out!",
            true,
            timestamp(2024, 1, 18, 9, 0),
        ),
        (
            NotificationKind::System,
            "Profile Completion",
            "Complete your profile to get better internship recommendations. Add your portfolio and skills.",
            true,
            timestamp(2024, 1, 15, 16, 45),
        ),
    ];

    entries
        .into_iter()
        .enumerate()
        .map(|(i, (kind, title, message, read, created_at))| Notification {
            id: Uuid::from_u128(301 + i as u128),
            user_id,
            kind,
            title: title.to_string(),
            message: message.to_string(),
            read,
            created_at,
            action_url: None,
        })
        .collect()
}
