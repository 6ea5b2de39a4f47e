//! Builders shared by unit tests across modules.

use chrono::{NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use crate::models::listing::{DurationBucket, Listing};
use crate::models::profile::{Profile, WorkMode};

pub fn listing(n: u128, title: &str, skills: &[&str], listing_type: &str, remote: bool) -> Listing {
    Listing {
        id: Uuid::from_u128(n),
        title: title.to_string(),
        organization: format!("Org {n}"),
        location: "Pune, Maharashtra".to_string(),
        region: "Maharashtra".to_string(),
        duration: DurationBucket::ThreeMonths,
        compensation: "₹10,000/month".to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        listing_type: listing_type.to_string(),
        category: "Information Technology".to_string(),
        remote,
        description: format!("{title} description"),
        requirements: vec!["Willingness to learn".to_string()],
        benefits: vec!["Certificate".to_string()],
        application_deadline: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        start_date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
        is_active: true,
        suitable_for_first_timers: true,
        language_requirements: vec!["English".to_string()],
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
            + chrono::Duration::minutes(n as i64),
    }
}

pub fn profile(skills: &[&str], interests: &[&str], work_mode: WorkMode) -> Profile {
    Profile {
        id: Uuid::from_u128(1000),
        display_name: "Asha Verma".to_string(),
        education_level: "Undergraduate".to_string(),
        field_of_study: "Computer Science".to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        interests: interests.iter().map(|s| s.to_string()).collect(),
        region: "Karnataka".to_string(),
        preferred_duration: Some(DurationBucket::ThreeMonths),
        work_mode,
    }
}

/// Five distinct listings in a fixed order.
pub fn five_listings() -> Vec<Listing> {
    vec![
        listing(1, "Software Development Intern", &["JavaScript", "React", "Python"], "Technical", true),
        listing(2, "Digital Marketing Assistant", &["Social Media Marketing", "Canva"], "Marketing", false),
        listing(3, "Data Analysis Trainee", &["Excel", "SQL", "Power BI"], "Analytics", true),
        listing(4, "Content Writing Intern", &["Content Writing", "SEO"], "Content", true),
        listing(5, "Finance & Accounting Assistant", &["Accounting", "Tally"], "Finance", false),
    ]
}
