//! Write-path validation. Each validator collects every problem, so the
//! caller can report them in one message, and normalizes list fields by
//! dropping blank entries.

use crate::models::activity::{NewApplication, NewNotification, NewSavedListing};
use crate::models::listing::{ListingPatch, NewListing};
use crate::models::profile::ProfileInput;

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationFailure {
    pub problems: Vec<String>,
}

impl ValidationFailure {
    pub fn message(&self) -> String {
        self.problems.join("; ")
    }
}

#[derive(Default)]
struct Problems(Vec<String>);

impl Problems {
    fn require(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.0.push(format!("{field} is required"));
        }
    }

    fn require_some(&mut self, field: &str, items: &[String], what: &str) {
        if items.is_empty() {
            self.0.push(format!("{field} must contain at least one {what}"));
        }
    }

    fn not_blank(&mut self, field: &str, value: Option<&String>) {
        if value.is_some_and(|v| v.trim().is_empty()) {
            self.0.push(format!("{field} cannot be blank"));
        }
    }

    fn finish(self) -> Result<(), ValidationFailure> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(ValidationFailure { problems: self.0 })
        }
    }
}

fn compact(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

pub fn validate_new_listing(mut listing: NewListing) -> Result<NewListing, ValidationFailure> {
    listing.skills = compact(listing.skills);
    listing.requirements = compact(listing.requirements);
    listing.benefits = compact(listing.benefits);
    listing.language_requirements = compact(listing.language_requirements);

    let mut problems = Problems::default();
    problems.require("title", &listing.title);
    problems.require("organization", &listing.organization);
    problems.require("location", &listing.location);
    problems.require("region", &listing.region);
    problems.require("compensation", &listing.compensation);
    problems.require("listing_type", &listing.listing_type);
    problems.require("category", &listing.category);
    problems.require("description", &listing.description);
    problems.require_some("skills", &listing.skills, "skill");
    problems.require_some("requirements", &listing.requirements, "requirement");
    if listing.start_date < listing.application_deadline {
        problems
            .0
            .push("start_date cannot be before application_deadline".to_string());
    }
    problems.finish()?;

    Ok(listing)
}

pub fn validate_listing_patch(mut patch: ListingPatch) -> Result<ListingPatch, ValidationFailure> {
    let mut problems = Problems::default();
    problems.not_blank("title", patch.title.as_ref());
    problems.not_blank("organization", patch.organization.as_ref());
    problems.not_blank("location", patch.location.as_ref());
    problems.not_blank("region", patch.region.as_ref());
    problems.not_blank("compensation", patch.compensation.as_ref());
    problems.not_blank("listing_type", patch.listing_type.as_ref());
    problems.not_blank("category", patch.category.as_ref());
    problems.not_blank("description", patch.description.as_ref());

    patch.skills = patch.skills.map(compact);
    patch.requirements = patch.requirements.map(compact);
    patch.benefits = patch.benefits.map(compact);
    patch.language_requirements = patch.language_requirements.map(compact);
    if let Some(skills) = &patch.skills {
        problems.require_some("skills", skills, "skill");
    }
    if let Some(requirements) = &patch.requirements {
        problems.require_some("requirements", requirements, "requirement");
    }
    problems.finish()?;

    Ok(patch)
}

pub fn validate_profile(mut input: ProfileInput) -> Result<ProfileInput, ValidationFailure> {
    input.skills = compact(input.skills);
    input.interests = compact(input.interests);

    let mut problems = Problems::default();
    problems.require("display_name", &input.display_name);
    problems.require("education_level", &input.education_level);
    problems.require("field_of_study", &input.field_of_study);
    problems.require("region", &input.region);
    problems.require_some("skills", &input.skills, "skill");
    problems.require_some("interests", &input.interests, "interest");
    problems.finish()?;

    Ok(input)
}

pub fn validate_application(application: &NewApplication) -> Result<(), ValidationFailure> {
    let mut problems = Problems::default();
    if application.user_id.is_nil() {
        problems.0.push("user_id is required".to_string());
    }
    if application.listing_id.is_nil() {
        problems.0.push("listing_id is required".to_string());
    }
    problems.require("listing_title", &application.listing_title);
    problems.require("organization", &application.organization);
    problems.finish()
}

pub fn validate_saved(saved: &NewSavedListing) -> Result<(), ValidationFailure> {
    let mut problems = Problems::default();
    if saved.user_id.is_nil() {
        problems.0.push("user_id is required".to_string());
    }
    if saved.listing_id.is_nil() {
        problems.0.push("listing_id is required".to_string());
    }
    problems.require("listing_title", &saved.listing_title);
    problems.finish()
}

pub fn validate_notification(notification: &NewNotification) -> Result<(), ValidationFailure> {
    let mut problems = Problems::default();
    if notification.user_id.is_nil() {
        problems.0.push("user_id is required".to_string());
    }
    problems.require("title", &notification.title);
    problems.require("message", &notification.message);
    problems.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::listing::DurationBucket;
    use crate::models::profile::WorkMode;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn new_listing() -> NewListing {
        NewListing {
            title: "Software Development Intern".to_string(),
            organization: "TechCorp Solutions".to_string(),
            location: "Bangalore, Karnataka".to_string(),
            region: "Karnataka".to_string(),
            duration: DurationBucket::ThreeMonths,
            compensation: "₹15,000/month".to_string(),
            skills: vec!["Rust".to_string(), "  ".to_string()],
            listing_type: "Technical".to_string(),
            category: "Information Technology".to_string(),
            remote: true,
            description: "Build things".to_string(),
            requirements: vec!["Curiosity".to_string()],
            benefits: vec!["".to_string()],
            application_deadline: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            start_date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            is_active: true,
            suitable_for_first_timers: true,
            language_requirements: vec![],
        }
    }

    fn profile_input() -> ProfileInput {
        ProfileInput {
            display_name: "Asha".to_string(),
            education_level: "Undergraduate".to_string(),
            field_of_study: "Computer Science".to_string(),
            skills: vec!["Python".to_string()],
            interests: vec!["AI".to_string()],
            region: "Karnataka".to_string(),
            preferred_duration: None,
            work_mode: WorkMode::Remote,
        }
    }

    #[test]
    fn test_valid_listing_drops_blank_entries() {
        let listing = validate_new_listing(new_listing()).unwrap();
        assert_eq!(listing.skills, vec!["Rust".to_string()]);
        assert!(listing.benefits.is_empty());
    }

    #[test]
    fn test_listing_missing_fields_are_all_reported() {
        let mut listing = new_listing();
        listing.title = " ".to_string();
        listing.description = String::new();
        listing.skills = vec!["".to_string()];

        let failure = validate_new_listing(listing).unwrap_err();
        assert_eq!(failure.problems.len(), 3);
        let message = failure.message();
        assert!(message.contains("title is required"));
        assert!(message.contains("description is required"));
        assert!(message.contains("skills must contain at least one skill"));
    }

    #[test]
    fn test_listing_requires_a_requirement() {
        let mut listing = new_listing();
        listing.requirements.clear();
        assert!(validate_new_listing(listing).is_err());
    }

    #[test]
    fn test_listing_start_before_deadline_is_rejected() {
        let mut listing = new_listing();
        listing.start_date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let failure = validate_new_listing(listing).unwrap_err();
        assert!(failure.message().contains("start_date"));
    }

    #[test]
    fn test_empty_patch_is_valid() {
        assert!(validate_listing_patch(ListingPatch::default()).is_ok());
    }

    #[test]
    fn test_patch_rejects_blank_text_and_empty_skills() {
        let patch = ListingPatch {
            title: Some("  ".to_string()),
            skills: Some(vec![" ".to_string()]),
            ..Default::default()
        };
        let failure = validate_listing_patch(patch).unwrap_err();
        assert_eq!(failure.problems.len(), 2);
    }

    #[test]
    fn test_profile_requires_skills_and_interests() {
        let mut input = profile_input();
        input.skills.clear();
        input.interests = vec![" ".to_string()];
        let failure = validate_profile(input).unwrap_err();
        assert_eq!(failure.problems.len(), 2);
    }

    #[test]
    fn test_valid_profile_passes() {
        assert!(validate_profile(profile_input()).is_ok());
    }

    #[test]
    fn test_application_requires_ids() {
        let application = NewApplication {
            user_id: Uuid::nil(),
            listing_id: Uuid::new_v4(),
            listing_title: "Intern".to_string(),
            organization: "Org".to_string(),
            location: "Pune".to_string(),
            duration: "3 months".to_string(),
            notes: None,
            resume_ref: None,
            cover_letter: None,
        };
        let failure = validate_application(&application).unwrap_err();
        assert_eq!(failure.problems, vec!["user_id is required".to_string()]);
    }
}
