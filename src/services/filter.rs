//! Conjunctive filtering over the in-memory collections.
//!
//! Every criterion is optional. A record is kept when all supplied criteria
//! match it; empty strings count as "not supplied". Output keeps the order
//! of the base collection unless a [`SortOrder`] is applied afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{resume::Resume, vacancy::Vacancy};

pub trait Predicate<T> {
    fn matches(&self, item: &T) -> bool;
}

pub fn apply<T, P>(items: &[T], predicate: &P) -> Vec<T>
where
    T: Clone,
    P: Predicate<T>,
{
    items
        .iter()
        .filter(|item| predicate.matches(item))
        .cloned()
        .collect()
}

fn supplied(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn search_term(value: &Option<String>) -> Option<String> {
    supplied(value).map(str::to_lowercase)
}

fn contains_term(haystack: &str, term: &str) -> bool {
    haystack.to_lowercase().contains(term)
}

fn equals_if_supplied(criterion: &Option<String>, actual: &str) -> bool {
    supplied(criterion).map_or(true, |expected| expected == actual)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VacancyCriteria {
    /// Matched against title, company and description.
    pub search: Option<String>,
    pub category: Option<String>,
    pub work_type: Option<String>,
    pub location: Option<String>,
}

impl Predicate<Vacancy> for VacancyCriteria {
    fn matches(&self, vacancy: &Vacancy) -> bool {
        let text_ok = search_term(&self.search).map_or(true, |term| {
            contains_term(&vacancy.title, &term)
                || contains_term(&vacancy.company, &term)
                || contains_term(&vacancy.description, &term)
        });

        text_ok
            && equals_if_supplied(&self.category, &vacancy.category)
            && equals_if_supplied(&self.work_type, &vacancy.work_type)
            && equals_if_supplied(&self.location, &vacancy.location)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResumeCriteria {
    /// Matched against full name, title, each skill and the about text.
    pub search: Option<String>,
    pub location: Option<String>,
    pub experience: Option<ExperienceBucket>,
}

impl Predicate<Resume> for ResumeCriteria {
    fn matches(&self, resume: &Resume) -> bool {
        let text_ok = search_term(&self.search).map_or(true, |term| {
            contains_term(&resume.full_name, &term)
                || contains_term(&resume.title, &term)
                || resume.skills.iter().any(|skill| contains_term(skill, &term))
                || contains_term(&resume.about, &term)
        });

        text_ok
            && equals_if_supplied(&self.location, &resume.location)
            && self
                .experience
                .map_or(true, |bucket| bucket.contains(experience_years(&resume.experience)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum ExperienceBucket {
    NoExperience,
    Between1And3,
    Between3And6,
    MoreThan6,
}

impl ExperienceBucket {
    pub fn contains(self, years: u32) -> bool {
        match self {
            ExperienceBucket::NoExperience => years == 0,
            ExperienceBucket::Between1And3 => (1..3).contains(&years),
            ExperienceBucket::Between3And6 => (3..6).contains(&years),
            ExperienceBucket::MoreThan6 => years >= 6,
        }
    }
}

/// Reads the first run of digits in a free-text experience field as whole
/// years. Text without digits ("без опыта") counts as zero.
pub fn experience_years(text: &str) -> u32 {
    let digits: String = text
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(if digits.is_empty() { 0 } else { u32::MAX })
}

pub trait Dated {
    fn created_at(&self) -> NaiveDate;
}

impl Dated for Vacancy {
    fn created_at(&self) -> NaiveDate {
        self.created_at
    }
}

impl Dated for Resume {
    fn created_at(&self) -> NaiveDate {
        self.created_at
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    Newest,
    Oldest,
}

/// Stable: records published on the same day keep their relative order.
pub fn sort_by_date<T: Dated>(items: &mut [T], order: SortOrder) {
    match order {
        SortOrder::Newest => items.sort_by(|a, b| b.created_at().cmp(&a.created_at())),
        SortOrder::Oldest => items.sort_by_key(|item| item.created_at()),
    }
}

/// Distinct values in order of first appearance.
pub fn distinct<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen: Vec<String> = Vec::new();
    for value in values {
        if !seen.iter().any(|existing| existing == value) {
            seen.push(value.to_string());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::seed;

    fn ids<T, F: Fn(&T) -> i64>(items: &[T], id: F) -> Vec<i64> {
        items.iter().map(id).collect()
    }

    #[test]
    fn empty_criteria_returns_everything_in_order() {
        let base = seed::vacancies();
        let result = apply(&base, &VacancyCriteria::default());
        assert_eq!(result, base);

        let empty_strings = VacancyCriteria {
            search: Some(String::new()),
            category: Some(String::new()),
            work_type: Some(String::new()),
            location: Some(String::new()),
        };
        assert_eq!(apply(&base, &empty_strings), base);
    }

    #[test]
    fn category_is_exact_match() {
        let base = seed::vacancies();
        let criteria = VacancyCriteria {
            category: Some("IT, интернет, связь".into()),
            ..Default::default()
        };
        let result = apply(&base, &criteria);
        assert_eq!(ids(&result, |v| v.id), vec![1, 2, 5]);
        assert!(result.iter().all(|v| v.category == "IT, интернет, связь"));

        let partial = VacancyCriteria {
            category: Some("IT".into()),
            ..Default::default()
        };
        assert!(apply(&base, &partial).is_empty());
    }

    #[test]
    fn search_is_case_insensitive_across_title_company_description() {
        let base = seed::vacancies();
        let by_title = VacancyCriteria {
            search: Some("JAVA".into()),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&base, &by_title), |v| v.id), vec![2]);

        let by_company = VacancyCriteria {
            search: Some("технологии".into()),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&base, &by_company), |v| v.id), vec![1, 5]);

        let by_description = VacancyCriteria {
            search: Some("ci/cd".into()),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&base, &by_description), |v| v.id), vec![5]);
    }

    #[test]
    fn criteria_combine_with_and() {
        let base = seed::vacancies();
        let criteria = VacancyCriteria {
            location: Some("Москва".into()),
            work_type: Some("Полная занятость".into()),
            category: Some("Продажи".into()),
            search: None,
        };
        assert_eq!(ids(&apply(&base, &criteria), |v| v.id), vec![3]);

        // "Москва, удаленно" is a different location value.
        let moscow = VacancyCriteria {
            location: Some("Москва".into()),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&base, &moscow), |v| v.id), vec![1, 3]);
    }

    #[test]
    fn resume_search_covers_skills() {
        let base = seed::resumes();
        let criteria = ResumeCriteria {
            search: Some("docker".into()),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&base, &criteria), |r| r.id), vec![3, 5]);
    }

    #[test]
    fn resume_search_covers_about_text() {
        let base = seed::resumes();
        let criteria = ResumeCriteria {
            search: Some("МАСШТАБИРОВАНИЕ".into()),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&base, &criteria), |r| r.id), vec![5]);

        let by_name = ResumeCriteria {
            search: Some("иван".into()),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&base, &by_name), |r| r.id), vec![1, 4]);
    }

    #[test]
    fn experience_is_read_as_years() {
        assert_eq!(experience_years("3 года"), 3);
        assert_eq!(experience_years("более 10 лет"), 10);
        assert_eq!(experience_years("без опыта"), 0);
        assert_eq!(experience_years("1,5 года"), 1);
    }

    #[test]
    fn experience_buckets_do_not_overlap() {
        for years in 0..20 {
            let hits = [
                ExperienceBucket::NoExperience,
                ExperienceBucket::Between1And3,
                ExperienceBucket::Between3And6,
                ExperienceBucket::MoreThan6,
            ]
            .iter()
            .filter(|bucket| bucket.contains(years))
            .count();
            assert_eq!(hits, 1, "{} years matched {} buckets", years, hits);
        }
    }

    #[test]
    fn resume_experience_filter() {
        let base = seed::resumes();
        let mid = ResumeCriteria {
            experience: Some(ExperienceBucket::Between3And6),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&base, &mid), |r| r.id), vec![1, 2, 3, 4, 5]);

        let junior = ResumeCriteria {
            experience: Some(ExperienceBucket::Between1And3),
            ..Default::default()
        };
        assert!(apply(&base, &junior).is_empty());
    }

    #[test]
    fn sorts_by_date_both_ways() {
        let mut items = seed::vacancies();
        sort_by_date(&mut items, SortOrder::Oldest);
        assert_eq!(ids(&items, |v| v.id), vec![5, 4, 3, 2, 1]);
        sort_by_date(&mut items, SortOrder::Newest);
        assert_eq!(ids(&items, |v| v.id), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn distinct_keeps_first_appearance_order() {
        let base = seed::vacancies();
        let categories = distinct(base.iter().map(|v| v.category.as_str()));
        assert_eq!(
            categories,
            vec![
                "IT, интернет, связь".to_string(),
                "Продажи".to_string(),
                "Бухгалтерия, финансы".to_string()
            ]
        );
    }
}
