use std::sync::Arc;

use tokio::sync::RwLock;

use crate::dto::resume_dto::{CreateResumePayload, ResumeFilterOptions, ResumeListQuery};
use crate::dto::vacancy_dto::{CreateVacancyPayload, VacancyFilterOptions, VacancyListQuery};
use crate::error::{Error, Result};
use crate::models::{resume::Resume, vacancy::Vacancy};
use crate::services::filter::{self, ExperienceBucket};
use crate::services::seed;
use crate::utils::time::today;

/// Shared handle over the vacancy and resume collections. Records are only
/// ever appended.
#[derive(Clone)]
pub struct DataService {
    vacancies: Arc<RwLock<Vec<Vacancy>>>,
    resumes: Arc<RwLock<Vec<Resume>>>,
}

fn next_id(ids: impl Iterator<Item = i64>) -> i64 {
    ids.max().map_or(1, |max| max + 1)
}

impl DataService {
    pub fn new(vacancies: Vec<Vacancy>, resumes: Vec<Resume>) -> Self {
        Self {
            vacancies: Arc::new(RwLock::new(vacancies)),
            resumes: Arc::new(RwLock::new(resumes)),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::vacancies(), seed::resumes())
    }

    pub async fn list_vacancies(&self, query: &VacancyListQuery) -> Vec<Vacancy> {
        let mut items = {
            let vacancies = self.vacancies.read().await;
            filter::apply(vacancies.as_slice(), &query.criteria())
        };
        if let Some(order) = query.sort {
            filter::sort_by_date(&mut items, order);
        }
        items
    }

    pub async fn vacancy_filter_options(&self) -> VacancyFilterOptions {
        let vacancies = self.vacancies.read().await;
        VacancyFilterOptions {
            categories: filter::distinct(vacancies.iter().map(|v| v.category.as_str())),
            work_types: filter::distinct(vacancies.iter().map(|v| v.work_type.as_str())),
            locations: filter::distinct(vacancies.iter().map(|v| v.location.as_str())),
        }
    }

    pub async fn get_vacancy(&self, id: i64) -> Result<Vacancy> {
        self.vacancies
            .read()
            .await
            .iter()
            .find(|v| v.id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Vacancy {} not found", id)))
    }

    pub async fn vacancies_by_employer(&self, employer_id: i64) -> Vec<Vacancy> {
        self.vacancies
            .read()
            .await
            .iter()
            .filter(|v| v.employer_id == employer_id)
            .cloned()
            .collect()
    }

    pub async fn add_vacancy(&self, payload: CreateVacancyPayload) -> Vacancy {
        let mut vacancies = self.vacancies.write().await;
        let vacancy = Vacancy {
            id: next_id(vacancies.iter().map(|v| v.id)),
            title: payload.title,
            company: payload.company,
            location: payload.location,
            salary: payload.salary,
            description: payload.description,
            requirements: payload.requirements,
            employer_id: payload.employer_id,
            created_at: today(),
            category: payload.category,
            work_type: payload.work_type,
        };
        vacancies.push(vacancy.clone());
        tracing::info!(vacancy_id = vacancy.id, employer_id = vacancy.employer_id, "vacancy added");
        vacancy
    }

    pub async fn list_resumes(&self, query: &ResumeListQuery) -> Vec<Resume> {
        let mut items = {
            let resumes = self.resumes.read().await;
            filter::apply(resumes.as_slice(), &query.criteria())
        };
        if let Some(order) = query.sort {
            filter::sort_by_date(&mut items, order);
        }
        items
    }

    pub async fn resume_filter_options(&self) -> ResumeFilterOptions {
        let resumes = self.resumes.read().await;
        ResumeFilterOptions {
            locations: filter::distinct(resumes.iter().map(|r| r.location.as_str())),
            experience: vec![
                ExperienceBucket::NoExperience,
                ExperienceBucket::Between1And3,
                ExperienceBucket::Between3And6,
                ExperienceBucket::MoreThan6,
            ],
        }
    }

    pub async fn get_resume(&self, id: i64) -> Result<Resume> {
        self.resumes
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Resume {} not found", id)))
    }

    pub async fn resumes_by_user(&self, user_id: i64) -> Vec<Resume> {
        self.resumes
            .read()
            .await
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect()
    }

    pub async fn add_resume(&self, payload: CreateResumePayload) -> Resume {
        let mut resumes = self.resumes.write().await;
        let resume = Resume {
            id: next_id(resumes.iter().map(|r| r.id)),
            user_id: payload.user_id,
            full_name: payload.full_name,
            title: payload.title,
            location: payload.location,
            experience: payload.experience,
            skills: payload.skills,
            education: payload.education,
            about: payload.about,
            salary: payload.salary,
            contact: payload.contact,
            created_at: today(),
        };
        resumes.push(resume.clone());
        tracing::info!(resume_id = resume.id, user_id = resume.user_id, "resume added");
        resume
    }
}
