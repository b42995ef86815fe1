// src/matching.rs
//! Company–student matching.
//!
//! Every job of a company is checked against the student on four independent
//! criteria (English requirement, technical skill overlap, major overlap,
//! university). Each satisfied criterion adds one point, per job, so a company
//! with several fitting jobs accumulates points for each of them.

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{AppError, AppResult};
use crate::messages;
use crate::models::{Company, Job, User};
use crate::store::{CompanyReader, UserReader};

/// Number of companies returned by a match query
pub const TOP_MATCHES: usize = 5;

#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    #[serde(flatten)]
    pub company: Company,
    #[serde(rename = "matchScore")]
    pub match_score: u32,
    #[serde(rename = "matchReasons")]
    pub match_reasons: Vec<String>,
}

/// Score one company. Reasons are listed in the order they were satisfied.
pub fn score_company(student: &User, company: &Company) -> (u32, Vec<String>) {
    let mut reasons = Vec::new();

    for job in company.jobs() {
        score_job(student, job, &mut reasons);
    }

    let score = reasons.len() as u32;
    if reasons.is_empty() {
        reasons.push(messages::REASON_DEFAULT.to_string());
    }
    (score, reasons)
}

fn score_job(student: &User, job: &Job, reasons: &mut Vec<String>) {
    let job_wants_english = job
        .language_requirement
        .as_deref()
        .is_some_and(|req| req.contains(messages::ENGLISH_MARKER));
    let student_has_english = student
        .language_level
        .as_deref()
        .is_some_and(|level| level.contains(messages::ENGLISH_MARKER));
    if job_wants_english && student_has_english {
        reasons.push(messages::REASON_LANGUAGE.to_string());
    }

    let matching_skills: Vec<&str> = student
        .skills
        .iter()
        .filter(|skill| job.technical_skills.contains(*skill))
        .map(String::as_str)
        .collect();
    if !matching_skills.is_empty() {
        reasons.push(format!(
            "{}: {}",
            messages::REASON_SKILLS,
            matching_skills.join(", ")
        ));
    }

    let Some(target) = &job.student_target else {
        return;
    };

    let job_majors = target.major_list();
    if !job_majors.is_empty() {
        let matching_majors: Vec<&str> = student
            .majors
            .iter()
            .map(String::as_str)
            .filter(|major| job_majors.contains(major))
            .collect();
        if !matching_majors.is_empty() {
            reasons.push(format!(
                "{}: {}",
                messages::REASON_MAJORS,
                matching_majors.join(", ")
            ));
        }
    }

    if let (Some(wanted), Some(actual)) = (&target.university, &student.university) {
        if wanted == actual {
            reasons.push(messages::REASON_UNIVERSITY.to_string());
        }
    }
}

/// Score every company, sort best first and keep the top `limit`.
///
/// The sort is stable: companies with equal scores keep their store order.
pub fn rank_companies(student: &User, companies: Vec<Company>, limit: usize) -> Vec<MatchResult> {
    let mut results: Vec<MatchResult> = companies
        .into_iter()
        .map(|company| {
            let (match_score, match_reasons) = score_company(student, &company);
            MatchResult {
                company,
                match_score,
                match_reasons,
            }
        })
        .collect();

    results.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    results.truncate(limit);
    results
}

/// Resolve the student and rank all companies for them
pub async fn match_companies<R>(store: &R, user_id: &str) -> AppResult<Vec<MatchResult>>
where
    R: UserReader + CompanyReader + Sync + ?Sized,
{
    let Some(student) = store.get_user(user_id).await? else {
        warn!("Match requested for unknown student: {}", user_id);
        return Err(AppError::not_found(messages::STUDENT_NOT_FOUND));
    };

    let companies = store.list_companies().await?;
    let total = companies.len();
    let results = rank_companies(&student, companies, TOP_MATCHES);

    debug!(
        "Ranked {} companies for student {}, best score {}",
        total,
        user_id,
        results.first().map(|r| r.match_score).unwrap_or(0)
    );

    Ok(results)
}
