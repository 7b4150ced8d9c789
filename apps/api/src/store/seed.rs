//! Seed postings for DB-less runs and tests.

use crate::models::job::NewJob;

/// Demo job postings, also the initial corpus for cold dev starts.
pub fn seed_jobs() -> Vec<NewJob> {
    vec![
        NewJob {
            title: "Senior Python Developer".to_string(),
            company: "TechCorp".to_string(),
            location: "New York, NY".to_string(),
            description: "We are looking for a Senior Python Developer with experience in FastAPI, PostgreSQL, and AWS. You will design and ship backend services powering our analytics platform.".to_string(),
            remote_status: "Remote".to_string(),
            experience_level: "Senior".to_string(),
            skills_required: "Python, FastAPI, PostgreSQL, AWS".to_string(),
            salary_range: Some("$120k - $160k".to_string()),
        },
        NewJob {
            title: "React Frontend Engineer".to_string(),
            company: "DesignSync".to_string(),
            location: "San Francisco, CA".to_string(),
            description: "Join our team to build beautiful user interfaces with React, Tailwind CSS, and Framer Motion. Close collaboration with design, fast iteration cycles.".to_string(),
            remote_status: "Hybrid".to_string(),
            experience_level: "Mid-Level".to_string(),
            skills_required: "React, Tailwind, CSS, JavaScript".to_string(),
            salary_range: Some("$100k - $140k".to_string()),
        },
        NewJob {
            title: "Data Scientist".to_string(),
            company: "DataInsights".to_string(),
            location: "Remote".to_string(),
            description: "Looking for a Data Scientist to build predictive models using scikit-learn and spaCy. You will own the modeling pipeline end to end, from feature engineering to evaluation.".to_string(),
            remote_status: "Remote".to_string(),
            experience_level: "Mid-Level".to_string(),
            skills_required: "Python, scikit-learn, spaCy, NLTK".to_string(),
            salary_range: Some("$110k - $150k".to_string()),
        },
        NewJob {
            title: "Junior Go Developer".to_string(),
            company: "CloudNative".to_string(),
            location: "Austin, TX".to_string(),
            description: "Great opportunity for a Junior developer to learn Go and Kubernetes while supporting our container platform team.".to_string(),
            remote_status: "On-site".to_string(),
            experience_level: "Junior".to_string(),
            skills_required: "Go, Docker, Linux".to_string(),
            salary_range: Some("$70k - $90k".to_string()),
        },
        NewJob {
            title: "Full Stack Engineer".to_string(),
            company: "LaunchPad".to_string(),
            location: "Remote".to_string(),
            description: "Build product features across a Node.js and React stack backed by PostgreSQL on AWS. You will take features from spec to production with CI/CD.".to_string(),
            remote_status: "Remote".to_string(),
            experience_level: "Mid-Level".to_string(),
            skills_required: "React, Node.js, AWS, PostgreSQL".to_string(),
            salary_range: Some("$105k - $145k".to_string()),
        },
        NewJob {
            title: "DevOps Engineer".to_string(),
            company: "ScaleOps".to_string(),
            location: "Denver, CO".to_string(),
            description: "Operate and automate our Kubernetes clusters with Terraform and CI/CD pipelines. Strong Linux fundamentals expected.".to_string(),
            remote_status: "Hybrid".to_string(),
            experience_level: "Senior".to_string(),
            skills_required: "Kubernetes, Terraform, Docker, CI/CD, Linux".to_string(),
            salary_range: Some("$130k - $170k".to_string()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_jobs_are_well_formed() {
        let jobs = seed_jobs();
        assert!(jobs.len() >= 4);
        for job in &jobs {
            assert!(!job.title.is_empty());
            assert!(!job.description.is_empty());
            assert!(!job.skills_required.is_empty());
        }
    }
}
