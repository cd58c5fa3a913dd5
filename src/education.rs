//! Education catalog: standard course durations and the break-even horizon
//! they suggest

use serde::Serialize;

use crate::error::{Error, Result};

/// Shortest custom course length accepted
pub const MIN_CUSTOM_YEARS: f64 = 0.5;

/// Shortest break-even horizon offered to the user
pub const MIN_BREAK_EVEN_YEARS: f64 = 0.5;

/// A course with a standard duration
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Course {
    /// Short identifier used on the command line
    pub key: &'static str,
    pub label: &'static str,
    pub years: f64,
}

const UG_COURSES: &[Course] = &[
    Course { key: "3-year", label: "3-Year Degree (B.Sc, B.A, B.Com, BBA, BCA)", years: 3.0 },
    Course { key: "4-year", label: "4-Year Degree (B.Tech, B.E)", years: 4.0 },
    Course { key: "5-year", label: "5-Year Degree (B.Arch)", years: 5.0 },
    Course { key: "5.5-year", label: "5.5-Year Degree (MBBS)", years: 5.5 },
];

const PG_COURSES: &[Course] = &[
    Course { key: "2-year", label: "2-Year Master's (M.Tech, MBA, M.Sc, M.A)", years: 2.0 },
    Course { key: "1-year", label: "1-Year Master's / PG Diploma", years: 1.0 },
];

const CERT_COURSES: &[Course] = &[
    Course { key: "bootcamp", label: "6-Month BootCamp", years: 0.5 },
    Course { key: "1-year", label: "1-Year Certification", years: 1.0 },
];

/// Kind of programme a course belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Programme {
    Undergraduate,
    Postgraduate,
    Certification,
}

impl Programme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Programme::Undergraduate => "UG",
            Programme::Postgraduate => "PG",
            Programme::Certification => "Certification",
        }
    }

    pub fn courses(&self) -> &'static [Course] {
        match self {
            Programme::Undergraduate => UG_COURSES,
            Programme::Postgraduate => PG_COURSES,
            Programme::Certification => CERT_COURSES,
        }
    }

    pub fn find(&self, key: &str) -> Option<&'static Course> {
        self.courses()
            .iter()
            .find(|c| c.key.eq_ignore_ascii_case(key.trim()))
    }
}

/// A catalog course or a custom duration ("Other")
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CourseSelection {
    Catalog(&'static Course),
    Custom { years: f64 },
}

impl CourseSelection {
    /// Resolve a catalog key, or read the text as a custom number of years
    pub fn parse(programme: Programme, text: &str) -> Result<Self> {
        if let Some(course) = programme.find(text) {
            return Ok(CourseSelection::Catalog(course));
        }
        match text.trim().parse::<f64>() {
            Ok(years) if years.is_finite() => Ok(CourseSelection::Custom { years }),
            _ => Err(Error::UnknownCourse {
                programme: programme.as_str(),
                key: text.to_string(),
            }),
        }
    }

    /// Duration in years; custom lengths are raised to the minimum
    pub fn years(&self) -> f64 {
        match self {
            CourseSelection::Catalog(course) => course.years,
            CourseSelection::Custom { years } => years.max(MIN_CUSTOM_YEARS),
        }
    }
}

/// Highest education level and the course(s) taken
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EducationLevel {
    UndergraduateOnly(CourseSelection),
    PostgraduateOnly(CourseSelection),
    /// UG followed by PG; durations add up
    Both { ug: CourseSelection, pg: CourseSelection },
    Certification(CourseSelection),
}

impl EducationLevel {
    /// Total standard duration of the education in years
    pub fn standard_duration(&self) -> f64 {
        match self {
            EducationLevel::UndergraduateOnly(c)
            | EducationLevel::PostgraduateOnly(c)
            | EducationLevel::Certification(c) => c.years(),
            EducationLevel::Both { ug, pg } => ug.years() + pg.years(),
        }
    }

    /// Default horizon: the course length, but never under a year
    pub fn suggested_break_even_years(&self) -> f64 {
        suggested_break_even_years(self.standard_duration())
    }
}

pub fn suggested_break_even_years(standard_duration: f64) -> f64 {
    standard_duration.max(1.0)
}
