// SPDX-License-Identifier: PMPL-1.0-or-later

//! CV entry schema: a tagged union selected by the `type` field.
//!
//! Validation reads `type` first and then checks only that shape's fields.
//! The entry structs double as the item types of the assembled CV, which
//! is why they also derive `Deserialize` with serde defaults.

use super::raw::{RawMap, RawValue};
use super::validate::{put_opt_list, put_opt_string, ContentKind, Fields, ValidatorOptions};
use crate::error::{ContentError, FieldIssue};
use crate::i18n::DEFAULT_LOCALE;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CvShape {
    Personal,
    Work,
    Education,
    Projects,
    Certifications,
    Skills,
}

impl CvShape {
    pub const ALL: [CvShape; 6] = [
        CvShape::Personal,
        CvShape::Work,
        CvShape::Education,
        CvShape::Projects,
        CvShape::Certifications,
        CvShape::Skills,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CvShape::Personal => "personal",
            CvShape::Work => "work",
            CvShape::Education => "education",
            CvShape::Projects => "projects",
            CvShape::Certifications => "certifications",
            CvShape::Skills => "skills",
        }
    }

    /// Exact, case-sensitive match on the `type` literal.
    pub fn parse(value: &str) -> Option<Self> {
        CvShape::ALL.into_iter().find(|shape| shape.as_str() == value)
    }

    fn expected_literals() -> String {
        CvShape::ALL
            .iter()
            .map(|shape| format!("`{}`", shape.as_str()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub about: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_link: Option<String>,
    pub email: String,
    pub phone: String,
    pub github: String,
    pub linkedin: String,
    pub website: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkEntry {
    pub company: String,
    pub link: String,
    pub title: String,
    pub start: String,
    pub end: Option<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievements: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badges: Option<Vec<String>>,
    #[serde(default)]
    pub order: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub school: String,
    pub degree: String,
    pub start: String,
    pub end: Option<String>,
    #[serde(default)]
    pub order: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,
    #[serde(default)]
    pub order: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationEntry {
    pub name: String,
    pub issuer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
    #[serde(default)]
    pub order: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillsEntry {
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CvEntry {
    Personal(PersonalInfo),
    Work(WorkEntry),
    Education(EducationEntry),
    Projects(ProjectEntry),
    Certifications(CertificationEntry),
    Skills(SkillsEntry),
}

impl CvEntry {
    pub fn shape(&self) -> CvShape {
        match self {
            CvEntry::Personal(_) => CvShape::Personal,
            CvEntry::Work(_) => CvShape::Work,
            CvEntry::Education(_) => CvShape::Education,
            CvEntry::Projects(_) => CvShape::Projects,
            CvEntry::Certifications(_) => CvShape::Certifications,
            CvEntry::Skills(_) => CvShape::Skills,
        }
    }

    /// Display order within its section; personal and skills entries have none.
    pub fn order(&self) -> Option<i64> {
        match self {
            CvEntry::Work(entry) => Some(entry.order),
            CvEntry::Education(entry) => Some(entry.order),
            CvEntry::Projects(entry) => Some(entry.order),
            CvEntry::Certifications(entry) => Some(entry.order),
            CvEntry::Personal(_) | CvEntry::Skills(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CvRecord {
    pub locale: String,
    #[serde(flatten)]
    pub entry: CvEntry,
}

impl CvRecord {
    pub(crate) fn from_raw(map: &RawMap, options: &ValidatorOptions) -> Result<Self, ContentError> {
        let shape = match map.get("type") {
            Some(RawValue::String(tag)) => CvShape::parse(tag).ok_or_else(|| {
                type_violation(FieldIssue::invalid(
                    "type",
                    format!(
                        "`{}` is not a CV entry type (expected one of {})",
                        tag,
                        CvShape::expected_literals()
                    ),
                ))
            })?,
            Some(other) => {
                return Err(type_violation(FieldIssue::wrong_type(
                    "type",
                    "string",
                    other.type_name(),
                )))
            }
            None => {
                return Err(type_violation(FieldIssue::missing(
                    "type",
                    "one of the CV entry types",
                )))
            }
        };

        let mut fields = Fields::new(map);
        fields.accept("type");
        let entry = match shape {
            CvShape::Personal => CvEntry::Personal(PersonalInfo {
                name: fields.string("name"),
                about: fields.string("about"),
                location: fields.string("location"),
                location_link: fields.optional_string("locationLink"),
                email: fields.string("email"),
                phone: fields.string("phone"),
                github: fields.string("github"),
                linkedin: fields.string("linkedin"),
                website: fields.string("website"),
            }),
            CvShape::Work => CvEntry::Work(WorkEntry {
                company: fields.string("company"),
                link: fields.string("link"),
                title: fields.string("title"),
                start: fields.string("start"),
                end: fields.nullable_string("end"),
                description: fields.string("description"),
                achievements: fields.optional_string_list("achievements"),
                badges: fields.optional_string_list("badges"),
                order: fields.integer_or("order", 0),
            }),
            CvShape::Education => CvEntry::Education(EducationEntry {
                school: fields.string("school"),
                degree: fields.string("degree"),
                start: fields.string("start"),
                end: fields.nullable_string("end"),
                order: fields.integer_or("order", 0),
            }),
            CvShape::Projects => CvEntry::Projects(ProjectEntry {
                name: fields.string("name"),
                description: fields.string("description"),
                link: fields.optional_string("link"),
                technologies: fields.optional_string_list("technologies"),
                order: fields.integer_or("order", 0),
            }),
            CvShape::Certifications => CvEntry::Certifications(CertificationEntry {
                name: fields.string("name"),
                issuer: fields.string("issuer"),
                link: fields.optional_string("link"),
                date: fields.string("date"),
                credential_id: fields.optional_string("credentialId"),
                order: fields.integer_or("order", 0),
            }),
            CvShape::Skills => {
                let skills = fields.string_list("skills");
                if matches!(map.get("skills"), Some(RawValue::List(items)) if items.is_empty()) {
                    fields.push_issue(FieldIssue::invalid("skills", "must not be empty"));
                }
                CvEntry::Skills(SkillsEntry { skills })
            }
        };
        let locale = fields.string_or("locale", DEFAULT_LOCALE);
        fields.finish(ContentKind::Cv, shape.as_str(), options)?;

        Ok(CvRecord { locale, entry })
    }

    pub fn to_raw(&self) -> RawValue {
        let mut map = RawMap::new();
        map.insert("type".into(), RawValue::string(self.entry.shape().as_str()));
        map.insert("locale".into(), RawValue::string(&self.locale));
        let put = |map: &mut RawMap, key: &str, value: &str| {
            map.insert(key.to_string(), RawValue::string(value));
        };
        match &self.entry {
            CvEntry::Personal(info) => {
                put(&mut map, "name", &info.name);
                put(&mut map, "about", &info.about);
                put(&mut map, "location", &info.location);
                put_opt_string(&mut map, "locationLink", &info.location_link);
                put(&mut map, "email", &info.email);
                put(&mut map, "phone", &info.phone);
                put(&mut map, "github", &info.github);
                put(&mut map, "linkedin", &info.linkedin);
                put(&mut map, "website", &info.website);
            }
            CvEntry::Work(work) => {
                put(&mut map, "company", &work.company);
                put(&mut map, "link", &work.link);
                put(&mut map, "title", &work.title);
                put(&mut map, "start", &work.start);
                map.insert("end".into(), nullable(&work.end));
                put(&mut map, "description", &work.description);
                put_opt_list(&mut map, "achievements", &work.achievements);
                put_opt_list(&mut map, "badges", &work.badges);
                map.insert("order".into(), RawValue::Number(work.order as f64));
            }
            CvEntry::Education(education) => {
                put(&mut map, "school", &education.school);
                put(&mut map, "degree", &education.degree);
                put(&mut map, "start", &education.start);
                map.insert("end".into(), nullable(&education.end));
                map.insert("order".into(), RawValue::Number(education.order as f64));
            }
            CvEntry::Projects(project) => {
                put(&mut map, "name", &project.name);
                put(&mut map, "description", &project.description);
                put_opt_string(&mut map, "link", &project.link);
                put_opt_list(&mut map, "technologies", &project.technologies);
                map.insert("order".into(), RawValue::Number(project.order as f64));
            }
            CvEntry::Certifications(cert) => {
                put(&mut map, "name", &cert.name);
                put(&mut map, "issuer", &cert.issuer);
                put_opt_string(&mut map, "link", &cert.link);
                put(&mut map, "date", &cert.date);
                put_opt_string(&mut map, "credentialId", &cert.credential_id);
                map.insert("order".into(), RawValue::Number(cert.order as f64));
            }
            CvEntry::Skills(skills) => {
                map.insert(
                    "skills".into(),
                    RawValue::string_list(skills.skills.iter().cloned()),
                );
            }
        }
        RawValue::Map(map)
    }
}

fn nullable(value: &Option<String>) -> RawValue {
    value
        .as_ref()
        .map(|text| RawValue::string(text.clone()))
        .unwrap_or(RawValue::Null)
}

fn type_violation(issue: FieldIssue) -> ContentError {
    ContentError::SchemaViolation {
        kind: ContentKind::Cv.to_string(),
        shape: "cv entry".to_string(),
        issues: vec![issue],
    }
}
