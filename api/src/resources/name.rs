//! Hierarchical resource names.
//!
//! Every resource the service exposes is addressed by a slash-delimited path
//! of alternating collection ids and resource ids, e.g.
//! `projects/my-project/locations/us-central1/models/mdl-123`. Formatting and
//! parsing both live in this module so the two cannot drift apart; callers
//! never assemble a path by hand.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub struct ProjectId(pub String);

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub struct Location(pub String);

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub struct ModelId(pub String);

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub struct EvaluationId(pub String);

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub struct GlossaryId(pub String);

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub struct OperationId(pub String);

const LOCATION_COLLECTIONS: [&str; 2] = ["projects", "locations"];
const MODEL_COLLECTIONS: [&str; 3] = ["projects", "locations", "models"];
const EVALUATION_COLLECTIONS: [&str; 4] = ["projects", "locations", "models", "modelEvaluations"];
const GLOSSARY_COLLECTIONS: [&str; 3] = ["projects", "locations", "glossaries"];
const OPERATION_COLLECTIONS: [&str; 3] = ["projects", "locations", "operations"];

/// Interleaves collection ids with resource ids into path segments.
fn join_segments<'a, const N: usize>(
    collections: &[&'static str; N],
    ids: [&'a str; N],
) -> Vec<&'a str> {
    let mut segments = Vec::with_capacity(2 * N);
    for (collection, id) in collections.iter().zip(ids) {
        segments.push(*collection);
        segments.push(id);
    }
    segments
}

/// Splits a path into the ids between the expected collection segments.
fn split_segments<'a, const N: usize>(
    string: &'a str,
    collections: &[&'static str; N],
) -> Option<[&'a str; N]> {
    let segments: Vec<&str> = string.split('/').collect();
    if segments.len() != 2 * N {
        return None;
    }
    let mut ids = [""; N];
    for (index, collection) in collections.iter().enumerate() {
        if segments[2 * index] != *collection || segments[2 * index + 1].is_empty() {
            return None;
        }
        ids[index] = segments[2 * index + 1];
    }
    Some(ids)
}

/// Addresses a project's compute region, the parent of every other resource.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct LocationName {
    pub project_id: ProjectId,
    pub location: Location,
}

impl LocationName {
    pub fn new(project_id: ProjectId, location: Location) -> Self {
        LocationName {
            project_id,
            location,
        }
    }

    pub fn model(&self, model_id: ModelId) -> ModelName {
        ModelName {
            project_id: self.project_id.clone(),
            location: self.location.clone(),
            model_id,
        }
    }

    pub fn glossary(&self, glossary_id: GlossaryId) -> GlossaryName {
        GlossaryName {
            project_id: self.project_id.clone(),
            location: self.location.clone(),
            glossary_id,
        }
    }

    pub fn operation(&self, operation_id: OperationId) -> OperationName {
        OperationName {
            project_id: self.project_id.clone(),
            location: self.location.clone(),
            operation_id,
        }
    }

    pub(crate) fn segments(&self) -> Vec<&str> {
        join_segments(
            &LOCATION_COLLECTIONS,
            [&self.project_id.0, &self.location.0],
        )
    }
}

impl Display for LocationName {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        formatter.write_str(&self.segments().join("/"))
    }
}

impl FromStr for LocationName {
    type Err = Error;

    fn from_str(string: &str) -> Result<Self> {
        split_segments(string, &LOCATION_COLLECTIONS)
            .map(|[project_id, location]| LocationName {
                project_id: ProjectId(project_id.to_owned()),
                location: Location(location.to_owned()),
            })
            .ok_or_else(|| Error::BadLocationName {
                name: string.to_owned(),
            })
    }
}

impl TryFrom<String> for LocationName {
    type Error = Error;

    fn try_from(string: String) -> Result<Self> {
        string.parse()
    }
}

impl From<LocationName> for String {
    fn from(name: LocationName) -> String {
        name.to_string()
    }
}

/// Addresses a model within a project's compute region.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct ModelName {
    pub project_id: ProjectId,
    pub location: Location,
    pub model_id: ModelId,
}

impl ModelName {
    pub fn parent(&self) -> LocationName {
        LocationName {
            project_id: self.project_id.clone(),
            location: self.location.clone(),
        }
    }

    pub fn evaluation(&self, evaluation_id: EvaluationId) -> ModelEvaluationName {
        ModelEvaluationName {
            project_id: self.project_id.clone(),
            location: self.location.clone(),
            model_id: self.model_id.clone(),
            evaluation_id,
        }
    }

    pub(crate) fn segments(&self) -> Vec<&str> {
        join_segments(
            &MODEL_COLLECTIONS,
            [&self.project_id.0, &self.location.0, &self.model_id.0],
        )
    }
}

impl Display for ModelName {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        formatter.write_str(&self.segments().join("/"))
    }
}

impl FromStr for ModelName {
    type Err = Error;

    fn from_str(string: &str) -> Result<Self> {
        split_segments(string, &MODEL_COLLECTIONS)
            .map(|[project_id, location, model_id]| ModelName {
                project_id: ProjectId(project_id.to_owned()),
                location: Location(location.to_owned()),
                model_id: ModelId(model_id.to_owned()),
            })
            .ok_or_else(|| Error::BadModelName {
                name: string.to_owned(),
            })
    }
}

impl TryFrom<String> for ModelName {
    type Error = Error;

    fn try_from(string: String) -> Result<Self> {
        string.parse()
    }
}

impl From<ModelName> for String {
    fn from(name: ModelName) -> String {
        name.to_string()
    }
}

/// Addresses a single evaluation of a model.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct ModelEvaluationName {
    pub project_id: ProjectId,
    pub location: Location,
    pub model_id: ModelId,
    pub evaluation_id: EvaluationId,
}

impl ModelEvaluationName {
    pub fn model(&self) -> ModelName {
        ModelName {
            project_id: self.project_id.clone(),
            location: self.location.clone(),
            model_id: self.model_id.clone(),
        }
    }

    pub(crate) fn segments(&self) -> Vec<&str> {
        join_segments(
            &EVALUATION_COLLECTIONS,
            [
                &self.project_id.0,
                &self.location.0,
                &self.model_id.0,
                &self.evaluation_id.0,
            ],
        )
    }
}

impl Display for ModelEvaluationName {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        formatter.write_str(&self.segments().join("/"))
    }
}

impl FromStr for ModelEvaluationName {
    type Err = Error;

    fn from_str(string: &str) -> Result<Self> {
        split_segments(string, &EVALUATION_COLLECTIONS)
            .map(
                |[project_id, location, model_id, evaluation_id]| ModelEvaluationName {
                    project_id: ProjectId(project_id.to_owned()),
                    location: Location(location.to_owned()),
                    model_id: ModelId(model_id.to_owned()),
                    evaluation_id: EvaluationId(evaluation_id.to_owned()),
                },
            )
            .ok_or_else(|| Error::BadModelEvaluationName {
                name: string.to_owned(),
            })
    }
}

impl TryFrom<String> for ModelEvaluationName {
    type Error = Error;

    fn try_from(string: String) -> Result<Self> {
        string.parse()
    }
}

impl From<ModelEvaluationName> for String {
    fn from(name: ModelEvaluationName) -> String {
        name.to_string()
    }
}

/// Addresses a glossary within a project's compute region.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct GlossaryName {
    pub project_id: ProjectId,
    pub location: Location,
    pub glossary_id: GlossaryId,
}

impl GlossaryName {
    pub fn parent(&self) -> LocationName {
        LocationName {
            project_id: self.project_id.clone(),
            location: self.location.clone(),
        }
    }

    pub(crate) fn segments(&self) -> Vec<&str> {
        join_segments(
            &GLOSSARY_COLLECTIONS,
            [&self.project_id.0, &self.location.0, &self.glossary_id.0],
        )
    }
}

impl Display for GlossaryName {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        formatter.write_str(&self.segments().join("/"))
    }
}

impl FromStr for GlossaryName {
    type Err = Error;

    fn from_str(string: &str) -> Result<Self> {
        split_segments(string, &GLOSSARY_COLLECTIONS)
            .map(|[project_id, location, glossary_id]| GlossaryName {
                project_id: ProjectId(project_id.to_owned()),
                location: Location(location.to_owned()),
                glossary_id: GlossaryId(glossary_id.to_owned()),
            })
            .ok_or_else(|| Error::BadGlossaryName {
                name: string.to_owned(),
            })
    }
}

impl TryFrom<String> for GlossaryName {
    type Error = Error;

    fn try_from(string: String) -> Result<Self> {
        string.parse()
    }
}

impl From<GlossaryName> for String {
    fn from(name: GlossaryName) -> String {
        name.to_string()
    }
}

/// Addresses a long-running operation within a project's compute region.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct OperationName {
    pub project_id: ProjectId,
    pub location: Location,
    pub operation_id: OperationId,
}

impl OperationName {
    pub(crate) fn segments(&self) -> Vec<&str> {
        join_segments(
            &OPERATION_COLLECTIONS,
            [&self.project_id.0, &self.location.0, &self.operation_id.0],
        )
    }
}

impl Display for OperationName {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        formatter.write_str(&self.segments().join("/"))
    }
}

impl FromStr for OperationName {
    type Err = Error;

    fn from_str(string: &str) -> Result<Self> {
        split_segments(string, &OPERATION_COLLECTIONS)
            .map(|[project_id, location, operation_id]| OperationName {
                project_id: ProjectId(project_id.to_owned()),
                location: Location(location.to_owned()),
                operation_id: OperationId(operation_id.to_owned()),
            })
            .ok_or_else(|| Error::BadOperationName {
                name: string.to_owned(),
            })
    }
}

impl TryFrom<String> for OperationName {
    type Error = Error;

    fn try_from(string: String) -> Result<Self> {
        string.parse()
    }
}

impl From<OperationName> for String {
    fn from(name: OperationName) -> String {
        name.to_string()
    }
}
