//! Input validation for plan requests.
//!
//! Checks structural integrity of graph descriptions and rosters before
//! planning. Detects:
//! - Empty descriptions
//! - Blank node, entity, or member names
//! - Negative or non-finite edge weights
//! - Self-loop edges
//! - A start location missing from the description
//! - Duplicate roster entities and empty member lists
//!
//! All issues are collected and reported together rather than failing
//! on the first one; the hosting layer decides how to present them.

use std::collections::HashSet;

use crate::models::{GraphDescription, GraphSource, Roster};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The description contains no nodes and no edges.
    EmptyDescription,
    /// A node, entity, or member name is empty or whitespace.
    BlankName,
    /// An edge weight is negative or non-finite.
    InvalidWeight,
    /// An edge connects a node to itself.
    SelfLoop,
    /// The requested start location is not mentioned anywhere.
    UnknownStart,
    /// Two roster entries share the same entity name.
    DuplicateEntity,
    /// A roster entry has no members.
    EmptyMemberList,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a graph description and optional start location.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_description(
    description: &GraphDescription,
    start: Option<&str>,
) -> ValidationResult {
    let mut errors = Vec::new();

    if description.nodes.is_empty() && description.edges.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyDescription,
            "graph description has no nodes and no edges",
        ));
    }

    let mut mentioned: HashSet<&str> = HashSet::new();

    for node in &description.nodes {
        if node.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankName,
                "node name is blank",
            ));
        }
        mentioned.insert(node.as_str());
    }

    for edge in &description.edges {
        for endpoint in [&edge.from, &edge.to] {
            if endpoint.trim().is_empty() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::BlankName,
                    format!("edge {} - {} has a blank endpoint", edge.from, edge.to),
                ));
            }
            mentioned.insert(endpoint.as_str());
        }

        if !edge.weight.is_finite() || edge.weight < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidWeight,
                format!(
                    "edge {} - {} has invalid weight {}",
                    edge.from, edge.to, edge.weight
                ),
            ));
        }

        if edge.from == edge.to {
            errors.push(ValidationError::new(
                ValidationErrorKind::SelfLoop,
                format!("edge {} - {} is a self-loop", edge.from, edge.to),
            ));
        }
    }

    if let Some(start) = start {
        if !mentioned.contains(start) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownStart,
                format!("start location '{start}' is not in the description"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a roster and optional start entity.
pub fn validate_roster(roster: &Roster, start: Option<&str>) -> ValidationResult {
    let mut errors = Vec::new();

    if roster.entries.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyDescription,
            "roster has no entries",
        ));
    }

    let mut entities: HashSet<&str> = HashSet::new();

    for entry in &roster.entries {
        if entry.entity.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankName,
                "entity name is blank",
            ));
        }

        if !entities.insert(entry.entity.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateEntity,
                format!("duplicate entity '{}'", entry.entity),
            ));
        }

        if entry.members.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyMemberList,
                format!("entity '{}' has no members", entry.entity),
            ));
        }

        for member in &entry.members {
            if member.trim().is_empty() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::BlankName,
                    format!("entity '{}' has a blank member name", entry.entity),
                ));
            }
        }
    }

    if let Some(start) = start {
        if !entities.contains(start) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownStart,
                format!("start entity '{start}' is not in the roster"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates whichever input surface a request carries.
pub fn validate_source(source: &GraphSource, start: Option<&str>) -> ValidationResult {
    match source {
        GraphSource::Description(description) => validate_description(description, start),
        GraphSource::Roster(roster) => validate_roster(roster, start),
    }
}
