//! Ordered exercise catalog built from one source document.

use std::collections::HashSet;

use crate::error::{ExerciseError, Result};
use crate::exercise::Exercise;
use crate::types::ExerciseDefinition;

/// All exercises of a fetched source, in source order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    exercises: Vec<Exercise>,
}

impl Catalog {
    /// Build every definition into an exercise, rejecting missing or
    /// duplicate ids.
    pub fn from_definitions(definitions: Vec<ExerciseDefinition>) -> Result<Self> {
        let mut exercises = Vec::with_capacity(definitions.len());
        let mut seen = HashSet::new();
        for definition in definitions {
            let exercise = Exercise::new(definition)?;
            if !seen.insert(exercise.id().to_string()) {
                return Err(ExerciseError::DuplicateId {
                    id: exercise.id().to_string(),
                });
            }
            exercises.push(exercise);
        }
        Ok(Self { exercises })
    }

    pub fn all(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn by_id(&self, id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|exercise| exercise.id() == id)
    }

    /// Exercises tagged with the notion, in source order.
    pub fn by_notion(&self, notion: &str) -> Vec<&Exercise> {
        self.exercises
            .iter()
            .filter(|exercise| exercise.has_notion(notion))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}
