//! The threshold table: externally supplied form-correctness bounds.
//!
//! Wire format: a JSON object keyed by exercise id, each value an object
//! keyed by difficulty name, each value an array of flat objects mapping a
//! bound name (ending `_min` or `_max`) to a number. Only the array's first
//! element is consulted per exercise/difficulty.
//!
//! Loading is deliberately lenient: malformed subtrees are skipped with a
//! warning and loading continues, so a partially broken configuration still
//! yields a usable table. Only a document that is not a JSON object at all
//! is rejected outright.

use std::collections::{BTreeMap, HashMap};

use crate::exercise::Difficulty;

/// Whether a bound name declares a lower or an upper limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundKind {
    /// `_min` suffix: observed values below the bound fail
    Min,
    /// `_max` suffix: observed values above the bound fail
    Max,
}

/// Splits a bound name into the metric it constrains and the bound kind.
///
/// Returns `None` for names carrying neither recognized suffix; such keys
/// are ignored by the correctness evaluator.
#[must_use]
pub fn split_bound_key(key: &str) -> Option<(&str, BoundKind)> {
    if let Some(name) = key.strip_suffix("_min") {
        Some((name, BoundKind::Min))
    } else {
        key.strip_suffix("_max").map(|name| (name, BoundKind::Max))
    }
}

/// One row of named numeric bounds for an exercise/difficulty pair.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ThresholdRow {
    bounds: BTreeMap<String, f32>,
}

impl ThresholdRow {
    /// Creates an empty row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a bound.
    pub fn insert(&mut self, key: impl Into<String>, value: f32) {
        self.bounds.insert(key.into(), value);
    }

    /// Looks a bound up by its full (suffixed) name.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<f32> {
        self.bounds.get(key).copied()
    }

    /// Returns `true` if the row holds no bounds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Iterates over `(bound name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> {
        self.bounds.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl FromIterator<(String, f32)> for ThresholdRow {
    fn from_iter<I: IntoIterator<Item = (String, f32)>>(iter: I) -> Self {
        Self {
            bounds: iter.into_iter().collect(),
        }
    }
}

/// Mapping `exercise id -> difficulty -> ordered bound rows`.
///
/// The table is pure data: the engine only ever looks up the first row for
/// the active exercise and difficulty.
#[derive(Debug, Clone, Default)]
pub struct ThresholdTable {
    exercises: HashMap<String, HashMap<Difficulty, Vec<ThresholdRow>>>,
}

impl ThresholdTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a row for an exercise/difficulty pair. Rows keep insertion
    /// order; the first one wins at lookup time.
    pub fn push_row(&mut self, exercise_id: impl Into<String>, difficulty: Difficulty, row: ThresholdRow) {
        self.exercises
            .entry(exercise_id.into())
            .or_default()
            .entry(difficulty)
            .or_default()
            .push(row);
    }

    /// The first (and only consulted) row for an exercise/difficulty pair.
    #[must_use]
    pub fn first_row(&self, exercise_id: &str, difficulty: Difficulty) -> Option<&ThresholdRow> {
        self.exercises
            .get(exercise_id)?
            .get(&difficulty)?
            .first()
    }

    /// Exercise ids present in the table.
    pub fn exercise_ids(&self) -> impl Iterator<Item = &str> {
        self.exercises.keys().map(String::as_str)
    }

    /// Number of exercises with at least one row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    /// Returns `true` if the table holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

#[cfg(feature = "serde")]
impl ThresholdTable {
    /// Loads a table from a JSON document.
    ///
    /// Malformed subtrees (non-object difficulty maps, non-array row lists,
    /// non-numeric bounds, unknown difficulty names) are skipped with a
    /// warning; loading continues for the remaining entries.
    ///
    /// # Errors
    ///
    /// Returns an error only if the document is not parseable JSON or its
    /// root is not an object.
    pub fn from_json_str(json: &str) -> Result<Self, crate::error::ConfigError> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| crate::error::ConfigError::invalid_json(e.to_string()))?;
        Self::from_json_value(&value)
    }

    /// Loads a table from an already-parsed JSON value. See
    /// [`Self::from_json_str`].
    ///
    /// # Errors
    ///
    /// Returns an error if the root is not an object.
    pub fn from_json_value(value: &serde_json::Value) -> Result<Self, crate::error::ConfigError> {
        use serde_json::Value;

        let Value::Object(exercises) = value else {
            return Err(crate::error::ConfigError::unexpected_root(json_type_name(value)));
        };

        let mut table = Self::new();
        for (exercise_id, difficulties) in exercises {
            let Value::Object(difficulties) = difficulties else {
                tracing::warn!(exercise = %exercise_id, "skipping non-object difficulty map");
                continue;
            };
            for (difficulty_name, rows) in difficulties {
                let Some(difficulty) = Difficulty::from_name(difficulty_name) else {
                    tracing::warn!(
                        exercise = %exercise_id,
                        difficulty = %difficulty_name,
                        "skipping unknown difficulty"
                    );
                    continue;
                };
                let Value::Array(rows) = rows else {
                    tracing::warn!(
                        exercise = %exercise_id,
                        difficulty = %difficulty_name,
                        "skipping non-array threshold rows"
                    );
                    continue;
                };
                for row_value in rows {
                    let Value::Object(bounds) = row_value else {
                        tracing::warn!(
                            exercise = %exercise_id,
                            difficulty = %difficulty_name,
                            "skipping non-object threshold row"
                        );
                        continue;
                    };
                    let mut row = ThresholdRow::new();
                    for (key, bound) in bounds {
                        match bound.as_f64() {
                            #[allow(clippy::cast_possible_truncation)]
                            Some(v) => row.insert(key.clone(), v as f32),
                            None => {
                                tracing::warn!(
                                    exercise = %exercise_id,
                                    bound = %key,
                                    "skipping non-numeric bound"
                                );
                            }
                        }
                    }
                    table.push_row(exercise_id.clone(), difficulty, row);
                }
            }
        }

        tracing::debug!(exercises = table.len(), "threshold table loaded");
        Ok(table)
    }
}

#[cfg(feature = "serde")]
fn json_type_name(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
