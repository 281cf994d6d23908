use log::{trace, warn};
use std::rc::Rc;

use crate::error::StoreError;
use crate::model::QuizResult;
use crate::services::KeyValueStore;

pub const HISTORY_KEY: &str = "quiz_results";
pub const HISTORY_LIMIT: usize = 10;

/// Past results, oldest first, capped at `HISTORY_LIMIT` entries.
pub struct ResultHistory {
    store: Rc<dyn KeyValueStore>,
    key: String,
}

impl ResultHistory {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            key: HISTORY_KEY.to_string(),
        }
    }

    /// Reads the stored results. A missing, malformed or mistyped value is an
    /// empty history; only a failing store is an error.
    pub fn load(&self) -> Result<Vec<QuizResult>, StoreError> {
        let value = match self.store.get(&self.key) {
            Ok(Some(value)) => value,
            Ok(None) => return Ok(Vec::new()),
            Err(StoreError::Serialization(err)) => {
                warn!(target: "history", "Discarding malformed history under {:?}: {}", self.key, err);
                return Ok(Vec::new());
            }
            Err(err) => return Err(err),
        };
        match serde_json::from_value::<Vec<QuizResult>>(value) {
            Ok(results) => Ok(results),
            Err(err) => {
                warn!(target: "history", "Discarding unreadable history under {:?}: {}", self.key, err);
                Ok(Vec::new())
            }
        }
    }

    pub fn save_result(&self, result: &QuizResult) -> Result<(), StoreError> {
        let mut results = self.load()?;
        results.push(result.clone());

        // Keep only the most recent entries
        if results.len() > HISTORY_LIMIT {
            results.drain(..results.len() - HISTORY_LIMIT);
        }

        trace!(target: "history", "Saving {} results", results.len());
        self.store.set(&self.key, serde_json::to_value(&results)?)
    }
}
