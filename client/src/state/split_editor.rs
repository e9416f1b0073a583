//! State behind the per-day outcome editor: one instance per detail-view
//! open, discarded once the server accepts the draft.

use crate::api::types::{LeaveSplitPayload, SplitValidationResponse};
use crate::api::ApiClient;
use crate::models::leave::{LeaveApplication, LeaveSplit};
use crate::splits::{build_initial_splits, update_split_draft, SplitPatch};

#[derive(Debug, Clone, Default)]
pub struct SplitEditorState {
    pub application_id: String,
    pub rows: Vec<LeaveSplit>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub saving: bool,
}

impl SplitEditorState {
    pub fn open(application: &LeaveApplication) -> Self {
        Self {
            application_id: application.id.clone(),
            rows: build_initial_splits(application),
            errors: Vec::new(),
            warnings: Vec::new(),
            saving: false,
        }
    }

    pub fn update_row(&mut self, index: usize, patch: SplitPatch) {
        self.rows = update_split_draft(&self.rows, index, patch);
    }

    pub fn payload(&self) -> Vec<LeaveSplitPayload> {
        self.rows.iter().map(LeaveSplitPayload::from).collect()
    }

    fn apply_validation(&mut self, response: &SplitValidationResponse) {
        self.errors = response.errors.clone();
        self.warnings = response.warnings.clone();
    }
}

/// Validates the draft server-side, then persists it as a whole replacement
/// set. Returns `Ok(true)` once the server accepted the draft (the caller
/// should rebuild from the server's response), `Ok(false)` when validation or
/// save declined it. The rows are left untouched on every failure path so the
/// user can correct and resubmit.
pub async fn submit_splits(state: &mut SplitEditorState, api: &ApiClient) -> Result<bool, String> {
    state.saving = true;
    let payload = state.payload();

    let validation = match api
        .validate_leave_splits(&state.application_id, &payload)
        .await
    {
        Ok(validation) => validation,
        Err(error) => {
            state.saving = false;
            return Err(error.to_string());
        }
    };
    if !validation.is_valid {
        state.apply_validation(&validation);
        state.saving = false;
        return Ok(false);
    }

    match api.create_leave_splits(&state.application_id, &payload).await {
        Ok(saved) if saved.success => {
            state.errors.clear();
            state.warnings = saved.warnings;
            state.saving = false;
            Ok(true)
        }
        Ok(saved) => {
            state.errors = saved.errors;
            state.warnings = saved.warnings;
            state.saving = false;
            Ok(false)
        }
        Err(error) => {
            state.saving = false;
            Err(error.to_string())
        }
    }
}
