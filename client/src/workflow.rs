//! Approval-chain states and the transition table the action buttons are
//! gated on.
//!
//! The backend owns the real workflow; the client mirrors it so a view can
//! decide which actions to offer without a round trip. States and actions are
//! spelled out in one table instead of scattered string comparisons, and
//! `can_perform_action` fixes the precedence between role overrides and
//! workflow-driven gating.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    HodApproved,
    HrApproved,
    Approved,
    Rejected,
    Cancelled,
}

impl ApplicationStatus {
    /// Terminal applications accept no further workflow action.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ApplicationStatus::Approved | ApplicationStatus::Rejected | ApplicationStatus::Cancelled
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::HodApproved => "hod_approved",
            ApplicationStatus::HrApproved => "hr_approved",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ApproverRole {
    Employee,
    Hod,
    Hr,
    Admin,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowAction {
    Approve,
    Reject,
    Cancel,
}

/// One step of an application's approval chain, as the server reports it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApprovalStep {
    pub role: ApproverRole,
    #[serde(default)]
    pub action: Option<WorkflowAction>,
    #[serde(default)]
    pub actor_id: Option<String>,
    #[serde(default)]
    pub acted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApprovalWorkflow {
    #[serde(default)]
    pub next_approver_role: Option<ApproverRole>,
    #[serde(default)]
    pub approval_chain: Vec<ApprovalStep>,
    /// Employee ids allowed to stand in for the HOD step.
    #[serde(default)]
    pub reporting_manager_ids: Vec<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("no {action:?} transition from {from:?} for role {role:?}")]
pub struct TransitionError {
    pub from: ApplicationStatus,
    pub role: ApproverRole,
    pub action: WorkflowAction,
}

use self::ApplicationStatus as S;
use self::ApproverRole as R;
use self::WorkflowAction as A;

/// The chain runs HOD verification, HR approval, final sanction. Admins may
/// short-circuit any live step; the applicant may cancel until a terminal
/// state is reached.
const TRANSITIONS: &[(ApplicationStatus, ApproverRole, WorkflowAction, ApplicationStatus)] = &[
    (S::Pending, R::Hod, A::Approve, S::HodApproved),
    (S::Pending, R::Hod, A::Reject, S::Rejected),
    (S::HodApproved, R::Hr, A::Approve, S::HrApproved),
    (S::HodApproved, R::Hr, A::Reject, S::Rejected),
    (S::HrApproved, R::Admin, A::Approve, S::Approved),
    (S::HrApproved, R::Admin, A::Reject, S::Rejected),
    (S::Pending, R::Admin, A::Approve, S::Approved),
    (S::Pending, R::Admin, A::Reject, S::Rejected),
    (S::HodApproved, R::Admin, A::Approve, S::Approved),
    (S::HodApproved, R::Admin, A::Reject, S::Rejected),
    (S::Pending, R::Employee, A::Cancel, S::Cancelled),
    (S::HodApproved, R::Employee, A::Cancel, S::Cancelled),
    (S::HrApproved, R::Employee, A::Cancel, S::Cancelled),
];

/// Looks up the state `action` by `role` would move `from` into, if the
/// table allows it.
pub fn next_status(
    from: ApplicationStatus,
    role: ApproverRole,
    action: WorkflowAction,
) -> Option<ApplicationStatus> {
    TRANSITIONS
        .iter()
        .find(|(state, actor, candidate, _)| *state == from && *actor == role && *candidate == action)
        .map(|(_, _, _, to)| *to)
}

/// Like [`next_status`], but an illegal transition is an error the caller can
/// surface.
pub fn apply(
    from: ApplicationStatus,
    role: ApproverRole,
    action: WorkflowAction,
) -> Result<ApplicationStatus, TransitionError> {
    next_status(from, role, action).ok_or(TransitionError { from, role, action })
}

/// The acting user, reduced to what gating needs.
#[derive(Debug, Clone, Copy)]
pub struct Actor<'a> {
    pub role: ApproverRole,
    pub id: &'a str,
}

/// Decides whether `actor` may take `action` on an application.
///
/// Precedence is ordered; the first rule that applies wins:
/// 1. terminal applications accept no action
/// 2. cancellation belongs to the applicant alone
/// 3. admins may act on any live approval step
/// 4. otherwise the actor's role must match the workflow's next approver
/// 5. a listed reporting manager may stand in for the HOD step
pub fn can_perform_action(
    status: ApplicationStatus,
    applicant_id: &str,
    workflow: Option<&ApprovalWorkflow>,
    actor: Actor<'_>,
    action: WorkflowAction,
) -> bool {
    if status.is_terminal() {
        return false;
    }
    if action == WorkflowAction::Cancel {
        return actor.id == applicant_id;
    }
    if actor.role == ApproverRole::Admin {
        return next_status(status, ApproverRole::Admin, action).is_some();
    }
    let Some(workflow) = workflow else {
        return false;
    };
    let Some(next_role) = workflow.next_approver_role else {
        return false;
    };
    if actor.role == next_role {
        return next_status(status, actor.role, action).is_some();
    }
    if next_role == ApproverRole::Hod
        && workflow.reporting_manager_ids.iter().any(|id| id == actor.id)
    {
        return next_status(status, ApproverRole::Hod, action).is_some();
    }
    false
}
