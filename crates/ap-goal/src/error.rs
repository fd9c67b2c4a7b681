use thiserror::Error;

use ap_core::GoalId;

#[derive(Debug, Error)]
pub enum GoalError {
    #[error("goal {0} is not registered with this selector")]
    UnknownGoal(GoalId),
}

pub type GoalResult<T> = Result<T, GoalError>;
