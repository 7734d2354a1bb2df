use strum::Display;

/// Screen of the loan application wizard
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum WorkflowStep {
    Verify = 0,
    Pending = 1,
    Apply = 2,
}

impl WorkflowStep {
    pub fn index(self) -> u8 {
        self as u8
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum WorkflowState {
    /// Not on screen, nothing known
    #[default]
    Inactive,
    /// Initial status fetch outstanding
    Loading,
    Ready(WorkflowStep),
    /// Only reachable with `workflow.surfaceStatusErrors`
    Failed { reason: String },
}

impl WorkflowState {
    pub fn step(&self) -> Option<WorkflowStep> {
        match self {
            WorkflowState::Ready(step) => Some(*step),
            _ => None,
        }
    }
}
