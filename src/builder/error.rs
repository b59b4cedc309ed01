//! Build errors for machine and transition builders.

use crate::machine::GraphIssue;
use thiserror::Error;

/// Errors that can occur when building machines and transitions.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Transition {index} has no source state. Call .from(name)")]
    MissingFromState { index: usize },

    #[error("Transition {index} has no target state. Call .to(name)")]
    MissingToState { index: usize },

    #[error("No start state specified, but the config asks to enter it on build. Call .start(name)")]
    MissingStartState,

    #[error("Machine graph is invalid ({} issue(s)): {}", .0.len(), summarize(.0))]
    InvalidGraph(Vec<GraphIssue>),
}

impl BuildError {
    /// The graph issues behind an `InvalidGraph` error.
    pub fn issues(&self) -> &[GraphIssue] {
        match self {
            BuildError::InvalidGraph(issues) => issues,
            _ => &[],
        }
    }
}

fn summarize(issues: &[GraphIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
