use crate::network::GateId;

/// Errors that abort the evaluation of a network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// A gate kind tag that is not one of the seven recognized kinds.
    #[error("invalid gate type '{kind}'")]
    InvalidGateKind { kind: String },

    #[error("gate {gate} references gate {reference}, which does not exist")]
    UnknownReference { gate: GateId, reference: GateId },

    #[error("gate {gate} references input I{input} but the assignment only has {width} inputs")]
    MissingInput { gate: GateId, input: usize, width: usize },

    /// A full pass resolved nothing while gates were still unresolved.
    #[error("network cannot be resolved: gates {} never become ready (dependency cycle {})", join(.unresolved, ", "), join(.cycle, " -> "))]
    CyclicOrUnsatisfiableNetwork { unresolved: Vec<GateId>, cycle: Vec<GateId> },

    #[error("network has {width} primary inputs, too many to enumerate")]
    TooManyInputs { width: usize },
}

/// Errors in the structure of a gate list that make it unusable as a network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    #[error("gate id {0} is defined more than once")]
    DuplicateId(GateId),

    // ids double as indices so there can be no gaps
    #[error("gate id {0} is missing (gate ids must be numbered from 0 without gaps)")]
    MissingId(GateId),
}

fn join(ids: &[GateId], sep: &str) -> String {
    ids.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(sep)
}
