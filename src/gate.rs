use crate::{enumerate, error::EvalError};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GateKind {
    Not,
    And,
    Or,
    Xor,
    Nand,
    Nor,
    Xnor,
}

impl GateKind {
    pub const ALL: [GateKind; 7] = [GateKind::Not, GateKind::And, GateKind::Or, GateKind::Xor, GateKind::Nand, GateKind::Nor, GateKind::Xnor];

    pub fn name(&self) -> &'static str {
        match self {
            GateKind::Not => "NOT",
            GateKind::And => "AND",
            GateKind::Or => "OR",
            GateKind::Xor => "XOR",
            GateKind::Nand => "NAND",
            GateKind::Nor => "NOR",
            GateKind::Xnor => "XNOR",
        }
    }

    /// Computes the output of this gate for the given inputs in declared order.
    ///
    /// NOT only looks at its first input. XOR and XNOR fold left over the inputs: the running value becomes 0 when it equals the next input and 1 otherwise.
    ///
    /// An empty input list reads the absent first input as 0, so AND gives 1, OR gives 0, XOR gives 0 and NOT gives 1 (and the inverted kinds follow).
    pub fn evaluate(&self, inputs: &[bool]) -> bool {
        match self {
            GateKind::Not => logic_not(inputs),
            GateKind::And => logic_and(inputs),
            GateKind::Or => logic_or(inputs),
            GateKind::Xor => logic_xor(inputs),
            GateKind::Nand => !logic_and(inputs),
            GateKind::Nor => !logic_or(inputs),
            GateKind::Xnor => !logic_xor(inputs),
        }
    }

    /// Number of inputs a truth table of this kind needs when asked for `bits` inputs.
    pub fn table_arity(&self, bits: usize) -> usize {
        match self {
            GateKind::Not => 1,
            _ => bits,
        }
    }

    pub fn truth_table(&self, bits: usize) -> Result<Vec<(Vec<bool>, bool)>, EvalError> {
        Ok(enumerate::Assignments::new(self.table_arity(bits))?
            .map(|assignment| {
                let output = self.evaluate(&assignment);
                (assignment.into_bits(), output)
            })
            .collect())
    }
}

fn logic_not(inputs: &[bool]) -> bool {
    !inputs.first().copied().unwrap_or(false)
}

fn logic_and(inputs: &[bool]) -> bool {
    inputs.iter().all(|&i| i)
}

fn logic_or(inputs: &[bool]) -> bool {
    inputs.iter().any(|&i| i)
}

fn logic_xor(inputs: &[bool]) -> bool {
    match inputs.split_first() {
        Some((&first, rest)) => rest.iter().fold(first, |acc, &i| acc != i),
        None => false,
    }
}

impl std::str::FromStr for GateKind {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        GateKind::ALL.into_iter().find(|kind| kind.name() == upper).ok_or(EvalError::InvalidGateKind { kind: s.to_string() })
    }
}

impl std::fmt::Display for GateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}
