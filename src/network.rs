use crate::{
    enumerate::MAX_WIDTH,
    error::{EvalError, NetworkError},
    eval,
    gate::GateKind,
};

#[derive(Copy, Clone, PartialOrd, Ord, PartialEq, Eq, Hash, Debug)]
pub struct GateId(pub usize);

impl GateId {
    pub fn get(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for GateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Where a gate input comes from.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum InputRef {
    /// Bit `k` of the assignment.
    Primary(usize),
    /// The output of another gate.
    Gate(GateId),
}

impl std::fmt::Display for InputRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputRef::Primary(k) => write!(f, "I{k}"),
            InputRef::Gate(id) => write!(f, "{id}"),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GateSpec {
    pub id: GateId,
    pub name: String,
    pub kind: GateKind,
    pub inputs: Vec<InputRef>,
}

impl GateSpec {
    pub fn new(id: usize, name: &str, kind: GateKind, inputs: Vec<InputRef>) -> GateSpec {
        GateSpec { id: GateId(id), name: name.to_uppercase(), kind, inputs }
    }

    pub fn gate_refs(&self) -> impl Iterator<Item = GateId> + '_ {
        self.inputs.iter().filter_map(|input| match input {
            InputRef::Primary(_) => None,
            InputRef::Gate(id) => Some(*id),
        })
    }

    /// One more than the highest primary input this gate reads, or 0 if it reads none.
    pub fn input_width(&self) -> usize {
        self.inputs
            .iter()
            .filter_map(|input| match input {
                InputRef::Primary(k) => Some(k.saturating_add(1)),
                InputRef::Gate(_) => None,
            })
            .max()
            .unwrap_or(0)
    }
}

/// A set of gates indexed by id. Immutable once built.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Network {
    gates: Vec<GateSpec>,
}

impl Network {
    /// Orders the gates by id. Ids must be exactly `0..gates.len()`.
    ///
    /// Gate references are not checked here; see [`Network::check`].
    pub fn new(mut gates: Vec<GateSpec>) -> Result<Network, NetworkError> {
        gates.sort_by_key(|gate| gate.id);

        for (index, pair) in gates.windows(2).enumerate() {
            if pair[0].id == pair[1].id {
                return Err(NetworkError::DuplicateId(pair[0].id));
            }
            if pair[0].id.get() != index {
                return Err(NetworkError::MissingId(GateId(index)));
            }
        }
        if let Some(last) = gates.last() {
            if last.id.get() != gates.len() - 1 {
                return Err(NetworkError::MissingId(GateId(gates.len() - 1)));
            }
        }

        for gate in gates.iter().filter(|gate| gate.inputs.is_empty()) {
            log::warn!("gate {} ({}) has no inputs", gate.id, gate.name);
        }

        Ok(Network { gates })
    }

    pub fn gates(&self) -> &[GateSpec] {
        &self.gates
    }

    pub fn gate(&self, id: GateId) -> Option<&GateSpec> {
        self.gates.get(id.get())
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Number of primary inputs an assignment needs: one more than the highest referenced input index across all gates.
    pub fn input_width(&self) -> usize {
        self.gates.iter().map(GateSpec::input_width).max().unwrap_or(0)
    }

    /// Checks that every gate reference exists and that the references contain no cycle, without needing an assignment.
    pub fn check(&self) -> Result<(), EvalError> {
        for gate in &self.gates {
            if let Some(reference) = gate.gate_refs().find(|r| self.gate(*r).is_none()) {
                return Err(EvalError::UnknownReference { gate: gate.id, reference });
            }
        }

        let width = self.input_width();
        if width > MAX_WIDTH {
            return Err(EvalError::TooManyInputs { width });
        }

        // primary inputs are all read as 0; only reachability matters here
        eval::evaluate_all(self, &vec![false; width]).map(|_| ())
    }
}
