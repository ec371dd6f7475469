use crate::{
    error::EvalError,
    network::{GateId, GateSpec, InputRef, Network},
};

/// The value of every gate in a network for one assignment, indexed by gate id.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GateValues(Vec<bool>);

impl GateValues {
    pub fn get(&self, id: GateId) -> Option<bool> {
        self.0.get(id.get()).copied()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (GateId, bool)> + '_ {
        self.0.iter().enumerate().map(|(i, value)| (GateId(i), *value))
    }
}

impl std::ops::Index<GateId> for GateValues {
    type Output = bool;

    fn index(&self, id: GateId) -> &bool {
        &self.0[id.get()]
    }
}

#[derive(Copy, Clone, Debug)]
enum Slot {
    Unresolved,
    WaitingOn(GateId),
    Resolved(bool),
}

impl Slot {
    fn is_resolved(&self) -> bool {
        matches!(self, Slot::Resolved(_))
    }
}

enum Resolution {
    Ready(bool),
    WaitingOn(GateId),
}

/// Computes every gate's value for one assignment.
///
/// Gates are scanned in id order over and over; a gate is computed as soon as all of the gates it reads from have values, so references may point forwards or backwards. A pass that resolves nothing while gates remain means there is a cycle, which is reported instead of looping forever.
pub fn evaluate_all(network: &Network, assignment: &[bool]) -> Result<GateValues, EvalError> {
    let mut slots = vec![Slot::Unresolved; network.len()];
    let mut passes = 0;

    loop {
        // .all on an empty network is true so that is done immediately
        if slots.iter().all(Slot::is_resolved) {
            break;
        }

        passes += 1;
        let mut amt_changed = 0;

        for gate in network.gates() {
            let slot = gate.id.get();
            if slots[slot].is_resolved() {
                continue;
            }

            slots[slot] = match try_resolve(gate, assignment, &slots)? {
                Resolution::Ready(value) => {
                    amt_changed += 1;
                    Slot::Resolved(value)
                }
                Resolution::WaitingOn(dep) => Slot::WaitingOn(dep),
            };
        }

        if amt_changed == 0 {
            return Err(stalled(&slots));
        }
    }

    log::trace!("resolved {} gates in {} passes", slots.len(), passes);

    Ok(GateValues(
        slots
            .into_iter()
            .map(|slot| match slot {
                Slot::Resolved(value) => value,
                Slot::Unresolved | Slot::WaitingOn(_) => unreachable!("the loop only exits once every slot is resolved"),
            })
            .collect(),
    ))
}

fn try_resolve(gate: &GateSpec, assignment: &[bool], slots: &[Slot]) -> Result<Resolution, EvalError> {
    // a dangling reference has to be reported even when an earlier input is still waiting
    if let Some(reference) = gate.gate_refs().find(|r| r.get() >= slots.len()) {
        return Err(EvalError::UnknownReference { gate: gate.id, reference });
    }

    let mut values = Vec::with_capacity(gate.inputs.len());
    for input in &gate.inputs {
        let value = match *input {
            InputRef::Primary(k) => *assignment.get(k).ok_or(EvalError::MissingInput { gate: gate.id, input: k, width: assignment.len() })?,
            InputRef::Gate(dep) => match slots.get(dep.get()) {
                None => return Err(EvalError::UnknownReference { gate: gate.id, reference: dep }),
                Some(Slot::Resolved(value)) => *value,
                Some(Slot::Unresolved | Slot::WaitingOn(_)) => return Ok(Resolution::WaitingOn(dep)),
            },
        };
        values.push(value);
    }

    Ok(Resolution::Ready(gate.kind.evaluate(&values)))
}

fn stalled(slots: &[Slot]) -> EvalError {
    let unresolved: Vec<GateId> = slots.iter().enumerate().filter(|(_, slot)| !slot.is_resolved()).map(|(i, _)| GateId(i)).collect();
    let cycle = match unresolved.first() {
        Some(start) => trace_cycle(slots, *start),
        None => Vec::new(),
    };
    log::debug!("evaluation stalled with {} unresolved gates", unresolved.len());
    EvalError::CyclicOrUnsatisfiableNetwork { unresolved, cycle }
}

// after a pass with no progress every unresolved gate is waiting on another unresolved gate, so following those links has to come back around
fn trace_cycle(slots: &[Slot], start: GateId) -> Vec<GateId> {
    let mut path = Vec::new();
    let mut cur = start;
    loop {
        if let Some(pos) = path.iter().position(|id| *id == cur) {
            return path.split_off(pos);
        }
        path.push(cur);

        cur = match slots[cur.get()] {
            Slot::WaitingOn(dep) => dep,
            Slot::Unresolved | Slot::Resolved(_) => return path,
        };
    }
}
