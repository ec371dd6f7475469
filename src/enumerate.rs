use rayon::prelude::*;

use crate::{
    error::EvalError,
    eval::{self, GateValues},
    network::Network,
};

/// Beyond this many inputs the table has more than ~16 million rows.
pub const PRACTICAL_WIDTH: usize = 24;

pub(crate) const MAX_WIDTH: usize = 63;

/// One row of the truth table: a value for every primary input, input 0 first.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Assignment(Vec<bool>);

impl Assignment {
    /// Row `index` in counting order, with input 0 as the most significant bit.
    fn from_index(width: usize, index: u64) -> Assignment {
        Assignment((0..width).map(|bit| (index >> (width - 1 - bit)) & 1 == 1).collect())
    }

    pub fn into_bits(self) -> Vec<bool> {
        self.0
    }
}

impl std::ops::Deref for Assignment {
    type Target = [bool];

    fn deref(&self) -> &[bool] {
        &self.0
    }
}

impl From<Vec<bool>> for Assignment {
    fn from(bits: Vec<bool>) -> Self {
        Assignment(bits)
    }
}

/// Every assignment of `width` inputs in binary counting order.
#[derive(Clone, Debug)]
pub struct Assignments {
    width: usize,
    next: u64,
    end: u64,
}

impl Assignments {
    pub fn new(width: usize) -> Result<Assignments, EvalError> {
        if width > MAX_WIDTH {
            return Err(EvalError::TooManyInputs { width });
        }
        Ok(Assignments { width, next: 0, end: 1 << width })
    }

    pub fn width(&self) -> usize {
        self.width
    }
}

impl Iterator for Assignments {
    type Item = Assignment;

    fn next(&mut self) -> Option<Assignment> {
        if self.next == self.end {
            return None;
        }
        let assignment = Assignment::from_index(self.width, self.next);
        self.next += 1;
        Some(assignment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.end - self.next).ok();
        (remaining.unwrap_or(usize::MAX), remaining)
    }
}

pub type Row = (Assignment, GateValues);

/// Lazily evaluates a network over every assignment. Stops after the first error unless [`Rows::continue_past_errors`] was called.
pub struct Rows<'n> {
    network: &'n Network,
    assignments: Option<Assignments>,
    continue_past_errors: bool,
    pending_error: Option<EvalError>,
}

impl<'n> Rows<'n> {
    pub fn continue_past_errors(mut self) -> Self {
        self.continue_past_errors = true;
        self
    }

    pub fn width(&self) -> Option<usize> {
        self.assignments.as_ref().map(Assignments::width)
    }
}

impl Iterator for Rows<'_> {
    type Item = Result<Row, EvalError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(e) = self.pending_error.take() {
            return Some(Err(e));
        }

        let assignment = self.assignments.as_mut()?.next()?;
        match eval::evaluate_all(self.network, &assignment) {
            Ok(values) => Some(Ok((assignment, values))),
            Err(e) => {
                if !self.continue_past_errors {
                    self.assignments = None;
                }
                Some(Err(e))
            }
        }
    }
}

impl std::iter::FusedIterator for Rows<'_> {}

/// Evaluates `network` for every assignment of its primary inputs, in binary counting order.
///
/// Each call starts a fresh sequence. A network with more than 63 inputs yields a single [`EvalError::TooManyInputs`].
pub fn enumerate(network: &Network) -> Rows<'_> {
    let width = network.input_width();
    if width > PRACTICAL_WIDTH {
        log::warn!("network has {width} primary inputs; enumerating 2^{width} rows will take a long time");
    }

    match Assignments::new(width) {
        Ok(assignments) => Rows { network, assignments: Some(assignments), continue_past_errors: false, pending_error: None },
        Err(e) => Rows { network, assignments: None, continue_past_errors: false, pending_error: Some(e) },
    }
}

/// Same rows as [`enumerate`], computed on the rayon thread pool. The network is only read so every row is independent.
///
/// Returns the error of the first failing assignment in counting order.
pub fn enumerate_parallel(network: &Network) -> Result<Vec<Row>, EvalError> {
    let width = network.input_width();
    if width > MAX_WIDTH {
        return Err(EvalError::TooManyInputs { width });
    }
    if width > PRACTICAL_WIDTH {
        log::warn!("network has {width} primary inputs; enumerating 2^{width} rows will take a long time");
    }

    (0..1u64 << width)
        .into_par_iter()
        .map(|index| {
            let assignment = Assignment::from_index(width, index);
            let values = eval::evaluate_all(network, &assignment)?;
            Ok((assignment, values))
        })
        .collect::<Vec<_>>()
        .into_iter()
        .collect()
}
