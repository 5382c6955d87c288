//! Generic extensional CSP containers
//!
//! A [`Csp`] owns every variable and constraint of one model and keys
//! variables by index, the way cells and cages are keyed elsewhere in
//! this crate. Constraints are extensional: an ordered scope plus an
//! explicit set of admissible value tuples. The containers carry no
//! search or propagation logic; an external solver assigns values and
//! the model only answers membership questions.

use std::fmt;
use std::fmt::Formatter;

use crate::LinkedHashSet;

/// Identifies a variable within its [`Csp`]
pub type VarId = usize;

/// A cell value
pub type Value = i32;

/// A named slot holding a value from a finite domain, or nothing yet
#[derive(Clone, Debug)]
pub struct Variable {
    name: String,
    domain: Vec<Value>,
    assignment: Option<Value>,
}

impl Variable {
    pub fn new(name: impl Into<String>, domain: impl IntoIterator<Item = Value>) -> Self {
        Self {
            name: name.into(),
            domain: domain.into_iter().collect(),
            assignment: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn domain(&self) -> &[Value] {
        &self.domain
    }

    /// The currently assigned value, if any
    pub fn assigned_value(&self) -> Option<Value> {
        self.assignment
    }

    fn assign(&mut self, value: Value) {
        debug_assert!(self.domain.contains(&value));
        self.assignment = Some(value);
    }

    fn unassign(&mut self) {
        self.assignment = None;
    }
}

/// An extensional constraint: an ordered scope and the tuples it admits
///
/// Tuple positions correspond to scope positions. The tuple store keeps
/// insertion order, so enumerating a constraint's satisfying set is
/// reproducible from run to run.
pub struct Constraint {
    name: String,
    scope: Vec<VarId>,
    tuples: LinkedHashSet<Vec<Value>>,
}

impl Constraint {
    pub fn new(name: impl Into<String>, scope: impl Into<Vec<VarId>>) -> Self {
        Self {
            name: name.into(),
            scope: scope.into(),
            tuples: LinkedHashSet::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The ordered variables this constraint applies to
    pub fn scope(&self) -> &[VarId] {
        &self.scope
    }

    /// Adds tuples to the satisfying set
    ///
    /// Every tuple's arity must equal the scope length.
    pub fn add_satisfying_tuples(&mut self, tuples: impl IntoIterator<Item = Vec<Value>>) {
        for tuple in tuples {
            debug_assert_eq!(self.scope.len(), tuple.len());
            self.tuples.insert(tuple);
        }
    }

    /// True if the constraint admits the given values, positionally
    pub fn admits(&self, values: &[Value]) -> bool {
        self.tuples.contains(values)
    }

    pub fn satisfying_tuples(&self) -> impl Iterator<Item = &[Value]> {
        self.tuples.iter().map(Vec::as_slice)
    }

    pub fn tuple_count(&self) -> usize {
        self.tuples.len()
    }
}

impl fmt::Debug for Constraint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constraint")
            .field("name", &self.name)
            .field("scope", &self.scope)
            .field("tuples", &self.tuples.len())
            .finish()
    }
}

/// A complete constraint network
#[derive(Debug)]
pub struct Csp {
    name: String,
    variables: Vec<Variable>,
    constraints: Vec<Constraint>,
}

impl Csp {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variables: Vec::new(),
            constraints: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds a variable and returns its id
    pub fn add_variable(&mut self, variable: Variable) -> VarId {
        let id = self.variables.len();
        self.variables.push(variable);
        id
    }

    pub fn add_constraint(&mut self, constraint: Constraint) {
        self.constraints.push(constraint);
    }

    pub fn variable(&self, id: VarId) -> &Variable {
        &self.variables[id]
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Assigns a value to a variable
    ///
    /// Assignment belongs to the solver driving the model; the encoding
    /// layer never mutates a variable after construction.
    pub fn assign(&mut self, id: VarId, value: Value) {
        self.variables[id].assign(value);
    }

    pub fn unassign(&mut self, id: VarId) {
        self.variables[id].unassign();
    }

    /// True if no constraint rejects the current assignment
    ///
    /// A constraint is only checked once every variable in its scope is
    /// assigned; a partially assigned scope is not a violation.
    pub fn verify_assignment(&self) -> bool {
        self.constraints.iter().all(|constraint| {
            let values: Option<Vec<Value>> = constraint
                .scope()
                .iter()
                .map(|&id| self.variables[id].assigned_value())
                .collect();
            match values {
                Some(values) => constraint.admits(&values),
                None => true,
            }
        })
    }
}

#[cfg(test)]
mod test {
    use crate::csp::{Constraint, Csp, Variable};

    fn two_variable_csp() -> Csp {
        let mut csp = Csp::new("test");
        csp.add_variable(Variable::new("a", 1..=2));
        csp.add_variable(Variable::new("b", 1..=2));
        let mut constraint = Constraint::new("a-ne-b", vec![0, 1]);
        constraint.add_satisfying_tuples(vec![vec![1, 2], vec![2, 1]]);
        csp.add_constraint(constraint);
        csp
    }

    #[test]
    fn variable_starts_unassigned() {
        let csp = two_variable_csp();
        assert_eq!(None, csp.variable(0).assigned_value());
    }

    #[test]
    fn assign_and_unassign() {
        let mut csp = two_variable_csp();
        csp.assign(0, 2);
        assert_eq!(Some(2), csp.variable(0).assigned_value());
        csp.unassign(0);
        assert_eq!(None, csp.variable(0).assigned_value());
    }

    #[test]
    fn constraint_admits_positionally() {
        let csp = two_variable_csp();
        let constraint = &csp.constraints()[0];
        assert!(constraint.admits(&[1, 2]));
        assert!(!constraint.admits(&[1, 1]));
    }

    #[test]
    fn partially_assigned_scope_is_not_a_violation() {
        let mut csp = two_variable_csp();
        csp.assign(0, 1);
        assert!(csp.verify_assignment());
        csp.assign(1, 1);
        assert!(!csp.verify_assignment());
        csp.assign(1, 2);
        assert!(csp.verify_assignment());
    }

    #[test]
    fn tuples_are_deduplicated() {
        let mut constraint = Constraint::new("dup", vec![0]);
        constraint.add_satisfying_tuples(vec![vec![1], vec![1], vec![2]]);
        assert_eq!(2, constraint.tuple_count());
    }
}
