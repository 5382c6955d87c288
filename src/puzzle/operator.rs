/// The `Operator` enum represents each of the possible math operations
/// that can be on a cage.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Operator {
    Add,
    Subtract,
    Divide,
    Multiply,
}

impl Operator {
    /// Retrieve an `Operator` from its wire code
    pub fn from_code(code: i32) -> Option<Operator> {
        let operator = match code {
            0 => Operator::Add,
            1 => Operator::Subtract,
            2 => Operator::Divide,
            3 => Operator::Multiply,
            _ => return None,
        };
        Some(operator)
    }

    /// The wire code of the operator
    pub fn code(self) -> i32 {
        match self {
            Operator::Add => 0,
            Operator::Subtract => 1,
            Operator::Divide => 2,
            Operator::Multiply => 3,
        }
    }

    /// Retrieve the character representation of the operator
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Divide => '/',
            Operator::Multiply => '*',
        }
    }
}
