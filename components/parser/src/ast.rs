//! Abstract Syntax Tree node definitions
//!
//! All nodes are plain immutable data. Code generators walk a [`Program`]
//! item by item and recurse into statements and expressions.

use serde::Serialize;

/// A parsed source unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Program {
    /// Top-level items in source order
    pub items: Vec<Item>,
}

/// A top-level item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Item {
    /// Function declaration (only allowed at top level)
    Function(Function),
    /// Ordinary statement
    Statement(Statement),
}

/// Function declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Function {
    /// Function name
    pub name: String,
    /// Parameters in declaration order
    pub parameters: Vec<Parameter>,
    /// Declared return type
    pub return_type: Option<VariableType>,
    /// Function body
    pub body: Vec<Statement>,
}

/// Function parameter; the type annotation is mandatory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    /// Parameter name
    pub name: String,
    /// Type and mutability
    pub type_info: TypeInfo,
}

/// Base value types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum VariableType {
    /// `number`
    Number,
    /// `string`
    String,
    /// `boolean`
    Boolean,
}

/// Type annotation with mutability flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TypeInfo {
    /// Declared `mutable`
    pub mutable: bool,
    /// Base type
    pub variable_type: VariableType,
}

/// Wordy statements
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Statement {
    /// `define variable <name> to be [annotation] [initializer]`
    ///
    /// At least one of `type_info` and `initial_value` is present.
    VariableDeclaration {
        /// Variable name
        name: String,
        /// Optional type annotation
        type_info: Option<TypeInfo>,
        /// Optional initializer
        initial_value: Option<Expression>,
    },

    /// `set <target> to be <value>`
    AssignmentSet {
        /// Assigned variable
        target: String,
        /// New value
        value: Expression,
    },

    /// `increase <target> by <value>`
    AssignmentIncrease {
        /// Assigned variable
        target: String,
        /// Amount added
        value: Expression,
    },

    /// `decrease <target> by <value>`
    AssignmentDecrease {
        /// Assigned variable
        target: String,
        /// Amount subtracted
        value: Expression,
    },

    /// `print <value>`
    PrintStatement {
        /// Printed value
        value: Expression,
    },

    /// `if .. do .. [but if .. do ..]* [otherwise do ..] end of if`
    IfBlock {
        /// The `if` branch followed by every `but if` branch, in order
        branches: Vec<ConditionalBlock>,
        /// `otherwise` body
        otherwise: Option<Vec<Statement>>,
    },

    /// `while <condition> do .. end of while`
    WhileBlock {
        /// Loop condition
        condition: Expression,
        /// Loop body
        body: Vec<Statement>,
    },

    /// `for <iterator> from <from> to <to> do .. end of for`
    ///
    /// The range is inclusive and ascending.
    ForBlock {
        /// Loop variable
        iterator: String,
        /// Start bound
        from: Expression,
        /// End bound
        to: Expression,
        /// Loop body
        body: Vec<Statement>,
    },

    /// `call function <name> [with arg ..] [then put result into <target>]`
    FunctionCall {
        /// Called function
        name: String,
        /// Arguments in order
        arguments: Vec<Expression>,
        /// Variable receiving the result
        result_target: Option<String>,
    },

    /// `return <value>`
    FunctionReturn {
        /// Returned value
        value: Expression,
    },
}

/// One condition/body pair of an if chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConditionalBlock {
    /// Branch condition
    pub condition: Expression,
    /// Branch body
    pub body: Vec<Statement>,
}

/// Smallest expression form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Atom {
    /// Numeric literal, kept as written
    Number(String),
    /// String literal contents
    String(String),
    /// `true` / `false`
    Boolean(bool),
    /// Variable reference
    Variable(String),
}

/// Wordy expressions.
///
/// The left operand of a binary expression is always an [`Atom`], which makes
/// operator chains right-associative with no precedence levels:
/// `a plus b multiply c` is `a plus (b multiply c)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Expression {
    /// Literal or variable
    Atom(Atom),
    /// Unary operation
    Unary {
        /// Operator
        operator: UnaryOperator,
        /// Operand
        operand: Box<Expression>,
    },
    /// Binary operation
    Binary {
        /// Left operand
        left: Atom,
        /// Operator
        operator: BinaryOperator,
        /// Right operand
        right: Box<Expression>,
    },
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UnaryOperator {
    /// `not`
    Not,
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BinaryOperator {
    /// `plus`
    Plus,
    /// `minus`
    Minus,
    /// `multiply`
    Multiply,
    /// `divide`
    Divide,
    /// `modulo`
    Modulo,
    /// `and`
    And,
    /// `or`
    Or,
    /// `equal to`
    EqualTo,
    /// `not equal to`
    NotEqualTo,
    /// `greater than`
    GreaterThan,
    /// `greater than or equal to`
    GreaterThanOrEqualTo,
    /// `less than`
    LessThan,
    /// `less than or equal to`
    LessThanOrEqualTo,
}

impl Expression {
    /// Wrap an atom
    pub fn atom(atom: Atom) -> Self {
        Expression::Atom(atom)
    }

    /// Build a `not` expression
    pub fn not(operand: Expression) -> Self {
        Expression::Unary {
            operator: UnaryOperator::Not,
            operand: Box::new(operand),
        }
    }

    /// Build a binary expression
    pub fn binary(left: Atom, operator: BinaryOperator, right: Expression) -> Self {
        Expression::Binary {
            left,
            operator,
            right: Box::new(right),
        }
    }

    /// Whether this expression applies an operator
    pub fn is_operation(&self) -> bool {
        !matches!(self, Expression::Atom(_))
    }
}
