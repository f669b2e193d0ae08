//! Token kinds and the phrase table they are matched against

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Lexical categories of the Wordy language.
///
/// Every kind except [`TokenKind::EndOfInput`] is recognised through a phrase
/// pattern in a [`RuleTable`]. Names, numbers and string literals are not token
/// kinds; they are pulled out as raw text by the matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    /// `,`
    Comma,
    /// `plus`
    Plus,
    /// `and`
    And,
    /// `as`
    As,
    /// `boolean`
    VariableTypeBoolean,
    /// `but if`
    ButIf,
    /// `by`
    By,
    /// `call function`
    FunctionCall,
    /// `decrease`
    Decrease,
    /// `define function`
    FunctionDeclaration,
    /// `define variable`
    VariableDeclaration,
    /// `divide`
    Divide,
    /// `do`
    Do,
    /// `end of for`
    EndOfFor,
    /// `end of function`
    EndOfFunction,
    /// `end of if`
    EndOfIf,
    /// `end of while`
    EndOfWhile,
    /// `equal to`
    EqualTo,
    /// `false`
    BooleanValueFalse,
    /// `for`
    For,
    /// `from`
    From,
    /// `greater than or equal to`
    GreaterThanOrEqualTo,
    /// `greater than`
    GreaterThan,
    /// `if`
    If,
    /// `increase`
    Increase,
    /// `initialized to`
    InitializedTo,
    /// `less than or equal to`
    LessThanOrEqualTo,
    /// `less than`
    LessThan,
    /// `minus`
    Minus,
    /// `modulo`
    Modulo,
    /// `multiply`
    Multiply,
    /// `mutable`
    Mutable,
    /// `not equal to`
    NotEqualTo,
    /// `not`
    Not,
    /// `number`
    VariableTypeNumber,
    /// `or`
    Or,
    /// `otherwise`
    Otherwise,
    /// `print`
    Print,
    /// `return`
    Return,
    /// `set`
    Set,
    /// `string`
    VariableTypeString,
    /// `that return`
    ThatReturn,
    /// `then put result into`
    ThenPutResultInto,
    /// `to`
    To,
    /// `to be`
    ToBe,
    /// `true`
    BooleanValueTrue,
    /// `while`
    While,
    /// `with param`
    WithParam,
    /// `with arg`
    WithArg,
    /// Nothing but whitespace remains
    EndOfInput,
}

/// Pairs a token kind with the phrase that spells it.
///
/// Patterns are lowercase, trimmed, and use a single space between words.
/// Each space stands for one or more whitespace characters in source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchingRule {
    /// Token kind produced by the match
    pub kind: TokenKind,
    /// Phrase pattern
    pub pattern: &'static str,
}

const fn rule(pattern: &'static str, kind: TokenKind) -> MatchingRule {
    MatchingRule { kind, pattern }
}

/// The standard Wordy keyword table
pub const MATCHING_RULES: &[MatchingRule] = &[
    rule(",", TokenKind::Comma),
    rule("plus", TokenKind::Plus),
    rule("and", TokenKind::And),
    rule("as", TokenKind::As),
    rule("boolean", TokenKind::VariableTypeBoolean),
    rule("but if", TokenKind::ButIf),
    rule("by", TokenKind::By),
    rule("call function", TokenKind::FunctionCall),
    rule("decrease", TokenKind::Decrease),
    rule("define function", TokenKind::FunctionDeclaration),
    rule("define variable", TokenKind::VariableDeclaration),
    rule("divide", TokenKind::Divide),
    rule("do", TokenKind::Do),
    rule("end of for", TokenKind::EndOfFor),
    rule("end of function", TokenKind::EndOfFunction),
    rule("end of if", TokenKind::EndOfIf),
    rule("end of while", TokenKind::EndOfWhile),
    rule("equal to", TokenKind::EqualTo),
    rule("false", TokenKind::BooleanValueFalse),
    rule("for", TokenKind::For),
    rule("from", TokenKind::From),
    rule("greater than or equal to", TokenKind::GreaterThanOrEqualTo),
    rule("greater than", TokenKind::GreaterThan),
    rule("if", TokenKind::If),
    rule("increase", TokenKind::Increase),
    rule("initialized to", TokenKind::InitializedTo),
    rule("less than or equal to", TokenKind::LessThanOrEqualTo),
    rule("less than", TokenKind::LessThan),
    rule("minus", TokenKind::Minus),
    rule("modulo", TokenKind::Modulo),
    rule("multiply", TokenKind::Multiply),
    rule("mutable", TokenKind::Mutable),
    rule("not equal to", TokenKind::NotEqualTo),
    rule("not", TokenKind::Not),
    rule("number", TokenKind::VariableTypeNumber),
    rule("or", TokenKind::Or),
    rule("otherwise", TokenKind::Otherwise),
    rule("print", TokenKind::Print),
    rule("return", TokenKind::Return),
    rule("set", TokenKind::Set),
    rule("string", TokenKind::VariableTypeString),
    rule("that return", TokenKind::ThatReturn),
    rule("then put result into", TokenKind::ThenPutResultInto),
    rule("to", TokenKind::To),
    rule("to be", TokenKind::ToBe),
    rule("true", TokenKind::BooleanValueTrue),
    rule("while", TokenKind::While),
    rule("with param", TokenKind::WithParam),
    rule("with arg", TokenKind::WithArg),
];

/// Surface form reported for [`TokenKind::EndOfInput`] in diagnostics
pub const END_OF_INPUT_SURFACE: &str = "(EOF)";

/// The standard table, built once
pub static STANDARD_RULES: Lazy<RuleTable> = Lazy::new(|| RuleTable::new(MATCHING_RULES));

/// Immutable, ordered collection of matching rules handed to the matcher.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<MatchingRule>,
    patterns: HashMap<TokenKind, &'static str>,
}

impl RuleTable {
    /// Build a table from rules; order is preserved
    pub fn new(rules: &[MatchingRule]) -> Self {
        let patterns = rules.iter().map(|r| (r.kind, r.pattern)).collect();
        Self {
            rules: rules.to_vec(),
            patterns,
        }
    }

    /// The rules in table order
    pub fn rules(&self) -> &[MatchingRule] {
        &self.rules
    }

    /// Pattern registered for `kind`, if any
    pub fn pattern(&self, kind: TokenKind) -> Option<&'static str> {
        self.patterns.get(&kind).copied()
    }

    /// Whether `word` spells a whole pattern, ignoring case
    pub fn is_reserved(&self, word: &str) -> bool {
        let lowered = word.to_lowercase();
        self.rules.iter().any(|r| r.pattern == lowered)
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        STANDARD_RULES.clone()
    }
}
