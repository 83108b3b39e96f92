//! A small arithmetic language shared by the unit tests.

use crate::grammar::{GrammarNode as G, GrammarRules, OperatorArity, PrecedenceEntry, RuleOptions};
use crate::{Parser, TokenType, Tokenizer, TokenizerConfig, TokenizerRule};

pub const NUMBER: TokenType = TokenType::new("Number", "A number");
pub const IDENT: TokenType = TokenType::new("Ident", "An identifier");
pub const OPERATOR: TokenType = TokenType::new("Operator", "An operator");
pub const LPAREN: TokenType = TokenType::new("LParen", "Opening parenthesis");
pub const RPAREN: TokenType = TokenType::new("RParen", "Closing parenthesis");
pub const LBRACKET: TokenType = TokenType::new("LBracket", "Opening bracket");
pub const RBRACKET: TokenType = TokenType::new("RBracket", "Closing bracket");

pub fn rule(token_type: TokenType, pattern: &str) -> TokenizerRule {
    TokenizerRule::new(token_type, pattern).expect("test pattern compiles")
}

pub fn arith_rules() -> Vec<TokenizerRule> {
    vec![
        rule(TokenType::NEWLINE, r"\r?\n"),
        rule(TokenType::SPACE, r"[ \t]+"),
        rule(NUMBER, r"\d+(?:\.\d+)?"),
        rule(IDENT, r"[a-zA-Z_][a-zA-Z0-9_]*"),
        rule(OPERATOR, r"//|[-+*/%]"),
        rule(LPAREN, r"\("),
        rule(RPAREN, r"\)"),
        rule(LBRACKET, r"\["),
        rule(RBRACKET, r"\]"),
        rule(TokenType::UNKNOWN, r"."),
    ]
}

pub fn arith_tokenizer() -> Tokenizer {
    Tokenizer::new(TokenizerConfig::default()).with_rules(arith_rules())
}

/// `Script = Expression`, with `* / // %` at 20, `+ -` at 10, prefix `-`
/// and postfix `[...]` indexing.
pub fn arith_grammar() -> GrammarRules {
    let mut grammar = GrammarRules::new();
    grammar
        .define(
            "Script",
            RuleOptions::new().first(),
            vec![G::rule("Expression")],
        )
        .unwrap();
    grammar
        .define(
            "Expression",
            RuleOptions::new().ast().operator_precedence(),
            vec![
                G::rule("Operand"),
                G::zero_or_more(vec![G::rule("BinaryOp")]),
            ],
        )
        .unwrap();
    grammar
        .define(
            "BinaryOp",
            RuleOptions::new(),
            vec![
                G::token_values(OPERATOR, ["+", "-", "*", "/", "//", "%"]),
                G::rule("Operand"),
            ],
        )
        .unwrap();
    grammar
        .define(
            "Operand",
            RuleOptions::new(),
            vec![
                G::zero_or_more(vec![G::token_values(OPERATOR, ["-"])]),
                G::one_of(vec![G::token(NUMBER), G::token(IDENT), G::rule("Group")]),
                G::zero_or_more(vec![G::rule("Index")]),
            ],
        )
        .unwrap();
    grammar
        .define(
            "Group",
            RuleOptions::new(),
            vec![
                G::token(LPAREN).hidden(),
                G::rule("Expression"),
                G::token(RPAREN).hidden(),
            ],
        )
        .unwrap();
    grammar
        .define(
            "Index",
            RuleOptions::new().ast(),
            vec![
                G::token(LBRACKET).hidden(),
                G::rule("Expression"),
                G::token(RBRACKET).hidden(),
            ],
        )
        .unwrap();

    grammar.set_operator_precedence(vec![
        PrecedenceEntry::token(90, OperatorArity::Unary).of_type(OPERATOR).values(["-"]),
        PrecedenceEntry::item(80, OperatorArity::Index).values(["Index"]),
        PrecedenceEntry::token(20, OperatorArity::Binary)
            .of_type(OPERATOR)
            .values(["*", "/", "//", "%"]),
        PrecedenceEntry::token(10, OperatorArity::Binary).of_type(OPERATOR).values(["+", "-"]),
    ]);
    grammar
}

pub fn arith_parser() -> Parser {
    let mut parser = Parser::new(arith_tokenizer(), arith_grammar());
    parser.set_ignored([TokenType::SPACE, TokenType::NEWLINE]);
    parser
}
