//! `calc`: a line-oriented script language.
//!
//! ```text
//! # comment
//! set total = (price + tax) * 2
//! print total >= 10 and not done
//! print items[0]
//! ```
//!
//! Statements are separated by newlines. Expressions use the usual
//! precedence: `* / // %` over `+ -` over comparisons over `and` over `or`;
//! prefix `-`/`not` and postfix indexing bind tightest.

use bulikit_lib::grammar::{GrammarNode as G, GrammarRules, OperatorArity, PrecedenceEntry, RuleOptions};
use bulikit_lib::{Completion, ConfigError, TokenType, TokenizerRule};

use crate::LanguageDef;

pub const NUMBER: TokenType = TokenType::new("Number", "A number");
pub const STRING: TokenType = TokenType::new("String", "A string literal");
pub const IDENT: TokenType = TokenType::new("Identifier", "A variable name");
pub const KEYWORD: TokenType = TokenType::new("Keyword", "A reserved word");
pub const OPERATOR: TokenType = TokenType::new("Operator", "An operator");
pub const ASSIGN: TokenType = TokenType::new("Assign", "Assignment");
pub const LPAREN: TokenType = TokenType::new("LParen", "Opening parenthesis");
pub const RPAREN: TokenType = TokenType::new("RParen", "Closing parenthesis");
pub const LBRACKET: TokenType = TokenType::new("LBracket", "Opening bracket");
pub const RBRACKET: TokenType = TokenType::new("RBracket", "Closing bracket");

const MULTIPLICATIVE: [&str; 4] = ["*", "/", "//", "%"];
const ADDITIVE: [&str; 2] = ["+", "-"];
const COMPARISON: [&str; 6] = ["<", "<=", ">", ">=", "==", "!="];

pub fn define(def: LanguageDef) -> LanguageDef {
    def.with_description("Line-oriented arithmetic script")
        .with_rules(rules)
        .with_grammar(grammar)
        .with_ignored(&[TokenType::SPACE, TokenType::COMMENT])
}

fn keyword(word: &str, description: &str) -> Completion {
    Completion::new(word).with_description(description)
}

pub fn rules() -> Vec<TokenizerRule> {
    vec![
        TokenizerRule::builder(TokenType::NEWLINE, r"\r?\n").build_lenient(),
        TokenizerRule::builder(TokenType::SPACE, r"[ \t]+").build_lenient(),
        TokenizerRule::builder(TokenType::COMMENT, r"#[^\n]*")
            .description("Comment, up to the end of the line")
            .build_lenient(),
        TokenizerRule::builder(NUMBER, r"\d+(?:\.\d+)?").build_lenient(),
        TokenizerRule::builder(STRING, r#""(?:[^"\\\n]|\\.)*""#).build_lenient(),
        TokenizerRule::builder(KEYWORD, r"(?:set|print|and|or|not)\b")
            .description("Statement keyword or logical operator")
            .completions([
                keyword("set\x01 ${name} = ${value}", "Assign a value to a variable"),
                keyword("print\x01 ${value}", "Print a value"),
                keyword("and", "Logical and"),
                keyword("or", "Logical or"),
                keyword("not", "Logical negation"),
            ])
            .build_lenient(),
        TokenizerRule::builder(IDENT, r"[a-z_][a-z0-9_]*").build_lenient(),
        TokenizerRule::builder(OPERATOR, r"//|<=|>=|==|!=|[-+*/%<>]").build_lenient(),
        TokenizerRule::builder(ASSIGN, r"=").build_lenient(),
        TokenizerRule::builder(LPAREN, r"\(").build_lenient(),
        TokenizerRule::builder(RPAREN, r"\)").build_lenient(),
        TokenizerRule::builder(LBRACKET, r"\[").build_lenient(),
        TokenizerRule::builder(RBRACKET, r"\]").build_lenient(),
        TokenizerRule::builder(TokenType::UNKNOWN, r".").build_lenient(),
    ]
}

pub fn grammar() -> Result<GrammarRules, ConfigError> {
    let newline = || G::token(TokenType::NEWLINE).hidden();
    let mut grammar = GrammarRules::new();

    grammar.define(
        "Script",
        RuleOptions::new().first(),
        vec![
            G::zero_or_more(vec![newline()]),
            G::optional(vec![G::rule("Body")]),
        ],
    )?;
    grammar.define(
        "Body",
        RuleOptions::new(),
        vec![
            G::rule("Statement"),
            G::zero_or_more(vec![G::rule("NextStatement")]),
        ],
    )?;
    grammar.define(
        "NextStatement",
        RuleOptions::new(),
        vec![
            G::one_or_more(vec![newline()]),
            G::optional(vec![G::rule("Statement")]),
        ],
    )?;
    grammar.define(
        "Statement",
        RuleOptions::new(),
        vec![G::one_of(vec![G::rule("Assignment"), G::rule("Print")])],
    )?;
    grammar.define(
        "Assignment",
        RuleOptions::new().ast(),
        vec![
            G::token_values(KEYWORD, ["set"]).hidden(),
            G::token(IDENT),
            G::token(ASSIGN).hidden(),
            G::rule("Expression"),
        ],
    )?;
    grammar.define(
        "Print",
        RuleOptions::new().ast(),
        vec![
            G::token_values(KEYWORD, ["print"]).hidden(),
            G::rule("Expression"),
        ],
    )?;
    grammar.define(
        "Expression",
        RuleOptions::new().ast().operator_precedence(),
        vec![
            G::rule("Operand"),
            G::zero_or_more(vec![G::rule("BinaryOp")]),
        ],
    )?;
    grammar.define(
        "BinaryOp",
        RuleOptions::new(),
        vec![
            G::one_of(vec![
                G::token_values(
                    OPERATOR,
                    MULTIPLICATIVE.into_iter().chain(ADDITIVE).chain(COMPARISON),
                ),
                G::token_values(KEYWORD, ["and", "or"]),
            ]),
            G::rule("Operand"),
        ],
    )?;
    grammar.define(
        "Operand",
        RuleOptions::new(),
        vec![
            G::zero_or_more(vec![
                G::token_values(OPERATOR, ["-"]),
                G::token_values(KEYWORD, ["not"]),
            ]),
            G::one_of(vec![
                G::token(NUMBER),
                G::token(STRING),
                G::token(IDENT),
                G::rule("Group"),
            ]),
            G::zero_or_more(vec![G::rule("Index")]),
        ],
    )?;
    grammar.define(
        "Group",
        RuleOptions::new(),
        vec![
            G::token(LPAREN).hidden(),
            G::rule("Expression"),
            G::token(RPAREN).hidden(),
        ],
    )?;
    // `a [0]` is not an index
    grammar.define(
        "Index",
        RuleOptions::new().ast().not_preceded_by_space(),
        vec![
            G::token(LBRACKET).hidden(),
            G::rule("Expression"),
            G::token(RBRACKET).hidden(),
        ],
    )?;

    grammar.set_operator_precedence([
        PrecedenceEntry::token(90, OperatorArity::Unary).of_type(OPERATOR).values(["-"]),
        PrecedenceEntry::token(90, OperatorArity::Unary).of_type(KEYWORD).values(["not"]),
        PrecedenceEntry::item(80, OperatorArity::Index).values(["Index"]),
        PrecedenceEntry::token(20, OperatorArity::Binary).of_type(OPERATOR).values(MULTIPLICATIVE),
        PrecedenceEntry::token(10, OperatorArity::Binary).of_type(OPERATOR).values(ADDITIVE),
        PrecedenceEntry::token(5, OperatorArity::Binary).of_type(OPERATOR).values(COMPARISON),
        PrecedenceEntry::token(3, OperatorArity::Binary).of_type(KEYWORD).values(["and"]),
        PrecedenceEntry::token(2, OperatorArity::Binary).of_type(KEYWORD).values(["or"]),
    ]);
    Ok(grammar)
}
