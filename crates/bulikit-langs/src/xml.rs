//! `xml`: tokenizer-only markup highlighting.

use bulikit_lib::{TokenType, TokenizerRule};

use crate::LanguageDef;

pub const STRING: TokenType = TokenType::new("String", "A string value");
pub const MARKUP: TokenType = TokenType::new("Markup", "An XML markup");
pub const ATTRIBUTE: TokenType = TokenType::new("Attribute", "A node attribute");
pub const SET_ATTRIBUTE: TokenType = TokenType::new("=", "Set attribute");
pub const NUMBER: TokenType = TokenType::new("Number", "A number value");
pub const CDATA: TokenType = TokenType::new("Data", "A CDATA section");
pub const VALUE: TokenType = TokenType::new("Value", "A text value");

pub fn define(def: LanguageDef) -> LanguageDef {
    def.with_description("XML markup (tokens only)")
        .with_rules(rules)
}

pub fn rules() -> Vec<TokenizerRule> {
    vec![
        TokenizerRule::builder(TokenType::COMMENT, r"<!--(?s:.*?)-->").build_lenient(),
        TokenizerRule::builder(CDATA, r"<!\[CDATA\[(?s:.*?)\]\]>").build_lenient(),
        TokenizerRule::builder(STRING, r#""[^"\\]*(?:\\.[^"\\]*)*""#).build_lenient(),
        TokenizerRule::builder(STRING, r"'[^'\\]*(?:\\.[^'\\]*)*'").build_lenient(),
        TokenizerRule::builder(MARKUP, r"<[a-z][a-z0-9_-]*|<\?xml|<!DOCTYPE").build_lenient(),
        TokenizerRule::builder(MARKUP, r"</[a-z][a-z0-9_-]*>").build_lenient(),
        TokenizerRule::builder(MARKUP, r"/?>|\?>").build_lenient(),
        TokenizerRule::builder(ATTRIBUTE, r"\s[a-z][a-z0-9_:-]*").build_lenient(),
        TokenizerRule::builder(SET_ATTRIBUTE, r"=").build_lenient(),
        TokenizerRule::builder(NUMBER, r"-?\d+").build_lenient(),
        TokenizerRule::builder(TokenType::NEWLINE, r"\r?\n").build_lenient(),
        TokenizerRule::builder(TokenType::SPACE, r"\s+").build_lenient(),
        TokenizerRule::builder(VALUE, r"[^<>]+").build_lenient(),
    ]
}
