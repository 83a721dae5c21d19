use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

lazy_static! {
    pub static ref KEYWORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("int");
        set.insert("float");
        set.insert("double");
        set.insert("char");
        set.insert("void");
        set.insert("if");
        set.insert("else");
        set.insert("while");
        set.insert("for");
        set.insert("return");
        set.insert("break");
        set.insert("continue");
        set.insert("switch");
        set.insert("case");
        set.insert("default");
        set.insert("struct");
        set.insert("class");
        set.insert("public");
        set.insert("private");
        set.insert("protected");
        set.insert("try");
        set.insert("catch");
        set.insert("throw");
        set.insert("new");
        set.insert("delete");
        set.insert("const");
        set.insert("static");
        set.insert("volatile");
        set.insert("sizeof");
        set.insert("namespace");
        set.insert("true");
        set.insert("false");
        set.insert("inline");
        set
    };
}

pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(word)
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    Number,
    Operator,
    Keyword,
    String,
    Parenthesis,
    Ending,      // ;
    EndOfInput,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::String => "STRING",
            TokenKind::Parenthesis => "PARENTHESIS",
            TokenKind::Ending => "ENDING",
            TokenKind::EndOfInput => "END_OF_INPUT",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token Type: {}, Value: {}", self.kind, self.value)
    }
}

impl Token {
    pub fn end_of_input() -> Self {
        Token {
            kind: TokenKind::EndOfInput,
            value: String::new(),
        }
    }

    pub fn is_end_of_input(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}
