use std::sync::Once;

use tracing::{debug, info};

use crate::highlight::{Language, Token, TokenKind, Tokenizer, builtin_grammar};


fn setup_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

/// Tokenize `line` and check the structural guarantees every grammar gives.
fn tokenize(language: Language, line: &str) -> Vec<Token> {
    setup_test_logging();
    info!(?language, case = line, "tokenizing");
    let tokens = builtin_grammar(language).tokenize(line);
    debug!(?tokens, "tokenization result");

    let mut last_end = 0usize;
    for token in &tokens {
        assert!(token.start < token.end, "empty token {token:?}");
        assert!(token.end <= line.len(), "token exceeds line length");
        assert!(token.start >= last_end, "token overlaps previous token");
        assert_eq!(token.language, language);
        last_end = token.end;
    }
    tokens
}

/// Text of every token of `kind`, in order.
fn texts<'a>(tokens: &[Token], line: &'a str, kind: TokenKind) -> Vec<&'a str> {
    tokens
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.text(line))
        .collect()
}

/// Kind of the token whose text is exactly `text`.
fn kind_of(tokens: &[Token], line: &str, text: &str) -> Option<TokenKind> {
    tokens.iter().find(|t| t.text(line) == text).map(|t| t.kind)
}
