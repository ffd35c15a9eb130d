use syntax::lexer::*;

fn kinds(input: &str) -> Vec<TokenKind> {
    let mut lexer = Lexer::new(input);
    let mut kinds = Vec::new();

    loop {
        let token = lexer.token().unwrap();
        kinds.push(token.kind());
        if token.kind() == TokenKind::Eof {
            return kinds;
        }
    }
}

#[test]
fn lexer_empty() {
    let mut lexer = Lexer::new("");
    assert!(lexer.is_empty());
    assert_eq!(lexer.token().unwrap().kind(), TokenKind::Eof);
}

#[test]
fn lexer_whitespace_only() {
    let mut lexer = Lexer::new("  \t\r\n   ");
    assert_eq!(lexer.token().unwrap().kind(), TokenKind::Eof);
}

#[test]
fn lexer_ends_with_one_eof() {
    assert_eq!(
        kinds("1 + 2"),
        vec![
            TokenKind::Int,
            TokenKind::Plus,
            TokenKind::Int,
            TokenKind::Eof
        ]
    );
}

#[test]
fn lexer_eof_is_sticky() {
    let mut lexer = Lexer::new("7");
    assert_eq!(lexer.token().unwrap().kind(), TokenKind::Int);
    assert_eq!(lexer.token().unwrap().kind(), TokenKind::Eof);
    assert_eq!(lexer.token().unwrap().kind(), TokenKind::Eof);
}

#[test]
fn lexer_operators() {
    assert_eq!(
        kinds("+ - * / ( )"),
        vec![
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Open,
            TokenKind::Close,
            TokenKind::Eof
        ]
    );
}

#[test]
fn lexer_no_space_needed() {
    assert_eq!(
        kinds("(1+2)*3"),
        vec![
            TokenKind::Open,
            TokenKind::Int,
            TokenKind::Plus,
            TokenKind::Int,
            TokenKind::Close,
            TokenKind::Star,
            TokenKind::Int,
            TokenKind::Eof
        ]
    );
}

#[test]
fn lexer_token_spans() {
    let mut lexer = Lexer::new("  12 + 3.5");

    let twelve = lexer.token().unwrap();
    assert_eq!(twelve.body(), "12");
    assert_eq!(twelve.span().byte_range(), 2..4);

    let plus = lexer.token().unwrap();
    assert_eq!(plus.span().byte_range(), 5..6);

    let float = lexer.token().unwrap();
    assert_eq!(float.kind(), TokenKind::Float);
    assert_eq!(float.body(), "3.5");
    assert_eq!(float.span().byte_range(), 7..10);
}

#[test]
fn lexer_error_position() {
    let mut lexer = Lexer::new("1 + $");
    assert!(lexer.token().is_ok());
    assert!(lexer.token().is_ok());

    match lexer.token() {
        Err(Error::UnexpectedCharacter(location, c)) => {
            assert_eq!(c, '$');
            assert_eq!(location.offset(), 4);
        }
        other => panic!("expected an unexpected-character error, got {other:?}"),
    }
}

#[test]
fn lexer_is_restartable() {
    let input = "1 + 2";
    let first = kinds(input);
    let second = kinds(input);
    assert_eq!(first, second);
}
