use crate::error::DbError;

/// A shell word together with where it started in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// Byte offset of the token's first character in the input line.
    pub start: usize,
    /// Set when any part of the word was quoted or escaped.
    pub quoted: bool,
}

/// Splits `input` into words using POSIX shell rules: whitespace separates
/// words, single quotes are literal, double quotes honour `\"`, `\\`, `\$`
/// and `` \` ``, and a backslash outside quotes escapes the next character.
/// Adjacent quoted and unquoted segments form a single word.
pub fn tokenize(input: &str) -> Result<Vec<Token>, DbError> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut current = String::new();
    let mut start: Option<usize> = None;
    let mut quoted = false;

    let mut it = input.char_indices().peekable();

    while let Some((pos, ch)) = it.next() {
        match ch {
            c if c.is_whitespace() => {
                if let Some(s) = start.take() {
                    tokens.push(Token {
                        text: std::mem::take(&mut current),
                        start: s,
                        quoted,
                    });
                    quoted = false;
                }
            }

            '\'' => {
                start.get_or_insert(pos);
                quoted = true;
                loop {
                    match it.next() {
                        Some((_, '\'')) => break,
                        Some((_, c)) => current.push(c),
                        None => return Err(DbError::Parse("no closing quotation".to_string())),
                    }
                }
            }

            '"' => {
                start.get_or_insert(pos);
                quoted = true;
                loop {
                    match it.next() {
                        Some((_, '"')) => break,
                        Some((_, '\\')) => match it.peek().map(|&(_, c)| c) {
                            Some(c @ ('"' | '\\' | '$' | '`')) => {
                                it.next();
                                current.push(c);
                            }
                            Some('\n') => {
                                it.next();
                            }
                            _ => current.push('\\'),
                        },
                        Some((_, c)) => current.push(c),
                        None => return Err(DbError::Parse("no closing quotation".to_string())),
                    }
                }
            }

            '\\' => {
                start.get_or_insert(pos);
                quoted = true;
                match it.next() {
                    Some((_, '\n')) => {}
                    Some((_, c)) => current.push(c),
                    None => return Err(DbError::Parse("no escaped character".to_string())),
                }
            }

            c => {
                start.get_or_insert(pos);
                current.push(c);
            }
        }
    }

    if let Some(s) = start {
        tokens.push(Token {
            text: current,
            start: s,
            quoted,
        });
    }

    Ok(tokens)
}
