/// Walks a raw segment, resolving backslash escapes the way the tokenizer
/// does. Each character is paired with whether it is structural: outside any
/// quotes and not escaped. Quote delimiters are kept but never structural.
fn scan(segment: &str) -> Vec<(char, bool)> {
    let mut out: Vec<(char, bool)> = Vec::with_capacity(segment.len());
    let mut quote: Option<char> = None;
    let mut it = segment.chars().peekable();

    while let Some(ch) = it.next() {
        match (quote, ch) {
            (Some('"'), '\\') => match it.peek() {
                Some(&c @ ('"' | '\\' | '$' | '`')) => {
                    it.next();
                    out.push((c, false));
                }
                _ => out.push((ch, false)),
            },
            (None, '\\') => out.push((it.next().unwrap_or(ch), false)),
            (Some(q), c) if c == q => {
                quote = None;
                out.push((c, false));
            }
            (Some(_), c) => out.push((c, false)),
            (None, '"' | '\'') => {
                quote = Some(ch);
                out.push((ch, false));
            }
            (None, c) => out.push((c, true)),
        }
    }
    out
}

/// Splits a comma-separated value list. Commas inside a matched pair of
/// quotes do not split, and the quotes themselves are kept on the piece.
pub(super) fn split_values(segment: &str) -> Vec<String> {
    let mut parts: Vec<String> = Vec::new();
    let mut current = String::new();

    for (ch, structural) in scan(segment) {
        if structural && ch == ',' {
            push_piece(&mut parts, &mut current);
        } else {
            current.push(ch);
        }
    }
    push_piece(&mut parts, &mut current);
    parts
}

/// Splits a SET list into `col = value` pieces. A comma only ends an
/// assignment when the text after it reads `<identifier> =`; any other comma
/// belongs to the current value.
pub(super) fn split_assignments(segment: &str) -> Vec<String> {
    let scanned = scan(segment);
    let mut parts: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut saw_equal = false;

    for (i, &(ch, structural)) in scanned.iter().enumerate() {
        match ch {
            '=' if structural => {
                saw_equal = true;
                current.push(ch);
            }
            ',' if structural && saw_equal && starts_assignment(&scanned[i + 1..]) => {
                push_piece(&mut parts, &mut current);
                saw_equal = false;
            }
            _ => current.push(ch),
        }
    }
    push_piece(&mut parts, &mut current);
    parts
}

fn starts_assignment(rest: &[(char, bool)]) -> bool {
    let skip = rest.iter().take_while(|(c, _)| c.is_whitespace()).count();
    let rest = &rest[skip..];
    let ident = rest
        .iter()
        .take_while(|(c, structural)| *structural && (c.is_alphanumeric() || *c == '_'))
        .count();
    if ident == 0 {
        return false;
    }
    rest[ident..]
        .iter()
        .find(|(c, _)| !c.is_whitespace())
        .is_some_and(|&(c, structural)| structural && c == '=')
}

fn push_piece(parts: &mut Vec<String>, current: &mut String) {
    let piece = current.trim();
    if !piece.is_empty() {
        parts.push(piece.to_string());
    }
    current.clear();
}
