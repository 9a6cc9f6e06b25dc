use std::fmt::Write;

/// Sanitize a line for use inside a Javadoc block
///
/// A literal `*/` would close the comment early; `@` at the start of a line would be read
/// as a block tag.
pub fn sanitize_doc_line(line: &str) -> String {
    let mut result = String::new();
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '*' if chars.peek() == Some(&'/') => {
                result.push_str("*&#47;");
                chars.next();
            }
            '@' if result.trim().is_empty() => result.push_str("{@literal @}"),
            _ => result.push(ch),
        }
    }

    result
}

/// Write a Javadoc block for `text` at the given indentation
///
/// Blank lines inside the text are kept as paragraph breaks; leading and trailing blank
/// lines are dropped. Nothing is written when the text is blank.
pub fn write_javadoc(buf: &mut String, text: &str, indent: &str) -> std::fmt::Result {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    let Some(first) = lines.iter().position(|l| !l.is_empty()) else {
        return Ok(());
    };
    let last = lines.iter().rposition(|l| !l.is_empty()).unwrap_or(first);

    writeln!(buf, "{}/**", indent)?;
    for line in &lines[first..=last] {
        if line.is_empty() {
            writeln!(buf, "{} *", indent)?;
        } else {
            writeln!(buf, "{} * {}", indent, sanitize_doc_line(line))?;
        }
    }
    writeln!(buf, "{} */", indent)
}
