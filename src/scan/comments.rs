/// Remove `//` line comments: everything from the first `//` to end of line.
///
/// Line structure is preserved so match line numbers in the stripped text map
/// directly onto the staged content. There is no string-literal or
/// block-comment awareness — `/* ... */` spans survive intact and can still
/// match downstream. That asymmetry is deliberate, inherited from the shell
/// pipeline this replaces.
pub fn strip_line_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        match line.find("//") {
            Some(pos) => out.push_str(&line[..pos]),
            None => out.push_str(line),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_full_line_comment() {
        assert_eq!(strip_line_comments("// var_dump($x);"), "");
    }

    #[test]
    fn keeps_code_before_comment() {
        assert_eq!(strip_line_comments("$a = 1; // set a"), "$a = 1; ");
    }

    #[test]
    fn untouched_without_comment() {
        assert_eq!(strip_line_comments("$a = 1;"), "$a = 1;");
    }

    #[test]
    fn preserves_line_count() {
        let text = "one\n// two\nthree\n";
        let stripped = strip_line_comments(text);
        assert_eq!(stripped.split('\n').count(), text.split('\n').count());
        assert_eq!(stripped, "one\n\nthree\n");
    }

    #[test]
    fn block_comments_survive() {
        // Only line comments are stripped; this is inherited behavior.
        assert_eq!(
            strip_line_comments("/* var_dump($x); */"),
            "/* var_dump($x); */"
        );
    }

    #[test]
    fn protocol_slashes_are_stripped_too() {
        // "//" inside a string still truncates the line. Inherited behavior:
        // stripping only ever removes text, so it cannot create matches.
        assert_eq!(
            strip_line_comments("$url = 'https://example.com';"),
            "$url = 'https:"
        );
    }
}
