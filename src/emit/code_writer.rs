const INDENT: &str = "    ";

/// Line-based source builder that tracks brace nesting.
#[derive(Default)]
pub struct CodeWriter {
    out: String,
    depth: usize,
}

impl CodeWriter {
    pub fn new() -> CodeWriter {
        CodeWriter {
            out: String::new(),
            depth: 0,
        }
    }

    pub fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }

        self.out.push_str(text);
        self.out.push('\n');
    }

    /// Empty lines carry no indentation.
    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    pub fn enter_scope(&mut self, header: &str) {
        self.line(&format!("{header} {{"));
        self.depth += 1;
    }

    pub fn leave_scope(&mut self) {
        debug_assert!(self.depth > 0, "unbalanced scope");
        self.depth = self.depth.saturating_sub(1);
        self.line("}");
    }

    pub fn finish(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scopes_indent_their_contents() {
        let mut w = CodeWriter::new();

        w.enter_scope("mod a");
        w.enter_scope("fn f()");
        w.line("g();");
        w.leave_scope();
        w.blank();
        w.line("const X: u8 = 1;");
        w.leave_scope();

        assert_eq!(
            w.finish(),
            "mod a {\n    fn f() {\n        g();\n    }\n\n    const X: u8 = 1;\n}\n"
        );
    }
}
