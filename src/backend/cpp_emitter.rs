//! C++ code emitter - builds well-formed program text
//!
//! A thin buffer with indentation tracking; the harness generator drives it
//! statement by statement so synthesized programs are byte-deterministic.

/// A buffer for building C++ source code with proper indentation
#[derive(Debug, Default)]
pub struct CppEmitter {
    buffer: String,
    indent_level: usize,
}

const INDENT: &str = "    ";

impl CppEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit one line at the current indentation level.
    pub fn line(&mut self, line: &str) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
        self.buffer.push_str(line);
        self.buffer.push('\n');
    }

    /// Emit an empty line.
    pub fn blank(&mut self) {
        self.buffer.push('\n');
    }

    /// Emit a block of text verbatim, unindented, ensuring it ends with a
    /// newline. Used for the user fragment, which must survive byte-for-byte.
    pub fn raw_block(&mut self, block: &str) {
        self.buffer.push_str(block);
        if !block.ends_with('\n') {
            self.buffer.push('\n');
        }
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    pub fn finish(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indentation_tracks_blocks() {
        let mut e = CppEmitter::new();
        e.line("int main() {");
        e.indent();
        e.line("return 0;");
        e.dedent();
        e.line("}");
        assert_eq!(e.finish(), "int main() {\n    return 0;\n}\n");
    }

    #[test]
    fn raw_block_preserves_text_and_ensures_newline() {
        let mut e = CppEmitter::new();
        e.raw_block("int f();");
        e.line("int main() {}");
        assert_eq!(e.finish(), "int f();\nint main() {}\n");
    }

    #[test]
    fn dedent_saturates_at_zero() {
        let mut e = CppEmitter::new();
        e.dedent();
        e.line("x;");
        assert_eq!(e.finish(), "x;\n");
    }
}
