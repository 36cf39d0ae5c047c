//! Harness generator - wraps a user fragment into a complete program
//!
//! Synthesis is pure and deterministic: identical `(code, signals, literal)`
//! inputs always produce byte-identical program text. The program is the
//! fixed prelude, the fragment verbatim, and a `main` that declares the
//! literal, invokes the detected routine, and serializes the result to
//! standard output in canonical form.

use crate::backend::cpp_emitter::CppEmitter;
use crate::frontend::fragment::{FragmentSignals, Invocation};
use crate::frontend::literal::Literal;

/// Complete program text, immutable once generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedProgram(String);

impl SynthesizedProgram {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SynthesizedProgram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Synthesize a complete C++ program around `code` for one test case.
pub fn synthesize(code: &str, signals: &FragmentSignals, literal: &Literal) -> SynthesizedProgram {
    let mut e = CppEmitter::new();

    e.line("#include <iostream>");
    e.line("#include <vector>");
    e.line("#include <string>");
    e.line("using namespace std;");
    e.blank();
    e.raw_block(code);
    e.blank();

    e.line("int main() {");
    e.indent();
    for decl in literal.declarations() {
        e.line(&decl);
    }

    let var = literal.var_name();
    match &signals.invocation {
        Invocation::Method { class_name, routine } => {
            e.line(&format!("{class_name}().{routine}({var});"));
        }
        Invocation::Search => {
            if signals.returns_void {
                e.line("search(nums, target);");
            } else {
                e.line("auto result = search(nums, target);");
            }
        }
        Invocation::Free { routine } => {
            if signals.returns_void {
                e.line(&format!("{routine}({var});"));
            } else {
                e.line(&format!("auto result = {routine}({var});"));
            }
        }
    }

    if signals.returns_void {
        emit_array_print(&mut e, var, literal.is_char_array());
    } else {
        e.line("cout << result;");
    }

    e.line("return 0;");
    e.dedent();
    e.line("}");

    SynthesizedProgram(e.finish())
}

/// Print the post-mutation array as a bracketed, comma-separated sequence:
/// `["o","l","l","e","h"]` for characters, `[1,2,3]` for integers. No
/// trailing comma, no trailing newline beyond the runtime's own buffering.
fn emit_array_print(e: &mut CppEmitter, var: &str, quoted: bool) {
    e.line(r#"cout << "[";"#);
    e.line(&format!("for (size_t i = 0; i < {var}.size(); i++) {{"));
    e.indent();
    e.line(r#"if (i > 0) cout << ",";"#);
    if quoted {
        e.line(&format!(r#"cout << "\"" << {var}[i] << "\"";"#));
    } else {
        e.line(&format!("cout << {var}[i];"));
    }
    e.dedent();
    e.line("}");
    e.line(r#"cout << "]";"#);
}
