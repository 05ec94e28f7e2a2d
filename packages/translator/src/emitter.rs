//! Structured writer
//!
//! Indentation-tracked output buffer for the skeleton renderer. Lines are
//! composed of ordered fragments and joined at the end; blocks, blank-line
//! separation, and labeled section headers are the only formatting
//! primitives. The writer knows nothing about the class model.

const INDENT_WITH: &str = "  ";

#[derive(Debug, Clone)]
struct EmittedLine {
    parts: Vec<String>,
    indent: usize,
}

impl EmittedLine {
    fn new(indent: usize) -> Self {
        EmittedLine {
            parts: Vec::new(),
            indent,
        }
    }
}

pub struct SkeletonWriter {
    lines: Vec<EmittedLine>,
    indent: usize,
}

impl SkeletonWriter {
    pub fn new() -> Self {
        SkeletonWriter {
            lines: vec![EmittedLine::new(0)],
            indent: 0,
        }
    }

    fn current_line_mut(&mut self) -> &mut EmittedLine {
        // The constructor and every line break leave at least one line.
        self.lines.last_mut().expect("writer always has a line")
    }

    pub fn line_is_empty(&self) -> bool {
        self.lines.last().map(|l| l.parts.is_empty()).unwrap_or(true)
    }

    pub fn print(&mut self, part: &str, new_line: bool) {
        if !part.is_empty() {
            self.current_line_mut().parts.push(part.to_string());
        }
        if new_line {
            self.lines.push(EmittedLine::new(self.indent));
        }
    }

    pub fn println(&mut self, last_part: &str) {
        self.print(last_part, true);
    }

    /// Separate what follows from what precedes by a single blank line.
    /// Collapses repeated calls and does nothing at the very start.
    pub fn blank_line(&mut self) {
        if !self.line_is_empty() {
            self.lines.push(EmittedLine::new(self.indent));
        }
        let n = self.lines.len();
        if n >= 2 && !self.lines[n - 2].parts.is_empty() {
            self.lines.push(EmittedLine::new(self.indent));
        }
    }

    pub fn inc_indent(&mut self) {
        self.indent += 1;
        if self.line_is_empty() {
            let indent = self.indent;
            self.current_line_mut().indent = indent;
        }
    }

    pub fn dec_indent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        if self.line_is_empty() {
            let indent = self.indent;
            self.current_line_mut().indent = indent;
        }
    }

    /// Finish the current line with ` {` and indent the block body.
    pub fn open_block(&mut self) {
        self.println(" {");
        self.inc_indent();
    }

    pub fn close_block(&mut self) {
        self.dec_indent();
        self.println("}");
    }

    /// Labeled section header comment.
    pub fn section(&mut self, label: &str) {
        self.println(&format!("// {}", label));
    }

    pub fn to_source(&self) -> String {
        let mut rendered: Vec<String> = self
            .lines
            .iter()
            .map(|l| {
                if l.parts.is_empty() {
                    String::new()
                } else {
                    format!("{}{}", INDENT_WITH.repeat(l.indent), l.parts.join(""))
                }
            })
            .collect();
        while rendered.last().map(|l| l.is_empty()).unwrap_or(false) {
            rendered.pop();
        }
        rendered.push(String::new());
        rendered.join("\n")
    }
}

impl Default for SkeletonWriter {
    fn default() -> Self {
        Self::new()
    }
}
