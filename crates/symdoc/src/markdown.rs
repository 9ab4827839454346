//! Document writing capability and its Markdown implementation.

use std::io::{self, Write};

/// Block-level text output used by page rendering.
///
/// Only [`DocWriter::write_str`] is required; every block is expressed
/// in terms of it.
pub trait DocWriter {
    fn write_str(
        &mut self,
        text: &str,
    ) -> io::Result<()>;

    fn header(
        &mut self,
        level: usize,
        content: &str,
        escaped: bool,
    ) -> io::Result<()> {
        let content = if escaped {
            escape(content)
        } else {
            content.to_string()
        };
        self.write_str(&format!("{} {content}\n", "#".repeat(level.max(1))))
    }

    fn paragraph(
        &mut self,
        text: &str,
        escaped: bool,
    ) -> io::Result<()> {
        let text = if escaped {
            escape(text)
        } else {
            text.to_string()
        };
        self.write_str(&format!("{text}\n\n"))
    }

    fn code_block(
        &mut self,
        lang: &str,
        code: &str,
    ) -> io::Result<()> {
        self.write_str(&format!("```{lang}\n{code}\n```\n"))
    }

    fn line(
        &mut self,
        text: &str,
    ) -> io::Result<()> {
        self.write_str(text)?;
        self.write_str("\n")
    }

    fn blank_line(&mut self) -> io::Result<()> {
        self.write_str("\n")
    }

    /// Admonition block; every message line is indented four spaces.
    fn info_box(
        &mut self,
        kind: &str,
        message: &str,
    ) -> io::Result<()> {
        let body: Vec<String> = message.split('\n').map(|line| format!("    {line}")).collect();
        self.write_str(&format!("\n!!! {kind}\n{}\n\n", body.join("\n")))
    }

    fn horizontal_rule(&mut self) -> io::Result<()> {
        self.write_str("\n***\n")
    }

    fn link(
        &mut self,
        title: &str,
        href: &str,
    ) -> io::Result<()> {
        self.write_str(&link(title, href))
    }
}

/// Inline Markdown link.
pub fn link(
    title: &str,
    href: &str,
) -> String {
    format!("[{title}]({href})")
}

/// Escape the characters Markdown would treat as inline HTML.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '<' => out.push_str("\\<"),
            '>' => out.push_str("\\>"),
            _ => out.push(ch),
        }
    }
    out
}

/// [`DocWriter`] over any byte sink.
pub struct MarkdownWriter<W: Write> {
    sink: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink,
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl<W: Write> DocWriter for MarkdownWriter<W> {
    fn write_str(
        &mut self,
        text: &str,
    ) -> io::Result<()> {
        self.sink.write_all(text.as_bytes())
    }
}

#[cfg(test)]
#[path = "../tests/src/markdown_tests.rs"]
mod tests;
