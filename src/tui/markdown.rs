//! Markdown → ratatui `Text` renderer for advice bodies.
//!
//! Converts `pulldown_cmark` events into styled `Line`/`Span` values:
//! paragraphs, bold, italic, inline code, code blocks, lists, headings
//! and links. Raw HTML is skipped.

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, TagEnd};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};

/// Parse a Markdown body into owned, styled `Text`.
pub fn render(content: &str, base_fg: Color) -> Text<'static> {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_STRIKETHROUGH);

    let mut w = Writer::new(base_fg);
    for event in Parser::new_ext(content, opts) {
        w.handle(event);
    }
    w.text
}

// ── Writer ──────────────────────────────────────────────────────────────────

struct Writer {
    text: Text<'static>,
    base_fg: Color,
    /// Inline style stack. Styles compose via `patch`.
    styles: Vec<Style>,
    /// List nesting: None = unordered, Some(n) = ordered at index n.
    list_indices: Vec<Option<u64>>,
    in_code_block: bool,
    link_url: Option<String>,
    /// Whether the next block element should be preceded by a blank line.
    needs_newline: bool,
}

impl Writer {
    fn new(base_fg: Color) -> Self {
        Self {
            text: Text::default(),
            base_fg,
            styles: vec![],
            list_indices: vec![],
            in_code_block: false,
            link_url: None,
            needs_newline: false,
        }
    }

    fn style(&self) -> Style {
        self.styles
            .last()
            .copied()
            .unwrap_or_else(|| Style::default().fg(self.base_fg))
    }

    fn push_style(&mut self, overlay: Style) {
        self.styles.push(self.style().patch(overlay));
    }

    fn pop_style(&mut self) {
        self.styles.pop();
    }

    fn push_line(&mut self, line: Line<'static>) {
        self.text.lines.push(line);
    }

    fn push_span(&mut self, span: Span<'static>) {
        match self.text.lines.last_mut() {
            Some(line) => line.push_span(span),
            None => self.push_line(Line::from(vec![span])),
        }
    }

    fn blank_line_if_needed(&mut self) {
        if self.needs_newline {
            self.push_line(Line::default());
            self.needs_newline = false;
        }
    }

    // ── Event dispatch ──────────────────────────────────────────────────

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.open(tag),
            Event::End(tag) => self.close(tag),
            Event::Text(t) => self.text(t),
            Event::Code(c) => self.push_span(Span::styled(c.to_string(), code_style())),
            Event::SoftBreak => self.push_span(Span::raw(" ")),
            Event::HardBreak => self.push_line(Line::default()),
            Event::Rule => {
                self.blank_line_if_needed();
                self.push_line(Line::from(Span::styled(
                    "─".repeat(40),
                    Style::default().fg(Color::DarkGray),
                )));
                self.needs_newline = true;
            }
            _ => {}
        }
    }

    fn open(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => {
                // Tight list items put their text straight on the marker line.
                if self.list_indices.is_empty() {
                    self.blank_line_if_needed();
                    self.push_line(Line::default());
                }
            }
            Tag::Heading { .. } => {
                self.blank_line_if_needed();
                self.push_line(Line::default());
                self.push_style(Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED));
            }
            Tag::CodeBlock(_) => {
                self.blank_line_if_needed();
                self.in_code_block = true;
            }
            Tag::List(start) => {
                if self.list_indices.is_empty() {
                    self.blank_line_if_needed();
                }
                self.list_indices.push(start);
            }
            Tag::Item => {
                self.push_line(Line::default());
                let indent = "  ".repeat(self.list_indices.len().saturating_sub(1));
                if let Some(idx) = self.list_indices.last_mut() {
                    let marker = match idx {
                        None => format!("{indent}• "),
                        Some(n) => {
                            let s = format!("{indent}{n}. ");
                            *n += 1;
                            s
                        }
                    };
                    self.push_span(Span::styled(marker, Style::default().fg(Color::DarkGray)));
                }
            }
            Tag::Emphasis => self.push_style(Style::default().add_modifier(Modifier::ITALIC)),
            Tag::Strong => self.push_style(Style::default().add_modifier(Modifier::BOLD)),
            Tag::Strikethrough => {
                self.push_style(Style::default().add_modifier(Modifier::CROSSED_OUT))
            }
            Tag::Link { dest_url, .. } => {
                self.link_url = Some(dest_url.to_string());
                self.push_style(link_style());
            }
            _ => {}
        }
    }

    fn close(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => {
                if self.list_indices.is_empty() {
                    self.needs_newline = true;
                }
            }
            TagEnd::Heading(_) => {
                self.pop_style();
                self.needs_newline = true;
            }
            TagEnd::CodeBlock => {
                self.in_code_block = false;
                self.needs_newline = true;
            }
            TagEnd::List(_) => {
                self.list_indices.pop();
                if self.list_indices.is_empty() {
                    self.needs_newline = true;
                }
            }
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough => self.pop_style(),
            TagEnd::Link => {
                self.pop_style();
                if let Some(url) = self.link_url.take() {
                    self.push_span(Span::raw(" ("));
                    self.push_span(Span::styled(url, link_style()));
                    self.push_span(Span::raw(")"));
                }
            }
            _ => {}
        }
    }

    fn text(&mut self, cow: CowStr<'_>) {
        // ratatui renders \t as zero-width
        let text = cow.replace('\t', "    ");

        if self.in_code_block {
            for line in text.lines() {
                self.push_line(Line::from(vec![
                    Span::styled("  ", Style::default()),
                    Span::styled(line.to_owned(), code_style()),
                ]));
            }
            return;
        }

        let style = self.style();
        self.push_span(Span::styled(text, style));
    }
}

fn code_style() -> Style {
    Style::default().fg(Color::White).bg(Color::DarkGray)
}

fn link_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::UNDERLINED)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn bold_text_is_bold() {
        let text = render("**What to check:** the console", Color::Blue);
        let line = &text.lines[0];
        let bold = line
            .spans
            .iter()
            .find(|s| s.content == "What to check:")
            .unwrap();
        assert!(bold.style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(bold.style.fg, Some(Color::Blue));
    }

    #[test]
    fn inline_code_styled() {
        let text = render("Run `git status` first", Color::Blue);
        let code = text.lines[0]
            .spans
            .iter()
            .find(|s| s.content == "git status")
            .unwrap();
        assert_eq!(code.style.bg, Some(Color::DarkGray));
    }

    #[test]
    fn paragraphs_are_separated_by_blank_line() {
        let text = render("First.\n\nSecond.", Color::Reset);
        let lines: Vec<String> = text.lines.iter().map(line_text).collect();
        assert_eq!(lines, vec!["First.", "", "Second."]);
    }

    #[test]
    fn list_items_get_markers() {
        let text = render("Steps:\n\n- add\n- commit", Color::Reset);
        let lines: Vec<String> = text.lines.iter().map(line_text).collect();
        assert_eq!(lines, vec!["Steps:", "", "• add", "• commit"]);
    }

    #[test]
    fn ordered_list_counts_up() {
        let text = render("1. stage\n2. commit", Color::Reset);
        let lines: Vec<String> = text.lines.iter().map(line_text).collect();
        assert_eq!(lines, vec!["1. stage", "2. commit"]);
    }

    #[test]
    fn link_url_is_appended() {
        let text = render("[docs](https://git-scm.com)", Color::Reset);
        assert_eq!(line_text(&text.lines[0]), "docs (https://git-scm.com)");
    }

    #[test]
    fn code_block_lines_are_indented() {
        let text = render("```\ngit add .\ngit commit\n```", Color::Reset);
        let lines: Vec<String> = text.lines.iter().map(line_text).collect();
        assert_eq!(lines, vec!["  git add .", "  git commit"]);
    }

    #[test]
    fn plain_text_uses_base_color() {
        let text = render("hello", Color::Green);
        assert_eq!(text.lines[0].spans[0].style.fg, Some(Color::Green));
    }
}
