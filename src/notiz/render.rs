use colored::Colorize;
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Renders markdown for the terminal: headings bold and underlined, code
/// yellow, emphasis mapped to ANSI styles, lists re-indented.
pub fn render_markdown(content: &str) -> String {
    let options = Options::ENABLE_TASKLISTS | Options::ENABLE_STRIKETHROUGH;
    let mut renderer = Renderer::default();
    for event in Parser::new_ext(content, options) {
        renderer.event(event);
    }
    renderer.finish()
}

#[derive(Default)]
struct Renderer {
    out: String,
    heading: bool,
    bold: bool,
    italic: bool,
    strike: bool,
    in_code_block: bool,
    // One entry per open list; Some(n) carries the next ordered number.
    lists: Vec<Option<u64>>,
}

impl Renderer {
    fn event(&mut self, event: Event) {
        match event {
            Event::Start(Tag::Paragraph) => {
                if self.lists.is_empty() {
                    self.blank_line();
                }
            }
            Event::Start(Tag::Heading { .. }) => {
                self.blank_line();
                self.heading = true;
            }
            Event::End(TagEnd::Heading(..)) => {
                self.heading = false;
                self.line_break();
            }
            Event::Start(Tag::List(start)) => {
                if self.lists.is_empty() {
                    self.blank_line();
                } else {
                    self.line_break();
                }
                self.lists.push(start);
            }
            Event::End(TagEnd::List(..)) => {
                self.lists.pop();
            }
            Event::Start(Tag::Item) => {
                self.line_break();
                let indent = "  ".repeat(self.lists.len().saturating_sub(1));
                let prefix = match self.lists.last_mut() {
                    Some(Some(number)) => {
                        let prefix = format!("{indent}{number}. ");
                        *number += 1;
                        prefix
                    }
                    _ => format!("{indent}- "),
                };
                self.out.push_str(&prefix);
            }
            Event::End(TagEnd::Item) => {
                self.line_break();
            }
            Event::TaskListMarker(checked) => {
                self.out.push_str(if checked { "[x] " } else { "[ ] " });
            }
            Event::Start(Tag::CodeBlock(_)) => {
                self.blank_line();
                self.in_code_block = true;
            }
            Event::End(TagEnd::CodeBlock) => {
                self.in_code_block = false;
                self.line_break();
            }
            Event::Start(Tag::Strong) => self.bold = true,
            Event::End(TagEnd::Strong) => self.bold = false,
            Event::Start(Tag::Emphasis) => self.italic = true,
            Event::End(TagEnd::Emphasis) => self.italic = false,
            Event::Start(Tag::Strikethrough) => self.strike = true,
            Event::End(TagEnd::Strikethrough) => self.strike = false,
            Event::Text(text) => {
                let styled = self.styled(&text);
                self.out.push_str(&styled);
            }
            Event::Code(code) => {
                let styled = format!("`{code}`").yellow().to_string();
                self.out.push_str(&styled);
            }
            Event::SoftBreak | Event::HardBreak => self.line_break(),
            Event::Rule => {
                self.blank_line();
                self.out.push_str(&"-".repeat(40).dimmed().to_string());
                self.line_break();
            }
            _ => {}
        }
    }

    fn styled(&self, text: &str) -> String {
        if self.in_code_block {
            return text.yellow().to_string();
        }
        if self.heading {
            return text.bold().underline().to_string();
        }
        let mut styled = text.normal();
        if self.bold {
            styled = styled.bold();
        }
        if self.italic {
            styled = styled.italic();
        }
        if self.strike {
            styled = styled.dimmed();
        }
        styled.to_string()
    }

    fn line_break(&mut self) {
        if !self.out.is_empty() && !self.out.ends_with('\n') {
            self.out.push('\n');
        }
    }

    fn blank_line(&mut self) {
        if self.out.is_empty() {
            return;
        }
        while !self.out.ends_with("\n\n") {
            self.out.push('\n');
        }
    }

    fn finish(mut self) -> String {
        self.line_break();
        self.out
    }
}
