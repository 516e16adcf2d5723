//! Structured markup for page views.
//!
//! Views build a small element tree instead of concatenating HTML strings.
//! A tree serializes to escaped HTML for a browser page and flattens to
//! toned text lines for the terminal front end.

use std::fmt::Write as _;

/// Elements that never have a closing tag.
const VOID_TAGS: [&str; 4] = ["br", "hr", "img", "input"];

/// Containers whose children flatten onto one line, separated by spaces.
const SPACED_CLASSES: [&str; 2] = ["stat-item", "fee-item"];

/// Elements that start and end their own line when flattened to text.
const BLOCK_TAGS: [&str; 13] = [
    "div", "p", "h1", "h2", "h3", "h4", "table", "thead", "tbody", "tr", "ul", "li", "section",
];

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    Fragment(Vec<Node>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

/// Start building an element.
pub fn el(tag: &'static str) -> Element {
    Element {
        tag,
        attrs: Vec::new(),
        children: Vec::new(),
    }
}

impl Element {
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn class(self, class: &str) -> Self {
        self.attr("class", class)
    }

    pub fn style(self, style: &str) -> Self {
        self.attr("style", style)
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map(|c| c.split_whitespace().any(|part| part == class))
            .unwrap_or(false)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

impl Node {
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&escape(text)),
            Node::Fragment(nodes) => {
                for node in nodes {
                    node.write_html(out);
                }
            }
            Node::Element(element) => {
                out.push('<');
                out.push_str(element.tag);
                for (name, value) in &element.attrs {
                    let _ = write!(out, " {}=\"{}\"", name, escape(value));
                }
                out.push('>');
                if VOID_TAGS.contains(&element.tag) {
                    return;
                }
                for child in &element.children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{}>", element.tag);
            }
        }
    }

    /// All text in document order, unescaped.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Fragment(nodes) => nodes.iter().for_each(|n| n.collect_text(out)),
            Node::Element(element) => element.children.iter().for_each(|n| n.collect_text(out)),
        }
    }

    /// Depth-first search for the first element carrying `class`.
    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        match self {
            Node::Text(_) => None,
            Node::Fragment(nodes) => nodes.iter().find_map(|n| n.find_by_class(class)),
            Node::Element(element) => {
                if element.has_class(class) {
                    Some(element)
                } else {
                    element.children.iter().find_map(|n| n.find_by_class(class))
                }
            }
        }
    }

    /// Every element with the given tag, in document order.
    pub fn find_all_by_tag(&self, tag: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_tag(tag, &mut found);
        found
    }

    fn collect_tag<'a>(&'a self, tag: &str, found: &mut Vec<&'a Element>) {
        match self {
            Node::Text(_) => {}
            Node::Fragment(nodes) => nodes.iter().for_each(|n| n.collect_tag(tag, found)),
            Node::Element(element) => {
                if element.tag == tag {
                    found.push(element);
                }
                element.children.iter().for_each(|n| n.collect_tag(tag, found));
            }
        }
    }

    /// Flatten to lines of toned text segments for terminal display.
    pub fn text_lines(&self) -> Vec<TextLine> {
        let mut flattener = Flattener::default();
        flattener.visit(self, Tone::Plain);
        flattener.finish()
    }
}

// ============================================================================
// Text flattening
// ============================================================================

/// Visual weight of a text segment, mapped to a terminal style by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Strong,
    Heading,
    Success,
    Failure,
    Accent,
    Muted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub tone: Tone,
}

pub type TextLine = Vec<Segment>;

/// Tone an element imposes on its subtree, if any.
fn element_tone(element: &Element) -> Option<Tone> {
    if element.has_class("result-success") || element.has_class("success-icon") {
        return Some(Tone::Success);
    }
    if element.has_class("result-failure") || element.has_class("failure-icon") {
        return Some(Tone::Failure);
    }
    if element.has_class("stat-number") {
        return Some(Tone::Accent);
    }
    match element.tag {
        "strong" | "b" | "th" => Some(Tone::Strong),
        "h1" | "h2" | "h3" | "h4" => Some(Tone::Heading),
        "small" => Some(Tone::Muted),
        _ => None,
    }
}

/// Font Awesome icons carry no text; give the common ones a glyph.
fn icon_glyph(element: &Element) -> Option<&'static str> {
    if element.tag != "i" {
        return None;
    }
    if element.has_class("fa-check-circle") {
        Some("✔")
    } else if element.has_class("fa-times-circle") {
        Some("✘")
    } else if element.has_class("fa-spinner") {
        Some("…")
    } else {
        None
    }
}

#[derive(Default)]
struct Flattener {
    lines: Vec<TextLine>,
    current: TextLine,
    /// Nesting depth inside spaced containers; line breaks are suppressed.
    inline_depth: usize,
    /// Nesting depth inside table cells; `<br>` becomes a space.
    cell_depth: usize,
}

impl Flattener {
    fn break_line(&mut self) {
        if self.inline_depth > 0 {
            return;
        }
        if !self.current.is_empty() {
            self.lines.push(std::mem::take(&mut self.current));
        }
    }

    fn push(&mut self, text: &str, tone: Tone) {
        if text.is_empty() {
            return;
        }
        self.current.push(Segment {
            text: text.to_string(),
            tone,
        });
    }

    fn visit(&mut self, node: &Node, tone: Tone) {
        match node {
            Node::Text(text) => self.push(text, tone),
            Node::Fragment(nodes) => {
                for child in nodes {
                    self.visit(child, tone);
                }
            }
            Node::Element(element) => {
                let tone = element_tone(element).unwrap_or(tone);

                if element.tag == "br" {
                    if self.cell_depth > 0 {
                        self.push(" ", tone);
                    } else {
                        self.break_line();
                    }
                    return;
                }
                if let Some(glyph) = icon_glyph(element) {
                    self.push(glyph, tone);
                    return;
                }

                if SPACED_CLASSES.iter().any(|c| element.has_class(c)) {
                    self.break_line();
                    self.inline_depth += 1;
                    for child in &element.children {
                        if !self.current.is_empty() {
                            self.push(" ", tone);
                        }
                        self.visit(child, tone);
                    }
                    self.inline_depth -= 1;
                    self.break_line();
                    return;
                }

                let block = BLOCK_TAGS.contains(&element.tag);
                if block {
                    self.break_line();
                }
                let cell = matches!(element.tag, "td" | "th");
                if cell {
                    if !self.current.is_empty() {
                        self.push(" | ", Tone::Muted);
                    }
                    self.cell_depth += 1;
                }

                for child in &element.children {
                    self.visit(child, tone);
                }

                if cell {
                    self.cell_depth -= 1;
                }
                if block {
                    self.break_line();
                }
            }
        }
    }

    fn finish(mut self) -> Vec<TextLine> {
        self.break_line();
        self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &TextLine) -> String {
        line.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_to_html_escapes_text_and_attributes() {
        let node: Node = el("div")
            .class("roll-number")
            .attr("title", "a\"b")
            .text("<script>alert('x')</script> & more")
            .into();
        assert_eq!(
            node.to_html(),
            "<div class=\"roll-number\" title=\"a&quot;b\">&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; more</div>"
        );
    }

    #[test]
    fn test_void_elements_have_no_closing_tag() {
        let node: Node = el("strong").text("A").child(el("br")).text("B").into();
        assert_eq!(node.to_html(), "<strong>A<br>B</strong>");
    }

    #[test]
    fn test_fragment_serializes_in_order() {
        let node = Node::Fragment(vec![el("p").text("one").into(), el("p").text("two").into()]);
        assert_eq!(node.to_html(), "<p>one</p><p>two</p>");
        assert_eq!(node.text_content(), "onetwo");
    }

    #[test]
    fn test_find_helpers() {
        let node: Node = el("div")
            .class("outer")
            .child(el("span").class("fee-item highlight").text("x"))
            .child(el("span").text("y"))
            .into();
        assert!(node.find_by_class("highlight").is_some());
        assert!(node.find_by_class("fee").is_none());
        assert_eq!(node.find_all_by_tag("span").len(), 2);
    }

    #[test]
    fn test_text_lines_blocks_and_breaks() {
        let node: Node = el("div")
            .child(el("h3").text("Heading"))
            .child(el("p").text("Body ").child(el("strong").text("bold")))
            .child(el("div").child(el("strong").text("A")).child(el("br")).text("B"))
            .into();
        let lines = node.text_lines();
        let texts: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(texts, vec!["Heading", "Body bold", "A", "B"]);
        assert_eq!(lines[0][0].tone, Tone::Heading);
        assert_eq!(lines[1][1].tone, Tone::Strong);
    }

    #[test]
    fn test_text_lines_table_cells_joined() {
        let node: Node = el("table")
            .child(el("tr").child(el("th").text("Dept")).child(el("th").text("Total")))
            .child(el("tr").child(el("td").text("Humanities")).child(el("td").text("৳10")))
            .into();
        let texts: Vec<String> = node.text_lines().iter().map(line_text).collect();
        assert_eq!(texts, vec!["Dept | Total", "Humanities | ৳10"]);
    }

    #[test]
    fn test_spaced_containers_flatten_to_one_line() {
        let node: Node = el("div")
            .class("stats-grid")
            .child(
                el("div")
                    .class("stat-item")
                    .child(el("div").class("stat-number").text("500"))
                    .child(el("div").class("stat-label").text("Total Selected")),
            )
            .child(
                el("div")
                    .class("fee-item")
                    .child(el("span").text("Tuition Fee:"))
                    .child(el("span").text("৳2,000")),
            )
            .into();
        let lines = node.text_lines();
        let texts: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(texts, vec!["500 Total Selected", "Tuition Fee: ৳2,000"]);
        assert_eq!(lines[0][0].tone, Tone::Accent);
    }

    #[test]
    fn test_break_inside_cell_becomes_space() {
        let node: Node = el("tr")
            .child(el("td").child(el("strong").text("Humanities")).child(el("br")).text("মানবিক"))
            .child(el("td").text("৳10"))
            .into();
        let texts: Vec<String> = node.text_lines().iter().map(line_text).collect();
        assert_eq!(texts, vec!["Humanities মানবিক | ৳10"]);
    }

    #[test]
    fn test_icons_flatten_to_glyphs() {
        let node: Node = el("div")
            .class("result-success")
            .child(el("i").class("fas fa-check-circle"))
            .into();
        let lines = node.text_lines();
        assert_eq!(line_text(&lines[0]), "✔");
        assert_eq!(lines[0][0].tone, Tone::Success);
    }
}
