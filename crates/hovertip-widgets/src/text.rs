#![forbid(unsafe_code)]

//! Text spans and the measurement the tooltip panel needs.
//!
//! Tooltips never draw glyphs themselves. They hand [`TextSpan`]s (a string
//! plus a named [`TextVariant`]) to whatever renders text in the host, and use
//! [`Measure`] only to size the panel before it is placed.

use hovertip_core::geometry::Size;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Named text styles a tooltip asks the host to render with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextVariant {
    /// Body text of compact and expanded tooltips.
    #[default]
    ChipTagText,
    /// Semibold title line of an expanded tooltip.
    ChipTagTitle,
    /// Small secondary label (the extra-info corner).
    CompactLabel,
}

/// A run of text with a variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub variant: TextVariant,
    pub text: String,
    /// Whether the text may wrap. Header spans never wrap.
    pub wrap: bool,
}

impl TextSpan {
    /// A wrapping span.
    #[must_use]
    pub fn new(variant: TextVariant, text: impl Into<String>) -> Self {
        Self {
            variant,
            text: text.into(),
            wrap: true,
        }
    }

    /// A span kept on one line.
    #[must_use]
    pub fn single_line(variant: TextVariant, text: impl Into<String>) -> Self {
        Self {
            wrap: false,
            ..Self::new(variant, text)
        }
    }

    /// Body text styled for expanded tooltip contents.
    #[must_use]
    pub fn body(text: impl Into<String>) -> Self {
        Self::new(TextVariant::ChipTagText, text)
    }

    /// Lines this span occupies at the given width.
    #[must_use]
    pub fn lines(&self, max_width: u16) -> Vec<String> {
        if self.wrap {
            wrap(&self.text, max_width)
        } else {
            self.text.lines().map(str::to_owned).collect()
        }
    }
}

/// Anything whose rendered size can be computed for a width limit.
pub trait Measure {
    /// Size of the rendered content when wrapped at `max_width` columns.
    fn measure(&self, max_width: u16) -> Size;
}

impl Measure for str {
    fn measure(&self, max_width: u16) -> Size {
        size_of_lines(&wrap(self, max_width), max_width)
    }
}

impl Measure for String {
    fn measure(&self, max_width: u16) -> Size {
        self.as_str().measure(max_width)
    }
}

impl Measure for TextSpan {
    fn measure(&self, max_width: u16) -> Size {
        size_of_lines(&self.lines(max_width), max_width)
    }
}

impl Measure for [TextSpan] {
    fn measure(&self, max_width: u16) -> Size {
        self.iter().fold(Size::default(), |acc, span| {
            let s = span.measure(max_width);
            Size::new(acc.width.max(s.width), acc.height.saturating_add(s.height))
        })
    }
}

impl Measure for Vec<TextSpan> {
    fn measure(&self, max_width: u16) -> Size {
        self.as_slice().measure(max_width)
    }
}

impl<T: Measure + ?Sized> Measure for &T {
    fn measure(&self, max_width: u16) -> Size {
        (**self).measure(max_width)
    }
}

/// Display width of a string in cells.
#[must_use]
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Word-wrap `text` at `max_width` columns.
///
/// Explicit newlines are kept; blank lines survive as empty strings. Words
/// wider than the limit are broken between graphemes.
#[must_use]
pub fn wrap(text: &str, max_width: u16) -> Vec<String> {
    let max_width = max_width as usize;
    if max_width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();
    for paragraph in text.lines() {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        let mut current_width: usize = 0;

        for word in paragraph.split_whitespace() {
            let word_width = display_width(word);

            if word_width > max_width {
                if current_width > 0 {
                    lines.push(std::mem::take(&mut current_line));
                    current_width = 0;
                }
                for grapheme in word.graphemes(true) {
                    let w = display_width(grapheme);
                    if current_width + w > max_width && current_width > 0 {
                        lines.push(std::mem::take(&mut current_line));
                        current_width = 0;
                    }
                    current_line.push_str(grapheme);
                    current_width += w;
                }
            } else if current_width == 0 {
                current_line.push_str(word);
                current_width = word_width;
            } else if current_width + 1 + word_width <= max_width {
                current_line.push(' ');
                current_line.push_str(word);
                current_width += 1 + word_width;
            } else {
                lines.push(std::mem::take(&mut current_line));
                current_line.push_str(word);
                current_width = word_width;
            }
        }

        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    lines
}

fn size_of_lines(lines: &[String], max_width: u16) -> Size {
    let widest = lines
        .iter()
        .map(|l| display_width(l))
        .max()
        .unwrap_or(0)
        .min(max_width as usize);
    Size::new(widest as u16, lines.len().min(u16::MAX as usize) as u16)
}
