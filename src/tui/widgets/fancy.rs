//! Multi-style single-line text.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Typeface of one fancy-text item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Font {
    #[default]
    Regular,
    Bold,
    Italic,
    Dim,
}

impl Font {
    fn style(self, color: Color) -> Style {
        let style = Style::default().fg(color);
        match self {
            Font::Regular => style,
            Font::Bold => style.add_modifier(Modifier::BOLD),
            Font::Italic => style.add_modifier(Modifier::ITALIC),
            Font::Dim => style.add_modifier(Modifier::DIM),
        }
    }
}

/// A run of differently styled texts drawn on one line.
///
/// `texts`, `fonts` and `colors` are parallel: item `i` is `texts[i]` drawn
/// in `fonts[i]` and `colors[i]`. Tooltips are optional but, when given,
/// are parallel too (an empty string means no tooltip for that item).
#[derive(Debug, Clone)]
pub struct FancyText<'a> {
    texts: &'a [&'a str],
    fonts: &'a [Font],
    colors: &'a [Color],
    tooltips: &'a [&'a str],
}

impl<'a> FancyText<'a> {
    /// # Panics
    ///
    /// Panics if any item is missing its font or color.
    pub fn new(texts: &'a [&'a str], fonts: &'a [Font], colors: &'a [Color]) -> Self {
        assert_eq!(
            texts.len(),
            fonts.len(),
            "every fancy text item needs a font"
        );
        assert_eq!(
            texts.len(),
            colors.len(),
            "every fancy text item needs a color"
        );
        Self {
            texts,
            fonts,
            colors,
            tooltips: &[],
        }
    }

    /// # Panics
    ///
    /// Panics if the tooltips are not parallel to the texts.
    pub fn tooltips(mut self, tooltips: &'a [&'a str]) -> Self {
        assert_eq!(
            self.texts.len(),
            tooltips.len(),
            "fancy text tooltips must match the items"
        );
        self.tooltips = tooltips;
        self
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    pub fn line(&self) -> Line<'a> {
        let spans: Vec<Span<'a>> = self
            .texts
            .iter()
            .zip(self.fonts)
            .zip(self.colors)
            .map(|((text, font), color)| Span::styled(*text, font.style(*color)))
            .collect();
        Line::from(spans)
    }

    /// All non-empty tooltips, in item order.
    pub fn tooltip_texts(&self) -> Vec<&'a str> {
        self.tooltips.iter().copied().filter(|t| !t.is_empty()).collect()
    }
}

impl Widget for FancyText<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.line().render(area, buf);
    }
}
