use crate::{
    assets::fonts::FontFace,
    foundation::{
        core::Rgba8,
        error::{GoalpaperError, GoalpaperResult},
    },
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub struct TextBrushRgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl From<Rgba8> for TextBrushRgba8 {
    fn from(c: Rgba8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

/// A run of text drawn in one color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextSpan {
    pub text: String,
    pub color: Rgba8,
}

/// A single line made of differently colored spans, shaped as one unit so the spans keep their
/// natural spacing and the whole line can be centered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextLine {
    spans: Vec<TextSpan>,
}

impl TextLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-color line.
    pub fn plain(text: impl Into<String>, color: Rgba8) -> Self {
        Self::new().span(text, color)
    }

    /// Append a span.
    pub fn span(mut self, text: impl Into<String>, color: Rgba8) -> Self {
        self.spans.push(TextSpan {
            text: text.into(),
            color,
        });
        self
    }

    pub fn spans(&self) -> &[TextSpan] {
        &self.spans
    }

    /// Concatenated text of every span.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.iter().all(|s| s.text.is_empty())
    }
}

/// Stateful helper for building Parley text layouts from one font face.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    family_name: String,
}

impl TextLayoutEngine {
    /// Construct a layout engine with `face` registered as its only family.
    pub fn new(face: &FontFace) -> GoalpaperResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::new(face.bytes.clone()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            GoalpaperError::render("no font families registered from font bytes")
        })?;

        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| GoalpaperError::render("registered font family has no name"))?
            .to_string();

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
        })
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    /// Shape `line` on a single unbroken line, one brush per span.
    pub fn layout_line(
        &mut self,
        line: &TextLine,
        size_px: f32,
    ) -> GoalpaperResult<parley::Layout<TextBrushRgba8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(GoalpaperError::render(
                "text size_px must be finite and > 0",
            ));
        }

        let text = line.text();
        let default_brush = line
            .spans()
            .first()
            .map(|s| TextBrushRgba8::from(s.color))
            .unwrap_or_default();

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, &text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(default_brush));

        let mut start = 0usize;
        for span in line.spans() {
            let end = start + span.text.len();
            if end > start {
                builder.push(
                    parley::style::StyleProperty::Brush(TextBrushRgba8::from(span.color)),
                    start..end,
                );
            }
            start = end;
        }

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(&text);
        layout.break_all_lines(None);
        layout.align(
            None,
            parley::Alignment::Start,
            parley::AlignmentOptions::default(),
        );

        Ok(layout)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/text.rs"]
mod tests;
