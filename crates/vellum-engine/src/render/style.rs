use anyhow::{bail, Context, Result};

use crate::paint::Color;

/// Named style parameters read by the render pipeline on every frame.
///
/// `handle_rotation_*` lengths are in viewport pixels; the pipeline divides them by the
/// zoom when it needs scene units.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub background: Color,
    pub selection_stroke: Color,
    pub selection_fill: Color,
    pub guide_bbox_stroke: Color,
    pub guide_bbox_stroke_width: f64,
    pub handle_rotation_stroke: Color,
    pub handle_rotation_fill: Color,
    pub handle_rotation_stroke_width: f64,
    pub handle_rotation_radius: f64,
    /// Distance from the top edge of the selected shape to the handle center.
    pub handle_rotation_offset: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            background: Color::from_srgb_u8(0xf4, 0xf4, 0xf4, 0xff),
            selection_stroke: Color::from_srgb_u8(0x0f, 0x8e, 0xff, 0xff),
            selection_fill: Color::from_srgb_u8(0x0f, 0x8e, 0xff, 0x33),
            guide_bbox_stroke: Color::from_srgb_u8(0x15, 0x92, 0xfe, 0xff),
            guide_bbox_stroke_width: 1.0,
            handle_rotation_stroke: Color::from_srgb_u8(0x15, 0x92, 0xfe, 0xff),
            handle_rotation_fill: Color::white(),
            handle_rotation_stroke_width: 2.0,
            handle_rotation_radius: 4.0,
            handle_rotation_offset: 14.0,
        }
    }
}

impl Style {
    /// Applies `(key, value)` overrides on top of the current values.
    ///
    /// Color keys take hex literals (`#rgb`, `#rrggbb`, `#rrggbbaa`); length keys take
    /// positive numbers. Unknown keys are rejected so typos surface early.
    pub fn apply_overrides<I, K, V>(&mut self, overrides: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in overrides {
            let (key, value) = (key.as_ref(), value.as_ref());
            self.apply_one(key, value)
                .with_context(|| format!("style override `{key}`"))?;
            log::debug!("style: {key} = {value}");
        }
        Ok(())
    }

    fn apply_one(&mut self, key: &str, value: &str) -> Result<()> {
        let color = |v: &str| -> Result<Color> { Ok(Color::from_hex(v)?) };
        let length = |v: &str| -> Result<f64> {
            let n: f64 = v.trim().parse().with_context(|| format!("`{v}` is not a number"))?;
            if !(n.is_finite() && n >= 0.0) {
                bail!("`{v}` must be a finite, non-negative length");
            }
            Ok(n)
        };

        match key {
            "background" => self.background = color(value)?,
            "selection_stroke" => self.selection_stroke = color(value)?,
            "selection_fill" => self.selection_fill = color(value)?,
            "guide_bbox_stroke" => self.guide_bbox_stroke = color(value)?,
            "guide_bbox_stroke_width" => self.guide_bbox_stroke_width = length(value)?,
            "handle_rotation_stroke" => self.handle_rotation_stroke = color(value)?,
            "handle_rotation_fill" => self.handle_rotation_fill = color(value)?,
            "handle_rotation_stroke_width" => self.handle_rotation_stroke_width = length(value)?,
            "handle_rotation_radius" => self.handle_rotation_radius = length(value)?,
            "handle_rotation_offset" => self.handle_rotation_offset = length(value)?,
            other => bail!("unknown style key `{other}`"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_named_values() {
        let mut style = Style::default();
        style
            .apply_overrides([("background", "#000"), ("handle_rotation_radius", "6.5")])
            .unwrap();
        assert_eq!(style.background, Color::black());
        assert_eq!(style.handle_rotation_radius, 6.5);
        assert_eq!(style.handle_rotation_offset, Style::default().handle_rotation_offset);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = Style::default()
            .apply_overrides([("backgroud", "#000")])
            .unwrap_err();
        assert!(format!("{err:#}").contains("unknown style key"));
    }

    #[test]
    fn bad_values_carry_key_context() {
        let mut style = Style::default();
        let err = style.apply_overrides([("selection_fill", "#12")]).unwrap_err();
        assert!(err.to_string().contains("selection_fill"));

        assert!(style.apply_overrides([("handle_rotation_radius", "-1")]).is_err());
        assert!(style.apply_overrides([("handle_rotation_offset", "far")]).is_err());
    }
}
