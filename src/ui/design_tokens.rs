// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Numeric and color constants shared by the glass surfaces and the error toast.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels, including the glass fill and border pairs
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii (utility-class scale)
- **Blur**: Backdrop blur radii
- **Shadow**: Elevation definitions

## Examples

```
use iced_frost::ui::design_tokens::{opacity, palette};
use iced::Color;

let glass_fill = Color {
    a: opacity::GLASS_MEDIUM,
    ..palette::WHITE
};
assert_eq!(glass_fill.a, 0.5);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.067, 0.094, 0.153);
    pub const GRAY_800: Color = Color::from_rgb(0.122, 0.161, 0.216);
    pub const GRAY_700: Color = Color::from_rgb(0.216, 0.255, 0.318);
    pub const GRAY_400: Color = Color::from_rgb(0.612, 0.639, 0.686);

    // Semantic colors
    pub const ERROR_100: Color = Color::from_rgb(0.996, 0.886, 0.886);
    pub const ERROR_400: Color = Color::from_rgb(0.973, 0.443, 0.443);
    pub const ERROR_500: Color = Color::from_rgb(0.937, 0.267, 0.267);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;

    /// Glass fill for `low` intensity.
    pub const GLASS_LOW: f32 = 0.3;
    /// Glass fill for `medium` intensity.
    pub const GLASS_MEDIUM: f32 = 0.5;
    /// Glass fill for `high` intensity.
    pub const GLASS_HIGH: f32 = 0.7;

    // Border alpha, light and dark variants
    pub const BORDER_SUBTLE_LIGHT: f32 = 0.2;
    pub const BORDER_SUBTLE_DARK: f32 = 0.3;
    pub const BORDER_NORMAL_LIGHT: f32 = 0.3;
    pub const BORDER_NORMAL_DARK: f32 = 0.4;

    /// Shadow tint alpha
    pub const SHADOW_SOFT: f32 = 0.05;
    pub const SHADOW: f32 = 0.1;
    pub const SHADOW_STRONG: f32 = 0.25;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 20.0;

    // Toast bounds
    pub const TOAST_MIN_WIDTH: f32 = 300.0;
    pub const TOAST_MAX_WIDTH: f32 = 400.0;

    /// Extra padding applied while a toast is being replaced (scale-up pulse).
    pub const TOAST_PULSE: f32 = 2.0;

    pub const PANEL_WIDTH: f32 = 420.0;
    pub const LABEL_WIDTH: f32 = 96.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Large title - Main page headings
    pub const TITLE_LG: f32 = 30.0;

    /// Small title - Section headers
    pub const TITLE_SM: f32 = 18.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Badges, timestamps, small info
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - glass outlines
    pub const WIDTH_SM: f32 = 1.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 2.0;
    pub const BASE: f32 = 4.0;
    pub const MD: f32 = 6.0;
    pub const LG: f32 = 8.0;
    pub const XL: f32 = 12.0;
    pub const XXL: f32 = 16.0;
    pub const XXXL: f32 = 24.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Backdrop Blur Scale
// ============================================================================

pub mod blur {
    pub const SM: f32 = 4.0;
    pub const LG: f32 = 16.0;
    pub const XXXL: f32 = 64.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette};
    use iced::{Color, Shadow, Vector};

    const fn tint(a: f32) -> Color {
        Color { a, ..palette::BLACK }
    }

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: tint(opacity::SHADOW_SOFT),
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 2.0,
    };

    pub const MD: Shadow = Shadow {
        color: tint(opacity::SHADOW),
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 6.0,
    };

    pub const LG: Shadow = Shadow {
        color: tint(opacity::SHADOW),
        offset: Vector { x: 0.0, y: 10.0 },
        blur_radius: 15.0,
    };

    pub const XL: Shadow = Shadow {
        color: tint(opacity::SHADOW),
        offset: Vector { x: 0.0, y: 20.0 },
        blur_radius: 25.0,
    };

    pub const XXL: Shadow = Shadow {
        color: tint(opacity::SHADOW_STRONG),
        offset: Vector { x: 0.0, y: 25.0 },
        blur_radius: 50.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::GLASS_LOW < opacity::GLASS_MEDIUM);
    assert!(opacity::GLASS_MEDIUM < opacity::GLASS_HIGH);
    assert!(opacity::BORDER_SUBTLE_LIGHT < opacity::BORDER_NORMAL_LIGHT);
    assert!(opacity::BORDER_SUBTLE_DARK < opacity::BORDER_NORMAL_DARK);

    // Toast bounds
    assert!(sizing::TOAST_MIN_WIDTH < sizing::TOAST_MAX_WIDTH);

    // Radius and blur ordering
    assert!(radius::XXL > radius::XL);
    assert!(radius::FULL > radius::XXXL);
    assert!(blur::XXXL > blur::LG && blur::LG > blur::SM);

    // Shadow elevation
    assert!(shadow::XXL.blur_radius > shadow::XL.blur_radius);
    assert!(shadow::LG.blur_radius > shadow::MD.blur_radius);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn error_shades_get_lighter() {
        assert!(palette::ERROR_400.g > palette::ERROR_500.g);
        assert!(palette::ERROR_100.g > palette::ERROR_400.g);
    }
}
