//! Packing of tint colors into single float vertex attributes.
//!
//! A packed color is a 32-bit `ABGR` value (alpha in the high byte, red in
//! the low byte) whose bits are carried unchanged in an `f32`.

use skeleton_model::Color;

/// Truncate a 0..255 scaled channel and saturate it to a byte.
fn channel(value: f32) -> u32 {
    (value as i32).clamp(0, 255) as u32
}

/// Pack channels already scaled to 0..255.
pub fn pack_color(a: f32, b: f32, g: f32, r: f32) -> f32 {
    f32::from_bits(channel(a) << 24 | channel(b) << 16 | channel(g) << 8 | channel(r))
}

/// Split a packed color into `[r, g, b, a]` bytes.
pub fn unpack_color(packed: f32) -> [u8; 4] {
    packed.to_bits().to_le_bytes()
}

/// Light color: the product of the skeleton, slot and attachment tints,
/// with every channel premultiplied by the combined alpha.
pub fn light_color(skeleton: Color, slot: Color, attachment: Color) -> f32 {
    let alpha = skeleton.a * slot.a * attachment.a * 255.0;
    pack_color(
        alpha,
        skeleton.b * slot.b * attachment.b * alpha,
        skeleton.g * slot.g * attachment.g * alpha,
        skeleton.r * slot.r * attachment.r * alpha,
    )
}

/// Dark color for two color tinting. Has no alpha; a missing slot dark
/// color counts as black.
pub fn dark_color(skeleton: Color, dark: Option<Color>, attachment: Color) -> f32 {
    let dark = dark.unwrap_or(Color::BLACK);
    pack_color(
        0.0,
        skeleton.b * dark.b * attachment.b * 255.0,
        skeleton.g * dark.g * attachment.g * 255.0,
        skeleton.r * dark.r * attachment.r * 255.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_opaque_white() {
        let packed = light_color(Color::WHITE, Color::WHITE, Color::WHITE);
        assert_eq!(packed.to_bits(), 0xFFFF_FFFF);
        assert_eq!(unpack_color(packed), [255, 255, 255, 255]);
    }

    #[test]
    fn test_channel_order() {
        let packed = pack_color(4.0, 3.0, 2.0, 1.0);
        assert_eq!(packed.to_bits(), 0x0403_0201);
        assert_eq!(unpack_color(packed), [1, 2, 3, 4]);
    }

    #[test]
    fn test_channels_saturate() {
        assert_eq!(pack_color(300.0, -5.0, 255.9, f32::NAN).to_bits(), 0xFF00_FF00);
    }

    #[test]
    fn test_light_is_premultiplied() {
        let half = Color::new(1.0, 1.0, 1.0, 0.5);
        let packed = light_color(Color::WHITE, half, Color::WHITE);
        assert_eq!(unpack_color(packed), [127, 127, 127, 127]);
    }

    #[test]
    fn test_dark_defaults_to_black() {
        let packed = dark_color(Color::WHITE, None, Color::WHITE);
        assert_eq!(packed.to_bits(), 0);
    }

    #[test]
    fn test_dark_ignores_alpha() {
        let dark = Color::new(1.0, 0.5, 0.0, 0.0);
        let skeleton = Color::new(1.0, 1.0, 1.0, 0.1);
        let packed = dark_color(skeleton, Some(dark), Color::new(1.0, 1.0, 1.0, 0.2));
        assert_eq!(unpack_color(packed), [255, 127, 0, 0]);
    }

    fn unit() -> impl Strategy<Value = f32> {
        0.0f32..=1.0
    }

    fn color() -> impl Strategy<Value = Color> {
        (unit(), unit(), unit(), unit()).prop_map(|(r, g, b, a)| Color::new(r, g, b, a))
    }

    proptest! {
        #[test]
        fn light_channels_are_truncated_products(skeleton in color(), slot in color(), attachment in color()) {
            let alpha = skeleton.a * slot.a * attachment.a * 255.0;
            prop_assert!((alpha / 255.0 - skeleton.a * slot.a * attachment.a).abs() < 1e-6);

            let [r, g, b, a] = unpack_color(light_color(skeleton, slot, attachment));
            prop_assert_eq!(a as i32, (alpha as i32).clamp(0, 255));
            prop_assert_eq!(r as i32, ((skeleton.r * slot.r * attachment.r * alpha) as i32).clamp(0, 255));
            prop_assert_eq!(g as i32, ((skeleton.g * slot.g * attachment.g * alpha) as i32).clamp(0, 255));
            prop_assert_eq!(b as i32, ((skeleton.b * slot.b * attachment.b * alpha) as i32).clamp(0, 255));
            prop_assert!(r <= a && g <= a && b <= a);
        }

        #[test]
        fn dark_never_depends_on_alpha(dark in color(), attachment in color(), a1 in unit(), a2 in unit()) {
            let tint = Color::new(0.8, 0.6, 0.4, a1);
            let other = Color::new(0.8, 0.6, 0.4, a2);
            let with_a1 = dark_color(tint, Some(dark), attachment);
            let with_a2 = dark_color(other, Some(dark), Color { a: a1, ..attachment });
            prop_assert_eq!(with_a1.to_bits(), with_a2.to_bits());
            prop_assert_eq!(unpack_color(with_a1)[3], 0);
        }
    }
}
