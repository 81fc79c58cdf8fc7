use easel_engine::Rgb;

/// Blend one channel of the brush into the water.
/// Weighted toward the water and softened by the channel-wise minimum, so
/// dipping never brightens a channel past the brighter of the two inputs.
pub fn mix_channel(water: u8, brush: u8) -> u8 {
    let (w, b) = (water as u32, brush as u32);
    // +3 rounds half up
    ((3 * w + 2 * w.min(b) + b + 3) / 6) as u8
}

/// Water color after dipping a brush loaded with `brush`.
pub fn mix_water(water: Rgb, brush: Rgb) -> Rgb {
    let [wr, wg, wb] = water.channels();
    let [br, bg, bb] = brush.channels();
    Rgb::from_channels(mix_channel(wr, br), mix_channel(wg, bg), mix_channel(wb, bb))
}

/// Alpha actually applied to stamps. The steep curve keeps paint solid until
/// opacity runs low.
pub fn visual_alpha(opacity: f32) -> f32 {
    opacity.clamp(0.0, 1.0).powi(8)
}
