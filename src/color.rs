use eframe::egui::Color32;
use palette::{LinSrgb, Mix, Srgb};

// ---------------------------------------------------------------------------
// Viridis gradient
// ---------------------------------------------------------------------------

/// Anchor colors of the viridis scale, evenly spaced over [0, 1].
const VIRIDIS_ANCHORS: [[u8; 3]; 10] = [
    [0x44, 0x01, 0x54],
    [0x48, 0x28, 0x78],
    [0x3e, 0x49, 0x89],
    [0x31, 0x68, 0x8e],
    [0x26, 0x82, 0x8e],
    [0x1f, 0x9e, 0x89],
    [0x35, 0xb7, 0x79],
    [0x6e, 0xce, 0x58],
    [0xb5, 0xde, 0x2b],
    [0xfd, 0xe7, 0x25],
];

fn anchor_linear(i: usize) -> LinSrgb {
    let [r, g, b] = VIRIDIS_ANCHORS[i];
    Srgb::new(
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
    )
    .into_linear()
}

/// Sample the viridis gradient at `t`, clamped to [0, 1].
pub fn viridis(t: f64) -> Color32 {
    let t = t.clamp(0.0, 1.0) as f32;
    let segments = (VIRIDIS_ANCHORS.len() - 1) as f32;
    let pos = t * segments;
    let i = (pos.floor() as usize).min(VIRIDIS_ANCHORS.len() - 2);
    let frac = pos - i as f32;

    let mixed = anchor_linear(i).mix(anchor_linear(i + 1), frac);
    let rgb: Srgb = Srgb::from_linear(mixed);
    Color32::from_rgb(
        (rgb.red * 255.0).round() as u8,
        (rgb.green * 255.0).round() as u8,
        (rgb.blue * 255.0).round() as u8,
    )
}

// ---------------------------------------------------------------------------
// Color mapping: row index → Color32
// ---------------------------------------------------------------------------

/// Maps a zero-based row index onto the viridis scale, normalized over the
/// dataset length.  A single-row dataset maps to the low end of the scale.
#[derive(Debug, Clone, Copy)]
pub struct IndexColorMap {
    len: usize,
}

impl IndexColorMap {
    pub fn new(len: usize) -> Self {
        IndexColorMap { len }
    }

    /// Highest index on the scale, used for the colorbar tick labels.
    pub fn max_index(&self) -> usize {
        self.len.saturating_sub(1)
    }

    /// Look up the color for a given row index.
    pub fn color_for(&self, index: usize) -> Color32 {
        if self.len <= 1 {
            return viridis(0.0);
        }
        viridis(index as f64 / (self.len - 1) as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_endpoints_match_the_anchor_colors() {
        assert_eq!(viridis(0.0), Color32::from_rgb(0x44, 0x01, 0x54));
        assert_eq!(viridis(1.0), Color32::from_rgb(0xfd, 0xe7, 0x25));
    }

    #[test]
    fn out_of_range_inputs_clamp() {
        assert_eq!(viridis(-3.0), viridis(0.0));
        assert_eq!(viridis(7.5), viridis(1.0));
    }

    #[test]
    fn index_map_spans_the_full_scale() {
        let map = IndexColorMap::new(3);
        assert_eq!(map.color_for(0), viridis(0.0));
        assert_eq!(map.color_for(1), viridis(0.5));
        assert_eq!(map.color_for(2), viridis(1.0));
        assert_eq!(map.max_index(), 2);
    }

    #[test]
    fn degenerate_lengths_map_to_the_low_end() {
        assert_eq!(IndexColorMap::new(0).color_for(0), viridis(0.0));
        assert_eq!(IndexColorMap::new(1).color_for(0), viridis(0.0));
        assert_eq!(IndexColorMap::new(0).max_index(), 0);
    }
}
