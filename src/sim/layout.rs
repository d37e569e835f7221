//! Bed row layout and seed spawn placement

use glam::Vec2;
use rand::Rng;

use super::state::Bed;
use crate::catalog::Rgb;
use crate::consts::*;

/// Gap between beds (and at both ends) for `count` beds across `width`
pub fn bed_spacing(count: usize, width: f32) -> f32 {
    (width - count as f32 * BED_WIDTH) / (count as f32 + 1.0)
}

/// One bed per color in a single centered row
pub fn bed_row(colors: &[Rgb], width: f32, mut next_id: impl FnMut() -> u32) -> Vec<Bed> {
    let spacing = bed_spacing(colors.len(), width);
    colors
        .iter()
        .enumerate()
        .map(|(i, &color)| Bed {
            id: next_id(),
            color,
            pos: Vec2::new(spacing + i as f32 * (BED_WIDTH + spacing), BED_ROW_Y),
            width: BED_WIDTH,
            height: BED_HEIGHT,
        })
        .collect()
}

/// Random spawn point in the lower part of the surface.
///
/// x is uniform in `[30, width - 30)`, y in `[height/2 - 100, height - 100)`.
/// Surfaces narrower than both margins spawn on the vertical midline.
pub fn spawn_point<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32) -> Vec2 {
    let span_x = width - 2.0 * SEED_MARGIN_X;
    let x = if span_x > 0.0 {
        SEED_MARGIN_X + rng.random::<f32>() * span_x
    } else {
        width / 2.0
    };
    let y = height / 2.0 - SEED_SPAWN_RISE + rng.random::<f32>() * (height / 2.0);
    Vec2::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::palette::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn three_beds_on_400_wide() {
        let mut id = 0;
        let beds = bed_row(&[RED, BLUE, YELLOW], 400.0, || {
            id += 1;
            id
        });
        // (400 - 240) / 4 = 40
        let xs: Vec<f32> = beds.iter().map(|b| b.pos.x).collect();
        assert_eq!(xs, vec![40.0, 160.0, 280.0]);
        assert!(beds.iter().all(|b| b.pos.y == BED_ROW_Y));
        assert_eq!(beds.iter().map(|b| b.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn narrow_surface_spawns_centered() {
        let mut rng = Pcg32::seed_from_u64(1);
        let p = spawn_point(&mut rng, 40.0, 300.0);
        assert_eq!(p.x, 20.0);
    }

    proptest! {
        #[test]
        fn beds_evenly_spaced(count in 1usize..8, width in 100.0f32..1200.0) {
            let colors = vec![RED; count];
            let mut id = 0;
            let beds = bed_row(&colors, width, || { id += 1; id });
            prop_assert_eq!(beds.len(), count);
            let spacing = bed_spacing(count, width);
            prop_assert!((beds[0].pos.x - spacing).abs() < 1e-3);
            for pair in beds.windows(2) {
                let step = pair[1].pos.x - pair[0].pos.x;
                prop_assert!(step > 0.0);
                prop_assert!((step - (BED_WIDTH + spacing)).abs() < 1e-3);
            }
        }

        #[test]
        fn spawn_points_stay_in_lower_band(seed in any::<u64>(), width in 61.0f32..1200.0, height in 1.0f32..1200.0) {
            let mut rng = Pcg32::seed_from_u64(seed);
            for _ in 0..16 {
                let p = spawn_point(&mut rng, width, height);
                prop_assert!(p.x >= SEED_MARGIN_X && p.x <= width - SEED_MARGIN_X + 1e-3);
                prop_assert!(p.y >= height / 2.0 - SEED_SPAWN_RISE && p.y <= height);
            }
        }
    }
}
