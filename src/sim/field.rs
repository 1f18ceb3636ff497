//! Procedural platform field
//!
//! Platforms are placed in a vertical chain: each new platform sits a random
//! gap (drawn from the active tier's range) above or below the previous one, at
//! a random x. The field is culled far below the player and extended above it
//! as the player climbs, so its size stays bounded without an explicit cap.

use glam::Vec2;
use rand::Rng;

use super::state::{Platform, PlatformColor, World};
use super::tier::{DifficultyTier, TierParams};
use crate::consts::*;

/// The set of active platforms, in generation order
#[derive(Debug, Clone, Default)]
pub struct PlatformField {
    platforms: Vec<Platform>,
}

impl PlatformField {
    pub fn new() -> Self {
        Self {
            platforms: Vec::new(),
        }
    }

    /// Field holding exactly these platforms, in this order
    pub fn from_platforms(platforms: Vec<Platform>) -> Self {
        Self { platforms }
    }

    /// Clear and repopulate around a spawn height.
    ///
    /// Places the ground under the spawn point, then chains platforms down to
    /// `FILL_BELOW_SCREENS` and up to `FILL_ABOVE_SCREENS` screens away.
    pub fn initialize<R: Rng + ?Sized>(
        &mut self,
        world: &World,
        spawn_y: f32,
        tier: DifficultyTier,
        rng: &mut R,
    ) {
        let params = tier.params();
        self.platforms.clear();

        let ground_y = spawn_y - GROUND_OFFSET;
        let ground_x = (world.width / 2.0).floor();
        self.spawn(Vec2::new(ground_x, ground_y), &params, rng);

        let first_gap = FIRST_GAP.clamp(params.min_gap, params.max_gap) as f32;

        // Below the ground
        let floor = spawn_y - world.height * FILL_BELOW_SCREENS;
        let mut y = ground_y - first_gap;
        while y > floor {
            let x = random_x(world, rng);
            self.spawn(Vec2::new(x, y), &params, rng);
            y -= random_gap(&params, rng);
        }

        // Above the ground
        let ceiling = spawn_y + world.height * FILL_ABOVE_SCREENS;
        let mut y = ground_y + first_gap;
        while y < ceiling {
            let x = random_x(world, rng);
            self.spawn(Vec2::new(x, y), &params, rng);
            y += random_gap(&params, rng);
        }

        log::debug!(
            "Field initialized: {} platforms in [{}, {})",
            self.platforms.len(),
            floor,
            ceiling
        );
    }

    /// Drop every platform more than `CULL_SCREENS` screens below the player.
    ///
    /// Returns how many were removed. Nothing above that line is touched.
    pub fn recycle(&mut self, world: &World, player_y: f32) -> usize {
        let limit = player_y - world.height * CULL_SCREENS;
        let before = self.platforms.len();
        self.platforms.retain(|p| p.center.y >= limit);
        before - self.platforms.len()
    }

    /// Append `PLATFORMS_PER_EXTENSION` platforms above the highest one when
    /// the field's top gets within `EXTEND_LOOKAHEAD_SCREENS` of the player.
    ///
    /// New platforms use the tier passed in; existing ones are left as they
    /// were generated. Returns how many were added.
    pub fn extend<R: Rng + ?Sized>(
        &mut self,
        world: &World,
        player_y: f32,
        tier: DifficultyTier,
        rng: &mut R,
    ) -> usize {
        let lookahead = player_y + world.height * EXTEND_LOOKAHEAD_SCREENS;
        let top_y = match self.highest() {
            Some(highest) if highest.center.y >= lookahead => return 0,
            Some(highest) => highest.center.y,
            None => {
                log::warn!("Platform field empty, regrowing from player height {}", player_y);
                player_y
            }
        };

        let params = tier.params();
        let mut y = top_y + random_gap(&params, rng);
        for _ in 0..PLATFORMS_PER_EXTENSION {
            let x = random_x(world, rng);
            self.spawn(Vec2::new(x, y), &params, rng);
            y += random_gap(&params, rng);
        }

        log::debug!(
            "Field extended above {} ({} platforms)",
            top_y,
            self.platforms.len()
        );
        PLATFORMS_PER_EXTENSION
    }

    /// Platform with the greatest center y
    pub fn highest(&self) -> Option<&Platform> {
        self.platforms
            .iter()
            .max_by(|a, b| a.center.y.total_cmp(&b.center.y))
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    fn spawn<R: Rng + ?Sized>(&mut self, center: Vec2, params: &TierParams, rng: &mut R) {
        let color = PlatformColor::ALL[rng.random_range(0..PlatformColor::ALL.len())];
        self.platforms
            .push(Platform::for_tier(center, params, color));
    }
}

/// Gap to the next platform, uniform over the tier's inclusive integer range
fn random_gap<R: Rng + ?Sized>(params: &TierParams, rng: &mut R) -> f32 {
    rng.random_range(params.min_gap..=params.max_gap) as f32
}

/// Platform center x, uniform integer within the side margins
fn random_x<R: Rng + ?Sized>(world: &World, rng: &mut R) -> f32 {
    let lo = PLATFORM_X_MARGIN;
    let hi = (world.width as i32 - PLATFORM_X_MARGIN).max(lo);
    rng.random_range(lo..=hi) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use crate::sim::tier::{TIER1_PARAMS, TIER2_PARAMS};

    fn platform_at(y: f32) -> Platform {
        Platform::for_tier(Vec2::new(400.0, y), &TIER1_PARAMS, PlatformColor::Green)
    }

    /// Gaps between consecutive platforms in generation order, from `start`
    fn gaps(platforms: &[Platform], start: usize) -> Vec<f32> {
        platforms[start..]
            .windows(2)
            .map(|w| (w[1].center.y - w[0].center.y).abs())
            .collect()
    }

    #[test]
    fn test_initialize_has_one_ground() {
        let world = World::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut field = PlatformField::new();
        field.initialize(&world, 240.0, DifficultyTier::Tier1, &mut rng);

        let ground = field.platforms()[0];
        assert_eq!(ground.center, Vec2::new(410.0, 190.0));
        let at_ground = field
            .platforms()
            .iter()
            .filter(|p| p.center.y == 190.0)
            .count();
        assert_eq!(at_ground, 1);
    }

    #[test]
    fn test_initialize_span() {
        let world = World::default();
        let mut rng = Pcg32::seed_from_u64(2);
        let mut field = PlatformField::new();
        field.initialize(&world, 240.0, DifficultyTier::Tier1, &mut rng);

        let lowest = field
            .platforms()
            .iter()
            .map(|p| p.center.y)
            .fold(f32::INFINITY, f32::min);
        let highest = field.highest().map(|p| p.center.y).unwrap_or_default();

        assert!(lowest > 240.0 - 2.0 * 720.0);
        assert!(lowest <= 240.0 - 2.0 * 720.0 + 150.0);
        assert!(highest < 240.0 + 3.0 * 720.0);
        assert!(highest >= 240.0 + 3.0 * 720.0 - 150.0);

        for p in field.platforms() {
            assert!(p.center.x >= 50.0 && p.center.x <= 770.0);
        }
    }

    #[test]
    fn test_initialize_gaps_in_range() {
        let world = World::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut field = PlatformField::new();
        field.initialize(&world, 240.0, DifficultyTier::Tier1, &mut rng);

        // Index 0 is the ground; the downward chain starts at 1 and the
        // upward chain restarts from the ground, so split on direction.
        let ps = field.platforms();
        let split = ps
            .iter()
            .position(|p| p.center.y > ps[0].center.y)
            .unwrap_or(ps.len());
        let below: Vec<Platform> = std::iter::once(ps[0]).chain(ps[1..split].iter().copied()).collect();
        let above: Vec<Platform> = std::iter::once(ps[0]).chain(ps[split..].iter().copied()).collect();

        for gap in gaps(&below, 0).into_iter().chain(gaps(&above, 0)) {
            assert!((80.0..=150.0).contains(&gap), "gap {gap} out of range");
        }
    }

    #[test]
    fn test_recycle_culls_far_below_only() {
        let world = World::default();
        let mut field = PlatformField::from_platforms(vec![
            platform_at(-2000.0),
            platform_at(-1000.0),
            platform_at(500.0),
            platform_at(5000.0),
        ]);

        // Cull line is 0 - 1440
        let removed = field.recycle(&world, 0.0);
        assert_eq!(removed, 1);
        let ys: Vec<f32> = field.platforms().iter().map(|p| p.center.y).collect();
        assert_eq!(ys, vec![-1000.0, 500.0, 5000.0]);
    }

    #[test]
    fn test_recycle_boundary_is_kept() {
        let world = World::default();
        let mut field = PlatformField::from_platforms(vec![platform_at(0.0)]);
        assert_eq!(field.recycle(&world, 1440.0), 0);
        assert_eq!(field.recycle(&world, 1440.5), 1);
    }

    #[test]
    fn test_extend_adds_three_when_needed() {
        let world = World::default();
        let mut rng = Pcg32::seed_from_u64(4);
        let mut field = PlatformField::from_platforms(vec![platform_at(100.0)]);

        let added = field.extend(&world, 0.0, DifficultyTier::Tier1, &mut rng);
        assert_eq!(added, 3);
        assert_eq!(field.len(), 4);

        // Already far enough ahead
        let mut field = PlatformField::from_platforms(vec![platform_at(1440.0)]);
        assert_eq!(field.extend(&world, 0.0, DifficultyTier::Tier1, &mut rng), 0);
        assert_eq!(field.len(), 1);
    }

    #[test]
    fn test_extend_uses_current_tier_only_for_new_platforms() {
        let world = World::default();
        let mut rng = Pcg32::seed_from_u64(5);
        let mut field = PlatformField::from_platforms(vec![platform_at(100.0)]);

        field.extend(&world, 0.0, DifficultyTier::Tier2, &mut rng);

        let ps = field.platforms();
        // Old platform untouched
        assert_eq!(ps[0].right - ps[0].left, TIER1_PARAMS.platform_width);
        for p in &ps[1..] {
            assert_eq!(p.right - p.left, TIER2_PARAMS.platform_width);
        }
        for gap in gaps(ps, 0) {
            assert!((110.0..=170.0).contains(&gap), "gap {gap} out of range");
        }
    }

    #[test]
    fn test_extend_empty_field_grows_from_player() {
        let world = World::default();
        let mut rng = Pcg32::seed_from_u64(6);
        let mut field = PlatformField::new();

        assert_eq!(field.extend(&world, 300.0, DifficultyTier::Tier1, &mut rng), 3);
        let first = field.platforms()[0].center.y;
        assert!((380.0..=450.0).contains(&first));
    }

    proptest! {
        #[test]
        fn prop_recycle_keeps_everything_within_two_screens(
            ys in prop::collection::vec(-5000.0f32..5000.0, 0..40),
            player_y in -3000.0f32..3000.0,
        ) {
            let world = World::default();
            let mut field = PlatformField::from_platforms(ys.iter().map(|&y| platform_at(y)).collect());
            let limit = player_y - 2.0 * world.height;
            let expected = ys.iter().filter(|&&y| y >= limit).count();

            field.recycle(&world, player_y);

            prop_assert_eq!(field.len(), expected);
            prop_assert!(field.platforms().iter().all(|p| p.center.y >= limit));
        }

        #[test]
        fn prop_extend_gaps_within_tier_range(
            seed in any::<u64>(),
            start_y in -2000.0f32..2000.0,
            tier2 in any::<bool>(),
        ) {
            let world = World::default();
            let tier = if tier2 { DifficultyTier::Tier2 } else { DifficultyTier::Tier1 };
            let params = tier.params();
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut field = PlatformField::from_platforms(vec![platform_at(start_y.round())]);

            field.extend(&world, start_y, tier, &mut rng);

            for gap in gaps(field.platforms(), 0) {
                prop_assert!(gap >= params.min_gap as f32 && gap <= params.max_gap as f32);
            }
        }
    }
}
