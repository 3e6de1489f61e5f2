/// Configuration for the tank, provided by the host.
/// Every lifecycle and spawn-zone tuning parameter is named here so hosts
/// can adjust the feel without touching engine code.
#[derive(Debug, Clone)]
pub struct TankConfig {
    /// How long a sprite lives before age-based eviction, in milliseconds
    /// (default: 5 minutes).
    pub lifetime_ms: f64,
    /// Length of one blink cycle in milliseconds (default: 30 s).
    pub blink_period_ms: f64,
    /// Dimmed window at the end of each blink cycle, in milliseconds
    /// (default: 5 s). Purely cosmetic; never affects lifecycle.
    pub blink_off_ms: f64,
    /// Extra off-screen margin beyond a sprite's size before a boundary
    /// crossing triggers a respawn (default: 150 px).
    pub respawn_buffer: f32,
    /// How far outside the entry edge a spawned/respawned sprite is placed,
    /// measured beyond its own size (default: 50 px).
    pub edge_pad: f32,
    /// Top band excluded from all spawn zones so sprites are never clipped
    /// at the surface (default: 60 px).
    pub top_margin: f32,
    /// Height of the sea-floor decoration band at the bottom of the
    /// viewport; crabs sit just above it (default: 120 px).
    pub ground_height: f32,
    /// Vertical jitter of the crab floor band (default: 8 px).
    pub crab_band: f32,
    /// Fraction of viewport height forming the jellyfish zone, measured
    /// from the top (default: 0.55).
    pub jelly_zone: f32,
    /// Extra clearance between the fish spawn band and the ground so large
    /// fish do not overlap floor decoration (default: 150 px).
    pub fish_floor_gap: f32,
}

impl Default for TankConfig {
    fn default() -> Self {
        Self {
            lifetime_ms: 5.0 * 60.0 * 1000.0,
            blink_period_ms: 30_000.0,
            blink_off_ms: 5_000.0,
            respawn_buffer: 150.0,
            edge_pad: 50.0,
            top_margin: 60.0,
            ground_height: 120.0,
            crab_band: 8.0,
            jelly_zone: 0.55,
            fish_floor_gap: 150.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lifetime_is_five_minutes() {
        let cfg = TankConfig::default();
        assert_eq!(cfg.lifetime_ms, 300_000.0);
    }

    #[test]
    fn blink_off_window_fits_inside_period() {
        let cfg = TankConfig::default();
        assert!(cfg.blink_off_ms < cfg.blink_period_ms);
    }
}
