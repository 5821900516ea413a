//! Surface fitting.
//!
//! [`compute_target_size`] derives the render surface size from the window
//! size; [`apply_resize_observer`] runs it on every [`ApplyResizeEvent`] and
//! hands the result to the host.
//!
//! With `maintain_aspect` the surface is first fitted to the window width. If
//! that makes it taller than the window, it is fitted to the window height
//! instead. Both steps floor, so the surface never overflows the window and
//! its ratio is off from the design ratio by at most one floor's worth.
//!
//! ```text
//!  window 1920x1080, base 816x624 (ratio 1.3077)
//!  width-fit : 1920 x floor(1920 / 1.3077) = 1920 x 1468  -> too tall
//!  height-fit: floor(1080 * 1.3077) x 1080 = 1412 x 1080
//! ```

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{info, warn};

use crate::events::window::ApplyResizeEvent;
use crate::resources::autoscaleconfig::AutoscaleConfig;
use crate::resources::rendersurface::RenderSurface;
use crate::resources::surfacesize::SurfaceSize;
use crate::resources::windowsize::WindowSize;

/// Target render surface size for a window of `window_w` x `window_h`.
pub fn compute_target_size(window_w: u32, window_h: u32, config: &AutoscaleConfig) -> (u32, u32) {
    if !config.maintain_aspect {
        return (window_w, window_h);
    }

    let aspect = config.aspect_ratio();
    let width = window_w;
    let height = (width as f64 / aspect).floor() as u32;

    if height > window_h {
        let height = window_h;
        let width = (height as f64 * aspect).floor() as u32;
        return (width, height);
    }

    (width, height)
}

/// Fit the render surface to the window size current at handling time.
pub fn apply_resize_observer(
    trigger: On<ApplyResizeEvent>,
    config: Res<AutoscaleConfig>,
    window_size: Res<WindowSize>,
    mut surface_size: ResMut<SurfaceSize>,
    mut render_surface: NonSendMut<RenderSurface>,
) {
    let cause = trigger.event().cause;
    if window_size.is_degenerate() {
        warn!(
            "Window is {}x{}, surface will collapse on one axis",
            window_size.w, window_size.h
        );
    }

    let (width, height) = compute_target_size(window_size.w, window_size.h, &config);
    render_surface.resize(width, height);
    surface_size.0 = Some((width, height));

    info!(
        "Surface resized to {}x{} for window {}x{} ({:?})",
        width, height, window_size.w, window_size.h, cause
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn config(base_w: u32, base_h: u32, maintain_aspect: bool) -> AutoscaleConfig {
        AutoscaleConfig {
            base_width: base_w,
            base_height: base_h,
            maintain_aspect,
            resize_delay: Duration::from_millis(100),
        }
    }

    #[test]
    fn test_wide_window_fits_height() {
        let cfg = config(816, 624, true);
        assert_eq!(compute_target_size(1920, 1080, &cfg), (1412, 1080));
    }

    #[test]
    fn test_tall_window_fits_width() {
        let cfg = config(816, 624, true);
        // 1000 / 1.3077 = 764.7
        assert_eq!(compute_target_size(1000, 1200, &cfg), (1000, 764));
    }

    #[test]
    fn test_exact_ratio_window_is_used_as_is() {
        let cfg = config(1000, 500, true);
        assert_eq!(compute_target_size(2000, 1000, &cfg), (2000, 1000));
    }

    #[test]
    fn test_stretch_returns_window_size() {
        let cfg = config(816, 624, false);
        assert_eq!(compute_target_size(1024, 768, &cfg), (1024, 768));
        assert_eq!(compute_target_size(1, 4000, &cfg), (1, 4000));
    }

    #[test]
    fn test_zero_dimensions_collapse() {
        let cfg = config(816, 624, true);
        assert_eq!(compute_target_size(0, 600, &cfg), (0, 0));
        assert_eq!(compute_target_size(800, 0, &cfg), (0, 0));
        assert_eq!(compute_target_size(0, 0, &cfg), (0, 0));

        let stretch = config(816, 624, false);
        assert_eq!(compute_target_size(0, 600, &stretch), (0, 600));
    }

    #[test]
    fn test_fitted_size_stays_inside_window_and_keeps_ratio() {
        let mut rng = fastrand::Rng::with_seed(0x5eed);
        for _ in 0..5_000 {
            let cfg = config(rng.u32(1..=4096), rng.u32(1..=4096), true);
            let aspect = cfg.aspect_ratio();
            let (win_w, win_h) = (rng.u32(1..=8192), rng.u32(1..=8192));

            let (w, h) = compute_target_size(win_w, win_h, &cfg);

            assert!(w <= win_w, "{w} > {win_w} for {cfg:?}");
            assert!(h <= win_h, "{h} > {win_h} for {cfg:?}");
            // One floor on either axis: off by < 1px in height (times the
            // ratio in width) or < 1px in width.
            let drift = (w as f64 - h as f64 * aspect).abs();
            assert!(
                drift <= aspect.max(1.0) + 1e-9,
                "{w}x{h} drifts {drift} from ratio {aspect}"
            );
        }
    }

    #[test]
    fn test_stretch_is_identity_for_random_windows() {
        let mut rng = fastrand::Rng::with_seed(7);
        let cfg = config(816, 624, false);
        for _ in 0..1_000 {
            let (win_w, win_h) = (rng.u32(0..=8192), rng.u32(0..=8192));
            assert_eq!(compute_target_size(win_w, win_h, &cfg), (win_w, win_h));
        }
    }
}
