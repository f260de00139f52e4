// Perimeter counter: the midpoint (Bresenham) circle algorithm.
// Visual: the red outline drawn over the quarter disc is exactly the set of
// points this iterator plots, reflected into the visible quadrant.

/// Walks the first octant of a midpoint circle, yielding `(x, y)` with `x >= y`.
///
/// Every yielded point stands for eight plots (one per octant reflection).
/// Radius 0 or below yields nothing: `x` starts at `radius - 1 < y`.
pub struct MidpointOctant {
    radius: i64,
    x: i64,
    y: i64,
    dx: i64,
    dy: i64,
    decision_over2: i64,
}

impl MidpointOctant {
    pub fn new(radius: i64) -> Self {
        let dx = 1;
        Self {
            radius,
            x: radius - 1,
            y: 0,
            dx,
            dy: 1,
            decision_over2: dx - (radius << 1),
        }
    }
}

impl Iterator for MidpointOctant {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.x < self.y {
            return None;
        }
        let point = (self.x, self.y);

        // Step y; the decision may then also call for an x step in the
        // same iteration (this is what happens at the x == y diagonal).
        if self.decision_over2 <= 0 {
            self.y += 1;
            self.decision_over2 += self.dy;
            self.dy += 2;
        }
        if self.decision_over2 > 0 {
            self.x -= 1;
            self.dx += 2;
            self.decision_over2 += self.dx - (self.radius << 1);
        }

        Some(point)
    }
}

/// Number of pixels a midpoint rasterizer plots for a full circle of `radius`.
pub fn perimeter_pixel_count(radius: i64) -> u64 {
    MidpointOctant::new(radius).count() as u64 * 8
}

/// The eight octant reflections of a first-octant point about the origin.
pub fn reflect_eight_ways((x, y): (i64, i64)) -> [(i64, i64); 8] {
    [
        (x, y),
        (y, x),
        (-x, y),
        (-y, x),
        (-x, -y),
        (-y, -x),
        (x, -y),
        (y, -x),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Plot-counting midpoint circle, written the long way round:
    /// one increment per plotted pixel, centre at (r, r).
    fn reference_plot_count(radius: i64) -> u64 {
        let (x0, y0) = (radius, radius);
        let mut plotted = 0u64;
        let mut plot = |_px: i64, _py: i64| plotted += 1;

        let mut x = radius - 1;
        let mut y = 0;
        let mut dx = 1;
        let mut dy = 1;
        let mut err = dx - (radius << 1);
        while x >= y {
            plot(x0 + x, y0 + y);
            plot(x0 + y, y0 + x);
            plot(x0 - y, y0 + x);
            plot(x0 - x, y0 + y);
            plot(x0 - x, y0 - y);
            plot(x0 - y, y0 - x);
            plot(x0 + y, y0 - x);
            plot(x0 + x, y0 - y);

            if err <= 0 {
                y += 1;
                err += dy;
                dy += 2;
            }
            if err > 0 {
                x -= 1;
                dx += 2;
                err += dx - (radius << 1);
            }
        }
        plotted
    }

    #[test_log::test]
    fn matches_reference_for_first_five_hundred_radii() {
        for r in 0..=500 {
            assert_eq!(perimeter_pixel_count(r), reference_plot_count(r), "radius {r}");
        }
    }

    #[test]
    fn known_small_values() {
        assert_eq!(perimeter_pixel_count(0), 0);
        assert_eq!(perimeter_pixel_count(1), 8);
        let counts: Vec<u64> = (0..12).map(perimeter_pixel_count).collect();
        assert_eq!(counts, vec![0, 8, 16, 24, 24, 32, 40, 40, 48, 56, 64, 64]);
    }

    #[test]
    fn negative_radius_plots_nothing() {
        assert_eq!(perimeter_pixel_count(-1), 0);
        assert_eq!(perimeter_pixel_count(-250), 0);
        assert_eq!(MidpointOctant::new(-3).next(), None);
    }

    #[test]
    fn count_never_decreases_with_radius() {
        let mut prev = 0;
        for r in 0..=500 {
            let c = perimeter_pixel_count(r);
            assert!(c >= prev, "radius {r}: {c} < {prev}");
            prev = c;
        }
    }

    #[test]
    fn repeated_runs_agree() {
        assert_eq!(perimeter_pixel_count(137), perimeter_pixel_count(137));
    }

    #[test]
    fn octant_points_stay_in_first_octant_near_the_circle() {
        let r = 40;
        for (x, y) in MidpointOctant::new(r) {
            assert!(x >= y && y >= 0);
            let d2 = x * x + y * y;
            // Offsets start at r - 1, so points hug the inside of the circle.
            assert!(d2 <= r * r, "({x},{y}) outside r={r}");
            assert!(d2 >= (r - 2) * (r - 2), "({x},{y}) too far inside r={r}");
        }
    }

    #[test]
    fn reflections_cover_all_sign_combinations() {
        let pts = reflect_eight_ways((3, 1));
        for p in [(3, 1), (1, 3), (-3, 1), (-1, 3), (-3, -1), (-1, -3), (3, -1), (1, -3)] {
            assert!(pts.contains(&p));
        }
    }
}
