//! Geometry core for the pointer-reactive dot field.
//!
//! Kept free of DOM types so the influence math can be exercised directly.
//! The component layer samples the container box once per event and feeds it
//! in here, rather than querying each dot's rendered rect.

/// Pointer distance (px) beyond which a dot is unaffected.
pub const MAX_DISTANCE: f64 = 150.0;
/// Maximum displacement (px) of a dot directly under the pointer.
pub const PUSH_DISTANCE: f64 = 30.0;
const SCALE_BOOST: f64 = 0.5;
const BASE_OPACITY: f64 = 0.2;
const OPACITY_BOOST: f64 = 0.6;

/// Normalized proximity in `[0, 1]`: 1 at the pointer, 0 at or past
/// [`MAX_DISTANCE`].
pub fn influence(distance: f64) -> f64 {
    (1.0 - distance / MAX_DISTANCE).max(0.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    pub rows: usize,
    pub cols: usize,
}

impl GridSpec {
    pub const fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fraction of the container width at which column `col` sits.
    pub fn left_frac(&self, col: usize) -> f64 {
        col as f64 / self.cols as f64
    }

    /// Fraction of the container height at which row `row` sits.
    pub fn top_frac(&self, row: usize) -> f64 {
        row as f64 / self.rows as f64
    }

    /// Dot center in container-local pixels. Matches the percentage layout
    /// (`left: col/C * 100%`, `top: row/R * 100%`).
    pub fn dot_center(&self, row: usize, col: usize, width: f64, height: f64) -> (f64, f64) {
        (self.left_frac(col) * width, self.top_frac(row) * height)
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self { rows: 40, cols: 60 }
    }
}

/// Visual state of one dot: translation offset, scale, and opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotVisual {
    pub offset_x: f64,
    pub offset_y: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl DotVisual {
    pub const NEUTRAL: Self = Self {
        offset_x: 0.0,
        offset_y: 0.0,
        scale: 1.0,
        opacity: BASE_OPACITY,
    };

    /// State of a dot centered at `(dot_x, dot_y)` with the pointer at
    /// `(pointer_x, pointer_y)`, both container-local.
    pub fn at(dot_x: f64, dot_y: f64, pointer_x: f64, pointer_y: f64) -> Self {
        let distance = ((pointer_x - dot_x).powi(2) + (pointer_y - dot_y).powi(2)).sqrt();
        let influence = influence(distance);
        if influence <= 0.0 {
            return Self::NEUTRAL;
        }
        // angle from the pointer toward the dot, so the push moves it away
        let angle = (dot_y - pointer_y).atan2(dot_x - pointer_x);
        Self {
            offset_x: angle.cos() * influence * PUSH_DISTANCE,
            offset_y: angle.sin() * influence * PUSH_DISTANCE,
            scale: 1.0 + influence * SCALE_BOOST,
            opacity: BASE_OPACITY + influence * OPACITY_BOOST,
        }
    }
}

/// The whole grid's visual state, recomputed from the latest pointer sample.
///
/// Every dot is touched on every sample - the grid is small enough that
/// spatial culling isn't worth the bookkeeping.
#[derive(Debug, Clone)]
pub struct ProximityField {
    spec: GridSpec,
    visuals: Vec<DotVisual>,
}

impl ProximityField {
    pub fn new(spec: GridSpec) -> Self {
        Self {
            spec,
            visuals: vec![DotVisual::NEUTRAL; spec.len()],
        }
    }

    pub fn spec(&self) -> GridSpec {
        self.spec
    }

    pub fn visuals(&self) -> &[DotVisual] {
        &self.visuals
    }

    /// Recompute every dot from a pointer at `(x, y)` inside a
    /// `width` x `height` container.
    pub fn pointer_moved(&mut self, width: f64, height: f64, x: f64, y: f64) -> &[DotVisual] {
        for row in 0..self.spec.rows {
            for col in 0..self.spec.cols {
                let (dot_x, dot_y) = self.spec.dot_center(row, col, width, height);
                self.visuals[row * self.spec.cols + col] = DotVisual::at(dot_x, dot_y, x, y);
            }
        }
        &self.visuals
    }

    /// Pointer left the container: every dot goes back to neutral.
    pub fn pointer_left(&mut self) -> &[DotVisual] {
        self.visuals.fill(DotVisual::NEUTRAL);
        &self.visuals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn far_dots_stay_neutral() {
        for (px, py) in [(151.0, 0.0), (0.0, 200.0), (120.0, 120.0), (1000.0, 1000.0)] {
            assert_eq!(DotVisual::at(0.0, 0.0, px, py), DotVisual::NEUTRAL);
        }
        // exactly at the boundary counts as out of range
        assert_eq!(DotVisual::at(0.0, 0.0, MAX_DISTANCE, 0.0), DotVisual::NEUTRAL);
    }

    #[test]
    fn pointer_on_center_maxes_out() {
        let v = DotVisual::at(40.0, 60.0, 40.0, 60.0);
        assert!((v.scale - 1.5).abs() < 1e-9);
        assert!((v.opacity - 0.8).abs() < 1e-9);
        let magnitude = (v.offset_x.powi(2) + v.offset_y.powi(2)).sqrt();
        assert!((magnitude - PUSH_DISTANCE).abs() < 1e-9);
    }

    #[test]
    fn influence_never_increases_with_distance() {
        let mut last = influence(0.0);
        assert_eq!(last, 1.0);
        for step in 1..=300 {
            let d = f64::from(step);
            let i = influence(d);
            assert!(i <= last, "influence rose between {} and {}", d - 1.0, d);
            last = i;
        }
        assert_eq!(influence(MAX_DISTANCE), 0.0);
        assert_eq!(influence(MAX_DISTANCE + 1.0), 0.0);
    }

    #[test]
    fn displacement_points_away_from_pointer() {
        // pointer left of the dot pushes it right
        let v = DotVisual::at(100.0, 100.0, 40.0, 100.0);
        assert!(v.offset_x > 0.0);
        assert!(v.offset_y.abs() < 1e-9);
        // pointer above the dot pushes it down
        let v = DotVisual::at(100.0, 100.0, 100.0, 40.0);
        assert!(v.offset_y > 0.0);
        assert!(v.offset_x.abs() < 1e-9);
    }

    #[test]
    fn closer_pointer_means_stronger_push() {
        let near = DotVisual::at(100.0, 100.0, 60.0, 100.0);
        let far = DotVisual::at(100.0, 100.0, 20.0, 100.0);
        assert!(near.offset_x > far.offset_x);
        assert!(near.scale > far.scale);
        assert!(near.opacity > far.opacity);
    }

    #[test]
    fn leave_resets_every_dot() {
        let mut field = ProximityField::new(GridSpec::default());
        field.pointer_moved(1500.0, 1000.0, 750.0, 500.0);
        assert!(field.visuals().iter().any(|v| *v != DotVisual::NEUTRAL));
        field.pointer_left();
        assert!(field.visuals().iter().all(|v| *v == DotVisual::NEUTRAL));
    }

    #[test]
    fn full_grid_sample() {
        // 40x60 grid in a 1500x1000 container: dot (row 20, col 30) sits
        // exactly at (750, 500)
        let spec = GridSpec::default();
        let mut field = ProximityField::new(spec);
        field.pointer_moved(1500.0, 1000.0, 750.0, 500.0);

        let hit = field.visuals()[20 * spec.cols + 30];
        assert!((hit.scale - 1.5).abs() < 1e-9);
        assert!((hit.opacity - 0.8).abs() < 1e-9);

        // dot (row 20, col 42) is 300px away along x
        let far = field.visuals()[20 * spec.cols + 42];
        assert_eq!(far, DotVisual::NEUTRAL);

        field.pointer_left();
        assert!(field.visuals().iter().all(|v| *v == DotVisual::NEUTRAL));
    }
}
