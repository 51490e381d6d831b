//! Horizontal axis shared by the renderers.
//!
//! Layout x coordinates halve with depth, so a sparse tree can cover a range
//! far wider than its node count. Positions are assigned by rank instead: the
//! distinct x values are visited left to right, each one advancing past the
//! previous by its scaled distance capped at one box width plus gap, then
//! pushed further if a box on the same level would come too close.

/// Horizontal footprint of a box centred at `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub x: f64,
    /// Distance from the centre to the left edge.
    pub left: f64,
    /// Distance from the centre to the right edge.
    pub right: f64,
}

impl Extent {
    pub fn new(x: f64, left: f64, right: f64) -> Self {
        Self { x, left, right }
    }
}

/// Minimum centre distance for `a` followed by `b` on one level.
fn separation(a: &Extent, b: &Extent, gap: f64) -> f64 {
    a.right + b.left + gap
}

/// Output units per layout unit so that every pair of neighbours on a level
/// keeps `gap` between them. Never below 1.
pub fn scale(levels: &[Vec<Extent>], gap: f64) -> f64 {
    let mut scale: f64 = 1.0;
    for level in levels {
        for pair in level.windows(2) {
            let dx = pair[1].x - pair[0].x;
            if dx > 0.0 {
                scale = scale.max(separation(&pair[0], &pair[1], gap) / dx);
            }
        }
    }
    scale
}

/// Output position for every distinct layout x, sorted by x.
#[derive(Debug, Clone, Default)]
pub struct Axis {
    stops: Vec<(f64, f64)>,
}

impl Axis {
    /// Fit positions to `levels`, each sorted by x. Positions start at 0,
    /// are whole numbers and strictly increase with x.
    pub fn fit(levels: &[Vec<Extent>], gap: f64) -> Self {
        let mut xs: Vec<f64> = levels.iter().flatten().map(|e| e.x).collect();
        xs.sort_by(f64::total_cmp);
        xs.dedup();

        let scale = scale(levels, gap);
        let cap = levels
            .iter()
            .flatten()
            .map(|e| e.left + e.right)
            .fold(0.0, f64::max)
            + gap;

        // Same-level neighbour constraints, indexed by the right box's rank.
        let rank = |x: f64| xs.partition_point(|&v| v < x);
        let mut pushes: Vec<Vec<(usize, f64)>> = vec![Vec::new(); xs.len()];
        for level in levels {
            for pair in level.windows(2) {
                let (a, b) = (&pair[0], &pair[1]);
                pushes[rank(b.x)].push((rank(a.x), separation(a, b, gap)));
            }
        }

        let mut stops: Vec<(f64, f64)> = Vec::with_capacity(xs.len());
        for (k, &x) in xs.iter().enumerate() {
            let mut pos = stops.last().map_or(0.0, |&(prev_x, prev_pos)| {
                prev_pos + ((x - prev_x) * scale).min(cap).round().max(1.0)
            });
            for &(i, sep) in &pushes[k] {
                if let Some(&(_, base)) = stops.get(i) {
                    pos = pos.max((base + sep).ceil());
                }
            }
            stops.push((x, pos));
        }
        Self { stops }
    }

    /// Position of layout coordinate `x`; 0 for an x the axis was not fit to.
    pub fn position(&self, x: f64) -> f64 {
        self.stops
            .get(self.stops.partition_point(|&(v, _)| v < x))
            .filter(|&&(v, _)| v == x)
            .map_or(0.0, |&(_, pos)| pos)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_axis.rs"]
mod tests;
