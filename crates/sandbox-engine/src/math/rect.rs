use glam::DVec2;

/// Axis-aligned rectangle in world units (Y-up).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: DVec2,
    pub max: DVec2,
}

impl Rect {
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    /// Smallest rectangle enclosing every point. Empty input yields a
    /// degenerate rectangle at the origin.
    pub fn enclosing(points: impl IntoIterator<Item = DVec2>) -> Self {
        let mut iter = points.into_iter();
        let first = match iter.next() {
            Some(p) => p,
            None => return Self::new(DVec2::ZERO, DVec2::ZERO),
        };
        iter.fold(Self::new(first, first), |r, p| Self::new(r.min.min(p), r.max.max(p)))
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }

    /// Map into viewport pixels: X scaled, Y flipped so the origin is the
    /// top-left corner of a `viewport_height_px` tall surface.
    pub fn to_pixels(&self, unit_scale: f64, viewport_height_px: f64) -> PixelRect {
        PixelRect {
            left: self.min.x * unit_scale,
            top: viewport_height_px - self.max.y * unit_scale,
            width: self.width() * unit_scale,
            height: self.height() * unit_scale,
        }
    }
}

/// Rectangle in viewport pixels (Y-down), as handed to a renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Closed outline, clockwise from the top-left corner.
    pub fn outline(&self) -> Vec<[f64; 2]> {
        let right = self.left + self.width;
        let bottom = self.top + self.height;
        vec![
            [self.left, self.top],
            [right, self.top],
            [right, bottom],
            [self.left, bottom],
            [self.left, self.top],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enclosing_tracks_extremes() {
        let r = Rect::enclosing([
            DVec2::new(1.0, 5.0),
            DVec2::new(-2.0, 3.0),
            DVec2::new(4.0, -1.0),
        ]);
        assert_eq!(r.min, DVec2::new(-2.0, -1.0));
        assert_eq!(r.max, DVec2::new(4.0, 5.0));
        assert_eq!(r.width(), 6.0);
        assert_eq!(r.height(), 6.0);
        assert_eq!(r.center(), DVec2::new(1.0, 2.0));
    }

    #[test]
    fn pixel_space_flips_y() {
        let r = Rect::new(DVec2::new(1.0, 1.0), DVec2::new(2.0, 3.0));
        let px = r.to_pixels(10.0, 100.0);
        assert_eq!(px.left, 10.0);
        assert_eq!(px.top, 70.0);
        assert_eq!(px.width, 10.0);
        assert_eq!(px.height, 20.0);
        assert_eq!(px.center(), DVec2::new(15.0, 80.0));
        assert_eq!(px.outline().len(), 5);
    }
}
