use geo::{Point, Rect, coord};
use serde::{Deserialize, Serialize};

/// Bounding envelope stored as 32-bit floats.
///
/// Only used for candidate pruning. Narrowing from `f64` rounds outward so the
/// stored box always covers the original one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub min_lat: f32,
    pub min_lng: f32,
    pub max_lat: f32,
    pub max_lng: f32,
}

impl Envelope {
    pub fn new(min_lat: f32, min_lng: f32, max_lat: f32, max_lng: f32) -> Self {
        Self {
            min_lat,
            min_lng,
            max_lat,
            max_lng,
        }
    }

    pub fn from_rect(rect: &Rect<f64>) -> Self {
        Self {
            min_lat: round_down(rect.min().y),
            min_lng: round_down(rect.min().x),
            max_lat: round_up(rect.max().y),
            max_lng: round_up(rect.max().x),
        }
    }

    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.min_lng as f64, y: self.min_lat as f64 },
            coord! { x: self.max_lng as f64, y: self.max_lat as f64 },
        )
    }

    pub fn contains(&self, point: &Point<f64>) -> bool {
        let (x, y) = (point.x(), point.y());
        x >= self.min_lng as f64
            && x <= self.max_lng as f64
            && y >= self.min_lat as f64
            && y <= self.max_lat as f64
    }
}

fn round_down(value: f64) -> f32 {
    let narrowed = value as f32;
    if narrowed as f64 > value {
        narrowed.next_down()
    } else {
        narrowed
    }
}

fn round_up(value: f64) -> f32 {
    let narrowed = value as f32;
    if (narrowed as f64) < value {
        narrowed.next_up()
    } else {
        narrowed
    }
}

/// Metadata prefix of a stored boundary record; readable without decoding the
/// geometry that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundaryHeader {
    pub id: u32,
    /// `0` for a whole polygon, `1..` for the tiles of a split polygon.
    pub subdivision: u32,
    pub envelope: Envelope,
    /// Area of the original, unsplit geometry, shared by all of its tiles.
    pub area: f64,
}

impl BoundaryHeader {
    pub fn is_tile(&self) -> bool {
        self.subdivision > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_rounds_outward() {
        let rect = Rect::new(
            coord! { x: 10.123456789, y: 59.987654321 },
            coord! { x: 10.987654321, y: 60.123456789 },
        );
        let envelope = Envelope::from_rect(&rect);
        let back = envelope.to_rect();
        assert!(back.min().x <= rect.min().x);
        assert!(back.min().y <= rect.min().y);
        assert!(back.max().x >= rect.max().x);
        assert!(back.max().y >= rect.max().y);
        assert!((back.max().x - rect.max().x).abs() < 1e-5);
    }

    #[test]
    fn test_envelope_contains() {
        let envelope = Envelope::new(0.0, 0.0, 1.0, 1.0);
        assert!(envelope.contains(&Point::new(0.5, 0.5)));
        assert!(envelope.contains(&Point::new(1.0, 1.0)));
        assert!(!envelope.contains(&Point::new(1.5, 0.5)));
    }
}
