//! Value-space range with rubber-band overflow.

/// Inclusive range the sheet value is allowed to rest in.
///
/// Live drags may leave the range through [`SheetBounds::resist`]; every
/// release path comes back inside through [`SheetBounds::clamp`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetBounds {
    pub min: f32,
    pub max: f32,
}

impl SheetBounds {
    /// Builds a range from two endpoints in either order.
    pub fn new(a: f32, b: f32) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// Hard clamp. Non-finite input resolves to a bound (`min` for NaN).
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    /// Rubber-band overflow for live drags: travel past a boundary advances
    /// at `resistance_factor` of the raw distance, so the resisted value
    /// stays strictly between the boundary and the raw value.
    pub fn resist(&self, raw: f32, resistance_factor: f32) -> f32 {
        if !raw.is_finite() {
            return self.clamp(raw);
        }
        if raw > self.max {
            self.max + (raw - self.max) * resistance_factor
        } else if raw < self.min {
            self.min - (self.min - raw) * resistance_factor
        } else {
            raw
        }
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn span(&self) -> f32 {
        self.max - self.min
    }
}
