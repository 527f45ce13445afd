use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub lower_left_x: f32,
    pub lower_left_y: f32,
    pub upper_right_x: f32,
    pub upper_right_y: f32,
}

impl Rectangle {
    pub const fn new(
        lower_left_x: f32,
        lower_left_y: f32,
        upper_right_x: f32,
        upper_right_y: f32,
    ) -> Self {
        Self {
            lower_left_x,
            lower_left_y,
            upper_right_x,
            upper_right_y,
        }
    }

    pub fn width(&self) -> f32 {
        self.upper_right_x - self.lower_left_x
    }

    pub fn height(&self) -> f32 {
        self.upper_right_y - self.lower_left_y
    }
}

/// Serializes as a PDF array, `[llx lly urx ury]`
impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} {} {} {}]",
            self.lower_left_x, self.lower_left_y, self.upper_right_x, self.upper_right_y
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn whole_numbers_print_without_fraction() {
        let rect = Rectangle::new(-49.0, -122.0, 586.0, 439.0);

        assert_eq!(rect.to_string(), "[-49 -122 586 439]");
        assert_eq!(rect.width(), 635.0);
        assert_eq!(rect.height(), 561.0);
    }
}
