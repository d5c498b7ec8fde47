pub struct Validator;

impl Validator {
    pub fn is_present(value: &str) -> bool {
        !value.trim().is_empty()
    }

    pub fn fits_length(value: &str, max_chars: usize) -> bool {
        value.chars().count() <= max_chars
    }

    pub fn in_range(value: f64, min: f64, max: f64) -> bool {
        value.is_finite() && value >= min && value <= max
    }
}
