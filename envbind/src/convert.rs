//! Text-to-value conversion for leaf fields and sequence elements

use num_traits::Num;

/// A leaf type that can be converted from the text of an environment variable.
///
/// Conversion is best-effort: `None` means "leave the field alone" for a
/// scalar field and "drop this element" for a sequence.
pub trait Scalar: Sized {
    /// Convert the resolved value of a scalar field.
    fn from_value(raw: &str) -> Option<Self>;

    /// Convert one segment of a split sequence value.
    ///
    /// Surrounding whitespace is trimmed before conversion unless the type
    /// overrides this.
    fn from_segment(segment: &str) -> Option<Self> {
        Self::from_value(segment.trim())
    }
}

/// Any non-empty text, including `"false"` and `"0"`, is `true`.
impl Scalar for bool {
    fn from_value(raw: &str) -> Option<Self> {
        Some(!raw.is_empty())
    }

    fn from_segment(segment: &str) -> Option<Self> {
        Self::from_value(segment)
    }
}

impl Scalar for String {
    fn from_value(raw: &str) -> Option<Self> {
        Some(raw.to_owned())
    }

    fn from_segment(segment: &str) -> Option<Self> {
        Self::from_value(segment)
    }
}

/// Base-10 parse shared by every integer and float width.
///
/// Integers are range-checked against the target width, so `"300"` does not
/// convert to `u8`.
fn parse_decimal<T: Num>(raw: &str) -> Option<T> {
    T::from_str_radix(raw, 10).ok()
}

macro_rules! impl_numeric_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Scalar for $ty {
                fn from_value(raw: &str) -> Option<Self> {
                    parse_decimal(raw)
                }
            }
        )*
    };
}

impl_numeric_scalar!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_is_set_when_non_empty() {
        assert_eq!(bool::from_value(""), Some(false));
        assert_eq!(bool::from_value("0"), Some(true));
        assert_eq!(bool::from_value("false"), Some(true));
        assert_eq!(bool::from_segment(" "), Some(true));
    }

    #[test]
    fn test_string_is_verbatim() {
        assert_eq!(String::from_value(" a b "), Some(" a b ".to_string()));
        assert_eq!(String::from_segment(" a "), Some(" a ".to_string()));
    }

    #[test]
    fn test_integers_are_width_checked() {
        assert_eq!(u8::from_value("255"), Some(255));
        assert_eq!(u8::from_value("256"), None);
        assert_eq!(u8::from_value("-1"), None);
        assert_eq!(i8::from_value("-128"), Some(-128));
        assert_eq!(i64::from_value("+42"), Some(42));
        assert_eq!(i32::from_value("two"), None);
        assert_eq!(i32::from_value(""), None);
    }

    #[test]
    fn test_scalar_values_are_not_trimmed() {
        assert_eq!(i32::from_value(" 5"), None);
        assert_eq!(f64::from_value("1.5 "), None);
    }

    #[test]
    fn test_numeric_segments_are_trimmed() {
        assert_eq!(i32::from_segment(" 5 "), Some(5));
        assert_eq!(u16::from_segment("\t7"), Some(7));
        assert_eq!(f32::from_segment(" 2.5"), Some(2.5));
    }

    #[test]
    fn test_floats() {
        assert_eq!(f32::from_value("8.0"), Some(8.0));
        assert_eq!(f64::from_value("3"), Some(3.0));
        assert_eq!(f64::from_value("-1e3"), Some(-1000.0));
        assert_eq!(f64::from_value("x"), None);
    }
}
