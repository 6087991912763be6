//! Presence checks for optional values.

/// Check if the value is absent.
///
/// Only presence is inspected; the shape of `T` is irrelevant.
pub fn is_absent<T>(value: &Option<T>) -> bool {
    value.is_none()
}

/// Check if the value is present.
pub fn is_present<T>(value: &Option<T>) -> bool {
    !is_absent(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_is_absent() {
        assert!(is_absent(&None::<String>));
        assert!(!is_present(&None::<String>));
    }

    #[test]
    fn some_is_present() {
        assert!(is_present(&Some(42)));
        assert!(!is_absent(&Some(42)));
    }

    #[test]
    fn present_empty_values_are_still_present() {
        assert!(is_present(&Some("")));
        assert!(is_present(&Some(Vec::<u8>::new())));
        assert!(is_present(&Some(())));
    }

    #[test]
    fn nested_none_is_present() {
        let nested: Option<Option<i32>> = Some(None);
        assert!(is_present(&nested));
    }

    #[test]
    fn exactly_one_predicate_holds() {
        let values = [None, Some(0), Some(-1), Some(i64::MAX)];
        for value in &values {
            assert_ne!(is_absent(value), is_present(value), "{:?}", value);
        }
    }
}
