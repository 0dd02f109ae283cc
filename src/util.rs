/// Checks that a numerical value is in the provided interval and returns early
/// with a [`ConfigError`](crate::error::ConfigError) if not
///
/// The interval is closed (`[a, b]`) unless `left_open` is given, in which case
/// it is `(a, b]`. NaN is never inside an interval.
///
/// ### Example
/// ```ignore
/// let alpha = 0.0;
/// ensure_interval!(alpha, 0.0, 1.0, left_open);
/// ```
/// This returns `Err(ConfigError::OutOfInterval { name: "alpha", .. })`.
macro_rules! ensure_interval {
    ($var:expr, $a:expr, $b:expr, left_open) => {
        if !($var > $a && $var <= $b) {
            return Err($crate::error::ConfigError::OutOfInterval {
                name: stringify!($var),
                value: $var,
                interval: format!("({}, {}]", $a, $b),
            });
        }
    };
    ($var:expr, $a:expr, $b:expr) => {
        if !($var >= $a && $var <= $b) {
            return Err($crate::error::ConfigError::OutOfInterval {
                name: stringify!($var),
                value: $var,
                interval: format!("[{}, {}]", $a, $b),
            });
        }
    };
}

pub(crate) use ensure_interval;

#[cfg(test)]
mod tests {
    use crate::error::ConfigError;

    fn closed(value: f64) -> Result<(), ConfigError> {
        ensure_interval!(value, 0.0, 1.0);
        Ok(())
    }

    fn left_open(value: f64) -> Result<(), ConfigError> {
        ensure_interval!(value, 0.0, 1.0, left_open);
        Ok(())
    }

    #[test]
    fn closed_interval_includes_bounds() {
        assert!(closed(0.0).is_ok());
        assert!(closed(0.5).is_ok());
        assert!(closed(1.0).is_ok());
        assert!(closed(-0.1).is_err());
        assert!(closed(1.1).is_err());
        assert!(closed(f64::NAN).is_err());
    }

    #[test]
    fn left_open_interval_excludes_lower_bound() {
        assert!(left_open(0.0).is_err());
        assert!(left_open(1e-9).is_ok());
        assert!(left_open(1.0).is_ok());
        assert!(left_open(f64::NAN).is_err());
    }

    #[test]
    fn error_names_the_variable() {
        let err = left_open(2.0).unwrap_err();
        assert_eq!(
            err,
            ConfigError::OutOfInterval {
                name: "value",
                value: 2.0,
                interval: String::from("(0, 1]"),
            }
        );
        assert_eq!(
            err.to_string(),
            "Invalid value for `value`: 2 is not in the interval (0, 1]."
        );
    }
}
