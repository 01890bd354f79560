quantity!(WattHours, suffix: "Wh", precision: 1);

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn display_ok() {
        assert_eq!(WattHours(9700.0).to_string(), "9700.0 Wh");
        assert_eq!(format!("{:?}", WattHours(12.34)), "12.3Wh");
    }

    #[test]
    fn parse_ok() {
        assert_eq!("1500.5".parse::<WattHours>().unwrap(), WattHours(1500.5));
        assert!("lots".parse::<WattHours>().is_err());
    }

    #[test]
    fn scale_by_fraction() {
        assert_abs_diff_eq!((WattHours(100.0) * 0.97).0, 97.0);
        assert_abs_diff_eq!((WattHours(100.0) / 4.0).0, 25.0);
    }

    #[test]
    fn ordering() {
        assert!(WattHours(-1.0) < WattHours::ZERO);
        assert_eq!(WattHours(f64::NAN), WattHours(f64::NAN));
        assert_eq!(WattHours(1.0).max(WattHours(2.0)), WattHours(2.0));
    }
}
