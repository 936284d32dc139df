use bon::Builder;
use garde::Validate;

// =======================================
// DENSITY CURVE PARAMETER STRUCT
// =======================================
#[derive(Debug, Clone, Validate, Builder)]
#[garde(allow_unvalidated)]
pub struct CurveParams {
    // Starting age of the curve domain
    #[garde(range(max = 150))]
    pub age: u32,

    // Mean of the normal curve - cannot be below age
    #[garde(custom(validate_finite))]
    pub life_expectancy: f64,

    // Must be strictly positive, a zero-width curve has no density
    #[garde(custom(validate_std_dev))]
    pub std_dev: f64,

    // Number of sample points - at least both endpoints
    #[garde(range(min = 2))]
    pub points: usize,

    // Minimum width of the domain in years
    #[garde(range(min = 1))]
    pub min_span: u32,
}

impl CurveParams {
    /// Validate with cross-field validation using Result<(), garde::Report>
    pub fn validate_all(&self) -> Result<(), garde::Report> {
        // First run garde's built-in validations
        self.validate()?;

        // Then run our custom cross-field validations
        self.validate_custom_constraints()
    }

    /// Custom cross-field validations that garde can't handle with attributes
    fn validate_custom_constraints(&self) -> Result<(), garde::Report> {
        let mut report = garde::Report::new();
        let mut errors: ErrorVec = Vec::new();

        let age = f64::from(self.age);
        let life_expectancy = self.life_expectancy;
        if life_expectancy < age {
            errors.push((
                "life_expectancy",
                format!("life expectancy {life_expectancy} cannot be below current age {age}"),
            ));
        }

        // Convert errors to report
        for (path, message) in errors {
            report.append(garde::Path::new(path), garde::Error::new(message));
        }

        if report.is_empty() {
            Ok(())
        } else {
            Err(report)
        }
    }
}

// =======================================
// PRIVATE FUNCTIONS
// =======================================

type ErrorVec = Vec<(&'static str, String)>;

fn validate_finite(value: &f64, _context: &()) -> garde::Result {
    if !value.is_finite() {
        return Err(garde::Error::new(format!("{value} must be a finite number")));
    }
    Ok(())
}

fn validate_std_dev(value: &f64, _context: &()) -> garde::Result {
    if !value.is_finite() || *value <= 0.0 {
        return Err(garde::Error::new(
            "std_dev must be greater than 0.0 to describe a density curve",
        ));
    }
    Ok(())
}

// =======================================
// UNIT TESTS
// =======================================
#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> CurveParams {
        CurveParams::builder()
            .age(30)
            .life_expectancy(87.0)
            .std_dev(8.55)
            .points(100)
            .min_span(20)
            .build()
    }

    #[test]
    fn test_valid_params() {
        assert!(params().validate_all().is_ok());
    }

    #[test]
    fn test_invalid_field_values() {
        let mut p = params();
        p.points = 1;
        assert!(p.validate_all().is_err());

        let mut p = params();
        p.std_dev = 0.0;
        assert!(p.validate_all().is_err());

        let mut p = params();
        p.min_span = 0;
        assert!(p.validate_all().is_err());

        let mut p = params();
        p.life_expectancy = f64::INFINITY;
        assert!(p.validate_all().is_err());
    }

    #[test]
    fn test_life_expectancy_below_age() {
        let mut p = params();
        p.life_expectancy = 29.5;
        let report = p.validate_all().unwrap_err();
        assert!(report.to_string().contains("cannot be below current age"));
    }
}
