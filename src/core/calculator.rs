use crate::domain::{BillableWeight, DimDivisor, PackageDimensions, Weight};

/// Billable weight: the larger of scale weight and dimensional weight.
///
/// Dimensional weight is `volume / divisor` rounded half away from zero. The division
/// is done on integers, so results do not depend on float rounding.
#[derive(Debug, Clone, Copy, Default)]
pub struct BillableWeightCalculator;

impl BillableWeightCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate(&self, dimensions: &PackageDimensions, weight: &Weight, divisor: DimDivisor) -> u64 {
        self.quote(dimensions, weight, divisor).billable_weight
    }

    pub fn dimensional_weight(&self, dimensions: &PackageDimensions, divisor: DimDivisor) -> u64 {
        // dimensions are capped at MAX_LIMIT, so volume <= 10^12 and 2 * volume fits
        let volume = dimensions.volume();
        let divisor = u64::from(divisor.value());
        // volume and divisor are positive, so (2v + d) / 2d is round-half-up == half-away-from-zero
        (2 * volume + divisor) / (2 * divisor)
    }

    pub fn quote(&self, dimensions: &PackageDimensions, weight: &Weight, divisor: DimDivisor) -> BillableWeight {
        let dimensional_weight = self.dimensional_weight(dimensions, divisor);
        let billable_weight = u64::from(weight.value()).max(dimensional_weight);

        tracing::debug!(
            volume = dimensions.volume(),
            divisor = divisor.value(),
            actual = weight.value(),
            dimensional = dimensional_weight,
            billable = billable_weight,
            "calculated billable weight"
        );

        BillableWeight {
            actual_weight: weight.value(),
            dimensional_weight,
            billable_weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PackageLimits;

    fn dims(w: i64, h: i64, l: i64) -> PackageDimensions {
        PackageDimensions::new(w, h, l).unwrap()
    }

    fn weight(v: i64) -> Weight {
        Weight::new(v).unwrap()
    }

    #[test]
    fn test_reference_package_bills_dimensional_weight() {
        let calculator = BillableWeightCalculator::new();
        let package = dims(9, 7, 15);

        // 945 / 139 = 6.798...
        assert_eq!(calculator.dimensional_weight(&package, DimDivisor::Fedex), 7);
        assert_eq!(calculator.calculate(&package, &weight(6), DimDivisor::Fedex), 7);
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        let calculator = BillableWeightCalculator::new();

        // 415 / 166 = 2.5 exactly; half-to-even would give 2
        let package = dims(5, 1, 83);
        assert_eq!(calculator.dimensional_weight(&package, DimDivisor::Usps), 3);
        assert_eq!(calculator.calculate(&package, &weight(1), DimDivisor::Usps), 3);

        // 83 / 166 = 0.5
        assert_eq!(calculator.dimensional_weight(&dims(1, 1, 83), DimDivisor::Usps), 1);
        // 249 / 166 = 1.5
        assert_eq!(calculator.dimensional_weight(&dims(3, 1, 83), DimDivisor::Usps), 2);
    }

    #[test]
    fn test_rounds_down_below_half() {
        let calculator = BillableWeightCalculator::new();
        // 69 / 139 = 0.496
        assert_eq!(calculator.dimensional_weight(&dims(1, 1, 69), DimDivisor::Fedex), 0);
        // 70 / 139 = 0.503
        assert_eq!(calculator.dimensional_weight(&dims(1, 1, 70), DimDivisor::Fedex), 1);
    }

    #[test]
    fn test_heavy_small_package_bills_actual_weight() {
        let calculator = BillableWeightCalculator::new();
        let package = dims(1, 1, 1);

        assert_eq!(calculator.dimensional_weight(&package, DimDivisor::Fedex), 0);
        assert_eq!(calculator.calculate(&package, &weight(150), DimDivisor::Fedex), 150);
    }

    #[test]
    fn test_largest_package() {
        let calculator = BillableWeightCalculator::new();
        // 672000 / 139 = 4834.53
        assert_eq!(
            calculator.calculate(&dims(80, 70, 120), &weight(150), DimDivisor::Fedex),
            4835
        );
    }

    #[test]
    fn test_largest_capped_package_does_not_overflow() {
        let limits = PackageLimits {
            max_width: u32::MAX,
            max_height: u32::MAX,
            max_length: u32::MAX,
            max_weight: u32::MAX,
        };
        let package = PackageDimensions::with_limits(10_000, 10_000, 10_000, &limits).unwrap();
        let heavy = Weight::with_limits(10_000, &limits).unwrap();

        // 10^12 / 139 = 7194244604.3
        assert_eq!(
            BillableWeightCalculator::new().calculate(&package, &heavy, DimDivisor::Fedex),
            7_194_244_604
        );
        assert!(PackageDimensions::with_limits(4_000_000_000, 1, 1, &limits).is_err());
    }

    #[test]
    fn test_quote_carries_intermediate_values() {
        let quote = BillableWeightCalculator::new().quote(&dims(9, 7, 15), &weight(6), DimDivisor::Ups);
        assert_eq!(
            quote,
            BillableWeight {
                actual_weight: 6,
                dimensional_weight: 7,
                billable_weight: 7,
            }
        );
    }

    #[test]
    fn test_calculate_is_deterministic() {
        let calculator = BillableWeightCalculator::new();
        let package = dims(40, 30, 60);
        let first = calculator.calculate(&package, &weight(20), DimDivisor::Usps);
        for _ in 0..100 {
            assert_eq!(calculator.calculate(&package, &weight(20), DimDivisor::Usps), first);
        }
    }

    #[test]
    fn test_billable_is_never_below_either_weight() {
        let calculator = BillableWeightCalculator::new();
        for (w, h, l, v) in [(9, 7, 15, 6), (80, 70, 120, 1), (1, 1, 1, 1), (20, 20, 20, 80)] {
            let package = dims(w, h, l);
            for divisor in DimDivisor::all() {
                let quote = calculator.quote(&package, &weight(v), *divisor);
                assert!(quote.billable_weight >= u64::from(quote.actual_weight));
                assert!(quote.billable_weight >= quote.dimensional_weight);
                assert_eq!(
                    quote.billable_weight,
                    u64::from(quote.actual_weight).max(quote.dimensional_weight)
                );
            }
        }
    }
}
