use defmt::Format;

/// Greatest common divisor by repeated Euclidean remainder.
///
/// Both operands must be non-zero.
pub const fn gcd(mut a: u32, mut b: u32) -> u32 {
    loop {
        let c = a % b;
        if c == 0 {
            return b;
        }
        a = b;
        b = c;
    }
}

/// Task periods expressed relative to a shared base tick.
#[derive(Format, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReducedPeriods<const N: usize> {
    /// Base tick in the unit of the input periods (milliseconds in the runner).
    pub base: u32,
    /// Each input period divided by `base`, in input order.
    pub periods: [u32; N],
}

/// Folds the GCD over all periods and rescales each one to the result.
///
/// Panics on an empty list or on a zero period: both are a misconfigured
/// task table and there is no tick rate that could serve them.
pub fn reduce_periods<const N: usize>(periods: [u32; N]) -> ReducedPeriods<N> {
    assert!(N > 0, "at least one task period is required");
    assert!(
        periods.iter().all(|&period| period > 0),
        "task periods must be at least 1"
    );

    let base = periods[1..]
        .iter()
        .fold(periods[0], |acc, &period| gcd(acc, period));

    ReducedPeriods {
        base,
        periods: periods.map(|period| period / base),
    }
}
