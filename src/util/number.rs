//! Number helpers for raise factors.

/// Create a decimal number.
///
/// Raise factors are exact decimals (1.04 must multiply as 1.04, not as the
/// nearest binary float) so any literal factor should go through here.
#[macro_export]
macro_rules! num {
    ($val:expr) => {
        rust_decimal_macros::dec!($val)
    }
}
