/// Core numeric value type.
///
/// Defines `Number`, the tagged integer/real value carried by literal tokens
/// and produced by every arithmetic operation. Integer arithmetic is checked;
/// real arithmetic follows IEEE 754.
pub mod core;
