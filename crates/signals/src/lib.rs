//! Signal evaluation for the pump scanner.
//!
//! - `pump` - threshold detector on the candle's own open/close change
//! - `breakout` - Supertrend trend-flip detector
//! - `rsi` / `supertrend` - indicator math
//! - `seen` - in-memory alert deduplication

pub mod breakout;
pub mod pump;
pub mod rsi;
pub mod seen;
pub mod supertrend;

pub use breakout::{BreakoutConfig, BreakoutDetector, BreakoutSignal};
pub use pump::{PumpConfig, PumpDetector, PumpSignal};
pub use rsi::rsi;
pub use seen::SeenAlerts;
pub use supertrend::supertrend_direction;
