// Module exports for pure logic
pub mod dispatch;  // Keyword validation + URL fan-out
pub mod selection; // Session-scoped engine selection
