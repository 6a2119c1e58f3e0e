//! Logging and trace export for BridgeAI.

pub mod tracing_setup;
