// SPDX-FileCopyrightText: 2026 Revwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for revwatch.
//!
//! This crate provides the adapter traits, the error taxonomy, the status
//! catalog, and the data types shared by the review source, the messaging
//! channel, and the poll loop.

pub mod error;
pub mod status;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::{FailureKind, RevwatchError, ShapeError, TransportFailure};
pub use status::HomeworkStatus;
pub use types::{
    AdapterType, Assignment, Cursor, HealthStatus, MessageId, Notification, OutboundMessage,
    Snapshot,
};

pub use traits::{ChannelAdapter, Clock, PluginAdapter, ReviewSource, SystemClock};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adapter_type_round_trips_through_strings() {
        use std::str::FromStr;

        for variant in [AdapterType::Source, AdapterType::Channel] {
            let s = variant.to_string();
            let parsed = AdapterType::from_str(&s).expect("should parse back");
            assert_eq!(variant, parsed);
        }
    }

    #[test]
    fn health_status_variants() {
        let healthy = HealthStatus::Healthy;
        let unhealthy = HealthStatus::Unhealthy("down".into());
        assert_eq!(healthy, HealthStatus::Healthy);
        assert_ne!(unhealthy, healthy);
    }

    #[test]
    fn all_traits_are_exported() {
        // Compile-time check that the adapter traits are reachable from the crate root.
        fn _assert_plugin_adapter<T: PluginAdapter>() {}
        fn _assert_channel_adapter<T: ChannelAdapter>() {}
        fn _assert_review_source<T: ReviewSource>() {}
        fn _assert_clock<T: Clock>() {}
        _assert_clock::<SystemClock>();
    }
}
