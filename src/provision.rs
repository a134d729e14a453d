//! Provisioning label vocabulary
//!
//! Label prefixes that name the image a host was provisioned with.

/// Chrome OS build version label prefix
pub const CROS_VERSION_PREFIX: &str = "cros-version";

/// Android build version label prefix
pub const ANDROID_BUILD_VERSION_PREFIX: &str = "ab-version";

/// Testbed build version label prefix
pub const TESTBED_BUILD_VERSION_PREFIX: &str = "testbed-version";

/// Build version prefixes in lookup priority order.
pub const BUILD_VERSION_PREFIXES: [&str; 3] = [
    CROS_VERSION_PREFIX,
    ANDROID_BUILD_VERSION_PREFIX,
    TESTBED_BUILD_VERSION_PREFIX,
];
