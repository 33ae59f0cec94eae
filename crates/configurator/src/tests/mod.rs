//! Cross-module tests driving a full configurator session
