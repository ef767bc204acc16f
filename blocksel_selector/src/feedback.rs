// Copyright 2026 the Blocksel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

/// A sink for human-readable selection feedback.
///
/// Selectors write plain sentences; formatting, localization and transport
/// are up to the implementor.
pub trait SelectionFeedback {
    /// Delivers one message to the user.
    fn print(&mut self, message: &str);
}

impl SelectionFeedback for Vec<String> {
    fn print(&mut self, message: &str) {
        self.push(String::from(message));
    }
}

/// Feedback sink that drops every message.
#[derive(Copy, Clone, Debug, Default)]
pub struct Silent;

impl SelectionFeedback for Silent {
    fn print(&mut self, _message: &str) {}
}
