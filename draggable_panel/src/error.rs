// Copyright 2025 the Draggable Panel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned by [`DraggablePanel::initialize`](crate::DraggablePanel::initialize).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InitError {
    /// The panel has already been initialized.
    AlreadyInitialized,
    /// The container has a non-finite or non-positive size.
    InvalidContainer {
        /// Container width.
        width: f64,
        /// Container height.
        height: f64,
    },
    /// The handle height is negative or non-finite.
    InvalidHandleHeight(f64),
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyInitialized => f.write_str("draggable panel is already initialized"),
            Self::InvalidContainer { width, height } => {
                write!(f, "container size {width}x{height} cannot hold a panel")
            }
            Self::InvalidHandleHeight(height) => write!(f, "invalid handle height {height}"),
        }
    }
}

impl core::error::Error for InitError {}
