//! Description:
//!    Errors raised while probing the MIDI subsystem.
//!
//!    Failing to open an enumeration handle is fatal, the probe cannot continue.
//!    Failing to read a single port name only stops the current enumeration.
//!
//! Copyright © 2019 Benedict Gaster. All rights reserved.

use thiserror::Error;

use crate::device::Direction;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to open MIDI {direction} subsystem: {reason}")]
    Init {
        direction: Direction,
        reason: String,
    },

    #[error("failed to read name of MIDI {direction} port {index}: {reason}")]
    PortName {
        direction: Direction,
        index: usize,
        reason: String,
    },

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn init(direction: Direction, err: midir::InitError) -> Self {
        Error::Init {
            direction,
            reason: err.to_string(),
        }
    }

    pub fn port_name(direction: Direction, index: usize, err: midir::PortInfoError) -> Self {
        Error::PortName {
            direction,
            index,
            reason: err.to_string(),
        }
    }

    /// true if the process should give up. Only failing to open the MIDI
    /// subsystem counts, the report itself is written best effort.
    pub fn is_fatal(&self) -> bool {
        match self {
            Error::Init { .. } => true,
            Error::PortName { .. } | Error::Io(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
