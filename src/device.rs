//! Description:
//!    Enumeration handles onto the host MIDI subsystem.
//!
//!    A `MidiBackend` opens one handle per direction. A handle lives as long as
//!    its owner keeps it, dropping it closes the session with the subsystem.
//!
//! Copyright © 2019 Benedict Gaster. All rights reserved.

use std::fmt;

use midir::{MidiIO, MidiInput, MidiOutput, PortInfoError};

use crate::error::{Error, Result};

//------------------------------------------------------------------------------

/// Client name announced to the MIDI subsystem when none is given
pub const DEFAULT_CLIENT_NAME: &str = "midi_probe";

//------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Input,
    Output,
}

impl Direction {
    /// noun used in the port count line
    pub fn plural(&self) -> &'static str {
        match self {
            Direction::Input => "input sources",
            Direction::Output => "output ports",
        }
    }

    /// label used in front of each port line
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Input => "Input",
            Direction::Output => "Output",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Input => write!(f, "input"),
            Direction::Output => write!(f, "output"),
        }
    }
}

//------------------------------------------------------------------------------

/// An open enumeration handle for one direction.
pub trait PortList {
    fn port_count(&self) -> usize;

    /// name of the port at `index`, which must be in `0..port_count()`
    fn port_name(&self, index: usize) -> Result<String>;
}

/// Source of enumeration handles.
pub trait MidiBackend {
    fn open(&self, direction: Direction) -> Result<Box<dyn PortList>>;
}

//------------------------------------------------------------------------------

/// Backend talking to the real MIDI subsystem through midir.
#[derive(Debug, Clone)]
pub struct MidirBackend {
    client_name: String,
}

impl MidirBackend {
    pub fn new(client_name: &str) -> Self {
        MidirBackend {
            client_name: client_name.to_string(),
        }
    }

    pub fn client_name(&self) -> &str {
        &self.client_name
    }
}

impl Default for MidirBackend {
    fn default() -> Self {
        MidirBackend::new(DEFAULT_CLIENT_NAME)
    }
}

impl MidiBackend for MidirBackend {
    fn open(&self, direction: Direction) -> Result<Box<dyn PortList>> {
        debug!("opening MIDI {} as '{}'", direction, self.client_name);
        match direction {
            Direction::Input => {
                let midi_in = MidiInput::new(&self.client_name)
                    .map_err(|e| Error::init(direction, e))?;
                Ok(Box::new(MidirHandle::new(direction, midi_in)))
            }
            Direction::Output => {
                let midi_out = MidiOutput::new(&self.client_name)
                    .map_err(|e| Error::init(direction, e))?;
                Ok(Box::new(MidirHandle::new(direction, midi_out)))
            }
        }
    }
}

/// midir client plus the ports it reported when opened. Ports are addressed
/// by position in that snapshot, so count and names stay consistent even if
/// devices come and go while we are listing.
struct MidirHandle<T: MidiIO> {
    direction: Direction,
    io: T,
    ports: Vec<T::Port>,
}

impl<T: MidiIO> MidirHandle<T> {
    fn new(direction: Direction, io: T) -> Self {
        let ports = io.ports();
        MidirHandle {
            direction,
            io,
            ports,
        }
    }
}

impl<T: MidiIO> PortList for MidirHandle<T> {
    fn port_count(&self) -> usize {
        self.ports.len()
    }

    fn port_name(&self, index: usize) -> Result<String> {
        let port = self
            .ports
            .get(index)
            .ok_or_else(|| Error::port_name(self.direction, index, PortInfoError::PortNumberOutOfRange))?;
        self.io
            .port_name(port)
            .map_err(|e| Error::port_name(self.direction, index, e))
    }
}

impl<T: MidiIO> Drop for MidirHandle<T> {
    fn drop(&mut self) {
        debug!("closing MIDI {}", self.direction);
    }
}
