//! Description:
//!
//!    Lists the MIDI input and output ports currently known to the host.
//!
//!    Inputs are listed first, then outputs. Not being able to open either side
//!    of the MIDI subsystem is an error for the caller. Not being able to read a
//!    port's name is logged and ends the probe early, without listing anything
//!    further, but still counts as a successful probe.
//!
//! Copyright © 2019 Benedict Gaster. All rights reserved.

use std::io::Write;

use crate::device::{Direction, MidiBackend, PortList};
use crate::error::Result;

//------------------------------------------------------------------------------

/// How a probe that did not hit a fatal error ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeReport {
    /// every port of both directions was listed
    Complete,
    /// the name of port `index` could not be read, nothing after it was listed
    Abandoned {
        direction: Direction,
        index: usize,
        message: String,
    },
}

pub struct Probe<B: MidiBackend> {
    backend: B,
}

impl<B: MidiBackend> Probe<B> {
    pub fn new(backend: B) -> Self {
        Probe { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Write the port report to `out`.
    ///
    /// Handles are released when they go out of scope, so the input handle is
    /// held until the output listing is done and both are closed on every
    /// return path.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<ProbeReport> {
        let midi_in = self.backend.open(Direction::Input)?;
        if let Some(report) = list_ports(Direction::Input, midi_in.as_ref(), out)? {
            return Ok(report);
        }

        let midi_out = self.backend.open(Direction::Output)?;
        if let Some(report) = list_ports(Direction::Output, midi_out.as_ref(), out)? {
            return Ok(report);
        }
        writeln!(out)?;

        Ok(ProbeReport::Complete)
    }
}

/// Write the count line and one line per port. Returns the abandon report if a
/// name lookup fails.
fn list_ports<W: Write>(
    direction: Direction,
    ports: &dyn PortList,
    out: &mut W,
) -> Result<Option<ProbeReport>> {
    let count = ports.port_count();
    info!("found {} MIDI {} ports", count, direction);
    write!(out, "\nThere are {} MIDI {} available.\n", count, direction.plural())?;

    for index in 0..count {
        match ports.port_name(index) {
            Ok(name) => {
                writeln!(out, "  {} Port #{}: {}", direction.label(), index + 1, name)?;
            }
            Err(err) => {
                error!("{}", err);
                return Ok(Some(ProbeReport::Abandoned {
                    direction,
                    index,
                    message: err.to_string(),
                }));
            }
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    struct Names(Vec<Option<&'static str>>, Direction);

    impl PortList for Names {
        fn port_count(&self) -> usize {
            self.0.len()
        }

        fn port_name(&self, index: usize) -> Result<String> {
            match self.0[index] {
                Some(name) => Ok(name.to_string()),
                None => Err(Error::PortName {
                    direction: self.1,
                    index,
                    reason: "gone".to_string(),
                }),
            }
        }
    }

    fn listing(direction: Direction, names: Vec<Option<&'static str>>) -> (String, Option<ProbeReport>) {
        let mut out = Vec::new();
        let report = list_ports(direction, &Names(names, direction), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), report)
    }

    #[test]
    fn lists_input_ports_one_based() {
        let (text, report) = listing(Direction::Input, vec![Some("Keys"), Some("Pads")]);
        assert_eq!(report, None);
        assert_eq!(
            text,
            "\nThere are 2 MIDI input sources available.\n  Input Port #1: Keys\n  Input Port #2: Pads\n"
        );
    }

    #[test]
    fn empty_direction_still_prints_count() {
        let (text, report) = listing(Direction::Output, vec![]);
        assert_eq!(report, None);
        assert_eq!(text, "\nThere are 0 MIDI output ports available.\n");
    }

    #[test]
    fn stops_at_first_bad_name() {
        let (text, report) = listing(Direction::Output, vec![Some("Synth"), None, Some("Never")]);
        assert_eq!(
            report,
            Some(ProbeReport::Abandoned {
                direction: Direction::Output,
                index: 1,
                message: "failed to read name of MIDI output port 1: gone".to_string(),
            })
        );
        assert_eq!(
            text,
            "\nThere are 3 MIDI output ports available.\n  Output Port #1: Synth\n"
        );
    }
}
