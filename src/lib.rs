//! Description:
//!
//!    Probe of the host MIDI subsystem. Reports how many MIDI input sources and
//!    output ports are available and what they are called.
//!
//!    `probe_ports` is the whole thing as used by the `midi_probe` command. The
//!    `Probe` type underneath takes any `MidiBackend` and any writer, so it can
//!    be driven without real hardware.
//!
//! Copyright © 2019 Benedict Gaster. All rights reserved.

#[macro_use]
extern crate log;

use std::io::{self, Write};
use std::process;

pub mod device;
pub mod error;
pub mod probe;

pub use device::{Direction, MidiBackend, MidirBackend, PortList, DEFAULT_CLIENT_NAME};
pub use error::{Error, Result};
pub use probe::{Probe, ProbeReport};

//------------------------------------------------------------------------------

/// Exit status used when the MIDI subsystem cannot be opened
pub const EXIT_FAILURE: i32 = 1;

//------------------------------------------------------------------------------

/// Route log output to stderr. `verbosity` 0 shows only errors, each step up
/// adds warn, info, debug and trace.
pub fn init_logging(verbosity: usize, quiet: bool) -> std::result::Result<(), log::SetLoggerError> {
    stderrlog::new()
        .module(module_path!())
        .verbosity(verbosity)
        .quiet(quiet)
        .init()
}

/// Probe the ports visible to a client named `DEFAULT_CLIENT_NAME`.
pub fn probe_ports() -> i32 {
    probe_ports_with(MidirBackend::default())
}

/// Print the port report for `backend` to stdout and return the exit status.
/// Does not return if either side of the MIDI subsystem cannot be opened.
pub fn probe_ports_with<B: MidiBackend>(backend: B) -> i32 {
    let stdout = io::stdout();
    let stderr = io::stderr();
    let status = probe_ports_to(backend, &mut stdout.lock(), &mut stderr.lock());
    if status != 0 {
        process::exit(status);
    }
    status
}

/// Write the port report for `backend` to `out` and any errors to `err`,
/// returning the exit status. Errors are printed whether or not a logger is
/// installed. Only failing to open the MIDI subsystem gives a failure status.
pub fn probe_ports_to<B, W, E>(backend: B, out: &mut W, err: &mut E) -> i32
where
    B: MidiBackend,
    W: Write,
    E: Write,
{
    let result = Probe::new(backend).run(out);
    let flushed = out.flush().map_err(Error::from);

    let status = match result {
        Ok(ProbeReport::Complete) => {
            info!("MIDI probe complete");
            0
        }
        Ok(ProbeReport::Abandoned { direction, index, message }) => {
            warn!("MIDI probe stopped at {} port {}", direction, index);
            let _ = writeln!(err, "Error: {}", message);
            0
        }
        Err(e) => {
            error!("{}", e);
            let _ = writeln!(err, "Error: {}", e);
            if e.is_fatal() {
                EXIT_FAILURE
            } else {
                0
            }
        }
    };

    if let Err(e) = flushed {
        warn!("{}", e);
        let _ = writeln!(err, "Error: {}", e);
    }

    status
}
