//! Description:
//!
//!  Simple util that lists the currently active MIDI input and output ports.
//!  Useful for checking which devices the host can see before wiring them up.
//!
//! Copyright © 2019 Benedict Gaster. All rights reserved.

extern crate getopts;
use getopts::Options;
use std::env;
use std::process;

extern crate midi_probe;
use midi_probe::MidirBackend;

// errors and warnings unless asked for more
const BASE_VERBOSITY: usize = 1;

fn usage(program: &str, opts: &Options) -> String {
    let brief = format!("Usage: {} [options]", program);
    opts.usage(&brief)
}

pub fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.get(0).cloned().unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());

    let mut opts = Options::new();
    opts.optflagmulti("v", "verbose", "more log output, repeat for more");
    opts.optflag("q", "quiet", "no log output");
    opts.optopt("", "client", "client name announced to the MIDI subsystem", "NAME");
    opts.optflag("h", "help", "print this help menu");

    let matches = match opts.parse(args.iter().skip(1)) {
        Ok(m) => m,
        Err(f) => {
            eprintln!("{}\n{}", f, usage(&program, &opts));
            process::exit(2);
        }
    };

    if matches.opt_present("help") {
        print!("{}", usage(&program, &opts));
        return;
    }

    let verbosity = BASE_VERBOSITY + matches.opt_count("verbose");
    if let Err(e) = midi_probe::init_logging(verbosity, matches.opt_present("quiet")) {
        eprintln!("failed to initialise logging: {}", e);
    }

    let backend = match matches.opt_str("client") {
        Some(name) => MidirBackend::new(&name),
        None => MidirBackend::default(),
    };

    process::exit(midi_probe::probe_ports_with(backend));
}
