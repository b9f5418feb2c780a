//! Inspector of `ceph --version` output.
//!
//! Takes the output either from the arguments or, if there are none,
//! from stdin and prints which Ceph release it belongs to.

use std::error::Error;
use std::io::{self, Read};

use ceph_version::Version;

use config::Config;

mod config;
mod logger;

/// Entry point of `ceph_version_rs` inspector
fn main() -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    let config = Config::from_env()?;
    let _handle = logger::init(&config)?;
    log::info!("{} {} started", config.name(), config.version());

    let text = input(std::env::args().skip(1))?;
    let version = ceph_version::parse(&text).map_err(|error| {
        log::error!("{}", error);
        error
    })?;
    if !version.is_supported() {
        log::warn!("Ceph version {} is not supported", version);
    }

    print!("{}", report(&version));
    Ok(())
}

fn input(args: impl Iterator<Item = String>) -> io::Result<String> {
    let args: Vec<_> = args.collect();
    if !args.is_empty() {
        return Ok(args.join(" "));
    }
    log::debug!("no arguments given, reading stdin");
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    Ok(text)
}

fn report(version: &Version) -> String {
    let yes_no = |value: bool| if value { "yes" } else { "no" };
    format!(
        "version: {}.{}.{}\n\
         release: {}\n\
         supported: {}\n\
         at least mimic: {}\n\
         at least nautilus: {}\n\
         at least octopus: {}\n",
        version.major,
        version.minor,
        version.patch,
        version.release_name(),
        yes_no(version.is_supported()),
        yes_no(version.is_at_least_mimic()),
        yes_no(version.is_at_least_nautilus()),
        yes_no(version.is_at_least_octopus()),
    )
}
