use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::iter;
use std::path::Path;

use clap::Parser;

/// Makes a TCP connection to HOST:PORT, sends STRING, and prints the response.
#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Host name or IPv4 address
    pub host: OsString,

    /// Port number or service name
    pub port: OsString,

    /// Sent as-is, with no escaping or trailing newline added
    pub payload: OsString,
}

impl Cli {
    /// Parse everything after argv[0]. Anything but exactly three
    /// arguments, or any clap error, means wrong usage.
    pub fn from_args<I, T>(args: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        if args.len() != 3 {
            return None;
        }

        // Every argument is a value, `--` and leading hyphens included.
        let escaped = iter::once(OsString::from("--")).chain(args);
        Cli::try_parse_from(escaped).ok()
    }

    pub fn host(&self) -> Cow<'_, str> {
        self.host.to_string_lossy()
    }

    pub fn port(&self) -> Cow<'_, str> {
        self.port.to_string_lossy()
    }

    pub fn payload_bytes(&self) -> Vec<u8> {
        payload_bytes(&self.payload)
    }
}

#[cfg(unix)]
fn payload_bytes(raw: &OsStr) -> Vec<u8> {
    use std::os::unix::ffi::OsStrExt;
    raw.as_bytes().to_vec()
}

#[cfg(not(unix))]
fn payload_bytes(raw: &OsStr) -> Vec<u8> {
    raw.to_string_lossy().into_owned().into_bytes()
}

/// basename(argv[0]), falling back to the crate name.
pub fn program_name(argv0: Option<&OsStr>) -> String {
    argv0
        .and_then(|arg| Path::new(arg).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}
