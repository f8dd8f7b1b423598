use std::error::Error;
use std::fmt::{self, Display};
use std::io;
use std::net::SocketAddr;
use std::process::ExitCode;

/// Failure classes, using the sysexits.h numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitClass {
    Success = 0,
    Usage = 64,
    NoHost = 68,
    Unavailable = 69,
    IoErr = 74,
}

impl ExitClass {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<ExitClass> for ExitCode {
    fn from(class: ExitClass) -> Self {
        ExitCode::from(class.code())
    }
}

/// Every way a run can fail once the arguments are accepted.
#[derive(Debug)]
pub enum ClientError {
    Resolve {
        host: String,
        service: String,
        reason: String,
    },
    Connect {
        addr: SocketAddr,
        source: io::Error,
    },
    Send(io::Error),
    ShortSend {
        written: usize,
        len: usize,
    },
    Recv(io::Error),
    Output(io::Error),
}

impl ClientError {
    pub fn exit_class(&self) -> ExitClass {
        match self {
            ClientError::Resolve { .. } => ExitClass::NoHost,
            ClientError::Connect { .. } => ExitClass::Unavailable,
            ClientError::Send(_)
            | ClientError::ShortSend { .. }
            | ClientError::Recv(_)
            | ClientError::Output(_) => ExitClass::IoErr,
        }
    }

    /// The operation that failed, as shown before the error text.
    pub fn context(&self) -> String {
        match self {
            ClientError::Resolve { host, service, .. } => {
                format!("getaddrinfo({}, {}) failed", host, service)
            }
            ClientError::Connect { addr, .. } => format!("connect({}) failed", addr),
            ClientError::Send(_) => "send() failed".to_string(),
            ClientError::ShortSend { written, len } => {
                format!("send() only wrote {} of {} bytes", written, len)
            }
            ClientError::Recv(_) => "recv() failed".to_string(),
            ClientError::Output(_) => "write to stdout failed".to_string(),
        }
    }

    /// The underlying system error text.
    pub fn reason(&self) -> String {
        match self {
            ClientError::Resolve { reason, .. } => reason.clone(),
            ClientError::Connect { source, .. } => source.to_string(),
            ClientError::Send(e) | ClientError::Recv(e) | ClientError::Output(e) => e.to_string(),
            ClientError::ShortSend { .. } => "short write".to_string(),
        }
    }
}

impl Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.context(), self.reason())
    }
}

impl Error for ClientError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ClientError::Connect { source, .. } => Some(source),
            ClientError::Send(e) | ClientError::Recv(e) | ClientError::Output(e) => Some(e),
            _ => None,
        }
    }
}
