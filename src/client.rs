use std::io::{ErrorKind, Read, Write};
use std::net::TcpStream;

use tracing::{debug, trace};

use crate::error::ClientError;
use crate::resolve::resolve;

/// Size of the fixed receive buffer.
pub const RECV_BUFFER_SIZE: usize = 1024;

/// Connect to `host:service`, send `payload`, and copy the reply to `out`
/// until the peer closes the connection.
pub fn run<W: Write>(host: &str, service: &str, payload: &[u8], out: &mut W) -> Result<(), ClientError> {
    let addr = resolve(host, service)?;

    let mut stream = TcpStream::connect(addr)
        .map_err(|source| ClientError::Connect { addr, source })?;
    debug!("connected to {}", addr);

    send_once(&mut stream, payload)?;

    // No shutdown(Write) here: the peer this talks to breaks on a half-close,
    // so we wait for it to close first.
    let total = relay(&mut stream, out)?;
    debug!("connection closed by peer after {} bytes", total);

    Ok(())
}

/// Write the payload with a single call. A short write is fatal.
pub fn send_once<S: Write>(stream: &mut S, payload: &[u8]) -> Result<(), ClientError> {
    let written = stream.write(payload).map_err(ClientError::Send)?;
    if written < payload.len() {
        return Err(ClientError::ShortSend { written, len: payload.len() });
    }

    debug!("sent {} bytes", written);
    Ok(())
}

/// Copy everything from `stream` to `out` chunk by chunk, flushing after
/// each chunk. Returns the number of bytes relayed.
pub fn relay<R: Read, W: Write>(stream: &mut R, out: &mut W) -> Result<u64, ClientError> {
    let mut buffer = [0u8; RECV_BUFFER_SIZE];
    let mut total: u64 = 0;

    loop {
        let n = match stream.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(ClientError::Recv(e)),
        };
        trace!("received {} bytes", n);

        out.write_all(&buffer[..n])
            .and_then(|_| out.flush())
            .map_err(ClientError::Output)?;
        total += n as u64;
    }

    Ok(total)
}
