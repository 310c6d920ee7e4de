//! Newline-delimited transport over arbitrary reader/writer pairs.

use rho_game::LineIo;
use std::io::{self, BufRead, Write};

/// A `LineIo` carrying one move per line. Used with locked stdio for
/// real matches and with in-memory buffers in tests.
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Session<R, W> {
        Session { input, output }
    }
}

impl<R: BufRead, W: Write> LineIo for Session<R, W> {
    fn recv(&mut self) -> io::Result<String> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before the game finished",
            ));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn send(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")?;
        self.output.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_recv_strips_terminators() {
        let input = Cursor::new(b"e4\nd5\r\nexd5".to_vec());
        let mut session = Session::new(input, Vec::new());

        assert_eq!(session.recv().unwrap(), "e4");
        assert_eq!(session.recv().unwrap(), "d5");
        assert_eq!(session.recv().unwrap(), "exd5");
    }

    #[test]
    fn test_recv_reports_eof() {
        let input = Cursor::new(Vec::new());
        let mut session = Session::new(input, Vec::new());

        let err = session.recv().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_send_appends_newline() {
        let mut session = Session::new(Cursor::new(Vec::new()), Vec::new());
        session.send("e4").unwrap();
        session.send("dxe5").unwrap();

        assert_eq!(session.output, b"e4\ndxe5\n");
    }
}
