use std::io::{IsTerminal, Write};
use std::process::ExitCode;

use colored::Colorize;
use tracing::debug;

use crate::error::{ClientError, ExitClass};

/// `colored` looks at stdout, but diagnostics go to stderr: never colour
/// them when stderr is redirected.
pub fn colour_only_on_terminal() {
    if !std::io::stderr().is_terminal() {
        colored::control::set_override(false);
    }
}

/// Prints diagnostics prefixed with the name the program was invoked as.
pub struct Reporter {
    program_name: String,
}

impl Reporter {
    pub fn new(program_name: impl Into<String>) -> Self {
        Reporter { program_name: program_name.into() }
    }

    pub fn program_name(&self) -> &str {
        &self.program_name
    }

    /// `<program>: <context>: <reason>`
    pub fn line(&self, err: &ClientError) -> String {
        format!("{}: {}", self.program_name, err)
    }

    /// Report the failure on stderr and hand back the exit code for it.
    pub fn fail(&self, err: &ClientError) -> ExitCode {
        eprintln!("{}", self.line(err).red());
        err.exit_class().into()
    }

    pub fn usage_text(&self) -> String {
        let name = &self.program_name;
        format!(
            "usage: {name} host port string\n\
             \n\
             Makes TCP connection to HOST:PORT, sends STRING, and prints response.\n\
             \n\
             example: {name} localhost 80 $'GET /\\n\\n'\n         \
             <html><body><h1>It works!</h1></body></html>\n\
             \n"
        )
    }

    /// Usage goes to stdout, not stderr.
    pub fn usage(&self) -> ExitCode {
        self.write_usage(&mut std::io::stdout().lock()).into()
    }

    /// A usage error, unless the usage text itself cannot be written.
    pub fn write_usage<W: Write>(&self, out: &mut W) -> ExitClass {
        match out.write_all(self.usage_text().as_bytes()).and_then(|_| out.flush()) {
            Ok(()) => ExitClass::Usage,
            Err(e) => {
                debug!("failed to write usage: {}", e);
                ExitClass::IoErr
            }
        }
    }
}
