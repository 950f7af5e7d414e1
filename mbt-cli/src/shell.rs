use std::io::{self, Write};
use std::time::Duration;

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::args::{self, ArgError};
use crate::command::{split_line, Command, COMMANDS};
use crate::hex::preprocess_line;
use crate::render;
use crate::session::{self, DisplayConfig, SessionConfig};
use crate::transport::{Transport, TransportError};

pub const NAME: &str = "mbt-cli";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
const INTRO: &str = "CLI tool to deal with a modbus/TCP server (type help or ?).";
const MAX_WAIT: f64 = 86_400.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Arg(#[from] ArgError),
    #[error("{0}")]
    Value(String),
    /// Writing to the terminal failed; this one ends the session.
    #[error(transparent)]
    Output(#[from] io::Error),
}

pub struct Shell<T, W> {
    session: SessionConfig,
    display: DisplayConfig,
    transport: T,
    out: W,
}

impl<T: Transport, W: Write> Shell<T, W> {
    pub fn new(session: SessionConfig, display: DisplayConfig, transport: T, out: W) -> Self {
        Shell {
            session,
            display,
            transport,
            out,
        }
    }

    pub fn prompt(&self) -> String {
        format!("{}:{}> ", self.session.host, self.session.port)
    }

    /// Read commands from `input` until `exit` or end of input.
    pub async fn run_interactive<R>(&mut self, mut input: R) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        writeln!(self.out, "{INTRO}")?;
        let mut buf = Vec::new();
        loop {
            write!(self.out, "{}", self.prompt())?;
            self.out.flush()?;
            buf.clear();
            if input.read_until(b'\n', &mut buf).await? == 0 {
                // end of input, keep the shell prompt on its own line
                writeln!(self.out)?;
                break;
            }
            // undecodable bytes become U+FFFD and fail as an unknown command
            let line = String::from_utf8_lossy(&buf);
            if self.execute(&line).await? == Flow::Exit {
                break;
            }
        }
        Ok(())
    }

    /// Run a `;` separated command list, stopping early on `exit`.
    pub async fn run_script(&mut self, script: &str) -> io::Result<()> {
        for line in script.split(';') {
            if self.execute(line).await? == Flow::Exit {
                break;
            }
        }
        Ok(())
    }

    /// Run one command line. Only a failure to write output is returned as an
    /// error, everything else is reported on a single line.
    pub async fn execute(&mut self, line: &str) -> io::Result<Flow> {
        let line = line.trim();
        let (name, rest) = match line.strip_prefix('?') {
            Some(topic) => ("help", topic.trim()),
            None => match split_line(line) {
                Some(parts) => parts,
                None => return Ok(Flow::Continue),
            },
        };
        let Some(command) = Command::lookup(name) else {
            writeln!(self.out, "*** Unknown syntax: {line}")?;
            return Ok(Flow::Continue);
        };

        match self.run(command, rest).await {
            Ok(flow) => Ok(flow),
            Err(CommandError::Output(err)) => Err(err),
            Err(CommandError::Arg(err)) => {
                log::debug!("{:?} in \"{line}\"", err.kind());
                writeln!(self.out, "{err}")?;
                Ok(Flow::Continue)
            }
            Err(err) => {
                writeln!(self.out, "{err}")?;
                Ok(Flow::Continue)
            }
        }
    }

    async fn run(&mut self, command: Command, arg: &str) -> Result<Flow, CommandError> {
        match command {
            Command::Debug => self.debug(arg)?,
            Command::Host => self.host(arg)?,
            Command::Port => self.port(arg)?,
            Command::Timeout => self.timeout(arg)?,
            Command::UnitId => self.unit_id(arg)?,
            Command::DumpHex => set_switch(&mut self.out, "dump_hex", &mut self.display.dump_hex, arg)?,
            Command::Dump32b => set_switch(&mut self.out, "dump_32b", &mut self.display.dump_32b, arg)?,
            Command::SwapBytes => {
                set_switch(&mut self.out, "swap_bytes", &mut self.display.swap_bytes, arg)?
            }
            Command::SwapWords => {
                set_switch(&mut self.out, "swap_words", &mut self.display.swap_words, arg)?
            }
            Command::ReadCoils | Command::ReadDiscreteInputs => self.read_bits(command, arg).await?,
            Command::ReadHoldingRegisters | Command::ReadInputRegisters => {
                self.read_words(command, arg).await?
            }
            Command::WriteSingleCoil => self.write_single_coil(arg).await?,
            Command::WriteSingleRegister => self.write_single_register(arg).await?,
            Command::Wait => self.wait(arg).await?,
            Command::Version => writeln!(self.out, "{NAME} {VERSION}")?,
            Command::Help => self.help(arg)?,
            Command::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn debug(&mut self, arg: &str) -> Result<(), CommandError> {
        if !arg.is_empty() {
            match session::parse_switch(arg) {
                Some(on) => {
                    self.session.debug = on;
                    log::set_max_level(session::log_level(on, self.session.log_floor));
                }
                None => writeln!(self.out, "unable to set debug flag")?,
            }
        }
        writeln!(self.out, "debug is {}", session::switch_str(self.session.debug))?;
        Ok(())
    }

    fn host(&mut self, arg: &str) -> Result<(), CommandError> {
        if !arg.is_empty() {
            self.session.host = arg.to_lowercase();
            self.transport.close();
        }
        writeln!(self.out, "current host is \"{}\"", self.session.host)?;
        Ok(())
    }

    fn port(&mut self, arg: &str) -> Result<(), CommandError> {
        let tokens = preprocess_line(arg);
        if !tokens.is_empty() {
            let [port] = args::parse(&tokens, &[args::PORT])?;
            self.session.port = port as u16;
            self.transport.close();
        }
        writeln!(self.out, "current port value is {}", self.session.port)?;
        Ok(())
    }

    fn unit_id(&mut self, arg: &str) -> Result<(), CommandError> {
        let tokens = preprocess_line(arg);
        if !tokens.is_empty() {
            let [unit_id] = args::parse(&tokens, &[args::UNIT_ID])?;
            self.session.unit_id = unit_id as u8;
            self.transport.close();
        }
        writeln!(self.out, "unit-id is set to {}", self.session.unit_id)?;
        Ok(())
    }

    fn timeout(&mut self, arg: &str) -> Result<(), CommandError> {
        if !arg.is_empty() {
            match session::parse_timeout(arg) {
                Some(timeout) => {
                    self.session.timeout = timeout;
                    self.transport.close();
                }
                None => writeln!(self.out, "unable to set timeout")?,
            }
        }
        writeln!(self.out, "timeout is {:?} s", self.session.timeout)?;
        Ok(())
    }

    async fn read_bits(&mut self, command: Command, arg: &str) -> Result<(), CommandError> {
        let [address, count] = args::parse(&preprocess_line(arg), &args::READ_BITS)?;
        let (address, count) = (address as u16, count as u16);
        let result = if command == Command::ReadCoils {
            self.transport.read_coils(&self.session, address, count).await
        } else {
            self.transport
                .read_discrete_inputs(&self.session, address, count)
                .await
        };
        match non_empty(result) {
            Ok(bits) => self.print_lines(render::bit_table(address, count, &bits))?,
            Err(err) => self.print_failure(&err)?,
        }
        Ok(())
    }

    async fn read_words(&mut self, command: Command, arg: &str) -> Result<(), CommandError> {
        let [address, count] = args::parse(&preprocess_line(arg), &args::READ_WORDS)?;
        let (address, count) = (address as u16, count as u16);
        let result = if command == Command::ReadHoldingRegisters {
            self.transport
                .read_holding_registers(&self.session, address, count)
                .await
        } else {
            self.transport
                .read_input_registers(&self.session, address, count)
                .await
        };
        match non_empty(result) {
            Ok(words) => {
                self.print_lines(render::word_table(address, count, &words, &self.display))?
            }
            Err(err) => self.print_failure(&err)?,
        }
        Ok(())
    }

    async fn write_single_coil(&mut self, arg: &str) -> Result<(), CommandError> {
        let [address, value] = args::parse(&preprocess_line(arg), &args::WRITE_COIL)?;
        let result = self
            .transport
            .write_single_coil(&self.session, address as u16, value == 1)
            .await;
        match result {
            Ok(()) => writeln!(self.out, "coil write ok")?,
            Err(err) => writeln!(self.out, "unable to set coil ({err})")?,
        }
        Ok(())
    }

    async fn write_single_register(&mut self, arg: &str) -> Result<(), CommandError> {
        let [address, value] = args::parse(&preprocess_line(arg), &args::WRITE_REGISTER)?;
        let value = render::prepare(value as u16, &self.display);
        let result = self
            .transport
            .write_single_register(&self.session, address as u16, value)
            .await;
        match result {
            Ok(()) => writeln!(self.out, "register write ok")?,
            Err(err) => writeln!(self.out, "unable to set register ({err})")?,
        }
        Ok(())
    }

    async fn wait(&mut self, arg: &str) -> Result<(), CommandError> {
        let delay = if arg.is_empty() {
            1.0
        } else {
            arg.parse::<f64>()
                .ok()
                .filter(|d| (0.0..=MAX_WAIT).contains(d))
                .ok_or_else(|| CommandError::Value(format!("unable to wait \"{arg}\" s")))?
        };
        tokio::time::sleep(Duration::from_secs_f64(delay)).await;
        Ok(())
    }

    fn help(&mut self, topic: &str) -> Result<(), CommandError> {
        if topic.is_empty() {
            writeln!(self.out, "Documented commands (type help <topic>):")?;
            for info in COMMANDS {
                writeln!(self.out, "  {:<24}{}", info.name, info.help)?;
            }
            return Ok(());
        }
        match Command::lookup(topic) {
            Some(command) => {
                let info = command.info();
                writeln!(self.out, "{}\n\n{}", info.help, info.usage)?;
            }
            None => writeln!(self.out, "*** No help on {topic}")?,
        }
        Ok(())
    }

    fn print_lines(&mut self, lines: Vec<String>) -> io::Result<()> {
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }

    fn print_failure(&mut self, err: &TransportError) -> io::Result<()> {
        match render::failure_line(err, self.session.debug) {
            Some(line) => writeln!(self.out, "{line}"),
            None => Ok(()),
        }
    }
}

fn set_switch<W: Write>(out: &mut W, name: &str, flag: &mut bool, arg: &str) -> io::Result<()> {
    if !arg.is_empty() {
        match session::parse_switch(arg) {
            Some(on) => *flag = on,
            None => writeln!(out, "unable to set {name}")?,
        }
    }
    writeln!(out, "{name} is {}", session::switch_str(*flag))
}

/// An empty read is as useless as a failed one.
fn non_empty<V>(result: Result<Vec<V>, TransportError>) -> Result<Vec<V>, TransportError> {
    match result {
        Ok(values) if values.is_empty() => Err(TransportError::EmptyResponse),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::ArgErrorKind;

    /// In-memory stand-in for a Modbus server.
    #[derive(Default)]
    struct FakeTransport {
        bits: Vec<bool>,
        words: Vec<u16>,
        /// Answer every request with an exception response.
        exception: bool,
        calls: Vec<String>,
        written: Vec<(u16, u16)>,
        closes: usize,
    }

    impl FakeTransport {
        fn answer<V: Clone>(&self, values: &[V], count: u16) -> Result<Vec<V>, TransportError> {
            if self.exception {
                return Err(TransportError::Exception("Illegal data address".to_string()));
            }
            Ok(values.iter().take(count as usize).cloned().collect())
        }

        fn ack(&self) -> Result<(), TransportError> {
            if self.exception {
                Err(TransportError::Exception("Illegal data value".to_string()))
            } else {
                Ok(())
            }
        }
    }

    impl Transport for FakeTransport {
        async fn read_coils(
            &mut self,
            _session: &SessionConfig,
            address: u16,
            count: u16,
        ) -> Result<Vec<bool>, TransportError> {
            self.calls.push(format!("read_coils {address} {count}"));
            self.answer(&self.bits, count)
        }

        async fn read_discrete_inputs(
            &mut self,
            _session: &SessionConfig,
            address: u16,
            count: u16,
        ) -> Result<Vec<bool>, TransportError> {
            self.calls.push(format!("read_discrete_inputs {address} {count}"));
            self.answer(&self.bits, count)
        }

        async fn read_holding_registers(
            &mut self,
            _session: &SessionConfig,
            address: u16,
            count: u16,
        ) -> Result<Vec<u16>, TransportError> {
            self.calls.push(format!("read_holding_registers {address} {count}"));
            self.answer(&self.words, count)
        }

        async fn read_input_registers(
            &mut self,
            _session: &SessionConfig,
            address: u16,
            count: u16,
        ) -> Result<Vec<u16>, TransportError> {
            self.calls.push(format!("read_input_registers {address} {count}"));
            self.answer(&self.words, count)
        }

        async fn write_single_coil(
            &mut self,
            _session: &SessionConfig,
            address: u16,
            value: bool,
        ) -> Result<(), TransportError> {
            self.calls.push(format!("write_single_coil {address} {value}"));
            self.written.push((address, value.into()));
            self.ack()
        }

        async fn write_single_register(
            &mut self,
            _session: &SessionConfig,
            address: u16,
            value: u16,
        ) -> Result<(), TransportError> {
            self.calls.push(format!("write_single_register {address} {value}"));
            self.written.push((address, value));
            self.ack()
        }

        fn close(&mut self) {
            self.closes += 1;
        }
    }

    fn shell(transport: FakeTransport) -> Shell<FakeTransport, Vec<u8>> {
        Shell::new(
            SessionConfig::default(),
            DisplayConfig::default(),
            transport,
            Vec::new(),
        )
    }

    fn words(values: &[u16]) -> FakeTransport {
        FakeTransport {
            words: values.to_vec(),
            ..FakeTransport::default()
        }
    }

    impl Shell<FakeTransport, Vec<u8>> {
        fn take_output(&mut self) -> Vec<String> {
            let out = std::mem::take(&mut self.out);
            String::from_utf8(out)
                .unwrap()
                .lines()
                .map(str::to_string)
                .collect()
        }

        async fn run_lines(&mut self, line: &str) -> Vec<String> {
            self.execute(line).await.unwrap();
            self.take_output()
        }
    }

    #[tokio::test]
    async fn read_holding_registers_with_hex_address() {
        let mut shell = shell(words(&[1, 2, 3, 4]));
        let lines = shell.run_lines("read_holding_registers 0x10 4").await;
        assert_eq!(shell.transport.calls, vec!["read_holding_registers 16 4"]);
        assert_eq!(lines.len(), 5);
        assert!(lines[1].starts_with("0000 @   16 [0x0010] = 0x0001 1       1       "));
        assert!(lines[4].starts_with("0003 @   19 [0x0013] = 0x0004 4       4       "));
        assert!(lines[4].ends_with("\"\\x00\\x04\""));
    }

    #[tokio::test]
    async fn read_defaults_to_one_element_at_zero() {
        let mut shell = shell(FakeTransport {
            bits: vec![true],
            ..FakeTransport::default()
        });
        let lines = shell.run_lines("read_discrete_inputs").await;
        assert_eq!(shell.transport.calls, vec!["read_discrete_inputs 0 1"]);
        assert_eq!(lines, vec!["#    address           bool", "0000 @    0 [0x0000] = true"]);
    }

    #[tokio::test]
    async fn short_response_renders_requested_count() {
        let mut shell = shell(words(&[7, 8, 9]));
        let lines = shell.run_lines("read_input_registers 0 5").await;
        assert_eq!(lines.len(), 6);
        assert!(lines[5].ends_with("= n/a    n/a     n/a     n/a"));

        let mut shell = self::shell(FakeTransport {
            bits: vec![true, false, true],
            ..FakeTransport::default()
        });
        let lines = shell.run_lines("read_coils 0 5").await;
        assert_eq!(lines.len(), 6);
        assert!(lines[4].ends_with("= n/a"));
        assert!(lines[5].ends_with("= n/a"));
    }

    #[tokio::test]
    async fn failure_prints_one_line_unless_debug() {
        let failing = || FakeTransport {
            exception: true,
            ..FakeTransport::default()
        };

        let mut shell = shell(failing());
        let lines = shell.run_lines("read_holding_registers 0 2").await;
        assert_eq!(lines, vec!["modbus exception (Illegal data address)"]);

        let mut shell = self::shell(failing());
        shell.session.debug = true;
        let lines = shell.run_lines("read_coils 0 2").await;
        assert!(lines.is_empty());
        assert_eq!(shell.transport.calls.len(), 1);
    }

    #[tokio::test]
    async fn empty_response_is_a_failure() {
        let mut shell = shell(FakeTransport::default());
        let lines = shell.run_lines("read_holding_registers").await;
        assert_eq!(lines, vec!["no data in response"]);
    }

    #[tokio::test]
    async fn invalid_arguments_never_reach_transport() {
        let mut shell = shell(FakeTransport::default());
        let lines = shell.run_lines("write_single_coil 5 2").await;
        assert_eq!(lines, vec!["argument value: 2 not in valid range [0-1]"]);

        let err = args::parse(&preprocess_line("5 2"), &args::WRITE_COIL).unwrap_err();
        assert_eq!(err.kind(), ArgErrorKind::OutOfRange);

        let lines = shell.run_lines("read_coils 0 2001").await;
        assert_eq!(lines, vec!["argument number: 2001 not in valid range [1-2000]"]);
        let lines = shell.run_lines("read_input_registers 0 126").await;
        assert_eq!(lines, vec!["argument number: 126 not in valid range [1-125]"]);
        let lines = shell.run_lines("write_single_register 1").await;
        assert_eq!(lines, vec!["the following arguments are required: value"]);
        let lines = shell.run_lines("read_coils 1 2 3").await;
        assert_eq!(lines, vec!["unrecognized arguments: 3"]);

        assert!(shell.transport.calls.is_empty());
    }

    #[tokio::test]
    async fn writes() {
        let mut shell = shell(FakeTransport::default());
        assert_eq!(shell.run_lines("write_single_coil 0x10 1").await, vec!["coil write ok"]);
        assert_eq!(
            shell.run_lines("write_single_register 3 0xaabb").await,
            vec!["register write ok"]
        );
        assert_eq!(shell.transport.written, vec![(16, 1), (3, 0xaabb)]);

        shell.transport.exception = true;
        assert_eq!(
            shell.run_lines("write_single_coil 1 0").await,
            vec!["unable to set coil (modbus exception (Illegal data value))"]
        );
    }

    #[tokio::test]
    async fn byte_swap_applies_to_written_value() {
        let mut shell = shell(FakeTransport::default());
        shell.run_lines("swap_bytes on").await;
        shell.run_lines("write_single_register 1 0xaabb").await;
        assert_eq!(shell.transport.written, vec![(1, 0xbbaa)]);
    }

    #[tokio::test]
    async fn display_switches_change_rendering() {
        let mut shell = shell(words(&[0x1234, 0x5678]));
        assert_eq!(shell.run_lines("dump_32b on").await, vec!["dump_32b is on"]);
        assert_eq!(shell.run_lines("dump_hex on").await, vec!["dump_hex is on"]);
        assert_eq!(shell.run_lines("swap_words").await, vec!["swap_words is off"]);
        let lines = shell.run_lines("read_holding_registers 0 2").await;
        assert!(lines[1].contains(" 0x12345678 "));

        shell.run_lines("swap_words on").await;
        let lines = shell.run_lines("read_holding_registers 0 2").await;
        assert!(lines[1].contains(" 0x56781234 "));

        assert_eq!(
            shell.run_lines("swap_bytes maybe").await,
            vec!["unable to set swap_bytes", "swap_bytes is off"]
        );
    }

    #[tokio::test]
    async fn session_setters() {
        let mut shell = shell(FakeTransport::default());
        assert_eq!(shell.run_lines("port 0x1f6").await, vec!["current port value is 502"]);
        assert_eq!(shell.run_lines("port 1502").await, vec!["current port value is 1502"]);
        assert_eq!(
            shell.run_lines("port 70000").await,
            vec!["argument port: 70000 not in valid range [1-65535]"]
        );
        assert_eq!(shell.run_lines("host PLC.local").await, vec!["current host is \"plc.local\""]);
        assert_eq!(shell.prompt(), "plc.local:1502> ");
        assert_eq!(shell.run_lines("unit_id 17").await, vec!["unit-id is set to 17"]);
        assert_eq!(
            shell.run_lines("unit_id 256").await,
            vec!["argument unit_id: 256 not in valid range [1-255]"]
        );
        assert_eq!(shell.run_lines("timeout 0.5").await, vec!["timeout is 0.5 s"]);
        assert_eq!(
            shell.run_lines("timeout -2").await,
            vec!["unable to set timeout", "timeout is 0.5 s"]
        );
        assert_eq!(shell.run_lines("timeout").await, vec!["timeout is 0.5 s"]);
        // port x2, host, unit_id, timeout
        assert_eq!(shell.transport.closes, 5);
        assert_eq!(shell.session.unit_id, 17);
    }

    #[tokio::test]
    async fn debug_switch() {
        let _guard = crate::testlog::lock();
        let mut shell = shell(FakeTransport::default());
        assert_eq!(shell.run_lines("debug").await, vec!["debug is off"]);
        assert_eq!(
            shell.run_lines("debug sure").await,
            vec!["unable to set debug flag", "debug is off"]
        );
        assert_eq!(shell.run_lines("debug on").await, vec!["debug is on"]);
        assert!(shell.session.debug);
        assert_eq!(shell.run_lines("debug off").await, vec!["debug is off"]);
    }

    #[tokio::test]
    async fn empty_lines_do_not_repeat_commands() {
        let mut shell = shell(FakeTransport {
            bits: vec![true],
            ..FakeTransport::default()
        });
        let input = tokio::io::BufReader::new(&b"\nread_coils\n\n   \n"[..]);
        shell.run_interactive(input).await.unwrap();
        assert_eq!(shell.transport.calls, vec!["read_coils 0 1"]);
        let output = shell.take_output().join("\n");
        assert!(output.starts_with(INTRO));
        assert!(output.contains("localhost:502> "));
    }

    #[tokio::test]
    async fn invalid_utf8_line_does_not_end_session() {
        let mut shell = shell(FakeTransport::default());
        let input = tokio::io::BufReader::new(&b"version\n\xff\nversion\n"[..]);
        shell.run_interactive(input).await.unwrap();
        let output = shell.take_output().join("\n");
        assert_eq!(output.matches(&format!("mbt-cli {VERSION}")).count(), 2);
        assert_eq!(output.matches("*** Unknown syntax: \u{fffd}").count(), 1);
    }

    #[tokio::test]
    async fn exit_stops_interactive_loop() {
        let mut shell = shell(FakeTransport::default());
        let input = tokio::io::BufReader::new(&b"exit\nread_coils\n"[..]);
        shell.run_interactive(input).await.unwrap();
        assert!(shell.transport.calls.is_empty());
    }

    #[tokio::test]
    async fn script_runs_in_order_until_exit() {
        let mut shell = shell(words(&[5]));
        shell
            .run_script("version; read_holding_registers ;; exit; version")
            .await
            .unwrap();
        let lines = shell.take_output();
        assert_eq!(lines[0], format!("mbt-cli {VERSION}"));
        assert_eq!(lines.len(), 3);
        assert_eq!(shell.transport.calls, vec!["read_holding_registers 0 1"]);
    }

    #[tokio::test]
    async fn unknown_commands_and_help() {
        let mut shell = shell(FakeTransport::default());
        assert_eq!(shell.run_lines("  frobnicate 1 ").await, vec!["*** Unknown syntax: frobnicate 1"]);

        let lines = shell.run_lines("help").await;
        assert_eq!(lines.len(), COMMANDS.len() + 1);
        assert_eq!(
            shell.run_lines("help write_single_coil").await,
            vec![
                "Modbus function 5 (write single coil)",
                "",
                "write_single_coil address value"
            ]
        );
        assert_eq!(shell.run_lines("?port").await[2], "port [tcp port]");
        assert_eq!(shell.run_lines("help nope").await, vec!["*** No help on nope"]);
    }

    #[tokio::test]
    async fn wait_validates_delay() {
        let mut shell = shell(FakeTransport::default());
        assert!(shell.run_lines("wait 0").await.is_empty());
        assert_eq!(shell.run_lines("wait -1").await, vec!["unable to wait \"-1\" s"]);
        assert_eq!(shell.run_lines("wait soon").await, vec!["unable to wait \"soon\" s"]);
    }

    #[tokio::test(start_paused = true)]
    async fn wait_defaults_to_one_second() {
        let mut shell = shell(FakeTransport::default());
        let start = tokio::time::Instant::now();
        shell.run_lines("wait").await;
        assert!(start.elapsed() >= Duration::from_secs(1));
    }
}
