#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Debug,
    Host,
    Port,
    Timeout,
    UnitId,
    DumpHex,
    Dump32b,
    SwapBytes,
    SwapWords,
    ReadCoils,
    ReadDiscreteInputs,
    ReadHoldingRegisters,
    ReadInputRegisters,
    WriteSingleCoil,
    WriteSingleRegister,
    Wait,
    Version,
    Help,
    Exit,
}

pub struct CommandInfo {
    pub name: &'static str,
    pub command: Command,
    pub usage: &'static str,
    pub help: &'static str,
}

const fn info(
    name: &'static str,
    command: Command,
    usage: &'static str,
    help: &'static str,
) -> CommandInfo {
    CommandInfo {
        name,
        command,
        usage,
        help,
    }
}

/// Name lookup table, one row per `Command` variant in declaration order.
pub static COMMANDS: &[CommandInfo] = &[
    info("debug", Command::Debug, "debug [on/off]", "Check or set debug status"),
    info("host", Command::Host, "host [hostname/ip address/fqdn]", "Check or set host"),
    info("port", Command::Port, "port [tcp port]", "Check or set port"),
    info("timeout", Command::Timeout, "timeout [timeout value in s]", "Check or set timeout"),
    info("unit_id", Command::UnitId, "unit_id [unit_id]", "Check or set unit-id"),
    info("dump_hex", Command::DumpHex, "dump_hex [on/off]", "Show values in hexadecimal"),
    info("dump_32b", Command::Dump32b, "dump_32b [on/off]", "Show register pairs as 32-bit values"),
    info("swap_bytes", Command::SwapBytes, "swap_bytes [on/off]", "Swap the two bytes of each register"),
    info("swap_words", Command::SwapWords, "swap_words [on/off]", "Swap the two registers of 32-bit values"),
    info(
        "read_coils",
        Command::ReadCoils,
        "read_coils [address] [number of coils]",
        "Modbus function 1 (read coils)",
    ),
    info(
        "read_discrete_inputs",
        Command::ReadDiscreteInputs,
        "read_discrete_inputs [address] [number of inputs]",
        "Modbus function 2 (read discrete inputs)",
    ),
    info(
        "read_holding_registers",
        Command::ReadHoldingRegisters,
        "read_holding_registers [address] [number of registers]",
        "Modbus function 3 (read holding registers)",
    ),
    info(
        "read_input_registers",
        Command::ReadInputRegisters,
        "read_input_registers [address] [number of registers]",
        "Modbus function 4 (read input registers)",
    ),
    info(
        "write_single_coil",
        Command::WriteSingleCoil,
        "write_single_coil address value",
        "Modbus function 5 (write single coil)",
    ),
    info(
        "write_single_register",
        Command::WriteSingleRegister,
        "write_single_register address value",
        "Modbus function 6 (write single register)",
    ),
    info("wait", Command::Wait, "wait [delay in s]", "Pause for a while (default 1 s)"),
    info("version", Command::Version, "version", "Print version"),
    info("help", Command::Help, "help [command]", "List commands or show one command's usage"),
    info("exit", Command::Exit, "exit", "Exit from cli"),
];

impl Command {
    pub fn lookup(name: &str) -> Option<Command> {
        COMMANDS.iter().find(|c| c.name == name).map(|c| c.command)
    }

    pub fn info(self) -> &'static CommandInfo {
        // table rows follow the variant order, see `table_is_complete`
        &COMMANDS[self as usize]
    }
}

/// Split an input line into its command word and the remaining text.
pub fn split_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    Some(match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim_start()),
        None => (line, ""),
    })
}
