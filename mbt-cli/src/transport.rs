use std::fmt::Debug;
use std::io;

use thiserror::Error;
use tokio::net::lookup_host;
use tokio::time::{self, error::Elapsed};
use tokio_modbus::client::{tcp, Context};
use tokio_modbus::prelude::*;

use crate::session::SessionConfig;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("unable to resolve host \"{0}\"")]
    Resolve(String),
    #[error("connect error ({0})")]
    Connect(#[source] io::Error),
    #[error("timeout error")]
    Timeout,
    #[error("socket error ({0})")]
    Io(#[source] io::Error),
    #[error("modbus exception ({0})")]
    Exception(String),
    #[error("no data in response")]
    EmptyResponse,
}

impl TransportError {
    /// Whether the connection that produced this error should be dropped.
    fn is_fatal(&self) -> bool {
        !matches!(self, TransportError::Exception(_) | TransportError::EmptyResponse)
    }
}

/// The operations the shell needs from a Modbus client.
///
/// Every call receives the current session so an implementation can
/// (re)connect with up to date settings.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn read_coils(
        &mut self,
        session: &SessionConfig,
        address: u16,
        count: u16,
    ) -> Result<Vec<bool>, TransportError>;

    async fn read_discrete_inputs(
        &mut self,
        session: &SessionConfig,
        address: u16,
        count: u16,
    ) -> Result<Vec<bool>, TransportError>;

    async fn read_holding_registers(
        &mut self,
        session: &SessionConfig,
        address: u16,
        count: u16,
    ) -> Result<Vec<u16>, TransportError>;

    async fn read_input_registers(
        &mut self,
        session: &SessionConfig,
        address: u16,
        count: u16,
    ) -> Result<Vec<u16>, TransportError>;

    async fn write_single_coil(
        &mut self,
        session: &SessionConfig,
        address: u16,
        value: bool,
    ) -> Result<(), TransportError>;

    async fn write_single_register(
        &mut self,
        session: &SessionConfig,
        address: u16,
        value: u16,
    ) -> Result<(), TransportError>;

    /// Forget the current connection, if any.
    fn close(&mut self);
}

/// Modbus/TCP transport backed by tokio-modbus. The connection is opened on
/// first use and kept until a socket level failure or an explicit `close`.
#[derive(Default)]
pub struct TcpTransport {
    context: Option<Context>,
}

impl TcpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    async fn connected(
        &mut self,
        session: &SessionConfig,
        what: &str,
    ) -> Result<&mut Context, TransportError> {
        let context = match self.context.take() {
            Some(context) => context,
            None => connect(session).await.map_err(|err| {
                log::debug!("{what} failed: {err}");
                err
            })?,
        };
        Ok(self.context.insert(context))
    }

    fn finish<T: Debug>(
        &mut self,
        what: &str,
        result: Result<io::Result<T>, Elapsed>,
    ) -> Result<T, TransportError> {
        let result = match result {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(err)) => Err(classify(err)),
            Err(_) => Err(TransportError::Timeout),
        };
        match &result {
            Ok(value) => log::debug!("{what}: {value:?}"),
            Err(err) => {
                log::debug!("{what} failed: {err}");
                if err.is_fatal() {
                    self.close();
                }
            }
        }
        result
    }
}

impl Transport for TcpTransport {
    async fn read_coils(
        &mut self,
        session: &SessionConfig,
        address: u16,
        count: u16,
    ) -> Result<Vec<bool>, TransportError> {
        log::debug!("read coils @{address} x{count}");
        let timeout = session.timeout();
        let context = self.connected(session, "read coils").await?;
        let result = time::timeout(timeout, context.read_coils(address, count)).await;
        self.finish("read coils", result)
    }

    async fn read_discrete_inputs(
        &mut self,
        session: &SessionConfig,
        address: u16,
        count: u16,
    ) -> Result<Vec<bool>, TransportError> {
        log::debug!("read discrete inputs @{address} x{count}");
        let timeout = session.timeout();
        let context = self.connected(session, "read discrete inputs").await?;
        let result = time::timeout(timeout, context.read_discrete_inputs(address, count)).await;
        self.finish("read discrete inputs", result)
    }

    async fn read_holding_registers(
        &mut self,
        session: &SessionConfig,
        address: u16,
        count: u16,
    ) -> Result<Vec<u16>, TransportError> {
        log::debug!("read holding registers @{address} x{count}");
        let timeout = session.timeout();
        let context = self.connected(session, "read holding registers").await?;
        let result = time::timeout(timeout, context.read_holding_registers(address, count)).await;
        self.finish("read holding registers", result)
    }

    async fn read_input_registers(
        &mut self,
        session: &SessionConfig,
        address: u16,
        count: u16,
    ) -> Result<Vec<u16>, TransportError> {
        log::debug!("read input registers @{address} x{count}");
        let timeout = session.timeout();
        let context = self.connected(session, "read input registers").await?;
        let result = time::timeout(timeout, context.read_input_registers(address, count)).await;
        self.finish("read input registers", result)
    }

    async fn write_single_coil(
        &mut self,
        session: &SessionConfig,
        address: u16,
        value: bool,
    ) -> Result<(), TransportError> {
        log::debug!("write single coil @{address} = {value}");
        let timeout = session.timeout();
        let context = self.connected(session, "write single coil").await?;
        let result = time::timeout(timeout, context.write_single_coil(address, value)).await;
        self.finish("write single coil", result)
    }

    async fn write_single_register(
        &mut self,
        session: &SessionConfig,
        address: u16,
        value: u16,
    ) -> Result<(), TransportError> {
        log::debug!("write single register @{address} = {value:#06x}");
        let timeout = session.timeout();
        let context = self.connected(session, "write single register").await?;
        let result = time::timeout(timeout, context.write_single_register(address, value)).await;
        self.finish("write single register", result)
    }

    fn close(&mut self) {
        if self.context.take().is_some() {
            log::debug!("connection closed");
        }
    }
}

async fn connect(session: &SessionConfig) -> Result<Context, TransportError> {
    let timeout = session.timeout();
    let unresolved = || TransportError::Resolve(session.host.clone());

    let socket_addr = time::timeout(timeout, lookup_host((session.host.as_str(), session.port)))
        .await
        .map_err(|_| TransportError::Timeout)?
        .map_err(|err| {
            log::debug!("lookup of {} failed: {err}", session.host);
            unresolved()
        })?
        .next()
        .ok_or_else(unresolved)?;

    log::debug!("connecting to {socket_addr} (unit-id {})", session.unit_id);
    let mut context = time::timeout(timeout, tcp::connect(socket_addr))
        .await
        .map_err(|_| TransportError::Timeout)?
        .map_err(TransportError::Connect)?;
    context.set_slave(Slave(session.unit_id));
    Ok(context)
}

/// tokio-modbus reports exception responses as `io::ErrorKind::Other` errors
/// displayed as `Modbus function <code>: <exception>`.
fn classify(err: io::Error) -> TransportError {
    if err.kind() == io::ErrorKind::TimedOut {
        return TransportError::Timeout;
    }
    if err.kind() == io::ErrorKind::Other {
        let text = err.to_string();
        if let Some((_, exception)) = text
            .strip_prefix("Modbus function ")
            .and_then(|rest| rest.split_once(": "))
        {
            return TransportError::Exception(exception.to_string());
        }
    }
    TransportError::Io(err)
}
