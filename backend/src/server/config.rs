//! HTTP server configuration: settings loaded via OrthoConfig and the
//! builder-style object handed to [`super::create_server`].

use std::io;
use std::net::{SocketAddr, TcpListener, ToSocketAddrs};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::HashingCost;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// Settings controlling the HTTP server, read from `JOBBOARD_*` environment
/// variables and command-line flags.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "JOBBOARD")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// Port to bind.
    pub port: Option<u16>,
    /// Load the default accounts at startup.
    #[ortho_config(default = true)]
    pub seed_users: bool,
    /// Argon2 memory cost override in KiB.
    pub argon2_memory_kib: Option<u32>,
    /// Argon2 pass count override.
    pub argon2_iterations: Option<u32>,
    /// Argon2 parallelism override.
    pub argon2_parallelism: Option<u32>,
}

impl ServerSettings {
    /// Return the configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured port, falling back to 3000.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Argon2 cost with any overrides applied.
    pub fn hashing_cost(&self) -> HashingCost {
        let defaults = HashingCost::default();
        HashingCost {
            memory_kib: self.argon2_memory_kib.unwrap_or(defaults.memory_kib),
            iterations: self.argon2_iterations.unwrap_or(defaults.iterations),
            parallelism: self.argon2_parallelism.unwrap_or(defaults.parallelism),
        }
    }

    /// Resolve the bind address.
    ///
    /// # Errors
    /// Returns [`io::Error`] when the host does not resolve.
    pub fn bind_addr(&self) -> io::Result<SocketAddr> {
        (self.host(), self.port())
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("host {} did not resolve to an address", self.host()),
                )
            })
    }

    /// Build the server configuration these settings describe.
    ///
    /// # Errors
    /// Returns [`io::Error`] when the bind address does not resolve.
    pub fn server_config(&self) -> io::Result<ServerConfig> {
        Ok(ServerConfig::new(self.bind_addr()?)
            .with_hashing_cost(self.hashing_cost())
            .with_seed_users(self.seed_users))
    }
}

/// Where the server accepts connections.
#[derive(Debug)]
pub(crate) enum Binding {
    Addr(SocketAddr),
    Listener(TcpListener),
}

/// Builder-style configuration for creating the HTTP server.
#[derive(Debug)]
pub struct ServerConfig {
    pub(crate) binding: Binding,
    pub(crate) hashing_cost: HashingCost,
    pub(crate) seed_users: bool,
}

impl ServerConfig {
    /// Bind to `bind_addr` with default hashing cost and seeding enabled.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            binding: Binding::Addr(bind_addr),
            hashing_cost: HashingCost::default(),
            seed_users: true,
        }
    }

    /// Serve on an already bound listener, e.g. one on an ephemeral port.
    #[must_use]
    pub fn from_listener(listener: TcpListener) -> Self {
        Self {
            binding: Binding::Listener(listener),
            hashing_cost: HashingCost::default(),
            seed_users: true,
        }
    }

    /// Override the Argon2 cost.
    #[must_use]
    pub fn with_hashing_cost(mut self, cost: HashingCost) -> Self {
        self.hashing_cost = cost;
        self
    }

    /// Enable or disable seeding of the default accounts.
    #[must_use]
    pub fn with_seed_users(mut self, seed_users: bool) -> Self {
        self.seed_users = seed_users;
        self
    }

    /// Address the server will accept connections on.
    ///
    /// # Errors
    /// Propagates [`io::Error`] when the listener cannot report its address.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        match &self.binding {
            Binding::Addr(addr) => Ok(*addr),
            Binding::Listener(listener) => listener.local_addr(),
        }
    }
}
