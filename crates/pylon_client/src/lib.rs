#![warn(missing_docs)]

//! Composite clients for Ethereum-compatible nodes.
//!
//! Each composite aggregates the method groups of one protocol variant
//! behind a single object sharing one transport handle. A composite either
//! owns its handle (constructed by URL, [`close`](EthClient::close) closes
//! it) or borrows one supplied by the caller (closing the composite leaves
//! the caller's handle open). The groups themselves never close the handle.

use std::sync::Arc;

pub use pylon_eth;
pub use pylon_rpc_admin::{AdminRpcClient, MinerRpcClient};
pub use pylon_rpc_client::{header, HeaderMap, RpcClient, RpcClientError};
pub use pylon_rpc_eth::client::EthRpcClient;
pub use pylon_rpc_istanbul::{IstanbulClientError, IstanbulRpcClient};
pub use pylon_rpc_quorum::QuorumRpcClient;

/// The transport handle of a composite, together with whether the composite
/// owns it.
#[derive(Clone, Debug)]
struct Transport {
    handle: Arc<RpcClient>,
    owned: bool,
}

impl Transport {
    fn dial(url: &str, extra_headers: Option<HeaderMap>) -> Result<Self, RpcClientError> {
        Ok(Self {
            handle: Arc::new(RpcClient::new(url, extra_headers)?),
            owned: true,
        })
    }

    fn borrowed(handle: Arc<RpcClient>) -> Self {
        Self {
            handle,
            owned: false,
        }
    }

    fn close(&self) {
        if self.owned {
            self.handle.close();
        }
    }
}

macro_rules! impl_composite_common {
    ($type_name:ident) => {
        impl $type_name {
            /// The transport handle shared by this composite's method
            /// groups.
            pub fn transport(&self) -> &Arc<RpcClient> {
                &self.transport.handle
            }

            /// Closes the underlying transport handle if this composite
            /// owns it. A composite built from a caller-supplied handle
            /// leaves that handle open.
            pub fn close(&self) {
                self.transport.close();
            }
        }
    };
}

/// A client for the base protocol: the `eth` method group only.
#[derive(Clone, Debug)]
pub struct EthClient {
    transport: Transport,
    eth: EthRpcClient,
}

impl EthClient {
    /// Dials the given URL. The composite owns the resulting transport
    /// handle.
    pub fn dial(url: &str, extra_headers: Option<HeaderMap>) -> Result<Self, RpcClientError> {
        Ok(Self::from_transport(Transport::dial(url, extra_headers)?))
    }

    /// Builds the composite on top of a caller-supplied handle, which the
    /// caller keeps the responsibility to close.
    pub fn new(handle: Arc<RpcClient>) -> Self {
        Self::from_transport(Transport::borrowed(handle))
    }

    fn from_transport(transport: Transport) -> Self {
        let eth = EthRpcClient::new(transport.handle.clone());
        Self { transport, eth }
    }

    /// Replaces the `eth` group, e.g. with a test double built against a
    /// different endpoint. The composite borrows the given handle.
    pub fn from_parts(handle: Arc<RpcClient>, eth: EthRpcClient) -> Self {
        Self {
            transport: Transport::borrowed(handle),
            eth,
        }
    }

    /// The `eth` method group.
    pub fn eth(&self) -> &EthRpcClient {
        &self.eth
    }
}

impl_composite_common!(EthClient);

/// A client for node operations: the `eth` and `admin` method groups plus
/// the `miner` toggles.
#[derive(Clone, Debug)]
pub struct AdminClient {
    transport: Transport,
    eth: EthRpcClient,
    admin: AdminRpcClient,
    miner: MinerRpcClient,
}

impl AdminClient {
    /// Dials the given URL. The composite owns the resulting transport
    /// handle.
    pub fn dial(url: &str, extra_headers: Option<HeaderMap>) -> Result<Self, RpcClientError> {
        Ok(Self::from_transport(Transport::dial(url, extra_headers)?))
    }

    /// Builds the composite on top of a caller-supplied handle, which the
    /// caller keeps the responsibility to close.
    pub fn new(handle: Arc<RpcClient>) -> Self {
        Self::from_transport(Transport::borrowed(handle))
    }

    fn from_transport(transport: Transport) -> Self {
        let handle = transport.handle.clone();
        Self {
            transport,
            eth: EthRpcClient::new(handle.clone()),
            admin: AdminRpcClient::new(handle.clone()),
            miner: MinerRpcClient::new(handle),
        }
    }

    /// Replaces the method groups, e.g. with test doubles built against a
    /// different endpoint. The composite borrows the given handle.
    pub fn from_parts(
        handle: Arc<RpcClient>,
        eth: EthRpcClient,
        admin: AdminRpcClient,
        miner: MinerRpcClient,
    ) -> Self {
        Self {
            transport: Transport::borrowed(handle),
            eth,
            admin,
            miner,
        }
    }

    /// The `eth` method group.
    pub fn eth(&self) -> &EthRpcClient {
        &self.eth
    }

    /// The `admin` method group.
    pub fn admin(&self) -> &AdminRpcClient {
        &self.admin
    }

    /// The `miner` toggles.
    pub fn miner(&self) -> &MinerRpcClient {
        &self.miner
    }
}

impl_composite_common!(AdminClient);

/// A client for nodes running the BFT consensus extension: the base
/// protocol, node operations, and validator management.
#[derive(Clone, Debug)]
pub struct IstanbulClient {
    transport: Transport,
    eth: EthRpcClient,
    admin: AdminRpcClient,
    istanbul: IstanbulRpcClient,
}

impl IstanbulClient {
    /// Dials the given URL. The composite owns the resulting transport
    /// handle.
    pub fn dial(url: &str, extra_headers: Option<HeaderMap>) -> Result<Self, RpcClientError> {
        Ok(Self::from_transport(Transport::dial(url, extra_headers)?))
    }

    /// Builds the composite on top of a caller-supplied handle, which the
    /// caller keeps the responsibility to close.
    pub fn new(handle: Arc<RpcClient>) -> Self {
        Self::from_transport(Transport::borrowed(handle))
    }

    fn from_transport(transport: Transport) -> Self {
        let handle = transport.handle.clone();
        Self {
            transport,
            eth: EthRpcClient::new(handle.clone()),
            admin: AdminRpcClient::new(handle.clone()),
            istanbul: IstanbulRpcClient::new(handle),
        }
    }

    /// Replaces the method groups, e.g. with test doubles built against a
    /// different endpoint. The composite borrows the given handle.
    pub fn from_parts(
        handle: Arc<RpcClient>,
        eth: EthRpcClient,
        admin: AdminRpcClient,
        istanbul: IstanbulRpcClient,
    ) -> Self {
        Self {
            transport: Transport::borrowed(handle),
            eth,
            admin,
            istanbul,
        }
    }

    /// The `eth` method group.
    pub fn eth(&self) -> &EthRpcClient {
        &self.eth
    }

    /// The `admin` method group.
    pub fn admin(&self) -> &AdminRpcClient {
        &self.admin
    }

    /// The validator management group.
    pub fn istanbul(&self) -> &IstanbulRpcClient {
        &self.istanbul
    }
}

impl_composite_common!(IstanbulClient);

/// A client for nodes running the private-transaction extension: the base
/// protocol, node operations, and confidential contract creation.
#[derive(Clone, Debug)]
pub struct QuorumClient {
    transport: Transport,
    eth: EthRpcClient,
    admin: AdminRpcClient,
    quorum: QuorumRpcClient,
}

impl QuorumClient {
    /// Dials the given URL. The composite owns the resulting transport
    /// handle.
    pub fn dial(url: &str, extra_headers: Option<HeaderMap>) -> Result<Self, RpcClientError> {
        Ok(Self::from_transport(Transport::dial(url, extra_headers)?))
    }

    /// Builds the composite on top of a caller-supplied handle, which the
    /// caller keeps the responsibility to close.
    pub fn new(handle: Arc<RpcClient>) -> Self {
        Self::from_transport(Transport::borrowed(handle))
    }

    fn from_transport(transport: Transport) -> Self {
        let handle = transport.handle.clone();
        Self {
            transport,
            eth: EthRpcClient::new(handle.clone()),
            admin: AdminRpcClient::new(handle.clone()),
            quorum: QuorumRpcClient::new(handle),
        }
    }

    /// Replaces the method groups, e.g. with test doubles built against a
    /// different endpoint. The composite borrows the given handle.
    pub fn from_parts(
        handle: Arc<RpcClient>,
        eth: EthRpcClient,
        admin: AdminRpcClient,
        quorum: QuorumRpcClient,
    ) -> Self {
        Self {
            transport: Transport::borrowed(handle),
            eth,
            admin,
            quorum,
        }
    }

    /// The `eth` method group.
    pub fn eth(&self) -> &EthRpcClient {
        &self.eth
    }

    /// The `admin` method group.
    pub fn admin(&self) -> &AdminRpcClient {
        &self.admin
    }

    /// The private-transaction group.
    pub fn quorum(&self) -> &QuorumRpcClient {
        &self.quorum
    }
}

impl_composite_common!(QuorumClient);
