use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use jsonrpsee::core::RpcResult;
use seele_interfaces::{Backend, BlockId, BlockchainStore, Chain, Database, P2p, StateDb};
use seele_types::{Address, Block, Hash};
use tracing::trace;

use crate::api::SeeleApiServer;
use crate::api_types::{GetBalanceResponse, GetLogsResponse, MinerInfo};
use crate::error::RPCError;

pub struct SeeleApi<B: Backend> {
    backend: Arc<B>,
}

impl<B: Backend> SeeleApi<B> {
    pub(crate) fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }
}

#[async_trait::async_trait]
impl<B: Backend + 'static> SeeleApiServer for SeeleApi<B> {
    async fn get_info(&self) -> RpcResult<MinerInfo> {
        trace!(target: "rpc::seele", "Serving seele_getInfo");

        let header = self.backend.chain_backend().current_header();
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        let miner_status = if self.backend.is_syncing() {
            "Syncing"
        } else {
            "Running"
        };

        Ok(MinerInfo {
            coinbase: header.creator,
            current_block_height: header.height,
            header_hash: header.hash(),
            shard: header.creator.shard(),
            miner_status: miner_status.to_string(),
            version: self.backend.net_version().to_string(),
            block_age: now.saturating_sub(header.create_timestamp),
            peer_cnt: self.backend.p2p_server().peer_count(),
        })
    }

    async fn get_balance(&self, account: Address) -> RpcResult<GetBalanceResponse> {
        trace!(target: "rpc::seele", %account, "Serving seele_getBalance");

        let state = self
            .backend
            .chain_backend()
            .get_current_state()
            .map_err(RPCError::from)?;
        Ok(GetBalanceResponse {
            account,
            balance: state.balance(&account),
        })
    }

    async fn get_account_nonce(&self, account: Address) -> RpcResult<u64> {
        trace!(target: "rpc::seele", %account, "Serving seele_getAccountNonce");

        let state = self
            .backend
            .chain_backend()
            .get_current_state()
            .map_err(RPCError::from)?;
        Ok(state.nonce(&account))
    }

    async fn get_block_height(&self) -> RpcResult<u64> {
        trace!(target: "rpc::seele", "Serving seele_getBlockHeight");
        Ok(self.backend.chain_backend().current_header().height)
    }

    async fn get_block_by_height(&self, height: Option<u64>) -> RpcResult<Block> {
        trace!(target: "rpc::seele", ?height, "Serving seele_getBlockByHeight");

        let id = height.map(BlockId::Height).unwrap_or(BlockId::Latest);
        Ok(self.backend.get_block(id).map_err(RPCError::from)?)
    }

    async fn get_block_by_hash(&self, hash: Hash) -> RpcResult<Block> {
        trace!(target: "rpc::seele", %hash, "Serving seele_getBlockByHash");
        Ok(self
            .backend
            .get_block(BlockId::Hash(hash))
            .map_err(RPCError::from)?)
    }

    async fn get_block_total_difficulty(&self, hash: Hash) -> RpcResult<String> {
        trace!(target: "rpc::seele", %hash, "Serving seele_getBlockTotalDifficulty");

        let difficulty = self
            .backend
            .get_block_total_difficulty(hash)
            .map_err(RPCError::from)?;
        Ok(difficulty.to_str_radix(10))
    }

    async fn get_logs(&self, height: Option<u64>) -> RpcResult<Vec<GetLogsResponse>> {
        trace!(target: "rpc::seele", ?height, "Serving seele_getLogs");

        let id = height.map(BlockId::Height).unwrap_or(BlockId::Latest);
        let block = self.backend.get_block(id).map_err(RPCError::from)?;
        let receipts = self
            .backend
            .chain_backend()
            .get_store()
            .get_receipts_by_block_hash(&block.hash())
            .map_err(RPCError::from)?;

        let mut logs = Vec::new();
        for receipt in receipts {
            for (position, log) in receipt.logs.iter().enumerate() {
                logs.push(GetLogsResponse {
                    log: log.clone(),
                    tx_hash: receipt.tx_hash,
                    log_index: position as u32,
                });
            }
        }
        Ok(logs)
    }

    async fn get_account_transactions(&self, account: Address) -> RpcResult<Vec<Hash>> {
        trace!(target: "rpc::seele", %account, "Serving seele_getAccountTransactions");

        let raw = self
            .backend
            .account_index_db()
            .get(account.as_bytes())
            .map_err(RPCError::from)?;
        match raw {
            Some(raw) => {
                let hashes = serde_json::from_slice(&raw)
                    .map_err(|err| RPCError::custom(format!("corrupted account index: {err}")))?;
                Ok(hashes)
            },
            None => Ok(vec![]),
        }
    }
}
