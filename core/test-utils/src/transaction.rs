use num_bigint::BigUint;
use seele_types::{Address, Hash, Log, Receipt, Transaction, TransactionData};

pub fn random_address() -> Address {
    Address::new(rand::random::<[u8; 20]>())
}

/// A sealed transfer transaction with a dummy signature.
pub fn transfer_tx(from: Address, to: Address, amount: u64, nonce: u64) -> Transaction {
    Transaction::new(
        TransactionData {
            from,
            to,
            amount: BigUint::from(amount),
            fee: BigUint::from(1u32),
            nonce,
            timestamp: 0,
            payload: vec![],
        },
        vec![0xaa],
    )
}

/// A transfer between two fresh random accounts.
pub fn random_tx(nonce: u64) -> Transaction {
    transfer_tx(random_address(), random_address(), 100, nonce)
}

/// A successful receipt for the given transaction carrying the given logs.
pub fn receipt_for(tx: &Transaction, logs: Vec<Log>) -> Receipt {
    Receipt {
        result: vec![],
        post_state: Hash::digest(tx.hash.as_bytes()),
        logs,
        tx_hash: tx.hash,
        contract_address: None,
        failed: false,
        used_gas: 21_000,
        total_fee: 1,
    }
}
