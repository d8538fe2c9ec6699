//! In-process mock of the Ocean service.
//!
//! Verifies every signed envelope, checks the claimed address against the
//! signing key, and keeps tokens / balances / transactions in memory.

#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use ocean_sdk::domain::token::wire::IssueTokenPayload;
use ocean_sdk::domain::transfer::wire::TransferPayload;
use ocean_sdk::shared::Address;
use ocean_sdk::signing::SignedEnvelope;

#[derive(Default)]
pub struct Ledger {
    next_id: u64,
    tokens: HashMap<String, Value>,
    balances: HashMap<String, BTreeMap<String, Decimal>>,
    txs: HashMap<String, Value>,
    pub writes: usize,
}

impl Ledger {
    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{}_{:04}", prefix, self.next_id)
    }
}

type Shared = Arc<Mutex<Ledger>>;

pub struct MockOcean {
    pub base_url: String,
    pub ledger: Shared,
}

impl MockOcean {
    pub fn writes(&self) -> usize {
        self.ledger.lock().unwrap().writes
    }
}

pub async fn spawn() -> MockOcean {
    let ledger: Shared = Arc::new(Mutex::new(Ledger::default()));
    let app = Router::new()
        .route("/ocean/v1/issueToken", post(issue_token))
        .route("/ocean/v1/transfer", post(transfer))
        .route("/ocean/v1/queryToken/{token_id}", get(query_token))
        .route("/ocean/v1/queryBalance/{address}", get(query_balance))
        .route("/ocean/v1/queryTx/{tx_id}", get(query_tx))
        .with_state(ledger.clone());
    let base_url = serve(app).await;
    MockOcean { base_url, ledger }
}

/// A balance endpoint that answers 503 `failures` times before succeeding.
pub async fn spawn_flaky(failures: usize) -> (String, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let app = Router::new().route(
        "/ocean/v1/queryBalance/{address}",
        get(move |Path(_address): Path<String>| {
            let counter = counter.clone();
            async move {
                let n = counter.fetch_add(1, Ordering::SeqCst);
                if n < failures {
                    (StatusCode::SERVICE_UNAVAILABLE, "try later").into_response()
                } else {
                    Json(json!({"status": true, "message": "", "data": {}})).into_response()
                }
            }
        }),
    );
    (serve(app).await, hits)
}

/// A base URL with nothing listening behind it.
pub async fn dead_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

// ── Handlers ────────────────────────────────────────────────────────────────

fn reject(message: impl Into<String>) -> Response {
    Json(json!({"status": false, "message": message.into()})).into_response()
}

/// Verify the envelope and decode its payload.
fn authenticate<T: DeserializeOwned>(envelope: &SignedEnvelope, claimed: impl Fn(&T) -> Address) -> Result<T, String> {
    match envelope.verify() {
        Ok(true) => {}
        Ok(false) => return Err("signature verification failed".into()),
        Err(e) => return Err(e.to_string()),
    }
    let payload: T = envelope.decode_origin().map_err(|e| e.to_string())?;
    let signer = envelope.signer_address().map_err(|e| e.to_string())?;
    if signer != claimed(&payload) {
        return Err("address does not match public key".into());
    }
    Ok(payload)
}

async fn issue_token(State(ledger): State<Shared>, Json(envelope): Json<SignedEnvelope>) -> Response {
    let payload: IssueTokenPayload = match authenticate(&envelope, |p: &IssueTokenPayload| p.address.clone()) {
        Ok(p) => p,
        Err(msg) => return reject(msg),
    };

    let mut ledger = ledger.lock().unwrap();
    ledger.writes += 1;
    let token_id = ledger.next_id("tok");
    ledger.tokens.insert(
        token_id.clone(),
        json!({
            "tokenID": token_id,
            "address": payload.address,
            "tokenName": payload.token_name,
            "totalNumber": payload.total_number,
        }),
    );
    ledger
        .balances
        .entry(payload.address.into_inner())
        .or_default()
        .insert(token_id.clone(), payload.total_number.value());

    Json(json!({"status": true, "message": "", "tokenID": token_id})).into_response()
}

async fn transfer(State(ledger): State<Shared>, Json(envelope): Json<SignedEnvelope>) -> Response {
    let payload: TransferPayload = match authenticate(&envelope, |p: &TransferPayload| p.from_address.clone()) {
        Ok(p) => p,
        Err(msg) => return reject(msg),
    };

    let mut ledger = ledger.lock().unwrap();
    let token = payload.token_id.as_str().to_string();
    if !ledger.tokens.contains_key(&token) {
        return reject(format!("token {} not found", token));
    }

    let amount = payload.amount.value();
    let from = payload.from_address.as_str().to_string();
    let held = ledger
        .balances
        .get(&from)
        .and_then(|h| h.get(&token))
        .copied()
        .unwrap_or(Decimal::ZERO);
    if held < amount {
        return reject("insufficient balance");
    }

    ledger.writes += 1;
    if let Some(h) = ledger.balances.get_mut(&from) {
        h.insert(token.clone(), held - amount);
    }
    *ledger
        .balances
        .entry(payload.to_address.as_str().to_string())
        .or_default()
        .entry(token.clone())
        .or_insert(Decimal::ZERO) += amount;

    let tx_id = ledger.next_id("tx");
    ledger.txs.insert(
        tx_id.clone(),
        json!({
            "txID": tx_id,
            "fromAddress": payload.from_address,
            "toAddress": payload.to_address,
            "tokenId": payload.token_id,
            "amount": payload.amount,
        }),
    );

    Json(json!({"status": true, "message": "", "txID": tx_id})).into_response()
}

async fn query_token(State(ledger): State<Shared>, Path(token_id): Path<String>) -> Response {
    let ledger = ledger.lock().unwrap();
    match ledger.tokens.get(&token_id) {
        Some(record) => Json(json!({"status": true, "message": "", "data": record})).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"status": false, "message": format!("token {} not found", token_id)})),
        )
            .into_response(),
    }
}

async fn query_balance(State(ledger): State<Shared>, Path(address): Path<String>) -> Response {
    let ledger = ledger.lock().unwrap();
    let data = match ledger.balances.get(&address) {
        Some(holdings) => {
            let map: serde_json::Map<String, Value> = holdings
                .iter()
                .map(|(token, amount)| (token.clone(), Value::String(amount.to_string())))
                .collect();
            Value::Object(map)
        }
        None => Value::Null,
    };
    Json(json!({"status": true, "message": "", "data": data})).into_response()
}

async fn query_tx(State(ledger): State<Shared>, Path(tx_id): Path<String>) -> Response {
    let ledger = ledger.lock().unwrap();
    match ledger.txs.get(&tx_id) {
        // Stored bytes come back as a JSON string.
        Some(record) => Json(json!({"status": true, "message": "", "data": record.to_string()})).into_response(),
        None => reject(format!("tx {} not found", tx_id)),
    }
}
