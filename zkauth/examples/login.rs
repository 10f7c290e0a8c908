//! Registration and token-based login between a client and a stateless server.
//!
//! Run with `RUST_LOG=zkauth=debug` to see why rejected attempts fail.

use std::time::Duration;

use tracing_subscriber::EnvFilter;
use zkauth::{TokenConfig, ZeroKnowledge, ZkConfig, ZkError};

fn main() -> Result<(), ZkError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let server = ZeroKnowledge::from_config(
        &ZkConfig::new("secp256k1", "sha3-256").with_token(TokenConfig::new("SecretServerPassword")),
    )?;

    // Registration: the client sends only its signature.
    let client = ZeroKnowledge::new("Ed25519", "blake2b")?;
    let signature = client.create_signature("John")?;
    println!("registered signature: {signature}");

    // Login: the server hands out a short-lived token wrapping the signature.
    let challenge = server.generate_jwt(&signature, Duration::from_secs(10))?;
    let login = client.sign("John", &challenge)?;
    println!("login with correct password: {}", server.login(&login));

    let forged = client.sign("Jane", &challenge)?;
    println!("login with wrong password: {}", server.login(&forged));

    // The login payload survives a JSON round trip.
    let wire = login.to_json()?;
    let received = zkauth::Data::from_json(&wire)?;
    println!("login after transport: {}", server.login(&received));

    Ok(())
}
