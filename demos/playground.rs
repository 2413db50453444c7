//! Playground for watching a delayed dependency.
//!
//! This example shows how to:
//! - Define a property on the global root after a delay
//! - Wait for it with a timeout
//! - React to ready / not ready
//!
//! Run with: cargo run --example playground -- [timeout_ms] [define_after_ms]
//!
//! Try `-- 5000 4000` (ready) and `-- 2000 4000` (not ready).

use dependency_ready::prelude::*;
use dependency_ready::root;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    println!("=== Dependency Ready Playground ===\n");

    let mut args = std::env::args().skip(1);
    let timeout_ms = parse_arg(args.next(), 5000)?;
    let define_after_ms = parse_arg(args.next(), 4000)?;

    println!("Waiting up to {}ms for globalThis.foo", timeout_ms);
    println!("foo will be defined after {}ms\n", define_after_ms);

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(define_after_ms)).await;
        root::global().define("foo", "I am foo!");
    });

    let dep_ready = DependencyReady::new("foo").with_timeout_ms(timeout_ms);
    let handle = dep_ready.on_ready(|| println!("(callback) foo is ready"));

    if dep_ready.await_ready().await {
        println!("foo is ready: {:?}", root::global().get("foo"));
    } else {
        println!("foo is not ready");
    }
    handle.join().await;

    // Reset the playground to its defaults.
    root::global().remove("foo");

    println!("\n=== Playground Complete ===");
    Ok(())
}

fn parse_arg(arg: Option<String>, default: u64) -> Result<u64> {
    match arg {
        Some(value) => value
            .parse()
            .map_err(|e| ReadyError::Other(format!("Invalid milliseconds '{}': {}", value, e))),
        None => Ok(default),
    }
}
