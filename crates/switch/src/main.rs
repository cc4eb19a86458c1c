// SPDX-License-Identifier: MIT

//! Switch process entry point: binds an ephemeral UDP socket, registers
//! with the controller, and drives the main loop described in §5 —
//! listener and sender on their own tasks, a single loop draining the
//! inbound queue and running the alive-ping/topology-report/neighbor-dead
//! cadence once registered.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::{error, info, warn};

use sdn_core::{ProtoLog, SystemClock};
use sdn_switch::{Cli, Dispatch, Switch, SwitchError};
use sdn_transport::{bind, InboundEvent, Listener, Sender};
use sdn_wire::Message;

/// Interval the main loop wakes on to drain the inbound queue and check
/// the ping/topology-report/neighbor-dead cadence.
const TICK: Duration = Duration::from_millis(50);

fn setup_logging(log_dir: &std::path::Path, id: u32) -> std::io::Result<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    std::fs::create_dir_all(log_dir)?;
    let file_appender = tracing_appender::rolling::never(log_dir, format!("switch{id}.operational.log"));
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry().with(filter).with(fmt::layer().with_writer(non_blocking)).init();
    Ok(guard)
}

fn dispatch_addr(dispatch: &Dispatch) -> Option<SocketAddr> {
    dispatch.host.parse::<IpAddr>().ok().map(|ip| SocketAddr::new(ip, dispatch.port))
}

fn send_all(sender: &Sender, dispatches: Vec<Dispatch>) {
    for dispatch in dispatches {
        let Some(addr) = dispatch_addr(&dispatch) else {
            warn!(host = %dispatch.host, "dropping dispatch with unparsable host");
            continue;
        };
        match sdn_wire::encode(&dispatch.message) {
            Ok(bytes) => sender.append((bytes, addr), dispatch.front),
            Err(e) => error!(error = %e, "failed to encode outbound message"),
        }
    }
}

fn handle_event(switch: &Switch<SystemClock>, event: InboundEvent) {
    let message = match sdn_wire::decode(&event.payload) {
        Ok(m) => m,
        Err(e) => {
            warn!(peer = %event.peer, error = %e, "discarding malformed datagram");
            return;
        }
    };

    match message {
        Message::RegisterResponse(data) => switch.handle_register_response(data),
        Message::KeepAlive(sender) => {
            switch.handle_keep_alive(sender, event.peer.ip().to_string(), event.peer.port())
        }
        Message::RoutingUpdate(rows) => switch.handle_routing_update(rows),
        other => {
            warn!(peer = %event.peer, ?other, "unexpected message at switch, discarding");
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), SwitchError> {
    let cli = Cli::parse();
    let log_dir = sdn_switch::env::log_dir();
    let _guard = setup_logging(&log_dir, cli.id.get())?;

    info!(id = %cli.id, controller = %cli.controller_host, port = cli.controller_port, "starting switch");

    let socket = bind(0).await?;
    let listener = Arc::new(Listener::new(socket.clone()));
    let sender = Arc::new(Sender::new(socket));
    listener.start();
    sender.start();

    let proto_log = ProtoLog::new(log_dir.join(format!("switch{}.log", cli.id.get())));
    let switch = Arc::new(Switch::new(
        SystemClock,
        proto_log,
        cli.id,
        cli.controller_host,
        cli.controller_port,
        cli.failure_id,
    ));

    send_all(&sender, vec![switch.register()]);

    let ping_time = sdn_switch::env::ping_time();
    let timeout = sdn_switch::env::timeout();

    let mut tick = tokio::time::interval(TICK);
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("shutdown signal received");
                break;
            }
            _ = tick.tick() => {
                while let Some(event) = listener.queue_pop() {
                    handle_event(&switch, event);
                }
                if switch.is_registered() {
                    if switch.ping_due(ping_time) {
                        send_all(&sender, switch.do_alive_ping());
                        send_all(&sender, vec![switch.do_topology_update()]);
                    }
                    switch.detect_neighbor_dead(timeout);
                }
            }
        }
    }

    listener.kill();
    sender.kill();
    Ok(())
}
