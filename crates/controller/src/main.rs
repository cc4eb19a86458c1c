// SPDX-License-Identifier: MIT

//! Controller process entry point: binds the UDP socket, loads the
//! config file, and drives the main loop described in §5 — listener and
//! sender on their own tasks, a single loop draining the inbound queue
//! and running the switch-dead detector every tick.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::{error, info, warn};

use sdn_core::{ProtoLog, SystemClock};
use sdn_controller::{Cli, Controller, ControllerConfig, ControllerError, Dispatch};
use sdn_transport::{bind, InboundEvent, Listener, Sender};
use sdn_wire::Message;

/// Interval the main loop wakes on to drain the inbound queue and run
/// the periodic switch-dead detector. Independent of `PING_TIME`/
/// `TIMEOUT`, which govern liveness, not poll resolution.
const TICK: Duration = Duration::from_millis(50);

fn setup_logging(log_dir: &std::path::Path) -> std::io::Result<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    std::fs::create_dir_all(log_dir)?;
    let file_appender = tracing_appender::rolling::never(log_dir, "controller.operational.log");
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

fn handle_event(controller: &Controller<SystemClock>, event: InboundEvent) -> Vec<Dispatch> {
    let message = match sdn_wire::decode(&event.payload) {
        Ok(m) => m,
        Err(e) => {
            warn!(peer = %event.peer, error = %e, "discarding malformed datagram");
            return Vec::new();
        }
    };

    match message {
        Message::RegisterRequest(sid) => {
            controller.handle_register_request(sid, event.peer.ip().to_string(), event.peer.port())
        }
        Message::TopologyUpdate(report) => {
            controller.handle_topology_update(report.sender, report.neighbors)
        }
        other => {
            warn!(peer = %event.peer, ?other, "unexpected message at controller, discarding");
            Vec::new()
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), ControllerError> {
    let cli = Cli::parse();
    let log_dir = sdn_controller::env::log_dir();
    let _guard = setup_logging(&log_dir)?;

    let config = ControllerConfig::load(&cli.config_path)?;
    info!(port = cli.port, switches = config.num_switches, "starting controller");

    let socket = bind(cli.port).await?;
    let listener = Arc::new(Listener::new(socket.clone()));
    let sender = Arc::new(Sender::new(socket));
    listener.start();
    sender.start();

    let proto_log = ProtoLog::new(log_dir.join("Controller.log"));
    let controller = Arc::new(Controller::new(
        SystemClock,
        proto_log,
        config.num_switches,
        &config.edges,
        sdn_controller::env::timeout(),
    ));

    let mut tick = tokio::time::interval(TICK);
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("shutdown signal received");
                break;
            }
            _ = tick.tick() => {
                while let Some(event) = listener.queue_pop() {
                    let dispatches = handle_event(&controller, event);
                    send_all(&sender, dispatches);
                }
                if controller.is_booted() {
                    let dispatches = controller.detect_switch_dead();
                    send_all(&sender, dispatches);
                }
            }
        }
    }

    listener.kill();
    sender.kill();
    Ok(())
}
