#![allow(missing_docs)]
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::Context;
use tracing::{info, warn};

const HELP: &str = "\
Usage: user-example [OPTIONS]

Options:
  -h, --host <HOST>  address to bind [default: 127.0.0.1]
  -p, --port <PORT>  port to bind [default: 3000]
      --help         print this help
";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().pretty().init();

    let Some(args) = ServerArgs::from_env().context("reading command line")? else {
        info!("{HELP}");
        return Ok(());
    };

    user_example::run(args.addr()).await?;
    info!("user directory stopped");

    Ok(())
}

#[derive(Debug, Clone, Copy)]
struct ServerArgs {
    host: IpAddr,
    port: u16,
}

impl ServerArgs {
    const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
    const DEFAULT_PORT: u16 = 3000;

    /// `None` when the help is requested.
    fn from_env() -> anyhow::Result<Option<Self>> {
        let mut args = pico_args::Arguments::from_env();
        if args.contains("--help") {
            return Ok(None);
        }

        let host = args
            .opt_value_from_str(["-h", "--host"])
            .context("invalid --host")?
            .unwrap_or(Self::DEFAULT_HOST);
        let port = args
            .opt_value_from_str(["-p", "--port"])
            .context("invalid --port")?
            .unwrap_or(Self::DEFAULT_PORT);

        let unknown = args.finish();
        if !unknown.is_empty() {
            warn!(?unknown, "ignoring unknown arguments");
        }

        Ok(Some(Self { host, port }))
    }

    fn addr(self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
