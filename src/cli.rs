// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Configuration comes from the environment; flags only tune logging.

use clap::Parser;

#[derive(Parser)]
#[command(name = "portline")]
#[command(about = "Show container port mappings in the browser")]
#[command(long_about = "Show container port mappings in the browser.\n\n\
    Requires API_KEY in the environment (or a .env file). The runtime socket is \
    auto-detected unless CONTAINER_RUNTIME, CONTAINER_SOCKET, or a unix:// \
    DOCKER_HOST is set.")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
