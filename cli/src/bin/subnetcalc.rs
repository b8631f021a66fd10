use netkit_cli::commands::{SubnetCommandLine, subnet};
use netkit_cli::terminal::logging;

fn main() -> anyhow::Result<()> {
    let commands = SubnetCommandLine::parse_args();

    logging::init(commands.verbose);

    subnet::calculate(&commands.ip, commands.subnet, commands.json)
}
