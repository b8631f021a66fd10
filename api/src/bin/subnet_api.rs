use clap::Parser;
use netkit_api::args::SubnetApiArgs;
use netkit_api::subnet;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = SubnetApiArgs::parse();

    netkit_api::init_logging();

    netkit_api::serve(subnet::router(), args.server()).await
}
